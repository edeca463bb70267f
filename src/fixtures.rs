/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Built-in scenarios, one per data shape and chart family
//!
//! Every call to [`catalog`] generates fresh presentation and slide ids so
//! repeated runs never collide in the service's storage.

use crate::model::analytics::{AnalyticsType, ChartType};
use crate::model::requests::{
    AnalyticsRequest, BubblePoint, DataPayload, LabelValue, MatrixCell, OhlcBar, SeriesDataset,
    XyPoint,
};
use crate::utils::id::presentation_id;
use crate::verify::{Check, ExpectedError, Scenario};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

static HORIZONTAL_AXIS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"indexAxis["']?\s*:\s*["']y["']"#).expect("valid index axis regex")
});

/// Quarterly revenue, single series
pub fn quarterly_revenue() -> DataPayload {
    DataPayload::Points(vec![
        LabelValue::new("Q1 2024", 125_000.0),
        LabelValue::new("Q2 2024", 145_000.0),
        LabelValue::new("Q3 2024", 162_000.0),
        LabelValue::new("Q4 2024", 178_000.0),
    ])
}

/// Two years of quarterly revenue, one dataset per year
pub fn revenue_by_year() -> DataPayload {
    DataPayload::Series {
        labels: vec!["Q1".into(), "Q2".into(), "Q3".into(), "Q4".into()],
        datasets: vec![
            SeriesDataset {
                label: "2023".into(),
                data: vec![98_000.0, 112_000.0, 121_000.0, 140_000.0],
            },
            SeriesDataset {
                label: "2024".into(),
                data: vec![125_000.0, 145_000.0, 162_000.0, 178_000.0],
            },
        ],
    }
}

/// Market share by competitor
pub fn market_share() -> DataPayload {
    DataPayload::Points(vec![
        LabelValue::new("Our Company", 35.0),
        LabelValue::new("Competitor A", 28.0),
        LabelValue::new("Competitor B", 22.0),
        LabelValue::new("Others", 15.0),
    ])
}

/// Marketing spend against revenue, each point labeled with its campaign
pub fn spend_vs_revenue() -> DataPayload {
    let points = [
        (10.0, 120.0, "Search"),
        (15.0, 150.0, "Social"),
        (20.0, 210.0, "Display"),
        (25.0, 240.0, "Video"),
        (30.0, 310.0, "Email"),
    ];
    DataPayload::Xy(
        points
            .iter()
            .map(|&(x, y, label)| XyPoint {
                x,
                y,
                label: Some(label.to_string()),
            })
            .collect(),
    )
}

/// Products by price, volume and margin
pub fn product_portfolio() -> DataPayload {
    let points = [
        (20.0, 450.0, 8.0, "Basic"),
        (45.0, 300.0, 15.0, "Standard"),
        (80.0, 180.0, 22.0, "Premium"),
        (150.0, 60.0, 12.0, "Enterprise"),
    ];
    DataPayload::Bubble(
        points
            .iter()
            .map(|&(x, y, r, label)| BubblePoint {
                x,
                y,
                r,
                label: Some(label.to_string()),
            })
            .collect(),
    )
}

/// Regional performance per quarter
pub fn regional_heatmap() -> DataPayload {
    let regions = ["North", "South", "East", "West"];
    let quarters = ["Q1", "Q2", "Q3", "Q4"];
    let mut cells = Vec::with_capacity(regions.len() * quarters.len());
    for (ri, region) in regions.iter().enumerate() {
        for (qi, quarter) in quarters.iter().enumerate() {
            cells.push(MatrixCell {
                x: (*quarter).to_string(),
                y: (*region).to_string(),
                v: 60.0 + (ri * 7 + qi * 5) as f64,
            });
        }
    }
    DataPayload::Matrix(cells)
}

/// One trading week of daily bars
pub fn weekly_prices() -> DataPayload {
    let bars = [
        ("2024-01-15", 150.0, 155.0, 148.0, 153.0),
        ("2024-01-16", 153.0, 158.0, 152.0, 157.0),
        ("2024-01-17", 157.0, 159.0, 151.0, 152.0),
        ("2024-01-18", 152.0, 156.0, 150.0, 155.0),
        ("2024-01-19", 155.0, 161.0, 154.0, 160.0),
    ];
    DataPayload::Ohlc(
        bars.iter()
            .map(|&(date, open, high, low, close)| OhlcBar {
                date: date.to_string(),
                open,
                high,
                low,
                close,
                volume: Some(1_000_000.0),
            })
            .collect(),
    )
}

/// Deal sizes bucketed for a distribution chart
pub fn deal_size_distribution() -> DataPayload {
    DataPayload::Points(vec![
        LabelValue::new("0-10k", 42.0),
        LabelValue::new("10-25k", 67.0),
        LabelValue::new("25-50k", 38.0),
        LabelValue::new("50-100k", 19.0),
        LabelValue::new("100k+", 7.0),
    ])
}

/// Revenue per product category
pub fn category_revenue() -> DataPayload {
    DataPayload::Points(vec![
        LabelValue::new("Software", 420.0),
        LabelValue::new("Services", 310.0),
        LabelValue::new("Hardware", 180.0),
        LabelValue::new("Training", 90.0),
    ])
}

fn labels(data: &DataPayload) -> Vec<String> {
    match data {
        DataPayload::Points(points) => points.iter().map(|p| p.label.clone()).collect(),
        DataPayload::Series { labels, .. } => labels.clone(),
        _ => Vec::new(),
    }
}

fn request(pres: &str, slide_number: u32, narrative: &str, data: DataPayload) -> AnalyticsRequest {
    AnalyticsRequest::new(narrative, data)
        .with_presentation_id(pres)
        .with_slide_number(slide_number)
        .with_context("theme", "professional")
        .with_context("audience", "executives")
        .with_context("presentation_name", "Analytics probe")
}

fn scenario(
    name: &str,
    analytics_type: AnalyticsType,
    request: AnalyticsRequest,
) -> Scenario {
    let scenario = Scenario::new(name, analytics_type, request);
    let rendered = scenario
        .expected_chart()
        .map(|chart| Check::rendered_as(&chart))
        .unwrap_or_default();
    scenario.checks(rendered).check(Check::Element2NonEmpty)
}

/// Every built-in scenario, sharing one presentation id
pub fn catalog() -> Vec<Scenario> {
    let pres = presentation_id();
    let mut scenarios = Vec::new();

    let data = quarterly_revenue();
    let expected = labels(&data);
    scenarios.push(
        scenario(
            "revenue_line",
            AnalyticsType::RevenueOverTime,
            request(&pres, 1, "Revenue grew steadily through 2024", data),
        )
        .check(Check::LabelsInclude(expected)),
    );

    scenarios.push(
        scenario(
            "quarterly_grouped_bars",
            AnalyticsType::QuarterlyComparison,
            request(&pres, 2, "2024 outperformed 2023 in every quarter", revenue_by_year()),
        )
        .check(Check::MinDatasets(2)),
    );

    scenarios.push(scenario(
        "market_share_pie",
        AnalyticsType::MarketShare,
        request(&pres, 3, "We lead the market with a 35% share", market_share()),
    ));

    scenarios.push(scenario(
        "market_share_doughnut_override",
        AnalyticsType::MarketShare,
        request(&pres, 4, "Share split across the top competitors", market_share())
            .with_chart_type(ChartType::Doughnut),
    ));

    scenarios.push(
        scenario(
            "correlation_scatter_labeled",
            AnalyticsType::CorrelationAnalysis,
            request(&pres, 5, "Spend and revenue move together", spend_vs_revenue()),
        )
        .check(Check::ScatterPointsLabeled),
    );

    scenarios.push(
        scenario(
            "portfolio_bubble",
            AnalyticsType::MultidimensionalAnalysis,
            request(&pres, 6, "Premium products carry the best margins", product_portfolio()),
        )
        .check(Check::BubbleRadiiVary),
    );

    scenarios.push(scenario(
        "regional_heatmap",
        AnalyticsType::PerformanceHeatmap,
        request(&pres, 7, "North leads every quarter", regional_heatmap()),
    ));

    scenarios.push(scenario(
        "price_candlestick",
        AnalyticsType::StockPriceMovement,
        request(&pres, 8, "The stock closed the week near its high", weekly_prices()),
    ));

    scenarios.push(scenario(
        "deal_size_histogram",
        AnalyticsType::DistributionAnalysis,
        request(&pres, 9, "Most deals land between 10k and 25k", deal_size_distribution()),
    ));

    scenarios.push(
        scenario(
            "category_ranking_horizontal",
            AnalyticsType::CategoryRanking,
            request(&pres, 10, "Software is our largest category", category_revenue()),
        )
        .check(Check::Matches(HORIZONTAL_AXIS.clone())),
    );

    scenarios.push(
        Scenario::new(
            "editor_enabled",
            AnalyticsType::RevenueOverTime,
            request(&pres, 11, "Editable revenue chart", quarterly_revenue())
                .with_option("enable_editor", json!(true)),
        )
        .check(Check::RenderedChartJsType("line".to_string())),
    );

    scenarios.push(
        Scenario::new(
            "unknown_type_rejected",
            AnalyticsType::Custom("not_a_real_analytics_type".to_string()),
            request(&pres, 12, "This template does not exist", quarterly_revenue()),
        )
        .expect_error(ExpectedError::Any),
    );

    scenarios
}

/// Looks up one built-in scenario by name
pub fn by_name(name: &str) -> Option<Scenario> {
    catalog().into_iter().find(|s| s.name == name)
}
