use analytics_probe::model::analytics::{AnalyticsType, ChartType};
use serde_json::json;

#[test]
fn test_analytics_type_round_trips_known_names() {
    for t in AnalyticsType::KNOWN {
        assert_eq!(AnalyticsType::from(t.as_str()), t);
    }
}

#[test]
fn test_analytics_type_keeps_unknown_names() {
    let t = AnalyticsType::from("churn_waterfall");
    assert_eq!(t, AnalyticsType::Custom("churn_waterfall".to_string()));
    assert_eq!(t.to_string(), "churn_waterfall");
    assert_eq!(t.default_chart_type(), None);
}

#[test]
fn test_analytics_type_serde() {
    let value = serde_json::to_value(AnalyticsType::MarketShare).unwrap();
    assert_eq!(value, json!("market_share"));
    let parsed: AnalyticsType = serde_json::from_value(json!("correlation_analysis")).unwrap();
    assert_eq!(parsed, AnalyticsType::CorrelationAnalysis);
}

#[test]
fn test_default_chart_types() {
    assert_eq!(
        AnalyticsType::RevenueOverTime.default_chart_type(),
        Some(ChartType::Line)
    );
    assert_eq!(
        AnalyticsType::MarketShare.default_chart_type(),
        Some(ChartType::Pie)
    );
    assert_eq!(
        AnalyticsType::CorrelationAnalysis.default_chart_type(),
        Some(ChartType::Scatter)
    );
    assert_eq!(
        AnalyticsType::MultidimensionalAnalysis.default_chart_type(),
        Some(ChartType::Bubble)
    );
    assert_eq!(
        AnalyticsType::StockPriceMovement.default_chart_type(),
        Some(ChartType::Candlestick)
    );
}

#[test]
fn test_chart_type_chartjs_mapping() {
    assert_eq!(ChartType::BarHorizontal.chartjs_type(), "bar");
    assert_eq!(ChartType::Histogram.chartjs_type(), "bar");
    assert_eq!(ChartType::Area.chartjs_type(), "line");
    assert_eq!(ChartType::PolarArea.chartjs_type(), "polarArea");
    assert_eq!(ChartType::Heatmap.chartjs_type(), "matrix");
    assert_eq!(ChartType::Other("gauge".into()).chartjs_type(), "gauge");
}

#[test]
fn test_chart_type_plugins() {
    assert_eq!(
        ChartType::Heatmap.required_plugin(),
        Some("chartjs-chart-matrix")
    );
    assert_eq!(
        ChartType::Ohlc.required_plugin(),
        Some("chartjs-chart-financial")
    );
    assert_eq!(ChartType::Pie.required_plugin(), None);
}

#[test]
fn test_chart_type_serde_and_parse() {
    let parsed: ChartType = "bar_grouped".parse().unwrap();
    assert_eq!(parsed, ChartType::BarGrouped);
    assert_eq!(serde_json::to_value(ChartType::PolarArea).unwrap(), json!("polar_area"));
    let other: ChartType = serde_json::from_value(json!("funnel")).unwrap();
    assert_eq!(other, ChartType::Other("funnel".to_string()));
}
