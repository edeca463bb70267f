/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named chart template understood by the analytics route
///
/// Serialized as the snake_case identifier used in the URL path and in the
/// response metadata. Identifiers this crate does not know are kept verbatim
/// in [`AnalyticsType::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnalyticsType {
    /// Revenue trend over time
    RevenueOverTime,
    /// Side by side quarterly comparison
    QuarterlyComparison,
    /// Share of a whole
    MarketShare,
    /// Year over year growth
    YoyGrowth,
    /// KPI summary
    KpiMetrics,
    /// Two variable correlation
    CorrelationAnalysis,
    /// Three variable analysis
    MultidimensionalAnalysis,
    /// Value distribution
    DistributionAnalysis,
    /// Ranked categories
    CategoryRanking,
    /// Performance matrix
    PerformanceHeatmap,
    /// Price movement with open/high/low/close bars
    StockPriceMovement,
    /// Any other template identifier
    Custom(String),
}

impl AnalyticsType {
    /// Every known template, in catalog order
    pub const KNOWN: [AnalyticsType; 11] = [
        AnalyticsType::RevenueOverTime,
        AnalyticsType::QuarterlyComparison,
        AnalyticsType::MarketShare,
        AnalyticsType::YoyGrowth,
        AnalyticsType::KpiMetrics,
        AnalyticsType::CorrelationAnalysis,
        AnalyticsType::MultidimensionalAnalysis,
        AnalyticsType::DistributionAnalysis,
        AnalyticsType::CategoryRanking,
        AnalyticsType::PerformanceHeatmap,
        AnalyticsType::StockPriceMovement,
    ];

    /// Returns the path identifier of the template
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            AnalyticsType::RevenueOverTime => "revenue_over_time",
            AnalyticsType::QuarterlyComparison => "quarterly_comparison",
            AnalyticsType::MarketShare => "market_share",
            AnalyticsType::YoyGrowth => "yoy_growth",
            AnalyticsType::KpiMetrics => "kpi_metrics",
            AnalyticsType::CorrelationAnalysis => "correlation_analysis",
            AnalyticsType::MultidimensionalAnalysis => "multidimensional_analysis",
            AnalyticsType::DistributionAnalysis => "distribution_analysis",
            AnalyticsType::CategoryRanking => "category_ranking",
            AnalyticsType::PerformanceHeatmap => "performance_heatmap",
            AnalyticsType::StockPriceMovement => "stock_price_movement",
            AnalyticsType::Custom(name) => name,
        }
    }

    /// Chart the service renders for this template when no override is sent
    #[must_use]
    pub fn default_chart_type(&self) -> Option<ChartType> {
        let chart = match self {
            AnalyticsType::RevenueOverTime => ChartType::Line,
            AnalyticsType::QuarterlyComparison => ChartType::BarGrouped,
            AnalyticsType::MarketShare => ChartType::Pie,
            AnalyticsType::YoyGrowth => ChartType::BarVertical,
            AnalyticsType::KpiMetrics => ChartType::Doughnut,
            AnalyticsType::CorrelationAnalysis => ChartType::Scatter,
            AnalyticsType::MultidimensionalAnalysis => ChartType::Bubble,
            AnalyticsType::DistributionAnalysis => ChartType::Histogram,
            AnalyticsType::CategoryRanking => ChartType::BarHorizontal,
            AnalyticsType::PerformanceHeatmap => ChartType::Heatmap,
            AnalyticsType::StockPriceMovement => ChartType::Candlestick,
            AnalyticsType::Custom(_) => return None,
        };
        Some(chart)
    }
}

impl fmt::Display for AnalyticsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for AnalyticsType {
    fn from(value: String) -> Self {
        Self::KNOWN
            .iter()
            .find(|t| t.as_str() == value)
            .cloned()
            .unwrap_or(AnalyticsType::Custom(value))
    }
}

impl From<&str> for AnalyticsType {
    fn from(value: &str) -> Self {
        AnalyticsType::from(value.to_string())
    }
}

impl From<AnalyticsType> for String {
    fn from(value: AnalyticsType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for AnalyticsType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AnalyticsType::from(s))
    }
}

/// Chart identifier used by the service in `chart_type` fields
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartType {
    /// Line chart
    Line,
    /// Filled line chart
    Area,
    /// Vertical bars
    BarVertical,
    /// Horizontal bars
    BarHorizontal,
    /// Several datasets side by side
    BarGrouped,
    /// Several datasets stacked
    BarStacked,
    /// Pie
    Pie,
    /// Doughnut
    Doughnut,
    /// Scatter plot
    Scatter,
    /// Bubble chart
    Bubble,
    /// Radar
    Radar,
    /// Polar area
    PolarArea,
    /// Histogram rendered as bars
    Histogram,
    /// Matrix heatmap
    Heatmap,
    /// Treemap
    Treemap,
    /// Financial candlesticks
    Candlestick,
    /// Financial OHLC bars
    Ohlc,
    /// Waterfall
    Waterfall,
    /// Box plot
    Boxplot,
    /// Sankey flow
    Sankey,
    /// Any other identifier
    Other(String),
}

impl ChartType {
    const NAMED: [ChartType; 20] = [
        ChartType::Line,
        ChartType::Area,
        ChartType::BarVertical,
        ChartType::BarHorizontal,
        ChartType::BarGrouped,
        ChartType::BarStacked,
        ChartType::Pie,
        ChartType::Doughnut,
        ChartType::Scatter,
        ChartType::Bubble,
        ChartType::Radar,
        ChartType::PolarArea,
        ChartType::Histogram,
        ChartType::Heatmap,
        ChartType::Treemap,
        ChartType::Candlestick,
        ChartType::Ohlc,
        ChartType::Waterfall,
        ChartType::Boxplot,
        ChartType::Sankey,
    ];

    /// Returns the service identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::BarVertical => "bar_vertical",
            ChartType::BarHorizontal => "bar_horizontal",
            ChartType::BarGrouped => "bar_grouped",
            ChartType::BarStacked => "bar_stacked",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::Scatter => "scatter",
            ChartType::Bubble => "bubble",
            ChartType::Radar => "radar",
            ChartType::PolarArea => "polar_area",
            ChartType::Histogram => "histogram",
            ChartType::Heatmap => "heatmap",
            ChartType::Treemap => "treemap",
            ChartType::Candlestick => "candlestick",
            ChartType::Ohlc => "ohlc",
            ChartType::Waterfall => "waterfall",
            ChartType::Boxplot => "boxplot",
            ChartType::Sankey => "sankey",
            ChartType::Other(name) => name,
        }
    }

    /// Returns the `type` value the Chart.js config carries for this chart
    #[must_use]
    pub fn chartjs_type(&self) -> &str {
        match self {
            ChartType::Line | ChartType::Area => "line",
            ChartType::BarVertical
            | ChartType::BarHorizontal
            | ChartType::BarGrouped
            | ChartType::BarStacked
            | ChartType::Histogram
            | ChartType::Waterfall => "bar",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::Scatter => "scatter",
            ChartType::Bubble => "bubble",
            ChartType::Radar => "radar",
            ChartType::PolarArea => "polarArea",
            ChartType::Heatmap => "matrix",
            ChartType::Treemap => "treemap",
            ChartType::Candlestick => "candlestick",
            ChartType::Ohlc => "ohlc",
            ChartType::Boxplot => "boxplot",
            ChartType::Sankey => "sankey",
            ChartType::Other(name) => name,
        }
    }

    /// Returns the Chart.js plugin package the rendered HTML has to load
    #[must_use]
    pub fn required_plugin(&self) -> Option<&'static str> {
        match self {
            ChartType::Heatmap => Some("chartjs-chart-matrix"),
            ChartType::Treemap => Some("chartjs-chart-treemap"),
            ChartType::Candlestick | ChartType::Ohlc => Some("chartjs-chart-financial"),
            ChartType::Boxplot => Some("chartjs-chart-boxplot"),
            ChartType::Sankey => Some("chartjs-chart-sankey"),
            _ => None,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ChartType {
    fn from(value: String) -> Self {
        Self::NAMED
            .iter()
            .find(|t| t.as_str() == value)
            .cloned()
            .unwrap_or(ChartType::Other(value))
    }
}

impl From<&str> for ChartType {
    fn from(value: &str) -> Self {
        ChartType::from(value.to_string())
    }
}

impl From<ChartType> for String {
    fn from(value: ChartType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ChartType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ChartType::from(s))
    }
}
