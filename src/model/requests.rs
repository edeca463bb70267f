/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::analytics::ChartType;
use crate::utils::id::{presentation_id, slide_id};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Single series point: `{label, value}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelValue {
    /// Category or period label
    pub label: String,
    /// Numeric value
    pub value: f64,
}

impl LabelValue {
    /// Creates a new point
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One dataset of a multi-series payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDataset {
    /// Legend label
    pub label: String,
    /// One value per entry of the parent `labels`
    pub data: Vec<f64>,
}

/// Scatter point: `{x, y, label?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XyPoint {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Point label shown in tooltips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Bubble point: `{x, y, r, label?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubblePoint {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Radius, strictly positive
    pub r: f64,
    /// Point label shown in tooltips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Heatmap cell: `{x, y, v}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    /// Column label
    pub x: String,
    /// Row label
    pub y: String,
    /// Cell value
    pub v: f64,
}

/// Financial bar: `{date, open, high, low, close, volume?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    /// Bar date (`YYYY-MM-DD`)
    pub date: String,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// Data shapes accepted in the `data` field of an analytics request
///
/// The variants serialize without a tag, exactly as the service reads them.
/// Deserialization tries the variants in declaration order, so the most
/// specific shapes come first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPayload {
    /// `{labels, datasets}` multi-series object
    Series {
        /// Category labels shared by every dataset
        labels: Vec<String>,
        /// Datasets, each with one value per label
        datasets: Vec<SeriesDataset>,
    },
    /// Open/high/low/close bars
    Ohlc(Vec<OhlcBar>),
    /// Bubble points
    Bubble(Vec<BubblePoint>),
    /// Heatmap cells
    Matrix(Vec<MatrixCell>),
    /// Scatter points
    Xy(Vec<XyPoint>),
    /// `[{label, value}]` single series
    Points(Vec<LabelValue>),
}

impl DataPayload {
    /// Number of top level entries (points, bars, cells or labels)
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            DataPayload::Series { labels, .. } => labels.len(),
            DataPayload::Ohlc(v) => v.len(),
            DataPayload::Bubble(v) => v.len(),
            DataPayload::Matrix(v) => v.len(),
            DataPayload::Xy(v) => v.len(),
            DataPayload::Points(v) => v.len(),
        }
    }

    /// True when there is nothing to plot
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the shape, used in logs and reports
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            DataPayload::Series { .. } => "series",
            DataPayload::Ohlc(_) => "ohlc",
            DataPayload::Bubble(_) => "bubble",
            DataPayload::Matrix(_) => "matrix",
            DataPayload::Xy(_) => "xy",
            DataPayload::Points(_) => "points",
        }
    }

    /// Checks the payload is something the service can plot
    ///
    /// # Errors
    /// `AppError::InvalidInput` describing the first violation found.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "{} payload has no data",
                self.shape()
            )));
        }
        match self {
            DataPayload::Points(points) => {
                for p in points {
                    ensure_finite(p.value, &p.label)?;
                }
            }
            DataPayload::Series { labels, datasets } => {
                if datasets.is_empty() {
                    return Err(AppError::InvalidInput(
                        "series payload has no datasets".to_string(),
                    ));
                }
                for ds in datasets {
                    if ds.data.len() != labels.len() {
                        return Err(AppError::InvalidInput(format!(
                            "dataset '{}' has {} values for {} labels",
                            ds.label,
                            ds.data.len(),
                            labels.len()
                        )));
                    }
                    for v in &ds.data {
                        ensure_finite(*v, &ds.label)?;
                    }
                }
            }
            DataPayload::Xy(points) => {
                for (i, p) in points.iter().enumerate() {
                    ensure_finite(p.x, &format!("point {i} x"))?;
                    ensure_finite(p.y, &format!("point {i} y"))?;
                }
            }
            DataPayload::Bubble(points) => {
                for (i, p) in points.iter().enumerate() {
                    ensure_finite(p.x, &format!("bubble {i} x"))?;
                    ensure_finite(p.y, &format!("bubble {i} y"))?;
                    if !(p.r.is_finite() && p.r > 0.0) {
                        return Err(AppError::InvalidInput(format!(
                            "bubble {i} radius must be positive, got {}",
                            p.r
                        )));
                    }
                }
            }
            DataPayload::Matrix(cells) => {
                for c in cells {
                    ensure_finite(c.v, &format!("cell ({}, {})", c.x, c.y))?;
                }
            }
            DataPayload::Ohlc(bars) => {
                for bar in bars {
                    for v in [bar.open, bar.high, bar.low, bar.close] {
                        ensure_finite(v, &bar.date)?;
                    }
                    if bar.low > bar.open.min(bar.close) || bar.high < bar.open.max(bar.close) {
                        return Err(AppError::InvalidInput(format!(
                            "bar {} is inconsistent: low {} high {} open {} close {}",
                            bar.date, bar.low, bar.high, bar.open, bar.close
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

fn ensure_finite(value: f64, what: &str) -> Result<(), AppError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{what} is not a finite number"
        )))
    }
}

/// Body of `POST /api/v1/analytics/{layout}/{analytics_type}`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRequest {
    /// Presentation the slide belongs to
    pub presentation_id: String,
    /// Slide being generated
    pub slide_id: String,
    /// 1-based position of the slide
    pub slide_number: u32,
    /// Narrative the insights panel is written from
    pub narrative: String,
    /// Data to plot
    pub data: DataPayload,
    /// Presentation context (theme, audience, titles)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
    /// Renderer options such as `enable_editor`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,
    /// Override of the template's default chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
}

impl AnalyticsRequest {
    /// Creates a request for slide 1 with freshly generated ids
    pub fn new(narrative: impl Into<String>, data: DataPayload) -> Self {
        Self {
            presentation_id: presentation_id(),
            slide_id: slide_id(),
            slide_number: 1,
            narrative: narrative.into(),
            data,
            context: None,
            options: None,
            chart_type: None,
        }
    }

    /// Sets the presentation id
    pub fn with_presentation_id(mut self, id: impl Into<String>) -> Self {
        self.presentation_id = id.into();
        self
    }

    /// Sets the slide id
    pub fn with_slide_id(mut self, id: impl Into<String>) -> Self {
        self.slide_id = id.into();
        self
    }

    /// Sets the slide number
    pub fn with_slide_number(mut self, number: u32) -> Self {
        self.slide_number = number;
        self
    }

    /// Adds one entry to the context object
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds one entry to the options object
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Forces a chart instead of the template default
    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = Some(chart_type);
        self
    }

    /// Checks the request before it is sent
    ///
    /// # Errors
    /// `AppError::InvalidInput` when ids or narrative are blank, the slide
    /// number is zero, or the data payload is invalid.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.presentation_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "presentation_id must not be empty".to_string(),
            ));
        }
        if self.slide_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "slide_id must not be empty".to_string(),
            ));
        }
        if self.slide_number == 0 {
            return Err(AppError::InvalidInput(
                "slide_number starts at 1".to_string(),
            ));
        }
        if self.narrative.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "narrative must not be empty".to_string(),
            ));
        }
        self.data.validate()
    }
}

/// Body of `POST /generate`
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Requested chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
    /// Data to plot; the service synthesizes data when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataPayload>,
    /// Visual theme name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Chart title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free text the chart is generated from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    /// Renderer options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,
}

impl GenerateRequest {
    /// Creates a job request for a chart type
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type: Some(chart_type),
            ..Default::default()
        }
    }

    /// Sets the data
    pub fn with_data(mut self, data: DataPayload) -> Self {
        self.data = Some(data);
        self
    }

    /// Sets the theme
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Sets the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the narrative
    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = Some(narrative.into());
        self
    }

    /// Adds one renderer option
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Checks the request before it is sent
    ///
    /// # Errors
    /// `AppError::InvalidInput` when neither a chart type nor a narrative is
    /// given, or when the data payload is invalid.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.chart_type.is_none() && self.narrative.as_deref().is_none_or(str::is_empty) {
            return Err(AppError::InvalidInput(
                "a job needs a chart_type or a narrative".to_string(),
            ));
        }
        match &self.data {
            Some(data) => data.validate(),
            None => Ok(()),
        }
    }
}
