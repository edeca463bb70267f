/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Chart.js config extraction from rendered chart HTML
//!
//! The service returns `element_3` as an HTML fragment: a `<canvas>`, plugin
//! `<script src>` tags and an inline script calling `new Chart(ctx, {...})`.
//! [`ChartInspection`] finds that config object and answers questions about
//! it. Configs that are valid JSON are navigated structurally; JavaScript
//! literals (unquoted keys, single quotes, callbacks) fall back to pattern
//! extraction over the config source.
//!
//! ```
//! use analytics_probe::inspect::ChartInspection;
//!
//! let html = r#"<canvas id="c1"></canvas>
//! <script>new Chart(document.getElementById('c1'), {
//!     type: 'pie',
//!     data: { labels: ['A', 'B'], datasets: [{ data: [60, 40] }] }
//! });</script>"#;
//!
//! let chart = ChartInspection::from_html(html).unwrap();
//! assert_eq!(chart.chart_type(), Some("pie"));
//! assert_eq!(chart.labels(), vec!["A", "B"]);
//! ```

/// HTML fragment helpers
pub mod html;
/// Bracket matching over JavaScript source
pub mod scan;

use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

static NEW_CHART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"new\s+Chart\s*\(").expect("valid chart regex"));
static TYPE_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"["']?\btype["']?\s*:\s*["']([A-Za-z_]+)["']"#).expect("valid type regex")
});
static LABELS_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']?\blabels["']?\s*:\s*\["#).expect("valid labels regex"));
static DATASETS_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']?\bdatasets["']?\s*:\s*\["#).expect("valid datasets regex"));
static QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""((?:[^"\\]|\\.)*)"|'((?:[^'\\]|\\.)*)'"#).expect("valid quoted regex")
});
static FLAT_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^{}]*\}").expect("valid object regex"));
static RADIUS_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:^|[{,\s])["']?r["']?\s*:\s*(-?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?)"#)
        .expect("valid radius regex")
});

fn key_regex(key: &str) -> Regex {
    // Keys come from a fixed set inside this module.
    Regex::new(&format!(r#"(?:^|[{{,\s])["']?{}["']?\s*:"#, regex::escape(key)))
        .expect("escaped key is a valid regex")
}

static X_KEY: Lazy<Regex> = Lazy::new(|| key_regex("x"));
static Y_KEY: Lazy<Regex> = Lazy::new(|| key_regex("y"));
static LABEL_KEY: Lazy<Regex> = Lazy::new(|| key_regex("label"));

/// Chart.js configuration found in a rendered chart fragment
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInspection {
    source: String,
    json: Option<Value>,
    canvas_ids: Vec<String>,
    external_scripts: Vec<String>,
}

impl ChartInspection {
    /// Locates the Chart.js config in `html`
    ///
    /// # Errors
    /// `AppError::Inspection` when no inline script constructs a chart or the
    /// config object cannot be delimited.
    pub fn from_html(html: &str) -> Result<Self, AppError> {
        let source = html::script_blocks(html)
            .into_iter()
            .find_map(config_source)
            .ok_or_else(|| {
                AppError::Inspection("no `new Chart(...)` config found in chart html".to_string())
            })?;

        let json = serde_json::from_str::<Value>(&source).ok();
        debug!(
            "Chart config located ({} bytes, {})",
            source.len(),
            if json.is_some() { "json" } else { "js literal" }
        );

        Ok(Self {
            source,
            json,
            canvas_ids: html::canvas_ids(html).into_iter().map(String::from).collect(),
            external_scripts: html::external_scripts(html)
                .into_iter()
                .map(String::from)
                .collect(),
        })
    }

    /// Config object source text
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Config as JSON when the source is strict JSON
    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// Ids of the canvases in the fragment
    #[must_use]
    pub fn canvas_ids(&self) -> &[String] {
        &self.canvas_ids
    }

    /// External script URLs in the fragment
    #[must_use]
    pub fn external_scripts(&self) -> &[String] {
        &self.external_scripts
    }

    /// True when an external script URL mentions `plugin`
    #[must_use]
    ///
    /// Mentions of the plugin inside the config itself do not count; only a
    /// `<script src>` loads it.
    pub fn has_plugin(&self, plugin: &str) -> bool {
        self.external_scripts.iter().any(|src| src.contains(plugin))
    }

    /// Top level Chart.js `type`
    #[must_use]
    pub fn chart_type(&self) -> Option<&str> {
        if let Some(json) = &self.json {
            return json.get("type").and_then(Value::as_str);
        }
        TYPE_FIELD
            .captures_iter(&self.source)
            .find(|c| c.get(0).is_some_and(|m| scan::depth_at(&self.source, m.start()) == 1))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// `data.labels`
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        if let Some(json) = &self.json {
            return json
                .pointer("/data/labels")
                .and_then(Value::as_array)
                .map(|labels| labels.iter().map(value_to_label).collect())
                .unwrap_or_default();
        }
        let Some(array) = self.field_array(&LABELS_FIELD, 2) else {
            return Vec::new();
        };
        let inner = &array[1..array.len() - 1];
        let quoted: Vec<String> = QUOTED
            .captures_iter(inner)
            .filter_map(|c| c.get(1).or_else(|| c.get(2)))
            .map(|m| unescape(m.as_str()))
            .collect();
        if !quoted.is_empty() {
            return quoted;
        }
        inner
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    /// Number of entries in `data.datasets`
    #[must_use]
    pub fn dataset_count(&self) -> usize {
        if let Some(json) = &self.json {
            return json
                .pointer("/data/datasets")
                .and_then(Value::as_array)
                .map_or(0, Vec::len);
        }
        self.datasets_source()
            .map_or(0, |array| top_level_objects(array).len())
    }

    /// Radii of every bubble point across datasets
    #[must_use]
    pub fn bubble_radii(&self) -> Vec<f64> {
        if self.json.is_some() {
            return self
                .json_points()
                .iter()
                .filter_map(|p| p.get("r").and_then(Value::as_f64))
                .collect();
        }
        self.point_sources()
            .iter()
            .filter_map(|p| RADIUS_FIELD.captures(p))
            .filter_map(|c| c.get(1)?.as_str().parse::<f64>().ok())
            .collect()
    }

    /// Number of `{x, y}` points across datasets, and how many carry a `label`
    #[must_use]
    pub fn xy_points_labeled(&self) -> (usize, usize) {
        if self.json.is_some() {
            let points = self.json_points();
            let labeled = points
                .iter()
                .filter(|p| p.get("label").is_some_and(|l| !l.is_null()))
                .count();
            return (points.len(), labeled);
        }
        let points = self.point_sources();
        let labeled = points.iter().filter(|p| LABEL_KEY.is_match(p)).count();
        (points.len(), labeled)
    }

    fn json_points(&self) -> Vec<&Value> {
        let Some(datasets) = self
            .json
            .as_ref()
            .and_then(|j| j.pointer("/data/datasets"))
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };
        datasets
            .iter()
            .filter_map(|ds| ds.get("data").and_then(Value::as_array))
            .flatten()
            .filter(|p| p.get("x").is_some() && p.get("y").is_some())
            .collect()
    }

    fn datasets_source(&self) -> Option<&str> {
        self.field_array(&DATASETS_FIELD, 2)
    }

    /// Flat `{...}` objects inside `datasets` holding both `x` and `y`
    fn point_sources(&self) -> Vec<&str> {
        let Some(datasets) = self.datasets_source() else {
            return Vec::new();
        };
        FLAT_OBJECT
            .find_iter(datasets)
            .map(|m| m.as_str())
            .filter(|obj| X_KEY.is_match(obj) && Y_KEY.is_match(obj))
            .collect()
    }

    /// First `key: [...]` array whose key sits at `depth` in the config
    fn field_array(&self, field: &Regex, depth: usize) -> Option<&str> {
        field.find_iter(&self.source).find_map(|m| {
            if scan::depth_at(&self.source, m.start()) != depth {
                return None;
            }
            scan::balanced_slice(&self.source, m.end() - 1)
        })
    }
}

/// Extracts the config object from a script body that constructs a chart
fn config_source(script: &str) -> Option<String> {
    let call = NEW_CHART.find(script)?;
    let args = scan::balanced_slice(script, call.end() - 1)?;
    let args_inner = &args[1..args.len() - 1];

    if let Some(open) = scan::find_code_byte(args_inner, 0, b'{') {
        return scan::balanced_slice(args_inner, open).map(String::from);
    }

    // `new Chart(ctx, config)`: resolve the variable declared in the script.
    let ident = args_inner.rsplit(',').next()?.trim();
    if ident.is_empty() || !ident.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return None;
    }
    let decl = Regex::new(&format!(
        r"(?:const|let|var)\s+{}\s*=\s*\{{",
        regex::escape(ident)
    ))
    .ok()?;
    let m = decl.find(script)?;
    scan::balanced_slice(script, m.end() - 1).map(String::from)
}

/// Objects at the top level of a `[...]` array source
fn top_level_objects(array: &str) -> Vec<&str> {
    let mut objects = Vec::new();
    let inner_start = 1;
    let inner_end = array.len().saturating_sub(1);
    let mut i = inner_start;
    while i < inner_end {
        match scan::find_code_byte(&array[..inner_end], i, b'{') {
            Some(open) => match scan::matching_close(array, open) {
                Some(close) => {
                    objects.push(&array[open..=close]);
                    i = close + 1;
                }
                None => break,
            },
            None => break,
        }
    }
    objects
}

fn value_to_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(parts) => parts
            .iter()
            .map(value_to_label)
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}

fn unescape(s: &str) -> String {
    s.replace("\\'", "'").replace("\\\"", "\"").replace("\\\\", "\\")
}
