/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::inspect::ChartInspection;
use crate::model::analytics::{AnalyticsType, ChartType};
use crate::model::responses::AnalyticsResponse;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

/// One expectation about an analytics response
#[derive(Debug, Clone)]
pub enum Check {
    /// `metadata.chart_type` equals the given chart
    MetadataChartType(ChartType),
    /// `metadata.analytics_type` equals the given template
    MetadataAnalyticsType(AnalyticsType),
    /// The Chart.js config `type` equals the given value
    RenderedChartJsType(String),
    /// `element_3` contains the substring
    Contains(String),
    /// `element_3` does not contain the substring
    NotContains(String),
    /// `element_3` matches the pattern
    Matches(Regex),
    /// Every scatter point kept its `label` field
    ScatterPointsLabeled,
    /// Bubble points use at least two distinct radii
    BubbleRadiiVary,
    /// The config has at least this many datasets
    MinDatasets(usize),
    /// `data.labels` includes every given label
    LabelsInclude(Vec<String>),
    /// The fragment loads a Chart.js plugin whose URL contains the name
    PluginLoaded(String),
    /// `element_2` has visible text
    Element2NonEmpty,
}

impl Check {
    /// Rendered `type` plus the plugin the chart needs, if any
    #[must_use]
    pub fn rendered_as(chart_type: &ChartType) -> Vec<Check> {
        let mut checks = vec![Check::RenderedChartJsType(
            chart_type.chartjs_type().to_string(),
        )];
        if let Some(plugin) = chart_type.required_plugin() {
            checks.push(Check::PluginLoaded(plugin.to_string()));
        }
        checks
    }

    /// Compiles `pattern` into a [`Check::Matches`]
    ///
    /// # Errors
    /// The regex compilation error.
    pub fn matches(pattern: &str) -> Result<Check, regex::Error> {
        Ok(Check::Matches(Regex::new(pattern)?))
    }

    /// Evaluates the check, returning a failure description when it does not hold
    ///
    /// `chart` is `None` when no Chart.js config could be found; checks that
    /// need it fail with that reason.
    pub fn evaluate(
        &self,
        response: &AnalyticsResponse,
        chart: Option<&ChartInspection>,
    ) -> Result<(), String> {
        let html = response.chart_html();
        match self {
            Check::MetadataChartType(expected) => {
                expect_eq("metadata.chart_type", expected, &response.metadata.chart_type)
            }
            Check::MetadataAnalyticsType(expected) => expect_eq(
                "metadata.analytics_type",
                expected,
                &response.metadata.analytics_type,
            ),
            Check::Contains(needle) => {
                if html.contains(needle.as_str()) {
                    Ok(())
                } else {
                    Err(format!("element_3 does not contain {needle:?}"))
                }
            }
            Check::NotContains(needle) => {
                if html.contains(needle.as_str()) {
                    Err(format!("element_3 unexpectedly contains {needle:?}"))
                } else {
                    Ok(())
                }
            }
            Check::Matches(pattern) => {
                if pattern.is_match(html) {
                    Ok(())
                } else {
                    Err(format!("element_3 does not match /{}/", pattern.as_str()))
                }
            }
            Check::Element2NonEmpty => {
                if crate::inspect::html::visible_text(response.insights_html()).is_empty() {
                    Err("element_2 has no visible text".to_string())
                } else {
                    Ok(())
                }
            }
            chart_check => {
                let chart = chart.ok_or_else(|| "no Chart.js config in element_3".to_string())?;
                chart_check.evaluate_chart(chart)
            }
        }
    }

    fn evaluate_chart(&self, chart: &ChartInspection) -> Result<(), String> {
        match self {
            Check::RenderedChartJsType(expected) => match chart.chart_type() {
                Some(actual) if actual == expected.as_str() => Ok(()),
                Some(actual) => Err(format!(
                    "Chart.js type is {actual:?}, expected {expected:?}"
                )),
                None => Err("Chart.js config has no type".to_string()),
            },
            Check::ScatterPointsLabeled => {
                let (points, labeled) = chart.xy_points_labeled();
                if points == 0 {
                    Err("no {x, y} points found in datasets".to_owned())
                } else if labeled < points {
                    Err(format!("{} of {} points lost their label", points - labeled, points))
                } else {
                    Ok(())
                }
            }
            Check::BubbleRadiiVary => {
                let radii = chart.bubble_radii();
                let distinct: HashSet<u64> = radii.iter().map(|r| r.to_bits()).collect();
                if radii.is_empty() {
                    Err("no bubble radii found".to_string())
                } else if distinct.len() < 2 {
                    Err(format!("all {} bubbles share radius {}", radii.len(), radii[0]))
                } else {
                    Ok(())
                }
            }
            Check::MinDatasets(min) => {
                let count = chart.dataset_count();
                if count >= *min {
                    Ok(())
                } else {
                    Err(format!("{count} datasets, expected at least {min}"))
                }
            }
            Check::LabelsInclude(expected) => {
                let labels = chart.labels();
                let missing: Vec<&String> =
                    expected.iter().filter(|l| !labels.contains(*l)).collect();
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(format!("labels {missing:?} missing from {labels:?}"))
                }
            }
            Check::PluginLoaded(plugin) => {
                if chart.has_plugin(plugin) {
                    Ok(())
                } else {
                    Err(format!(
                        "plugin {plugin:?} not loaded (scripts: {:?})",
                        chart.external_scripts()
                    ))
                }
            }
            // Response level checks are handled in `evaluate`.
            _ => Ok(()),
        }
    }
}

fn expect_eq<T: PartialEq + fmt::Display>(field: &str, expected: &T, actual: &T) -> Result<(), String> {
    if expected == actual {
        Ok(())
    } else {
        Err(format!("{field} is {actual}, expected {expected}"))
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::MetadataChartType(c) => write!(f, "metadata.chart_type == {c}"),
            Check::MetadataAnalyticsType(a) => write!(f, "metadata.analytics_type == {a}"),
            Check::RenderedChartJsType(t) => write!(f, "chartjs type == {t}"),
            Check::Contains(s) => write!(f, "contains {s:?}"),
            Check::NotContains(s) => write!(f, "not contains {s:?}"),
            Check::Matches(r) => write!(f, "matches /{}/", r.as_str()),
            Check::ScatterPointsLabeled => write!(f, "scatter points labeled"),
            Check::BubbleRadiiVary => write!(f, "bubble radii vary"),
            Check::MinDatasets(n) => write!(f, "datasets >= {n}"),
            Check::LabelsInclude(l) => write!(f, "labels include {l:?}"),
            Check::PluginLoaded(p) => write!(f, "plugin {p} loaded"),
            Check::Element2NonEmpty => write!(f, "element_2 not empty"),
        }
    }
}
