// Shared builders for unit tests

use analytics_probe::prelude::*;
use serde_json::{Map, Value, json};

/// Chart fragment in the shape the service renders: canvas, plugin scripts
/// and an inline `new Chart` call with a JavaScript literal config
pub fn chart_html(config: &str, plugins: &[&str]) -> String {
    let mut html = String::from(
        r#"<div class="chart-container"><canvas id="chart-slide-1"></canvas></div>
<script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.0/dist/chart.umd.min.js"></script>
"#,
    );
    for plugin in plugins {
        html.push_str(&format!(
            "<script src=\"https://cdn.jsdelivr.net/npm/{plugin}@0.2.0/dist/{plugin}.min.js\"></script>\n"
        ));
    }
    html.push_str(&format!(
        "<script>\n(function() {{\n  const ctx = document.getElementById('chart-slide-1').getContext('2d');\n  new Chart(ctx, {config});\n}})();\n</script>"
    ));
    html
}

pub fn response(analytics_type: &str, chart_type: &str, element_3: String) -> AnalyticsResponse {
    AnalyticsResponse {
        content: SlideContent {
            element_2: "<ul><li>Revenue up 42%</li></ul>".to_string(),
            element_3,
        },
        metadata: AnalyticsMetadata {
            analytics_type: AnalyticsType::from(analytics_type),
            chart_type: ChartType::from(chart_type),
            layout: Some("L02".to_string()),
            generated_at: None,
            extra: Map::new(),
        },
    }
}

pub fn response_json(analytics_type: &str, chart_type: &str, element_3: &str) -> Value {
    json!({
        "content": {
            "element_2": "<ul><li>Revenue up 42%</li></ul>",
            "element_3": element_3
        },
        "metadata": {
            "analytics_type": analytics_type,
            "chart_type": chart_type,
            "layout": "L02"
        }
    })
}

pub const LINE_CONFIG: &str = r#"{
    type: 'line',
    data: {
      labels: ['Q1 2024', 'Q2 2024', 'Q3 2024', 'Q4 2024'],
      datasets: [{
        label: 'Revenue',
        data: [125000, 145000, 162000, 178000],
        borderColor: '#1a73e8'
      }]
    },
    options: {
      responsive: true,
      scales: { y: { type: 'linear', ticks: { callback: function(v) { return '$' + v / 1000 + 'k'; } } } }
    }
  }"#;

pub const SCATTER_CONFIG: &str = r#"{
    type: 'scatter',
    data: {
      datasets: [{
        label: 'Campaigns',
        data: [
          {x: 10, y: 120, label: 'Search'},
          {x: 15, y: 150, label: 'Social'},
          {x: 20, y: 210, label: 'Display'}
        ]
      }]
    },
    options: { plugins: { tooltip: { callbacks: { label: (ctx) => ctx.raw.label } } } }
  }"#;

pub const BUBBLE_CONFIG: &str = r#"{
    type: 'bubble',
    data: {
      datasets: [{
        label: 'Products',
        data: [
          {x: 20, y: 450, r: 8, label: 'Basic'},
          {x: 45, y: 300, r: 15, label: 'Standard'},
          {x: 80, y: 180, r: 22, label: 'Premium'}
        ]
      }]
    }
  }"#;

/// Config as strict JSON, the form `JSON.stringify` output takes
pub const GROUPED_BAR_JSON: &str = r##"{"type":"bar","data":{"labels":["Q1","Q2","Q3","Q4"],"datasets":[{"label":"2023","data":[98,112,121,140]},{"label":"2024","data":[125,145,162,178]}]},"options":{"indexAxis":"x"}}"##;
