use analytics_probe::error::AppError;
use analytics_probe::prelude::*;
use assert_json_diff::assert_json_eq;
use serde_json::json;

fn points() -> DataPayload {
    DataPayload::Points(vec![LabelValue::new("Q1", 125.0), LabelValue::new("Q2", 145.0)])
}

#[test]
fn test_analytics_request_wire_shape() {
    let request = AnalyticsRequest::new("Revenue is growing", points())
        .with_presentation_id("pres-1")
        .with_slide_id("slide-1")
        .with_slide_number(3)
        .with_context("theme", "professional")
        .with_option("enable_editor", true)
        .with_chart_type(ChartType::Area);

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "presentation_id": "pres-1",
            "slide_id": "slide-1",
            "slide_number": 3,
            "narrative": "Revenue is growing",
            "data": [{"label": "Q1", "value": 125.0}, {"label": "Q2", "value": 145.0}],
            "context": {"theme": "professional"},
            "options": {"enable_editor": true},
            "chart_type": "area"
        })
    );
}

#[test]
fn test_analytics_request_omits_absent_optionals() {
    let request = AnalyticsRequest::new("Revenue is growing", points());
    let value = serde_json::to_value(&request).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("context"));
    assert!(!object.contains_key("options"));
    assert!(!object.contains_key("chart_type"));
    assert!(request.presentation_id.starts_with("pres-"));
    assert!(request.slide_id.starts_with("slide-"));
    assert_eq!(request.slide_number, 1);
}

#[test]
fn test_series_payload_wire_shape() {
    let data = DataPayload::Series {
        labels: vec!["Q1".into(), "Q2".into()],
        datasets: vec![SeriesDataset {
            label: "2024".into(),
            data: vec![1.0, 2.0],
        }],
    };
    assert_json_eq!(
        serde_json::to_value(&data).unwrap(),
        json!({"labels": ["Q1", "Q2"], "datasets": [{"label": "2024", "data": [1.0, 2.0]}]})
    );
}

#[test]
fn test_payload_deserializes_to_the_right_shape() {
    let cases = [
        (json!([{"label": "A", "value": 1}]), "points"),
        (json!([{"x": 1, "y": 2, "label": "A"}]), "xy"),
        (json!([{"x": 1, "y": 2, "r": 3}]), "bubble"),
        (json!([{"x": "Q1", "y": "North", "v": 3}]), "matrix"),
        (
            json!([{"date": "2024-01-15", "open": 1, "high": 2, "low": 0.5, "close": 1.5}]),
            "ohlc",
        ),
        (json!({"labels": ["A"], "datasets": [{"label": "s", "data": [1]}]}), "series"),
    ];
    for (value, shape) in cases {
        let payload: DataPayload = serde_json::from_value(value).unwrap();
        assert_eq!(payload.shape(), shape);
    }
}

#[test]
fn test_validate_rejects_empty_data() {
    let request = AnalyticsRequest::new("Nothing", DataPayload::Points(vec![]));
    match request.validate() {
        Err(AppError::InvalidInput(msg)) => assert!(msg.contains("no data")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_validate_rejects_blank_narrative_and_slide_zero() {
    assert!(AnalyticsRequest::new("  ", points()).validate().is_err());
    assert!(
        AnalyticsRequest::new("ok", points())
            .with_slide_number(0)
            .validate()
            .is_err()
    );
    assert!(AnalyticsRequest::new("ok", points()).validate().is_ok());
}

#[test]
fn test_validate_rejects_non_finite_values() {
    let data = DataPayload::Points(vec![LabelValue::new("Q1", f64::NAN)]);
    assert!(data.validate().is_err());
}

#[test]
fn test_validate_rejects_mismatched_series() {
    let data = DataPayload::Series {
        labels: vec!["Q1".into(), "Q2".into(), "Q3".into()],
        datasets: vec![SeriesDataset {
            label: "2024".into(),
            data: vec![1.0, 2.0],
        }],
    };
    match data.validate() {
        Err(AppError::InvalidInput(msg)) => assert!(msg.contains("2 values for 3 labels")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_validate_rejects_inconsistent_ohlc() {
    let bar = OhlcBar {
        date: "2024-01-15".into(),
        open: 150.0,
        high: 149.0,
        low: 148.0,
        close: 153.0,
        volume: None,
    };
    assert!(DataPayload::Ohlc(vec![bar.clone()]).validate().is_err());
    let fixed = OhlcBar { high: 155.0, ..bar };
    assert!(DataPayload::Ohlc(vec![fixed]).validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_radius() {
    let data = DataPayload::Bubble(vec![BubblePoint {
        x: 1.0,
        y: 1.0,
        r: 0.0,
        label: None,
    }]);
    assert!(data.validate().is_err());
}

#[test]
fn test_generate_request() {
    let request = GenerateRequest::new(ChartType::BarVertical)
        .with_theme("dark")
        .with_title("Revenue");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"chart_type": "bar_vertical", "theme": "dark", "title": "Revenue"})
    );
    assert!(request.validate().is_ok());
    assert!(GenerateRequest::default().validate().is_err());
    assert!(
        GenerateRequest::default()
            .with_narrative("sales by region")
            .validate()
            .is_ok()
    );
}
