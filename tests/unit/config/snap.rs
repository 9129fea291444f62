use super::*;

#[test]
fn empty_document_uses_defaults() {
    let cfg = SnapConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, SnapConfig::default());
    assert_eq!(cfg.setup_delay(), Duration::from_millis(100));
    assert_eq!(cfg.tolerance, 0.02);
}

#[test]
fn partial_settle_is_merged_with_defaults() {
    let json = r#"{ "tolerance": 0.05, "settle": { "max_duration_s": 1.0 } }"#;
    let cfg = SnapConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.tolerance, 0.05);
    assert_eq!(cfg.settle.max_duration_s, 1.0);
    assert_eq!(cfg.settle.min_duration_s, 0.2);
}

#[test]
fn invalid_values_are_rejected() {
    for json in [
        r#"{ "tolerance": -0.1 }"#,
        r#"{ "tolerance": 2.0 }"#,
        r#"{ "settle": { "min_duration_s": 1.0, "max_duration_s": 0.5 } }"#,
        r#"{ "settle": { "delay_s": -1.0 } }"#,
    ] {
        let err = SnapConfig::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, MarqueeError::Validation(_)), "{json}");
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SnapConfig::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(matches!(err, MarqueeError::Serde(_)));
}

#[test]
fn snap_input_builds_coordinator() {
    let json = r#"{ "max_scroll": 1000, "regions": [ { "start": 200, "end": 400 } ] }"#;
    let input = SnapInput::from_reader(json.as_bytes()).unwrap();
    let c = input.coordinator(&SnapConfig::default()).unwrap();
    assert!((c.snap(0.25) - 0.3).abs() < 1e-12);

    let empty = SnapInput::from_reader(r#"{ "max_scroll": 1000 }"#.as_bytes()).unwrap();
    assert!(empty.coordinator(&SnapConfig::default()).is_none());
}

#[test]
fn missing_file_is_reported() {
    let err = SnapConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
