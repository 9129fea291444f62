use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MarqueeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MarqueeError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        MarqueeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MarqueeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: MarqueeError = serde_json::from_str::<u64>("nope").unwrap_err().into();
    assert!(matches!(err, MarqueeError::Serde(_)));
}
