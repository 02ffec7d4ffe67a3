use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CompileError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CompileError::unsupported_state("x")
            .to_string()
            .contains("unsupported state:")
    );
    assert!(
        CompileError::graph("x")
            .to_string()
            .contains("graph construction error:")
    );
    assert!(
        CompileError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CompileError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_become_serde_variant() {
    let err: CompileError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, CompileError::Serde(_)));
}
