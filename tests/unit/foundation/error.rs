use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShalomError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ShalomError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(ShalomError::render("x").to_string().contains("render error:"));
    assert!(
        ShalomError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = ShalomError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk full"));
}
