use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WalkwayError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        WalkwayError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        WalkwayError::instance("x")
            .to_string()
            .contains("instance error:")
    );
    assert!(
        WalkwayError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WalkwayError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
