use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        NeuronalError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        NeuronalError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        NeuronalError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        NeuronalError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = NeuronalError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
