use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuint,
        Ease::InOutSine,
        Ease::OutExpo,
        Ease::InCirc,
        Ease::OutCirc,
        Ease::InOutCirc,
    ] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease}");
        assert!(b < c, "{ease}");
    }
}

#[test]
fn progress_outside_unit_range_is_clamped() {
    assert_eq!(Ease::OutCirc.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCirc.apply(7.0), 1.0);
}

#[test]
fn back_family_overshoots() {
    assert!(Ease::InBack.apply(0.2) < 0.0);
    assert!(Ease::OutBack.apply(0.8) > 1.0);
}

#[test]
fn names_round_trip_through_the_table() {
    for ease in Ease::ALL {
        assert_eq!(Ease::from_name(ease.name()).unwrap(), ease);
        let json = serde_json::to_string(&ease).unwrap();
        assert_eq!(json, format!("\"{}\"", ease.name()));
    }
}

#[test]
fn alternate_spellings_resolve() {
    assert_eq!(Ease::from_name("Circ.out").unwrap(), Ease::OutCirc);
    assert_eq!(Ease::from_name("Quad.inOut").unwrap(), Ease::InOutQuad);
    assert_eq!(Ease::from_name("in-out-cube").unwrap(), Ease::InOutCubic);
    assert_eq!("OUT-QUAD".parse::<Ease>().unwrap(), Ease::OutQuad);
}

#[test]
fn unknown_name_is_an_animation_error() {
    let err = Ease::from_name("sideways").unwrap_err();
    assert!(matches!(err, NeuronalError::Animation(_)));
    assert!(err.to_string().contains("sideways"));
}
