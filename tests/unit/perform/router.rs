use super::*;

#[test]
fn defaults_read_full_level() {
    let r = ConstantRouter::default();
    assert_eq!(r.depth(), 128);
    assert_eq!(r.band(32, false), 1.0);
    assert_eq!(r.band(32, true), 1.0);
    assert_eq!(r.band(128, false), 0.0);
    assert_eq!(r.damp(), DEFAULT_DAMP);
}

#[test]
fn onset_predicates_are_fixed() {
    let r = ConstantRouter::default();
    assert!(r.is_kick());
    assert!(r.is_hat());
    assert!(r.is_onset());
    assert!(!r.is_snare());
    assert!(r.is_range(0, 10, 0.5));
}

#[test]
fn smoothed_band_follows_level_changes() {
    let mut r = ConstantRouter::new(16, 0.0);
    r.set_level(1.0);
    r.update();
    let first = r.band(0, true);
    assert!(first > 0.0 && first < 1.0);
    for _ in 0..2_000 {
        r.update();
    }
    assert_eq!(r.band(0, true), 1.0);
}

#[test]
fn level_and_depth_are_clamped() {
    let mut r = ConstantRouter::new(0, 3.0);
    assert_eq!(r.depth(), 1);
    assert_eq!(r.level(), 1.0);
    r.set_level(-1.0);
    assert_eq!(r.band(0, false), 0.0);
    r.set_depth(4);
    assert_eq!(r.depth(), 4);
}
