use super::*;
use crate::foundation::core::Vec2;

fn scalar_tween(from: f64, to: f64, ms: f64) -> Tween {
    Tween::new(Snapshot::scalar("v", from))
        .to(Snapshot::scalar("v", to))
        .duration(ms)
}

#[test]
fn defaults() {
    let n = Neuron::default();
    assert_eq!(n.ease(), Ease::OutCirc);
    assert_eq!(n.duration_ms(), DEFAULT_NEURON_DURATION_MS);
    assert!(!n.is_playing());
    assert_eq!(n.active_len(), 0);
}

#[test]
fn timing_setters_validate() {
    let mut n = Neuron::default();
    assert!(n.set_duration(-1.0).is_err());
    assert!(n.set_delay(f64::INFINITY).is_err());
    assert!(Neuron::new(f64::NAN).is_err());
    n.set_delay(40.0).unwrap();
    assert_eq!(n.delay_ms(), 40.0);
    assert!(n.set_easing("nope").is_err());
    assert_eq!(n.ease(), Ease::OutCirc);
}

#[test]
fn tweens_step_in_insertion_order() {
    let mut n = Neuron::default();
    n.spawn(Target::Scalar(0), scalar_tween(0.0, 1.0, 100.0))
        .unwrap();
    n.spawn(Target::Scalar(1), scalar_tween(0.0, 1.0, 100.0))
        .unwrap();
    n.spawn(Target::Point(2), Tween::new(Snapshot::xy(Vec2::ZERO)))
        .unwrap();

    let mut seen = Vec::new();
    let _ = n.update(10.0, |t, _| seen.push(t));
    assert_eq!(
        seen,
        vec![Target::Scalar(0), Target::Scalar(1), Target::Point(2)]
    );
}

#[test]
fn each_tween_ends_exactly_once() {
    let mut n = Neuron::default();
    n.spawn(Target::Scalar(0), scalar_tween(0.0, 1.0, 50.0))
        .unwrap();
    n.spawn(Target::Scalar(1), scalar_tween(0.0, 1.0, 100.0))
        .unwrap();

    let t = n.update(60.0, |_, _| {});
    assert_eq!(t.ended, 1);
    assert_eq!(n.active_len(), 1);

    let t = n.update(60.0, |_, _| {});
    assert_eq!(t.ended, 1);
    assert_eq!(n.active_len(), 0);

    let t = n.update(60.0, |_, _| {});
    assert_eq!(t, Tick::default());
}

#[test]
fn barrier_end_is_reported() {
    let mut n = Neuron::default();
    n.spawn(Target::Barrier, Tween::new(Snapshot::scalar("b", 0.0)).duration(30.0))
        .unwrap();
    assert!(!n.update(20.0, |_, _| {}).barrier);
    assert!(n.update(20.0, |_, _| {}).barrier);
}

#[test]
fn final_value_is_exact() {
    let mut n = Neuron::default();
    n.spawn(
        Target::Scalar(0),
        scalar_tween(0.0, 0.3, 100.0).ease(Ease::OutElastic),
    )
    .unwrap();
    let mut last = None;
    for _ in 0..20 {
        let _ = n.update(16.7, |_, s| last = s.get("v"));
    }
    assert_eq!(last, Some(0.3));
}

#[test]
fn remove_is_idempotent() {
    let mut n = Neuron::default();
    let id = n
        .spawn(Target::Scalar(0), scalar_tween(0.0, 1.0, 100.0))
        .unwrap();
    assert!(n.remove(id));
    assert!(!n.remove(id));
    let mut calls = 0;
    let _ = n.update(200.0, |_, _| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn spawn_rejects_mismatched_tween() {
    let mut n = Neuron::default();
    let bad = Tween::new(Snapshot::scalar("v", 0.0)).to(Snapshot::xy(Vec2::ZERO));
    assert!(n.spawn(Target::Scalar(0), bad).is_err());
    assert_eq!(n.active_len(), 0);
}

#[test]
fn stop_all_completes_everything() {
    let mut n = Neuron::default();
    n.spawn(Target::Scalar(0), scalar_tween(0.0, 9.0, 100.0))
        .unwrap();
    n.spawn(Target::Barrier, Tween::new(Snapshot::scalar("b", 0.0)))
        .unwrap();
    let mut values = Vec::new();
    let t = n.stop_all(|target, s| values.push((target, s.get("v"))));
    assert_eq!(t.ended, 2);
    assert!(t.barrier);
    assert_eq!(values[0], (Target::Scalar(0), Some(9.0)));
    assert_eq!(n.active_len(), 0);
}

#[test]
fn negative_delta_does_not_rewind() {
    let mut n = Neuron::default();
    let _ = n.update(10.0, |_, _| {});
    let _ = n.update(-5.0, |_, _| {});
    assert_eq!(n.now_ms(), 10.0);
}
