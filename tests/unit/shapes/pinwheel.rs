use super::*;
use crate::animation::ease::Ease;

fn pinwheel() -> Pinwheel {
    let mut p = Pinwheel::new(Canvas::new(600, 600).unwrap(), 600.0, 3).unwrap();
    p.set_amount(4).unwrap();
    p.set_drift(0.0);
    p.set_ease(Ease::Linear);
    p
}

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn rest_points_share_the_start_angle() {
    let p = pinwheel();
    let g = p.geometry();
    assert!(g.points().iter().all(|pt| close(*pt, Vec2::new(400.0, 300.0))));
}

#[test]
fn sweep_fans_out_with_the_wave_index() {
    let p = pinwheel();
    let g = p.geometry();
    // wave 0: every point past j=0 is fully swept
    assert!(close(g.sweep(0, 1), g.sweep(0, 3)));
    // last wave: points spread over distinct angles
    assert!(!close(g.sweep(3, 1), g.sweep(3, 2)));
}

#[test]
fn sub_waves_land_in_sequence() {
    let mut p = pinwheel();
    p.play().unwrap();

    p.update(100.0).unwrap();
    let expected: Vec<Vec2> = (0..4).map(|j| p.geometry().sweep(0, j)).collect();
    for (pt, e) in p.geometry().points().iter().zip(&expected) {
        assert!(close(*pt, *e));
    }

    p.update(300.0).unwrap();
    let expected: Vec<Vec2> = (0..4).map(|j| p.geometry().sweep(3, j)).collect();
    for (pt, e) in p.geometry().points().iter().zip(&expected) {
        assert!(close(*pt, *e));
    }
    assert_eq!(p.phase(), Phase::AnimatingIn);
}

#[test]
fn exit_collapses_to_the_origin() {
    let mut p = pinwheel();
    p.play().unwrap();
    p.update(600.0).unwrap();
    assert_eq!(p.phase(), Phase::AnimatingOut);
    p.update(599.0).unwrap();
    assert!(p.geometry().points().iter().all(|pt| (*pt - Vec2::new(300.0, 300.0)).hypot() < 1.0));
    p.update(1.0).unwrap();
    assert!(!p.is_playing());
}

#[test]
fn drift_is_seeded() {
    let a = Pinwheel::new(Canvas::default(), 100.0, 11).unwrap();
    let b = Pinwheel::new(Canvas::default(), 100.0, 11).unwrap();
    assert_eq!(a.geometry().drift(), b.geometry().drift());
    assert!((0.0..TWO_PI).contains(&a.geometry().drift()));
}
