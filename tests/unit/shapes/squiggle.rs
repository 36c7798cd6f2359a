use super::*;
use crate::animation::ease::Ease;

const EPS: f64 = 1e-9;

fn squiggle() -> Squiggle {
    let mut s = Squiggle::new(Canvas::new(400, 300).unwrap(), 100.0).unwrap();
    s.set_revolutions(2.0);
    s.set_amplitude(50.0);
    s.set_distance(200.0);
    s.set_angle(0.0);
    s.set_ease(Ease::Linear);
    s
}

#[test]
fn curve_ends_on_the_base_line_endpoints() {
    let s = squiggle();
    let g = s.geometry();
    let start = g.point_on_line(0.0);
    let end = g.point_on_line(1.0);
    assert!((start - Vec2::new(100.0, 150.0)).hypot() < EPS, "{start:?}");
    assert!((end - Vec2::new(300.0, 150.0)).hypot() < EPS, "{end:?}");
}

#[test]
fn amplitude_is_perpendicular_to_the_line() {
    let s = squiggle();
    // a quarter revolution in: sin = 1, displaced along -y for angle 0
    let p = s.geometry().point_on_line(0.125);
    assert!((p.x - 125.0).abs() < EPS);
    assert!((p.y - 100.0).abs() < EPS);
}

#[test]
fn samples_cover_the_curve() {
    let s = squiggle();
    assert_eq!(s.geometry().points().len(), 256);
    assert_eq!(s.geometry().points()[0], s.geometry().point_on_line(0.0));
}

#[test]
fn reveal_then_erase() {
    let mut s = squiggle();
    s.set_color(Rgba8::WHITE);
    s.play().unwrap();
    s.update(50.0).unwrap();
    assert!((s.geometry().state() - 0.5).abs() < EPS);

    let mut ops = Vec::new();
    s.render(&mut ops);
    let DrawOp::Stroke { path, width, round, .. } = &ops[0] else {
        panic!("expected stroke");
    };
    assert_eq!(path.elements().len(), 128);
    assert_eq!(*width, 5.0);
    assert!(*round);

    s.update(50.0).unwrap();
    assert_eq!(s.phase(), Phase::AnimatingOut);
    assert_eq!(s.geometry().state(), 0.0);

    s.update(75.0).unwrap();
    let mut ops = Vec::new();
    s.render(&mut ops);
    // end point + samples above 0.75 + the moving tail point
    assert_eq!(ops[0].path().elements().len(), 1 + 63 + 1);

    s.update(25.0).unwrap();
    assert!(!s.is_playing());
}

#[test]
fn nothing_to_draw_at_the_start_of_a_reveal() {
    let mut s = squiggle();
    s.play().unwrap();
    let mut ops = Vec::new();
    s.render(&mut ops);
    assert!(ops.is_empty());
}
