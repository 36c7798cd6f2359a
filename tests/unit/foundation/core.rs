use super::*;

const EPS: f64 = 1e-9;

#[test]
fn distance_and_angle_follow_the_ray() {
    let a = Vec2::new(1.0, 1.0);
    let b = Vec2::new(4.0, 5.0);
    assert!((a.distance(b) - 5.0).abs() < EPS);
    assert!((b.distance(a) - 5.0).abs() < EPS);

    let right = Vec2::new(10.0, 0.0);
    assert!(Vec2::ZERO.angle_between(right).abs() < EPS);
    let down = Vec2::new(0.0, 10.0);
    assert!((Vec2::ZERO.angle_between(down) - std::f64::consts::FRAC_PI_2).abs() < EPS);
}

#[test]
fn polar_offsets_from_origin() {
    let origin = Vec2::new(5.0, -2.0);
    let p = origin.polar(3.0, 0.0);
    assert!((p.x - 8.0).abs() < EPS);
    assert!((p.y + 2.0).abs() < EPS);
    assert!((origin.distance(origin.polar(7.5, 1.234)) - 7.5).abs() < EPS);
}

#[test]
fn canvas_rejects_empty_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(1280, 800).unwrap();
    assert_eq!(c.center(), Vec2::new(640.0, 400.0));
}

#[test]
fn rgba_lerp_truncates_channels() {
    let a = Rgba8::rgb(0, 10, 255);
    let b = Rgba8::rgb(255, 11, 0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgba8::rgb(127, 10, 127));
}
