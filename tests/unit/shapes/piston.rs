use super::*;
use crate::animation::ease::Ease;
use kurbo::Shape as _;

fn piston(w: f64) -> Piston {
    let mut p = Piston::with_bounds(100.0, 10.0, w, 20.0, 100.0).unwrap();
    p.set_ease(Ease::Linear);
    p
}

#[test]
fn default_bar_is_centered() {
    let p = Piston::new(Canvas::new(600, 600).unwrap(), 100.0).unwrap();
    assert_eq!(p.geometry().target(), (150.0, 250.0, 300.0, 100.0));
    assert_eq!(p.geometry().width(), 0.0);
}

#[test]
fn grows_then_slides_off_the_far_end() {
    let mut p = piston(200.0);
    p.play().unwrap();
    p.update(50.0).unwrap();
    assert_eq!(p.geometry().width(), 100.0);
    p.update(50.0).unwrap();
    assert_eq!(p.geometry().width(), 200.0);
    assert_eq!(p.phase(), Phase::AnimatingOut);

    p.update(50.0).unwrap();
    assert_eq!(p.geometry().x(), 200.0);
    assert_eq!(p.geometry().width(), 100.0);

    p.update(50.0).unwrap();
    assert!(!p.is_playing());
    assert_eq!(p.geometry().x(), 100.0);
    assert_eq!(p.geometry().width(), 0.0);
}

#[test]
fn delay_holds_the_bar_closed() {
    let mut p = piston(200.0);
    p.set_delay(40.0).unwrap();
    p.play().unwrap();
    p.update(39.0).unwrap();
    assert_eq!(p.geometry().width(), 0.0);
    p.update(11.0).unwrap();
    assert!(p.geometry().width() > 0.0);
}

#[test]
fn negative_width_renders_leftward() {
    let mut p = piston(-200.0);
    p.play().unwrap();
    p.update(100.0).unwrap();
    let mut ops = Vec::new();
    p.render(&mut ops);
    let bb = ops[0].path().bounding_box();
    assert_eq!((bb.x0, bb.x1), (-100.0, 100.0));
}

#[test]
fn initialize_is_guarded_while_playing() {
    let mut p = piston(200.0);
    p.play().unwrap();
    assert!(!p.initialize(0.0, 0.0, 1.0, 1.0));
    assert_eq!(p.geometry().target().0, 100.0);
}
