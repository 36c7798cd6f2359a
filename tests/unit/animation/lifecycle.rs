use super::*;

#[derive(Debug, Default)]
struct Bar {
    size: f64,
    w: f64,
    rebuilds: usize,
}

impl Geometry for Bar {
    const NAME: &'static str = "bar";

    fn rebuild(&mut self) {
        self.rebuilds += 1;
        self.reset();
    }

    fn reset(&mut self) {
        self.w = 0.0;
    }

    fn enter(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        let t = wave.tween(Snapshot::scalar("w", self.w), Snapshot::scalar("w", self.size));
        wave.spawn(Target::Scalar(0), t)?;
        Ok(())
    }

    fn exit(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        let t = wave
            .tween(Snapshot::scalar("w", self.w), Snapshot::scalar("w", 0.0))
            .delay(20.0);
        wave.spawn(Target::Scalar(0), t)?;
        Ok(())
    }

    fn apply(&mut self, target: Target, values: &Snapshot) {
        if let (Target::Scalar(0), Some(w)) = (target, values.get("w")) {
            self.w = w;
        }
    }

    fn draw(&self, _phase: Phase, color: Rgba8, out: &mut Vec<DrawOp>) {
        out.push(DrawOp::Fill {
            path: crate::render::scene::rect(0.0, 0.0, self.w, 1.0),
            color,
        });
    }
}

fn bar(size: f64) -> Shape<Bar> {
    let mut s = Shape::from_geometry(Bar {
        size,
        ..Bar::default()
    });
    s.set_duration(100.0).unwrap();
    s.set_ease(Ease::Linear);
    s
}

#[test]
fn full_cycle_returns_to_rest() {
    let mut s = bar(10.0);
    s.play().unwrap();
    assert_eq!(s.phase(), Phase::AnimatingIn);

    s.update(50.0).unwrap();
    assert_eq!(s.geometry().w, 5.0);

    s.update(50.0).unwrap();
    assert_eq!(s.phase(), Phase::AnimatingOut);
    assert_eq!(s.geometry().w, 10.0);

    // out wave carries a 20ms tween delay, so the barrier spans 120ms
    s.update(100.0).unwrap();
    assert_eq!(s.phase(), Phase::AnimatingOut);
    assert_eq!(s.geometry().w, 2.0);

    s.update(20.0).unwrap();
    assert_eq!(s.phase(), Phase::Idle);
    assert!(!s.is_playing());
    assert_eq!(s.geometry().w, 0.0);
    assert_eq!(s.neuron().active_len(), 0);
}

#[test]
fn base_delay_applies_to_the_in_wave_only() {
    let mut s = bar(10.0);
    s.set_delay(30.0).unwrap();
    s.play().unwrap();
    s.update(30.0).unwrap();
    assert_eq!(s.geometry().w, 0.0);
    s.update(50.0).unwrap();
    assert_eq!(s.geometry().w, 5.0);
    s.update(50.0).unwrap();
    assert_eq!(s.phase(), Phase::AnimatingOut);
}

#[test]
fn replay_while_playing_is_ignored() {
    let mut s = bar(10.0);
    s.play().unwrap();
    s.update(50.0).unwrap();
    s.play().unwrap();
    assert_eq!(s.geometry().w, 5.0);
    assert_eq!(s.neuron().active_len(), 2);
}

#[test]
fn configure_is_guarded_while_playing() {
    let mut s = bar(10.0);
    assert_eq!(s.geometry().rebuilds, 1);
    assert!(s.configure(|g| g.size = 20.0));
    assert_eq!(s.geometry().rebuilds, 2);

    s.play().unwrap();
    assert!(!s.configure(|g| g.size = 99.0));
    assert_eq!(s.geometry().size, 20.0);
    assert_eq!(s.geometry().rebuilds, 2);
}

#[test]
fn stop_returns_to_rest() {
    let mut s = bar(10.0);
    s.play().unwrap();
    s.update(10.0).unwrap();
    s.stop();
    assert_eq!(s.phase(), Phase::Idle);
    assert!(!s.is_playing());
    assert_eq!(s.geometry().w, 0.0);
    assert_eq!(s.neuron().active_len(), 0);
}

#[test]
fn render_is_empty_when_idle() {
    let mut s = bar(10.0);
    let mut ops = Vec::new();
    s.render(&mut ops);
    assert!(ops.is_empty());

    s.set_color(Rgba8::rgb(1, 2, 3));
    s.play().unwrap();
    s.render(&mut ops);
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].color(), Rgba8::rgb(1, 2, 3));
}

#[test]
fn animatable_is_object_safe() {
    let mut shapes: Vec<Box<dyn Animatable>> = vec![Box::new(bar(1.0)), Box::new(bar(2.0))];
    for s in shapes.iter_mut() {
        s.play().unwrap();
    }
    assert!(shapes.iter().all(|s| s.is_playing()));
    for _ in 0..40 {
        for s in shapes.iter_mut() {
            s.update(16.0).unwrap();
        }
    }
    assert!(shapes.iter().all(|s| !s.is_playing()));
}
