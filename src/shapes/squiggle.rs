use crate::animation::lifecycle::{Geometry, Phase, Shape, Wave};
use crate::animation::neuron::Target;
use crate::animation::tween::{Snapshot, Tween};
use crate::foundation::core::{Canvas, Rgba8, Vec2};
use crate::foundation::error::NeuronalResult;
use crate::foundation::math::{HALF_PI, TWO_PI};
use crate::render::scene::{DrawOp, polyline};
use crate::shapes::check_amount;

const STATE: usize = 0;

/// Sine wave along a line, drawn on and then erased tail first.
pub type Squiggle = Shape<SquiggleGeometry>;

#[derive(Clone, Debug)]
pub struct SquiggleGeometry {
    origin: Vec2,
    distance: f64,
    amplitude: f64,
    angle: f64,
    revolutions: f64,
    amount: usize,
    stroke_width: f64,
    points: Vec<Vec2>,
    state: f64,
}

impl SquiggleGeometry {
    pub fn new(origin: Vec2, distance: f64, amplitude: f64, stroke_width: f64) -> Self {
        Self {
            origin,
            distance,
            amplitude,
            angle: 0.0,
            revolutions: 0.0,
            amount: 256,
            stroke_width,
            points: Vec::new(),
            state: 0.0,
        }
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Reveal (entering) or erase (exiting) progress in `[0, 1]`.
    pub fn state(&self) -> f64 {
        self.state
    }

    /// Position at `pct` along the curve. `pct = 0` and `pct = 1` are the ends of the base line.
    pub fn point_on_line(&self, pct: f64) -> Vec2 {
        let dir = Vec2::from_angle(self.angle);
        let normal = Vec2::from_angle(self.angle - HALF_PI);
        let start = self.origin - dir * (self.distance / 2.0);
        let wave = (pct * self.revolutions * TWO_PI).sin();
        start + dir * (pct * self.distance) + normal * (self.amplitude * wave)
    }

    fn state_tween(wave: &Wave<'_>) -> Tween {
        wave.tween(Snapshot::scalar("state", 0.0), Snapshot::scalar("state", 1.0))
    }
}

impl Geometry for SquiggleGeometry {
    const NAME: &'static str = "squiggle";

    fn rebuild(&mut self) {
        let n = self.amount as f64;
        self.points = (0..self.amount)
            .map(|i| self.point_on_line(i as f64 / n))
            .collect();
        self.reset();
    }

    fn reset(&mut self) {
        self.state = 0.0;
    }

    fn enter(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        self.state = 0.0;
        let t = Self::state_tween(wave);
        wave.spawn(Target::Scalar(STATE), t)?;
        Ok(())
    }

    fn exit(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        self.state = 0.0;
        let t = Self::state_tween(wave);
        wave.spawn(Target::Scalar(STATE), t)?;
        Ok(())
    }

    fn apply(&mut self, target: Target, values: &Snapshot) {
        if let (Target::Scalar(STATE), Some(s)) = (target, values.get("state")) {
            self.state = s;
        }
    }

    fn draw(&self, phase: Phase, color: Rgba8, out: &mut Vec<DrawOp>) {
        let n = self.amount as f64;
        let visible: Vec<Vec2> = match phase {
            Phase::AnimatingIn => self
                .points
                .iter()
                .enumerate()
                .take_while(|(i, _)| (*i as f64 / n) < self.state)
                .map(|(_, p)| *p)
                .collect(),
            Phase::AnimatingOut => std::iter::once(self.point_on_line(1.0))
                .chain(
                    self.points
                        .iter()
                        .enumerate()
                        .rev()
                        .take_while(|(i, _)| (*i as f64 / n) > self.state)
                        .map(|(_, p)| *p),
                )
                .chain(std::iter::once(self.point_on_line(self.state)))
                .collect(),
            Phase::Idle => return,
        };
        if visible.len() < 2 {
            return;
        }
        out.push(DrawOp::Stroke {
            path: polyline(&visible, false),
            color,
            width: self.stroke_width,
            round: true,
        });
    }
}

impl Squiggle {
    /// Centered squiggle spanning half the canvas width.
    pub fn new(canvas: Canvas, duration_ms: f64) -> NeuronalResult<Self> {
        let (w, h) = (canvas.width_f(), canvas.height_f());
        let geometry = SquiggleGeometry::new(canvas.center(), w / 2.0, h / 4.0, h / 60.0);
        let mut squiggle = Self::from_geometry(geometry);
        squiggle.set_duration(duration_ms)?;
        Ok(squiggle)
    }

    pub fn set_revolutions(&mut self, revolutions: f64) -> bool {
        self.configure(|g| g.revolutions = revolutions)
    }

    pub fn set_amount(&mut self, amount: usize) -> NeuronalResult<bool> {
        let amount = check_amount(amount)?;
        Ok(self.configure(|g| g.amount = amount))
    }

    pub fn set_angle(&mut self, angle: f64) -> bool {
        self.configure(|g| g.angle = angle)
    }

    pub fn set_amplitude(&mut self, amplitude: f64) -> bool {
        self.configure(|g| g.amplitude = amplitude)
    }

    pub fn set_distance(&mut self, distance: f64) -> bool {
        self.configure(|g| g.distance = distance)
    }

    pub fn set_origin(&mut self, origin: Vec2) -> bool {
        self.configure(|g| g.origin = origin)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/squiggle.rs"]
mod tests;
