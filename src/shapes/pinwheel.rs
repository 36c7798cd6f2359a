use crate::animation::lifecycle::{Geometry, Phase, Shape, Wave};
use crate::animation::neuron::Target;
use crate::animation::tween::Snapshot;
use crate::foundation::core::{Canvas, Rgba8, Vec2, Vector2 as _};
use crate::foundation::error::NeuronalResult;
use crate::foundation::math::{PI, SeededRng, TWO_PI};
use crate::render::scene::{DrawOp, polyline};
use crate::shapes::{apply_point, check_amount};

/// Fan of points unfurled by a cascade of sub-waves.
pub type Pinwheel = Shape<PinwheelGeometry>;

#[derive(Clone, Debug)]
pub struct PinwheelGeometry {
    origin: Vec2,
    distance: f64,
    amount: usize,
    start_angle: f64,
    end_angle: f64,
    drift: f64,
    points: Vec<Vec2>,
}

impl PinwheelGeometry {
    pub fn new(origin: Vec2, distance: f64, drift: f64) -> Self {
        Self {
            origin,
            distance,
            amount: 8,
            start_angle: 0.0,
            end_angle: TWO_PI,
            drift,
            points: Vec::new(),
        }
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn angles(&self) -> (f64, f64) {
        (self.start_angle, self.end_angle)
    }

    pub fn drift(&self) -> f64 {
        self.drift
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    fn rest_point(&self) -> Vec2 {
        self.origin.polar(self.distance, self.start_angle)
    }

    /// Where sub-wave `wave` sends point `j`.
    pub fn sweep(&self, wave: usize, j: usize) -> Vec2 {
        let index = (wave + 1) as f64;
        let center = PI * (index / self.amount as f64);
        let pct = (j as f64 / index).min(1.0);
        let theta = pct * self.end_angle + self.start_angle + center + self.drift;
        self.origin.polar(self.distance, theta)
    }
}

impl Geometry for PinwheelGeometry {
    const NAME: &'static str = "pinwheel";

    fn rebuild(&mut self) {
        self.points = vec![self.rest_point(); self.amount];
    }

    fn reset(&mut self) {
        let rest = self.rest_point();
        self.points.fill(rest);
    }

    fn enter(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        let step = wave.duration_ms() / (self.amount + 2) as f64;
        let mut from = self.points.clone();
        for i in 0..self.amount {
            for (j, prev) in from.iter_mut().enumerate() {
                let dest = self.sweep(i, j);
                let t = wave
                    .tween(Snapshot::xy(*prev), Snapshot::xy(dest))
                    .duration(step)
                    .delay(i as f64 * step);
                wave.spawn(Target::Point(j), t)?;
                *prev = dest;
            }
        }
        Ok(())
    }

    fn exit(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        for (i, p) in self.points.iter().enumerate() {
            let t = wave.tween(Snapshot::xy(*p), Snapshot::xy(self.origin));
            wave.spawn(Target::Point(i), t)?;
        }
        Ok(())
    }

    fn apply(&mut self, target: Target, values: &Snapshot) {
        apply_point(&mut self.points, target, values);
    }

    fn draw(&self, _phase: Phase, color: Rgba8, out: &mut Vec<DrawOp>) {
        out.push(DrawOp::Fill {
            path: polyline(&self.points, true),
            color,
        });
    }
}

impl Pinwheel {
    /// Centered pinwheel with a radius of a sixth of the canvas height and a random drift.
    pub fn new(canvas: Canvas, duration_ms: f64, seed: u64) -> NeuronalResult<Self> {
        let drift = SeededRng::new(seed).below(TWO_PI);
        let geometry = PinwheelGeometry::new(canvas.center(), canvas.height_f() / 6.0, drift);
        let mut pinwheel = Self::from_geometry(geometry);
        pinwheel.set_duration(duration_ms)?;
        Ok(pinwheel)
    }

    pub fn set_amount(&mut self, amount: usize) -> NeuronalResult<bool> {
        let amount = check_amount(amount)?;
        Ok(self.configure(|g| g.amount = amount))
    }

    pub fn set_angles(&mut self, start: f64, end: f64) -> bool {
        self.configure(|g| {
            g.start_angle = start;
            g.end_angle = end;
        })
    }

    pub fn set_drift(&mut self, drift: f64) -> bool {
        self.configure(|g| g.drift = drift)
    }

    pub fn set_distance(&mut self, distance: f64) -> bool {
        self.configure(|g| g.distance = distance)
    }

    pub fn set_origin(&mut self, origin: Vec2) -> bool {
        self.configure(|g| g.origin = origin)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/pinwheel.rs"]
mod tests;
