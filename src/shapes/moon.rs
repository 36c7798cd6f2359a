use crate::animation::lifecycle::{Geometry, Phase, Shape, Wave};
use crate::animation::neuron::Target;
use crate::animation::tween::Snapshot;
use crate::foundation::core::{Canvas, Rgba8, Vec2, Vector2 as _};
use crate::foundation::error::NeuronalResult;
use crate::foundation::math::TWO_PI;
use crate::render::scene::{DrawOp, polyline};
use crate::shapes::{apply_point, check_amount};

/// Filled disc that unfolds from a half ring into a full ring, then folds back.
pub type Moon = Shape<MoonGeometry>;

#[derive(Clone, Debug)]
pub struct MoonGeometry {
    origin: Vec2,
    radius: f64,
    amount: usize,
    start_angle: f64,
    points: Vec<Vec2>,
    ring: Vec<Vec2>,
}

impl MoonGeometry {
    pub fn new(origin: Vec2, radius: f64) -> Self {
        Self {
            origin,
            radius,
            amount: 40,
            start_angle: 0.0,
            points: Vec::new(),
            ring: Vec::new(),
        }
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn ring(&self) -> &[Vec2] {
        &self.ring
    }

    /// Ring index a point rests on: the upper half maps onto itself, the rest mirror into it.
    fn folded(&self, i: usize) -> usize {
        if 2 * i <= self.amount {
            i
        } else {
            self.amount - i
        }
    }
}

impl Geometry for MoonGeometry {
    const NAME: &'static str = "moon";

    fn rebuild(&mut self) {
        let n = self.amount as f64;
        self.ring = (0..self.amount)
            .map(|i| {
                let theta = i as f64 / n * TWO_PI + self.start_angle;
                self.origin.polar(self.radius, theta)
            })
            .collect();
        self.points = vec![self.origin; self.amount];
        self.reset();
    }

    fn reset(&mut self) {
        for i in 0..self.points.len() {
            self.points[i] = self.ring[self.folded(i)];
        }
    }

    fn enter(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        for (i, (p, dest)) in self.points.iter().zip(&self.ring).enumerate() {
            let t = wave.tween(Snapshot::xy(*p), Snapshot::xy(*dest));
            wave.spawn(Target::Point(i), t)?;
        }
        Ok(())
    }

    fn exit(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        let half = self.amount.div_ceil(2);
        for i in 0..half {
            let index = if i == 0 { 0 } else { self.amount - i };
            let t = wave.tween(Snapshot::xy(self.points[i]), Snapshot::xy(self.ring[index]));
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

impl Moon {
    /// Centered moon with a radius of a third of the canvas height.
    pub fn new(canvas: Canvas, duration_ms: f64) -> NeuronalResult<Self> {
        let geometry = MoonGeometry::new(canvas.center(), canvas.height_f() / 3.0);
        let mut moon = Self::from_geometry(geometry);
        moon.set_duration(duration_ms)?;
        Ok(moon)
    }

    pub fn set_angle(&mut self, angle: f64) -> bool {
        self.configure(|g| g.start_angle = angle)
    }

    pub fn set_amount(&mut self, amount: usize) -> NeuronalResult<bool> {
        let amount = check_amount(amount)?;
        Ok(self.configure(|g| g.amount = amount))
    }

    pub fn set_radius(&mut self, radius: f64) -> bool {
        self.configure(|g| g.radius = radius)
    }

    pub fn set_origin(&mut self, origin: Vec2) -> bool {
        self.configure(|g| g.origin = origin)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/moon.rs"]
mod tests;
