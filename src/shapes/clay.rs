use crate::animation::lifecycle::{Geometry, Phase, Shape, Wave};
use crate::animation::neuron::Target;
use crate::animation::tween::Snapshot;
use crate::foundation::core::{Canvas, Rgba8, Vec2, Vector2 as _};
use crate::foundation::error::NeuronalResult;
use crate::foundation::math::{HALF_PI, SeededRng, TWO_PI};
use crate::render::scene::{DrawOp, closed_spline, polyline};
use crate::shapes::{apply_point, check_amount};

/// Pull strength toward the impact point.
const IMPACT_GAIN: f64 = 5.0;

/// Large blob whose outline gets poked toward an impact point.
pub type Clay = Shape<ClayGeometry>;

#[derive(Clone, Debug)]
pub struct ClayGeometry {
    origin: Vec2,
    impact: Vec2,
    distance: f64,
    rotation: f64,
    smooth: bool,
    amount: usize,
    rest: Vec<Vec2>,
    dests: Vec<Vec2>,
    verts: Vec<Vec2>,
}

impl ClayGeometry {
    pub fn new(origin: Vec2, impact: Vec2, distance: f64, amount: usize) -> Self {
        Self {
            origin,
            impact,
            distance,
            rotation: HALF_PI,
            smooth: true,
            amount,
            rest: Vec::new(),
            dests: Vec::new(),
            verts: Vec::new(),
        }
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn impact(&self) -> Vec2 {
        self.impact
    }

    pub fn verts(&self) -> &[Vec2] {
        &self.verts
    }

    pub fn rest(&self) -> &[Vec2] {
        &self.rest
    }

    pub fn destinations(&self) -> &[Vec2] {
        &self.dests
    }
}

impl Geometry for ClayGeometry {
    const NAME: &'static str = "clay";

    fn rebuild(&mut self) {
        let n = self.amount as f64;
        self.rest = (0..self.amount)
            .map(|i| {
                let theta = (i + 1) as f64 / n * TWO_PI + self.rotation;
                self.origin.polar(self.distance, theta)
            })
            .collect();
        self.dests = self
            .rest
            .iter()
            .map(|v| {
                let d = v.distance(self.impact).max(1.0);
                let a = IMPACT_GAIN * self.distance / d.sqrt();
                v.polar(a, v.angle_between(self.impact))
            })
            .collect();
        self.verts = self.rest.clone();
    }

    fn reset(&mut self) {
        self.verts.clone_from(&self.rest);
    }

    fn enter(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        for (i, (v, dest)) in self.verts.iter().zip(&self.dests).enumerate() {
            let t = wave.tween(Snapshot::xy(*v), Snapshot::xy(*dest));
            wave.spawn(Target::Point(i), t)?;
        }
        Ok(())
    }

    fn exit(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        for (i, (v, rest)) in self.verts.iter().zip(&self.rest).enumerate() {
            let t = wave.tween(Snapshot::xy(*v), Snapshot::xy(*rest));
            wave.spawn(Target::Point(i), t)?;
        }
        Ok(())
    }

    fn apply(&mut self, target: Target, values: &Snapshot) {
        apply_point(&mut self.verts, target, values);
    }

    fn draw(&self, _phase: Phase, color: Rgba8, out: &mut Vec<DrawOp>) {
        let path = if self.smooth {
            closed_spline(&self.verts)
        } else {
            polyline(&self.verts, true)
        };
        out.push(DrawOp::Fill { path, color });
    }
}

impl Clay {
    /// Clay rising from the bottom edge with a random impact point and 8..16 vertices.
    pub fn new(canvas: Canvas, duration_ms: f64, seed: u64) -> NeuronalResult<Self> {
        let mut rng = SeededRng::new(seed);
        let (w, h) = (canvas.width_f(), canvas.height_f());
        let impact = Vec2::new(rng.below(w), rng.below(h));
        let amount = rng.range(8.0, 16.0).floor() as usize;
        let geometry = ClayGeometry::new(Vec2::new(w / 2.0, h), impact, h, amount);
        let mut clay = Self::from_geometry(geometry);
        clay.set_duration(duration_ms)?;
        Ok(clay)
    }

    pub fn set_amount(&mut self, amount: usize) -> NeuronalResult<bool> {
        let amount = check_amount(amount)?;
        Ok(self.configure(|g| g.amount = amount))
    }

    pub fn set_origin(&mut self, origin: Vec2) -> bool {
        self.configure(|g| g.origin = origin)
    }

    pub fn set_impact(&mut self, impact: Vec2) -> bool {
        self.configure(|g| g.impact = impact)
    }

    pub fn set_distance(&mut self, distance: f64) -> bool {
        self.configure(|g| g.distance = distance)
    }

    pub fn set_rotation(&mut self, rotation: f64) -> bool {
        self.configure(|g| g.rotation = rotation)
    }

    /// Spline outline when true, straight polygon otherwise.
    pub fn set_smoothing(&mut self, smooth: bool) -> bool {
        self.configure(|g| g.smooth = smooth)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/clay.rs"]
mod tests;
