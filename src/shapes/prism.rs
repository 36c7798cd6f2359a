use crate::animation::lifecycle::{Geometry, Phase, Shape, Wave};
use crate::animation::neuron::Target;
use crate::animation::tween::Snapshot;
use crate::foundation::core::{BezPath, Canvas, Rgba8, Vec2, Vector2 as _};
use crate::foundation::error::NeuronalResult;
use crate::foundation::math::{HALF_PI, TWO_PI};
use crate::render::scene::{DrawOp, circle, polyline};
use crate::shapes::{apply_point, check_amount};

const MAGNITUDE: usize = 0;

/// Regular polygon that bursts out of its center, with a dot on every vertex.
pub type Prism = Shape<PrismGeometry>;

#[derive(Clone, Debug)]
pub struct PrismGeometry {
    origin: Vec2,
    distance: f64,
    amount: usize,
    offset: f64,
    max_magnitude: f64,
    points: Vec<Vec2>,
    ring: Vec<Vec2>,
    magnitude: f64,
}

impl PrismGeometry {
    pub fn new(origin: Vec2, distance: f64) -> Self {
        Self {
            origin,
            distance,
            amount: 3,
            offset: -HALF_PI,
            max_magnitude: 50.0,
            points: Vec::new(),
            ring: Vec::new(),
            magnitude: 0.0,
        }
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Vertex positions at full extension.
    pub fn ring(&self) -> &[Vec2] {
        &self.ring
    }

    /// Current vertex dot diameter.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

impl Geometry for PrismGeometry {
    const NAME: &'static str = "prism";

    fn rebuild(&mut self) {
        let n = self.amount as f64;
        self.ring = (0..self.amount)
            .map(|i| {
                let theta = (i + 1) as f64 / n * TWO_PI + self.offset;
                self.origin.polar(self.distance, theta)
            })
            .collect();
        self.points = vec![self.origin; self.amount];
        self.reset();
    }

    fn reset(&mut self) {
        self.points.fill(self.origin);
        self.magnitude = 0.0;
    }

    fn enter(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        for (i, (p, dest)) in self.points.iter().zip(&self.ring).enumerate() {
            let t = wave.tween(Snapshot::xy(*p), Snapshot::xy(*dest));
            wave.spawn(Target::Point(i), t)?;
        }
        let m = wave.tween(
            Snapshot::scalar("magnitude", self.magnitude),
            Snapshot::scalar("magnitude", self.max_magnitude),
        );
        wave.spawn(Target::Scalar(MAGNITUDE), m)?;
        Ok(())
    }

    fn exit(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        for (i, p) in self.points.iter().enumerate() {
            let t = wave.tween(Snapshot::xy(*p), Snapshot::xy(self.origin));
            wave.spawn(Target::Point(i), t)?;
        }
        let m = wave.tween(
            Snapshot::scalar("magnitude", self.magnitude),
            Snapshot::scalar("magnitude", 0.0),
        );
        wave.spawn(Target::Scalar(MAGNITUDE), m)?;
        Ok(())
    }

    fn apply(&mut self, target: Target, values: &Snapshot) {
        if apply_point(&mut self.points, target, values) {
            return;
        }
        if let (Target::Scalar(MAGNITUDE), Some(m)) = (target, values.get("magnitude")) {
            self.magnitude = m;
        }
    }

    fn draw(&self, _phase: Phase, color: Rgba8, out: &mut Vec<DrawOp>) {
        out.push(DrawOp::Stroke {
            path: polyline(&self.points, true),
            color,
            width: 1.0,
            round: false,
        });

        let mut dots = BezPath::new();
        for p in &self.points {
            for el in circle(*p, self.magnitude / 2.0).elements() {
                dots.push(*el);
            }
        }
        out.push(DrawOp::Fill { path: dots, color });
    }
}

impl Prism {
    /// Centered prism reaching out to the canvas width.
    pub fn new(canvas: Canvas, duration_ms: f64) -> NeuronalResult<Self> {
        let mut prism = Self::from_geometry(PrismGeometry::new(canvas.center(), canvas.width_f()));
        prism.set_duration(duration_ms)?;
        Ok(prism)
    }

    pub fn set_amount(&mut self, amount: usize) -> NeuronalResult<bool> {
        let amount = check_amount(amount)?;
        Ok(self.configure(|g| g.amount = amount))
    }

    /// Final vertex dot diameter.
    pub fn set_magnitude(&mut self, magnitude: f64) -> bool {
        self.configure(|g| g.max_magnitude = magnitude)
    }

    pub fn set_origin(&mut self, origin: Vec2) -> bool {
        self.configure(|g| g.origin = origin)
    }

    pub fn set_distance(&mut self, distance: f64) -> bool {
        self.configure(|g| g.distance = distance)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/prism.rs"]
mod tests;
