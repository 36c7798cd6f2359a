use crate::animation::lifecycle::{Geometry, Phase, Shape, Wave};
use crate::animation::neuron::Target;
use crate::animation::tween::Snapshot;
use crate::foundation::core::{BezPath, Canvas, Rgba8, Vec2, Vector2 as _};
use crate::foundation::error::NeuronalResult;
use crate::foundation::math::{HALF_PI, SeededRng, TWO_PI};
use crate::render::scene::{DrawOp, circle};
use crate::shapes::{apply_point, check_amount};

/// Spray of dots thrown out of the origin inside a cone.
pub type Suspension = Shape<SuspensionGeometry>;

/// One randomized dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub destination: Vec2,
    pub radius: f64,
    /// Share of the shape duration this particle takes to arrive, in `[0, 1)`.
    pub pace: f64,
}

#[derive(Clone, Debug)]
pub struct SuspensionGeometry {
    origin: Vec2,
    theta: f64,
    deviation: f64,
    distance: f64,
    radius: f64,
    amount: usize,
    seed: u64,
    particles: Vec<Particle>,
    positions: Vec<Vec2>,
    sizes: Vec<f64>,
}

impl SuspensionGeometry {
    pub fn new(origin: Vec2, distance: f64, theta: f64, seed: u64) -> Self {
        Self {
            origin,
            theta,
            deviation: HALF_PI,
            distance,
            radius: 25.0,
            amount: 16,
            seed,
            particles: Vec::new(),
            positions: Vec::new(),
            sizes: Vec::new(),
        }
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Half-width of the spray cone.
    pub fn deviation(&self) -> f64 {
        self.deviation
    }

    /// Seed the particle layout is drawn from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }
}

impl Geometry for SuspensionGeometry {
    const NAME: &'static str = "suspension";

    fn rebuild(&mut self) {
        let mut rng = SeededRng::new(self.seed);
        self.particles = (0..self.amount)
            .map(|_| {
                let t = self.theta + rng.range(-self.deviation, self.deviation);
                let a = rng.below(self.distance);
                let pace = rng.below(1.0);
                let radius = rng.range(self.radius / 2.0, self.radius);
                Particle {
                    destination: self.origin.polar(a, t),
                    radius,
                    pace,
                }
            })
            .collect();
        self.positions = vec![self.origin; self.amount];
        self.sizes = vec![0.0; self.amount];
        self.reset();
    }

    fn reset(&mut self) {
        self.positions.fill(self.origin);
        for (size, p) in self.sizes.iter_mut().zip(&self.particles) {
            *size = p.radius;
        }
    }

    fn enter(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        let duration = wave.duration_ms();
        for (i, (pos, p)) in self.positions.iter().zip(&self.particles).enumerate() {
            let t = wave
                .tween(Snapshot::xy(*pos), Snapshot::xy(p.destination))
                .duration(p.pace * duration);
            wave.spawn(Target::Point(i), t)?;
        }
        Ok(())
    }

    fn exit(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        for (i, size) in self.sizes.iter().enumerate() {
            let t = wave.tween(Snapshot::scalar("r", *size), Snapshot::scalar("r", 0.0));
            wave.spawn(Target::Scalar(i), t)?;
        }
        Ok(())
    }

    fn apply(&mut self, target: Target, values: &Snapshot) {
        if apply_point(&mut self.positions, target, values) {
            return;
        }
        if let (Target::Scalar(i), Some(r)) = (target, values.get("r"))
            && let Some(size) = self.sizes.get_mut(i)
        {
            *size = r;
        }
    }

    fn draw(&self, _phase: Phase, color: Rgba8, out: &mut Vec<DrawOp>) {
        let mut path = BezPath::new();
        for (pos, size) in self.positions.iter().zip(&self.sizes) {
            for el in circle(*pos, *size).elements() {
                path.push(*el);
            }
        }
        out.push(DrawOp::Fill { path, color });
    }
}

impl Suspension {
    /// Centered spray reaching half the canvas width, aimed in a random direction.
    pub fn new(canvas: Canvas, duration_ms: f64, seed: u64) -> NeuronalResult<Self> {
        let mut rng = SeededRng::new(seed);
        let theta = rng.below(TWO_PI);
        let geometry =
            SuspensionGeometry::new(canvas.center(), canvas.width_f() / 2.0, theta, rng.next_seed());
        let mut suspension = Self::from_geometry(geometry);
        suspension.set_duration(duration_ms)?;
        Ok(suspension)
    }

    pub fn set_amount(&mut self, amount: usize) -> NeuronalResult<bool> {
        let amount = check_amount(amount)?;
        Ok(self.configure(|g| g.amount = amount))
    }

    pub fn set_distance(&mut self, distance: f64) -> bool {
        self.configure(|g| g.distance = distance)
    }

    pub fn set_theta(&mut self, theta: f64) -> bool {
        self.configure(|g| g.theta = theta)
    }

    /// Full cone width; particles spread half of it to either side of `theta`.
    pub fn set_deviation(&mut self, deviation: f64) -> bool {
        self.configure(|g| g.deviation = deviation / 2.0)
    }

    pub fn set_origin(&mut self, origin: Vec2) -> bool {
        self.configure(|g| g.origin = origin)
    }

    pub fn set_radius(&mut self, radius: f64) -> bool {
        self.configure(|g| g.radius = radius)
    }

    /// Reseeds the particle layout.
    pub fn set_seed(&mut self, seed: u64) -> bool {
        self.configure(|g| g.seed = seed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/suspension.rs"]
mod tests;
