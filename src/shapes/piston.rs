use crate::animation::lifecycle::{Geometry, Phase, Shape, Wave};
use crate::animation::neuron::Target;
use crate::animation::tween::Snapshot;
use crate::foundation::core::{Canvas, Rect, Rgba8};
use crate::foundation::error::NeuronalResult;
use crate::render::scene::{DrawOp, rect};

const GROW: usize = 0;
const SLIDE: usize = 1;

/// Bar that grows to full width, then slides off its far end while shrinking.
pub type Piston = Shape<PistonGeometry>;

#[derive(Clone, Debug)]
pub struct PistonGeometry {
    bounds: Rect,
    x: f64,
    w: f64,
}

impl PistonGeometry {
    /// `width` may be negative for a bar growing leftward from `x`.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            bounds: Rect::new(x, y, x + width, y + height),
            x,
            w: 0.0,
        }
    }

    /// Target box as `(x, y, w, h)`; `w` keeps its sign.
    pub fn target(&self) -> (f64, f64, f64, f64) {
        let b = self.bounds;
        (b.x0, b.y0, b.x1 - b.x0, b.y1 - b.y0)
    }

    /// Current left edge of the bar before normalization.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Current signed width.
    pub fn width(&self) -> f64 {
        self.w
    }
}

impl Geometry for PistonGeometry {
    const NAME: &'static str = "piston";

    fn rebuild(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.x = self.bounds.x0;
        self.w = 0.0;
    }

    fn enter(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        let (_, _, w, _) = self.target();
        let t = wave.tween(Snapshot::scalar("w", self.w), Snapshot::scalar("w", w));
        wave.spawn(Target::Scalar(GROW), t)?;
        Ok(())
    }

    fn exit(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()> {
        let (x0, _, w, _) = self.target();
        let from = Snapshot::new().with("x", self.x).with("w", self.w);
        let to = Snapshot::new().with("x", x0 + w).with("w", 0.0);
        let t = wave.tween(from, to);
        wave.spawn(Target::Scalar(SLIDE), t)?;
        Ok(())
    }

    fn apply(&mut self, target: Target, values: &Snapshot) {
        match target {
            Target::Scalar(GROW) | Target::Scalar(SLIDE) => {
                if let Some(x) = values.get("x") {
                    self.x = x;
                }
                if let Some(w) = values.get("w") {
                    self.w = w;
                }
            }
            _ => {}
        }
    }

    fn draw(&self, _phase: Phase, color: Rgba8, out: &mut Vec<DrawOp>) {
        let (_, y, _, h) = self.target();
        out.push(DrawOp::Fill {
            path: rect(self.x, y, self.w, h),
            color,
        });
    }
}

impl Piston {
    /// Bar half the canvas wide and a sixth tall, centered.
    pub fn new(canvas: Canvas, duration_ms: f64) -> NeuronalResult<Self> {
        let (cw, ch) = (canvas.width_f(), canvas.height_f());
        let (w, h) = (cw / 2.0, ch / 6.0);
        Self::with_bounds((cw - w) / 2.0, (ch - h) / 2.0, w, h, duration_ms)
    }

    pub fn with_bounds(x: f64, y: f64, w: f64, h: f64, duration_ms: f64) -> NeuronalResult<Self> {
        let mut piston = Self::from_geometry(PistonGeometry::new(x, y, w, h));
        piston.set_duration(duration_ms)?;
        Ok(piston)
    }

    /// Moves the target box. Ignored while playing.
    pub fn initialize(&mut self, x: f64, y: f64, w: f64, h: f64) -> bool {
        self.configure(|g| *g = PistonGeometry::new(x, y, w, h))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/piston.rs"]
mod tests;
