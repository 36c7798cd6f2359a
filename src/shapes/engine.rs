use crate::animation::lifecycle::Animatable;
use crate::foundation::core::{Rgba8, Vec2};
use crate::foundation::error::NeuronalResult;
use crate::render::scene::DrawOp;
use crate::shapes::check_amount;
use crate::shapes::piston::Piston;

/// Stack of [`Piston`] bars sharing one bounding box, started with a per-bar delay cascade.
#[derive(Clone, Debug)]
pub struct Engine {
    pistons: Vec<Piston>,
    amount: usize,
    origin: Vec2,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    gutter: f64,
    duration_ms: f64,
    delay_ms: f64,
    color: Rgba8,
}

impl Engine {
    /// Engine centered on `origin` with a `width` x `height` box. A negative width grows
    /// the bars leftward.
    pub fn new(origin: Vec2, width: f64, height: f64, duration_ms: f64) -> NeuronalResult<Self> {
        let mut engine = Self {
            pistons: Vec::new(),
            amount: 8,
            origin,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            gutter: 0.0,
            duration_ms,
            delay_ms: 0.0,
            color: Rgba8::BLACK,
        };
        engine.place(width, height);
        engine.initialize()?;
        Ok(engine)
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn pistons(&self) -> &[Piston] {
        &self.pistons
    }

    pub fn gutter(&self) -> f64 {
        self.gutter
    }

    /// Box as `(x, y, w, h)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.w, self.h)
    }

    /// Takes effect on the next [`Engine::initialize`]. Returns `false` while playing.
    pub fn set_amount(&mut self, amount: usize) -> NeuronalResult<bool> {
        let amount = check_amount(amount)?;
        Ok(self.configure(|e| e.amount = amount))
    }

    /// Per-bar start offset; bar `i` waits `i * delay_ms`. Takes effect on the next
    /// [`Engine::initialize`].
    pub fn set_delay(&mut self, delay_ms: f64) -> bool {
        self.configure(|e| e.delay_ms = delay_ms)
    }

    pub fn set_duration(&mut self, duration_ms: f64) -> bool {
        self.configure(|e| e.duration_ms = duration_ms)
    }

    pub fn set_origin(&mut self, origin: Vec2) -> bool {
        self.configure(|e| {
            e.origin = origin;
            e.place(e.w, e.h);
        })
    }

    /// Resizes the box around the origin. Takes effect on the next [`Engine::initialize`].
    pub fn set_dimensions(&mut self, width: f64, height: f64) -> bool {
        self.configure(|e| e.place(width, height))
    }

    fn configure(&mut self, f: impl FnOnce(&mut Self)) -> bool {
        if self.is_playing() {
            tracing::trace!(shape = "engine", "configuration ignored while playing");
            return false;
        }
        f(self);
        true
    }

    fn place(&mut self, width: f64, height: f64) {
        self.w = width;
        self.h = height;
        self.x = self.origin.x - width / 2.0;
        self.y = self.origin.y - height / 2.0;
    }

    pub fn set_color(&mut self, color: Rgba8) {
        self.color = color;
        for piston in &mut self.pistons {
            piston.set_color(color);
        }
    }

    /// Rebuilds the bars from the current box, amount, timing and color. Ignored while any
    /// bar is mid-cycle.
    pub fn initialize(&mut self) -> NeuronalResult<()> {
        if self.is_playing() {
            tracing::trace!("engine initialize ignored while playing");
            return Ok(());
        }
        let n = self.amount as f64;
        self.gutter = if self.amount <= 1 {
            0.0
        } else {
            self.h / (n * 4.0)
        };
        let bar_h = self.h / n - self.gutter;

        self.pistons = (0..self.amount)
            .map(|i| -> NeuronalResult<Piston> {
                let y = (i as f64 / n) * self.h + self.y + self.gutter / 2.0;
                let mut piston = Piston::with_bounds(self.x, y, self.w, bar_h, self.duration_ms)?;
                piston.set_delay(self.delay_ms * i as f64)?;
                piston.set_color(self.color);
                Ok(piston)
            })
            .collect::<NeuronalResult<Vec<_>>>()?;
        tracing::debug!(amount = self.amount, gutter = self.gutter, "engine initialized");
        Ok(())
    }

    pub fn play(&mut self) -> NeuronalResult<()> {
        self.pistons.iter_mut().try_for_each(Piston::play)
    }

    /// True while any bar is mid-cycle.
    pub fn is_playing(&self) -> bool {
        self.pistons.iter().any(Piston::is_playing)
    }

    pub fn update(&mut self, delta_ms: f64) -> NeuronalResult<()> {
        self.pistons
            .iter_mut()
            .try_for_each(|piston| piston.update(delta_ms))
    }

    pub fn render(&self, out: &mut Vec<DrawOp>) {
        for piston in &self.pistons {
            piston.render(out);
        }
    }

    /// Returns every bar to rest immediately.
    pub fn stop(&mut self) {
        for piston in &mut self.pistons {
            piston.stop();
        }
    }
}

impl Animatable for Engine {
    fn play(&mut self) -> NeuronalResult<()> {
        Engine::play(self)
    }

    fn update(&mut self, delta_ms: f64) -> NeuronalResult<()> {
        Engine::update(self, delta_ms)
    }

    fn render(&self, out: &mut Vec<DrawOp>) {
        Engine::render(self, out)
    }

    fn is_playing(&self) -> bool {
        Engine::is_playing(self)
    }

    fn set_color(&mut self, color: Rgba8) {
        Engine::set_color(self, color)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/engine.rs"]
mod tests;
