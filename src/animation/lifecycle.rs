use crate::animation::ease::Ease;
use crate::animation::neuron::{Neuron, Target, TweenId};
use crate::animation::tween::{Snapshot, Tween};
use crate::foundation::core::Rgba8;
use crate::foundation::error::NeuronalResult;
use crate::render::scene::DrawOp;

/// Where a shape is in its play cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    AnimatingIn,
    AnimatingOut,
}

/// Spawning context for one wave of tweens.
///
/// Tweens built with [`Wave::tween`] inherit the neuron's duration and curve; [`Wave::spawn`]
/// offsets them by the wave's base delay and tracks when the last one ends so the barrier can
/// be sized to cover the whole wave.
pub struct Wave<'a> {
    neuron: &'a mut Neuron,
    base_delay_ms: f64,
    end_ms: f64,
}

impl<'a> Wave<'a> {
    fn new(neuron: &'a mut Neuron, base_delay_ms: f64) -> Self {
        let end_ms = base_delay_ms + neuron.duration_ms();
        Self {
            neuron,
            base_delay_ms,
            end_ms,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.neuron.duration_ms()
    }

    pub fn ease(&self) -> Ease {
        self.neuron.ease()
    }

    pub fn tween(&self, from: Snapshot, to: Snapshot) -> Tween {
        Tween::new(from)
            .to(to)
            .duration(self.neuron.duration_ms())
            .ease(self.neuron.ease())
    }

    pub fn spawn(&mut self, target: Target, tween: Tween) -> NeuronalResult<TweenId> {
        let delay = self.base_delay_ms + tween.delay_ms();
        let tween = tween.delay(delay);
        self.end_ms = self.end_ms.max(tween.span_ms());
        self.neuron.spawn(target, tween)
    }

    /// Time from wave launch until its last tween ends.
    pub fn end_ms(&self) -> f64 {
        self.end_ms
    }
}

/// Shape-specific behavior plugged into [`Shape`].
pub trait Geometry {
    /// Label used in logs.
    const NAME: &'static str;

    /// Reallocates point storage from the current parameters and moves to rest.
    fn rebuild(&mut self);

    /// Returns every point and scalar to its rest value without reallocating.
    fn reset(&mut self);

    /// Spawns the animate-in wave.
    fn enter(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()>;

    /// Spawns the animate-out wave.
    fn exit(&mut self, wave: &mut Wave<'_>) -> NeuronalResult<()>;

    /// Writes tween values back into the geometry.
    fn apply(&mut self, target: Target, values: &Snapshot);

    fn draw(&self, phase: Phase, color: Rgba8, out: &mut Vec<DrawOp>);
}

/// A shape: shared [`Neuron`] state plus a [`Geometry`] running the
/// `Idle -> AnimatingIn -> AnimatingOut -> Idle` cycle.
#[derive(Clone, Debug)]
pub struct Shape<G> {
    neuron: Neuron,
    phase: Phase,
    geometry: G,
}

impl<G: Geometry> Shape<G> {
    pub fn from_geometry(mut geometry: G) -> Self {
        geometry.rebuild();
        Self {
            neuron: Neuron::default(),
            phase: Phase::Idle,
            geometry,
        }
    }

    pub fn neuron(&self) -> &Neuron {
        &self.neuron
    }

    pub fn neuron_mut(&mut self) -> &mut Neuron {
        &mut self.neuron
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.neuron.is_playing()
    }

    pub fn set_color(&mut self, color: Rgba8) {
        self.neuron.set_color(color);
    }

    pub fn set_duration(&mut self, ms: f64) -> NeuronalResult<()> {
        self.neuron.set_duration(ms)
    }

    pub fn set_delay(&mut self, ms: f64) -> NeuronalResult<()> {
        self.neuron.set_delay(ms)
    }

    pub fn set_ease(&mut self, ease: Ease) {
        self.neuron.set_ease(ease);
    }

    /// Mutates geometry parameters and rebuilds rest state. Ignored while playing.
    ///
    /// Returns whether the change was applied.
    pub(crate) fn configure(&mut self, f: impl FnOnce(&mut G)) -> bool {
        if self.neuron.is_playing() {
            tracing::trace!(shape = G::NAME, "configuration ignored while playing");
            return false;
        }
        f(&mut self.geometry);
        self.geometry.rebuild();
        true
    }

    /// Starts a cycle from rest. Ignored while a cycle is running.
    pub fn play(&mut self) -> NeuronalResult<()> {
        if self.neuron.is_playing() {
            tracing::trace!(shape = G::NAME, "play ignored while playing");
            return Ok(());
        }
        self.geometry.reset();
        self.neuron.set_playing(true);
        self.phase = Phase::AnimatingIn;
        tracing::debug!(shape = G::NAME, "play");
        self.launch().inspect_err(|_| self.finish())
    }

    /// Advances every tween by `delta_ms` and moves through the cycle on barrier ends.
    pub fn update(&mut self, delta_ms: f64) -> NeuronalResult<()> {
        let geometry = &mut self.geometry;
        let tick = self
            .neuron
            .update(delta_ms, |target, values| geometry.apply(target, values));
        if !tick.barrier {
            return Ok(());
        }

        self.settle();
        match self.phase {
            Phase::AnimatingIn => {
                self.phase = Phase::AnimatingOut;
                tracing::debug!(shape = G::NAME, "in -> out");
                self.launch().inspect_err(|_| self.finish())
            }
            Phase::AnimatingOut | Phase::Idle => {
                self.finish();
                Ok(())
            }
        }
    }

    /// Force-completes every running tween and returns to rest.
    pub fn stop(&mut self) {
        if !self.neuron.is_playing() {
            return;
        }
        self.settle();
        self.finish();
    }

    pub fn render(&self, out: &mut Vec<DrawOp>) {
        if self.phase == Phase::Idle {
            return;
        }
        self.geometry.draw(self.phase, self.neuron.color(), out);
    }

    fn launch(&mut self) -> NeuronalResult<()> {
        let base_delay_ms = match self.phase {
            Phase::AnimatingIn => self.neuron.delay_ms(),
            Phase::AnimatingOut | Phase::Idle => 0.0,
        };
        let mut wave = Wave::new(&mut self.neuron, base_delay_ms);
        match self.phase {
            Phase::AnimatingIn => self.geometry.enter(&mut wave)?,
            Phase::AnimatingOut => self.geometry.exit(&mut wave)?,
            Phase::Idle => return Ok(()),
        }
        let span_ms = wave.end_ms();
        let barrier = Tween::new(Snapshot::scalar("barrier", 0.0)).duration(span_ms);
        self.neuron.spawn(Target::Barrier, barrier)?;
        tracing::trace!(shape = G::NAME, phase = ?self.phase, span_ms, "wave launched");
        Ok(())
    }

    /// Completes whatever is still running so the next wave starts from final values.
    fn settle(&mut self) {
        let geometry = &mut self.geometry;
        let tick = self
            .neuron
            .stop_all(|target, values| geometry.apply(target, values));
        tracing::trace!(shape = G::NAME, ended = tick.ended, "settled");
    }

    fn finish(&mut self) {
        self.neuron.clear();
        self.geometry.reset();
        self.phase = Phase::Idle;
        self.neuron.set_playing(false);
        tracing::debug!(shape = G::NAME, "cycle complete");
    }
}

/// Object-safe surface shared by every shape and by composites such as the engine.
pub trait Animatable {
    fn play(&mut self) -> NeuronalResult<()>;
    fn update(&mut self, delta_ms: f64) -> NeuronalResult<()>;
    fn render(&self, out: &mut Vec<DrawOp>);
    fn is_playing(&self) -> bool;
    fn set_color(&mut self, color: Rgba8);
}

impl<G: Geometry> Animatable for Shape<G> {
    fn play(&mut self) -> NeuronalResult<()> {
        Shape::play(self)
    }

    fn update(&mut self, delta_ms: f64) -> NeuronalResult<()> {
        Shape::update(self, delta_ms)
    }

    fn render(&self, out: &mut Vec<DrawOp>) {
        Shape::render(self, out)
    }

    fn is_playing(&self) -> bool {
        Shape::is_playing(self)
    }

    fn set_color(&mut self, color: Rgba8) {
        Shape::set_color(self, color)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lifecycle.rs"]
mod tests;
