use crate::animation::ease::Ease;
use crate::animation::tween::{Snapshot, Tween, TweenEvent};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{NeuronalError, NeuronalResult};

/// Default per-tween duration for a fresh [`Neuron`].
pub const DEFAULT_NEURON_DURATION_MS: f64 = 150.0;

/// What a running tween writes to when it ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// `{x, y}` of the point at this index.
    Point(usize),
    /// A named scalar slot owned by the shape (radius, width, progress).
    Scalar(usize),
    /// Completion timer for the current wave; carries no value.
    Barrier,
}

/// Handle for a tween owned by a [`Neuron`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

/// Summary of one [`Neuron::update`] (or [`Neuron::stop_all`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Tick {
    /// Tweens that finished during this call.
    pub ended: usize,
    /// The wave barrier finished during this call.
    pub barrier: bool,
}

#[derive(Clone, Debug)]
struct Active {
    id: TweenId,
    target: Target,
    tween: Tween,
    live: bool,
}

/// Shared animation state: color, timing defaults, the clock and the active tween set.
///
/// Tweens are stepped in insertion order. A tween that ends (or is removed) is marked dead in
/// place and compacted out after the pass, so removal during iteration never skips or repeats
/// another tween.
#[derive(Clone, Debug)]
pub struct Neuron {
    color: Rgba8,
    duration_ms: f64,
    delay_ms: f64,
    ease: Ease,
    playing: bool,
    now_ms: f64,
    active: Vec<Active>,
    next_id: u64,
}

impl Default for Neuron {
    fn default() -> Self {
        Self {
            color: Rgba8::WHITE,
            duration_ms: DEFAULT_NEURON_DURATION_MS,
            delay_ms: 0.0,
            ease: Ease::OutCirc,
            playing: false,
            now_ms: 0.0,
            active: Vec::new(),
            next_id: 0,
        }
    }
}

impl Neuron {
    pub fn new(duration_ms: f64) -> NeuronalResult<Self> {
        let mut n = Self::default();
        n.set_duration(duration_ms)?;
        Ok(n)
    }

    pub fn color(&self) -> Rgba8 {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba8) {
        self.color = color;
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn set_duration(&mut self, ms: f64) -> NeuronalResult<()> {
        self.duration_ms = check_time("duration", ms)?;
        Ok(())
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    pub fn set_delay(&mut self, ms: f64) -> NeuronalResult<()> {
        self.delay_ms = check_time("delay", ms)?;
        Ok(())
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn set_ease(&mut self, ease: Ease) {
        self.ease = ease;
    }

    /// Sets the curve by table name; unknown names leave the current curve in place.
    pub fn set_easing(&mut self, name: &str) -> NeuronalResult<()> {
        self.ease = Ease::from_name(name)?;
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Accumulated clock in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Number of live tweens.
    pub fn active_len(&self) -> usize {
        self.active.iter().filter(|a| a.live).count()
    }

    /// Activates `tween` at the current clock and adds it after every live tween.
    pub fn spawn(&mut self, target: Target, mut tween: Tween) -> NeuronalResult<TweenId> {
        tween.activate(self.now_ms)?;
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.active.push(Active {
            id,
            target,
            tween,
            live: true,
        });
        Ok(id)
    }

    /// Drops a tween without completing it. Unknown or finished ids are ignored.
    pub fn remove(&mut self, id: TweenId) -> bool {
        match self.active.iter_mut().find(|a| a.live && a.id == id) {
            Some(slot) => {
                slot.live = false;
                true
            }
            None => false,
        }
    }

    /// Drops every tween without completing it.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Advances the clock by `delta_ms` and steps every live tween, in insertion order.
    ///
    /// `apply` receives each tween's values when it updates or ends.
    pub fn update(&mut self, delta_ms: f64, mut apply: impl FnMut(Target, &Snapshot)) -> Tick {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.now_ms += delta_ms;
        }
        let now = self.now_ms;
        let mut tick = Tick::default();

        for slot in self.active.iter_mut().filter(|a| a.live) {
            match slot.tween.step(now) {
                TweenEvent::Updated => apply(slot.target, slot.tween.current()),
                TweenEvent::Ended => {
                    apply(slot.target, slot.tween.current());
                    slot.live = false;
                    tick.ended += 1;
                    tick.barrier |= slot.target == Target::Barrier;
                }
                TweenEvent::Idle | TweenEvent::Waiting => {}
            }
        }

        self.active.retain(|a| a.live);
        tick
    }

    /// Forces every live tween to its target, reporting each end once, then empties the set.
    pub fn stop_all(&mut self, mut apply: impl FnMut(Target, &Snapshot)) -> Tick {
        let mut tick = Tick::default();
        for slot in self.active.iter_mut().filter(|a| a.live) {
            if slot.tween.stop() == TweenEvent::Ended {
                apply(slot.target, slot.tween.current());
                tick.ended += 1;
                tick.barrier |= slot.target == Target::Barrier;
            }
        }
        self.active.clear();
        tick
    }
}

fn check_time(what: &str, ms: f64) -> NeuronalResult<f64> {
    if ms.is_finite() && ms >= 0.0 {
        Ok(ms)
    } else {
        Err(NeuronalError::validation(format!(
            "{what} must be finite and >= 0 (got {ms})"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/neuron.rs"]
mod tests;
