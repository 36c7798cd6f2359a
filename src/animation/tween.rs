use smallvec::SmallVec;

use crate::animation::ease::Ease;
use crate::foundation::core::Vec2;
use crate::foundation::error::{NeuronalError, NeuronalResult};

/// Duration used by [`Tween::new`] until `.duration(..)` is called.
pub const DEFAULT_TWEEN_DURATION_MS: f64 = 500.0;

/// A bag of named numeric fields, e.g. `{x, y}` or `{w}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    fields: SmallVec<[(&'static str, f64); 2]>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field snapshot.
    pub fn scalar(key: &'static str, value: f64) -> Self {
        Self::new().with(key, value)
    }

    /// `{x, y}` snapshot of a point.
    pub fn xy(p: Vec2) -> Self {
        Self::new().with("x", p.x).with("y", p.y)
    }

    pub fn with(mut self, key: &'static str, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Inserts `key`, or overwrites it when already present.
    pub fn set(&mut self, key: &'static str, value: f64) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// The `{x, y}` fields as a point, if both are present.
    pub fn vec2(&self) -> Option<Vec2> {
        Some(Vec2::new(self.get("x")?, self.get("y")?))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when both snapshots carry exactly the same field names.
    pub fn same_keys(&self, other: &Self) -> bool {
        self.len() == other.len() && self.keys().all(|k| other.get(k).is_some())
    }

    fn describe_keys(&self) -> String {
        self.keys().collect::<Vec<_>>().join(", ")
    }
}

/// Coarse tween state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenState {
    /// Built but not yet activated.
    Inert,
    /// Activated; the start delay has not elapsed.
    Waiting,
    Running,
    Done,
}

/// Outcome of a single [`Tween::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenEvent {
    /// Nothing happened: inert, or already finished.
    Idle,
    Waiting,
    /// Fields were recomputed.
    Updated,
    /// Fields snapped to the target; reported exactly once per activation.
    Ended,
}

/// A time-bounded transition of a [`Snapshot`] toward a target snapshot.
///
/// Built inert with builder-style setters, then activated with a start time:
///
/// ```
/// use neuronal::{Ease, Snapshot, Tween, TweenEvent};
///
/// let mut t = Tween::new(Snapshot::scalar("w", 0.0))
///     .to(Snapshot::scalar("w", 10.0))
///     .duration(100.0)
///     .ease(Ease::Linear);
/// t.activate(0.0).unwrap();
/// assert_eq!(t.step(50.0), TweenEvent::Updated);
/// assert_eq!(t.current().get("w"), Some(5.0));
/// assert_eq!(t.step(100.0), TweenEvent::Ended);
/// assert_eq!(t.step(200.0), TweenEvent::Idle);
/// ```
#[derive(Clone, Debug)]
pub struct Tween {
    from: Snapshot,
    to: Snapshot,
    curr: Snapshot,
    duration_ms: f64,
    delay_ms: f64,
    ease: Ease,
    start_ms: Option<f64>,
    state: TweenState,
}

impl Tween {
    /// Inert tween with linear easing and [`DEFAULT_TWEEN_DURATION_MS`]. The target defaults
    /// to `from`, which makes an unconfigured tween a pure timer.
    pub fn new(from: Snapshot) -> Self {
        Self {
            to: from.clone(),
            curr: from.clone(),
            from,
            duration_ms: DEFAULT_TWEEN_DURATION_MS,
            delay_ms: 0.0,
            ease: Ease::Linear,
            start_ms: None,
            state: TweenState::Inert,
        }
    }

    /// Sets the target and resets the clock; the tween must be activated again.
    pub fn to(mut self, target: Snapshot) -> Self {
        self.to = target;
        self.start_ms = None;
        self.state = TweenState::Inert;
        self
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: f64) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Like [`Tween::ease`], resolving the curve by table name.
    pub fn ease_named(self, name: &str) -> NeuronalResult<Self> {
        Ok(self.ease(Ease::from_name(name)?))
    }

    /// Starts the clock at `now_ms`.
    ///
    /// Fails when `from`/`to` field sets differ or the timing is not finite and non-negative.
    pub fn activate(&mut self, now_ms: f64) -> NeuronalResult<()> {
        self.validate()?;
        self.curr = self.from.clone();
        self.start_ms = Some(now_ms);
        self.state = TweenState::Waiting;
        Ok(())
    }

    /// Restarts toward a new target from the current values.
    ///
    /// Legal at any point, including mid-flight; used to chain oscillations.
    pub fn retarget(&mut self, target: Snapshot, now_ms: f64) -> NeuronalResult<()> {
        self.from = self.curr.clone();
        self.to = target;
        self.activate(now_ms)
    }

    /// Recomputes the fields for `now_ms`.
    pub fn step(&mut self, now_ms: f64) -> TweenEvent {
        let Some(start) = self.start_ms else {
            return TweenEvent::Idle;
        };
        if self.state == TweenState::Done {
            return TweenEvent::Idle;
        }

        let elapsed = now_ms - start;
        if elapsed < self.delay_ms {
            self.state = TweenState::Waiting;
            return TweenEvent::Waiting;
        }

        let active = elapsed - self.delay_ms;
        if active >= self.duration_ms {
            return self.finish();
        }

        let eased = self.ease.apply(active / self.duration_ms);
        for (key, value) in self.curr.fields.iter_mut() {
            let a = self.from.get(key).unwrap_or(*value);
            let b = self.to.get(key).unwrap_or(a);
            *value = a + (b - a) * eased;
        }
        self.state = TweenState::Running;
        TweenEvent::Updated
    }

    /// Forces completion: fields jump to the target and `Ended` is reported unless the tween
    /// already finished.
    pub fn stop(&mut self) -> TweenEvent {
        if self.state == TweenState::Done {
            return TweenEvent::Idle;
        }
        self.finish()
    }

    fn finish(&mut self) -> TweenEvent {
        self.curr = self.to.clone();
        self.state = TweenState::Done;
        TweenEvent::Ended
    }

    fn validate(&self) -> NeuronalResult<()> {
        if !self.from.same_keys(&self.to) {
            return Err(NeuronalError::animation(format!(
                "tween fields mismatch: from {{{}}} vs to {{{}}}",
                self.from.describe_keys(),
                self.to.describe_keys()
            )));
        }
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(NeuronalError::animation("tween duration must be finite and >= 0"));
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(NeuronalError::animation("tween delay must be finite and >= 0"));
        }
        Ok(())
    }

    pub fn current(&self) -> &Snapshot {
        &self.curr
    }

    pub fn from_snapshot(&self) -> &Snapshot {
        &self.from
    }

    pub fn target(&self) -> &Snapshot {
        &self.to
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == TweenState::Done
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    pub fn easing(&self) -> Ease {
        self.ease
    }

    /// Time from activation until completion.
    pub fn span_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
