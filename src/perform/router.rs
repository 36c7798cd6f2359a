use crate::foundation::math::approach;

/// Default number of analysis bands.
pub const DEFAULT_DEPTH: usize = 128;

/// Smoothing rate used by [`ConstantRouter::smooth`].
pub const DEFAULT_DAMP: f64 = 0.0125;

/// Source of per-band audio levels in `[0, 1]`.
pub trait BandSource {
    /// Level of band `index`; `smoothed` selects the damped reading.
    fn band(&self, index: usize, smoothed: bool) -> f64;

    /// Number of bands.
    fn depth(&self) -> usize;

    /// Advances analysis by one frame.
    fn update(&mut self);

    fn is_kick(&self) -> bool;
    fn is_snare(&self) -> bool;
    fn is_hat(&self) -> bool;
    fn is_onset(&self) -> bool;
    fn is_range(&self, low: usize, high: usize, threshold: f64) -> bool;
}

/// Analysis stand-in: every band reads the same fixed level.
#[derive(Clone, Debug)]
pub struct ConstantRouter {
    depth: usize,
    level: f64,
    damp: f64,
    smoothed: f64,
}

impl Default for ConstantRouter {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH, 1.0)
    }
}

impl ConstantRouter {
    /// `level` is clamped to `[0, 1]`; `depth` is at least one band.
    pub fn new(depth: usize, level: f64) -> Self {
        let level = level.clamp(0.0, 1.0);
        Self {
            depth: depth.max(1),
            level,
            damp: DEFAULT_DAMP,
            smoothed: level,
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn set_level(&mut self, level: f64) {
        self.level = level.clamp(0.0, 1.0);
    }

    pub fn damp(&self) -> f64 {
        self.damp
    }

    pub fn set_damp(&mut self, damp: f64) {
        self.damp = damp;
    }

    pub fn set_depth(&mut self, depth: usize) {
        self.depth = depth.max(1);
    }

    /// Damped step of `current` toward `target`.
    pub fn smooth(&self, current: f64, target: f64) -> f64 {
        approach(current, target, self.damp)
    }
}

impl BandSource for ConstantRouter {
    fn band(&self, index: usize, smoothed: bool) -> f64 {
        if index >= self.depth {
            return 0.0;
        }
        if smoothed { self.smoothed } else { self.level }
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn update(&mut self) {
        self.smoothed = self.smooth(self.smoothed, self.level);
    }

    fn is_kick(&self) -> bool {
        true
    }

    fn is_snare(&self) -> bool {
        false
    }

    fn is_hat(&self) -> bool {
        true
    }

    fn is_onset(&self) -> bool {
        true
    }

    fn is_range(&self, _low: usize, _high: usize, _threshold: f64) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/perform/router.rs"]
mod tests;
