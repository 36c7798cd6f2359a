use rand::{Rng as _, SeedableRng as _};
use rand_chacha::ChaCha8Rng;

pub const PI: f64 = std::f64::consts::PI;
pub const TWO_PI: f64 = std::f64::consts::TAU;
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

/// Re-maps `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]` without clamping.
pub fn map_range(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let span = in_hi - in_lo;
    if span == 0.0 {
        return out_lo;
    }
    out_lo + (out_hi - out_lo) * ((value - in_lo) / span)
}

/// Moves `current` a fraction `rate` of the way toward `target`, snapping once the
/// remaining gap is smaller than `rate`.
pub fn approach(current: f64, target: f64, rate: f64) -> f64 {
    let diff = target - current;
    if diff.abs() <= rate {
        target
    } else {
        current + diff * rate
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Derives a stable child seed for a named consumer of a master seed.
pub fn derive_seed(master: u64, label: &str) -> u64 {
    let mut h = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    h.write_u64(master);
    h.write_bytes(label.as_bytes());
    h.finish()
}

/// Seedable random source used by randomized geometry and the performance host.
///
/// Every call site owns its generator; there is no process-wide random state.
#[derive(Clone, Debug)]
pub struct SeededRng(ChaCha8Rng);

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uniform in `[0, hi)`; returns `0` when `hi <= 0`.
    pub fn below(&mut self, hi: f64) -> f64 {
        self.range(0.0, hi)
    }

    /// Uniform in `[lo, hi)`; returns `lo` for an empty range.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo || !(hi - lo).is_finite() {
            return lo;
        }
        self.0.gen_range(lo..hi)
    }

    /// Fresh 64-bit seed for a downstream generator.
    pub fn next_seed(&mut self) -> u64 {
        self.0.r#gen()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
