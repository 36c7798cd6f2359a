//! Concrete shapes. Each module pairs a [`Geometry`](crate::animation::lifecycle::Geometry)
//! implementation with a `Shape<..>` alias and its parameter setters.

pub mod clay;
pub mod engine;
pub mod moon;
pub mod pinwheel;
pub mod piston;
pub mod prism;
pub mod squiggle;
pub mod suspension;

use crate::animation::neuron::Target;
use crate::animation::tween::Snapshot;
use crate::foundation::core::Vec2;
use crate::foundation::error::{NeuronalError, NeuronalResult};

/// Point counts must be at least one.
pub(crate) fn check_amount(amount: usize) -> NeuronalResult<usize> {
    if amount == 0 {
        return Err(NeuronalError::validation("amount must be >= 1"));
    }
    Ok(amount)
}

/// Writes a `{x, y}` update into `points[i]` when `target` is `Target::Point(i)`.
pub(crate) fn apply_point(points: &mut [Vec2], target: Target, values: &Snapshot) -> bool {
    let Target::Point(i) = target else {
        return false;
    };
    match (points.get_mut(i), values.vec2()) {
        (Some(p), Some(v)) => {
            *p = v;
            true
        }
        _ => false,
    }
}
