//! Neuronal is a set of audio-reactive generative shapes built on a small tween engine.
//!
//! Every shape runs the same cycle: a press of [`Animatable::play`] animates it in, a barrier
//! tween marks the end of that wave, it animates out, and it returns to rest. Time is supplied
//! by the host through `update(delta_ms)`, so frames are fully deterministic.
//!
//! - Build shapes directly ([`Prism`], [`Moon`], [`Clay`], ...) or drive the whole set through
//!   a [`Performance`]
//! - Collect draw batches into a [`Scene`]
//! - Rasterize scenes with a [`RenderBackend`] (CPU via `vello_cpu`)
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod perform;
pub mod render;
pub mod shapes;

pub use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8, Vec2, Vector2};
pub use crate::foundation::error::{NeuronalError, NeuronalResult};
pub use crate::foundation::math::{HALF_PI, PI, SeededRng, TWO_PI, approach, derive_seed, map_range};

pub use crate::animation::ease::Ease;
pub use crate::animation::lifecycle::{Animatable, Geometry, Phase, Shape, Wave};
pub use crate::animation::neuron::{Neuron, Target, Tick, TweenId};
pub use crate::animation::tween::{Snapshot, Tween, TweenEvent, TweenState};
pub use crate::perform::config::{Durations, PerformConfig};
pub use crate::perform::cue::{Cue, CueSheet};
pub use crate::perform::palette::{Palette, Slot};
pub use crate::perform::performance::Performance;
pub use crate::perform::router::{BandSource, ConstantRouter};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::scene::{DrawOp, Scene};
pub use crate::shapes::{
    clay::Clay, engine::Engine, moon::Moon, pinwheel::Pinwheel, piston::Piston, prism::Prism,
    squiggle::Squiggle, suspension::Suspension,
};
