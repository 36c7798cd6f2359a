pub mod ease;
pub mod lifecycle;
pub mod neuron;
pub mod tween;
