/// Convenience result type used across neuronal.
pub type NeuronalResult<T> = Result<T, NeuronalError>;

/// Top-level error taxonomy.
///
/// Guarded no-ops (reconfiguring or replaying a shape mid-cycle) are not errors and never
/// surface here.
#[derive(thiserror::Error, Debug)]
pub enum NeuronalError {
    /// Invalid configuration: zero point counts, negative durations, bad canvas sizes.
    #[error("validation error: {0}")]
    Validation(String),

    /// Tween construction or activation errors (unknown easing, mismatched field sets).
    #[error("animation error: {0}")]
    Animation(String),

    /// Rasterization failures.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NeuronalError {
    /// Build a [`NeuronalError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`NeuronalError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`NeuronalError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`NeuronalError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
