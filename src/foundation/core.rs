use crate::foundation::error::{NeuronalError, NeuronalResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Point/vector helpers layered on [`Vec2`].
///
/// Shapes treat every `Vec2` as a position on the drawing surface.
pub trait Vector2 {
    /// Euclidean distance to `other`.
    fn distance(self, other: Self) -> f64;
    /// Direction (radians) of the ray from `self` toward `other`.
    fn angle_between(self, other: Self) -> f64;
    /// Point at `radius` along `theta` from `self`.
    fn polar(self, radius: f64, theta: f64) -> Self;
}

impl Vector2 for Vec2 {
    fn distance(self, other: Self) -> f64 {
        (other - self).hypot()
    }

    fn angle_between(self, other: Self) -> f64 {
        (other - self).atan2()
    }

    fn polar(self, radius: f64, theta: f64) -> Self {
        Vec2::new(self.x + radius * theta.cos(), self.y + radius * theta.sin())
    }
}

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> NeuronalResult<Self> {
        if width == 0 || height == 0 {
            return Err(NeuronalError::validation("Canvas width and height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn width_f(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f(self) -> f64 {
        f64::from(self.height)
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(self.width_f() / 2.0, self.height_f() / 2.0)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::gray(0);
    pub const WHITE: Self = Self::gray(255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Channel-wise blend toward `other`; channels are truncated, alpha is kept.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).trunc().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(self.r, other.r, t),
            g: lerp_u8(self.g, other.g, t),
            b: lerp_u8(self.b, other.b, t),
            a: self.a,
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
