use std::str::FromStr;

use crate::foundation::error::{NeuronalError, NeuronalResult};
use crate::foundation::math::{HALF_PI, PI};

/// Named easing curves.
///
/// `apply` maps progress in `[0, 1]` onto eased progress. Every curve satisfies
/// `apply(0) == 0` and `apply(1) == 1`; the back and elastic families overshoot in between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
}

const BACK: f64 = 1.70158;
const BACK_IN_OUT: f64 = BACK * 1.525;

impl Ease {
    /// Every registered curve, in table order.
    pub const ALL: [Ease; 31] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::InQuart,
        Self::OutQuart,
        Self::InOutQuart,
        Self::InQuint,
        Self::OutQuint,
        Self::InOutQuint,
        Self::InSine,
        Self::OutSine,
        Self::InOutSine,
        Self::InExpo,
        Self::OutExpo,
        Self::InOutExpo,
        Self::InCirc,
        Self::OutCirc,
        Self::InOutCirc,
        Self::InBack,
        Self::OutBack,
        Self::InOutBack,
        Self::InElastic,
        Self::OutElastic,
        Self::InOutElastic,
        Self::InBounce,
        Self::OutBounce,
        Self::InOutBounce,
    ];

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(5) / 2.0)
                }
            }
            Self::InSine => 1.0 - (t * HALF_PI).cos(),
            Self::OutSine => (t * HALF_PI).sin(),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::InExpo => 2f64.powf(10.0 * t - 10.0),
            Self::OutExpo => 1.0 - 2f64.powf(-10.0 * t),
            Self::InOutExpo => {
                if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Self::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Self::InOutCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            Self::InBack => (BACK + 1.0) * t * t * t - BACK * t * t,
            Self::OutBack => {
                let u = t - 1.0;
                1.0 + (BACK + 1.0) * u * u * u + BACK * u * u
            }
            Self::InOutBack => {
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((BACK_IN_OUT + 1.0) * 2.0 * t - BACK_IN_OUT)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((BACK_IN_OUT + 1.0) * (t * 2.0 - 2.0) + BACK_IN_OUT)
                        + 2.0)
                        / 2.0
                }
            }
            Self::InElastic => {
                -(2f64.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * (2.0 * PI / 3.0)).sin()
            }
            Self::OutElastic => {
                2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * (2.0 * PI / 3.0)).sin() + 1.0
            }
            Self::InOutElastic => {
                let c = 2.0 * PI / 4.5;
                if t < 0.5 {
                    -(2f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * c).sin()) / 2.0
                } else {
                    (2f64.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * c).sin()) / 2.0 + 1.0
                }
            }
            Self::InBounce => 1.0 - bounce_out(1.0 - t),
            Self::OutBounce => bounce_out(t),
            Self::InOutBounce => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }
        }
    }

    /// Kebab-case table name, e.g. `"in-out-quad"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in-quad",
            Self::OutQuad => "out-quad",
            Self::InOutQuad => "in-out-quad",
            Self::InCubic => "in-cubic",
            Self::OutCubic => "out-cubic",
            Self::InOutCubic => "in-out-cubic",
            Self::InQuart => "in-quart",
            Self::OutQuart => "out-quart",
            Self::InOutQuart => "in-out-quart",
            Self::InQuint => "in-quint",
            Self::OutQuint => "out-quint",
            Self::InOutQuint => "in-out-quint",
            Self::InSine => "in-sine",
            Self::OutSine => "out-sine",
            Self::InOutSine => "in-out-sine",
            Self::InExpo => "in-expo",
            Self::OutExpo => "out-expo",
            Self::InOutExpo => "in-out-expo",
            Self::InCirc => "in-circ",
            Self::OutCirc => "out-circ",
            Self::InOutCirc => "in-out-circ",
            Self::InBack => "in-back",
            Self::OutBack => "out-back",
            Self::InOutBack => "in-out-back",
            Self::InElastic => "in-elastic",
            Self::OutElastic => "out-elastic",
            Self::InOutElastic => "in-out-elastic",
            Self::InBounce => "in-bounce",
            Self::OutBounce => "out-bounce",
            Self::InOutBounce => "in-out-bounce",
        }
    }

    /// Resolves a table name.
    ///
    /// Accepts kebab-case (`"out-circ"`), the dotted `Family.direction` spelling
    /// (`"Circ.out"`, `"Quad.inOut"`) and `"cube"` as an alias for `"cubic"`.
    pub fn from_name(name: &str) -> NeuronalResult<Self> {
        let canonical = canonical_name(name);
        Self::ALL
            .into_iter()
            .find(|e| e.name() == canonical)
            .ok_or_else(|| NeuronalError::animation(format!("unknown easing '{name}'")))
    }
}

impl FromStr for Ease {
    type Err = NeuronalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn canonical_name(name: &str) -> String {
    let name = name.trim();
    let kebab = match name.split_once('.') {
        Some((family, direction)) => {
            let direction = match direction.to_ascii_lowercase().as_str() {
                "inout" => "in-out".to_string(),
                other => other.to_string(),
            };
            format!("{direction}-{}", family.to_ascii_lowercase())
        }
        None => name.to_ascii_lowercase(),
    };
    match kebab.strip_suffix("-cube") {
        Some(prefix) => format!("{prefix}-cubic"),
        None => kebab,
    }
}

fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let u = t - 1.5 / D1;
        N1 * u * u + 0.75
    } else if t < 2.5 / D1 {
        let u = t - 2.25 / D1;
        N1 * u * u + 0.9375
    } else {
        let u = t - 2.625 / D1;
        N1 * u * u + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
