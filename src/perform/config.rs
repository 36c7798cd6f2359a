use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{NeuronalError, NeuronalResult};

/// Per-visual cycle durations in milliseconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Durations {
    pub suspensions: [f64; 3],
    pub moon: f64,
    pub prisms: f64,
    pub clay: f64,
    pub pinwheel: f64,
    pub squiggle: f64,
    pub engines: f64,
    /// Start offset between consecutive engine bars.
    pub engine_stagger: f64,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            suspensions: [500.0, 1000.0, 750.0],
            moon: 250.0,
            prisms: 500.0,
            clay: 500.0,
            pinwheel: 1000.0,
            squiggle: 500.0,
            engines: 500.0,
            engine_stagger: 0.0,
        }
    }
}

impl Durations {
    fn all(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        [
            ("suspensions[0]", self.suspensions[0]),
            ("suspensions[1]", self.suspensions[1]),
            ("suspensions[2]", self.suspensions[2]),
            ("moon", self.moon),
            ("prisms", self.prisms),
            ("clay", self.clay),
            ("pinwheel", self.pinwheel),
            ("squiggle", self.squiggle),
            ("engines", self.engines),
            ("engine_stagger", self.engine_stagger),
        ]
        .into_iter()
    }
}

/// Settings for a [`Performance`](crate::perform::performance::Performance).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PerformConfig {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub randomize: bool,
    pub router_depth: usize,
    pub router_level: f64,
    pub palette: usize,
    pub durations: Durations,
}

impl Default for PerformConfig {
    fn default() -> Self {
        let canvas = Canvas::default();
        Self {
            width: canvas.width,
            height: canvas.height,
            seed: 0,
            randomize: false,
            router_depth: crate::perform::router::DEFAULT_DEPTH,
            router_level: 1.0,
            palette: 0,
            durations: Durations::default(),
        }
    }
}

impl PerformConfig {
    /// Reads a JSON config; missing fields take their defaults.
    pub fn from_path(path: &Path) -> NeuronalResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| NeuronalError::serde(format!("'{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json(s: &str) -> NeuronalResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| NeuronalError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> NeuronalResult<()> {
        self.canvas()?;
        if self.router_depth == 0 {
            return Err(NeuronalError::validation("router_depth must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.router_level) {
            return Err(NeuronalError::validation("router_level must be within [0, 1]"));
        }
        for (name, ms) in self.durations.all() {
            if !ms.is_finite() || ms < 0.0 {
                return Err(NeuronalError::validation(format!(
                    "duration '{name}' must be finite and >= 0 (got {ms})"
                )));
            }
        }
        Ok(())
    }

    pub fn canvas(&self) -> NeuronalResult<Canvas> {
        Canvas::new(self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/perform/config.rs"]
mod tests;
