use std::str::FromStr;

use crate::foundation::error::{NeuronalError, NeuronalResult};

/// A key press scheduled at a point in performance time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    pub at_ms: f64,
    pub key: char,
}

impl FromStr for Cue {
    type Err = NeuronalError;

    /// Parses `"<ms>:<key>"`, e.g. `"250:p"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (at, key) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| NeuronalError::validation(format!("cue '{s}' is not '<ms>:<key>'")))?;
        let at_ms: f64 = at
            .trim()
            .parse()
            .map_err(|_| NeuronalError::validation(format!("cue '{s}' has a bad time")))?;
        if !at_ms.is_finite() || at_ms < 0.0 {
            return Err(NeuronalError::validation(format!(
                "cue '{s}' time must be finite and >= 0"
            )));
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Ok(Self { at_ms, key }),
            _ => Err(NeuronalError::validation(format!(
                "cue '{s}' must name exactly one key"
            ))),
        }
    }
}

/// Time-ordered cues, released as the clock passes them.
#[derive(Clone, Debug, Default)]
pub struct CueSheet {
    cues: Vec<Cue>,
    next: usize,
}

impl CueSheet {
    /// Sorts by time; cues sharing a time keep their given order.
    pub fn new(mut cues: Vec<Cue>) -> Self {
        cues.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));
        Self { cues, next: 0 }
    }

    /// Parses a comma or whitespace separated list such as `"0:p, 250:m 900:w"`.
    pub fn parse(text: &str) -> NeuronalResult<Self> {
        let cues = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<NeuronalResult<Vec<Cue>>>()?;
        Ok(Self::new(cues))
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Cues not yet released.
    pub fn remaining(&self) -> usize {
        self.cues.len() - self.next
    }

    /// Releases every cue with `at_ms <= now_ms` that has not been released yet.
    pub fn due(&mut self, now_ms: f64) -> impl Iterator<Item = Cue> + '_ {
        let start = self.next;
        while self.next < self.cues.len() && self.cues[self.next].at_ms <= now_ms {
            self.next += 1;
        }
        self.cues[start..self.next].iter().copied()
    }

    pub fn rewind(&mut self) {
        self.next = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/perform/cue.rs"]
mod tests;
