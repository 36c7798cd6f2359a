//! Live performance layer: the palette, the audio router stand-in, key dispatch over the full
//! set of visuals, and scripted key cues.

pub mod config;
pub mod cue;
pub mod palette;
pub mod performance;
pub mod router;
