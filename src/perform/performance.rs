use crate::animation::lifecycle::Animatable;
use crate::foundation::core::{Canvas, Vec2};
use crate::foundation::error::NeuronalResult;
use crate::foundation::math::{SeededRng, TWO_PI, derive_seed, map_range};
use crate::perform::config::PerformConfig;
use crate::perform::cue::CueSheet;
use crate::perform::palette::{Palette, Slot};
use crate::perform::router::{BandSource, ConstantRouter};
use crate::render::scene::Scene;
use crate::shapes::{
    clay::Clay, engine::Engine, moon::Moon, pinwheel::Pinwheel, prism::Prism, squiggle::Squiggle,
    suspension::Suspension,
};

/// Amount read off a band level: `floor(map(level, 0, 1, lo, hi))`, at least one.
fn level_amount(level: f64, lo: f64, hi: f64) -> usize {
    map_range(level, 0.0, 1.0, lo, hi).floor().max(1.0) as usize
}

/// Keyboard-driven set of visuals sharing a palette and an audio router.
///
/// Update and draw order is fixed: clay, both prisms, the reverse engine, moon, pinwheel,
/// engine, squiggle, then the three suspensions.
#[derive(Debug)]
pub struct Performance {
    canvas: Canvas,
    router: ConstantRouter,
    palette: Palette,
    rng: SeededRng,
    randomize: bool,
    elapsed_ms: f64,

    clay: Clay,
    prism: Prism,
    prism1: Prism,
    engine_reverse: Engine,
    moon: Moon,
    pinwheel: Pinwheel,
    engine: Engine,
    squiggle: Squiggle,
    suspensions: [Suspension; 3],
}

impl Performance {
    pub fn new(config: &PerformConfig) -> NeuronalResult<Self> {
        config.validate()?;
        let canvas = config.canvas()?;
        let d = &config.durations;
        let seed = |label: &str| derive_seed(config.seed, label);
        let (w, h) = (canvas.width_f(), canvas.height_f());

        let mut engine = Engine::new(canvas.center(), w * 0.75, h / 2.0, d.engines)?;
        engine.set_delay(d.engine_stagger);
        engine.initialize()?;
        let mut engine_reverse = Engine::new(canvas.center(), -w * 0.75, h / 2.0, d.engines)?;
        engine_reverse.set_delay(d.engine_stagger);
        engine_reverse.initialize()?;

        let mut perf = Self {
            canvas,
            router: ConstantRouter::new(config.router_depth, config.router_level),
            palette: Palette::new(config.palette),
            rng: SeededRng::new(seed("perform")),
            randomize: config.randomize,
            elapsed_ms: 0.0,
            clay: Clay::new(canvas, d.clay, seed("clay"))?,
            prism: Prism::new(canvas, d.prisms)?,
            prism1: Prism::new(canvas, d.prisms)?,
            engine_reverse,
            moon: Moon::new(canvas, d.moon)?,
            pinwheel: Pinwheel::new(canvas, d.pinwheel, seed("pinwheel"))?,
            engine,
            squiggle: Squiggle::new(canvas, d.squiggle)?,
            suspensions: [
                Suspension::new(canvas, d.suspensions[0], seed("suspension"))?,
                Suspension::new(canvas, d.suspensions[1], seed("suspension1"))?,
                Suspension::new(canvas, d.suspensions[2], seed("suspension2"))?,
            ],
        };
        perf.push_colors();
        tracing::debug!(seed = config.seed, w, h, "performance ready");
        Ok(perf)
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn router_mut(&mut self) -> &mut ConstantRouter {
        &mut self.router
    }

    pub fn is_randomizing(&self) -> bool {
        self.randomize
    }

    /// Simulated time advanced through [`Performance::update`].
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_reverse(&self) -> &Engine {
        &self.engine_reverse
    }

    pub fn clay(&self) -> &Clay {
        &self.clay
    }

    pub fn prisms(&self) -> [&Prism; 2] {
        [&self.prism, &self.prism1]
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn pinwheel(&self) -> &Pinwheel {
        &self.pinwheel
    }

    pub fn squiggle(&self) -> &Squiggle {
        &self.squiggle
    }

    pub fn suspensions(&self) -> &[Suspension; 3] {
        &self.suspensions
    }

    /// True while any visual is mid-cycle.
    pub fn is_busy(&self) -> bool {
        self.visuals().iter().any(|v| v.is_playing())
    }

    /// Handles a key release. Letters are case-insensitive; every digit advances the palette.
    ///
    /// Returns whether the key is bound.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn key(&mut self, key: char) -> NeuronalResult<bool> {
        let (w, h) = (self.canvas.width_f(), self.canvas.height_f());
        let depth = self.router.depth();

        match key.to_ascii_lowercase() {
            'e' => {
                if self.engine_reverse.is_playing() {
                    tracing::trace!("engine blocked by reverse engine");
                    return Ok(true);
                }
                let amp = self.router.band(depth / 4, false);
                self.engine.set_amount(level_amount(amp, 1.0, 12.0))?;
                if self.randomize {
                    let width = self.rng.range(w / 4.0, w);
                    self.engine
                        .set_dimensions(width, map_range(amp, 0.0, 1.0, h / 8.0, h));
                }
                self.engine.initialize()?;
                self.engine.play()?;
            }
            'r' => {
                if self.engine.is_playing() {
                    tracing::trace!("reverse engine blocked by engine");
                    return Ok(true);
                }
                let amp = self.router.band(depth / 4, false);
                self.engine_reverse.set_amount(level_amount(amp, 1.0, 12.0))?;
                if self.randomize {
                    let width = self.rng.range(w / 4.0, w);
                    self.engine_reverse
                        .set_dimensions(-width, map_range(amp, 0.0, 1.0, h / 8.0, h));
                }
                self.engine_reverse.initialize()?;
                self.engine_reverse.play()?;
            }
            'm' => {
                let angle = if self.randomize {
                    self.rng.below(TWO_PI)
                } else {
                    0.0
                };
                self.moon.set_angle(angle);
                self.moon.play()?;
            }
            'p' => {
                let amp = self.router.band(depth - depth / 4, false);
                self.prism.set_amount(level_amount(amp, 3.0, 12.0))?;
                self.prism.play()?;
            }
            'l' => {
                let amp = self.router.band(depth - depth / 4, false);
                self.prism1.set_amount(level_amount(amp, 3.0, 12.0))?;
                self.prism1.play()?;
            }
            's' => self.trigger_suspension(0)?,
            'd' => self.trigger_suspension(1)?,
            'a' => self.trigger_suspension(2)?,
            'c' => {
                let amount = self.rng.range(8.0, 16.0).floor() as usize;
                self.clay.set_amount(amount)?;
                let origin = match self.rng.below(8.0).floor() as u32 {
                    7 => Vec2::new(w / 2.0, 0.0),
                    6 => Vec2::new(0.0, 0.0),
                    5 => Vec2::new(0.0, h / 2.0),
                    4 => Vec2::new(0.0, h),
                    3 => Vec2::new(w / 2.0, h),
                    2 => Vec2::new(w, h),
                    1 => Vec2::new(w, h / 2.0),
                    _ => Vec2::new(w, 0.0),
                };
                self.clay.set_origin(origin);
                let impact = Vec2::new(self.rng.below(w), self.rng.below(h));
                self.clay.set_impact(impact);
                self.clay.play()?;
            }
            'o' => {
                let amp = self.router.band(depth / 2, false);
                self.pinwheel.set_amount(level_amount(amp, 4.0, 10.0))?;
                let (start, end) = if self.randomize {
                    let start = self.rng.below(TWO_PI);
                    (start, self.rng.range(start, TWO_PI))
                } else {
                    (0.0, TWO_PI)
                };
                self.pinwheel.set_angles(start, end);
                let drift = self.rng.below(TWO_PI);
                self.pinwheel.set_drift(drift);
                self.pinwheel.play()?;
            }
            'w' => {
                if self.randomize {
                    let angle = self.rng.below(TWO_PI);
                    self.squiggle.set_angle(angle);
                }
                let revolutions = self.rng.range(0.25, 6.0);
                let amplitude = self.rng.range(h / 8.0, h / 3.0);
                let distance = self.rng.range(w / 8.0, w / 2.0);
                self.squiggle.set_revolutions(revolutions);
                self.squiggle.set_amplitude(amplitude);
                self.squiggle.set_distance(distance);
                self.squiggle.play()?;
            }
            'y' => {
                self.randomize = !self.randomize;
                tracing::debug!(randomize = self.randomize, "randomize toggled");
            }
            k if k.is_ascii_digit() => {
                self.palette.next();
            }
            _ => {
                tracing::trace!("unbound key");
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn trigger_suspension(&mut self, index: usize) -> NeuronalResult<()> {
        let depth = self.router.depth();
        let amp = self.router.band(depth - depth / 10, false);
        let theta = self.rng.below(TWO_PI);
        let seed = self.rng.next_seed();
        let suspension = &mut self.suspensions[index];
        if self.randomize {
            suspension.set_amount(level_amount(amp, 8.0, 32.0))?;
        }
        suspension.set_theta(theta);
        suspension.set_seed(seed);
        suspension.play()
    }

    /// Advances analysis, the palette fade and every visual by one frame of `delta_ms`.
    pub fn update(&mut self, delta_ms: f64) -> NeuronalResult<()> {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed_ms += delta_ms;
        }
        self.router.update();
        self.palette.update();
        self.push_colors();
        for visual in self.visuals_mut() {
            visual.update(delta_ms)?;
        }
        Ok(())
    }

    /// Fires every cue that falls due within the next `delta_ms`, then updates.
    pub fn advance(&mut self, cues: &mut CueSheet, delta_ms: f64) -> NeuronalResult<()> {
        let now = self.elapsed_ms + delta_ms.max(0.0);
        let due: Vec<char> = cues.due(now).map(|cue| cue.key).collect();
        for key in due {
            self.key(key)?;
        }
        self.update(delta_ms)
    }

    /// Background fill plus every visual's draw batches.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn draw(&self) -> Scene {
        let mut scene = Scene::new(self.canvas, self.palette.color(Slot::Background));
        for visual in self.visuals() {
            visual.render(&mut scene.ops);
        }
        scene
    }

    fn push_colors(&mut self) {
        let p = &self.palette;
        let white = p.color(Slot::White);
        for s in &mut self.suspensions {
            s.set_color(white);
        }
        self.engine.set_color(white);
        self.engine_reverse.set_color(white);
        self.moon.set_color(p.color(Slot::Foreground));
        self.prism.set_color(p.color(Slot::Black));
        self.prism1.set_color(p.color(Slot::Black));
        self.clay.set_color(p.color(Slot::Middle));
        self.pinwheel.set_color(p.color(Slot::Accent));
        self.squiggle.set_color(p.color(Slot::Highlight));
    }

    fn visuals(&self) -> [&dyn Animatable; 11] {
        let [s0, s1, s2] = &self.suspensions;
        [
            &self.clay,
            &self.prism,
            &self.prism1,
            &self.engine_reverse,
            &self.moon,
            &self.pinwheel,
            &self.engine,
            &self.squiggle,
            s0,
            s1,
            s2,
        ]
    }

    fn visuals_mut(&mut self) -> [&mut dyn Animatable; 11] {
        let [s0, s1, s2] = &mut self.suspensions;
        [
            &mut self.clay,
            &mut self.prism,
            &mut self.prism1,
            &mut self.engine_reverse,
            &mut self.moon,
            &mut self.pinwheel,
            &mut self.engine,
            &mut self.squiggle,
            s0,
            s1,
            s2,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/perform/performance.rs"]
mod tests;
