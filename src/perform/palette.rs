use crate::foundation::core::Rgba8;
use crate::foundation::math::approach;

/// Fraction of the remaining fade covered per update.
pub const FADE_RATE: f64 = 0.125;

/// Named palette entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Background = 0,
    Middle = 1,
    Foreground = 2,
    Accent = 3,
    Highlight = 4,
    White = 5,
    Black = 6,
}

pub const SLOTS: usize = 7;

type Bank = [Rgba8; SLOTS];

const W: Rgba8 = Rgba8::WHITE;
const B: Rgba8 = Rgba8::BLACK;

const fn c(r: u8, g: u8, b: u8) -> Rgba8 {
    Rgba8::rgb(r, g, b)
}

pub const BANKS: [Bank; 7] = [
    [c(181, 181, 181), c(141, 164, 170), c(227, 79, 12), c(163, 141, 116), c(255, 197, 215), W, B],
    [c(57, 109, 193), c(186, 60, 223), c(213, 255, 93), c(213, 160, 255), c(36, 221, 165), c(215, 236, 255), B],
    [c(217, 82, 31), c(143, 74, 45), c(255, 108, 87), c(255, 126, 138), c(227, 190, 141), W, B],
    [c(255, 244, 211), c(207, 145, 79), c(38, 83, 122), c(178, 87, 53), c(235, 192, 92), c(226, 82, 87), B],
    [c(191, 178, 138), c(115, 44, 3), c(89, 81, 57), c(217, 210, 176), c(242, 239, 220), c(22, 33, 44), W],
    [W, c(151, 41, 164), c(1, 120, 186), c(255, 255, 0), c(255, 51, 148), B, B],
    [c(39, 6, 54), c(69, 26, 87), c(252, 25, 246), c(52, 255, 253), c(133, 102, 193), c(253, 228, 252), W],
];

/// Cross-fading set of [`Slot`] colors drawn from [`BANKS`].
#[derive(Clone, Debug)]
pub struct Palette {
    index: usize,
    source: Bank,
    current: Bank,
    state: f64,
    assigned: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Palette {
    /// Palette fading in from black to bank `index` (wrapped).
    pub fn new(index: usize) -> Self {
        let index = index % BANKS.len();
        Self {
            index,
            source: BANKS[index],
            current: [B; SLOTS],
            state: 0.0,
            assigned: false,
        }
    }

    pub fn color(&self, slot: Slot) -> Rgba8 {
        self.current[slot as usize]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// True once the running fade has settled on its bank.
    pub fn is_settled(&self) -> bool {
        self.assigned
    }

    /// Starts a fade to the next bank. Ignored until the previous fade has settled.
    pub fn next(&mut self) -> bool {
        if !self.assigned {
            return false;
        }
        self.index = (self.index + 1) % BANKS.len();
        self.state = 0.0;
        self.assigned = false;
        tracing::debug!(bank = self.index, "palette fade");
        true
    }

    /// Advances the fade by one step.
    pub fn update(&mut self) {
        if self.state >= 1.0 {
            if !self.assigned {
                self.source = BANKS[self.index];
                self.assigned = true;
            }
            return;
        }
        self.state = approach(self.state, 1.0, FADE_RATE);
        let dest = &BANKS[self.index];
        for (i, cur) in self.current.iter_mut().enumerate() {
            *cur = self.source[i].lerp(dest[i], self.state);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/perform/palette.rs"]
mod tests;
