//! Pitch class to color mapping
//!
//! Colors follow Scriabin's sound-to-color synesthesia chart. Every note
//! index is octave independent: C is 0, Db is 1 and so on up to B at 11.

use crate::color::{Rgb, rgb_from_u32};

/// Number of pitch classes
pub const NOTE_COUNT: usize = 12;

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

#[allow(clippy::unreadable_literal)]
pub const NOTE_COLORS: [Rgb; NOTE_COUNT] = hex_palette![
    0xFF0000, // C: red
    0xCE9AFF, // Db: violet
    0xFFFF00, // D: yellow
    0x656599, // Eb: steel with metallic sheen
    0xE3FBFF, // E: whitish blue
    0xAC1C00, // F: dark red
    0x00CCFF, // Gb: bright blue
    0xFF6500, // G: orange pink
    0xFF00FF, // Ab: purplish violet
    0x33CC33, // A: green
    0x8C8A8C, // Bb: close to Eb
    0x0000FE, // B: close to E
];

const NOTE_NAMES: [&str; NOTE_COUNT] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Octave independent note number in `0..12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note(u8);

impl Note {
    pub const C: Self = Self(0);
    pub const B: Self = Self(11);

    /// Returns `None` when `value` is not a valid pitch class
    pub const fn from_raw(value: u8) -> Option<Self> {
        if (value as usize) < NOTE_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Fold a MIDI note number (0-127) onto its pitch class
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_midi(midi: u8) -> Self {
        Self(midi % NOTE_COUNT as u8)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Color the note is rendered with
    pub const fn color(self) -> Rgb {
        NOTE_COLORS[self.0 as usize]
    }

    pub const fn as_str(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn parse_from_str(s: &str) -> Option<Self> {
        let index = NOTE_NAMES.iter().position(|name| *name == s)?;
        Some(Self(index as u8))
    }
}
