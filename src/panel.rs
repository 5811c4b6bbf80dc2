//! Physical layout of the sculpture
//!
//! ```text
//!                          P11 [80,87]
//!
//!                 P9 [64,71] P8 [56,63] P7 [48,55]
//!  P10 [72,79]                                      P6 [40,47]
//!  P1  [0,7]                                        P5 [32,39]
//!                 P2 [8,15]  P3 [16,23] P4 [24,31]
//! ```
//!
//! Panels are wired in pairs onto strips: strip 1 carries panels 1-2,
//! strip 5 carries panels 9-10 and strip 6 carries the top panel alone.

use core::ops::Range;

use crate::color::Rgb;

/// Number of addressable LEDs
pub const LED_COUNT: usize = 88;
/// Number of panels
pub const PANEL_COUNT: usize = 11;
/// LEDs on one panel
pub const LEDS_PER_PANEL: usize = 8;
/// Number of physical strips
pub const STRIP_COUNT: usize = 6;
/// Maximum number of LEDs on a strip
pub const LEDS_PER_STRIP: usize = 16;

/// Pixel state of the whole sculpture
pub type Frame = [Rgb; LED_COUNT];

/// Four consecutive LEDs lit together by the note flash
pub type Subgroup = [u8; 4];

/// One panel of eight LEDs, numbered `1..=11`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Panel(u8);

impl Panel {
    /// Panel on top of the sculpture
    pub const TOP: Self = Self(11);

    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && (number as usize) <= PANEL_COUNT {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Panel owning the pixel at `index`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn of(index: u8) -> Option<Self> {
        if (index as usize) < LED_COUNT {
            Some(Self(index / LEDS_PER_PANEL as u8 + 1))
        } else {
            None
        }
    }

    /// Iterate all panels in wiring order
    #[allow(clippy::cast_possible_truncation)]
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=PANEL_COUNT).map(|number| Self(number as u8))
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Pixel indices owned by the panel
    pub const fn range(self) -> Range<usize> {
        let start = (self.0 as usize - 1) * LEDS_PER_PANEL;
        start..start + LEDS_PER_PANEL
    }

    /// Get a slice of the frame covered by the panel
    pub fn pixels(self, frame: &mut [Rgb]) -> &mut [Rgb] {
        &mut frame[self.range()]
    }
}

/// One physical strip, numbered `1..=6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strip(u8);

impl Strip {
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && (number as usize) <= STRIP_COUNT {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Locate a pixel as its strip and the offset along that strip
    #[allow(clippy::cast_possible_truncation)]
    pub const fn of(index: u8) -> Option<(Self, u8)> {
        if (index as usize) < LED_COUNT {
            let per_strip = LEDS_PER_STRIP as u8;
            Some((Self(index / per_strip + 1), index % per_strip))
        } else {
            None
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Pixel indices driven by the strip
    pub const fn range(self) -> Range<usize> {
        let start = (self.0 as usize - 1) * LEDS_PER_STRIP;
        let end = start + LEDS_PER_STRIP;
        if end > LED_COUNT {
            start..LED_COUNT
        } else {
            start..end
        }
    }

    /// Panels carried by the strip
    #[allow(clippy::cast_possible_truncation)]
    pub fn panels(self) -> impl Iterator<Item = Panel> {
        let range = self.range();
        let first = range.start / LEDS_PER_PANEL + 1;
        let last = range.end / LEDS_PER_PANEL;
        (first..=last).filter_map(|number| Panel::new(number as u8))
    }
}

/// Split a frame into the per-strip slices a strip driver transmits
#[allow(clippy::cast_possible_truncation)]
pub fn strips(frame: &[Rgb]) -> impl Iterator<Item = (Strip, &[Rgb])> {
    frame
        .chunks(LEDS_PER_STRIP)
        .enumerate()
        .map(|(i, chunk)| (Strip(i as u8 + 1), chunk))
}

// Front: P1, P10
const FRONT: [Subgroup; 4] = [
    [72, 73, 74, 75],
    [76, 77, 78, 79],
    [0, 1, 2, 3],
    [4, 5, 6, 7],
];

// Back: P5, P6
const BACK: [Subgroup; 4] = [
    [32, 33, 34, 35],
    [36, 37, 38, 39],
    [40, 41, 42, 43],
    [44, 45, 46, 47],
];

// Left-left: P7, half of P8
const LEFT_LEFT: [Subgroup; 3] = [[48, 49, 50, 51], [52, 53, 54, 55], [56, 57, 58, 59]];

// Left-right: P9, half of P8
const LEFT_RIGHT: [Subgroup; 3] = [[60, 61, 62, 63], [64, 65, 66, 67], [68, 69, 70, 71]];

// Right-left: P2, half of P3
const RIGHT_LEFT: [Subgroup; 3] = [[8, 9, 10, 11], [12, 13, 14, 15], [16, 17, 18, 19]];

// Right-right: P4, half of P3
const RIGHT_RIGHT: [Subgroup; 3] = [[20, 21, 22, 23], [24, 25, 26, 27], [28, 29, 30, 31]];

// Top: P11
const TOP: [Subgroup; 2] = [[80, 81, 82, 83], [84, 85, 86, 87]];

/// Symmetric regions of the sculpture used for partial illumination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymmetryGroup {
    Front,
    Back,
    LeftLeft,
    LeftRight,
    RightLeft,
    RightRight,
    Top,
}

impl SymmetryGroup {
    /// Every group, top last
    pub const ALL: [Self; 7] = [
        Self::Front,
        Self::Back,
        Self::LeftLeft,
        Self::LeftRight,
        Self::RightLeft,
        Self::RightRight,
        Self::Top,
    ];

    /// Groups that always take part in a note flash
    pub const SIDES: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::LeftLeft,
        Self::LeftRight,
        Self::RightLeft,
        Self::RightRight,
    ];

    pub const fn subgroups(self) -> &'static [Subgroup] {
        match self {
            Self::Front => &FRONT,
            Self::Back => &BACK,
            Self::LeftLeft => &LEFT_LEFT,
            Self::LeftRight => &LEFT_RIGHT,
            Self::RightLeft => &RIGHT_LEFT,
            Self::RightRight => &RIGHT_RIGHT,
            Self::Top => &TOP,
        }
    }

    /// Iterate every pixel index of the group in table order
    pub fn pixels(self) -> impl Iterator<Item = u8> {
        self.subgroups().iter().flatten().copied()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::LeftLeft => "left_left",
            Self::LeftRight => "left_right",
            Self::RightLeft => "right_left",
            Self::RightRight => "right_right",
            Self::Top => "top",
        }
    }
}
