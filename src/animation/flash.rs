//! Randomized half-panel flash
//!
//! Every side group lights the first `n` LEDs of one of its four-LED
//! subgroups, with both the subgroup and `n` drawn at random. The top group
//! joins on a coin flip.

use crate::color::Rgb;
use crate::panel::SymmetryGroup;
use crate::random::RandomSource;

/// Upper bound of the number of LEDs lit within one subgroup
pub const MAX_LIT_PER_SUBGROUP: u8 = 4;

const SIDE_GROUPS: usize = SymmetryGroup::SIDES.len();

/// Lit part of one symmetry group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashSelection {
    pub group: SymmetryGroup,
    /// Index into the group's subgroups
    pub subgroup: u8,
    /// Number of leading LEDs lit, `1..=4`
    pub count: u8,
}

impl FlashSelection {
    /// Pixel indices lit by this selection, in table order
    pub fn pixels(self) -> impl Iterator<Item = u8> {
        let subgroup = self.group.subgroups().get(usize::from(self.subgroup));
        subgroup
            .into_iter()
            .flatten()
            .copied()
            .take(usize::from(self.count))
    }
}

/// Pixels chosen for one note flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashPattern {
    sides: [FlashSelection; SIDE_GROUPS],
    top: Option<FlashSelection>,
}

impl FlashPattern {
    /// Draw a new pattern
    ///
    /// Draw order: one subgroup per side group, one count per side group,
    /// then the top coin flip followed by the top subgroup and count.
    #[allow(clippy::cast_possible_truncation)]
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let subgroups = SymmetryGroup::SIDES.map(|group| rng.below(group.subgroups().len() as u8));
        let counts = SymmetryGroup::SIDES.map(|_| 1 + rng.below(MAX_LIT_PER_SUBGROUP));

        let sides = core::array::from_fn(|side| FlashSelection {
            group: SymmetryGroup::SIDES[side],
            subgroup: subgroups[side],
            count: counts[side],
        });

        let top = rng.coin_flip().then(|| {
            let group = SymmetryGroup::Top;
            let subgroup = rng.below(group.subgroups().len() as u8);
            let count = 1 + rng.below(MAX_LIT_PER_SUBGROUP);
            FlashSelection {
                group,
                subgroup,
                count,
            }
        });

        Self { sides, top }
    }

    /// Selections in group order, side groups first
    pub fn selections(&self) -> impl Iterator<Item = FlashSelection> + '_ {
        self.sides.iter().copied().chain(self.top)
    }

    /// Check if the top group takes part
    pub fn includes_top(&self) -> bool {
        self.top.is_some()
    }

    /// Every lit pixel index
    pub fn pixels(&self) -> impl Iterator<Item = u8> + '_ {
        self.selections().flat_map(FlashSelection::pixels)
    }

    /// Paint the lit pixels with `color`, leaving the rest untouched
    pub fn render(&self, leds: &mut [Rgb], color: Rgb) {
        for index in self.pixels() {
            if let Some(led) = leds.get_mut(usize::from(index)) {
                *led = color;
            }
        }
    }
}
