//! Animations played on the sculpture
//!
//! Each animation only decides which pixels get which color. Committing
//! frames and holding them is left to the [`Controller`](crate::Controller).

mod drone;
mod flash;

pub use drone::{
    DRONE_CYCLE, DRONE_FALL, DRONE_RISE, DRONE_STEPS, DroneAnimation, DroneConfig, DronePhase,
    DroneStep,
};
pub use flash::{FlashPattern, FlashSelection, MAX_LIT_PER_SUBGROUP};

use crate::color::Rgb;

/// Fill every LED with one color
pub fn fill(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}
