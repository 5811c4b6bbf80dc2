//! Drone breathing animation
//!
//! The whole sculpture rises through a brightness curve and falls back
//! through the same curve in reverse. The rise and fall phases have their
//! own durations which together make one breath.

use embassy_time::Duration;

use crate::color::{Rgb, with_red_only};
use crate::curve::{BrightnessCurve, CurveError, CurveShape};

/// Brightness levels per phase
pub const DRONE_STEPS: usize = 100;
/// Duration of the rising phase
pub const DRONE_RISE: Duration = Duration::from_micros(3_350_000);
/// Duration of the falling phase
pub const DRONE_FALL: Duration = Duration::from_micros(1_450_000);
/// Duration of one breath
pub const DRONE_CYCLE: Duration = Duration::from_micros(4_800_000);

const _: () = assert!(DRONE_RISE.as_micros() + DRONE_FALL.as_micros() == DRONE_CYCLE.as_micros());

/// Configuration of the drone animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DroneConfig {
    /// Peak color. Only the red channel is shown.
    pub color: Rgb,
    /// Brightness levels per phase
    pub steps: usize,
    /// Duration of the rising phase
    pub rise: Duration,
    /// Duration of the falling phase
    pub fall: Duration,
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self {
            color: Rgb { r: 255, g: 0, b: 0 },
            steps: DRONE_STEPS,
            rise: DRONE_RISE,
            fall: DRONE_FALL,
        }
    }
}

impl DroneConfig {
    /// Duration of one breath
    pub fn cycle(&self) -> Duration {
        self.rise + self.fall
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DronePhase {
    Rise,
    Fall,
}

/// One committed level of the breath
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DroneStep {
    pub phase: DronePhase,
    /// Color of every LED during this step
    pub color: Rgb,
    /// How long the step is held
    pub hold: Duration,
}

/// Precomputed drone breath
#[derive(Debug, Clone)]
pub struct DroneAnimation {
    curve: BrightnessCurve,
    rise_hold: Duration,
    fall_hold: Duration,
}

impl DroneAnimation {
    /// Generate the quadratic curve the drone breathes along
    pub fn new(config: &DroneConfig) -> Result<Self, CurveError> {
        let curve = BrightnessCurve::generate(CurveShape::Quadratic, config.color, config.steps)?;
        let steps = curve.len() as u64;
        Ok(Self {
            rise_hold: Duration::from_micros(config.rise.as_micros() / steps),
            fall_hold: Duration::from_micros(config.fall.as_micros() / steps),
            curve,
        })
    }

    pub fn curve(&self) -> &BrightnessCurve {
        &self.curve
    }

    /// Hold of each rising step
    pub fn rise_hold(&self) -> Duration {
        self.rise_hold
    }

    /// Hold of each falling step
    pub fn fall_hold(&self) -> Duration {
        self.fall_hold
    }

    /// Steps of one breath: every level ascending, then every level
    /// descending
    pub fn cycle(&self) -> impl Iterator<Item = DroneStep> + '_ {
        let rise = self.curve.iter().map(|level| DroneStep {
            phase: DronePhase::Rise,
            color: with_red_only(level),
            hold: self.rise_hold,
        });
        let fall = self.curve.iter().rev().map(|level| DroneStep {
            phase: DronePhase::Fall,
            color: with_red_only(level),
            hold: self.fall_hold,
        });
        rise.chain(fall)
    }
}
