use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::animation::{DroneAnimation, DroneConfig, FlashPattern, fill};
use crate::color::{BLACK, Note, Rgb};
use crate::command::Command;
use crate::curve::CurveError;
use crate::panel::{Frame, LED_COUNT};
use crate::random::{DEFAULT_SEED, RandomSource, seeded};

/// Configuration for the animation controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub drone: DroneConfig,
    /// Seed of the default random source
    pub seed: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            drone: DroneConfig::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Animation controller - owns the frame buffer and plays animations
///
/// Every animation runs to completion on the caller's thread. The drone is
/// the only animation that can be cut short, and only at the end of a
/// breath.
pub struct Controller<O: OutputDriver, R: RandomSource = fastrand::Rng> {
    // External dependencies
    output: O,
    rng: R,

    // Internal state
    drone: DroneAnimation,
    frame: Frame,
}

impl<O: OutputDriver> Controller<O> {
    /// Create a controller with a seeded [`fastrand::Rng`]
    ///
    /// Fails if the drone curve cannot be built; the caller must not run
    /// without it.
    pub fn new(output: O, config: &ControllerConfig) -> Result<Self, CurveError> {
        Self::with_rng(output, seeded(config.seed), config)
    }
}

impl<O: OutputDriver, R: RandomSource> Controller<O, R> {
    /// Create a controller with a custom random source
    pub fn with_rng(output: O, rng: R, config: &ControllerConfig) -> Result<Self, CurveError> {
        let drone = DroneAnimation::new(&config.drone)?;
        #[cfg(feature = "esp32-log")]
        println!(
            "[Controller.new] drone curve ready: {} steps, peak {:?}",
            drone.curve().len(),
            drone.curve().peak()
        );
        Ok(Self {
            output,
            rng,
            drone,
            frame: [BLACK; LED_COUNT],
        })
    }

    /// Run the animation a decoded command asks for
    ///
    /// `interrupted` reports whether new input is waiting; only the drone
    /// consults it.
    pub fn execute(&mut self, command: Command, interrupted: impl FnMut() -> bool) {
        match command {
            Command::DroneOff => self.stop_and_blank(),
            Command::DroneOn => {
                self.run_drone(interrupted);
            }
            Command::Note(event) => self.run_note_flash(event.note.color(), event.duration),
        }
    }

    /// Turn every LED off and commit
    pub fn stop_and_blank(&mut self) {
        fill(&mut self.frame, BLACK);
        self.commit();
    }

    /// Breathe until `interrupted` reports new input
    ///
    /// Input pending on entry returns immediately without drawing. Input
    /// noticed later lets the current breath finish first. Returns the
    /// number of breaths played.
    pub fn run_drone(&mut self, mut interrupted: impl FnMut() -> bool) -> u32 {
        if interrupted() {
            return 0;
        }

        let mut cycles = 0;
        let mut stop = false;
        loop {
            for step in self.drone.cycle() {
                fill(&mut self.frame, step.color);
                self.output.write(&self.frame);
                self.output.hold(step.hold);

                if !stop && interrupted() {
                    stop = true;
                }
            }
            cycles += 1;

            if stop {
                return cycles;
            }
        }
    }

    /// Flash a random half-panel pattern in `color` for `duration`, then
    /// turn everything off
    pub fn run_note_flash(&mut self, color: Rgb, duration: Duration) {
        let pattern = FlashPattern::random(&mut self.rng);
        self.show_flash(&pattern, color, duration);
    }

    /// Flash the pattern of a note
    pub fn play_note(&mut self, note: Note, duration: Duration) {
        self.run_note_flash(note.color(), duration);
    }

    /// Show a given flash pattern, hold it and blank
    pub fn show_flash(&mut self, pattern: &FlashPattern, color: Rgb, duration: Duration) {
        fill(&mut self.frame, BLACK);
        pattern.render(&mut self.frame, color);
        self.commit();
        self.output.hold(duration);
        self.stop_and_blank();
    }

    /// Set one pixel in the frame buffer without committing
    ///
    /// Returns `false` if `index` is outside the sculpture.
    pub fn set_pixel(&mut self, index: u8, color: Rgb) -> bool {
        match self.frame.get_mut(usize::from(index)) {
            Some(led) => {
                *led = color;
                true
            }
            None => false,
        }
    }

    /// Push the frame buffer to the strips
    pub fn commit(&mut self) {
        self.output.write(&self.frame);
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn drone(&self) -> &DroneAnimation {
        &self.drone
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
