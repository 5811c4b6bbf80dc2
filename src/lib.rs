#![no_std]

pub mod animation;
pub mod channel;
pub mod color;
pub mod command;
pub mod controller;
pub mod curve;
pub mod decoder;
pub mod panel;
pub mod protocol;
pub mod random;
pub mod transport;

pub use animation::{DroneAnimation, DroneConfig, FlashPattern};
pub use command::{Command, NoteEvent};
pub use controller::{Controller, ControllerConfig};
pub use curve::{BrightnessCurve, CurveError, CurveShape};
pub use decoder::{DecodeError, DecodeResult, Decoder};
pub use panel::{Frame, LED_COUNT, Panel, Strip, SymmetryGroup};
pub use protocol::{EncodeError, FrameError, parse_frame};
pub use random::RandomSource;
pub use transport::{QueuedTransport, Transport, WriteError};

pub use color::{Note, Rgb};
pub use embassy_time::Duration;

/// Pixel sink the controller commits frames to
///
/// Implement this for the strip hardware. Frames are always
/// [`LED_COUNT`] long; see [`panel::strips`] for splitting them per strip.
pub trait OutputDriver {
    /// Push a complete frame to the LED strips
    fn write(&mut self, colors: &[Rgb]);

    /// Keep the last written frame on display for `duration`
    fn hold(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
