//! Frame decoding module
//!
//! Turns bytes waiting on the transport into controller commands. Every
//! decode attempt drains the transport afterwards so a partial or garbled
//! frame never leaks into the next one.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::command::Command;
use crate::controller::Controller;
use crate::protocol::{ACK, END_MARKER, FRAME_LEN, FrameError, parse_frame};
use crate::random::RandomSource;
use crate::transport::{Transport, WriteError};

/// Why a decode attempt ran nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The frame was rejected and not acknowledged
    Malformed(FrameError),
    /// The frame was valid but its acknowledgment could not be sent
    AckFailed(WriteError),
}

impl From<FrameError> for DecodeError {
    fn from(err: FrameError) -> Self {
        Self::Malformed(err)
    }
}

/// Outcome of one decode attempt
pub type DecodeResult = Result<Command, DecodeError>;

/// Bytes captured for one frame
pub type CapturedFrame = Vec<u8, FRAME_LEN>;

/// Reads frames from a transport and dispatches them to a controller
pub struct Decoder<T: Transport> {
    transport: T,
}

impl<T: Transport> Decoder<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Decode a frame if bytes are waiting (non-blocking)
    ///
    /// This is the body of the firmware main loop.
    pub fn poll<O: OutputDriver, R: RandomSource>(
        &mut self,
        controller: &mut Controller<O, R>,
    ) -> Option<DecodeResult> {
        if !self.transport.has_pending() {
            return None;
        }
        Some(self.decode(controller))
    }

    /// Read, validate and run one frame
    ///
    /// An accepted frame is acknowledged with a single [`ACK`] byte before
    /// its animation starts; the call returns once the animation is over.
    /// A rejected frame gets no acknowledgment and runs nothing. Neither
    /// does a valid frame whose acknowledgment cannot be sent.
    pub fn decode<O: OutputDriver, R: RandomSource>(
        &mut self,
        controller: &mut Controller<O, R>,
    ) -> DecodeResult {
        let frame = self.read_frame();
        let command = match parse_frame(&frame) {
            Ok(command) => command,
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!("[Decoder.decode] dropping frame {:?}: {:?}", frame, err);
                return Err(err.into());
            }
        };

        if let Err(err) = self.transport.write_byte(ACK) {
            #[cfg(feature = "esp32-log")]
            println!("[Decoder.decode] ack for {:?} not sent", command);
            return Err(DecodeError::AckFailed(err));
        }
        #[cfg(feature = "esp32-log")]
        println!("[Decoder.decode] accepted {:?}", command);

        let transport = &mut self.transport;
        controller.execute(command, || transport.has_pending());
        Ok(command)
    }

    /// Capture up to [`FRAME_LEN`] bytes, then drain the transport
    ///
    /// Capturing stops after the end marker or when no more bytes are
    /// waiting.
    pub fn read_frame(&mut self) -> CapturedFrame {
        let mut frame = CapturedFrame::new();
        while !frame.is_full() && self.transport.has_pending() {
            let Some(byte) = self.transport.read_byte() else {
                break;
            };
            if frame.push(byte).is_err() || byte == END_MARKER {
                break;
            }
        }

        self.transport.drain();
        frame
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }
}
