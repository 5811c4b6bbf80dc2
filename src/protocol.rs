//! Wire format of command frames
//!
//! Every frame is 11 bytes:
//!
//! ```text
//! '%' | tag | payload[8] | '&'
//! ```
//!
//! - tag `'0'`: drone off, payload is all NUL
//! - tag `'1'`: drone on, payload is all NUL
//! - tag `'2'`: note; `payload[0]` is the raw note number (0-11) and
//!   `payload[1..8]` the duration in microseconds as ASCII digits, ended
//!   early by NUL or `'&'`
//!
//! The receiver answers every accepted frame with a single [`ACK`] byte.

use embassy_time::Duration;

use crate::color::Note;
use crate::command::Command;

/// Length of a complete frame
pub const FRAME_LEN: usize = 11;
/// First byte of every frame
pub const START_MARKER: u8 = b'%';
/// Last byte of every frame
pub const END_MARKER: u8 = b'&';
/// Acknowledgment sent back for an accepted frame
pub const ACK: u8 = b'1';

pub const TAG_DRONE_OFF: u8 = b'0';
pub const TAG_DRONE_ON: u8 = b'1';
pub const TAG_NOTE: u8 = b'2';

const TAG_OFFSET: usize = 1;
const NOTE_OFFSET: usize = 2;
const DURATION_OFFSET: usize = 3;
/// Number of ASCII digits the duration field holds
pub const DURATION_DIGITS: usize = 7;
/// Longest duration that fits the frame
pub const MAX_DURATION_MICROS: u64 = 9_999_999;

/// Reasons a frame is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Nothing was received
    Empty,
    /// First byte is not [`START_MARKER`]
    BadStartMarker,
    /// Last captured byte is not [`END_MARKER`]
    BadEndMarker,
    /// Frame ends before the fields its tag needs
    Truncated,
    /// Tag byte names no command
    UnknownTag(u8),
    /// Note number outside `0..12`
    NoteOutOfRange(u8),
    /// Duration field holds something other than digits before its end
    BadDuration,
}

/// Errors returned while encoding a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Duration needs more than [`DURATION_DIGITS`] digits
    DurationTooLong(Duration),
}

/// Validate a captured frame and turn it into a command
///
/// The frame must start with [`START_MARKER`] and its last byte must be
/// [`END_MARKER`]. Frames cut short by an early end marker are accepted as
/// long as the fields the tag needs are present.
pub fn parse_frame(frame: &[u8]) -> Result<Command, FrameError> {
    let (&first, _) = frame.split_first().ok_or(FrameError::Empty)?;
    if first != START_MARKER {
        return Err(FrameError::BadStartMarker);
    }
    let (&last, body) = frame.split_last().ok_or(FrameError::Empty)?;
    if last != END_MARKER {
        return Err(FrameError::BadEndMarker);
    }

    let tag = *body.get(TAG_OFFSET).ok_or(FrameError::Truncated)?;
    match tag {
        TAG_DRONE_OFF => Ok(Command::DroneOff),
        TAG_DRONE_ON => Ok(Command::DroneOn),
        TAG_NOTE => {
            let raw = *body.get(NOTE_OFFSET).ok_or(FrameError::Truncated)?;
            let note = Note::from_raw(raw).ok_or(FrameError::NoteOutOfRange(raw))?;
            // Everything after the note byte, end marker included
            let field = &frame[DURATION_OFFSET..];
            let duration = parse_duration(field)?;
            Ok(Command::note(note, duration))
        }
        other => Err(FrameError::UnknownTag(other)),
    }
}

/// Parse leading decimal digits; the byte after them must be NUL or the
/// end marker
fn parse_duration(field: &[u8]) -> Result<Duration, FrameError> {
    let mut micros: u64 = 0;
    for &byte in field {
        match byte {
            b'0'..=b'9' => {
                micros = micros
                    .checked_mul(10)
                    .and_then(|value| value.checked_add(u64::from(byte - b'0')))
                    .ok_or(FrameError::BadDuration)?;
            }
            0 | END_MARKER => return Ok(Duration::from_micros(micros)),
            _ => return Err(FrameError::BadDuration),
        }
    }
    Err(FrameError::BadDuration)
}

impl Command {
    /// Encode the command as a complete frame
    pub fn encode(&self) -> Result<[u8; FRAME_LEN], EncodeError> {
        let mut frame = [0u8; FRAME_LEN];
        frame[0] = START_MARKER;
        frame[FRAME_LEN - 1] = END_MARKER;

        match self {
            Self::DroneOff => frame[TAG_OFFSET] = TAG_DRONE_OFF,
            Self::DroneOn => frame[TAG_OFFSET] = TAG_DRONE_ON,
            Self::Note(event) => {
                let micros = event.duration.as_micros();
                if micros > MAX_DURATION_MICROS {
                    return Err(EncodeError::DurationTooLong(event.duration));
                }
                frame[TAG_OFFSET] = TAG_NOTE;
                frame[NOTE_OFFSET] = event.note.raw();
                let field = &mut frame[DURATION_OFFSET..DURATION_OFFSET + DURATION_DIGITS];
                write_decimal(field, micros);
            }
        }

        Ok(frame)
    }
}

/// Write `value` as unpadded ASCII digits at the start of `out`
#[allow(clippy::cast_possible_truncation)]
fn write_decimal(out: &mut [u8], mut value: u64) {
    let mut digits = [0u8; DURATION_DIGITS];
    let mut len = 0;
    loop {
        digits[len] = b'0' + (value % 10) as u8;
        len += 1;
        value /= 10;
        if value == 0 || len == digits.len() {
            break;
        }
    }
    for (slot, digit) in out.iter_mut().zip(digits[..len].iter().rev()) {
        *slot = *digit;
    }
}
