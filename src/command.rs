use embassy_time::Duration;

use crate::color::Note;

/// Actions a frame can request from the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop the drone and turn every LED off
    DroneOff,
    /// Start breathing until new input arrives
    DroneOn,
    /// Flash the color of a note
    Note(NoteEvent),
}

/// A note to flash and how long to keep it lit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    pub note: Note,
    pub duration: Duration,
}

impl Command {
    /// Note flash command
    pub const fn note(note: Note, duration: Duration) -> Self {
        Self::Note(NoteEvent { note, duration })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DroneOff => "drone_off",
            Self::DroneOn => "drone_on",
            Self::Note(_) => "note",
        }
    }
}
