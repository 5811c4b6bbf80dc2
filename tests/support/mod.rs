#![allow(dead_code)]

use std::collections::VecDeque;

use ark_lights::{Duration, OutputDriver, RandomSource, Rgb, Transport, WriteError};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

pub const DRONE_ON_FRAME: &[u8; 11] = b"%1\0\0\0\0\0\0\0\0&";
pub const DRONE_OFF_FRAME: &[u8; 11] = b"%0\0\0\0\0\0\0\0\0&";

/// Scripted serial link
///
/// `arriving_after` queues bytes that show up once the receive side has
/// been found empty a given number of times.
#[derive(Debug, Default)]
pub struct FakeTransport {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
    arrival: Option<(usize, Vec<u8>)>,
    empty_polls: usize,
}

impl FakeTransport {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            rx: bytes.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn arriving_after(mut self, empty_polls: usize, bytes: &[u8]) -> Self {
        self.arrival = Some((empty_polls, bytes.to_vec()));
        self
    }

    pub fn written(&self) -> &[u8] {
        &self.tx
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

impl Transport for FakeTransport {
    fn bytes_available(&mut self) -> usize {
        if self.rx.is_empty() {
            self.empty_polls += 1;
            if let Some((after, _)) = &self.arrival {
                if self.empty_polls > *after {
                    let (_, bytes) = self.arrival.take().unwrap();
                    self.rx.extend(bytes);
                }
            }
        }
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), WriteError> {
        self.tx.push(byte);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutputEvent {
    Frame(Vec<Rgb>),
    Hold(Duration),
}

/// Output that records every committed frame and hold instead of sleeping
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub events: Vec<OutputEvent>,
}

impl RecordingOutput {
    pub fn frames(&self) -> Vec<&[Rgb]> {
        self.events
            .iter()
            .filter_map(|event| match event {
                OutputEvent::Frame(frame) => Some(frame.as_slice()),
                OutputEvent::Hold(_) => None,
            })
            .collect()
    }

    pub fn holds(&self) -> Vec<Duration> {
        self.events
            .iter()
            .filter_map(|event| match event {
                OutputEvent::Hold(duration) => Some(*duration),
                OutputEvent::Frame(_) => None,
            })
            .collect()
    }
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.events.push(OutputEvent::Frame(colors.to_vec()));
    }

    fn hold(&mut self, duration: Duration) {
        self.events.push(OutputEvent::Hold(duration));
    }
}

/// Random source replaying a fixed list of values
#[derive(Debug)]
pub struct ScriptedRandom {
    values: Vec<u8>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: &[u8]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: u8) -> u8 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % bound
    }
}

/// Indices of every pixel that is not black
pub fn lit_indices(frame: &[Rgb]) -> Vec<u8> {
    frame
        .iter()
        .enumerate()
        .filter(|(_, led)| **led != BLACK)
        .map(|(i, _)| u8::try_from(i).unwrap())
        .collect()
}
