//! Byte transport the decoder reads frames from

use crate::channel::{Receiver, Sender};

/// A byte could not be handed to the link for sending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteError;

/// Serial link as seen by the decoder
///
/// The link is configured elsewhere; the core only reads, writes and asks
/// how much is waiting.
pub trait Transport {
    /// Number of received bytes waiting to be read
    fn bytes_available(&mut self) -> usize;

    /// Read the oldest waiting byte
    fn read_byte(&mut self) -> Option<u8>;

    /// Send one byte back to the remote side
    fn write_byte(&mut self, byte: u8) -> Result<(), WriteError>;

    /// Check if any byte is waiting
    fn has_pending(&mut self) -> bool {
        self.bytes_available() > 0
    }

    /// Discard every waiting byte
    fn drain(&mut self) {
        while self.bytes_available() > 0 {
            if self.read_byte().is_none() {
                break;
            }
        }
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn bytes_available(&mut self) -> usize {
        (**self).bytes_available()
    }

    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), WriteError> {
        (**self).write_byte(byte)
    }

    fn drain(&mut self) {
        (**self).drain();
    }
}

/// Transport over a pair of byte queues
///
/// The serial receive interrupt pushes into the receive queue and a transmit
/// task drains the transmit queue. Writing to a full transmit queue fails
/// and the byte is not queued.
pub struct QueuedTransport<'a, const RX: usize, const TX: usize> {
    rx: Receiver<'a, u8, RX>,
    tx: Sender<'a, u8, TX>,
}

impl<'a, const RX: usize, const TX: usize> QueuedTransport<'a, RX, TX> {
    pub const fn new(rx: Receiver<'a, u8, RX>, tx: Sender<'a, u8, TX>) -> Self {
        Self { rx, tx }
    }
}

impl<const RX: usize, const TX: usize> Transport for QueuedTransport<'_, RX, TX> {
    fn bytes_available(&mut self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.try_receive().ok()
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), WriteError> {
        self.tx.try_send(byte).map_err(|_| WriteError)
    }

    fn drain(&mut self) {
        self.rx.clear();
    }
}
