//! Interrupt-safe byte queues between the serial port and the control loop
//!
//! The receive interrupt pushes incoming bytes through a [`Sender`] while the
//! decoder pulls them through a [`Receiver`]. Acknowledgments travel the
//! other way in a second queue. Every access runs inside a critical section,
//! so both ends may live in different interrupt priorities.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// The queue was full; the rejected value is handed back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// The queue was empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded FIFO shared by an interrupt handler and the main loop
pub struct Channel<T, const SIZE: usize> {
    queue: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Producer handle, usually moved into the interrupt handler
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Consumer handle
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    fn with_queue<U>(&self, f: impl FnOnce(&mut Deque<T, SIZE>) -> U) -> U {
        critical_section::with(|cs| f(&mut *self.queue.borrow(cs).borrow_mut()))
    }

    /// Append a value, handing it back if the queue is full
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.with_queue(|queue| queue.push_back(value).map_err(TrySendError))
    }

    /// Take the oldest value
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.with_queue(|queue| queue.pop_front().ok_or(TryReceiveError))
    }

    pub fn len(&self) -> usize {
        self.with_queue(|queue| queue.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.with_queue(|queue| queue.is_full())
    }

    /// Drop every queued value in one critical section
    pub fn clear(&self) {
        self.with_queue(Deque::clear);
    }
}

impl<T: Copy, const SIZE: usize> Channel<T, SIZE> {
    /// Append as many leading values of `values` as fit
    ///
    /// Returns how many were queued. The rest are left to the caller.
    pub fn try_send_all(&self, values: &[T]) -> usize {
        self.with_queue(|queue| {
            let mut sent = 0;
            for &value in values {
                if queue.push_back(value).is_err() {
                    break;
                }
                sent += 1;
            }
            sent
        })
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of a [`Channel`]
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }

    pub fn is_full(&self) -> bool {
        self.channel.is_full()
    }
}

impl<T: Copy, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Queue a burst, such as the contents of a UART hardware FIFO
    pub fn try_send_all(&self, values: &[T]) -> usize {
        self.channel.try_send_all(values)
    }
}

/// Consumer side of a [`Channel`]
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Number of values waiting
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    /// Discard everything waiting
    pub fn clear(&self) {
        self.channel.clear();
    }
}
