//! Bounded message channel shared between the lamp's control loops.
//!
//! A multi-sender queue built on `critical-section` and `heapless::Deque`.
//! Channels are `const`-constructible so they can live in `static` items
//! and hand out `'static` handles to every loop thread.
//!
//! A channel can be closed. Closing does not discard queued messages: the
//! receiver keeps draining them and only then observes [`TryReceiveError::Closed`].

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when a value could not be queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrySendError<T> {
    /// The queue is at capacity.
    Full(T),
    /// The channel was closed.
    Closed(T),
}

impl<T> TrySendError<T> {
    /// Take back the value that was not sent.
    pub fn into_inner(self) -> T {
        match self {
            Self::Full(value) | Self::Closed(value) => value,
        }
    }
}

/// Error returned when no value could be received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryReceiveError {
    /// Nothing queued yet.
    Empty,
    /// Nothing queued and the channel is closed, so nothing ever will be.
    Closed,
}

struct State<T, const SIZE: usize> {
    queue: Deque<T, SIZE>,
    closed: bool,
}

/// A bounded, thread-safe channel.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<State<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    /// Create a new empty, open channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(State {
                queue: Deque::new(),
                closed: false,
            })),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Try to send a value into the channel.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            if state.closed {
                return Err(TrySendError::Closed(value));
            }
            state.queue.push_back(value).map_err(TrySendError::Full)
        })
    }

    /// Try to receive a value from the channel.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            match state.queue.pop_front() {
                Some(value) => Ok(value),
                None if state.closed => Err(TryReceiveError::Closed),
                None => Err(TryReceiveError::Empty),
            }
        })
    }

    /// Close the channel. Further sends fail, queued values stay receivable.
    pub fn close(&self) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().closed = true;
        });
    }

    /// Returns `true` once [`Channel::close`] has been called.
    pub fn is_closed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().closed)
    }

    /// Number of values currently queued.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().queue.len())
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Channel`].
///
/// This is a lightweight reference that can be copied and passed around.
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Clone for Sender<'_, T, SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const SIZE: usize> Copy for Sender<'_, T, SIZE> {}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Try to send a value into the channel.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }

    /// Close the underlying channel.
    pub fn close(&self) {
        self.channel.close();
    }
}

/// A receiver handle for a [`Channel`].
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Clone for Receiver<'_, T, SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const SIZE: usize> Copy for Receiver<'_, T, SIZE> {}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// Try to receive a value from the channel.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }
}
