//! Control surface for the renderer.
//!
//! External code (buttons, serial commands, a network task) requests
//! changes by sending a [`ControlIntent`] into the bounded intent queue;
//! the renderer drains pending intents at the start of every frame. The
//! queue is guarded by `critical-section`, so senders may live on other
//! execution contexts (interrupts, second core).

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::effect::EffectId;

/// A requested change to the renderer state.
///
/// Every field is optional; unset fields leave the current value alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlIntent {
    /// Switch to another effect.
    pub effect: Option<EffectId>,
    /// Animation speed (0-255).
    pub speed: Option<u8>,
    /// Global brightness scale (0-255).
    pub brightness: Option<u8>,
    /// Index into the discrete palette bank.
    pub palette: Option<usize>,
    /// Index into the gradient bank; blends in over subsequent frames.
    pub gradient: Option<usize>,
}

impl ControlIntent {
    pub fn effect(id: EffectId) -> Self {
        Self {
            effect: Some(id),
            ..Self::default()
        }
    }

    pub fn speed(speed: u8) -> Self {
        Self {
            speed: Some(speed),
            ..Self::default()
        }
    }

    pub fn brightness(brightness: u8) -> Self {
        Self {
            brightness: Some(brightness),
            ..Self::default()
        }
    }

    pub fn palette(index: usize) -> Self {
        Self {
            palette: Some(index),
            ..Self::default()
        }
    }

    pub fn gradient(index: usize) -> Self {
        Self {
            gradient: Some(index),
            ..Self::default()
        }
    }
}

/// Error returned when the intent queue is full.
///
/// Intents are `Copy`, so a rejected send loses nothing; the caller can
/// retry on a later frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlOverflow;

/// Bounded intent queue connecting control tasks to the renderer.
pub struct ControlChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<ControlIntent, SIZE>>>,
}

impl<const SIZE: usize> ControlChannel<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for control tasks.
    ///
    /// Senders are cheap copies sharing the same queue; hand one to each
    /// task that needs to drive the renderer.
    pub const fn sender(&self) -> ControlSender<'_, SIZE> {
        ControlSender { channel: self }
    }

    /// Handle for the renderer, which drains the queue once per frame.
    pub const fn receiver(&self) -> ControlReceiver<'_, SIZE> {
        ControlReceiver { channel: self }
    }

    fn push(&self, intent: ControlIntent) -> Result<(), ControlOverflow> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .push_back(intent)
                .map_err(|_| ControlOverflow)
        })
    }

    fn pop(&self) -> Option<ControlIntent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for ControlChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`ControlChannel`].
#[derive(Clone, Copy)]
pub struct ControlSender<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlSender<'_, SIZE> {
    /// Queue an intent, failing if the queue is full.
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), ControlOverflow> {
        self.channel.push(intent)
    }
}

/// Receiving half of a [`ControlChannel`].
///
/// Not `Copy`: the renderer is the single consumer.
pub struct ControlReceiver<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlReceiver<'_, SIZE> {
    /// Take the oldest pending intent, if any.
    pub fn try_receive(&self) -> Option<ControlIntent> {
        self.channel.pop()
    }
}
