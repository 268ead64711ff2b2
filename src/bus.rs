//! Firmware event bus for `no_std` environments.
//!
//! Events can be published from any context, interrupts included, and are
//! delivered in arrival order on whatever context drains the
//! [`Subscription`]. A bus has at most one subscription, so every event
//! reaches the one listener and draining from a single context is what
//! serializes event handling. The listener itself holds no locks.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;
use log::warn;

use crate::event::Event;

/// The bus was full and the event was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFull(pub Event);

/// Bounded event queue shared between publishers and the subscriber.
///
/// Usually placed in a `static`:
///
/// ```ignore
/// static EVENTS: EventBus<8> = EventBus::new();
/// ```
pub struct EventBus<const SIZE: usize> {
    state: Mutex<RefCell<BusState<SIZE>>>,
}

struct BusState<const SIZE: usize> {
    queue: Deque<Event, SIZE>,
    subscribed: bool,
}

impl<const SIZE: usize> EventBus<SIZE> {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(BusState {
                queue: Deque::new(),
                subscribed: false,
            })),
        }
    }

    /// Get a publishing handle. Any number of publishers may exist.
    pub const fn publisher(&self) -> EventPublisher<'_, SIZE> {
        EventPublisher { bus: self }
    }

    /// Register as the listener of this bus.
    ///
    /// Returns `None` if the bus already has a listener. There is no way
    /// to unsubscribe, the returned handle is meant to be kept for the
    /// lifetime of the firmware.
    pub fn subscribe(&self) -> Option<Subscription<'_, SIZE>> {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            if state.subscribed {
                warn!("Event bus already has a listener");
                return None;
            }
            state.subscribed = true;
            Some(Subscription { bus: self })
        })
    }

    pub fn is_subscribed(&self) -> bool {
        critical_section::with(|cs| self.state.borrow(cs).borrow().subscribed)
    }

    /// Number of events waiting for delivery
    pub fn pending(&self) -> usize {
        critical_section::with(|cs| self.state.borrow(cs).borrow().queue.len())
    }

    fn push(&self, event: Event) -> Result<(), BusFull> {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            state.queue.push_back(event).map_err(BusFull)
        })
    }

    fn pop(&self) -> Option<Event> {
        critical_section::with(|cs| self.state.borrow(cs).borrow_mut().queue.pop_front())
    }
}

impl<const SIZE: usize> Default for EventBus<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct EventPublisher<'a, const SIZE: usize> {
    bus: &'a EventBus<SIZE>,
}

impl<const SIZE: usize> EventPublisher<'_, SIZE> {
    /// Queue an event for delivery
    pub fn publish(&self, event: Event) -> Result<(), BusFull> {
        self.bus.push(event).inspect_err(|_| {
            warn!("Event bus full, dropping {:?}", event);
        })
    }
}

/// Receiving side of an [`EventBus`]
pub struct Subscription<'a, const SIZE: usize> {
    bus: &'a EventBus<SIZE>,
}

impl<const SIZE: usize> Subscription<'_, SIZE> {
    /// Take the oldest pending event, if any
    pub fn next_event(&mut self) -> Option<Event> {
        self.bus.pop()
    }
}
