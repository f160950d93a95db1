//! Event sources drained by the input tracker

use std::collections::VecDeque;

use super::events::{Event, EventKind};

/// Anything the tracker can pull pending events from
pub trait EventSource {
    /// Next pending event, or `None` once the queue is empty
    fn poll_event(&mut self) -> Option<Event>;
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn poll_event(&mut self) -> Option<Event> {
        (**self).poll_event()
    }
}

/// In-memory FIFO of events
///
/// Used for tests, replays, and headless runs where no window exists.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn push_kind(&mut self, timestamp: u32, kind: EventKind) {
        self.push(Event::new(timestamp, kind));
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSource for EventQueue {
    fn poll_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }
}

impl Extend<Event> for EventQueue {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl FromIterator<Event> for EventQueue {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}
