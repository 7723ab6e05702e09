use crate::key::{Key, Modifiers};
use std::collections::VecDeque;

/// Press/release state for keys and mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Press,
    Release,
}

/// What a mouse event reports: motion or a button edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Move,
    Press,
    Release,
}

/// A normalized input event, ready for delivery to the application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The drawable surface changed size; dimensions are the corrected
    /// backing-surface size, not the requested one.
    Resize { width: u32, height: u32 },
    /// Cursor motion or a button edge at the current cursor position.
    Mouse { x: f32, y: f32, kind: MouseEventKind },
    /// Vertical scroll amount. Horizontal scroll never reaches applications.
    Scroll { amount: f32 },
    /// A key edge with the modifiers held at that moment.
    Key {
        key: Key,
        modifiers: Modifiers,
        kind: ActionKind,
    },
    /// Character input produced by a key press.
    Typed { ch: char },
}

/// FIFO queue of normalized events at the platform boundary.
///
/// The native layer pushes as events arrive; the loop drains once per frame.
/// Events pushed during frame K are therefore seen by the application no
/// earlier than frame K+1.
#[derive(Debug, Default)]
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

    /// Remove and yield every pending event in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_arrival_order() {
        let mut queue = EventQueue::new();
        queue.push(Event::Scroll { amount: 1.0 });
        queue.push(Event::Typed { ch: 'a' });
        queue.push(Event::Scroll { amount: -2.0 });

        let drained: Vec<Event> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                Event::Scroll { amount: 1.0 },
                Event::Typed { ch: 'a' },
                Event::Scroll { amount: -2.0 },
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn drain_on_empty_queue_yields_nothing() {
        let mut queue = EventQueue::new();
        assert_eq!(queue.drain().count(), 0);
    }

    #[test]
    fn push_after_drain_starts_fresh() {
        let mut queue = EventQueue::new();
        queue.push(Event::Typed { ch: 'x' });
        queue.drain().count();
        queue.push(Event::Typed { ch: 'y' });
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain().next(), Some(Event::Typed { ch: 'y' }));
    }
}
