use crate::keymap;
use pyrite_event::{ActionKind, Event, EventQueue, Modifiers, MouseEventKind};
use winit::keyboard::KeyCode;

/// Translates native window callbacks into normalized events.
///
/// Holds the only state translation needs: the latest cursor position and
/// the current modifier set. Every method is total over its input; there are
/// no error paths. Events go into the queue the loop drains once per frame,
/// so delivery timing is independent of when the native layer fires.
#[derive(Debug, Default)]
pub struct EventNormalizer {
    cursor: (f32, f32),
    modifiers: Modifiers,
}

impl EventNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The drawable surface changed; `width`/`height` are the corrected size.
    pub fn resize(&mut self, width: u32, height: u32, queue: &mut EventQueue) {
        queue.push(Event::Resize { width, height });
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32, queue: &mut EventQueue) {
        self.cursor = (x, y);
        queue.push(Event::Mouse {
            x,
            y,
            kind: MouseEventKind::Move,
        });
    }

    /// Button edges report the cursor position at the moment of the button
    /// event, not the position of the last delivered motion event.
    pub fn mouse_button(&mut self, pressed: bool, queue: &mut EventQueue) {
        let (x, y) = self.cursor;
        let kind = if pressed {
            MouseEventKind::Press
        } else {
            MouseEventKind::Release
        };
        queue.push(Event::Mouse { x, y, kind });
    }

    /// Only the vertical offset reaches applications; horizontal scroll is
    /// discarded. Known limitation, not an oversight.
    pub fn scroll(&mut self, _xoffset: f32, yoffset: f32, queue: &mut EventQueue) {
        queue.push(Event::Scroll { amount: yoffset });
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// A key edge. Codes outside the fixed table produce nothing. Native
    /// key repeats arrive here as further presses and surface unchanged.
    pub fn key_input(&mut self, code: KeyCode, pressed: bool, queue: &mut EventQueue) {
        let Some(key) = keymap::key_from_code(code) else {
            return;
        };
        let kind = if pressed {
            ActionKind::Press
        } else {
            ActionKind::Release
        };
        queue.push(Event::Key {
            key,
            modifiers: self.modifiers,
            kind,
        });
    }

    /// Character input from a key press, one event per character.
    pub fn text(&mut self, text: &str, queue: &mut EventQueue) {
        for ch in text.chars() {
            queue.push(Event::Typed { ch });
        }
    }
}
