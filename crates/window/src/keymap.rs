//! Fixed 1:1 table between native key codes and the engine [`Key`] space,
//! plus the modifier-state conversion. Pure data; both directions are plain
//! matches so the compiler checks exhaustiveness on the engine side.

use pyrite_event::{Key, Modifiers};
use winit::keyboard::{KeyCode, ModifiersState};

/// Map a native key code into the engine key space.
///
/// Codes outside the table (media keys, IME keys, and similar) return `None`
/// and never surface to applications.
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Minus => Key::Dash,
        KeyCode::Quote => Key::Apostrophe,
        KeyCode::Semicolon => Key::Semicolon,
        KeyCode::Equal => Key::Equals,
        KeyCode::Comma => Key::Comma,
        KeyCode::Period => Key::Period,
        KeyCode::Slash => Key::Slash,
        KeyCode::Backslash => Key::Backslash,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::CapsLock => Key::CapsLock,
        KeyCode::Space => Key::Space,
        KeyCode::Enter => Key::Enter,
        KeyCode::Escape => Key::Escape,
        KeyCode::Insert => Key::Insert,
        KeyCode::PrintScreen => Key::PrintScreen,
        KeyCode::Delete => Key::Delete,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Pause => Key::Pause,
        KeyCode::ScrollLock => Key::ScrollLock,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::BracketLeft => Key::LeftBracket,
        KeyCode::ShiftLeft => Key::LeftShift,
        KeyCode::ControlLeft => Key::LeftControl,
        KeyCode::SuperLeft => Key::LeftSuper,
        KeyCode::AltLeft => Key::LeftAlt,
        KeyCode::BracketRight => Key::RightBracket,
        KeyCode::ShiftRight => Key::RightShift,
        KeyCode::ControlRight => Key::RightControl,
        KeyCode::SuperRight => Key::RightSuper,
        KeyCode::AltRight => Key::RightAlt,
        KeyCode::Digit0 => Key::Zero,
        KeyCode::Digit1 => Key::One,
        KeyCode::Digit2 => Key::Two,
        KeyCode::Digit3 => Key::Three,
        KeyCode::Digit4 => Key::Four,
        KeyCode::Digit5 => Key::Five,
        KeyCode::Digit6 => Key::Six,
        KeyCode::Digit7 => Key::Seven,
        KeyCode::Digit8 => Key::Eight,
        KeyCode::Digit9 => Key::Nine,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,
        KeyCode::NumLock => Key::NumLock,
        KeyCode::NumpadMultiply => Key::NumMultiply,
        KeyCode::NumpadDivide => Key::NumDivide,
        KeyCode::NumpadAdd => Key::NumAdd,
        KeyCode::NumpadSubtract => Key::NumSubtract,
        KeyCode::Numpad0 => Key::NumZero,
        KeyCode::Numpad1 => Key::NumOne,
        KeyCode::Numpad2 => Key::NumTwo,
        KeyCode::Numpad3 => Key::NumThree,
        KeyCode::Numpad4 => Key::NumFour,
        KeyCode::Numpad5 => Key::NumFive,
        KeyCode::Numpad6 => Key::NumSix,
        KeyCode::Numpad7 => Key::NumSeven,
        KeyCode::Numpad8 => Key::NumEight,
        KeyCode::Numpad9 => Key::NumNine,
        KeyCode::NumpadDecimal => Key::NumDecimal,
        KeyCode::NumpadEnter => Key::NumEnter,
        _ => return None,
    };
    Some(key)
}

/// Map an engine key back to its native code. Total: every engine key has
/// exactly one native code.
pub fn code_from_key(key: Key) -> KeyCode {
    match key {
        Key::Dash => KeyCode::Minus,
        Key::Apostrophe => KeyCode::Quote,
        Key::Semicolon => KeyCode::Semicolon,
        Key::Equals => KeyCode::Equal,
        Key::Comma => KeyCode::Comma,
        Key::Period => KeyCode::Period,
        Key::Slash => KeyCode::Slash,
        Key::Backslash => KeyCode::Backslash,
        Key::Backspace => KeyCode::Backspace,
        Key::Tab => KeyCode::Tab,
        Key::CapsLock => KeyCode::CapsLock,
        Key::Space => KeyCode::Space,
        Key::Enter => KeyCode::Enter,
        Key::Escape => KeyCode::Escape,
        Key::Insert => KeyCode::Insert,
        Key::PrintScreen => KeyCode::PrintScreen,
        Key::Delete => KeyCode::Delete,
        Key::PageUp => KeyCode::PageUp,
        Key::PageDown => KeyCode::PageDown,
        Key::Home => KeyCode::Home,
        Key::End => KeyCode::End,
        Key::Pause => KeyCode::Pause,
        Key::ScrollLock => KeyCode::ScrollLock,
        Key::ArrowLeft => KeyCode::ArrowLeft,
        Key::ArrowRight => KeyCode::ArrowRight,
        Key::ArrowDown => KeyCode::ArrowDown,
        Key::ArrowUp => KeyCode::ArrowUp,
        Key::LeftBracket => KeyCode::BracketLeft,
        Key::LeftShift => KeyCode::ShiftLeft,
        Key::LeftControl => KeyCode::ControlLeft,
        Key::LeftSuper => KeyCode::SuperLeft,
        Key::LeftAlt => KeyCode::AltLeft,
        Key::RightBracket => KeyCode::BracketRight,
        Key::RightShift => KeyCode::ShiftRight,
        Key::RightControl => KeyCode::ControlRight,
        Key::RightSuper => KeyCode::SuperRight,
        Key::RightAlt => KeyCode::AltRight,
        Key::Zero => KeyCode::Digit0,
        Key::One => KeyCode::Digit1,
        Key::Two => KeyCode::Digit2,
        Key::Three => KeyCode::Digit3,
        Key::Four => KeyCode::Digit4,
        Key::Five => KeyCode::Digit5,
        Key::Six => KeyCode::Digit6,
        Key::Seven => KeyCode::Digit7,
        Key::Eight => KeyCode::Digit8,
        Key::Nine => KeyCode::Digit9,
        Key::F1 => KeyCode::F1,
        Key::F2 => KeyCode::F2,
        Key::F3 => KeyCode::F3,
        Key::F4 => KeyCode::F4,
        Key::F5 => KeyCode::F5,
        Key::F6 => KeyCode::F6,
        Key::F7 => KeyCode::F7,
        Key::F8 => KeyCode::F8,
        Key::F9 => KeyCode::F9,
        Key::F10 => KeyCode::F10,
        Key::F11 => KeyCode::F11,
        Key::F12 => KeyCode::F12,
        Key::A => KeyCode::KeyA,
        Key::B => KeyCode::KeyB,
        Key::C => KeyCode::KeyC,
        Key::D => KeyCode::KeyD,
        Key::E => KeyCode::KeyE,
        Key::F => KeyCode::KeyF,
        Key::G => KeyCode::KeyG,
        Key::H => KeyCode::KeyH,
        Key::I => KeyCode::KeyI,
        Key::J => KeyCode::KeyJ,
        Key::K => KeyCode::KeyK,
        Key::L => KeyCode::KeyL,
        Key::M => KeyCode::KeyM,
        Key::N => KeyCode::KeyN,
        Key::O => KeyCode::KeyO,
        Key::P => KeyCode::KeyP,
        Key::Q => KeyCode::KeyQ,
        Key::R => KeyCode::KeyR,
        Key::S => KeyCode::KeyS,
        Key::T => KeyCode::KeyT,
        Key::U => KeyCode::KeyU,
        Key::V => KeyCode::KeyV,
        Key::W => KeyCode::KeyW,
        Key::X => KeyCode::KeyX,
        Key::Y => KeyCode::KeyY,
        Key::Z => KeyCode::KeyZ,
        Key::NumLock => KeyCode::NumLock,
        Key::NumMultiply => KeyCode::NumpadMultiply,
        Key::NumDivide => KeyCode::NumpadDivide,
        Key::NumAdd => KeyCode::NumpadAdd,
        Key::NumSubtract => KeyCode::NumpadSubtract,
        Key::NumZero => KeyCode::Numpad0,
        Key::NumOne => KeyCode::Numpad1,
        Key::NumTwo => KeyCode::Numpad2,
        Key::NumThree => KeyCode::Numpad3,
        Key::NumFour => KeyCode::Numpad4,
        Key::NumFive => KeyCode::Numpad5,
        Key::NumSix => KeyCode::Numpad6,
        Key::NumSeven => KeyCode::Numpad7,
        Key::NumEight => KeyCode::Numpad8,
        Key::NumNine => KeyCode::Numpad9,
        Key::NumDecimal => KeyCode::NumpadDecimal,
        Key::NumEnter => KeyCode::NumpadEnter,
    }
}

/// Derive the engine modifier set from the native modifier state.
pub fn modifiers_from_state(state: ModifiersState) -> Modifiers {
    let mut mods = Modifiers::NONE;
    if state.shift_key() {
        mods |= Modifiers::SHIFT;
    }
    if state.control_key() {
        mods |= Modifiers::CONTROL;
    }
    if state.alt_key() {
        mods |= Modifiers::ALT;
    }
    if state.super_key() {
        mods |= Modifiers::SUPER;
    }
    mods
}
