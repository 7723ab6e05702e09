use std::ops::{BitOr, BitOrAssign};

/// One physical key, isomorphic to the native key-code space.
///
/// The platform crate owns the fixed 1:1 table between this enum and the
/// native codes; applications never see a native code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Dash,
    Apostrophe,
    Semicolon,
    Equals,
    Comma,
    Period,
    Slash,
    Backslash,
    Backspace,
    Tab,
    CapsLock,
    Space,
    Enter,
    Escape,
    Insert,
    PrintScreen,
    Delete,
    PageUp,
    PageDown,
    Home,
    End,
    Pause,
    ScrollLock,
    ArrowLeft,
    ArrowRight,
    ArrowDown,
    ArrowUp,
    LeftBracket,
    LeftShift,
    LeftControl,
    LeftSuper,
    LeftAlt,
    RightBracket,
    RightShift,
    RightControl,
    RightSuper,
    RightAlt,
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    NumLock,
    NumMultiply,
    NumDivide,
    NumAdd,
    NumSubtract,
    NumZero,
    NumOne,
    NumTwo,
    NumThree,
    NumFour,
    NumFive,
    NumSix,
    NumSeven,
    NumEight,
    NumNine,
    NumDecimal,
    NumEnter,
}

/// Modifier keys held at the moment an event fired.
///
/// Derived per event, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CONTROL: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    pub const SUPER: Modifiers = Modifiers(1 << 3);

    /// True if every modifier in `other` is also held in `self`.
    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_union_and_contains() {
        let mods = Modifiers::SHIFT | Modifiers::CONTROL;
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(mods.contains(Modifiers::CONTROL));
        assert!(mods.contains(Modifiers::SHIFT | Modifiers::CONTROL));
        assert!(!mods.contains(Modifiers::ALT));
    }

    #[test]
    fn modifiers_default_is_empty() {
        let mods = Modifiers::default();
        assert!(mods.is_empty());
        assert_eq!(mods, Modifiers::NONE);
        assert!(mods.contains(Modifiers::NONE));
    }

    #[test]
    fn modifiers_accumulate_in_place() {
        let mut mods = Modifiers::NONE;
        mods |= Modifiers::ALT;
        mods |= Modifiers::SUPER;
        assert!(mods.contains(Modifiers::ALT | Modifiers::SUPER));
        assert!(!mods.contains(Modifiers::SHIFT));
    }
}
