//! Engine event vocabulary: keys, modifiers, and the normalized event stream.
//!
//! # Invariants
//! - Nothing in this crate depends on the native window layer; the platform
//!   crate translates into this vocabulary, applications consume only it.
//! - The queue preserves arrival order; draining never reorders.

pub mod key;
pub mod queue;

pub use key::{Key, Modifiers};
pub use queue::{ActionKind, Event, EventQueue, MouseEventKind};
