//! Window and loop ownership: create the native window and GPU surface,
//! translate native input into the engine event model, and drive the
//! fixed-order update/render cycle.
//!
//! # Invariants
//! - Exactly one thread owns the window, the GPU handles, the queue, and the
//!   clock for the whole run.
//! - Frame order is update, clear, render, present, deliver input, advance
//!   timing. Input arriving while frame K runs reaches the application after
//!   frame K presents, so it influences update no earlier than frame K+1.
//! - Initialization failures are fatal; there is no retry path anywhere.

pub mod clock;
pub mod config;
pub mod driver;
pub mod error;
pub mod keymap;
pub mod normalize;
pub mod responder;

mod gfx;

pub use clock::Clock;
pub use config::WindowConfig;
pub use driver::{ExitHandle, run};
pub use error::PlatformError;
pub use normalize::EventNormalizer;
pub use responder::Responder;
