//! Pointer input primitives
//!
//! Independent of the ledger; used by interactive front ends to turn raw
//! pointer events into gestures.

pub mod long_press;

pub use long_press::{LongPress, PointerEvent, PointerSource, DEFAULT_PRESS_DURATION, MOVE_THRESHOLD};
