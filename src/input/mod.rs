//! Humanized pointer and keyboard synthesis.
//!
//! This module provides:
//! - The `InputSink` collaborator and a recording sink for tests
//! - Randomized point placement and timing (`Randomizer`)
//! - Curved, eased pointer trajectories
//! - The `InputSynthesizer` driving a sink
//! - `SendInput` delivery to a window (Windows only)

mod keyboard;
pub mod mouse;
pub mod path;
pub mod random;
pub mod sink;

#[cfg(windows)]
pub mod windows;

pub use mouse::{InputSynthesizer, DEFAULT_MOUSE_SPEED, DEFAULT_SCROLL_UNITS};
pub use path::{movement_duration, plan_path, PathStep};
pub use random::Randomizer;
pub use sink::{InputEvent, InputSink, Key, MouseButton, RecordingSink};

#[cfg(windows)]
pub use self::windows::SendInputSink;
