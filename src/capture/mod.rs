//! Frame snapshots and the sources that produce them.
//!
//! This module provides:
//! - Immutable pixel snapshots (`RasterFrame`)
//! - The `FrameSource` collaborator and in-memory sources
//! - Window discovery and Windows Graphics Capture of the target window (Windows only)

pub mod frame;
pub mod source;

#[cfg(windows)]
pub mod screenshot;
#[cfg(windows)]
pub mod window;

pub use frame::RasterFrame;
pub use source::{FrameSource, SequenceFrameSource, StaticFrameSource};

#[cfg(windows)]
pub use screenshot::{capture_window, save_screenshot, WindowFrameSource};
#[cfg(windows)]
pub use window::{find_process_window, get_client_area_info};
