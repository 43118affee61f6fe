//! Pixel Autopilot
//!
//! Drives an external application purely from its rendered pixels: patterns
//! and text are located in captured frames, and the application is operated
//! through synthesized, human-paced pointer and keyboard events.
//!
//! The engine is organized as:
//! - [`vision`]: colors and anchor/branch pixel patterns
//! - [`capture`]: immutable frame snapshots and frame sources
//! - [`ocr`]: bitmap-template text recognition and the status line reader
//! - [`input`]: randomized pointer movement, clicks and keystrokes
//! - [`automation`]: polling waits, cancellation and configuration

pub mod automation;
pub mod capture;
pub mod error;
pub mod geometry;
pub mod input;
pub mod ocr;
pub mod paths;
pub mod vision;

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

pub use error::{Cancelled, FormatError, InvalidRange};
pub use geometry::{Point, Polygon, Rect};

/// Logs a message to both console and log file with timestamp.
///
/// The file is only written when the logs directory already exists
/// (see [`paths::ensure_directories`]).
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    print!("{}", line);
    let log_path = paths::get_logs_dir().join("pixel_autopilot.log");
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(line.as_bytes());
    }
}
