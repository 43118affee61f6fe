//! Timing glue between perception and action.
//!
//! This module provides:
//! - Cooperative cancellation of blocking calls (`CancelToken`)
//! - Engine configuration loaded from config.json
//! - Polling waits on arbitrary conditions (`Waiter`)
//! - Waits on patterns, text and colors over a frame source

pub mod cancel;
pub mod config;
pub mod detection;
pub mod wait;

pub use cancel::{request_abort, reset_abort_flag, CancelToken};
pub use config::{get_config, init_config, load_config_from, EngineConfig};
pub use detection::{
    wait_for_color_concentration, wait_for_pattern, wait_for_pattern_gone, wait_for_text,
};
pub use wait::{wait_for, Waiter};
