//! Color matching and anchor/branch pixel patterns.
//!
//! This module provides:
//! - The RGB color type and its distance metric (`Color`)
//! - Tolerance-based shape matching (`Pattern`)

pub mod color;
pub mod pattern;

pub use color::{distance, is_tolerable, Color};
pub use pattern::{AnchorPoint, BranchPoint, Pattern, SearchArea};
