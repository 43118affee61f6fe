//! Text recognition from pixel templates.
//!
//! This module provides:
//! - Glyph templates and the font bitmap cache (`FontSet`, `FontLibrary`)
//! - Row-scan recognition of bitmap fonts (`GlyphRecognizer`)
//! - The status line reader with its built-in stroke font (`UpTextReader`)

pub mod engine;
pub mod font;
mod strokes;
pub mod uptext;

pub use engine::{GlyphRecognizer, TextQuery};
pub use font::{glyph_codes, FontLibrary, FontSet, FontType, Glyph, GLYPH_TOLERANCE};
pub use uptext::{UpTextReader, UpTextSettings};
