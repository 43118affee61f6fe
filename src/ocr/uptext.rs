//! Reader for the single status line ("up-text") in the top-left corner.
//!
//! The status line uses a small fixed font drawn with a one pixel drop
//! shadow. Instead of bitmaps, its glyphs come from a hand-authored stroke
//! table, and each glyph also requires its shadow pixels to be background.

use serde::{Deserialize, Serialize};

use crate::capture::RasterFrame;
use crate::geometry::Point;
use crate::vision::Color;

use super::font::Glyph;
use super::strokes::STROKES;

/// Columns searched for the leading capital letter.
const CAPITAL_SEARCH_WIDTH: i32 = 50;
/// A leading capital must end before this column.
const CAPITAL_MAX_RIGHT: i32 = 25;
/// Gaps wider than this between glyphs become a space.
const WORD_GAP: i32 = 5;

/// Where the status line is and which colors it is drawn in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpTextSettings {
    /// Top-left corner of the line in frame coordinates.
    pub origin: Point,
    pub width: i32,
    pub height: i32,
    /// Foreground colors: white, cyan, yellow and orange by default.
    pub colors: Vec<Color>,
    /// Mean channel difference at which a pixel counts as foreground.
    pub tolerance: f64,
}

impl Default for UpTextSettings {
    fn default() -> Self {
        Self {
            origin: Point::new(5, 5),
            width: 501,
            height: 20,
            colors: vec![
                Color::from_rgb(0xDCDCDC),
                Color::from_rgb(0x00DCDC),
                Color::from_rgb(0xDCDC00),
                Color::from_rgb(0xE6823C),
            ],
            tolerance: 50.0,
        }
    }
}

/// Foreground mask of the status line.
struct Mask {
    width: i32,
    height: i32,
    bits: Vec<bool>,
}

impl Mask {
    fn build(frame: &RasterFrame, settings: &UpTextSettings) -> Self {
        // No more of the line than the frame can hold
        let frame_width = i32::try_from(frame.width()).unwrap_or(i32::MAX);
        let frame_height = i32::try_from(frame.height()).unwrap_or(i32::MAX);
        let width = settings.width.clamp(0, frame_width);
        let height = settings.height.clamp(0, frame_height);
        let mut bits = Vec::with_capacity((width as usize).saturating_mul(height as usize));
        for y in 0..height {
            for x in 0..width {
                let lit = frame
                    .try_color_at(
                        settings.origin.x.saturating_add(x),
                        settings.origin.y.saturating_add(y),
                    )
                    .is_some_and(|c| {
                        settings
                            .colors
                            .iter()
                            .any(|fg| c.is_tolerable(*fg, settings.tolerance))
                    });
                bits.push(lit);
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    fn lit(&self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && x < self.width
            && y < self.height
            && self.bits[(y * self.width + x) as usize]
    }

    fn fits(&self, glyph: &Glyph, x: i32, y: i32) -> bool {
        glyph.positives().iter().all(|p| self.lit(x + p.x, y + p.y))
            && !glyph.negatives().iter().any(|p| self.lit(x + p.x, y + p.y))
    }
}

/// Reads the status line.
#[derive(Clone, Debug)]
pub struct UpTextReader {
    glyphs: Vec<Glyph>,
    settings: UpTextSettings,
}

impl UpTextReader {
    pub fn new(settings: UpTextSettings) -> Self {
        let mut glyphs: Vec<Glyph> = STROKES
            .iter()
            .map(|&(character, strokes)| Glyph::from_strokes(character, strokes))
            .collect();
        // Wider glyphs first, then those with more strokes
        glyphs.sort_by(|a, b| {
            b.width()
                .cmp(&a.width())
                .then(b.positives().len().cmp(&a.positives().len()))
        });
        Self { glyphs, settings }
    }

    pub fn settings(&self) -> &UpTextSettings {
        &self.settings
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Reads the line, `None` when no glyph was found.
    pub fn read(&self, frame: &RasterFrame) -> Option<String> {
        let mask = Mask::build(frame, &self.settings);
        let (width, height) = (mask.width, mask.height);
        let mut text = String::new();

        // The line starts with a capital letter near the left edge
        let mut pos_x = 0;
        let mut last_end = None;
        'capital: for x in 0..CAPITAL_SEARCH_WIDTH.min(width) {
            for y in 0..height {
                let capital = self.glyphs.iter().find(|g| {
                    g.character().is_ascii_uppercase()
                        && y + g.height() < height
                        && x + g.width() < CAPITAL_MAX_RIGHT
                        && mask.fits(g, x, y)
                });
                if let Some(glyph) = capital {
                    text.push(glyph.character());
                    pos_x = x + glyph.width();
                    last_end = Some(pos_x);
                    break 'capital;
                }
            }
        }

        while pos_x < width {
            for y in 0..height {
                let found = self.glyphs.iter().find(|g| {
                    y + g.height() < height && pos_x + g.width() < width && mask.fits(g, pos_x, y)
                });
                if let Some(glyph) = found {
                    if last_end.is_some_and(|end| pos_x - end > WORD_GAP) {
                        text.push(' ');
                    }
                    text.push(glyph.character());
                    pos_x += glyph.width() - 1;
                    last_end = Some(pos_x + 1);
                    break;
                }
            }
            pos_x += 1;
        }

        (!text.is_empty()).then_some(text)
    }
}

impl Default for UpTextReader {
    fn default() -> Self {
        Self::new(UpTextSettings::default())
    }
}
