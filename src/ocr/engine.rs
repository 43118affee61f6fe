//! Bitmap-template text recognition.
//!
//! The search area is scanned row by row. At every pixel the glyphs of the
//! candidate fonts are tried with their first positive pixel placed there,
//! and the first glyph that fits is recorded. Recorded characters are then
//! ordered by their left edge, with a space wherever two neighbours are more
//! than one pixel apart.

use std::slice;

use crate::capture::RasterFrame;
use crate::geometry::Rect;
use crate::vision::Color;

use super::font::{FontLibrary, FontSet, FontType};

/// What to read and where.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextQuery {
    pub area: Rect,
    /// Exact text color. Pixels of any other color are skipped.
    pub color: Option<Color>,
    /// Font to use. Without one, fonts are tried in library order and the
    /// first font that matches is used for the rest of the scan.
    pub font: Option<FontType>,
    /// Keep accepting new text colors after the first match.
    pub multi_color: bool,
}

impl TextQuery {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            color: None,
            font: None,
            multi_color: false,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font(mut self, font: FontType) -> Self {
        self.font = Some(font);
        self
    }

    pub fn multi_color(mut self, multi_color: bool) -> Self {
        self.multi_color = multi_color;
        self
    }
}

/// A recognized character and its horizontal extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Token {
    character: char,
    x0: i32,
    x1: i32,
}

/// Reads text rendered in the library's fonts.
#[derive(Clone, Debug)]
pub struct GlyphRecognizer {
    library: FontLibrary,
}

impl GlyphRecognizer {
    pub fn new(library: FontLibrary) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &FontLibrary {
        &self.library
    }

    /// Recognizes the text inside `query.area`, `None` when nothing matched.
    pub fn recognize(&self, frame: &RasterFrame, query: &TextQuery) -> Option<String> {
        let region = frame.clamp_area(Some(query.area))?;

        let candidates: Vec<&FontSet> = match query.font {
            Some(font) => vec![self.library.get(font)?],
            None => self.library.sets().iter().collect(),
        };
        let mut locked_font: Option<&FontSet> = None;
        let mut text_color = query.color;
        let mut tokens = Vec::new();

        for scan in region.points() {
            let color = frame.color_at(scan.x, scan.y);
            if text_color.is_some_and(|wanted| wanted != color) {
                continue;
            }
            let locked = locked_font;
            let fonts = match &locked {
                Some(set) => slice::from_ref(set),
                None => candidates.as_slice(),
            };
            for &set in fonts {
                let found = set.glyphs().iter().find_map(|glyph| {
                    glyph
                        .match_at(frame, scan, color, region)
                        .map(|x0| Token {
                            character: glyph.character(),
                            x0,
                            x1: x0 + glyph.width(),
                        })
                });
                if let Some(token) = found {
                    tokens.push(token);
                    locked_font = Some(set);
                    if !query.multi_color {
                        text_color = Some(color);
                    }
                    break;
                }
            }
        }

        assemble(tokens)
    }
}

/// Orders tokens left to right and joins them, spacing out gaps wider than
/// one pixel.
fn assemble(mut tokens: Vec<Token>) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    tokens.sort_by_key(|t| t.x0);
    let mut text = String::with_capacity(tokens.len() * 2);
    let mut previous: Option<Token> = None;
    for token in tokens {
        if previous.is_some_and(|prev| token.x0 - prev.x1 > 1) {
            text.push(' ');
        }
        text.push(token.character);
        previous = Some(token);
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::ocr::font::tests::{bitmap, SHAPE_A, SHAPE_T};
    use crate::ocr::font::Glyph;

    const BACKGROUND: Color = Color::new(30, 30, 30);
    const YELLOW: Color = Color::new(255, 255, 0);

    fn stat_font() -> FontSet {
        FontSet::new(
            FontType::StatChars,
            vec![
                Glyph::from_bitmap('A', &bitmap(&SHAPE_A)).unwrap(),
                Glyph::from_bitmap('T', &bitmap(&SHAPE_T)).unwrap(),
            ],
        )
    }

    /// Draws only the positive pixels of each glyph with its top-left at the
    /// given point.
    fn render(glyphs: &[(&Glyph, Point, Color)]) -> RasterFrame {
        let mut img = RasterFrame::filled(60, 20, BACKGROUND).as_image().clone();
        for (glyph, at, color) in glyphs {
            for p in glyph.positives() {
                img.put_pixel((at.x + p.x) as u32, (at.y + p.y) as u32, (*color).into());
            }
        }
        RasterFrame::new(img)
    }

    #[test]
    fn test_single_glyph() {
        let font = stat_font();
        let recognizer = GlyphRecognizer::new(FontLibrary::new(vec![font.clone()]));
        let frame = render(&[(&font.glyphs()[0], Point::new(10, 5), YELLOW)]);
        let text = recognizer.recognize(&frame, &TextQuery::new(frame.bounds()));
        assert_eq!(text.as_deref(), Some("A"));
    }

    #[test]
    fn test_blank_area_reads_nothing() {
        let recognizer = GlyphRecognizer::new(FontLibrary::new(vec![stat_font()]));
        let frame = RasterFrame::filled(30, 30, BACKGROUND);
        assert_eq!(recognizer.recognize(&frame, &TextQuery::new(frame.bounds())), None);
    }

    #[test]
    fn test_spacing_between_glyphs() {
        let font = stat_font();
        let (a, t) = (&font.glyphs()[0], &font.glyphs()[1]);
        let recognizer = GlyphRecognizer::new(FontLibrary::new(vec![font.clone()]));
        // A ends at x=7, T starts at x=8 (touching); the second A leaves a gap of 3
        let frame = render(&[
            (a, Point::new(2, 4), YELLOW),
            (t, Point::new(8, 4), YELLOW),
            (a, Point::new(16, 4), YELLOW),
        ]);
        let text = recognizer.recognize(&frame, &TextQuery::new(frame.bounds()));
        assert_eq!(text.as_deref(), Some("AT A"));
    }

    #[test]
    fn test_glyph_must_fit_inside_area() {
        let font = stat_font();
        let recognizer = GlyphRecognizer::new(FontLibrary::new(vec![font.clone()]));
        let frame = render(&[(&font.glyphs()[0], Point::new(10, 5), YELLOW)]);
        let clipped = TextQuery::new(Rect::new(11, 0, 30, 20));
        assert_eq!(recognizer.recognize(&frame, &clipped), None);
    }

    #[test]
    fn test_color_filter() {
        let font = stat_font();
        let recognizer = GlyphRecognizer::new(FontLibrary::new(vec![font.clone()]));
        let frame = render(&[(&font.glyphs()[1], Point::new(3, 3), YELLOW)]);
        let area = frame.bounds();
        assert_eq!(
            recognizer
                .recognize(&frame, &TextQuery::new(area).color(YELLOW))
                .as_deref(),
            Some("T")
        );
        assert_eq!(
            recognizer.recognize(&frame, &TextQuery::new(area).color(Color::WHITE)),
            None
        );
    }

    #[test]
    fn test_first_color_is_locked_unless_multi_color() {
        let font = stat_font();
        let (a, t) = (&font.glyphs()[0], &font.glyphs()[1]);
        let recognizer = GlyphRecognizer::new(FontLibrary::new(vec![font.clone()]));
        let frame = render(&[
            (a, Point::new(2, 4), YELLOW),
            (t, Point::new(20, 4), Color::WHITE),
        ]);
        let query = TextQuery::new(frame.bounds());
        assert_eq!(recognizer.recognize(&frame, &query).as_deref(), Some("A"));
        assert_eq!(
            recognizer
                .recognize(&frame, &query.multi_color(true))
                .as_deref(),
            Some("A T")
        );
    }

    #[test]
    fn test_fonts_tried_in_library_order() {
        let font = stat_font();
        let other = FontSet::new(
            FontType::BigChars,
            vec![Glyph::from_bitmap('O', &bitmap(&["###", "#.#", "###"])).unwrap()],
        );
        let recognizer = GlyphRecognizer::new(FontLibrary::new(vec![other, font.clone()]));
        let frame = render(&[(&font.glyphs()[1], Point::new(3, 3), YELLOW)]);
        let area = frame.bounds();
        assert_eq!(
            recognizer.recognize(&frame, &TextQuery::new(area)).as_deref(),
            Some("T")
        );
        assert_eq!(
            recognizer
                .recognize(&frame, &TextQuery::new(area).font(FontType::BigChars))
                .as_deref(),
            None
        );
        assert_eq!(
            recognizer.recognize(&frame, &TextQuery::new(area).font(FontType::LoginChars)),
            None
        );
    }

    #[test]
    fn test_assemble_orders_tokens() {
        let tokens = vec![
            Token { character: 'b', x0: 6, x1: 10 },
            Token { character: 'a', x0: 0, x1: 5 },
            Token { character: 'c', x0: 13, x1: 17 },
        ];
        assert_eq!(assemble(tokens).as_deref(), Some("ab c"));
    }
}
