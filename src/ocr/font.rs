//! Glyph templates and the font bitmap cache.
//!
//! A glyph is a set of positive offsets (foreground, must match the text
//! color) and negative offsets (must not match). Bitmap fonts are read once
//! from `{storage}/Cache/Fonts/{font}/{code}.bmp` and never change afterwards.

use anyhow::{bail, Context, Result};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::capture::RasterFrame;
use crate::geometry::{Point, Rect};
use crate::paths::StoragePathProvider;
use crate::vision::Color;

/// Largest mean channel difference at which a glyph sample counts as text
/// colored (a summed difference below 40).
pub const GLYPH_TOLERANCE: f64 = 40.0 / 3.0;

/// The cached fonts, in default priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontType {
    BigChars,
    #[serde(rename = "NPCChars")]
    NpcChars,
    FriendChars,
    LoginChars,
    SmallChars,
    StatChars,
    UpChars,
    UpCharsEx,
}

impl FontType {
    pub const ALL: [FontType; 8] = [
        FontType::BigChars,
        FontType::NpcChars,
        FontType::FriendChars,
        FontType::LoginChars,
        FontType::SmallChars,
        FontType::StatChars,
        FontType::UpChars,
        FontType::UpCharsEx,
    ];

    /// Directory name inside the font cache.
    pub const fn dir_name(self) -> &'static str {
        match self {
            FontType::BigChars => "BigChars",
            FontType::NpcChars => "NPCChars",
            FontType::FriendChars => "FriendChars",
            FontType::LoginChars => "LoginChars",
            FontType::SmallChars => "SmallChars",
            FontType::StatChars => "StatChars",
            FontType::UpChars => "UpChars",
            FontType::UpCharsEx => "UpCharsEx",
        }
    }
}

impl fmt::Display for FontType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for FontType {
    type Err = anyhow::Error;

    /// Accepts the directory name in any case.
    fn from_str(s: &str) -> Result<Self> {
        FontType::ALL
            .into_iter()
            .find(|font| font.dir_name().eq_ignore_ascii_case(s.trim()))
            .with_context(|| format!("Unknown font \"{}\"", s))
    }
}

/// Character codes with a bitmap in every font: `0-9`, `A-Z`, `a-z`.
pub fn glyph_codes() -> impl Iterator<Item = u8> {
    (48u8..=122).filter(|c| !(58..=64).contains(c) && !(91..=96).contains(c))
}

/// One character template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    character: char,
    positives: Vec<Point>,
    negatives: Vec<Point>,
    width: i32,
    height: i32,
}

impl Glyph {
    /// Builds a glyph from a reference bitmap: white pixels are positive,
    /// everything else negative. The box is the bitmap size.
    ///
    /// Returns `None` for a bitmap without any white pixel.
    pub fn from_bitmap(character: char, bitmap: &RgbaImage) -> Option<Self> {
        let mut positives = Vec::new();
        let mut negatives = Vec::new();
        for (x, y, pixel) in bitmap.enumerate_pixels() {
            let p = Point::new(x as i32, y as i32);
            if Color::from(*pixel) == Color::WHITE {
                positives.push(p);
            } else {
                negatives.push(p);
            }
        }
        if positives.is_empty() {
            return None;
        }
        Some(Self {
            character,
            positives,
            negatives,
            width: bitmap.width() as i32,
            height: bitmap.height() as i32,
        })
    }

    /// Builds a glyph from explicit stroke pixels.
    ///
    /// Each stroke pixel without a stroke pixel diagonally below-right of it
    /// casts a shadow there, and shadows must not be foreground. The box
    /// spans the strokes; shadows may fall one pixel outside it.
    pub fn from_strokes(character: char, strokes: &[(i32, i32)]) -> Self {
        let positives: Vec<Point> = strokes.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let negatives: Vec<Point> = positives
            .iter()
            .map(|p| p.offset(1, 1))
            .filter(|shadow| !positives.contains(shadow))
            .collect();
        let width = positives.iter().map(|p| p.x + 1).max().unwrap_or(0);
        let height = positives.iter().map(|p| p.y + 1).max().unwrap_or(0);
        Self {
            character,
            positives,
            negatives,
            width,
            height,
        }
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn positives(&self) -> &[Point] {
        &self.positives
    }

    pub fn negatives(&self) -> &[Point] {
        &self.negatives
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Tries this glyph with its first positive pixel on `scan`.
    ///
    /// Returns the glyph's left edge when the whole box lies inside `region`,
    /// every positive is within [`GLYPH_TOLERANCE`] of `color` and no
    /// negative is.
    pub fn match_at(&self, frame: &RasterFrame, scan: Point, color: Color, region: Rect) -> Option<i32> {
        let first = self.positives.first()?;
        let origin = scan.offset(-first.x, -first.y);
        let bbox = Rect::new(origin.x, origin.y, self.width, self.height);
        if !region.contains_rect(&bbox) {
            return None;
        }
        let is_text = |p: &Point| {
            let sample = frame.color_at(origin.x + p.x, origin.y + p.y);
            sample.distance(color) < GLYPH_TOLERANCE
        };
        if self.positives.iter().all(is_text) && !self.negatives.iter().any(is_text) {
            Some(origin.x)
        } else {
            None
        }
    }
}

/// The glyphs of one font in character code order.
#[derive(Clone, Debug)]
pub struct FontSet {
    font: FontType,
    glyphs: Vec<Glyph>,
}

impl FontSet {
    pub fn new(font: FontType, glyphs: Vec<Glyph>) -> Self {
        Self { font, glyphs }
    }

    /// Loads the font's bitmaps from the cache.
    ///
    /// Unreadable bitmaps are logged and skipped; a font without any glyph
    /// is an error.
    pub fn load(storage: &dyn StoragePathProvider, font: FontType) -> Result<Self> {
        Self::load_dir(&storage.font_dir(font), font)
    }

    /// Loads the bitmaps found directly in `dir`.
    pub fn load_dir(dir: &Path, font: FontType) -> Result<Self> {
        let mut glyphs = Vec::new();
        for code in glyph_codes() {
            let path = dir.join(format!("{}.bmp", code));
            let bitmap = match image::open(&path) {
                Ok(img) => img.to_rgba8(),
                Err(e) => {
                    crate::log(&format!(
                        "Failed to read bitmap {} of font {}: {}",
                        code, font, e
                    ));
                    continue;
                }
            };
            match Glyph::from_bitmap(char::from(code), &bitmap) {
                Some(glyph) => glyphs.push(glyph),
                None => crate::log(&format!(
                    "Bitmap {} of font {} has no foreground pixels",
                    code, font
                )),
            }
        }
        if glyphs.is_empty() {
            bail!("No glyphs found for font {} in {}", font, dir.display());
        }
        crate::log(&format!("Loaded font {}: {} glyphs", font, glyphs.len()));
        Ok(Self::new(font, glyphs))
    }

    pub fn font(&self) -> FontType {
        self.font
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }
}

/// Loaded fonts in priority order. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct FontLibrary {
    sets: Vec<FontSet>,
}

impl FontLibrary {
    pub fn new(sets: Vec<FontSet>) -> Self {
        Self { sets }
    }

    /// Loads `fonts` in the given order. Fonts that fail to load are logged
    /// and left out; an empty library is an error.
    pub fn load(storage: &dyn StoragePathProvider, fonts: &[FontType]) -> Result<Self> {
        let mut sets = Vec::with_capacity(fonts.len());
        for &font in fonts {
            match FontSet::load(storage, font) {
                Ok(set) => sets.push(set),
                Err(e) => crate::log(&format!("Skipping font {}: {:#}", font, e)),
            }
        }
        if sets.is_empty() {
            bail!(
                "No fonts could be loaded from {}",
                storage.storage_root().display()
            );
        }
        Ok(Self::new(sets))
    }

    pub fn sets(&self) -> &[FontSet] {
        &self.sets
    }

    pub fn get(&self, font: FontType) -> Option<&FontSet> {
        self.sets.iter().find(|set| set.font == font)
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::paths::FixedStorage;
    use image::Rgba;

    /// 5x7 reference shapes, `#` is foreground.
    pub(crate) const SHAPE_A: [&str; 7] = [
        "..#..", ".#.#.", "#...#", "#####", "#...#", "#...#", "#...#",
    ];
    pub(crate) const SHAPE_T: [&str; 7] = [
        "#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#..",
    ];

    pub(crate) fn bitmap(shape: &[&str]) -> RgbaImage {
        let width = shape[0].len() as u32;
        RgbaImage::from_fn(width, shape.len() as u32, |x, y| {
            if shape[y as usize].as_bytes()[x as usize] == b'#' {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        })
    }

    #[test]
    fn test_glyph_codes() {
        let codes: Vec<u8> = glyph_codes().collect();
        assert_eq!(codes.len(), 62);
        assert_eq!(codes[0], b'0');
        assert_eq!(codes[10], b'A');
        assert_eq!(codes[36], b'a');
        assert_eq!(*codes.last().unwrap(), b'z');
    }

    #[test]
    fn test_glyph_from_bitmap() {
        let glyph = Glyph::from_bitmap('A', &bitmap(&SHAPE_A)).unwrap();
        assert_eq!((glyph.width(), glyph.height()), (5, 7));
        assert_eq!(glyph.positives()[0], Point::new(2, 0));
        assert_eq!(glyph.positives().len() + glyph.negatives().len(), 35);
        assert!(Glyph::from_bitmap('x', &bitmap(&["..", ".."])).is_none());
    }

    #[test]
    fn test_glyph_from_strokes_derives_shadows() {
        // A diagonal has shadows only below its last pixel
        let diagonal = Glyph::from_strokes('\\', &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(diagonal.negatives(), &[Point::new(3, 3)]);
        assert_eq!((diagonal.width(), diagonal.height()), (3, 3));

        let bar = Glyph::from_strokes('-', &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(bar.negatives().len(), 3);
        assert_eq!((bar.width(), bar.height()), (3, 1));
    }

    #[test]
    fn test_font_type_names() {
        assert_eq!(FontType::NpcChars.dir_name(), "NPCChars");
        assert_eq!("npcchars".parse::<FontType>().unwrap(), FontType::NpcChars);
        assert_eq!("UpCharsEx".parse::<FontType>().unwrap(), FontType::UpCharsEx);
        assert!("Comic".parse::<FontType>().is_err());
    }

    #[test]
    fn test_load_font_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FixedStorage::new(dir.path());
        let font_dir = storage.font_dir(FontType::StatChars);
        std::fs::create_dir_all(&font_dir).unwrap();
        bitmap(&SHAPE_A).save(font_dir.join("65.bmp")).unwrap();
        bitmap(&SHAPE_T).save(font_dir.join("84.bmp")).unwrap();

        let set = FontSet::load(&storage, FontType::StatChars).unwrap();
        let chars: Vec<char> = set.glyphs().iter().map(Glyph::character).collect();
        assert_eq!(chars, vec!['A', 'T']);
        assert_eq!(set.glyphs()[0], Glyph::from_bitmap('A', &bitmap(&SHAPE_A)).unwrap());
    }

    #[test]
    fn test_load_empty_font_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FixedStorage::new(dir.path());
        assert!(FontSet::load(&storage, FontType::BigChars).is_err());
        assert!(FontLibrary::load(&storage, &[FontType::BigChars]).is_err());
    }

    #[test]
    fn test_library_skips_missing_fonts() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FixedStorage::new(dir.path());
        let font_dir = storage.font_dir(FontType::SmallChars);
        std::fs::create_dir_all(&font_dir).unwrap();
        bitmap(&SHAPE_T).save(font_dir.join("84.bmp")).unwrap();

        let library =
            FontLibrary::load(&storage, &[FontType::BigChars, FontType::SmallChars]).unwrap();
        assert_eq!(library.sets().len(), 1);
        assert!(library.get(FontType::SmallChars).is_some());
        assert!(library.get(FontType::BigChars).is_none());
    }
}
