//! RGB colors and the channel distance metric used by every matcher.

use image::{Rgb, Rgba};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Packs the color as `0xRRGGBB`.
    pub const fn to_rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Mean absolute per-channel difference, in `[0, 255]`.
    pub fn distance(self, other: Color) -> f64 {
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dg = (i32::from(self.g) - i32::from(other.g)).abs();
        let db = (i32::from(self.b) - i32::from(other.b)).abs();
        f64::from(dr + dg + db) / 3.0
    }

    /// True when `other` is within `tolerance` of this color.
    pub fn is_tolerable(self, other: Color, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }

    /// True when the color is closer to black than to white.
    pub fn is_dark(self) -> bool {
        self.distance(Color::BLACK) < self.distance(Color::WHITE)
    }
}

/// Free-function form of [`Color::distance`].
pub fn distance(a: Color, b: Color) -> f64 {
    a.distance(b)
}

/// Free-function form of [`Color::is_tolerable`].
pub fn is_tolerable(a: Color, b: Color, tolerance: f64) -> bool {
    a.is_tolerable(b, tolerance)
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        Color::new(pixel[0], pixel[1], pixel[2])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        Color::new(pixel[0], pixel[1], pixel[2])
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, 255])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_rgb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric_and_bounded() {
        let samples = [
            Color::BLACK,
            Color::WHITE,
            Color::new(12, 200, 7),
            Color::new(255, 0, 128),
            Color::new(90, 90, 91),
        ];
        for &a in &samples {
            assert_eq!(a.distance(a), 0.0);
            for &b in &samples {
                let d = a.distance(b);
                assert_eq!(d, b.distance(a));
                assert!((0.0..=255.0).contains(&d), "distance {} out of range", d);
            }
        }
        assert_eq!(Color::BLACK.distance(Color::WHITE), 255.0);
    }

    #[test]
    fn test_is_tolerable_is_inclusive() {
        let a = Color::new(10, 10, 10);
        let b = Color::new(13, 13, 13);
        assert!(a.is_tolerable(b, 3.0));
        assert!(!a.is_tolerable(b, 2.9));
        assert!(a.is_tolerable(a, 0.0));
    }

    #[test]
    fn test_packed_rgb() {
        let c = Color::from_rgb(0xE6823C);
        assert_eq!(c, Color::new(0xE6, 0x82, 0x3C));
        assert_eq!(c.to_rgb(), 0xE6823C);
        assert_eq!(c.to_string(), "#E6823C");
    }

    #[test]
    fn test_is_dark() {
        assert!(Color::new(20, 30, 40).is_dark());
        assert!(!Color::new(200, 210, 220).is_dark());
    }
}
