//! Immutable pixel snapshots.

use anyhow::{Context, Result};
use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::geometry::{Point, Rect};
use crate::vision::Color;

/// One captured frame of the target's rendered pixels.
///
/// Frames are never mutated after construction and can be shared freely
/// between threads.
#[derive(Clone, Debug)]
pub struct RasterFrame {
    image: RgbaImage,
}

impl RasterFrame {
    /// Wraps an RGBA buffer. Alpha is ignored when sampling.
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Builds a frame by evaluating `f` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        Self::new(ImageBuffer::from_fn(width, height, |x, y| f(x, y).into()))
    }

    /// A frame filled with a single color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self::from_fn(width, height, |_, _| color)
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self::new(image.to_rgba8())
    }

    /// Decodes an image file into a frame.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("Failed to open image {}", path.display()))?;
        Ok(Self::from_image(image))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save(path)
            .with_context(|| format!("Failed to save frame to {}", path.display()))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The whole frame as a rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width() as i32, self.height() as i32)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Samples a pixel, or `None` outside the frame.
    pub fn try_color_at(&self, x: i32, y: i32) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(Color::from(*self.image.get_pixel(x as u32, y as u32)))
    }

    /// Samples a pixel. Positions outside the frame read as black.
    pub fn color_at(&self, x: i32, y: i32) -> Color {
        self.try_color_at(x, y).unwrap_or(Color::BLACK)
    }

    pub fn color_at_point(&self, p: Point) -> Color {
        self.color_at(p.x, p.y)
    }

    /// Clamps an optional search rectangle to the frame.
    ///
    /// `None` means the whole frame. Returns `None` when nothing of the
    /// requested area lies inside the frame.
    pub fn clamp_area(&self, area: Option<Rect>) -> Option<Rect> {
        match area {
            Some(rect) => rect.intersect(&self.bounds()),
            None if self.width() > 0 && self.height() > 0 => Some(self.bounds()),
            None => None,
        }
    }

    /// Copies a sub-rectangle into a new frame. The rectangle is clamped to
    /// the frame; an area fully outside yields an empty frame.
    pub fn crop(&self, area: Rect) -> RasterFrame {
        match area.intersect(&self.bounds()) {
            Some(r) => {
                let view = image::imageops::crop_imm(
                    &self.image,
                    r.x as u32,
                    r.y as u32,
                    r.width as u32,
                    r.height as u32,
                );
                RasterFrame::new(view.to_image())
            }
            None => RasterFrame::new(ImageBuffer::<Rgba<u8>, Vec<u8>>::new(0, 0)),
        }
    }

    /// Every point in `area` (whole frame if `None`) within `tolerance` of
    /// `color`, in row-major order.
    pub fn points_with_color(&self, area: Option<Rect>, color: Color, tolerance: f64) -> Vec<Point> {
        let Some(rect) = self.clamp_area(area) else {
            return Vec::new();
        };
        rect.points()
            .filter(|p| self.color_at(p.x, p.y).is_tolerable(color, tolerance))
            .collect()
    }

    /// Fraction of pixels in `area` within `tolerance` of `color`, in `[0, 1]`.
    ///
    /// An area with no pixels inside the frame has concentration 0.
    pub fn color_concentration(&self, area: Option<Rect>, color: Color, tolerance: f64) -> f64 {
        let Some(rect) = self.clamp_area(area) else {
            return 0.0;
        };
        let total = f64::from(rect.width) * f64::from(rect.height);
        let matching = rect
            .points()
            .filter(|p| self.color_at(p.x, p.y).is_tolerable(color, tolerance))
            .count();
        matching as f64 / total
    }

    /// Top-left corners in `area` (whole frame if `None`) where every pixel
    /// of `template` is within `threshold` of the frame, in row-major order.
    ///
    /// The template must fit entirely inside the clamped area. An empty
    /// template matches nowhere.
    pub fn find_image(&self, template: &RasterFrame, area: Option<Rect>, threshold: f64) -> Vec<Point> {
        self.image_matches(template, area, threshold).collect()
    }

    /// Whether `template` occurs anywhere in `area`. Stops at the first hit.
    pub fn contains_image(&self, template: &RasterFrame, area: Option<Rect>, threshold: f64) -> bool {
        self.image_matches(template, area, threshold).next().is_some()
    }

    fn image_matches<'a>(
        &'a self,
        template: &'a RasterFrame,
        area: Option<Rect>,
        threshold: f64,
    ) -> impl Iterator<Item = Point> + 'a {
        let tw = i32::try_from(template.width()).unwrap_or(i32::MAX);
        let th = i32::try_from(template.height()).unwrap_or(i32::MAX);
        // Corners that keep the whole template inside the area
        let corners = self
            .clamp_area(area)
            .filter(|r| tw > 0 && th > 0 && tw <= r.width && th <= r.height)
            .map(|r| Rect::new(r.x, r.y, r.width - tw + 1, r.height - th + 1));
        corners
            .into_iter()
            .flat_map(|r| r.points())
            .filter(move |&corner| self.matches_image_at(template, corner, threshold))
    }

    fn matches_image_at(&self, template: &RasterFrame, corner: Point, threshold: f64) -> bool {
        template.bounds().points().all(|p| {
            self.color_at(corner.x + p.x, corner.y + p.y)
                .is_tolerable(template.color_at(p.x, p.y), threshold)
        })
    }
}

impl From<RgbaImage> for RasterFrame {
    fn from(image: RgbaImage) -> Self {
        Self::new(image)
    }
}

impl From<DynamicImage> for RasterFrame {
    fn from(image: DynamicImage) -> Self {
        Self::from_image(image)
    }
}
