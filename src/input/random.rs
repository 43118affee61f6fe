//! Randomness for humanized input.
//!
//! Points inside shapes follow a Gaussian centred on the shape (one standard
//! deviation is a tenth of its extent), so clicks cluster around the middle
//! and rarely land near an edge.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::time::Duration;

use crate::error::InvalidRange;
use crate::geometry::{Point, Polygon, Rect};

/// Mean of the unit Gaussian used for point placement.
const GAUSSIAN_MEAN: f64 = 0.5;
/// Standard deviation of the unit Gaussian.
const GAUSSIAN_SD: f64 = 0.1;
/// Rejection sampling attempts before falling back to a vertex.
const POLYGON_ATTEMPTS: usize = 1000;

/// Random source for input synthesis.
#[derive(Clone, Debug)]
pub struct Randomizer {
    rng: StdRng,
}

impl Randomizer {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Uniform integer in `[min, max)`. `min == max` yields `min`.
    pub fn range(&mut self, min: i64, max: i64) -> Result<i64, InvalidRange> {
        if min > max {
            return Err(InvalidRange { min, max });
        }
        if min == max {
            return Ok(min);
        }
        Ok(self.rng.gen_range(min..max))
    }

    /// Uniform duration in `[min_ms, max_ms)` milliseconds.
    pub fn duration_ms(&mut self, min_ms: u64, max_ms: u64) -> Result<Duration, InvalidRange> {
        let (min, max) = (min_ms as i64, max_ms as i64);
        let ms = self.range(min, max)?;
        Ok(Duration::from_millis(ms as u64))
    }

    /// True with probability `p` (clamped to `[0, 1]`).
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Gaussian sample with mean 0.5 and deviation 0.1, resampled until it
    /// falls in `[0, 1]`.
    pub fn gaussian_unit(&mut self) -> f64 {
        loop {
            let z: f64 = self.rng.sample(StandardNormal);
            let v = GAUSSIAN_MEAN + GAUSSIAN_SD * z;
            if (0.0..=1.0).contains(&v) {
                return v;
            }
        }
    }

    /// A point inside `rect`, clustered around its centre.
    ///
    /// An empty rectangle yields its top-left corner.
    pub fn point_in_rect(&mut self, rect: Rect) -> Point {
        if rect.is_empty() {
            return Point::new(rect.x, rect.y);
        }
        let gx = self.gaussian_unit();
        let gy = self.gaussian_unit();
        Point::new(
            rect.x + (gx * f64::from(rect.width - 1)).round() as i32,
            rect.y + (gy * f64::from(rect.height - 1)).round() as i32,
        )
    }

    /// A point inside `polygon`, drawn from its bounds and rejected until it
    /// is contained. Degenerate polygons yield their first vertex.
    pub fn point_in_polygon(&mut self, polygon: &Polygon) -> Point {
        let bounds = polygon.bounds();
        for _ in 0..POLYGON_ATTEMPTS {
            let p = self.point_in_rect(bounds);
            if polygon.contains(p) {
                return p;
            }
        }
        polygon.vertices.first().copied().unwrap_or_default()
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}
