//! Pointer trajectories.
//!
//! A movement follows a quadratic curve bowed to a random side of the
//! straight line. Steps are spaced with an ease-in/ease-out profile, so the
//! pointer accelerates away from the start and slows into the target.

use rand::Rng;
use std::time::Duration;

use crate::geometry::Point;

/// Milliseconds per pixel at speed 10.
const MS_PER_PIXEL: f64 = 1.2;
/// Fixed reaction overhead of every movement at speed 10, in milliseconds.
const BASE_MS: f64 = 60.0;
/// Reference speed the timing constants are expressed in.
const REFERENCE_SPEED: f64 = 10.0;
/// Slowest speed accepted; lower values are clamped.
const MIN_SPEED: f64 = 0.1;
/// Target distance in pixels between consecutive steps.
const STEP_PIXELS: f64 = 8.0;
const MAX_STEPS: usize = 80;
/// Largest sideways bow as a fraction of the distance.
const MAX_BOW: f64 = 0.2;

/// One intermediate pointer position and the pause after reaching it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathStep {
    pub point: Point,
    pub delay: Duration,
}

/// Wall-clock time a movement over `distance` pixels takes at `speed`.
pub fn movement_duration(distance: f64, speed: f64) -> Duration {
    let speed = speed.max(MIN_SPEED);
    let ms = (distance * MS_PER_PIXEL + BASE_MS) * REFERENCE_SPEED / speed;
    Duration::from_micros((ms * 1000.0).round() as u64)
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Plans a movement from `from` to `to`. The last step is exactly `to`.
///
/// Step delays add up to roughly [`movement_duration`], varied by up to 20%
/// per step.
pub fn plan_path<R: Rng + ?Sized>(from: Point, to: Point, speed: f64, rng: &mut R) -> Vec<PathStep> {
    let distance = from.distance_to(to);
    if distance == 0.0 {
        return vec![PathStep {
            point: to,
            delay: Duration::ZERO,
        }];
    }

    let total = movement_duration(distance, speed);
    let steps = ((distance / STEP_PIXELS).ceil() as usize).clamp(2, MAX_STEPS);
    let per_step = total.as_secs_f64() / steps as f64;

    let (x0, y0) = (f64::from(from.x), f64::from(from.y));
    let (x2, y2) = (f64::from(to.x), f64::from(to.y));
    // Control point: midpoint pushed along the perpendicular
    let bow = rng.gen_range(-MAX_BOW..=MAX_BOW) * distance;
    let (nx, ny) = (-(y2 - y0) / distance, (x2 - x0) / distance);
    let (x1, y1) = ((x0 + x2) / 2.0 + nx * bow, (y0 + y2) / 2.0 + ny * bow);

    let mut path = Vec::with_capacity(steps);
    for i in 1..=steps {
        let point = if i == steps {
            to
        } else {
            let t = smoothstep(i as f64 / steps as f64);
            let u = 1.0 - t;
            Point::new(
                (u * u * x0 + 2.0 * u * t * x1 + t * t * x2).round() as i32,
                (u * u * y0 + 2.0 * u * t * y1 + t * t * y2).round() as i32,
            )
        };
        let jitter = rng.gen_range(0.8..=1.2);
        path.push(PathStep {
            point,
            delay: Duration::from_secs_f64(per_step * jitter),
        });
    }
    path
}
