//! Humanized pointer actions.

use anyhow::Result;
use std::time::Duration;

use crate::automation::cancel::{self, CancelToken};
use crate::automation::config::EngineConfig;
use crate::geometry::{Point, Polygon, Rect};

use super::path::plan_path;
use super::random::Randomizer;
use super::sink::{InputSink, MouseButton};

/// Pointer speed used when none is configured.
pub const DEFAULT_MOUSE_SPEED: f64 = 10.0;
/// Wheel notches of a plain scroll.
pub const DEFAULT_SCROLL_UNITS: u32 = 3;

/// Pause around the movement of a drag, in milliseconds.
const DRAG_DWELL_MS: (u64, u64) = (150, 350);
/// How long a button stays down during a click, in milliseconds.
const CLICK_HOLD_MS: (u64, u64) = (30, 90);
/// Per-axis distance range of a slight movement.
const SLIGHT_MOVE_PX: (i64, i64) = (30, 120);
const SLIGHT_MOVE_ATTEMPTS: usize = 100;

/// Drives an [`InputSink`] with randomized, human-paced actions.
///
/// The speed is owned by each synthesizer; independent synthesizers never
/// affect each other.
pub struct InputSynthesizer<S: InputSink> {
    pub(super) sink: S,
    pub(super) random: Randomizer,
    pub(super) speed: f64,
    pub(super) key_delay_ms: (u64, u64),
    pub(super) cancel: CancelToken,
}

impl<S: InputSink> InputSynthesizer<S> {
    /// Default speed and key delays, observing the global cancel token.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            random: Randomizer::new(),
            speed: DEFAULT_MOUSE_SPEED,
            key_delay_ms: (50, 100),
            cancel: cancel::global().clone(),
        }
    }

    /// Speed and key delays from the configuration.
    pub fn from_config(sink: S, config: &EngineConfig) -> Self {
        Self::new(sink)
            .with_speed(config.mouse_speed)
            .with_key_delay(config.key_delay_ms.0, config.key_delay_ms.1)
    }

    pub fn with_randomizer(mut self, random: Randomizer) -> Self {
        self.random = random;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_key_delay(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.key_delay_ms = (min_ms, max_ms);
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn randomizer(&mut self) -> &mut Randomizer {
        &mut self.random
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn position(&self) -> Result<Point> {
        self.sink.position()
    }

    pub fn is_on_canvas(&self, p: Point) -> bool {
        self.sink.bounds().contains(p)
    }

    pub(super) fn pause(&self, duration: Duration) -> Result<()> {
        self.cancel.sleep(duration)?;
        Ok(())
    }

    pub(super) fn pause_between(&mut self, min_ms: u64, max_ms: u64) -> Result<()> {
        let duration = self.random.duration_ms(min_ms, max_ms)?;
        self.pause(duration)
    }

    /// Follows a planned path to `target`, wherever it is.
    fn glide(&mut self, target: Point, speed: f64) -> Result<()> {
        self.cancel.check()?;
        let from = self.sink.position()?;
        if from == target {
            return Ok(());
        }
        for step in plan_path(from, target, speed, self.random.rng()) {
            self.cancel.check()?;
            self.sink.move_to(step.point)?;
            self.pause(step.delay)?;
        }
        Ok(())
    }

    fn accepts(&self, target: Point) -> bool {
        if self.is_on_canvas(target) {
            return true;
        }
        crate::log(&format!("Ignoring pointer target {} outside the canvas", target));
        false
    }

    /// Moves to `target` at the synthesizer's speed. Blocks until the
    /// pointer arrives; targets outside the canvas are ignored.
    pub fn move_to(&mut self, target: Point) -> Result<()> {
        self.move_to_with_speed(target, self.speed)
    }

    /// Moves to `target` at `speed` without changing the default speed.
    pub fn move_to_with_speed(&mut self, target: Point, speed: f64) -> Result<()> {
        if !self.accepts(target) {
            return Ok(());
        }
        self.glide(target, speed)
    }

    /// Moves to `target` shifted by up to `rand_x`/`rand_y` pixels on
    /// each axis.
    pub fn move_near(&mut self, target: Point, rand_x: i32, rand_y: i32) -> Result<()> {
        let p = self.jitter(target, rand_x, rand_y)?;
        self.move_to(p)
    }

    fn jitter(&mut self, p: Point, rand_x: i32, rand_y: i32) -> Result<Point> {
        let (rx, ry) = (i64::from(rand_x), i64::from(rand_y));
        let dx = self.random.range(-rx, rx + 1)?;
        let dy = self.random.range(-ry, ry + 1)?;
        Ok(p.offset(dx as i32, dy as i32))
    }

    /// Teleports the pointer without intermediate positions.
    pub fn hop(&mut self, target: Point) -> Result<()> {
        if !self.accepts(target) {
            return Ok(());
        }
        self.cancel.check()?;
        self.sink.move_to(target)
    }

    pub fn press(&mut self, button: MouseButton) -> Result<()> {
        self.cancel.check()?;
        self.sink.press(button)
    }

    pub fn release(&mut self, button: MouseButton) -> Result<()> {
        self.cancel.check()?;
        self.sink.release(button)
    }

    /// Presses and releases `button` where the pointer is.
    pub fn click(&mut self, button: MouseButton) -> Result<()> {
        self.press(button)?;
        self.pause_between(CLICK_HOLD_MS.0, CLICK_HOLD_MS.1)?;
        self.release(button)
    }

    /// Moves to `target` unless already there, then clicks.
    pub fn click_at(&mut self, target: Point, button: MouseButton) -> Result<()> {
        if !self.accepts(target) {
            return Ok(());
        }
        if self.sink.position()? != target {
            self.move_to(target)?;
        }
        self.click(button)
    }

    pub fn click_near(&mut self, target: Point, rand_x: i32, rand_y: i32, button: MouseButton) -> Result<()> {
        let p = self.jitter(target, rand_x, rand_y)?;
        self.click_at(p, button)
    }

    /// Clicks a Gaussian-distributed point inside `rect`.
    pub fn click_in_rect(&mut self, rect: Rect, button: MouseButton) -> Result<()> {
        let p = self.random.point_in_rect(rect);
        self.click_at(p, button)
    }

    /// Clicks a Gaussian-distributed point inside `polygon`.
    pub fn click_in_polygon(&mut self, polygon: &Polygon, button: MouseButton) -> Result<()> {
        let p = self.random.point_in_polygon(polygon);
        self.click_at(p, button)
    }

    /// Moves a short random distance, then clicks.
    pub fn click_slightly(&mut self, button: MouseButton) -> Result<()> {
        self.move_slightly()?;
        self.click(button)
    }

    /// Presses the left button, moves to `to`, and releases.
    pub fn drag(&mut self, to: Point) -> Result<()> {
        self.press(MouseButton::Left)?;
        self.pause_between(DRAG_DWELL_MS.0, DRAG_DWELL_MS.1)?;
        self.move_to(to)?;
        self.pause_between(DRAG_DWELL_MS.0, DRAG_DWELL_MS.1)?;
        self.release(MouseButton::Left)
    }

    /// Turns the wheel by `units` notches.
    pub fn scroll(&mut self, units: u32, up: bool) -> Result<()> {
        self.cancel.check()?;
        let notches = i32::try_from(units).unwrap_or(i32::MAX);
        self.sink.scroll(if up { notches } else { -notches })
    }

    pub fn click_wheel(&mut self) -> Result<()> {
        self.click(MouseButton::Middle)
    }

    /// Moves just outside a random edge of the canvas.
    pub fn move_off_screen(&mut self) -> Result<()> {
        let b = self.sink.bounds();
        let (left, top) = (i64::from(b.x), i64::from(b.y));
        let (right, bottom) = (i64::from(b.right()), i64::from(b.bottom()));
        let target = if self.random.chance(0.5) {
            let x = self.random.range(left - 1, right + 1)?;
            let y = if self.random.chance(0.5) { top - 1 } else { bottom };
            Point::new(x as i32, y as i32)
        } else {
            let x = if self.random.chance(0.5) { left - 1 } else { right };
            let y = self.random.range(top - 1, bottom + 1)?;
            Point::new(x as i32, y as i32)
        };
        self.glide(target, self.speed)
    }

    /// Moves 30 to 120 pixels along each axis in random directions, staying
    /// on the canvas.
    pub fn move_slightly(&mut self) -> Result<()> {
        let from = self.sink.position()?;
        for _ in 0..SLIGHT_MOVE_ATTEMPTS {
            let dx = self.random.range(SLIGHT_MOVE_PX.0, SLIGHT_MOVE_PX.1)?;
            let dy = self.random.range(SLIGHT_MOVE_PX.0, SLIGHT_MOVE_PX.1)?;
            let sx = if self.random.chance(0.5) { 1 } else { -1 };
            let sy = if self.random.chance(0.5) { 1 } else { -1 };
            let target = from.offset((sx * dx) as i32, (sy * dy) as i32);
            if self.is_on_canvas(target) {
                return self.glide(target, self.speed);
            }
        }
        crate::log("No on-canvas point found for a slight movement");
        Ok(())
    }
}
