//! Screen state detection over a frame source.
//!
//! Each helper captures a fresh frame per poll and hands the decision to a
//! [`Waiter`]. A failed capture ends the wait and is returned as the error.

use anyhow::Result;
use std::time::Duration;

use super::wait::Waiter;
use crate::capture::FrameSource;
use crate::geometry::{Point, Rect};
use crate::ocr::{GlyphRecognizer, TextQuery};
use crate::vision::{Color, Pattern, SearchArea};

/// Polls `check` against captured frames. Capture errors stop the wait.
fn poll_frames<S, F>(waiter: &mut Waiter, source: &S, timeout: Duration, mut check: F) -> Result<bool>
where
    S: FrameSource + ?Sized,
    F: FnMut(&crate::capture::RasterFrame) -> bool,
{
    let mut failure = None;
    let found = waiter.wait_for(timeout, || {
        if failure.is_some() {
            return true;
        }
        match source.capture() {
            Ok(frame) => check(&frame),
            Err(e) => {
                failure = Some(e);
                true
            }
        }
    })?;
    match failure {
        Some(e) => Err(e),
        None => Ok(found),
    }
}

/// Waits until `pattern` appears in `area`. Returns the first match.
pub fn wait_for_pattern<S>(
    waiter: &mut Waiter,
    source: &S,
    pattern: &Pattern,
    area: SearchArea,
    timeout: Duration,
) -> Result<Option<Point>>
where
    S: FrameSource + ?Sized,
{
    let mut hit = None;
    poll_frames(waiter, source, timeout, |frame| {
        hit = pattern.find_first(frame, area);
        hit.is_some()
    })?;
    if let Some(p) = hit {
        crate::log(&format!("Pattern found at {}", p));
    }
    Ok(hit)
}

/// Waits until `pattern` is no longer present in `area`.
pub fn wait_for_pattern_gone<S>(
    waiter: &mut Waiter,
    source: &S,
    pattern: &Pattern,
    area: SearchArea,
    timeout: Duration,
) -> Result<bool>
where
    S: FrameSource + ?Sized,
{
    poll_frames(waiter, source, timeout, |frame| !pattern.is_present(frame, area))
}

/// Waits until the text read by `query` contains `expected`.
pub fn wait_for_text<S>(
    waiter: &mut Waiter,
    source: &S,
    recognizer: &GlyphRecognizer,
    query: &TextQuery,
    expected: &str,
    timeout: Duration,
) -> Result<bool>
where
    S: FrameSource + ?Sized,
{
    let mut last_read = None;
    let found = poll_frames(waiter, source, timeout, |frame| {
        last_read = recognizer.recognize(frame, query);
        last_read.as_deref().is_some_and(|text| text.contains(expected))
    })?;
    if !found {
        crate::log(&format!(
            "Text \"{}\" not seen, last read: {:?}",
            expected, last_read
        ));
    }
    Ok(found)
}

/// Waits until at least `min_fraction` of `area` is within `tolerance` of
/// `color`.
pub fn wait_for_color_concentration<S>(
    waiter: &mut Waiter,
    source: &S,
    area: Rect,
    color: Color,
    tolerance: f64,
    min_fraction: f64,
    timeout: Duration,
) -> Result<bool>
where
    S: FrameSource + ?Sized,
{
    poll_frames(waiter, source, timeout, |frame| {
        frame.color_concentration(Some(area), color, tolerance) >= min_fraction
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::cancel::CancelToken;
    use crate::capture::{RasterFrame, SequenceFrameSource, StaticFrameSource};
    use crate::input::Randomizer;
    use crate::ocr::font::tests::{bitmap, SHAPE_A};
    use crate::ocr::{FontLibrary, FontSet, FontType, Glyph};
    use crate::vision::{AnchorPoint, BranchPoint};
    use anyhow::anyhow;

    const DARK: Color = Color::new(20, 20, 20);
    const RED: Color = Color::new(220, 30, 30);
    const BLUE: Color = Color::new(30, 30, 220);

    fn waiter() -> Waiter {
        Waiter::new()
            .with_cancel_token(CancelToken::new())
            .with_randomizer(Randomizer::seeded(2))
            .with_poll_interval(1, 3)
    }

    fn marker() -> Pattern {
        Pattern::new(
            AnchorPoint::new(RED, 5),
            vec![BranchPoint::new(1, 0, BLUE, 5)],
        )
    }

    fn frame_with_marker(at: Option<Point>) -> RasterFrame {
        RasterFrame::from_fn(30, 30, |x, y| match at {
            Some(p) if (x as i32, y as i32) == (p.x, p.y) => RED,
            Some(p) if (x as i32, y as i32) == (p.x + 1, p.y) => BLUE,
            _ => DARK,
        })
    }

    #[test]
    fn test_pattern_appears_after_some_frames() {
        let source = SequenceFrameSource::new(vec![
            frame_with_marker(None),
            frame_with_marker(None),
            frame_with_marker(Some(Point::new(12, 7))),
        ]);
        let hit = wait_for_pattern(
            &mut waiter(),
            &source,
            &marker(),
            SearchArea::full(),
            Duration::from_secs(2),
        )
        .unwrap();
        assert_eq!(hit, Some(Point::new(12, 7)));
    }

    #[test]
    fn test_pattern_never_appears() {
        let source = StaticFrameSource::new(frame_with_marker(None));
        let hit = wait_for_pattern(
            &mut waiter(),
            &source,
            &marker(),
            SearchArea::full(),
            Duration::from_millis(50),
        )
        .unwrap();
        assert_eq!(hit, None);
    }

    #[test]
    fn test_pattern_gone() {
        let source = SequenceFrameSource::new(vec![
            frame_with_marker(Some(Point::new(3, 3))),
            frame_with_marker(None),
        ]);
        assert!(wait_for_pattern_gone(
            &mut waiter(),
            &source,
            &marker(),
            SearchArea::full(),
            Duration::from_secs(2),
        )
        .unwrap());
    }

    #[test]
    fn test_capture_failure_is_reported() {
        let source = || -> Result<RasterFrame> { Err(anyhow!("window closed")) };
        let err = wait_for_pattern_gone(
            &mut waiter(),
            &source,
            &marker(),
            SearchArea::full(),
            Duration::from_secs(2),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "window closed");
    }

    #[test]
    fn test_wait_for_text() {
        let glyph = Glyph::from_bitmap('A', &bitmap(&SHAPE_A)).unwrap();
        let recognizer = GlyphRecognizer::new(FontLibrary::new(vec![FontSet::new(
            FontType::SmallChars,
            vec![glyph.clone()],
        )]));
        let mut img = RasterFrame::filled(30, 20, DARK).as_image().clone();
        for p in glyph.positives() {
            img.put_pixel((4 + p.x) as u32, (6 + p.y) as u32, Color::WHITE.into());
        }
        let source = SequenceFrameSource::new(vec![
            RasterFrame::filled(30, 20, DARK),
            RasterFrame::new(img),
        ]);
        let query = TextQuery::new(Rect::new(0, 0, 30, 20));
        assert!(wait_for_text(
            &mut waiter(),
            &source,
            &recognizer,
            &query,
            "A",
            Duration::from_secs(2),
        )
        .unwrap());
        assert!(!wait_for_text(
            &mut waiter(),
            &source,
            &recognizer,
            &query,
            "B",
            Duration::from_millis(40),
        )
        .unwrap());
    }

    #[test]
    fn test_color_concentration() {
        let half_red = RasterFrame::from_fn(10, 10, |x, _| if x < 5 { RED } else { DARK });
        let source = StaticFrameSource::new(half_red);
        let area = Rect::new(0, 0, 10, 10);
        assert!(wait_for_color_concentration(
            &mut waiter(),
            &source,
            area,
            RED,
            10.0,
            0.5,
            Duration::from_millis(100),
        )
        .unwrap());
        assert!(!wait_for_color_concentration(
            &mut waiter(),
            &source,
            area,
            RED,
            10.0,
            0.6,
            Duration::from_millis(30),
        )
        .unwrap());
    }
}
