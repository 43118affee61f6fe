//! Frame providers consumed by the detection helpers.

use anyhow::Result;
use std::sync::Mutex;

use super::frame::RasterFrame;

/// Supplies the current frame of the target on demand.
pub trait FrameSource {
    fn capture(&self) -> Result<RasterFrame>;
}

/// Any closure returning a frame is a source.
impl<F> FrameSource for F
where
    F: Fn() -> Result<RasterFrame>,
{
    fn capture(&self) -> Result<RasterFrame> {
        self()
    }
}

/// Always returns the same frame.
#[derive(Clone, Debug)]
pub struct StaticFrameSource {
    frame: RasterFrame,
}

impl StaticFrameSource {
    pub fn new(frame: RasterFrame) -> Self {
        Self { frame }
    }
}

impl FrameSource for StaticFrameSource {
    fn capture(&self) -> Result<RasterFrame> {
        Ok(self.frame.clone())
    }
}

/// Plays back a list of frames, repeating the last one once exhausted.
#[derive(Debug)]
pub struct SequenceFrameSource {
    frames: Vec<RasterFrame>,
    next: Mutex<usize>,
}

impl SequenceFrameSource {
    pub fn new(frames: Vec<RasterFrame>) -> Self {
        Self {
            frames,
            next: Mutex::new(0),
        }
    }
}

impl FrameSource for SequenceFrameSource {
    fn capture(&self) -> Result<RasterFrame> {
        let mut next = self
            .next
            .lock()
            .map_err(|_| anyhow::anyhow!("frame sequence lock poisoned"))?;
        let index = (*next).min(self.frames.len().saturating_sub(1));
        let frame = self
            .frames
            .get(index)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("frame sequence is empty"))?;
        *next += 1;
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::Color;

    #[test]
    fn test_sequence_repeats_last_frame() {
        let source = SequenceFrameSource::new(vec![
            RasterFrame::filled(1, 1, Color::BLACK),
            RasterFrame::filled(1, 1, Color::WHITE),
        ]);
        assert_eq!(source.capture().unwrap().color_at(0, 0), Color::BLACK);
        assert_eq!(source.capture().unwrap().color_at(0, 0), Color::WHITE);
        assert_eq!(source.capture().unwrap().color_at(0, 0), Color::WHITE);
    }

    #[test]
    fn test_empty_sequence_is_an_error() {
        let source = SequenceFrameSource::new(Vec::new());
        assert!(source.capture().is_err());
    }

    #[test]
    fn test_closure_source() {
        let source = || -> Result<RasterFrame> { Ok(RasterFrame::filled(2, 2, Color::WHITE)) };
        assert_eq!(source.capture().unwrap().width(), 2);
    }
}
