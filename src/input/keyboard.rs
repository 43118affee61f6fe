//! Keystroke synthesis with randomized timing.

use anyhow::Result;
use std::time::Duration;

use super::mouse::InputSynthesizer;
use super::sink::{InputSink, Key};

/// How long a key stays down, in milliseconds.
const KEY_HOLD_MS: (u64, u64) = (20, 60);

impl<S: InputSink> InputSynthesizer<S> {
    pub fn press_key(&mut self, key: Key) -> Result<()> {
        self.cancel.check()?;
        self.sink.key_down(key)
    }

    pub fn release_key(&mut self, key: Key) -> Result<()> {
        self.cancel.check()?;
        self.sink.key_up(key)
    }

    /// Waits `delay`, then taps `key`.
    pub fn send_key(&mut self, key: Key, delay: Duration) -> Result<()> {
        self.pause(delay)?;
        self.press_key(key)?;
        self.pause_between(KEY_HOLD_MS.0, KEY_HOLD_MS.1)?;
        self.release_key(key)
    }

    /// Types `text` one character at a time, waiting between `min_ms` and
    /// `max_ms` before each key. Presses Enter afterwards when `confirm` is
    /// set.
    pub fn send_keys(&mut self, text: &str, confirm: bool, min_ms: u64, max_ms: u64) -> Result<()> {
        // Reject a bad range before anything is typed
        self.random.duration_ms(min_ms, max_ms)?;
        for c in text.chars() {
            let delay = self.random.duration_ms(min_ms, max_ms)?;
            self.send_key(Key::from(c), delay)?;
        }
        if confirm {
            let delay = self.random.duration_ms(min_ms, max_ms)?;
            self.send_key(Key::Enter, delay)?;
        }
        Ok(())
    }

    /// [`send_keys`](Self::send_keys) with the configured inter-key delay.
    pub fn send_text(&mut self, text: &str, confirm: bool) -> Result<()> {
        let (min_ms, max_ms) = self.key_delay_ms;
        self.send_keys(text, confirm, min_ms, max_ms)
    }

    /// Types `text` with no pauses at all.
    pub fn send_keys_instant(&mut self, text: &str, confirm: bool) -> Result<()> {
        let keys = text.chars().map(Key::from).chain(confirm.then_some(Key::Enter));
        for key in keys {
            self.press_key(key)?;
            self.release_key(key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::cancel::CancelToken;
    use crate::error::{Cancelled, InvalidRange};
    use crate::geometry::Rect;
    use crate::input::random::Randomizer;
    use crate::input::sink::{InputEvent, RecordingSink};
    use std::time::Instant;

    fn synth() -> InputSynthesizer<RecordingSink> {
        InputSynthesizer::new(RecordingSink::new(Rect::new(0, 0, 800, 600)))
            .with_randomizer(Randomizer::seeded(4))
            .with_cancel_token(CancelToken::new())
    }

    #[test]
    fn test_send_keys_types_text() {
        let mut synth = synth();
        synth.send_keys("buy 10", true, 1, 3).unwrap();
        let sink = synth.sink();
        assert_eq!(sink.typed_text(), "buy 10");
        assert_eq!(sink.events().len(), 14);
        assert_eq!(sink.events()[12], InputEvent::KeyDown(Key::Enter));
        assert_eq!(sink.events()[13], InputEvent::KeyUp(Key::Enter));
    }

    #[test]
    fn test_send_keys_respects_delay() {
        let mut synth = synth();
        let start = Instant::now();
        synth.send_keys("abc", false, 20, 21).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(60));
        assert!(!synth.sink().events().contains(&InputEvent::KeyDown(Key::Enter)));
    }

    #[test]
    fn test_send_keys_rejects_bad_range() {
        let mut synth = synth();
        let err = synth.send_keys("abc", false, 100, 50).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidRange>(),
            Some(&InvalidRange { min: 100, max: 50 })
        );
        assert!(synth.sink().events().is_empty());
    }

    #[test]
    fn test_send_keys_instant() {
        let mut synth = synth();
        synth.send_keys_instant("hi\n", false).unwrap();
        assert_eq!(
            synth.sink().events(),
            &[
                InputEvent::KeyDown(Key::Char('h')),
                InputEvent::KeyUp(Key::Char('h')),
                InputEvent::KeyDown(Key::Char('i')),
                InputEvent::KeyUp(Key::Char('i')),
                InputEvent::KeyDown(Key::Enter),
                InputEvent::KeyUp(Key::Enter)
            ]
        );
    }

    #[test]
    fn test_send_text_uses_configured_delay() {
        let mut synth = synth().with_key_delay(0, 2);
        synth.send_text("ok", true).unwrap();
        assert_eq!(synth.sink().typed_text(), "ok");
        assert_eq!(synth.sink().actions().len(), 6);
    }

    #[test]
    fn test_cancel_stops_typing() {
        let mut synth = synth();
        synth.cancel_token().cancel();
        let err = synth.send_keys_instant("abc", true).unwrap_err();
        assert!(err.downcast_ref::<Cancelled>().is_some());
        assert!(synth.sink().events().is_empty());
    }
}
