//! Delivery of synthesized events to a platform.

use anyhow::Result;

use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        match c {
            '\n' | '\r' => Key::Enter,
            '\t' => Key::Tab,
            '\u{8}' => Key::Backspace,
            '\u{1b}' => Key::Escape,
            c => Key::Char(c),
        }
    }
}

/// One delivered event, as seen by a [`RecordingSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Move(Point),
    Press(MouseButton),
    Release(MouseButton),
    /// Wheel notches, positive away from the user.
    Scroll(i32),
    KeyDown(Key),
    KeyUp(Key),
}

/// Receives pointer and keyboard events in canvas coordinates.
pub trait InputSink {
    /// The addressable canvas. Points outside it are off screen.
    fn bounds(&self) -> Rect;

    /// Current pointer position.
    fn position(&self) -> Result<Point>;

    fn move_to(&mut self, p: Point) -> Result<()>;

    fn press(&mut self, button: MouseButton) -> Result<()>;

    fn release(&mut self, button: MouseButton) -> Result<()>;

    /// Turns the wheel by `notches`, positive away from the user.
    fn scroll(&mut self, notches: i32) -> Result<()>;

    fn key_down(&mut self, key: Key) -> Result<()>;

    fn key_up(&mut self, key: Key) -> Result<()>;
}

/// Records events instead of delivering them.
#[derive(Clone, Debug)]
pub struct RecordingSink {
    bounds: Rect,
    position: Point,
    events: Vec<InputEvent>,
}

impl RecordingSink {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            position: bounds.center(),
            events: Vec::new(),
        }
    }

    /// Starts with the pointer at `position`.
    pub fn at(bounds: Rect, position: Point) -> Self {
        Self {
            position,
            ..Self::new(bounds)
        }
    }

    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events other than pointer moves, in order.
    pub fn actions(&self) -> Vec<InputEvent> {
        self.events
            .iter()
            .filter(|e| !matches!(e, InputEvent::Move(_)))
            .copied()
            .collect()
    }

    /// Text typed through `Key::Char` presses.
    pub fn typed_text(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                InputEvent::KeyDown(Key::Char(c)) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl InputSink for RecordingSink {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn position(&self) -> Result<Point> {
        Ok(self.position)
    }

    fn move_to(&mut self, p: Point) -> Result<()> {
        self.position = p;
        self.events.push(InputEvent::Move(p));
        Ok(())
    }

    fn press(&mut self, button: MouseButton) -> Result<()> {
        self.events.push(InputEvent::Press(button));
        Ok(())
    }

    fn release(&mut self, button: MouseButton) -> Result<()> {
        self.events.push(InputEvent::Release(button));
        Ok(())
    }

    fn scroll(&mut self, notches: i32) -> Result<()> {
        self.events.push(InputEvent::Scroll(notches));
        Ok(())
    }

    fn key_down(&mut self, key: Key) -> Result<()> {
        self.events.push(InputEvent::KeyDown(key));
        Ok(())
    }

    fn key_up(&mut self, key: Key) -> Result<()> {
        self.events.push(InputEvent::KeyUp(key));
        Ok(())
    }
}
