//! `SendInput` delivery to a window's client area.
//!
//! Hardware-level input is the only kind most game clients accept; window
//! messages are ignored because they validate focus state. The target window
//! is brought to the foreground when the sink is created, and the real
//! cursor moves.

use anyhow::{anyhow, Result};

use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::{ClientToScreen, ScreenToClient};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, KEYEVENTF_UNICODE, MOUSEEVENTF_ABSOLUTE,
    MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP,
    MOUSEEVENTF_MOVE, MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, MOUSEEVENTF_WHEEL,
    MOUSE_EVENT_FLAGS, MOUSEINPUT, VIRTUAL_KEY, VK_BACK, VK_DOWN, VK_ESCAPE, VK_LEFT,
    VK_RETURN, VK_RIGHT, VK_TAB, VK_UP,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetClientRect, GetCursorPos, GetSystemMetrics, SetForegroundWindow, SM_CXSCREEN,
    SM_CYSCREEN, WHEEL_DELTA,
};

use super::sink::{InputSink, Key, MouseButton};
use crate::capture::find_process_window;
use crate::geometry::{Point, Rect};

/// Delivers events to `hwnd` with `SendInput`.
pub struct SendInputSink {
    hwnd: HWND,
}

impl SendInputSink {
    pub fn new(hwnd: HWND) -> Self {
        unsafe {
            let _ = SetForegroundWindow(hwnd);
        }
        // Give the window time to activate
        std::thread::sleep(std::time::Duration::from_millis(100));
        Self { hwnd }
    }

    /// Sink for the main window of `process_name`.
    pub fn find(process_name: &str) -> Result<Self> {
        let hwnd = find_process_window(process_name)?;
        crate::log(&format!("Input target window: {:?}", hwnd));
        Ok(Self::new(hwnd))
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    fn to_screen(&self, p: Point) -> Result<POINT> {
        let mut screen_point = POINT { x: p.x, y: p.y };
        unsafe {
            if !ClientToScreen(self.hwnd, &mut screen_point).as_bool() {
                return Err(anyhow!("ClientToScreen failed"));
            }
        }
        Ok(screen_point)
    }

    fn send_mouse(&self, flags: MOUSE_EVENT_FLAGS, dx: i32, dy: i32, data: i32) -> Result<()> {
        let input = INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx,
                    dy,
                    mouseData: data as _,
                    dwFlags: flags,
                    ..Default::default()
                },
            },
        };
        send(&[input])
    }

    fn send_key(&self, key: Key, up: bool) -> Result<()> {
        let release = if up { KEYEVENTF_KEYUP } else { KEYBD_EVENT_FLAGS(0) };
        let inputs: Vec<INPUT> = match virtual_key(key) {
            Some((vk, extended)) => {
                let flags = if extended { release | KEYEVENTF_EXTENDEDKEY } else { release };
                vec![keyboard_input(vk, 0, flags)]
            }
            None => {
                let Key::Char(c) = key else {
                    return Err(anyhow!("No key code for {:?}", key));
                };
                let mut units = [0u16; 2];
                c.encode_utf16(&mut units)
                    .iter()
                    .map(|&unit| keyboard_input(VIRTUAL_KEY(0), unit, release | KEYEVENTF_UNICODE))
                    .collect()
            }
        };
        send(&inputs)
    }
}

fn keyboard_input(vk: VIRTUAL_KEY, scan: u16, flags: KEYBD_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: scan,
                dwFlags: flags,
                ..Default::default()
            },
        },
    }
}

/// Virtual key for named keys, and whether it is an extended key.
fn virtual_key(key: Key) -> Option<(VIRTUAL_KEY, bool)> {
    match key {
        Key::Char(_) => None,
        Key::Enter => Some((VK_RETURN, false)),
        Key::Escape => Some((VK_ESCAPE, false)),
        Key::Backspace => Some((VK_BACK, false)),
        Key::Tab => Some((VK_TAB, false)),
        Key::Up => Some((VK_UP, true)),
        Key::Down => Some((VK_DOWN, true)),
        Key::Left => Some((VK_LEFT, true)),
        Key::Right => Some((VK_RIGHT, true)),
    }
}

fn send(inputs: &[INPUT]) -> Result<()> {
    let sent = unsafe { SendInput(inputs, std::mem::size_of::<INPUT>() as i32) };
    if sent as usize != inputs.len() {
        return Err(anyhow!(
            "SendInput delivered {} of {} events",
            sent,
            inputs.len()
        ));
    }
    Ok(())
}

impl InputSink for SendInputSink {
    fn bounds(&self) -> Rect {
        let mut client_rect = RECT::default();
        if unsafe { GetClientRect(self.hwnd, &mut client_rect) }.is_err() {
            return Rect::new(0, 0, 0, 0);
        }
        Rect::new(
            0,
            0,
            client_rect.right - client_rect.left,
            client_rect.bottom - client_rect.top,
        )
    }

    fn position(&self) -> Result<Point> {
        let mut cursor = POINT::default();
        unsafe {
            GetCursorPos(&mut cursor)?;
            if !ScreenToClient(self.hwnd, &mut cursor).as_bool() {
                return Err(anyhow!("ScreenToClient failed"));
            }
        }
        Ok(Point::new(cursor.x, cursor.y))
    }

    fn move_to(&mut self, p: Point) -> Result<()> {
        let screen_point = self.to_screen(p)?;
        let screen_width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
        let screen_height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
        if screen_width <= 0 || screen_height <= 0 {
            return Err(anyhow!("Screen size unavailable"));
        }

        // Normalize to 0-65535 range (required by MOUSEEVENTF_ABSOLUTE)
        let norm_x = ((screen_point.x as i64 * 65535) / screen_width as i64) as i32;
        let norm_y = ((screen_point.y as i64 * 65535) / screen_height as i64) as i32;
        self.send_mouse(MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE, norm_x, norm_y, 0)
    }

    fn press(&mut self, button: MouseButton) -> Result<()> {
        let flags = match button {
            MouseButton::Left => MOUSEEVENTF_LEFTDOWN,
            MouseButton::Right => MOUSEEVENTF_RIGHTDOWN,
            MouseButton::Middle => MOUSEEVENTF_MIDDLEDOWN,
        };
        self.send_mouse(flags, 0, 0, 0)
    }

    fn release(&mut self, button: MouseButton) -> Result<()> {
        let flags = match button {
            MouseButton::Left => MOUSEEVENTF_LEFTUP,
            MouseButton::Right => MOUSEEVENTF_RIGHTUP,
            MouseButton::Middle => MOUSEEVENTF_MIDDLEUP,
        };
        self.send_mouse(flags, 0, 0, 0)
    }

    fn scroll(&mut self, notches: i32) -> Result<()> {
        self.send_mouse(MOUSEEVENTF_WHEEL, 0, 0, notches * WHEEL_DELTA as i32)
    }

    fn key_down(&mut self, key: Key) -> Result<()> {
        self.send_key(key, false)
    }

    fn key_up(&mut self, key: Key) -> Result<()> {
        self.send_key(key, true)
    }
}
