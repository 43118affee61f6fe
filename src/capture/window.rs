//! Window discovery for the target process.

use anyhow::{anyhow, Result};
use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

use windows::Win32::Foundation::{BOOL, HWND, LPARAM, POINT, RECT, TRUE};
use windows::Win32::Graphics::Gdi::ClientToScreen;
use windows::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetClientRect, GetWindowRect, GetWindowTextLengthW, GetWindowThreadProcessId,
    IsWindowVisible,
};

/// Finds the first visible, titled window owned by a process whose
/// executable name equals `process_name` (case-insensitive).
pub fn find_process_window(process_name: &str) -> Result<HWND> {
    struct EnumData {
        wanted: String,
        hwnd: Option<HWND>,
    }

    unsafe extern "system" fn enum_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
        unsafe {
            let data = &mut *(lparam.0 as *mut EnumData);

            if !IsWindowVisible(hwnd).as_bool() || GetWindowTextLengthW(hwnd) == 0 {
                return TRUE;
            }

            let mut process_id: u32 = 0;
            GetWindowThreadProcessId(hwnd, Some(&mut process_id));
            if process_id == 0 {
                return TRUE;
            }

            let Ok(process_handle) =
                OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, process_id)
            else {
                return TRUE;
            };

            let mut name_buf: Vec<u16> = vec![0; 1024];
            let mut len = name_buf.len() as u32;
            let result = QueryFullProcessImageNameW(
                process_handle,
                PROCESS_NAME_WIN32,
                windows::core::PWSTR(name_buf.as_mut_ptr()),
                &mut len,
            );
            let _ = windows::Win32::Foundation::CloseHandle(process_handle);
            if result.is_err() || len == 0 {
                return TRUE;
            }

            let full_path = OsString::from_wide(&name_buf[..len as usize])
                .to_string_lossy()
                .to_string();
            let exe_name = full_path.rsplit('\\').next().unwrap_or(&full_path);

            if exe_name.to_lowercase() == data.wanted {
                data.hwnd = Some(hwnd);
                return BOOL(0); // Stop enumeration
            }

            TRUE
        }
    }

    crate::log(&format!("Searching for {} window...", process_name));
    let mut data = EnumData {
        wanted: process_name.to_lowercase(),
        hwnd: None,
    };
    unsafe {
        // EnumWindows reports FALSE when the callback stops it early
        let _ = EnumWindows(Some(enum_callback), LPARAM(&mut data as *mut _ as isize));
    }

    data.hwnd
        .ok_or_else(|| anyhow!("Could not find a window of {}. Is it running?", process_name))
}

/// Returns the client rectangle and the client origin's offset from the
/// window's top-left corner.
pub fn get_client_area_info(hwnd: HWND) -> Result<(RECT, POINT)> {
    let mut client_rect = RECT::default();
    unsafe { GetClientRect(hwnd, &mut client_rect)? };

    let client_origin = client_origin_on_screen(hwnd)?;

    let mut window_rect = RECT::default();
    unsafe { GetWindowRect(hwnd, &mut window_rect)? };

    let offset = POINT {
        x: client_origin.x - window_rect.left,
        y: client_origin.y - window_rect.top,
    };

    Ok((client_rect, offset))
}

/// Screen position of the client area's top-left corner.
pub fn client_origin_on_screen(hwnd: HWND) -> Result<POINT> {
    let mut origin = POINT { x: 0, y: 0 };
    unsafe {
        if !ClientToScreen(hwnd, &mut origin).as_bool() {
            return Err(anyhow!("ClientToScreen failed"));
        }
    }
    Ok(origin)
}
