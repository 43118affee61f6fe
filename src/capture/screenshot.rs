//! Window capture using the Windows Graphics Capture API.

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use windows::core::Interface;
use windows::Foundation::TypedEventHandler;
use windows::Graphics::Capture::{Direct3D11CaptureFramePool, GraphicsCaptureItem};
use windows::Graphics::DirectX::DirectXPixelFormat;
use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::Graphics::Direct3D::D3D_DRIVER_TYPE_HARDWARE;
use windows::Win32::Graphics::Direct3D11::{
    D3D11CreateDevice, ID3D11Device, ID3D11DeviceContext, ID3D11Resource, ID3D11Texture2D,
    D3D11_CPU_ACCESS_READ, D3D11_CREATE_DEVICE_BGRA_SUPPORT, D3D11_MAP_READ, D3D11_SDK_VERSION,
    D3D11_TEXTURE2D_DESC, D3D11_USAGE_STAGING,
};
use windows::Win32::System::WinRT::Direct3D11::{
    CreateDirect3D11DeviceFromDXGIDevice, IDirect3DDxgiInterfaceAccess,
};
use windows::Win32::System::WinRT::Graphics::Capture::IGraphicsCaptureItemInterop;

use super::frame::RasterFrame;
use super::source::FrameSource;
use super::window::{find_process_window, get_client_area_info};

/// How long to wait for the first captured frame.
const FRAME_TIMEOUT: Duration = Duration::from_secs(5);

/// Captures the client area of a window into a frame.
pub fn capture_window(hwnd: HWND) -> Result<RasterFrame> {
    let (client_rect, client_offset) = get_client_area_info(hwnd)?;
    let client_width = (client_rect.right - client_rect.left).max(0) as u32;
    let client_height = (client_rect.bottom - client_rect.top).max(0) as u32;

    let (device, context) = create_d3d11_device()?;
    let item = create_capture_item(hwnd)?;
    let size = item.Size()?;

    let d3d_device = create_direct3d_device(&device)?;
    let frame_pool = Direct3D11CaptureFramePool::CreateFreeThreaded(
        &d3d_device,
        DirectXPixelFormat::B8G8R8A8UIntNormalized,
        1,
        size,
    )?;
    let session = frame_pool.CreateCaptureSession(&item)?;

    let frame_arrived = Arc::new(AtomicBool::new(false));
    let frame_arrived_clone = frame_arrived.clone();
    frame_pool.FrameArrived(&TypedEventHandler::new(
        move |_pool: &Option<Direct3D11CaptureFramePool>, _| {
            frame_arrived_clone.store(true, Ordering::SeqCst);
            Ok(())
        },
    ))?;

    session.StartCapture()?;

    let start = Instant::now();
    while !frame_arrived.load(Ordering::SeqCst) {
        if start.elapsed() > FRAME_TIMEOUT {
            let _ = session.Close();
            let _ = frame_pool.Close();
            return Err(anyhow!("Timeout waiting for a captured frame"));
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    let frame = frame_pool.TryGetNextFrame()?;
    let access: IDirect3DDxgiInterfaceAccess = frame.Surface()?.cast()?;
    let texture: ID3D11Texture2D = unsafe { access.GetInterface()? };

    let image = read_client_area(
        &device,
        &context,
        &texture,
        client_offset,
        client_width,
        client_height,
    );

    session.Close()?;
    frame_pool.Close()?;

    Ok(RasterFrame::new(image?))
}

/// Copies the texture to a CPU-readable staging texture and converts the
/// client area from BGRA to RGBA.
fn read_client_area(
    device: &ID3D11Device,
    context: &ID3D11DeviceContext,
    texture: &ID3D11Texture2D,
    offset: POINT,
    width: u32,
    height: u32,
) -> Result<RgbaImage> {
    let mut desc = D3D11_TEXTURE2D_DESC::default();
    unsafe { texture.GetDesc(&mut desc) };

    let staging_desc = D3D11_TEXTURE2D_DESC {
        Width: desc.Width,
        Height: desc.Height,
        MipLevels: 1,
        ArraySize: 1,
        Format: desc.Format,
        SampleDesc: desc.SampleDesc,
        Usage: D3D11_USAGE_STAGING,
        BindFlags: Default::default(),
        CPUAccessFlags: D3D11_CPU_ACCESS_READ.0 as u32,
        MiscFlags: Default::default(),
    };

    let staging: ID3D11Texture2D = unsafe {
        let mut staging = None;
        device.CreateTexture2D(&staging_desc, None, Some(&mut staging))?;
        staging.ok_or_else(|| anyhow!("Failed to create staging texture"))?
    };
    let staging_resource: ID3D11Resource = staging.cast()?;

    unsafe {
        context.CopyResource(&staging_resource, &texture.cast::<ID3D11Resource>()?);
    }

    let mapped = unsafe {
        let mut mapped = Default::default();
        context.Map(&staging_resource, 0, D3D11_MAP_READ, 0, Some(&mut mapped))?;
        mapped
    };

    let row_pitch = mapped.RowPitch as usize;
    let src = unsafe {
        std::slice::from_raw_parts(mapped.pData as *const u8, row_pitch * desc.Height as usize)
    };

    let (ox, oy) = (offset.x.max(0) as u32, offset.y.max(0) as u32);
    let image: RgbaImage = ImageBuffer::from_fn(width, height, |x, y| {
        let (sx, sy) = (ox + x, oy + y);
        if sx >= desc.Width || sy >= desc.Height {
            return Rgba([0, 0, 0, 255]);
        }
        let i = sy as usize * row_pitch + sx as usize * 4;
        Rgba([src[i + 2], src[i + 1], src[i], src[i + 3]])
    });

    unsafe { context.Unmap(&staging_resource, 0) };

    Ok(image)
}

/// Saves a frame as a timestamped PNG inside `dir` and returns its path.
pub fn save_screenshot(frame: &RasterFrame, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S%.3f");
    let path = dir.join(format!("capture_{}.png", timestamp));
    frame.save(&path)?;
    crate::log(&format!("Saved screenshot to {}", path.display()));
    Ok(path)
}

/// Frames of a process window, captured on demand.
pub struct WindowFrameSource {
    hwnd: HWND,
}

impl WindowFrameSource {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Locates the window of `process_name`.
    pub fn find(process_name: &str) -> Result<Self> {
        let hwnd = find_process_window(process_name)?;
        crate::log(&format!("Capturing window {:?} of {}", hwnd, process_name));
        Ok(Self::new(hwnd))
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

impl FrameSource for WindowFrameSource {
    fn capture(&self) -> Result<RasterFrame> {
        capture_window(self.hwnd).context("Window capture failed")
    }
}

fn create_d3d11_device() -> Result<(ID3D11Device, ID3D11DeviceContext)> {
    let mut device: Option<ID3D11Device> = None;
    let mut context: Option<ID3D11DeviceContext> = None;

    unsafe {
        D3D11CreateDevice(
            None,
            D3D_DRIVER_TYPE_HARDWARE,
            None,
            D3D11_CREATE_DEVICE_BGRA_SUPPORT,
            None,
            D3D11_SDK_VERSION,
            Some(&mut device),
            None,
            Some(&mut context),
        )?;
    }

    Ok((
        device.ok_or_else(|| anyhow!("Failed to create D3D11 device"))?,
        context.ok_or_else(|| anyhow!("Failed to create D3D11 context"))?,
    ))
}

/// WinRT device wrapper required by the capture frame pool.
fn create_direct3d_device(
    device: &ID3D11Device,
) -> Result<windows::Graphics::DirectX::Direct3D11::IDirect3DDevice> {
    let dxgi_device: windows::Win32::Graphics::Dxgi::IDXGIDevice = device.cast()?;
    let inspectable = unsafe { CreateDirect3D11DeviceFromDXGIDevice(&dxgi_device)? };
    inspectable
        .cast()
        .context("Failed to cast to IDirect3DDevice")
}

fn create_capture_item(hwnd: HWND) -> Result<GraphicsCaptureItem> {
    let class_name = windows::core::h!("Windows.Graphics.Capture.GraphicsCaptureItem");
    let interop: IGraphicsCaptureItemInterop = unsafe {
        windows::Win32::System::WinRT::RoGetActivationFactory(class_name)
            .context("Failed to get IGraphicsCaptureItemInterop")?
    };
    unsafe {
        interop
            .CreateForWindow(hwnd)
            .context("Failed to create capture item for window")
    }
}
