//! Pixel Autopilot command line
//!
//! Runs the perception engine against saved screenshots, and on Windows
//! captures the configured target window.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pixel_autopilot::automation::{get_config, init_config};
use pixel_autopilot::capture::RasterFrame;
use pixel_autopilot::ocr::{FontLibrary, FontType, GlyphRecognizer, TextQuery, UpTextReader};
use pixel_autopilot::vision::{Pattern, SearchArea};
use pixel_autopilot::{log, paths, Rect};

#[derive(Debug, Parser)]
#[command(name = "pixel-autopilot", version, about = "Pattern search and text recognition on screenshots")]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every match of a serialized pattern
    Find {
        image: PathBuf,
        /// Pattern string, `r_g_b_t,r_g_b_x_y_t,...`
        pattern: String,
        /// Optional search area: x y width height
        #[arg(num_args = 4, value_names = ["X", "Y", "W", "H"], allow_negative_numbers = true)]
        area: Option<Vec<i32>>,
    },
    /// Print the text read in an area
    Ocr {
        image: PathBuf,
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
        w: i32,
        h: i32,
        /// Read with this font only, e.g. UpChars. Defaults to the configured
        /// fonts in priority order
        #[arg(long)]
        font: Option<String>,
    },
    /// Print the status line of a screenshot
    Uptext { image: PathBuf },
    /// Capture the target window into the screenshots directory
    #[cfg(windows)]
    Capture,
}

fn main() -> Result<()> {
    // Set up panic hook to log panics
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        let location = if let Some(loc) = panic_info.location() {
            format!(" at {}:{}:{}", loc.file(), loc.line(), loc.column())
        } else {
            String::new()
        };
        log(&format!("[PANIC]{} {}", location, msg));
    }));

    let cli = Cli::parse();

    // Ensure output directories exist
    paths::ensure_directories()?;
    init_config();

    match cli.command {
        Command::Find {
            image,
            pattern,
            area,
        } => find(&image, &pattern, area.as_deref()),
        Command::Ocr {
            image,
            font,
            x,
            y,
            w,
            h,
        } => ocr(&image, font.as_deref(), Rect::new(x, y, w, h)),
        Command::Uptext { image } => uptext(&image),
        #[cfg(windows)]
        Command::Capture => capture(),
    }
}

fn find(image: &Path, pattern: &str, area: Option<&[i32]>) -> Result<()> {
    let frame = RasterFrame::load(image)?;
    let pattern: Pattern = pattern.parse()?;
    let area = match area {
        Some(&[x, y, w, h]) => SearchArea::within(Rect::new(x, y, w, h)),
        Some(other) => return Err(anyhow!("Expected 4 area values, got {}", other.len())),
        None => SearchArea::full(),
    };

    let matches = pattern.find_all(&frame, area);
    log(&format!("{} match(es) for {}", matches.len(), pattern));
    for p in matches {
        println!("{}", p);
    }
    Ok(())
}

fn ocr(image: &Path, font: Option<&str>, area: Rect) -> Result<()> {
    let frame = RasterFrame::load(image)?;
    let config = get_config();
    let (library, query) = match font {
        Some(name) => {
            let font: FontType = name.parse()?;
            let library = FontLibrary::load(&config.storage(), &[font])?;
            (library, TextQuery::new(area).font(font))
        }
        None => (config.load_fonts()?, TextQuery::new(area)),
    };
    let recognizer = GlyphRecognizer::new(library);

    match recognizer.recognize(&frame, &query) {
        Some(text) => println!("{}", text),
        None => log("No text recognized"),
    }
    Ok(())
}

fn uptext(image: &Path) -> Result<()> {
    let frame = RasterFrame::load(image)?;
    let reader = UpTextReader::new(get_config().up_text.clone());
    match reader.read(&frame) {
        Some(text) => println!("{}", text),
        None => log("No status line text"),
    }
    Ok(())
}

#[cfg(windows)]
fn capture() -> Result<()> {
    use pixel_autopilot::capture::{save_screenshot, FrameSource, WindowFrameSource};

    unsafe {
        windows::Win32::System::WinRT::RoInitialize(
            windows::Win32::System::WinRT::RO_INIT_MULTITHREADED,
        )?
    };

    let source = WindowFrameSource::find(&get_config().target_process)?;
    let frame = source.capture()?;
    let path = save_screenshot(&frame, &paths::get_screenshots_dir())?;
    println!("{}", path.display());
    Ok(())
}
