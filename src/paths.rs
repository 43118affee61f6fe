use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::ocr::FontType;

static EXE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Application directory name used under the platform data directory.
const APP_DIR_NAME: &str = "pixel-autopilot";

/// Returns the directory containing the executable.
pub fn get_exe_dir() -> &'static PathBuf {
    EXE_DIR.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    })
}

/// Returns the logs directory: `<exe_dir>/logs/`
pub fn get_logs_dir() -> PathBuf {
    get_exe_dir().join("logs")
}

/// Returns the screenshots directory: `<exe_dir>/screenshots/`
pub fn get_screenshots_dir() -> PathBuf {
    get_exe_dir().join("screenshots")
}

/// Ensures all output directories exist. Call at startup.
pub fn ensure_directories() -> std::io::Result<()> {
    std::fs::create_dir_all(get_logs_dir())?;
    std::fs::create_dir_all(get_screenshots_dir())?;
    Ok(())
}

/// Resolves where cached resources (font bitmaps) live.
pub trait StoragePathProvider {
    /// Root of the storage directory.
    fn storage_root(&self) -> PathBuf;

    /// Directory holding one font's bitmaps: `{root}/Cache/Fonts/{font}/`
    fn font_dir(&self, font: FontType) -> PathBuf {
        self.storage_root()
            .join("Cache")
            .join("Fonts")
            .join(font.dir_name())
    }
}

/// Storage rooted at a fixed directory.
#[derive(Debug, Clone)]
pub struct FixedStorage(pub PathBuf);

impl FixedStorage {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self(root.as_ref().to_path_buf())
    }
}

impl StoragePathProvider for FixedStorage {
    fn storage_root(&self) -> PathBuf {
        self.0.clone()
    }
}

/// Storage resolved from configuration.
///
/// Uses the configured override when set, else the platform data directory,
/// else `<exe_dir>/storage`.
#[derive(Debug, Clone, Default)]
pub struct DefaultStorage {
    pub override_root: Option<PathBuf>,
}

impl StoragePathProvider for DefaultStorage {
    fn storage_root(&self) -> PathBuf {
        if let Some(root) = &self.override_root {
            return root.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| get_exe_dir().join("storage"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_dir_layout() {
        let storage = FixedStorage::new("/data/bot");
        let dir = storage.font_dir(FontType::UpChars);
        assert_eq!(dir, PathBuf::from("/data/bot/Cache/Fonts/UpChars"));
    }

    #[test]
    fn test_default_storage_prefers_override() {
        let storage = DefaultStorage {
            override_root: Some(PathBuf::from("/opt/cache")),
        };
        assert_eq!(storage.storage_root(), PathBuf::from("/opt/cache"));
    }
}
