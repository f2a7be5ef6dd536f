//! Cross-platform application paths using the `dirs` crate.
//!
//! Config dir (settings):
//!   Windows: %APPDATA%\speech-numbers\
//!   macOS:   ~/Library/Application Support/speech-numbers/
//!   Linux:   ~/.config/speech-numbers/

use std::path::PathBuf;

/// Holds the resolved configuration paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "speech-numbers";

    /// Resolves all paths, falling back to the current directory when the
    /// platform has no standard config location.
    pub fn new() -> Self {
        let settings_file = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME)
            .join("settings.toml");

        Self { settings_file }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
