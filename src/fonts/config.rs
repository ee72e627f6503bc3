//! Configuration for font lookup

use std::path::{Path, PathBuf};

/// Environment variable holding the platform root that contains the font directory
pub const FONT_ROOT_ENV: &str = "WINDIR";

/// Root used when [`FONT_ROOT_ENV`] is unset
pub const DEFAULT_FONT_ROOT: &str = r"C:\Windows";

/// Name of the font directory below the root
pub const FONT_DIR_NAME: &str = "Fonts";

/// Where the font resolver looks for installed font files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    /// Directory scanned (non-recursively) for `.ttf` and `.otf` files
    pub font_dir: PathBuf,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::from_root(DEFAULT_FONT_ROOT)
    }
}

impl FontConfig {
    /// Create a configuration with the default font directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the font root from the environment, falling back to the default root
    pub fn from_env() -> Self {
        match std::env::var_os(FONT_ROOT_ENV) {
            Some(root) if !root.is_empty() => Self::from_root(root),
            _ => Self::default(),
        }
    }

    /// Use `<root>/Fonts` as the font directory
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        Self {
            font_dir: root.as_ref().join(FONT_DIR_NAME),
        }
    }

    /// Use an explicit font directory
    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FontConfig::default();
        assert_eq!(config.font_dir, Path::new(DEFAULT_FONT_ROOT).join("Fonts"));
    }

    #[test]
    fn test_from_root_appends_fonts() {
        let config = FontConfig::from_root("/opt/win");
        assert_eq!(config.font_dir, PathBuf::from("/opt/win").join("Fonts"));
    }

    #[test]
    fn test_with_font_dir_overrides() {
        let config = FontConfig::new().with_font_dir("/usr/share/fonts/truetype");
        assert_eq!(config.font_dir, PathBuf::from("/usr/share/fonts/truetype"));
    }
}
