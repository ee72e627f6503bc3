//! Font file search and standard-font fallback

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::FontConfig;

/// A requested typeface, optionally pinned to a specific file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRequest {
    pub font_name: String,
    pub font_file: Option<PathBuf>,
}

impl FontRequest {
    pub fn new(font_name: impl Into<String>) -> Self {
        Self {
            font_name: font_name.into(),
            font_file: None,
        }
    }

    /// Use this file instead of searching the font directory
    pub fn with_font_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_file = Some(path.into());
        self
    }
}

/// Font file formats recognized during directory search, in preference order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FontFormat {
    TrueType,
    OpenType,
}

impl FontFormat {
    pub const ALL: [FontFormat; 2] = [FontFormat::TrueType, FontFormat::OpenType];

    pub fn extension(&self) -> &'static str {
        match self {
            FontFormat::TrueType => "ttf",
            FontFormat::OpenType => "otf",
        }
    }

    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }
}

/// The two PDF standard font families used as fallbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    TimesRoman,
}

impl StandardFont {
    /// PostScript name of the regular face
    pub fn name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::TimesRoman => "Times-Roman",
        }
    }
}

impl Default for StandardFont {
    fn default() -> Self {
        StandardFont::Helvetica
    }
}

impl fmt::Display for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Family names with a known standard-font equivalent (keys are lowercase)
const STANDARD_FONT_TABLE: &[(&str, StandardFont)] = &[
    ("helvetica", StandardFont::Helvetica),
    ("timesnewroman", StandardFont::TimesRoman),
    ("times new roman", StandardFont::TimesRoman),
    ("georgia", StandardFont::TimesRoman),
    ("cambria", StandardFont::TimesRoman),
    ("garamond", StandardFont::TimesRoman),
    ("arial", StandardFont::Helvetica),
    ("calibri", StandardFont::Helvetica),
    ("verdana", StandardFont::Helvetica),
    ("roboto", StandardFont::Helvetica),
    ("lato", StandardFont::Helvetica),
    ("opensans", StandardFont::Helvetica),
    ("open sans", StandardFont::Helvetica),
];

/// Map a family name to a standard font. Total: unknown names map to Helvetica.
pub fn standard_font(font_name: &str) -> StandardFont {
    let key = font_name.to_lowercase();
    STANDARD_FONT_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, font)| *font)
        .unwrap_or_default()
}

/// Lowercase and strip everything that is not alphanumeric
pub fn normalize_font_name(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Outcome of font resolution for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFont {
    /// The family name as requested by the user
    pub requested: String,
    /// Font file found for the request, if any
    pub file: Option<PathBuf>,
    /// Standard font used when no usable file can be embedded
    pub standard: StandardFont,
}

impl ResolvedFont {
    /// The resolved file, only when it is in the embeddable (TrueType) format
    pub fn truetype_file(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| FontFormat::from_path(path) == Some(FontFormat::TrueType))
    }
}

/// Resolves font requests against a configured font directory
#[derive(Debug, Clone, Default)]
pub struct FontResolver {
    config: FontConfig,
}

impl FontResolver {
    pub fn new(config: FontConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FontConfig {
        &self.config
    }

    /// Resolve both the font file and the standard-font fallback
    pub fn resolve(&self, request: &FontRequest) -> ResolvedFont {
        let resolved = ResolvedFont {
            requested: request.font_name.clone(),
            file: self.resolve_file(request),
            standard: standard_font(&request.font_name),
        };
        debug!(
            font = %resolved.requested,
            file = ?resolved.file,
            fallback = %resolved.standard,
            "resolved font"
        );
        resolved
    }

    /// Find a font file for the request
    ///
    /// An explicit file wins unconditionally. Otherwise the font directory is
    /// scanned for `.ttf`/`.otf` files whose normalized name contains the
    /// normalized family name. TrueType files are preferred; within a format
    /// the lexicographically first file name wins.
    pub fn resolve_file(&self, request: &FontRequest) -> Option<PathBuf> {
        if let Some(file) = &request.font_file {
            return Some(file.clone());
        }
        let target = normalize_font_name(&request.font_name);
        if target.is_empty() {
            return None;
        }

        let entries = match std::fs::read_dir(&self.config.font_dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = %self.config.font_dir.display(), %err, "font directory not readable");
                return None;
            }
        };

        let mut matches: Vec<(FontFormat, String, PathBuf)> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let path = entry.path();
                let file_name = entry.file_name().to_str()?.to_string();
                let format = FontFormat::from_path(&path)?;
                if !path.is_file() || !normalize_font_name(&file_name).contains(&target) {
                    return None;
                }
                Some((format, file_name, path))
            })
            .collect();

        matches.sort();
        matches.into_iter().next().map(|(_, _, path)| path)
    }
}
