//! Resume Render - DOCX and PDF resumes from a JSON description
//!
//! This library loads a resume description, builds a renderer-neutral
//! outline from it, and writes a word-processor document and a paginated
//! document from that outline.
//!
//! # Example
//!
//! ```rust
//! use resume_render::{Outline, Resume};
//!
//! let resume = Resume::from_json(r#"{"name": "Jane Doe", "skills": {"technical": ["Go"]}}"#).unwrap();
//! let outline = Outline::build(&resume);
//! assert_eq!(
//!     outline.to_string(),
//!     "name: Jane Doe\nheading: SKILLS\nline: Technical Skills: Go\n"
//! );
//! ```

pub mod capability;
pub mod fonts;
pub mod model;
pub mod outline;
pub mod renderer;
pub mod stylesheet;

pub use capability::{Backend, Capabilities, CapabilityError};
pub use fonts::{FontConfig, FontRequest, FontResolver, ResolvedFont, StandardFont};
pub use model::{LoadError, Resume};
pub use outline::{Block, Outline, Section};
pub use renderer::PageConfig;
pub use stylesheet::{Stylesheet, StylesheetError};

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Font requested when none is given
pub const DEFAULT_FONT_NAME: &str = "Calibri";

/// Errors that can occur while generating documents
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading the resume description
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Error loading a user stylesheet
    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),

    /// A document backend is not compiled in
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// Error assembling the DOCX package
    #[error("DOCX generation failed: {0}")]
    Docx(String),

    /// Error serializing the PDF
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// Error writing an output file
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Requested typeface and optional explicit font file
    pub font: FontRequest,
    /// Where installed fonts are searched
    pub fonts: FontConfig,
    /// Sizes, spacing and margins
    pub stylesheet: Stylesheet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font: FontRequest::new(DEFAULT_FONT_NAME),
            fonts: FontConfig::default(),
            stylesheet: Stylesheet::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested font family
    pub fn with_font_name(mut self, name: impl Into<String>) -> Self {
        self.font.font_name = name.into();
        self
    }

    /// Use an explicit font file for the PDF instead of searching
    pub fn with_font_file(mut self, path: Option<PathBuf>) -> Self {
        self.font.font_file = path;
        self
    }

    /// Set the font search configuration
    pub fn with_font_config(mut self, config: FontConfig) -> Self {
        self.fonts = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Resolve the requested font against the configured font directory
    pub fn resolve_font(&self) -> ResolvedFont {
        FontResolver::new(self.fonts.clone()).resolve(&self.font)
    }
}

/// Where the two documents are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub docx: PathBuf,
    pub pdf: PathBuf,
}

impl OutputPaths {
    /// Default paths: the input's file stem with `.docx` and `.pdf`, in the working directory
    pub fn for_input(input: &Path) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());
        Self {
            docx: PathBuf::from(format!("{}.docx", stem)),
            pdf: PathBuf::from(format!("{}.pdf", stem)),
        }
    }

    /// Override the DOCX path when one is given
    pub fn with_docx(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.docx = path;
        }
        self
    }

    /// Override the PDF path when one is given
    pub fn with_pdf(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.pdf = path;
        }
        self
    }
}

/// Render the DOCX document for a resume
///
/// The requested font name is used verbatim; it is never checked against
/// installed fonts.
#[cfg(feature = "docx")]
pub fn render_docx(resume: &Resume, config: &RenderConfig) -> Result<Vec<u8>, RenderError> {
    renderer::render_docx(
        &Outline::build(resume),
        &config.font.font_name,
        &config.stylesheet,
    )
}

/// Render the PDF document for a resume
#[cfg(feature = "pdf")]
pub fn render_pdf(resume: &Resume, config: &RenderConfig) -> Result<Vec<u8>, RenderError> {
    renderer::render_pdf(
        &Outline::build(resume),
        &config.resolve_font(),
        &config.stylesheet,
    )
}

/// Generate both documents and write them to `paths`
///
/// Backend availability is checked before anything is rendered, so a build
/// missing either backend writes no files at all.
pub fn generate(
    resume: &Resume,
    config: &RenderConfig,
    paths: &OutputPaths,
) -> Result<(), RenderError> {
    Capabilities::detect().require_all()?;

    #[cfg(feature = "docx")]
    write_output(&paths.docx, &render_docx(resume, config)?)?;

    #[cfg(feature = "pdf")]
    write_output(&paths.pdf, &render_pdf(resume, config)?)?;

    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    std::fs::write(path, bytes).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_paths() {
        let paths = OutputPaths::for_input(Path::new("/data/resumes/jane_doe.json"));
        assert_eq!(paths.docx, PathBuf::from("jane_doe.docx"));
        assert_eq!(paths.pdf, PathBuf::from("jane_doe.pdf"));
    }

    #[test]
    fn test_output_path_overrides() {
        let paths = OutputPaths::for_input(Path::new("resume.json"))
            .with_docx(Some(PathBuf::from("out/cv.docx")))
            .with_pdf(None);
        assert_eq!(paths.docx, PathBuf::from("out/cv.docx"));
        assert_eq!(paths.pdf, PathBuf::from("resume.pdf"));
    }

    #[test]
    fn test_output_paths_multiple_dots() {
        let paths = OutputPaths::for_input(Path::new("jane.v2.json"));
        assert_eq!(paths.pdf, PathBuf::from("jane.v2.pdf"));
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.font.font_name, "Calibri");
        assert_eq!(config.font.font_file, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::new()
            .with_font_name("Georgia")
            .with_font_file(Some(PathBuf::from("/fonts/georgia.ttf")))
            .with_font_config(FontConfig::new().with_font_dir("/fonts"));
        assert_eq!(config.font.font_name, "Georgia");
        assert_eq!(config.fonts.font_dir, PathBuf::from("/fonts"));
        let resolved = config.resolve_font();
        assert_eq!(resolved.file, Some(PathBuf::from("/fonts/georgia.ttf")));
        assert_eq!(resolved.standard, StandardFont::TimesRoman);
    }

    #[test]
    fn test_write_error_names_path() {
        let err = write_output(Path::new("/nonexistent/dir/out.pdf"), b"x").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/out.pdf"));
    }
}
