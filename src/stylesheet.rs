//! Stylesheet for font sizes, spacing and page margins
//!
//! Both renderers read their typographic settings from a [`Stylesheet`]. A
//! user stylesheet is a TOML file that overrides any subset of the built-in
//! defaults; keys it leaves out keep their default values.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Typographic settings shared by the DOCX and PDF renderers
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub sizes: FontSizes,
    pub spacing: Spacing,
    pub page: PageStyle,
}

/// Font sizes in points
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontSizes {
    pub name: f32,
    pub contact: f32,
    pub heading: f32,
    pub body: f32,
}

/// Vertical spacing in points (PDF only, except `bullet_indent`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Spacing {
    /// Line height as a multiple of the font size
    pub leading: f32,
    pub name_after: f32,
    pub contact_after: f32,
    pub heading_before: f32,
    pub heading_after: f32,
    pub body_after: f32,
    pub bullet_after: f32,
    /// Left indent of bullet text
    pub bullet_indent: f32,
    /// Gap after each education or experience entry
    pub entry_gap: f32,
}

/// Page geometry for the PDF renderer
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageStyle {
    /// Margin on all four sides, in inches
    pub margin_in: f32,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    sizes: FontSizes,
    spacing: Spacing,
    page: PageStyle,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default style - 18pt name, 11pt body, letter page with 0.75in margins
pub const DEFAULT_STYLE: &str = r##"
[sizes]
name = 18.0
contact = 10.0
heading = 12.0
body = 11.0

[spacing]
leading = 1.2
name_after = 6.0
contact_after = 10.0
heading_before = 12.0
heading_after = 4.0
body_after = 2.0
bullet_after = 1.0
bullet_indent = 14.0
entry_gap = 6.0

[page]
margin_in = 0.75
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        let sheet = Self::from_str(&content)?;
        debug!(path = %path.display(), style = %sheet.describe(), "loaded stylesheet");
        Ok(sheet)
    }

    /// Load stylesheet from TOML string, filling unset keys from the defaults
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let mut merged: toml::Table = toml::from_str(DEFAULT_STYLE)?;
        let overrides: toml::Table = toml::from_str(content)?;
        merge_tables(&mut merged, overrides);

        let parsed: TomlStylesheet = toml::Value::Table(merged).try_into()?;
        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            sizes: parsed.sizes,
            spacing: parsed.spacing,
            page: parsed.page,
        })
    }

    /// Name and description from the `[metadata]` table, for log output
    pub fn describe(&self) -> String {
        match (&self.name, &self.description) {
            (Some(name), Some(description)) => format!("{} ({})", name, description),
            (Some(name), None) => name.clone(),
            (None, _) => "unnamed".to_string(),
        }
    }

    /// Page margin in points
    pub fn margin_pt(&self) -> f32 {
        self.page.margin_in * 72.0
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str("").expect("Default style should be valid TOML")
    }
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(nested)) => {
                merge_tables(existing, nested);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
