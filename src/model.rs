//! Resume data model
//!
//! The in-memory form of the input JSON. Every field is optional: missing
//! keys, `null` values and empty strings all mean "absent" and simply cause
//! the corresponding line or section to be omitted when rendering.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors that can occur while loading a resume description
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read resume file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse resume JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A complete resume description
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Resume {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub contact: Contact,
    #[serde(deserialize_with = "nullable")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "nullable")]
    pub professional_experience: Vec<Position>,
    #[serde(deserialize_with = "nullable")]
    pub leadership_experience: Vec<Position>,
    #[serde(deserialize_with = "nullable")]
    pub skills: Skills,
}

/// Contact details, rendered as a single line under the name
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub website: String,
    #[serde(deserialize_with = "nullable")]
    pub linkedin: String,
    #[serde(deserialize_with = "nullable")]
    pub address: String,
    #[serde(deserialize_with = "nullable")]
    pub other: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "nullable")]
    pub school: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub degree: String,
    #[serde(deserialize_with = "nullable")]
    pub major: String,
    #[serde(deserialize_with = "nullable")]
    pub minor: String,
    #[serde(deserialize_with = "nullable")]
    pub dates: String,
    /// GPA as written in the input; numeric JSON values are accepted too
    #[serde(deserialize_with = "text_or_number")]
    pub gpa: String,
    #[serde(deserialize_with = "nullable")]
    pub awards: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub coursework: Vec<String>,
}

/// A professional or leadership experience entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Position {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub dates: String,
    #[serde(deserialize_with = "nullable")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "nullable")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub other: Vec<String>,
}

impl Resume {
    /// Load a resume from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a resume from a JSON string
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Treat an explicit `null` the same as a missing key
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(s)) => s,
        Some(TextOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
