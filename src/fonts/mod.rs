//! Font resolution for both renderers
//!
//! The DOCX renderer only needs a family name. The PDF renderer can embed a
//! TrueType file when one is found, and otherwise falls back to one of the
//! PDF standard fonts.

pub mod config;
pub mod metrics;
pub mod resolver;

pub use config::FontConfig;
pub use metrics::FontMetrics;
pub use resolver::{
    normalize_font_name, standard_font, FontFormat, FontRequest, FontResolver, ResolvedFont,
    StandardFont,
};
