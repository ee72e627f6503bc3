//! Document renderers for generating output from a resume outline
//!
//! Each backend takes an [`Outline`](crate::outline::Outline) and produces
//! the complete file contents in memory.

pub mod config;
#[cfg(feature = "docx")]
pub mod docx;
#[cfg(feature = "pdf")]
pub mod pdf;

pub use config::PageConfig;
#[cfg(feature = "docx")]
pub use docx::render_docx;
#[cfg(feature = "pdf")]
pub use pdf::render_pdf;
