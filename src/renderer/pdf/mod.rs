//! PDF generation from a resume outline
//!
//! Rendering runs in three stages: the outline becomes a [`Story`] of
//! markup paragraphs and spacers, the story is typeset into positioned lines
//! on letter-size pages, and the pages are serialized with printpdf.

pub mod markup;
pub mod measure;
pub mod story;
pub mod typeset;
pub mod writer;

pub use measure::{TextMeasure, TrueTypeWidths};
pub use story::{Flowable, Paragraph, ParagraphStyle, Story};
pub use typeset::{typeset, Page, PlacedLine, PlacedRun};
pub use writer::{write_pdf, FontSource};

use crate::fonts::ResolvedFont;
use crate::outline::{Block, Outline};
use crate::stylesheet::Stylesheet;
use crate::RenderError;

use super::PageConfig;

/// Document title used when the resume has no name
const UNTITLED: &str = "Resume";

/// Lay out an outline without serializing it
///
/// Text is measured with the face the PDF would be drawn with.
pub fn layout_pages(outline: &Outline, font: &ResolvedFont, style: &Stylesheet) -> Vec<Page> {
    let source = FontSource::load(font);
    layout_with(outline, &TextMeasure::for_source(&source, font.standard), style)
}

fn layout_with(outline: &Outline, measure: &TextMeasure, style: &Stylesheet) -> Vec<Page> {
    let story = Story::from_outline(outline, style);
    typeset(&story, &PageConfig::from_stylesheet(style), style, measure)
}

/// Render an outline to PDF bytes
pub fn render_pdf(
    outline: &Outline,
    font: &ResolvedFont,
    style: &Stylesheet,
) -> Result<Vec<u8>, RenderError> {
    let source = FontSource::load(font);
    let measure = TextMeasure::for_source(&source, font.standard);
    let pages = layout_with(outline, &measure, style);
    write_pdf(
        &pages,
        &source,
        font.standard,
        &PageConfig::from_stylesheet(style),
        document_title(outline),
    )
}

fn document_title(outline: &Outline) -> &str {
    outline
        .blocks
        .iter()
        .find_map(|block| match block {
            Block::Name(name) => Some(name.as_str()),
            _ => None,
        })
        .unwrap_or(UNTITLED)
}
