//! PDF story: the flowables drawn top to bottom

use crate::outline::{Block, Outline};
use crate::stylesheet::Stylesheet;

use super::markup::{bold, escape_markup};

/// Paragraph styles used by the resume layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Title,
    Contact,
    Heading,
    Body,
    Bullet,
}

/// A paragraph whose text is markup (see [`super::markup`])
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub markup: String,
    pub style: ParagraphStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    Paragraph(Paragraph),
    /// Fixed vertical gap in points
    Spacer(f32),
}

/// Ordered flowables for one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Story {
    pub flowables: Vec<Flowable>,
}

impl Story {
    /// Convert an outline into flowables, escaping all resume text
    pub fn from_outline(outline: &Outline, style: &Stylesheet) -> Self {
        let flowables = outline
            .blocks
            .iter()
            .map(|block| match block {
                Block::Name(text) => paragraph(bold(&escape_markup(text)), ParagraphStyle::Title),
                Block::Contact(text) => paragraph(escape_markup(text), ParagraphStyle::Contact),
                Block::Heading(section) => paragraph(
                    bold(&escape_markup(&section.heading())),
                    ParagraphStyle::Heading,
                ),
                Block::Line(text) => paragraph(escape_markup(text), ParagraphStyle::Body),
                Block::EntryHeader(text) => {
                    paragraph(bold(&escape_markup(text)), ParagraphStyle::Body)
                }
                Block::Bullet(text) => paragraph(escape_markup(text), ParagraphStyle::Bullet),
                Block::EntryBreak => Flowable::Spacer(style.spacing.entry_gap),
            })
            .collect();
        Self { flowables }
    }

    /// Paragraphs in order, skipping spacers
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.flowables.iter().filter_map(|f| match f {
            Flowable::Paragraph(p) => Some(p),
            Flowable::Spacer(_) => None,
        })
    }
}

fn paragraph(markup: String, style: ParagraphStyle) -> Flowable {
    Flowable::Paragraph(Paragraph { markup, style })
}
