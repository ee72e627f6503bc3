//! DOCX generation from a resume outline

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, RunFonts, SpecialIndentType, Start,
};

use crate::outline::{Block, Outline};
use crate::stylesheet::Stylesheet;
use crate::RenderError;

/// Numbering definition used for bulleted lists
const BULLET_NUMBERING_ID: usize = 1;

/// Build a DOCX document paragraph by paragraph
pub struct DocxBuilder<'a> {
    font_name: &'a str,
    style: &'a Stylesheet,
    paragraphs: Vec<Paragraph>,
}

impl<'a> DocxBuilder<'a> {
    /// Create a builder using `font_name` for every run
    ///
    /// The name is passed through as-is; word processors substitute their
    /// own default when the family is not installed.
    pub fn new(font_name: &'a str, style: &'a Stylesheet) -> Self {
        Self {
            font_name,
            style,
            paragraphs: vec![],
        }
    }

    fn fonts(&self) -> RunFonts {
        RunFonts::new()
            .ascii(self.font_name)
            .hi_ansi(self.font_name)
            .east_asia(self.font_name)
            .cs(self.font_name)
    }

    fn run(&self, text: &str, size_pt: f32) -> Run {
        Run::new()
            .add_text(text)
            .fonts(self.fonts())
            .size(half_points(size_pt))
    }

    /// Centered, bold name line
    pub fn add_name(&mut self, text: &str) {
        let run = self.run(text, self.style.sizes.name).bold();
        self.paragraphs
            .push(Paragraph::new().align(AlignmentType::Center).add_run(run));
    }

    /// Centered contact line
    pub fn add_contact(&mut self, text: &str) {
        let run = self.run(text, self.style.sizes.contact);
        self.paragraphs
            .push(Paragraph::new().align(AlignmentType::Center).add_run(run));
    }

    /// Uppercase bold section heading
    pub fn add_heading(&mut self, text: &str) {
        let run = self.run(&text.to_uppercase(), self.style.sizes.heading).bold();
        self.paragraphs.push(Paragraph::new().add_run(run));
    }

    /// Bold position header
    pub fn add_entry_header(&mut self, text: &str) {
        let run = self.run(text, self.style.sizes.body).bold();
        self.paragraphs.push(Paragraph::new().add_run(run));
    }

    /// Plain body paragraph
    pub fn add_line(&mut self, text: &str) {
        let run = self.run(text, self.style.sizes.body);
        self.paragraphs.push(Paragraph::new().add_run(run));
    }

    /// Item of the bulleted list
    pub fn add_bullet(&mut self, text: &str) {
        let run = self.run(text, self.style.sizes.body);
        self.paragraphs.push(
            Paragraph::new()
                .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0))
                .add_run(run),
        );
    }

    /// Assemble the document with default fonts and the bullet numbering
    pub fn finish(self) -> Docx {
        let bullet_level = Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("\u{2022}"),
            LevelJc::new("left"),
        )
        .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None);

        let docx = Docx::new()
            .default_fonts(self.fonts())
            .default_size(half_points(self.style.sizes.body))
            .add_abstract_numbering(
                AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(bullet_level),
            )
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

        self.paragraphs
            .into_iter()
            .fold(docx, |docx, paragraph| docx.add_paragraph(paragraph))
    }
}

/// Build the DOCX document for an outline
pub fn build_docx(outline: &Outline, font_name: &str, style: &Stylesheet) -> Docx {
    let mut builder = DocxBuilder::new(font_name, style);
    for block in &outline.blocks {
        match block {
            Block::Name(text) => builder.add_name(text),
            Block::Contact(text) => builder.add_contact(text),
            Block::Heading(section) => builder.add_heading(section.title()),
            Block::Line(text) => builder.add_line(text),
            Block::EntryHeader(text) => builder.add_entry_header(text),
            Block::Bullet(text) => builder.add_bullet(text),
            // Entries are separated by paragraph spacing alone
            Block::EntryBreak => {}
        }
    }
    builder.finish()
}

/// Render an outline to DOCX bytes
pub fn render_docx(
    outline: &Outline,
    font_name: &str,
    style: &Stylesheet,
) -> Result<Vec<u8>, RenderError> {
    let mut bytes = vec![];
    build_docx(outline, font_name, style)
        .build()
        .pack(Cursor::new(&mut bytes))
        .map_err(|e| RenderError::Docx(e.to_string()))?;
    Ok(bytes)
}

/// Word processors measure font sizes in half-points
fn half_points(size_pt: f32) -> usize {
    (size_pt * 2.0).round() as usize
}
