//! Renderer-neutral outline of a resume
//!
//! This module walks a [`Resume`] once and produces the ordered list of blocks
//! both renderers draw. Section ordering and omission rules live here only, so
//! the DOCX and PDF outputs cannot drift apart.

pub mod format;

use std::fmt;

use crate::model::{Position, Resume};

pub use format::{contact_line, education_lines, position_header, skills_lines};

/// The fixed resume sections, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Education,
    ProfessionalExperience,
    LeadershipExperience,
    Skills,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::ProfessionalExperience => "Professional Experience",
            Section::LeadershipExperience => "Leadership Experience",
            Section::Skills => "Skills",
        }
    }

    /// Heading text as rendered (uppercase)
    pub fn heading(&self) -> String {
        self.title().to_uppercase()
    }
}

/// One unit of rendered content
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Candidate name, centered title
    Name(String),
    /// Contact line under the name
    Contact(String),
    /// Section heading
    Heading(Section),
    /// Plain body line (education lines, skills lines)
    Line(String),
    /// Bold position header
    EntryHeader(String),
    /// Bulleted achievement under a position
    Bullet(String),
    /// End of an education or experience entry that produced output
    EntryBreak,
}

/// Ordered blocks for a whole resume
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub blocks: Vec<Block>,
}

impl Outline {
    /// Build the outline for a resume
    pub fn build(resume: &Resume) -> Self {
        let mut blocks = vec![];

        if !format::is_blank(&resume.name) {
            blocks.push(Block::Name(resume.name.clone()));
        }

        let contact = contact_line(&resume.contact);
        if !contact.is_empty() {
            blocks.push(Block::Contact(contact));
        }

        let education = resume
            .education
            .iter()
            .flat_map(|edu| entry(education_lines(edu).into_iter().map(Block::Line).collect()))
            .collect();
        push_section(&mut blocks, Section::Education, education);

        push_section(
            &mut blocks,
            Section::ProfessionalExperience,
            position_blocks(&resume.professional_experience),
        );
        push_section(
            &mut blocks,
            Section::LeadershipExperience,
            position_blocks(&resume.leadership_experience),
        );

        let skills = skills_lines(&resume.skills)
            .into_iter()
            .map(Block::Line)
            .collect();
        push_section(&mut blocks, Section::Skills, skills);

        Self { blocks }
    }

    /// Sections that made it into the outline, in order
    pub fn sections(&self) -> Vec<Section> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading(section) => Some(*section),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A section heading is only emitted when its body is non-empty
fn push_section(blocks: &mut Vec<Block>, section: Section, body: Vec<Block>) {
    if body.is_empty() {
        return;
    }
    blocks.push(Block::Heading(section));
    blocks.extend(body);
}

fn position_blocks(positions: &[Position]) -> Vec<Block> {
    positions
        .iter()
        .flat_map(|position| {
            let mut content = vec![];
            let header = position_header(position);
            if !header.is_empty() {
                content.push(Block::EntryHeader(header));
            }
            content.extend(
                position
                    .bullets
                    .iter()
                    .filter(|bullet| !format::is_blank(bullet))
                    .cloned()
                    .map(Block::Bullet),
            );
            entry(content)
        })
        .collect()
}

/// Close an entry with a break, unless it produced nothing
fn entry(mut content: Vec<Block>) -> Vec<Block> {
    if !content.is_empty() {
        content.push(Block::EntryBreak);
    }
    content
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            match block {
                Block::Name(text) => writeln!(f, "name: {}", text)?,
                Block::Contact(text) => writeln!(f, "contact: {}", text)?,
                Block::Heading(section) => writeln!(f, "heading: {}", section.heading())?,
                Block::Line(text) => writeln!(f, "line: {}", text)?,
                Block::EntryHeader(text) => writeln!(f, "entry: {}", text)?,
                Block::Bullet(text) => writeln!(f, "bullet: {}", text)?,
                Block::EntryBreak => writeln!(f, "break")?,
            }
        }
        Ok(())
    }
}
