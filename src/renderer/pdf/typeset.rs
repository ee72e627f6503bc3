//! Line breaking and pagination of a story
//!
//! Coordinates are in points, measured from the top-left corner of the page.
//! Baselines are converted to PDF's bottom-up coordinates only when writing.

use crate::renderer::PageConfig;
use crate::stylesheet::Stylesheet;

use super::markup::{parse_markup, Span};
use super::measure::TextMeasure;
use super::story::{Flowable, Paragraph, ParagraphStyle, Story};

/// Glyph drawn in front of bulleted paragraphs
pub const BULLET_GLYPH: &str = "-";

/// Descent below the baseline as a fraction of the font size
const DESCENT: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// Resolved layout parameters for one paragraph style
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphFormat {
    pub font_size: f32,
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
    pub alignment: Alignment,
    pub bullet: Option<&'static str>,
}

impl ParagraphFormat {
    pub fn for_style(style: ParagraphStyle, sheet: &Stylesheet) -> Self {
        let sizes = &sheet.sizes;
        let spacing = &sheet.spacing;
        let base = |font_size: f32, space_after: f32| ParagraphFormat {
            font_size,
            leading: font_size * spacing.leading,
            space_before: 0.0,
            space_after,
            left_indent: 0.0,
            alignment: Alignment::Left,
            bullet: None,
        };
        match style {
            ParagraphStyle::Title => ParagraphFormat {
                alignment: Alignment::Center,
                ..base(sizes.name, spacing.name_after)
            },
            ParagraphStyle::Contact => ParagraphFormat {
                alignment: Alignment::Center,
                ..base(sizes.contact, spacing.contact_after)
            },
            ParagraphStyle::Heading => ParagraphFormat {
                space_before: spacing.heading_before,
                ..base(sizes.heading, spacing.heading_after)
            },
            ParagraphStyle::Body => base(sizes.body, spacing.body_after),
            ParagraphStyle::Bullet => ParagraphFormat {
                left_indent: spacing.bullet_indent,
                bullet: Some(BULLET_GLYPH),
                ..base(sizes.body, spacing.bullet_after)
            },
        }
    }
}

/// A positioned run of text
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRun {
    pub text: String,
    pub bold: bool,
    /// Left edge from the page's left side
    pub x: f32,
}

/// A positioned line of text
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub runs: Vec<PlacedRun>,
    /// Baseline from the page's top edge
    pub baseline: f32,
    pub font_size: f32,
}

impl PlacedLine {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

impl Page {
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(PlacedLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A word fragment with uniform weight
#[derive(Debug, Clone)]
struct Piece {
    text: String,
    bold: bool,
    /// Whether a space separates this piece from the previous one
    space_before: bool,
}

/// Lays out a story on pages
pub struct Typesetter<'a> {
    page: &'a PageConfig,
    sheet: &'a Stylesheet,
    measure: &'a TextMeasure,
    pages: Vec<Page>,
    /// Top of the next line, from the page's top edge
    cursor: f32,
}

impl<'a> Typesetter<'a> {
    /// `measure` supplies the widths of the face the text is drawn with
    pub fn new(page: &'a PageConfig, sheet: &'a Stylesheet, measure: &'a TextMeasure) -> Self {
        Self {
            page,
            sheet,
            measure,
            pages: vec![Page::default()],
            cursor: page.margin_top,
        }
    }

    /// Lay out all flowables; always returns at least one page
    pub fn typeset(mut self, story: &Story) -> Vec<Page> {
        for flowable in &story.flowables {
            match flowable {
                Flowable::Paragraph(paragraph) => self.add_paragraph(paragraph),
                Flowable::Spacer(height) => self.add_spacer(*height),
            }
        }
        self.pages
    }

    fn at_page_top(&self) -> bool {
        self.current_page().lines.is_empty()
    }

    fn current_page(&self) -> &Page {
        // pages is never empty
        &self.pages[self.pages.len() - 1]
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor = self.page.margin_top;
    }

    fn add_spacer(&mut self, height: f32) {
        // Spacers that do not fit are dropped rather than starting a page
        if self.cursor + height <= self.page.content_bottom() {
            self.cursor += height;
        }
    }

    fn add_paragraph(&mut self, paragraph: &Paragraph) {
        let format = ParagraphFormat::for_style(paragraph.style, self.sheet);
        if !self.at_page_top() {
            self.cursor += format.space_before;
        }

        let left = self.page.margin_left + format.left_indent;
        let width = self.page.content_width() - format.left_indent;
        let lines = self.break_lines(&parse_markup(&paragraph.markup), &format, width);

        for (index, pieces) in lines.into_iter().enumerate() {
            if self.cursor + format.leading > self.page.content_bottom() && !self.at_page_top() {
                self.new_page();
            }
            self.cursor += format.leading;
            let baseline = self.cursor - format.font_size * DESCENT;

            let line_width = self.measure_line(&pieces, format.font_size);
            let offset = match format.alignment {
                Alignment::Left => 0.0,
                Alignment::Center => ((width - line_width) / 2.0).max(0.0),
            };

            let mut runs = vec![];
            if let (0, Some(glyph)) = (index, format.bullet) {
                runs.push(PlacedRun {
                    text: glyph.to_string(),
                    bold: false,
                    x: self.page.margin_left,
                });
            }
            runs.extend(self.place_runs(pieces, left + offset, format.font_size));

            let page_index = self.pages.len() - 1;
            self.pages[page_index].lines.push(PlacedLine {
                runs,
                baseline,
                font_size: format.font_size,
            });
        }

        self.cursor += format.space_after;
    }

    fn piece_width(&self, piece: &Piece, font_size: f32, line_start: bool) -> f32 {
        let space = if piece.space_before && !line_start {
            self.measure.text_width(" ", font_size, piece.bold)
        } else {
            0.0
        };
        space + self.measure.text_width(&piece.text, font_size, piece.bold)
    }

    fn measure_line(&self, pieces: &[Piece], font_size: f32) -> f32 {
        pieces
            .iter()
            .enumerate()
            .map(|(i, piece)| self.piece_width(piece, font_size, i == 0))
            .sum()
    }

    /// Greedy line breaking at spaces; an over-long word gets a line of its own
    fn break_lines(&self, spans: &[Span], format: &ParagraphFormat, width: f32) -> Vec<Vec<Piece>> {
        let mut lines: Vec<Vec<Piece>> = vec![];
        let mut line: Vec<Piece> = vec![];
        let mut line_width = 0.0;

        for piece in split_pieces(spans) {
            let w = self.piece_width(&piece, format.font_size, line.is_empty());
            // Only break where there is a space
            if !line.is_empty() && piece.space_before && line_width + w > width {
                lines.push(std::mem::take(&mut line));
                line_width = self.piece_width(&piece, format.font_size, true);
            } else {
                line_width += w;
            }
            line.push(piece);
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }

    /// Merge pieces of equal weight into runs and assign x positions
    fn place_runs(&self, pieces: Vec<Piece>, start_x: f32, font_size: f32) -> Vec<PlacedRun> {
        let mut runs: Vec<PlacedRun> = vec![];
        let mut x = start_x;
        for (i, piece) in pieces.into_iter().enumerate() {
            let space = piece.space_before && i > 0;
            match runs.last_mut() {
                Some(run) if run.bold == piece.bold => {
                    if space {
                        run.text.push(' ');
                    }
                    run.text.push_str(&piece.text);
                }
                _ => {
                    let mut text = String::new();
                    if space {
                        // Keep the space with the run it precedes
                        text.push(' ');
                    }
                    text.push_str(&piece.text);
                    runs.push(PlacedRun {
                        text,
                        bold: piece.bold,
                        x,
                    });
                }
            }
            x += self.measure.text_width(
                &format!("{}{}", if space { " " } else { "" }, piece.text),
                font_size,
                piece.bold,
            );
        }
        runs
    }
}

/// Split spans into whitespace-separated pieces, keeping weight changes inside words
fn split_pieces(spans: &[Span]) -> Vec<Piece> {
    let mut pieces = vec![];
    let mut pending_space = false;
    for span in spans {
        let mut current = String::new();
        for c in span.text.chars() {
            if c.is_whitespace() {
                if !current.is_empty() {
                    pieces.push(Piece {
                        text: std::mem::take(&mut current),
                        bold: span.bold,
                        space_before: pending_space,
                    });
                }
                pending_space = true;
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            pieces.push(Piece {
                text: current,
                bold: span.bold,
                space_before: pending_space,
            });
            pending_space = false;
        }
    }
    pieces
}

/// Typeset a story with the given page geometry and stylesheet
pub fn typeset(
    story: &Story,
    page: &PageConfig,
    sheet: &Stylesheet,
    measure: &TextMeasure,
) -> Vec<Page> {
    Typesetter::new(page, sheet, measure).typeset(story)
}
