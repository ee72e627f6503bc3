//! PDF serialization of typeset pages with printpdf

use std::fmt::Display;
use std::io::BufWriter;

use owned_ttf_parser::Face;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, Pt};
use tracing::{debug, warn};

use crate::fonts::{ResolvedFont, StandardFont};
use crate::renderer::PageConfig;
use crate::RenderError;

use super::typeset::Page;

const LAYER_NAME: &str = "Layer 1";

/// The font faces text is drawn with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// TrueType data embedded for both weights
    Embedded { name: String, data: Vec<u8> },
    /// Built-in standard font, with a real bold face
    Standard(StandardFont),
}

impl FontSource {
    /// Load the resolved TrueType file, or use the standard fallback
    ///
    /// Unreadable files and data that does not parse as a font face are
    /// absorbed into the fallback, so text is always measured and drawn with
    /// the same face.
    pub fn load(font: &ResolvedFont) -> Self {
        let Some(path) = font.truetype_file() else {
            return FontSource::Standard(font.standard);
        };
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                warn!(path = %path.display(), %err, "cannot read font file, using {}", font.standard);
                return FontSource::Standard(font.standard);
            }
        };
        if let Err(err) = Face::parse(&data, 0) {
            warn!(path = %path.display(), %err, "not a usable TrueType font, using {}", font.standard);
            return FontSource::Standard(font.standard);
        }
        FontSource::Embedded {
            name: font.requested.clone(),
            data,
        }
    }
}

struct Faces {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn builtin_faces(doc: &PdfDocumentReference, font: StandardFont) -> Result<Faces, RenderError> {
    let (regular, bold) = match font {
        StandardFont::Helvetica => (BuiltinFont::Helvetica, BuiltinFont::HelveticaBold),
        StandardFont::TimesRoman => (BuiltinFont::TimesRoman, BuiltinFont::TimesBold),
    };
    Ok(Faces {
        regular: doc.add_builtin_font(regular).map_err(pdf_error)?,
        bold: doc.add_builtin_font(bold).map_err(pdf_error)?,
    })
}

/// Register the font with the document, falling back to `fallback` on bad data
fn register_faces(
    doc: &PdfDocumentReference,
    source: &FontSource,
    fallback: StandardFont,
) -> Result<Faces, RenderError> {
    match source {
        FontSource::Embedded { name, data } => match doc.add_external_font(data.as_slice()) {
            Ok(face) => {
                debug!(font = %name, "embedded TrueType font");
                Ok(Faces {
                    regular: face.clone(),
                    bold: face,
                })
            }
            Err(err) => {
                warn!(font = %name, %err, "font registration failed, using {}", fallback);
                builtin_faces(doc, fallback)
            }
        },
        FontSource::Standard(font) => builtin_faces(doc, *font),
    }
}

/// Serialize pages to PDF bytes
pub fn write_pdf(
    pages: &[Page],
    source: &FontSource,
    fallback: StandardFont,
    page: &PageConfig,
    title: &str,
) -> Result<Vec<u8>, RenderError> {
    let width = Mm::from(Pt(page.width));
    let height = Mm::from(Pt(page.height));
    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);
    let faces = register_faces(&doc, source, fallback)?;

    for (index, content) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(width, height, LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };

        for line in &content.lines {
            let y = Mm::from(Pt(page.height - line.baseline));
            for run in &line.runs {
                let face = if run.bold { &faces.bold } else { &faces.regular };
                layer.use_text(run.text.as_str(), line.font_size, Mm::from(Pt(run.x)), y, face);
            }
        }
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer).map_err(pdf_error)?;
    writer.into_inner().map_err(pdf_error)
}

fn pdf_error(err: impl Display) -> RenderError {
    RenderError::Pdf(err.to_string())
}
