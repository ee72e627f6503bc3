//! Text measurement for line breaking
//!
//! Lines are measured with the same face the writer draws them with: the
//! standard-font width tables for builtin fonts, and the `hmtx` advances of
//! the embedded TrueType file otherwise.

use std::fmt;

use owned_ttf_parser::{AsFaceRef, FaceParsingError, GlyphId, OwnedFace};
use tracing::warn;

use crate::fonts::{FontMetrics, StandardFont};

use super::writer::FontSource;

/// Advance widths read from a TrueType file
pub struct TrueTypeWidths {
    face: OwnedFace,
    units_per_em: f32,
}

impl TrueTypeWidths {
    pub fn parse(data: Vec<u8>) -> Result<Self, FaceParsingError> {
        let face = OwnedFace::from_vec(data, 0)?;
        let units_per_em = f32::from(face.as_face_ref().units_per_em().max(1));
        Ok(Self { face, units_per_em })
    }

    /// Advance of one character in em units
    ///
    /// Characters the font has no glyph for are drawn as `.notdef`.
    pub fn char_advance(&self, c: char) -> f32 {
        let face = self.face.as_face_ref();
        let glyph = face.glyph_index(c).unwrap_or(GlyphId(0));
        f32::from(face.glyph_hor_advance(glyph).unwrap_or(0)) / self.units_per_em
    }

    /// Width of `text` in points at `font_size`
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().map(|c| self.char_advance(c)).sum::<f32>() * font_size
    }
}

impl fmt::Debug for TrueTypeWidths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeWidths")
            .field("units_per_em", &self.units_per_em)
            .finish_non_exhaustive()
    }
}

/// Width source for the typesetter
#[derive(Debug)]
pub enum TextMeasure {
    /// Builtin font with real bold metrics
    Standard(StandardFont),
    /// Embedded face, used for both weights
    TrueType(TrueTypeWidths),
}

impl TextMeasure {
    /// Measure with the face `source` will be drawn with
    pub fn for_source(source: &FontSource, fallback: StandardFont) -> Self {
        match source {
            FontSource::Standard(font) => TextMeasure::Standard(*font),
            FontSource::Embedded { name, data } => match TrueTypeWidths::parse(data.clone()) {
                Ok(widths) => TextMeasure::TrueType(widths),
                Err(err) => {
                    warn!(font = %name, %err, "cannot read font metrics, using {}", fallback);
                    TextMeasure::Standard(fallback)
                }
            },
        }
    }

    /// Width of `text` in points
    pub fn text_width(&self, text: &str, font_size: f32, bold: bool) -> f32 {
        match self {
            TextMeasure::Standard(font) => {
                FontMetrics::for_font(*font, bold).text_width(text, font_size)
            }
            TextMeasure::TrueType(widths) => widths.text_width(text, font_size),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const MONO_FONT: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSansMono.ttf");

    pub(crate) fn mono_widths() -> TrueTypeWidths {
        TrueTypeWidths::parse(std::fs::read(MONO_FONT).unwrap()).unwrap()
    }

    #[test]
    fn test_monospace_advances_are_uniform() {
        let widths = mono_widths();
        let m = widths.char_advance('m');
        assert!(m > 0.5 && m < 0.7, "{}", m);
        assert_eq!(widths.char_advance('i'), m);
        assert!((widths.text_width("abcd", 10.0) - 4.0 * m * 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_truetype_wider_than_helvetica() {
        let text = "Designed and implemented a distributed ingestion pipeline";
        let mono = TextMeasure::TrueType(mono_widths());
        let helvetica = TextMeasure::Standard(StandardFont::Helvetica);
        assert!(mono.text_width(text, 11.0, false) > helvetica.text_width(text, 11.0, false));
    }

    #[test]
    fn test_embedded_face_ignores_weight() {
        let mono = TextMeasure::TrueType(mono_widths());
        assert_eq!(
            mono.text_width("Engineer", 11.0, true),
            mono.text_width("Engineer", 11.0, false)
        );
    }

    #[test]
    fn test_standard_source_uses_tables() {
        let measure = TextMeasure::for_source(
            &FontSource::Standard(StandardFont::TimesRoman),
            StandardFont::Helvetica,
        );
        assert!(matches!(measure, TextMeasure::Standard(StandardFont::TimesRoman)));
    }

    #[test]
    fn test_unparseable_data_measures_with_fallback() {
        let source = FontSource::Embedded {
            name: "Broken".to_string(),
            data: b"definitely not a font".to_vec(),
        };
        let measure = TextMeasure::for_source(&source, StandardFont::TimesRoman);
        assert!(matches!(measure, TextMeasure::Standard(StandardFont::TimesRoman)));
    }

    #[test]
    fn test_embedded_source_uses_font_advances() {
        let source = FontSource::Embedded {
            name: "DejaVu Sans Mono".to_string(),
            data: std::fs::read(MONO_FONT).unwrap(),
        };
        let measure = TextMeasure::for_source(&source, StandardFont::Helvetica);
        assert!(matches!(measure, TextMeasure::TrueType(_)));
    }
}
