//! Paragraph markup for the PDF story
//!
//! Paragraph text is a tiny XML-like markup: entity-escaped text plus `<b>`
//! and `</b>` for bold. User text always goes through [`escape_markup`]
//! before it is placed in a paragraph, so the only tags ever present are the
//! ones the story builder writes itself.

/// A run of text with uniform weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

/// Escape special markup characters
pub fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap already-escaped markup in bold tags
pub fn bold(markup: &str) -> String {
    format!("<b>{}</b>", markup)
}

/// Parse paragraph markup into spans, decoding entities
///
/// Unknown tags are dropped and unknown entities are kept verbatim.
pub fn parse_markup(markup: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = vec![];
    let mut current = String::new();
    let mut bold = false;
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        match c {
            '<' => {
                let Some(end) = rest.find('>') else {
                    current.push(c);
                    rest = &rest[1..];
                    continue;
                };
                let weight = match &rest[1..end] {
                    "b" => Some(true),
                    "/b" => Some(false),
                    _ => None,
                };
                if let Some(weight) = weight {
                    if weight != bold {
                        flush(&mut spans, &mut current, bold);
                        bold = weight;
                    }
                }
                rest = &rest[end + 1..];
            }
            '&' => {
                let (decoded, consumed) = decode_entity(rest);
                current.push(decoded);
                rest = &rest[consumed..];
            }
            _ => {
                current.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    flush(&mut spans, &mut current, bold);
    spans
}

/// Plain text of a markup string
pub fn plain_text(markup: &str) -> String {
    parse_markup(markup).into_iter().map(|s| s.text).collect()
}

fn flush(spans: &mut Vec<Span>, current: &mut String, bold: bool) {
    if current.is_empty() {
        return;
    }
    let text = std::mem::take(current);
    match spans.last_mut() {
        Some(last) if last.bold == bold => last.text.push_str(&text),
        _ => spans.push(Span { text, bold }),
    }
}

/// Decode the entity at the start of `s`; returns the char and bytes consumed
fn decode_entity(s: &str) -> (char, usize) {
    const ENTITIES: [(&str, char); 6] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&apos;", '\''),
        ("&#39;", '\''),
    ];
    ENTITIES
        .iter()
        .find(|(entity, _)| s.starts_with(entity))
        .map(|(entity, c)| (*c, entity.len()))
        .unwrap_or(('&', 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span(text: &str, bold: bool) -> Span {
        Span {
            text: text.to_string(),
            bold,
        }
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("A & B < C"), "A &amp; B &lt; C");
        assert_eq!(escape_markup("<b>"), "&lt;b&gt;");
        assert_eq!(escape_markup(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_markup("hello world"), vec![span("hello world", false)]);
        assert!(parse_markup("").is_empty());
    }

    #[test]
    fn test_parse_bold_and_entities() {
        assert_eq!(
            parse_markup("<b>R&amp;D</b> at &lt;Acme&gt;"),
            vec![span("R&D", true), span(" at <Acme>", false)]
        );
    }

    #[test]
    fn test_escaped_user_tags_stay_text() {
        let markup = bold(&escape_markup("<b>not bold</b>"));
        assert_eq!(parse_markup(&markup), vec![span("<b>not bold</b>", true)]);
    }

    #[test]
    fn test_roundtrip_special_characters() {
        let text = "Tom & Jerry's \"<script>\"";
        assert_eq!(plain_text(&escape_markup(text)), text);
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(plain_text("a & b"), "a & b");
        assert_eq!(plain_text("a < b"), "a < b");
        assert_eq!(plain_text("<i>x</i>"), "x");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(plain_text("Zürich &amp; Köln"), "Zürich & Köln");
    }
}
