//! Integration tests for the resume render pipeline

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use resume_render::renderer::pdf::{layout_pages, Story};
use resume_render::{
    generate, Block, FontConfig, FontRequest, FontResolver, OutputPaths, Outline, PageConfig,
    RenderConfig, Resume, Section, StandardFont, Stylesheet,
};

const MINIMAL: &str =
    r#"{"name": "Jane Doe", "contact": {"email": "j@x.com"}, "skills": {"technical": ["Go"]}}"#;

const FULL: &str = r#"{
    "name": "Jane Doe",
    "contact": {
        "email": "jane@example.com",
        "phone": "555-0100",
        "linkedin": "linkedin.com/in/janedoe",
        "other": ["github.com/janedoe"]
    },
    "education": [
        {
            "school": "MIT",
            "location": "Cambridge, MA",
            "degree": "B.S.",
            "major": "Computer Science",
            "dates": "2016 - 2020",
            "gpa": "3.9",
            "coursework": ["Distributed Systems", "Compilers"]
        }
    ],
    "professional_experience": [
        {
            "title": "Software Engineer",
            "company": "Acme",
            "location": "Remote",
            "dates": "2020 - Present",
            "bullets": ["Cut build times by 40%", "Led R&D on <fast> paths"]
        }
    ],
    "leadership_experience": [
        {"title": "President", "company": "Robotics Club", "bullets": ["Grew membership"]}
    ],
    "skills": {"technical": ["Rust", "Go"], "languages": ["Spanish"], "other": ["Chess"]}
}"#;

fn outline(json: &str) -> Outline {
    Outline::build(&Resume::from_json(json).expect("Should parse"))
}

#[test]
fn test_minimal_resume_only_renders_present_sections() {
    let outline = outline(MINIMAL);
    assert_eq!(
        outline.blocks,
        vec![
            Block::Name("Jane Doe".to_string()),
            Block::Contact("j@x.com".to_string()),
            Block::Heading(Section::Skills),
            Block::Line("Technical Skills: Go".to_string()),
        ]
    );
}

#[test]
fn test_full_resume_outline() {
    insta::assert_snapshot!(outline(FULL).to_string().trim_end(), @r"
    name: Jane Doe
    contact: jane@example.com | 555-0100 | linkedin.com/in/janedoe | github.com/janedoe
    heading: EDUCATION
    line: MIT - Cambridge, MA
    line: B.S.; Major: Computer Science
    line: 2016 - 2020
    line: GPA: 3.9; Coursework: Distributed Systems, Compilers
    break
    heading: PROFESSIONAL EXPERIENCE
    entry: Software Engineer | Acme | Remote | 2020 - Present
    bullet: Cut build times by 40%
    bullet: Led R&D on <fast> paths
    break
    heading: LEADERSHIP EXPERIENCE
    entry: President | Robotics Club
    bullet: Grew membership
    break
    heading: SKILLS
    line: Technical Skills: Rust, Go
    line: Languages: Spanish
    line: Chess
    ");
}

#[test]
fn test_pdf_story_escapes_and_pages_show_text() {
    let outline = outline(FULL);
    let style = Stylesheet::default();
    let story = Story::from_outline(&outline, &style);
    assert!(story
        .paragraphs()
        .any(|p| p.markup == "Led R&amp;D on &lt;fast&gt; paths"));

    let font = FontResolver::new(FontConfig::new().with_font_dir("/nonexistent"))
        .resolve(&FontRequest::new("Calibri"));
    let pages = layout_pages(&outline, &font, &style);
    assert_eq!(pages.len(), 1);
    let text = pages[0].text();
    assert!(text.contains("Led R&D on <fast> paths"));
    assert!(!text.contains("&amp;"));
}

#[test]
fn test_generation_is_repeatable() {
    let first = outline(FULL);
    let second = outline(FULL);
    assert_eq!(first, second);

    let style = Stylesheet::default();
    assert_eq!(
        Story::from_outline(&first, &style),
        Story::from_outline(&second, &style)
    );

    let font = RenderConfig::new()
        .with_font_config(FontConfig::new().with_font_dir("/nonexistent"))
        .resolve_font();
    assert_eq!(
        layout_pages(&first, &font, &style),
        layout_pages(&second, &font, &style)
    );
}

#[test]
fn test_generate_writes_both_files() {
    let dir = TempDir::new().unwrap();
    let paths = OutputPaths {
        docx: dir.path().join("jane.docx"),
        pdf: dir.path().join("jane.pdf"),
    };
    let config = RenderConfig::new()
        .with_font_name("Georgia")
        .with_font_config(FontConfig::new().with_font_dir(dir.path().join("fonts")));

    generate(&Resume::from_json(FULL).unwrap(), &config, &paths).expect("Should generate");

    let docx = fs::read(&paths.docx).unwrap();
    let pdf = fs::read(&paths.pdf).unwrap();
    assert!(docx.starts_with(b"PK"));
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn test_generate_empty_resume() {
    let dir = TempDir::new().unwrap();
    let paths = OutputPaths {
        docx: dir.path().join("empty.docx"),
        pdf: dir.path().join("empty.pdf"),
    };
    generate(&Resume::default(), &RenderConfig::default(), &paths).expect("Should generate");
    assert!(paths.docx.exists());
    assert!(paths.pdf.exists());
}

#[test]
fn test_font_directory_lookup_feeds_pdf() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Calibri.otf"), b"otf").unwrap();
    fs::write(dir.path().join("Calibri.ttf"), b"ttf").unwrap();

    let config = RenderConfig::new().with_font_config(FontConfig::new().with_font_dir(dir.path()));
    let resolved = config.resolve_font();
    assert_eq!(resolved.file, Some(dir.path().join("Calibri.ttf")));
    assert_eq!(resolved.standard, StandardFont::Helvetica);

    // The .ttf is not a real font, so the PDF falls back to Helvetica
    let pdf = resume_render::render_pdf(&Resume::from_json(MINIMAL).unwrap(), &config)
        .expect("Should fall back");
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn test_installed_truetype_font_is_embedded_and_fits() {
    let dir = TempDir::new().unwrap();
    fs::copy(
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSansMono.ttf"),
        dir.path().join("DejaVuSansMono.ttf"),
    )
    .unwrap();
    let config = RenderConfig::new()
        .with_font_name("DejaVu Sans Mono")
        .with_font_config(FontConfig::new().with_font_dir(dir.path()));
    let resolved = config.resolve_font();
    assert_eq!(resolved.file, Some(dir.path().join("DejaVuSansMono.ttf")));

    let resume = Resume::from_json(FULL).unwrap();
    let pdf = resume_render::render_pdf(&resume, &config).unwrap();
    assert!(pdf.windows(b"FontFile2".len()).any(|w| w == b"FontFile2"));

    let data = fs::read(dir.path().join("DejaVuSansMono.ttf")).unwrap();
    let face = owned_ttf_parser::Face::parse(&data, 0).unwrap();
    let units = f32::from(face.units_per_em());
    let width = |text: &str, size: f32| -> f32 {
        text.chars()
            .map(|c| {
                let glyph = face.glyph_index(c).unwrap_or(owned_ttf_parser::GlyphId(0));
                f32::from(face.glyph_hor_advance(glyph).unwrap_or(0))
            })
            .sum::<f32>()
            / units
            * size
    };

    let page = PageConfig::from_stylesheet(&config.stylesheet);
    let right_margin = page.margin_left + page.content_width();
    let pages = layout_pages(&Outline::build(&resume), &resolved, &config.stylesheet);
    for line in pages.iter().flat_map(|p| &p.lines) {
        for run in &line.runs {
            let right = run.x + width(&run.text, line.font_size);
            assert!(right <= right_margin + 1e-3, "{:?} ends at {}", run.text, right);
        }
    }
}

#[test]
fn test_stylesheet_margins_change_layout() {
    let outline = outline(FULL);
    let font = FontResolver::default().resolve(&FontRequest::new(""));
    let wide = Stylesheet::from_str("[page]\nmargin_in = 1.5\n").unwrap();
    let default_pages = layout_pages(&outline, &font, &Stylesheet::default());
    let wide_pages = layout_pages(&outline, &font, &wide);
    let first_x = |pages: &[resume_render::renderer::pdf::Page]| pages[0].lines[2].runs[0].x;
    assert!(first_x(&wide_pages) > first_x(&default_pages));
}

#[test]
fn test_malformed_json_is_error() {
    assert!(Resume::from_json(r#"{"name": "Jane""#).is_err());
}
