//! Resume Render CLI
//!
//! Usage:
//!   resume-render --input <FILE> [OPTIONS]
//!
//! Options:
//!   --font-name <NAME>   Preferred font family (default: Calibri)
//!   --font-file <FILE>   TrueType file to embed in the PDF
//!   --font-dir <DIR>     Directory searched for installed fonts
//!   --docx <FILE>        DOCX output path
//!   --pdf <FILE>         PDF output path
//!   --style <FILE>       Stylesheet overriding sizes and margins (TOML format)
//!   --print-style        Print the default stylesheet
//!   -h, --help           Print help

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use resume_render::stylesheet::DEFAULT_STYLE;
use resume_render::{
    generate, Capabilities, FontConfig, OutputPaths, RenderConfig, RenderError, Resume,
    Stylesheet, DEFAULT_FONT_NAME,
};

#[derive(Parser)]
#[command(name = "resume-render", version)]
#[command(about = "Generate resume DOCX and PDF from JSON")]
struct Cli {
    /// Path to resume JSON input
    #[arg(long, required_unless_present = "print_style")]
    input: Option<PathBuf>,

    /// Preferred font name
    #[arg(long, default_value = DEFAULT_FONT_NAME)]
    font_name: String,

    /// Optional .ttf font file path
    #[arg(long)]
    font_file: Option<PathBuf>,

    /// Directory searched for font files (default: %WINDIR%\Fonts)
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Output DOCX filename
    #[arg(long)]
    docx: Option<PathBuf>,

    /// Output PDF filename
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Stylesheet file for sizes, spacing and margins (TOML format)
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Print the default stylesheet and exit
    #[arg(long)]
    print_style: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_style {
        println!("{}", DEFAULT_STYLE.trim());
        return;
    }

    // Fail before reading anything if a backend is compiled out
    if let Err(e) = Capabilities::detect().require_all() {
        println!("{}", e);
        std::process::exit(1);
    }

    let Some(input) = cli.input.clone() else {
        eprintln!("Error: --input is required");
        std::process::exit(2);
    };

    match run(cli, input) {
        Ok(paths) => {
            println!("Wrote: {}", paths.docx.display());
            println!("Wrote: {}", paths.pdf.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli, input: PathBuf) -> Result<OutputPaths, RenderError> {
    let stylesheet = match &cli.style {
        Some(path) => Stylesheet::from_file(path)?,
        None => Stylesheet::default(),
    };

    let fonts = match cli.font_dir {
        Some(dir) => FontConfig::new().with_font_dir(dir),
        None => FontConfig::from_env(),
    };

    let config = RenderConfig::new()
        .with_font_name(cli.font_name)
        .with_font_file(cli.font_file)
        .with_font_config(fonts)
        .with_stylesheet(stylesheet);

    let resume = Resume::from_file(&input)?;
    let paths = OutputPaths::for_input(&input)
        .with_docx(cli.docx)
        .with_pdf(cli.pdf);

    generate(&resume, &config, &paths)?;
    Ok(paths)
}
