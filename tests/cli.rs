//! Command-line tests against the built binary

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

const RESUME: &str =
    r#"{"name": "Jane Doe", "contact": {"email": "j@x.com"}, "skills": {"technical": ["Go"]}}"#;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("resume-render");
    cmd.current_dir(dir.path()).env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_default_outputs_use_input_stem() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("jane.json"), RESUME).unwrap();

    let out = cmd(&dir)
        .args(["--input", "jane.json", "--font-dir", "fonts"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&out);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["Wrote: jane.docx", "Wrote: jane.pdf"]
    );
    assert!(dir.path().join("jane.docx").exists());
    assert!(dir.path().join("jane.pdf").exists());
}

#[test]
fn test_explicit_output_paths() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("resume.json");
    fs::write(&input, RESUME).unwrap();
    let docx = dir.path().join("cv.docx");
    let pdf = dir.path().join("cv.pdf");

    cmd(&dir)
        .arg("--input")
        .arg(&input)
        .arg("--docx")
        .arg(&docx)
        .arg("--pdf")
        .arg(&pdf)
        .args(["--font-name", "Georgia", "--font-dir", "fonts"])
        .assert()
        .success();

    assert!(fs::read(&pdf).unwrap().starts_with(b"%PDF-"));
    assert!(fs::read(&docx).unwrap().starts_with(b"PK"));
}

#[test]
fn test_malformed_json_fails_without_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.json"), r#"{"name": "#).unwrap();

    let out = cmd(&dir)
        .args(["--input", "bad.json"])
        .assert()
        .code(1)
        .get_output()
        .stderr
        .clone();

    assert!(String::from_utf8_lossy(&out).contains("Error:"));
    assert!(!dir.path().join("bad.docx").exists());
    assert!(!dir.path().join("bad.pdf").exists());
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let out = cmd(&dir)
        .args(["--input", "missing.json"])
        .assert()
        .code(1)
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8_lossy(&out).contains("missing.json"));
}

#[test]
fn test_input_is_required() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).assert().failure();
}

#[test]
fn test_print_style() {
    let dir = TempDir::new().unwrap();
    let out = cmd(&dir)
        .arg("--print-style")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("[sizes]"));
    assert!(stdout.contains("margin_in"));
}

#[test]
fn test_bad_stylesheet_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("r.json"), RESUME).unwrap();
    fs::write(dir.path().join("style.toml"), "[sizes\nname = ").unwrap();

    cmd(&dir)
        .args(["--input", "r.json", "--style", "style.toml"])
        .assert()
        .code(1);
    assert!(!dir.path().join("r.pdf").exists());
}

#[test]
fn test_font_file_is_embedded() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("jane.json"), RESUME).unwrap();

    cmd(&dir)
        .args(["--input", "jane.json", "--font-name", "DejaVu Sans Mono"])
        .arg("--font-file")
        .arg(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSansMono.ttf"))
        .assert()
        .success();

    let pdf = fs::read(dir.path().join("jane.pdf")).unwrap();
    assert!(pdf.windows(b"FontFile2".len()).any(|w| w == b"FontFile2"));
}
