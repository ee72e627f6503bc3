//! Line formatters shared by both renderers
//!
//! Each function turns one piece of the resume into display strings. Blank
//! values (empty or whitespace-only) never contribute to a line.

use crate::model::{Contact, Education, Position, Skills};

/// Separator between contact fields and between entry header fields
pub const FIELD_SEPARATOR: &str = " | ";

/// Build the contact line: canonical fields in fixed order, then `other`
///
/// Returns an empty string when nothing is populated; callers skip the line.
pub fn contact_line(contact: &Contact) -> String {
    let canonical = [
        &contact.email,
        &contact.phone,
        &contact.website,
        &contact.linkedin,
        &contact.address,
    ];
    canonical
        .into_iter()
        .chain(contact.other.iter())
        .filter(|value| !is_blank(value))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

/// Format one education entry into at most four lines
pub fn education_lines(edu: &Education) -> Vec<String> {
    let mut lines = vec![];

    let school_line = join_present(&[&edu.school, &edu.location], " - ");
    if !school_line.is_empty() {
        lines.push(school_line);
    }

    let major = labeled("Major", &edu.major);
    let minor = labeled("Minor", &edu.minor);
    let degree_line = join_present(&[&edu.degree, &major, &minor], "; ");
    if !degree_line.is_empty() {
        lines.push(degree_line);
    }

    if !is_blank(&edu.dates) {
        lines.push(edu.dates.clone());
    }

    let gpa = labeled("GPA", &edu.gpa);
    let awards = labeled("Awards", &join_list(&edu.awards));
    let coursework = labeled("Coursework", &join_list(&edu.coursework));
    let extras = join_present(&[&gpa, &awards, &coursework], "; ");
    if !extras.is_empty() {
        lines.push(extras);
    }

    lines
}

/// Entry header for a position: title, company, location, dates
pub fn position_header(position: &Position) -> String {
    join_present(
        &[
            &position.title,
            &position.company,
            &position.location,
            &position.dates,
        ],
        FIELD_SEPARATOR,
    )
}

/// Skills lines: labeled technical and languages lines, unlabeled other line
pub fn skills_lines(skills: &Skills) -> Vec<String> {
    [
        labeled("Technical Skills", &join_list(&skills.technical)),
        labeled("Languages", &join_list(&skills.languages)),
        join_list(&skills.other),
    ]
    .into_iter()
    .filter(|line| !line.is_empty())
    .collect()
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn join_present(parts: &[&String], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !is_blank(part))
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_list(items: &[String]) -> String {
    join_present(&items.iter().collect::<Vec<_>>(), ", ")
}

/// `"Label: value"`, or empty when the value is blank
fn labeled(label: &str, value: &str) -> String {
    if is_blank(value) {
        String::new()
    } else {
        format!("{}: {}", label, value)
    }
}
