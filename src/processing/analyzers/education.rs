//! Education analyzer

use super::{Category, CategoryResult, Findings};
use crate::processing::document::{non_blank, Education};

const MAX_ENTRY_POINTS: f64 = 5.0;
const GPA_HONORS_THRESHOLD: f64 = 3.5;

pub fn analyze(education: Option<&[Education]>) -> CategoryResult {
    let mut findings = Findings::new(Category::Education);

    let education = match education {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            findings.missing_with(
                "Education",
                "Add your education background, including degrees and certifications",
            );
            return findings.finish(feedback, 4);
        }
    };

    let valid: Vec<&Education> = education.iter().filter(|e| e.is_valid()).collect();

    let volume = match valid.len() {
        0 => 0.0,
        1 => 3.0,
        _ => 5.0,
    };
    findings.award(volume);
    if !valid.is_empty() {
        findings.found(format!("{} education entries", valid.len()));
    }

    for (index, entry) in valid.iter().enumerate() {
        let points = score_entry(entry, index + 1, &mut findings);
        findings.award(points.min(MAX_ENTRY_POINTS));
    }

    if valid.is_empty() {
        findings.recommend("Add at least one degree or certification with the school name");
    }
    if !valid.iter().any(|e| non_blank(&e.gpa).is_some()) {
        findings.recommend("Consider adding your GPA if it is 3.5 or higher");
    }

    findings.finish(feedback, 4)
}

fn score_entry(entry: &Education, position: usize, findings: &mut Findings) -> f64 {
    let mut points = 0.0;

    if non_blank(&entry.degree).is_some() {
        points += 2.0;
    } else {
        findings.missing_with(
            format!("Degree for education {}", position),
            format!("Add the degree or certification name for education {}", position),
        );
    }

    if non_blank(&entry.school).is_some() {
        points += 2.0;
    } else {
        findings.missing_with(
            format!("School for education {}", position),
            format!("Add the school or institution for education {}", position),
        );
    }

    if non_blank(&entry.graduation_date).is_some() {
        points += 1.0;
    } else {
        findings.missing_with(
            format!("Graduation date for education {}", position),
            format!("Add the graduation date (or expected date) for education {}", position),
        );
    }

    if let Some(gpa) = non_blank(&entry.gpa).and_then(parse_leading_float) {
        if gpa >= GPA_HONORS_THRESHOLD {
            points += 1.0;
            findings.found(format!("Strong GPA ({}) for education {}", gpa, position));
        }
    }

    points
}

/// Parses the numeric prefix of `text`, so `"3.9/4.0"` yields `3.9`.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in text.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            '+' | '-' if i == 0 => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok()
}

fn feedback(score: u32) -> &'static str {
    match score {
        12.. => "Education section is complete and well presented.",
        8.. => "Education section is good, with room for more detail.",
        _ => "Education section needs enhancement.",
    }
}
