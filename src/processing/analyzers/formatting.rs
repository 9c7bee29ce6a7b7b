//! Formatting and structure analyzer: section presence, summary and projects

use super::{Category, CategoryResult, Findings};
use crate::processing::document::{non_blank, ResumeDocument};

pub fn analyze(document: &ResumeDocument) -> CategoryResult {
    let mut findings = Findings::new(Category::Formatting);

    let has_personal_info = document
        .personal_info
        .as_ref()
        .is_some_and(|info| info.has_any_field());
    let sections = [
        ("Personal information", has_personal_info, 2.0),
        ("Work experience", has_entries(&document.experience), 2.0),
        ("Education", has_entries(&document.education), 1.0),
        ("Skills", has_entries(&document.skills), 1.0),
    ];

    for (name, present, points) in sections {
        if present {
            findings.award(points);
            findings.found(format!("{} section", name));
        } else {
            findings.missing_with(
                format!("{} section", name),
                format!("Add {} section", name.to_lowercase()),
            );
        }
    }

    let has_summary = document
        .personal_info
        .as_ref()
        .and_then(|info| non_blank(&info.summary))
        .is_some();
    if has_summary {
        findings.award(2.0);
        findings.found("Professional summary");
    } else {
        findings.missing_with(
            "Professional summary",
            "Add a professional summary highlighting your key qualifications",
        );
    }

    if has_entries(&document.projects) {
        findings.award(2.0);
        findings.found("Projects section");
    } else {
        findings.recommend("Consider adding a projects section to showcase your work");
    }

    findings.finish(feedback, 4)
}

fn has_entries<T>(list: &Option<Vec<T>>) -> bool {
    list.as_ref().is_some_and(|items| !items.is_empty())
}

fn feedback(score: u32) -> &'static str {
    match score {
        8.. => "Resume is well-structured with all key sections.",
        6.. => "Resume structure is good, a few sections could be added.",
        _ => "Resume structure needs improvement, several key sections are missing.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::{PersonalInfo, Project};

    #[test]
    fn test_empty_document() {
        let result = analyze(&ResumeDocument::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.details.missing.len(), 5);
        assert_eq!(result.details.recommendations.len(), 6);
        assert_eq!(result.suggestions[0], "Add personal information section");
    }

    #[test]
    fn test_personal_info_only() {
        let document = ResumeDocument {
            personal_info: Some(PersonalInfo {
                full_name: Some("Jane Doe".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(analyze(&document).score, 2);
    }

    #[test]
    fn test_blank_personal_info_not_counted() {
        let document = ResumeDocument {
            personal_info: Some(PersonalInfo::default()),
            ..Default::default()
        };
        assert_eq!(analyze(&document).score, 0);
    }

    #[test]
    fn test_full_structure() {
        let document = ResumeDocument {
            personal_info: Some(PersonalInfo {
                summary: Some("Backend engineer".to_string()),
                ..Default::default()
            }),
            experience: Some(vec![Default::default()]),
            education: Some(vec![Default::default()]),
            skills: Some(vec!["Rust".to_string()]),
            projects: Some(vec![Project::default()]),
        };
        let result = analyze(&document);
        assert_eq!(result.score, 10);
        assert!(result.details.missing.is_empty());
        assert!(result.feedback.contains("well-structured"));
    }

    #[test]
    fn test_missing_projects_is_recommendation_only() {
        let result = analyze(&ResumeDocument::default());
        assert!(!result.details.missing.contains(&"Projects section".to_string()));
        assert!(result
            .details
            .recommendations
            .iter()
            .any(|r| r.contains("projects section")));
    }
}
