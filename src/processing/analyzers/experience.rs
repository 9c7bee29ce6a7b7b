//! Work experience analyzer
//!
//! Scores volume of positions plus, per position, completeness, description
//! depth, quantified achievements and action-verb openings. Each position's
//! contribution is capped at [`MAX_ENTRY_POINTS`].

use super::{tier, Category, CategoryResult, Findings};
use crate::processing::document::{non_blank, Experience};
use crate::processing::keywords::ACTION_VERBS;
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_ENTRY_POINTS: f64 = 4.0;
const TARGET_WORD_COUNT: usize = 30;

const VOLUME_TIERS: [(usize, f64); 4] = [(4, 8.0), (3, 6.0), (2, 4.0), (1, 2.0)];

static METRICS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+%|\d+\+|\$\d+|increased|improved|reduced|achieved|grew|saved|generated")
        .expect("Invalid metrics regex")
});

static ACTION_VERB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?im)^\s*(?:[•\-*▪◦·]\s*)?(?:{})\b", ACTION_VERBS.join("|"));
    Regex::new(&pattern).expect("Invalid action verb regex")
});

pub fn analyze(experience: Option<&[Experience]>) -> CategoryResult {
    let mut findings = Findings::new(Category::Experience);

    let experience = match experience {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            findings.missing_with(
                "Work experience",
                "Add your work experience, including internships and relevant positions",
            );
            return findings.finish(feedback, 5);
        }
    };

    let valid: Vec<&Experience> = experience.iter().filter(|e| e.is_valid()).collect();

    findings.award(tier(valid.len(), &VOLUME_TIERS));
    if valid.is_empty() {
        findings.missing("Complete work experience entries");
        findings.recommend("Fill in the job title and company for each position");
    } else {
        findings.found(format!("{} positions listed", valid.len()));
    }

    for (index, entry) in valid.iter().enumerate() {
        let entry_points = score_entry(entry, index + 1, &mut findings);
        findings.award(entry_points.min(MAX_ENTRY_POINTS));
    }

    findings.finish(feedback, 5)
}

/// Scores a single position, returning its uncapped points.
fn score_entry(entry: &Experience, position: usize, findings: &mut Findings) -> f64 {
    let mut points = 0.0;

    if non_blank(&entry.job_title).is_some() && non_blank(&entry.company).is_some() {
        points += 1.0;
    } else {
        findings.missing_with(
            format!("Complete info for position {}", position),
            format!("Add both job title and company for position {}", position),
        );
    }

    if non_blank(&entry.start_date).is_some() {
        points += 0.5;
    } else {
        findings.missing_with(
            format!("Start date for position {}", position),
            format!("Add employment dates for position {}", position),
        );
    }

    let description = match non_blank(&entry.description) {
        Some(description) => description,
        None => {
            findings.missing_with(
                format!("Description for position {}", position),
                format!(
                    "Add a description of your responsibilities and achievements for position {}",
                    position
                ),
            );
            ""
        }
    };

    let length = description.chars().count();
    let words = description.split_whitespace().count();

    if length >= 200 && words >= TARGET_WORD_COUNT {
        points += 2.5;
        findings.found(format!("Detailed description for position {}", position));
    } else if length >= 100 && words >= 15 {
        points += 1.5;
        findings.found(format!("Good description for position {}", position));
    } else if length >= 50 {
        points += 0.5;
        findings.found(format!("Basic description for position {}", position));
    } else {
        findings.missing_with(
            format!("Detailed description for position {}", position),
            format!(
                "Expand the description for position {} (currently {} words, aim for {}+)",
                position, words, TARGET_WORD_COUNT
            ),
        );
    }

    if METRICS_REGEX.is_match(description) {
        points += 1.0;
        findings.found(format!("Quantifiable achievements in position {}", position));
    } else {
        findings.missing_with(
            format!("Quantifiable achievements in position {}", position),
            format!(
                "Add measurable results to position {} (e.g., \"Increased sales by 25%\")",
                position
            ),
        );
    }

    if ACTION_VERB_REGEX.is_match(description) {
        points += 0.5;
        findings.found(format!("Action verbs in position {}", position));
    } else {
        findings.missing_with(
            format!("Action verbs in position {}", position),
            format!(
                "Start bullet points in position {} with strong action verbs (Led, Developed, Implemented)",
                position
            ),
        );
    }

    points
}

fn feedback(score: u32) -> &'static str {
    match score {
        20.. => "Excellent work experience with detailed, results-focused descriptions.",
        15.. => "Good work experience, could use more quantified achievements.",
        10.. => "Work experience needs enhancement with more detail and metrics.",
        _ => "Work experience section needs significant improvement.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, company: &str, start: &str, description: &str) -> Experience {
        Experience {
            job_title: Some(title.to_string()),
            company: Some(company.to_string()),
            start_date: Some(start.to_string()),
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    const DETAILED: &str = "Led the migration of a monolithic billing platform to event-driven services \
        across four teams, cutting invoice latency and increasing throughput by 45% while mentoring \
        junior engineers, reviewing designs, and owning the on-call rotation for the payments domain.";

    #[test]
    fn test_single_basic_entry_rounds_half_up() {
        let list = vec![entry(
            "Engineer",
            "Acme",
            "2020-01",
            "Led a team of 5 engineers and increased deployment speed by 40%.",
        )];
        let result = analyze(Some(&list));
        // volume 2 + (1 + 0.5 + 0.5 + 1 + 0.5) = 5.5, rounded half-up
        assert_eq!(result.score, 6);
        assert!(result.details.found.contains(&"Basic description for position 1".to_string()));
    }

    #[test]
    fn test_entry_contribution_capped() {
        let list = vec![entry("Engineer", "Acme", "2020-01", DETAILED)];
        let result = analyze(Some(&list));
        // 1 + 0.5 + 2.5 + 1 + 0.5 = 5.5 capped to 4, plus volume 2
        assert_eq!(result.score, 6);
        assert!(result.details.found.contains(&"Detailed description for position 1".to_string()));
    }

    #[test]
    fn test_empty_and_absent_match() {
        let absent = analyze(None);
        let empty = analyze(Some(&[]));
        assert_eq!(absent, empty);
        assert_eq!(absent.score, 0);
        assert_eq!(absent.details.missing, vec!["Work experience"]);
        assert_eq!(absent.details.recommendations.len(), 1);
    }

    #[test]
    fn test_blank_description_records_description_evidence() {
        let list = vec![Experience {
            job_title: Some("Engineer".to_string()),
            company: Some("Acme".to_string()),
            start_date: Some("2020-01".to_string()),
            description: Some("   ".to_string()),
            ..Default::default()
        }];
        let result = analyze(Some(&list));
        // volume 2 + complete info 1 + start date 0.5, nothing from the description
        assert_eq!(result.score, 4);
        assert_eq!(
            result.details.missing,
            vec![
                "Description for position 1",
                "Detailed description for position 1",
                "Quantifiable achievements in position 1",
                "Action verbs in position 1",
            ]
        );
        assert!(result
            .details
            .recommendations
            .iter()
            .any(|r| r.contains("currently 0 words, aim for 30+")));
        assert_eq!(result.suggestions.len(), 4);
        assert_eq!(result.suggestions, result.details.recommendations);
    }

    #[test]
    fn test_missing_description_matches_blank() {
        let blank = vec![entry("Engineer", "Acme", "2020", "")];
        let absent = vec![Experience {
            description: None,
            ..entry("Engineer", "Acme", "2020", "")
        }];
        assert_eq!(analyze(Some(&blank)), analyze(Some(&absent)));
    }

    #[test]
    fn test_short_description_cites_word_count() {
        let list = vec![entry("Engineer", "Acme", "2020", "Wrote code daily")];
        let result = analyze(Some(&list));
        assert!(result
            .details
            .recommendations
            .iter()
            .any(|r| r.contains("currently 3 words, aim for 30+")));
    }

    #[test]
    fn test_action_verb_after_bullet_on_later_line() {
        let description = "Responsibilities for the platform team included:\n• Built the CI pipeline from scratch";
        assert!(ACTION_VERB_REGEX.is_match(description));
        assert!(!ACTION_VERB_REGEX.is_match("Was responsible for leading"));
        assert!(!ACTION_VERB_REGEX.is_match("Ledger reconciliation"));
        assert!(ACTION_VERB_REGEX.is_match("  - optimized queries"));
    }

    #[test]
    fn test_metrics_detection() {
        assert!(METRICS_REGEX.is_match("Handled 100+ tickets"));
        assert!(METRICS_REGEX.is_match("Managed a $500 budget"));
        assert!(METRICS_REGEX.is_match("Costs were REDUCED"));
        assert!(!METRICS_REGEX.is_match("Maintained the website"));
    }

    #[test]
    fn test_invalid_entries_filtered() {
        let list = vec![Experience::default(), entry("Engineer", "Acme", "", "")];
        let result = analyze(Some(&list));
        // one valid entry: volume 2 + title/company 1
        assert_eq!(result.score, 3);
        assert!(result.details.found.contains(&"1 positions listed".to_string()));
    }

    #[test]
    fn test_category_capped_at_max() {
        let list: Vec<Experience> = (0..6)
            .map(|_| entry("Engineer", "Acme", "2020-01", DETAILED))
            .collect();
        let result = analyze(Some(&list));
        assert_eq!(result.score, 25);
        assert!(result.feedback.contains("Excellent"));
    }
}
