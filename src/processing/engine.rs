//! ATS scoring engine
//!
//! [`calculate_ats_score`] is a pure function of its input: it runs the five
//! category analyzers, sums their scores and derives a capped, deduplicated
//! recommendation list. It never fails; absent or malformed input degrades to
//! zero-score results.

use crate::processing::analyzers::{
    contact, education, experience, formatting, skills, Category, CategoryResult,
};
use crate::processing::document::ResumeDocument;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MAX_TOTAL_SCORE: u32 = 100;
pub const MAX_RECOMMENDATIONS: usize = 8;
const SUGGESTIONS_PER_WEAK_CATEGORY: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub score: u32,
    pub feedback: Vec<CategoryResult>,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub contact_info: u32,
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub formatting: u32,
}

/// Score band used to pick the seed recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Foundational,
    Developing,
    Polished,
}

impl ScoreTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => ScoreTier::Polished,
            60.. => ScoreTier::Developing,
            _ => ScoreTier::Foundational,
        }
    }

    fn seed_recommendations(&self) -> &'static [&'static str] {
        match self {
            ScoreTier::Foundational => &[
                "Focus on completing all essential resume sections first",
                "Use a simple, ATS-friendly layout with standard section headings",
                "Add relevant keywords from the job descriptions you are targeting",
            ],
            ScoreTier::Developing => &[
                "Tailor your resume keywords to each job description",
                "Quantify more of your achievements with numbers and percentages",
            ],
            ScoreTier::Polished => &[
                "Your resume is ATS-friendly; fine-tune keywords for each application",
                "Keep your experience and skills current as your career progresses",
            ],
        }
    }
}

impl ScoreBreakdown {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Contact => self.contact_info,
            Category::Skills => self.skills,
            Category::Experience => self.experience,
            Category::Education => self.education,
            Category::Formatting => self.formatting,
        }
    }

    fn set(&mut self, category: Category, score: u32) {
        match category {
            Category::Contact => self.contact_info = score,
            Category::Skills => self.skills = score,
            Category::Experience => self.experience = score,
            Category::Education => self.education = score,
            Category::Formatting => self.formatting = score,
        }
    }
}

impl Analysis {
    /// Result for a missing document.
    pub fn empty() -> Self {
        Self {
            score: 0,
            feedback: Vec::new(),
            breakdown: ScoreBreakdown::default(),
            recommendations: vec![
                "Start by filling in your personal information and work experience".to_string(),
            ],
        }
    }

    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.feedback.iter().find(|result| result.category == category)
    }
}

/// Scores a resume document. `None` yields [`Analysis::empty`].
pub fn calculate_ats_score(document: Option<&ResumeDocument>) -> Analysis {
    let Some(document) = document else {
        debug!("No resume document supplied, returning empty analysis");
        return Analysis::empty();
    };

    let feedback = vec![
        contact::analyze(document.personal_info.as_ref()),
        skills::analyze(document.skills.as_deref()),
        experience::analyze(document.experience.as_deref()),
        education::analyze(document.education.as_deref()),
        formatting::analyze(document),
    ];

    let mut breakdown = ScoreBreakdown::default();
    for result in &feedback {
        debug!("{}: {}/{}", result.category, result.score, result.max_score);
        breakdown.set(result.category, result.score);
    }

    let score = feedback
        .iter()
        .map(|result| result.score)
        .sum::<u32>()
        .min(MAX_TOTAL_SCORE);
    let recommendations = generate_recommendations(score, &feedback);

    debug!("ATS score: {} ({} recommendations)", score, recommendations.len());

    Analysis {
        score,
        feedback,
        breakdown,
        recommendations,
    }
}

/// Seeds by score tier, then up to two suggestions from each category below 70%
/// of its maximum; deduplicated in first-seen order and capped.
pub fn generate_recommendations(score: u32, feedback: &[CategoryResult]) -> Vec<String> {
    let seeds = ScoreTier::from_score(score)
        .seed_recommendations()
        .iter()
        .map(|s| s.to_string());

    let weak_suggestions = feedback
        .iter()
        .filter(|result| result.needs_attention())
        .flat_map(|result| {
            result
                .suggestions
                .iter()
                .take(SUGGESTIONS_PER_WEAK_CATEGORY)
                .cloned()
        });

    let mut seen = HashSet::new();
    seeds
        .chain(weak_suggestions)
        .filter(|rec| seen.insert(rec.clone()))
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::{Education, Experience, PersonalInfo, Project};

    fn contact_only() -> ResumeDocument {
        ResumeDocument {
            personal_info: Some(PersonalInfo {
                full_name: Some("Jane Doe".to_string()),
                email: Some("jane@x.com".to_string()),
                phone: Some("555-1234".to_string()),
                location: Some("NYC".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_document() {
        let analysis = calculate_ats_score(None);
        assert_eq!(analysis.score, 0);
        assert!(analysis.feedback.is_empty());
        assert_eq!(analysis.breakdown, ScoreBreakdown::default());
        assert_eq!(analysis.recommendations.len(), 1);
    }

    #[test]
    fn test_empty_document() {
        let analysis = calculate_ats_score(Some(&ResumeDocument::default()));
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.feedback.len(), 5);
    }

    #[test]
    fn test_contact_only_document() {
        let analysis = calculate_ats_score(Some(&contact_only()));
        assert_eq!(analysis.breakdown.contact_info, 20);
        assert_eq!(analysis.breakdown.skills, 0);
        assert_eq!(analysis.breakdown.experience, 0);
        assert_eq!(analysis.breakdown.education, 0);
        assert_eq!(analysis.breakdown.formatting, 2);
        assert_eq!(analysis.score, 22);
    }

    #[test]
    fn test_feedback_order_is_fixed() {
        let analysis = calculate_ats_score(Some(&contact_only()));
        let order: Vec<Category> = analysis.feedback.iter().map(|r| r.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        for category in Category::ALL {
            assert_eq!(
                analysis.category(category).map(|r| r.score),
                Some(analysis.breakdown.get(category))
            );
        }
    }

    #[test]
    fn test_low_tier_recommendations() {
        let analysis = calculate_ats_score(Some(&contact_only()));
        assert_eq!(
            analysis.recommendations[0],
            "Focus on completing all essential resume sections first"
        );
        assert!(analysis.recommendations.len() <= MAX_RECOMMENDATIONS);
        // contact is at 20/25, above the 70% line, so its suggestions are not pulled in
        assert!(!analysis
            .recommendations
            .contains(&"Add your LinkedIn profile URL".to_string()));
        // skills is empty, so its suggestion is pulled in
        assert!(analysis.recommendations.contains(
            &"Create a skills section listing your technical and soft skills".to_string()
        ));
    }

    #[test]
    fn test_recommendations_deduplicated() {
        let result = |suggestions: &[&str]| CategoryResult {
            category: Category::Skills,
            score: 0,
            max_score: 25,
            feedback: String::new(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            details: Default::default(),
        };
        let feedback = vec![
            result(&["Tailor your resume keywords to each job description", "A"]),
            result(&["A", "B", "C"]),
        ];
        let recs = generate_recommendations(65, &feedback);
        assert_eq!(
            recs,
            vec![
                "Tailor your resume keywords to each job description",
                "Quantify more of your achievements with numbers and percentages",
                "A",
                "B",
            ]
        );
    }

    #[test]
    fn test_score_tiers() {
        assert_eq!(ScoreTier::from_score(0), ScoreTier::Foundational);
        assert_eq!(ScoreTier::from_score(59), ScoreTier::Foundational);
        assert_eq!(ScoreTier::from_score(60), ScoreTier::Developing);
        assert_eq!(ScoreTier::from_score(79), ScoreTier::Developing);
        assert_eq!(ScoreTier::from_score(80), ScoreTier::Polished);
        for tier in [ScoreTier::Foundational, ScoreTier::Developing, ScoreTier::Polished] {
            let seeds = tier.seed_recommendations().len();
            assert!((2..=3).contains(&seeds));
        }
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let analysis = calculate_ats_score(Some(&contact_only()));
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["breakdown"]["contactInfo"], 20);
        assert_eq!(json["feedback"][0]["maxScore"], 25);
        assert_eq!(json["feedback"][0]["category"], "Contact Information");
    }

    #[test]
    fn test_skills_change_is_isolated() {
        let mut document = contact_only();
        document.skills = Some(vec!["Excel".to_string()]);
        let before = calculate_ats_score(Some(&document));
        document.skills = Some(vec!["Rust".to_string(), "Leadership".to_string(), "Sales".to_string()]);
        let after = calculate_ats_score(Some(&document));

        assert_ne!(before.breakdown.skills, after.breakdown.skills);
        assert_eq!(before.breakdown.contact_info, after.breakdown.contact_info);
        assert_eq!(before.breakdown.experience, after.breakdown.experience);
        assert_eq!(before.breakdown.education, after.breakdown.education);
        assert_eq!(before.breakdown.formatting, after.breakdown.formatting);
    }

    #[test]
    fn test_input_not_mutated() {
        let document = ResumeDocument {
            experience: Some(vec![Experience {
                job_title: Some("  Engineer ".to_string()),
                ..Default::default()
            }]),
            education: Some(vec![Education::default()]),
            projects: Some(vec![Project::default()]),
            ..contact_only()
        };
        let snapshot = document.clone();
        let _ = calculate_ats_score(Some(&document));
        assert_eq!(document, snapshot);
    }
}
