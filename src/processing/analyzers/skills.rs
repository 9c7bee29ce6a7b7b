//! Skills analyzer: volume, technical coverage, soft skills and industry relevance

use super::{tier, Category, CategoryResult, Findings};
use crate::processing::keywords::{
    contains_any, matches_bidirectional, INDUSTRY_KEYWORDS, SOFT_SKILL_KEYWORDS, TECHNICAL_KEYWORDS,
};

const TARGET_SKILL_COUNT: usize = 8;

const VOLUME_TIERS: [(usize, f64); 5] = [(15, 8.0), (10, 6.0), (7, 4.0), (5, 2.0), (3, 1.0)];
const TECHNICAL_TIERS: [(usize, f64); 4] = [(8, 8.0), (5, 6.0), (3, 4.0), (1, 2.0)];
const SOFT_TIERS: [(usize, f64); 3] = [(3, 5.0), (2, 3.0), (1, 2.0)];
const INDUSTRY_POINTS: f64 = 4.0;

pub fn analyze(skills: Option<&[String]>) -> CategoryResult {
    let mut findings = Findings::new(Category::Skills);

    let Some(skills) = skills else {
        findings.missing_with(
            "Skills section",
            "Create a skills section listing your technical and soft skills",
        );
        return findings.finish(feedback, 4);
    };

    let valid_skills: Vec<&str> = skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    let count = valid_skills.len();
    findings.award(tier(count, &VOLUME_TIERS));
    findings.found(format!("{} skills listed", count));
    if count < TARGET_SKILL_COUNT {
        findings.recommend(format!(
            "Add {} more relevant skills to strengthen this section",
            TARGET_SKILL_COUNT - count
        ));
    }

    let technical: Vec<&str> = valid_skills
        .iter()
        .copied()
        .filter(|skill| matches_bidirectional(skill, TECHNICAL_KEYWORDS))
        .collect();
    findings.award(tier(technical.len(), &TECHNICAL_TIERS));
    if technical.is_empty() {
        findings.missing("Technical skills");
    } else {
        findings.found(format!("Technical skills: {}", technical.join(", ")));
    }
    if technical.len() < 5 {
        findings.recommend("Add more technical skills relevant to your target role");
    }

    let soft: Vec<&str> = valid_skills
        .iter()
        .copied()
        .filter(|skill| matches_bidirectional(skill, SOFT_SKILL_KEYWORDS))
        .collect();
    findings.award(tier(soft.len(), &SOFT_TIERS));
    if soft.is_empty() {
        findings.missing("Soft skills");
    } else {
        findings.found(format!("Soft skills: {}", soft.join(", ")));
    }
    if soft.len() < 3 {
        findings.recommend("Include soft skills such as communication, leadership or teamwork");
    }

    if valid_skills.iter().any(|skill| contains_any(skill, INDUSTRY_KEYWORDS)) {
        findings.award(INDUSTRY_POINTS);
        findings.found("Industry-relevant skills");
    } else {
        findings.missing_with(
            "Industry-specific skills",
            "Add industry-specific skills that match your target field",
        );
    }

    findings.finish(feedback, 4)
}

fn feedback(score: u32) -> &'static str {
    match score {
        20.. => "Excellent skills section with a strong mix of technical and soft skills.",
        15.. => "Good skills section, could use a few more relevant keywords.",
        10.. => "Skills section needs enhancement with more relevant skills.",
        _ => "Skills section needs significant improvement.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_absent_skills() {
        let result = analyze(None);
        assert_eq!(result.score, 0);
        assert_eq!(result.details.missing, vec!["Skills section"]);
        assert_eq!(result.details.recommendations.len(), 1);
    }

    #[test]
    fn test_mixed_skills_score() {
        let list = skills(&["JavaScript", "React", "Node.js", "Leadership", "Communication"]);
        let result = analyze(Some(&list));
        // volume 2 + technical 4 + soft 3 + industry 0
        assert_eq!(result.score, 9);
        assert!(result.details.missing.contains(&"Industry-specific skills".to_string()));
        assert_eq!(
            result.suggestions[0],
            "Add 3 more relevant skills to strengthen this section"
        );
        assert!(result.feedback.contains("significant"));
    }

    #[test]
    fn test_blank_entries_ignored() {
        let list = skills(&["  ", "", "Python"]);
        let result = analyze(Some(&list));
        // 1 skill: volume 0, technical 2, soft 0, industry 0
        assert_eq!(result.score, 2);
        assert!(result.details.found.contains(&"1 skills listed".to_string()));
    }

    #[test]
    fn test_empty_list_is_not_missing_section() {
        let result = analyze(Some(&[]));
        assert_eq!(result.score, 0);
        assert!(!result.details.missing.contains(&"Skills section".to_string()));
        assert!(result.details.missing.contains(&"Technical skills".to_string()));
    }

    #[test]
    fn test_maximal_skills() {
        let list = skills(&[
            "JavaScript", "TypeScript", "Python", "React", "Docker", "Kubernetes", "AWS", "SQL",
            "Git", "Communication", "Leadership", "Teamwork", "Software Architecture",
            "Problem Solving", "Mentoring",
        ]);
        let result = analyze(Some(&list));
        assert_eq!(result.score, 25);
        assert!(result.feedback.contains("Excellent"));
        assert!(result.details.recommendations.is_empty());
    }
}
