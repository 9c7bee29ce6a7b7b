//! Static keyword tables used by the category analyzers and the keyword analyzer.
//!
//! All entries are lowercase. Matching is done against lowercased input.

/// Languages, frameworks, data stores and tooling recognised as technical skills
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    // Languages
    "javascript", "typescript", "python", "java", "c++", "c#", "rust", "golang", "ruby", "php",
    // Web
    "react", "angular", "vue", "node.js", "express", "html", "css",
    // Data
    "sql", "mongodb", "postgresql", "mysql", "machine learning", "data analysis", "tensorflow",
    // Infrastructure
    "aws", "azure", "docker", "kubernetes", "git", "linux", "rest api", "graphql", "ci/cd",
    // Process
    "agile", "scrum",
];

/// Interpersonal skills
pub const SOFT_SKILL_KEYWORDS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "critical thinking",
    "time management",
    "adaptability",
    "creativity",
    "collaboration",
    "project management",
    "analytical",
    "attention to detail",
    "mentoring",
    "negotiation",
];

/// Industry and domain terms
pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "software",
    "marketing",
    "finance",
    "healthcare",
    "education",
    "sales",
    "engineering",
    "design",
    "consulting",
    "manufacturing",
    "retail",
    "logistics",
];

/// Strong verbs an experience description should open with
pub const ACTION_VERBS: &[&str] = &[
    "led",
    "developed",
    "implemented",
    "managed",
    "created",
    "designed",
    "built",
    "optimized",
    "achieved",
    "improved",
    "increased",
    "reduced",
    "streamlined",
    "coordinated",
    "executed",
];

/// Two-way containment test: the skill contains the keyword, or the keyword contains the skill.
pub fn matches_bidirectional(skill: &str, keywords: &[&str]) -> bool {
    let skill = skill.trim().to_lowercase();
    if skill.is_empty() {
        return false;
    }
    keywords
        .iter()
        .any(|keyword| skill.contains(keyword) || keyword.contains(skill.as_str()))
}

/// One-way containment test: the skill contains one of the keywords.
pub fn contains_any(skill: &str, keywords: &[&str]) -> bool {
    let skill = skill.to_lowercase();
    keywords.iter().any(|keyword| skill.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_table_is_clean(table: &[&str]) {
        let unique: HashSet<&&str> = table.iter().collect();
        assert_eq!(unique.len(), table.len(), "duplicate keyword in table");
        for keyword in table {
            assert_eq!(*keyword, keyword.to_lowercase());
            assert!(!keyword.trim().is_empty());
        }
    }

    #[test]
    fn test_tables_are_lowercase_and_unique() {
        assert_table_is_clean(TECHNICAL_KEYWORDS);
        assert_table_is_clean(SOFT_SKILL_KEYWORDS);
        assert_table_is_clean(INDUSTRY_KEYWORDS);
        assert_table_is_clean(ACTION_VERBS);
        assert_eq!(ACTION_VERBS.len(), 15);
    }

    #[test]
    fn test_bidirectional_matching() {
        assert!(matches_bidirectional("JavaScript", TECHNICAL_KEYWORDS));
        assert!(matches_bidirectional("Node.js", TECHNICAL_KEYWORDS));
        assert!(matches_bidirectional("Kubernetes (EKS)", TECHNICAL_KEYWORDS));
        // keyword contains the skill
        assert!(matches_bidirectional("Postgre", TECHNICAL_KEYWORDS));
        assert!(!matches_bidirectional("Leadership", TECHNICAL_KEYWORDS));
        assert!(!matches_bidirectional("Communication", TECHNICAL_KEYWORDS));
        assert!(!matches_bidirectional("   ", TECHNICAL_KEYWORDS));
    }

    #[test]
    fn test_soft_skills_do_not_overlap_technical_samples() {
        for skill in ["JavaScript", "React", "Node.js"] {
            assert!(!matches_bidirectional(skill, SOFT_SKILL_KEYWORDS));
            assert!(!contains_any(skill, INDUSTRY_KEYWORDS));
        }
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("Software Architecture", INDUSTRY_KEYWORDS));
        assert!(contains_any("B2B Sales", INDUSTRY_KEYWORDS));
        assert!(!contains_any("Leadership", INDUSTRY_KEYWORDS));
    }
}
