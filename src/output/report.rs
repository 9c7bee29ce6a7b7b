//! Report structures built from an [`Analysis`]

use crate::processing::analyzers::{Category, CategoryResult};
use crate::processing::engine::Analysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full scoring report: the analysis plus the prioritised improvement plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub analysis: Analysis,
    pub improvements: ImprovementReport,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub resume_file: String,
}

/// Improvement-suggestions view: categories ordered by how far they are from complete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementReport {
    pub overall_score: u32,
    pub verdict: String,
    pub items: Vec<ImprovementItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementItem {
    pub category: Category,
    pub score: u32,
    pub max_score: u32,
    pub completion_percentage: f64,
    pub priority: Priority,
    pub feedback: String,
    pub actions: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// `High` below 50% completion, `Medium` below 80%, otherwise `Low`.
    pub fn from_completion(percentage: f64) -> Self {
        if percentage < 50.0 {
            Priority::High
        } else if percentage < 80.0 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl ImprovementItem {
    fn from_result(result: &CategoryResult) -> Self {
        let completion_percentage = result.completion_percentage();
        Self {
            category: result.category,
            score: result.score,
            max_score: result.max_score,
            completion_percentage,
            priority: Priority::from_completion(completion_percentage),
            feedback: result.feedback.clone(),
            actions: result.details.recommendations.clone(),
            missing: result.details.missing.clone(),
        }
    }
}

impl ImprovementReport {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let mut items: Vec<ImprovementItem> = analysis
            .feedback
            .iter()
            .map(ImprovementItem::from_result)
            .collect();
        // stable sort keeps the fixed category order within a priority
        items.sort_by_key(|item| item.priority);

        Self {
            overall_score: analysis.score,
            verdict: verdict(analysis.score).to_string(),
            items,
        }
    }

    /// Items that still have something to act on.
    pub fn actionable(&self) -> impl Iterator<Item = &ImprovementItem> {
        self.items.iter().filter(|item| !item.actions.is_empty())
    }
}

impl ScoreReport {
    pub fn new(analysis: Analysis, resume_file: impl Into<String>) -> Self {
        let improvements = ImprovementReport::from_analysis(&analysis);
        Self {
            analysis,
            improvements,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_file.into(),
            },
        }
    }
}

pub fn verdict(score: u32) -> &'static str {
    match score {
        90.. => "Excellent - highly likely to pass ATS screening",
        80..=89 => "Very good - minor tweaks could help",
        70..=79 => "Good - some targeted improvements recommended",
        60..=69 => "Fair - several improvements needed",
        50..=59 => "Below average - significant improvements required",
        _ => "Poor - major revisions needed",
    }
}
