//! Category analyzers
//!
//! Each analyzer scans one slice of a [`ResumeDocument`](crate::processing::document::ResumeDocument)
//! and returns a [`CategoryResult`]. Analyzers are independent of each other.

pub mod contact;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod skills;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Contact Information")]
    Contact,
    #[serde(rename = "Skills")]
    Skills,
    #[serde(rename = "Work Experience")]
    Experience,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Formatting & Structure")]
    Formatting,
}

impl Category {
    /// Fixed presentation order of the categories in an analysis
    pub const ALL: [Category; 5] = [
        Category::Contact,
        Category::Skills,
        Category::Experience,
        Category::Education,
        Category::Formatting,
    ];

    pub fn max_score(&self) -> u32 {
        match self {
            Category::Contact => 25,
            Category::Skills => 25,
            Category::Experience => 25,
            Category::Education => 15,
            Category::Formatting => 10,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Contact => "Contact Information",
            Category::Skills => "Skills",
            Category::Experience => "Work Experience",
            Category::Education => "Education",
            Category::Formatting => "Formatting & Structure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evidence collected while scoring a category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Details {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub category: Category,
    pub score: u32,
    pub max_score: u32,
    pub feedback: String,
    pub suggestions: Vec<String>,
    pub details: Details,
}

impl CategoryResult {
    /// Whether the category sits below 70% of its ceiling.
    pub fn needs_attention(&self) -> bool {
        (self.score as f64) < self.max_score as f64 * 0.7
    }

    pub fn completion_percentage(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        self.score as f64 / self.max_score as f64 * 100.0
    }
}

/// Accumulates points and evidence for a single category.
///
/// Points are kept as `f64` so fractional contributions survive until
/// [`Findings::finish`], which is the only place a category score is rounded.
#[derive(Debug)]
pub(crate) struct Findings {
    category: Category,
    points: f64,
    details: Details,
}

impl Findings {
    pub(crate) fn new(category: Category) -> Self {
        Self {
            category,
            points: 0.0,
            details: Details::default(),
        }
    }

    pub(crate) fn award(&mut self, points: f64) {
        self.points += points;
    }

    pub(crate) fn found(&mut self, item: impl Into<String>) {
        self.details.found.push(item.into());
    }

    pub(crate) fn missing(&mut self, item: impl Into<String>) {
        self.details.missing.push(item.into());
    }

    pub(crate) fn recommend(&mut self, item: impl Into<String>) {
        self.details.recommendations.push(item.into());
    }

    /// Records a missing item together with the recommendation that fixes it.
    pub(crate) fn missing_with(&mut self, item: impl Into<String>, recommendation: impl Into<String>) {
        self.missing(item);
        self.recommend(recommendation);
    }

    /// Clamps to `[0, max_score]` and rounds half-up once.
    pub(crate) fn finish(
        self,
        feedback: impl FnOnce(u32) -> &'static str,
        suggestion_count: usize,
    ) -> CategoryResult {
        let max_score = self.category.max_score();
        let score = round_score(self.points, max_score);
        let suggestions = self
            .details
            .recommendations
            .iter()
            .take(suggestion_count)
            .cloned()
            .collect();

        CategoryResult {
            category: self.category,
            score,
            max_score,
            feedback: feedback(score).to_string(),
            suggestions,
            details: self.details,
        }
    }
}

/// Clamp a fractional score into `[0, max]` then round half-up.
pub fn round_score(points: f64, max: u32) -> u32 {
    let clamped = if points.is_finite() { points.clamp(0.0, max as f64) } else { 0.0 };
    clamped.round() as u32
}

/// Map a count onto the first tier whose threshold it meets.
pub(crate) fn tier(count: usize, tiers: &[(usize, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| count >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}
