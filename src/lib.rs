//! Resume ATS scoring library
//!
//! [`calculate_ats_score`] scores a structured [`ResumeDocument`] across five
//! categories and returns an [`Analysis`] with a 0-100 total, per-category
//! feedback and prioritised recommendations.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AtsError, Result};
pub use processing::analyzers::{Category, CategoryResult, Details};
pub use processing::document::ResumeDocument;
pub use processing::engine::{calculate_ats_score, Analysis, ScoreBreakdown};
