//! Resume document model and ATS scoring

pub mod analyzers;
pub mod document;
pub mod engine;
pub mod keyword_analyzer;
pub mod keywords;
