//! Keyword matching between a resume document and a job description.
//!
//! This is separate from the ATS score: it extracts known keywords from the
//! resume's skills, experience descriptions and summary, then checks which of
//! the job description's keywords the resume covers.

use crate::error::{AtsError, Result};
use crate::processing::document::{non_blank, ResumeDocument};
use crate::processing::keywords::{INDUSTRY_KEYWORDS, SOFT_SKILL_KEYWORDS, TECHNICAL_KEYWORDS};
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strsim::jaro_winkler;
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

pub struct KeywordAnalyzer {
    matcher: AhoCorasick,
    keywords: Vec<String>,
    fuzzy_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    pub keyword: String,
    pub matched_text: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatchReport {
    pub resume_keywords: Vec<String>,
    pub job_keywords: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub fuzzy_matches: Vec<FuzzyMatch>,
    /// Share of job keywords found in the resume, exact or fuzzy, in `[0, 1]`
    pub coverage: f64,
}

impl KeywordAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_custom_keywords(Vec::new())
    }

    pub fn with_custom_keywords(additional: Vec<String>) -> Result<Self> {
        let mut keywords: Vec<String> = TECHNICAL_KEYWORDS
            .iter()
            .chain(SOFT_SKILL_KEYWORDS)
            .chain(INDUSTRY_KEYWORDS)
            .map(|k| k.to_string())
            .chain(
                additional
                    .into_iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty()),
            )
            .collect();
        keywords.sort();
        keywords.dedup();
        // longest first so overlapping keywords prefer the longer one
        keywords.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keywords)
            .map_err(|e| AtsError::Processing(format!("Failed to build keyword matcher: {}", e)))?;

        Ok(Self {
            matcher,
            keywords,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        })
    }

    /// Known keywords present in `text`, lowercased.
    pub fn find_keywords(&self, text: &str) -> BTreeSet<String> {
        self.matcher
            .find_iter(text)
            .filter(|mat| is_word_bounded(text, mat.start(), mat.end()))
            .map(|mat| self.keywords[mat.pattern().as_usize()].clone())
            .collect()
    }

    /// Text the keyword view reads from a resume: skills, experience descriptions and summary.
    pub fn resume_text(document: &ResumeDocument) -> String {
        let mut parts: Vec<&str> = Vec::new();

        if let Some(skills) = &document.skills {
            parts.extend(skills.iter().map(|s| s.trim()).filter(|s| !s.is_empty()));
        }
        if let Some(experience) = &document.experience {
            for entry in experience {
                parts.extend(non_blank(&entry.job_title));
                parts.extend(non_blank(&entry.description));
            }
        }
        if let Some(summary) = document.personal_info.as_ref().and_then(|p| non_blank(&p.summary)) {
            parts.push(summary);
        }

        parts.join("\n")
    }

    pub fn extract_resume_keywords(&self, document: &ResumeDocument) -> BTreeSet<String> {
        self.find_keywords(&Self::resume_text(document))
    }

    pub fn match_job_description(&self, document: &ResumeDocument, job_text: &str) -> KeywordMatchReport {
        let resume_text = Self::resume_text(document);
        let resume_keywords = self.find_keywords(&resume_text);
        let job_keywords = self.find_keywords(job_text);

        let matched: Vec<String> = job_keywords.intersection(&resume_keywords).cloned().collect();
        let unmatched: Vec<&String> = job_keywords.difference(&resume_keywords).collect();

        let fuzzy_candidates = self.fuzzy_candidates(&resume_text);
        let mut fuzzy_matches = Vec::new();
        let mut missing = Vec::new();
        for keyword in unmatched {
            match best_fuzzy_match(keyword, &fuzzy_candidates, self.fuzzy_threshold) {
                Some(fuzzy) => fuzzy_matches.push(fuzzy),
                None => missing.push(keyword.clone()),
            }
        }

        let coverage = if job_keywords.is_empty() {
            0.0
        } else {
            (matched.len() + fuzzy_matches.len()) as f64 / job_keywords.len() as f64
        };

        KeywordMatchReport {
            resume_keywords: resume_keywords.into_iter().collect(),
            job_keywords: job_keywords.into_iter().collect(),
            matched,
            missing,
            fuzzy_matches,
            coverage,
        }
    }

    /// Single words and adjacent word pairs, so multi-word keywords can match fuzzily.
    fn fuzzy_candidates(&self, text: &str) -> BTreeSet<String> {
        let words: Vec<String> = text
            .unicode_words()
            .map(|w| w.to_lowercase())
            .filter(|w| w.chars().count() >= 3)
            .collect();

        let mut candidates: BTreeSet<String> = words
            .windows(2)
            .map(|pair| format!("{} {}", pair[0], pair[1]))
            .collect();
        candidates.extend(words);
        candidates
    }

    pub fn set_fuzzy_threshold(&mut self, threshold: f64) {
        self.fuzzy_threshold = threshold.clamp(0.0, 1.0);
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.fuzzy_threshold
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

fn best_fuzzy_match(
    keyword: &str,
    candidates: &BTreeSet<String>,
    threshold: f64,
) -> Option<FuzzyMatch> {
    // very short keywords produce noisy similarity scores
    if keyword.chars().count() < 4 {
        return None;
    }
    candidates
        .iter()
        .map(|candidate| (candidate, jaro_winkler(keyword, candidate)))
        .filter(|(_, similarity)| *similarity >= threshold)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, similarity)| FuzzyMatch {
            keyword: keyword.to_string(),
            matched_text: candidate.clone(),
            similarity,
        })
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
