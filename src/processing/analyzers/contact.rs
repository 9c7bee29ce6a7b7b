//! Contact information analyzer

use super::{Category, CategoryResult, Findings};
use crate::processing::document::{non_blank, PersonalInfo};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

pub fn analyze(personal_info: Option<&PersonalInfo>) -> CategoryResult {
    let mut findings = Findings::new(Category::Contact);
    let default_info = PersonalInfo::default();
    let info = personal_info.unwrap_or(&default_info);

    if non_blank(&info.full_name).is_some() {
        findings.award(6.0);
        findings.found("Full name");
    } else {
        findings.missing_with("Full name", "Add your complete full name");
    }

    match non_blank(&info.email) {
        Some(email) if is_valid_email(email) => {
            findings.award(6.0);
            findings.found("Professional email");
        }
        Some(_) => findings.missing_with(
            "Professional email",
            "Fix your email address so it follows the name@domain.com format",
        ),
        None => findings.missing_with("Professional email", "Add a professional email address"),
    }

    if non_blank(&info.phone).is_some() {
        findings.award(4.0);
        findings.found("Phone number");
    } else {
        findings.missing_with("Phone number", "Add a phone number recruiters can reach you on");
    }

    if non_blank(&info.location).is_some() {
        findings.award(4.0);
        findings.found("Location");
    } else {
        findings.missing_with("Location", "Add your city and state or region");
    }

    if non_blank(&info.linked_in).is_some() {
        findings.award(3.0);
        findings.found("LinkedIn profile");
    } else {
        findings.missing_with("LinkedIn profile", "Add your LinkedIn profile URL");
    }

    if non_blank(&info.portfolio).is_some() {
        findings.award(2.0);
        findings.found("Portfolio/Website");
    } else {
        findings.recommend("Consider adding a portfolio or personal website");
    }

    findings.finish(feedback, 4)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

fn feedback(score: u32) -> &'static str {
    match score {
        20.. => "Contact information is complete and professional.",
        15.. => "Contact information is good, with room for minor improvements.",
        _ => "Contact information needs significant improvement.",
    }
}
