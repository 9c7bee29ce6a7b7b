//! Output formatters: console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{ImprovementReport, Priority, ScoreReport};
use crate::processing::keyword_analyzer::KeywordMatchReport;
use colored::{Color, Colorize};

/// Trait for rendering reports in a particular format
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
    fn format_improvements(&self, report: &ImprovementReport) -> Result<String>;
    fn format_keywords(&self, report: &KeywordMatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for persistence and API integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn score_color(score: u32, max: u32) -> Color {
        let percentage = if max == 0 { 0 } else { score * 100 / max };
        match percentage {
            80.. => Color::Green,
            60..=79 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn score_bar(score: u32, max: u32) -> String {
        const WIDTH: u32 = 20;
        let filled = if max == 0 { 0 } else { score * WIDTH / max };
        format!(
            "{}{}",
            "#".repeat(filled as usize),
            "-".repeat((WIDTH - filled) as usize)
        )
    }

    fn priority_icon(&self, priority: Priority) -> String {
        let (text, color) = match priority {
            Priority::High => ("[!]", Color::Red),
            Priority::Medium => ("[*]", Color::Yellow),
            Priority::Low => ("[+]", Color::Green),
        };
        self.colorize(text, color)
    }

    fn improvement_lines(&self, report: &ImprovementReport, output: &mut String) {
        for item in report.actionable() {
            output.push_str(&format!(
                "{} {} ({:.0}% complete, {} priority)\n",
                self.priority_icon(item.priority),
                item.category,
                item.completion_percentage,
                item.priority.label()
            ));
            let limit = if self.detailed { item.actions.len() } else { 3 };
            for action in item.actions.iter().take(limit) {
                output.push_str(&format!("    - {}\n", action));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("ATS COMPATIBILITY REPORT", 1));
        output.push_str(&format!(
            "Resume: {} | Generated: {}\n",
            report.metadata.resume_file,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("Overall Score", 2));
        let score = format!("{}/100", analysis.score);
        output.push_str(&format!(
            "{} {}\n",
            self.colorize(&score, Self::score_color(analysis.score, 100)),
            report.improvements.verdict
        ));

        output.push_str(&self.format_header("Category Breakdown", 2));
        for result in &analysis.feedback {
            let score = format!("{:>2}/{:<2}", result.score, result.max_score);
            output.push_str(&format!(
                "{:<24} {} [{}]\n",
                result.category.name(),
                self.colorize(&score, Self::score_color(result.score, result.max_score)),
                Self::score_bar(result.score, result.max_score)
            ));
            output.push_str(&format!("    {}\n", self.colorize(&result.feedback, Color::Cyan)));

            if self.detailed {
                for found in &result.details.found {
                    output.push_str(&format!("    {} {}\n", self.colorize("+", Color::Green), found));
                }
                for missing in &result.details.missing {
                    output.push_str(&format!("    {} {}\n", self.colorize("-", Color::Red), missing));
                }
            }
        }

        if !analysis.recommendations.is_empty() {
            output.push_str(&self.format_header("Top Recommendations", 2));
            for (i, rec) in analysis.recommendations.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, rec));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Improvement Plan", 3));
            self.improvement_lines(&report.improvements, &mut output);
        }

        output.push_str(&format!("\nGenerated by resume-ats v{}\n", report.metadata.version));
        Ok(output)
    }

    fn format_improvements(&self, report: &ImprovementReport) -> Result<String> {
        let mut output = String::new();
        output.push_str(&self.format_header("IMPROVEMENT PLAN", 1));
        output.push_str(&format!("Overall score: {}/100 - {}\n\n", report.overall_score, report.verdict));

        if report.actionable().next().is_none() {
            output.push_str(&self.colorize("Nothing left to improve.\n", Color::Green));
        } else {
            self.improvement_lines(report, &mut output);
        }
        Ok(output)
    }

    fn format_keywords(&self, report: &KeywordMatchReport) -> Result<String> {
        let mut output = String::new();
        output.push_str(&self.format_header("KEYWORD MATCH", 1));
        let coverage = format!("{:.1}%", report.coverage * 100.0);
        let color = match report.coverage {
            c if c >= 0.8 => Color::Green,
            c if c >= 0.5 => Color::Yellow,
            _ => Color::Red,
        };
        output.push_str(&format!(
            "Coverage: {} of {} job keywords\n",
            self.colorize(&coverage, color),
            report.job_keywords.len()
        ));

        if !report.matched.is_empty() {
            output.push_str(&self.format_header("Matched", 2));
            output.push_str(&format!("  {}\n", self.colorize(&report.matched.join(", "), Color::Green)));
        }
        if !report.fuzzy_matches.is_empty() {
            output.push_str(&self.format_header("Close Matches", 2));
            for fuzzy in &report.fuzzy_matches {
                output.push_str(&format!(
                    "  '{}' ~ '{}' ({:.0}% similar)\n",
                    fuzzy.matched_text,
                    fuzzy.keyword,
                    fuzzy.similarity * 100.0
                ));
            }
        }
        if !report.missing.is_empty() {
            output.push_str(&self.format_header("Missing", 2));
            output.push_str(&format!("  {}\n", self.colorize(&report.missing.join(", "), Color::Red)));
        }
        if self.detailed {
            output.push_str(&self.format_header("Resume Keywords", 3));
            output.push_str(&format!("  {}\n", report.resume_keywords.join(", ")));
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        self.render(report)
    }

    fn format_improvements(&self, report: &ImprovementReport) -> Result<String> {
        self.render(report)
    }

    fn format_keywords(&self, report: &KeywordMatchReport) -> Result<String> {
        self.render(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn improvement_sections(report: &ImprovementReport, output: &mut String) {
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            let items: Vec<_> = report
                .actionable()
                .filter(|item| item.priority == priority)
                .collect();
            if items.is_empty() {
                continue;
            }
            output.push_str(&format!("### {} Priority\n\n", priority.label()));
            for item in items {
                output.push_str(&format!(
                    "**{}** ({}/{}, {:.0}% complete)\n\n",
                    item.category, item.score, item.max_score, item.completion_percentage
                ));
                for action in &item.actions {
                    output.push_str(&format!("- {}\n", action));
                }
                output.push('\n');
            }
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str("# ATS Compatibility Report\n\n");
        if self.include_metadata {
            output.push_str(&format!(
                "**Resume:** `{}` | **Generated:** {}\n\n",
                report.metadata.resume_file,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        output.push_str(&format!("**Overall Score:** {}/100\n\n", analysis.score));
        output.push_str(&format!("**Verdict:** {}\n\n", report.improvements.verdict));

        output.push_str("## Category Breakdown\n\n");
        output.push_str("| Category | Score | Feedback |\n");
        output.push_str("|----------|-------|----------|\n");
        for result in &analysis.feedback {
            output.push_str(&format!(
                "| {} | {}/{} | {} |\n",
                result.category, result.score, result.max_score, result.feedback
            ));
        }
        output.push('\n');

        if !analysis.recommendations.is_empty() {
            output.push_str("## Recommendations\n\n");
            for (i, rec) in analysis.recommendations.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, rec));
            }
            output.push('\n');
        }

        if report.improvements.actionable().next().is_some() {
            output.push_str("## Improvement Plan\n\n");
            Self::improvement_sections(&report.improvements, &mut output);
        }

        if self.include_metadata {
            output.push_str(&format!("---\n*Generated by resume-ats v{}*\n", report.metadata.version));
        }
        Ok(output)
    }

    fn format_improvements(&self, report: &ImprovementReport) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Improvement Plan\n\n");
        output.push_str(&format!(
            "**Overall Score:** {}/100 - {}\n\n",
            report.overall_score, report.verdict
        ));
        Self::improvement_sections(report, &mut output);
        Ok(output)
    }

    fn format_keywords(&self, report: &KeywordMatchReport) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Keyword Match\n\n");
        output.push_str(&format!(
            "**Coverage:** {:.1}% of {} job keywords\n\n",
            report.coverage * 100.0,
            report.job_keywords.len()
        ));

        let sections = [("Matched", &report.matched), ("Missing", &report.missing)];
        for (title, keywords) in sections {
            if keywords.is_empty() {
                continue;
            }
            output.push_str(&format!("## {}\n\n", title));
            for keyword in keywords {
                output.push_str(&format!("- {}\n", keyword));
            }
            output.push('\n');
        }

        if !report.fuzzy_matches.is_empty() {
            output.push_str("## Close Matches\n\n");
            for fuzzy in &report.fuzzy_matches {
                output.push_str(&format!(
                    "- `{}` ~ `{}` ({:.0}%)\n",
                    fuzzy.matched_text,
                    fuzzy.keyword,
                    fuzzy.similarity * 100.0
                ));
            }
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Picks the formatter for an output format
pub fn formatter_for(format: &OutputFormat, use_colors: bool, detailed: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, detailed)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::{PersonalInfo, ResumeDocument};
    use crate::processing::engine::calculate_ats_score;

    fn report() -> ScoreReport {
        let document = ResumeDocument {
            personal_info: Some(PersonalInfo {
                full_name: Some("Jane Doe".to_string()),
                email: Some("jane@x.com".to_string()),
                ..Default::default()
            }),
            skills: Some(vec!["Rust".to_string()]),
            ..Default::default()
        };
        ScoreReport::new(calculate_ats_score(Some(&document)), "resume.json")
    }

    #[test]
    fn test_console_plain_output() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.contains("ATS COMPATIBILITY REPORT"));
        assert!(output.contains("Contact Information"));
        assert!(output.contains("Formatting & Structure"));
        assert!(output.contains("+ Full name"));
        assert!(output.contains("Improvement Plan"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_json_round_trips_score() {
        let report = report();
        let output = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["analysis"]["score"], report.analysis.score);
        assert_eq!(value["analysis"]["feedback"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_markdown_table() {
        let output = MarkdownFormatter::new(false).format_report(&report()).unwrap();
        assert!(output.starts_with("# ATS Compatibility Report"));
        assert!(output.contains("| Contact Information | 12/25 |"));
        assert!(output.contains("### High Priority"));
        assert!(!output.contains("Generated by"));
    }

    #[test]
    fn test_score_bar_width() {
        assert_eq!(ConsoleFormatter::score_bar(25, 25), "#".repeat(20));
        assert_eq!(ConsoleFormatter::score_bar(0, 10), "-".repeat(20));
        assert_eq!(ConsoleFormatter::score_bar(5, 10).len(), 20);
    }

    #[test]
    fn test_formatter_for() {
        assert_eq!(formatter_for(&OutputFormat::Json, false, false).supports_format(), OutputFormat::Json);
        assert_eq!(
            formatter_for(&OutputFormat::Markdown, false, false).supports_format(),
            OutputFormat::Markdown
        );
    }
}
