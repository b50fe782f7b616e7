//! Report rendering for the command line.
//!
//! Human output is the default and prints one `❌` line per problem, JSON
//! serializes the whole [`RunReport`], and text is a plain variant for logs
//! that mangle emoji.

use docgate_core::{DocumentStatus, RunReport};
use std::fmt;
use std::str::FromStr;

/// Output format for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per broken link or unreadable document, plus a summary
    #[default]
    Human,
    /// Full run report as pretty-printed JSON
    Json,
    /// Plain text, no emoji
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Unknown output format '{}'. Valid options: human, json, text",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Renders a [`RunReport`] in the chosen format
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a run report according to the output format preference
    pub fn format(report: &RunReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => Self::format_human(report),
            OutputFormat::Json => Self::format_json(report),
            OutputFormat::Text => Self::format_text(report),
        }
    }

    fn format_json(report: &RunReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    fn format_human(report: &RunReport) -> String {
        let mut output = String::new();

        for line in Self::problem_lines(report) {
            output.push_str(&format!("❌ {}\n", line));
        }

        let summary = &report.summary;
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!(
            "📊 {} documents: {} passed, {} skipped, {} failed, {} errored ({} references)\n",
            summary.documents,
            summary.passed,
            summary.skipped,
            summary.failed,
            summary.errored,
            summary.references
        ));

        if report.passed {
            output.push_str("✅ All links resolved\n");
        } else {
            output.push_str("Some links appear broken 💔\n");
        }
        output
    }

    fn format_text(report: &RunReport) -> String {
        let mut output = String::new();

        for line in Self::problem_lines(report) {
            output.push_str(&line);
            output.push('\n');
        }

        let summary = &report.summary;
        output.push_str(&format!(
            "{} {} documents, {} broken links, {} errors\n",
            if report.passed { "OK" } else { "FAILED" },
            summary.documents,
            summary.broken_links,
            summary.errored
        ));
        output
    }

    /// Broken links and document errors, in document path order
    fn problem_lines(report: &RunReport) -> Vec<String> {
        let mut lines = Vec::new();
        for doc in &report.documents {
            match &doc.status {
                DocumentStatus::Failed { broken } => {
                    lines.extend(broken.iter().map(|link| link.to_string()));
                }
                DocumentStatus::Error { message } => {
                    lines.push(format!("{}: {}", doc.path, message));
                }
                DocumentStatus::Passed | DocumentStatus::Skipped => {}
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgate_core::{BrokenLink, DocumentReport, Reference};

    fn failing_report() -> RunReport {
        let missing = Reference::new("/missing", "docs/a.mdx");
        RunReport::from_documents(vec![
            DocumentReport::checked("docs/a.mdx", 2, vec![BrokenLink::new(&missing, None)]),
            DocumentReport::error("docs/b.ipynb", "Parse error: Invalid notebook"),
            DocumentReport::checked("docs/c.md", 1, vec![]),
        ])
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("HUMAN").unwrap(), OutputFormat::Human);
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("yaml").is_err());
        assert_eq!(OutputFormat::default().to_string(), "human");
    }

    #[test]
    fn test_format_human() {
        let formatted = ReportFormatter::format(&failing_report(), OutputFormat::Human);
        assert!(formatted.contains("❌ docs/a.mdx: Could not find link '/missing'\n"));
        assert!(formatted.contains("❌ docs/b.ipynb: Parse error: Invalid notebook\n"));
        assert!(formatted.contains("1 passed"));
        assert!(formatted.ends_with("Some links appear broken 💔\n"));
    }

    #[test]
    fn test_format_human_passing() {
        let report = RunReport::from_documents(vec![DocumentReport::checked("docs/a.md", 0, vec![])]);
        let formatted = ReportFormatter::format(&report, OutputFormat::Human);
        assert!(!formatted.contains('❌'));
        assert!(formatted.contains("✅ All links resolved"));
    }

    #[test]
    fn test_format_json() {
        let formatted = ReportFormatter::format(&failing_report(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(value["passed"], false);
        assert_eq!(value["summary"]["broken_links"], 1);
        assert_eq!(value["documents"][0]["status"], "failed");
        assert_eq!(value["documents"][0]["broken"][0]["target"], "/missing");
    }

    #[test]
    fn test_format_text() {
        let formatted = ReportFormatter::format(&failing_report(), OutputFormat::Text);
        assert!(formatted.starts_with("docs/a.mdx: Could not find link '/missing'\n"));
        assert!(formatted.contains("FAILED 3 documents, 1 broken links, 1 errors"));
        assert!(!formatted.contains('❌'));
    }
}
