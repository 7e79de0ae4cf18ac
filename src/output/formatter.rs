//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::MatchReport;
use colored::Colorize;
use std::path::Path;

const CHART_WIDTH: usize = 40;

/// Trait for rendering match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
}

/// Console formatter with colors and an ASCII proportion chart
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter;

/// Coordinates the individual formatters
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match color {
            "header" => text.bold().cyan().to_string(),
            "title" => text.bold().green().to_string(),
            "dim" => text.dimmed().to_string(),
            _ => text.to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.paint("Top Matching Job Titles", "header"));
        out.push('\n');
        out.push_str(&self.paint(
            &format!(
                "{} catalog records, {} vocabulary terms",
                report.catalog_size, report.vocabulary_size
            ),
            "dim",
        ));
        out.push_str("\n\n");

        for (rank, job_match) in report.matches.iter().enumerate() {
            out.push_str(&format!(
                "{}. {}  (similarity {:.2})\n",
                rank + 1,
                self.paint(&job_match.title, "title"),
                job_match.similarity
            ));
            if self.detailed {
                out.push_str(&format!("   Matched skills: {}\n", job_match.skills));
            }
        }

        out.push('\n');
        out.push_str(&self.paint("Similarity share", "header"));
        out.push('\n');
        for slice in &report.chart {
            let filled = ((slice.share / 100.0) * CHART_WIDTH as f32).round() as usize;
            out.push_str(&format!(
                "{:>24} {:5.1}% {}\n",
                slice.title,
                slice.share,
                "█".repeat(filled.min(CHART_WIDTH))
            ));
        }

        if let Some(top) = report.top_match() {
            out.push('\n');
            out.push_str(&format!(
                "Best fit: {}\n",
                self.paint(&top.title, "title")
            ));
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Match Report\n\n");
        out.push_str(&format!("- Resume: `{}`\n", report.resume_path));
        out.push_str(&format!(
            "- Generated: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!(
            "- Catalog: {} records, {} vocabulary terms\n\n",
            report.catalog_size, report.vocabulary_size
        ));

        out.push_str("| Rank | Job Title | Similarity | Share |\n");
        out.push_str("|------|-----------|------------|-------|\n");
        for (rank, (job_match, slice)) in
            report.matches.iter().zip(report.chart.iter()).enumerate()
        {
            out.push_str(&format!(
                "| {} | {} | {:.2} | {:.1}% |\n",
                rank + 1,
                job_match.title,
                job_match.similarity,
                slice.share
            ));
        }

        out.push_str("\n## Matched Skills\n\n");
        for job_match in &report.matches {
            out.push_str(&format!("- **{}**: {}\n", job_match.title, job_match.skills));
        }

        Ok(out)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter,
        }
    }

    pub fn format(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Markdown => self.markdown.format_report(report),
        }
    }

    pub fn save(&self, report: &MatchReport, format: &OutputFormat, path: &Path) -> Result<()> {
        // Saved console output keeps its layout but drops ANSI colors
        let rendered = match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(false, self.console.detailed).format_report(report)?
            }
            other => self.format(report, other)?,
        };
        std::fs::write(path, rendered)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::JobMatch;
    use crate::output::report::MatchReport;

    fn report() -> MatchReport {
        MatchReport::new(
            "resume.pdf".to_string(),
            3,
            8,
            vec![
                JobMatch {
                    title: "Data Analyst".to_string(),
                    skills: "python sql excel".to_string(),
                    similarity: 0.72,
                },
                JobMatch {
                    title: "Chef".to_string(),
                    skills: "cooking knife skill".to_string(),
                    similarity: 0.24,
                },
            ],
        )
    }

    #[test]
    fn test_console_format_two_decimal_scores() {
        let formatter = ConsoleFormatter::new(false, true);
        let rendered = formatter.format_report(&report()).unwrap();

        assert!(rendered.contains("1. Data Analyst  (similarity 0.72)"));
        assert!(rendered.contains("Matched skills: python sql excel"));
        assert!(rendered.contains("Best fit: Data Analyst"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let formatter = JsonFormatter::new(false);
        let rendered = formatter.format_report(&report()).unwrap();

        let parsed: MatchReport = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.matches.len(), 2);
        assert_eq!(parsed.chart.len(), 2);
    }

    #[test]
    fn test_markdown_format_has_table() {
        let rendered = MarkdownFormatter.format_report(&report()).unwrap();
        assert!(rendered.contains("| Rank | Job Title | Similarity | Share |"));
        assert!(rendered.contains("| 1 | Data Analyst | 0.72 |"));
    }
}
