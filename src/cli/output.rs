// Output formatting for CLI

use crate::cli::config::OutputFormat;
use podfeed::{Extraction, Id3Error};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// What `tags` reports for one file
#[derive(Debug, Serialize)]
pub struct TagReport {
    pub file: String,
    pub version: Option<String>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub issues: Vec<String>,
    pub error: Option<String>,
}

impl TagReport {
    pub fn new(path: &Path, result: Result<Extraction, Id3Error>) -> Self {
        let file = path.display().to_string();
        match result {
            Ok(extraction) => TagReport {
                file,
                version: extraction
                    .header
                    .map(|header| format!("2.{}.{}", header.version.0, header.version.1)),
                title: extraction.tags.title,
                artist: extraction.tags.artist,
                issues: extraction.issues.iter().map(ToString::to_string).collect(),
                error: None,
            },
            Err(e) => TagReport {
                file,
                version: None,
                title: None,
                artist: None,
                issues: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Format and output data
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Output a tag report
    pub fn output_report(&self, report: &TagReport, writer: &mut impl Write) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Pretty => writeln!(writer, "{}", serde_json::to_string_pretty(report)?)?,
            OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string(report)?)?,
        }
        Ok(())
    }

    /// Print success message
    pub fn print_success(&self, message: &str) {
        if !self.quiet {
            println!("✓ {}", message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podfeed::TrackTags;

    #[test]
    fn report_keeps_absent_fields_distinct() {
        let extraction = Extraction {
            header: None,
            tags: TrackTags {
                title: Some(String::new()),
                artist: None,
            },
            issues: Vec::new(),
        };
        let report = TagReport::new(Path::new("a.mp3"), Ok(extraction));

        let mut out = Vec::new();
        OutputFormatter::new(OutputFormat::Json, false)
            .output_report(&report, &mut out)
            .unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(line.contains(r#""title":"""#));
        assert!(line.contains(r#""artist":null"#));
    }

    #[test]
    fn report_for_failure() {
        let err = Id3Error::MalformedTag("no ID3v2 tag found");
        let report = TagReport::new(Path::new("b.mp3"), Err(err));
        assert_eq!(report.error.as_deref(), Some("malformed tag: no ID3v2 tag found"));
        assert!(report.title.is_none());
    }
}
