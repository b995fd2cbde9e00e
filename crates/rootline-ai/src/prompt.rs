//! System prompt construction

use rootline_core::Cycle;
use std::fmt::Write;
use std::path::{Path, PathBuf};

pub const REPORT_HEADER: &str = "Dependency report:";
pub const CYCLES_HEADER: &str = "Circular dependencies in the project:";
pub const CLOSING_LINE: &str = "Refer to files by their path relative to the project root.";

/// Builds the system prompt that grounds a chat about one file.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    file: PathBuf,
    report: Option<String>,
    cycles: Vec<String>,
}

impl PromptBuilder {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            report: None,
            cycles: Vec::new(),
        }
    }

    pub fn with_report(mut self, report: impl Into<String>) -> Self {
        self.report = Some(report.into());
        self
    }

    /// Project-wide cycles, printed relative to `root` when given.
    pub fn with_cycles(mut self, cycles: &[Cycle], root: Option<&Path>) -> Self {
        self.cycles = cycles
            .iter()
            .map(|cycle| {
                cycle
                    .iter()
                    .map(|p| {
                        root.and_then(|r| p.strip_prefix(r).ok())
                            .unwrap_or(p)
                            .display()
                            .to_string()
                    })
                    .collect::<Vec<_>>()
                    .join(" -> ")
            })
            .collect();
        self
    }

    pub fn build(&self) -> String {
        let mut prompt = String::from(
            "You answer questions about how files in a software project depend on each other.\n",
        );
        let _ = writeln!(prompt, "\nFile: {}", self.file.display());

        if let Some(report) = &self.report {
            let _ = writeln!(prompt, "\n{}\n{}", REPORT_HEADER, report.trim_end());
        }

        if !self.cycles.is_empty() {
            let _ = writeln!(prompt, "\n{}", CYCLES_HEADER);
            for cycle in &self.cycles {
                let _ = writeln!(prompt, "- {}", cycle);
            }
        }

        let _ = writeln!(prompt, "\n{}", CLOSING_LINE);
        prompt
    }
}
