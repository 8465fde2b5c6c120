use std::fmt::Write;

use crate::error::Result;
use crate::review::Report;

use super::{ColorMode, OutputFormatter, ansi};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.use_colors(&std::io::stdout()),
            verbose,
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        for warning in &report.warnings {
            let _ = writeln!(
                output,
                "{} [{}] {}",
                self.paint(ansi::YELLOW, "⚠"),
                warning.check,
                warning.message
            );
        }

        if self.verbose > 0
            && let Some(comparison) = report.duplication
        {
            let _ = writeln!(
                output,
                "{} duplications: {} current, {} target",
                self.paint(ansi::CYAN, "ℹ"),
                comparison.current,
                comparison.target
            );
        }

        let checks = report
            .executed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let summary = if report.has_warnings() {
            self.paint(
                ansi::YELLOW,
                &format!("{} warning(s)", report.warnings.len()),
            )
        } else {
            self.paint(ansi::GREEN, "no warnings")
        };
        let _ = writeln!(
            output,
            "\nChecks run: {} ({summary})",
            if checks.is_empty() { "none" } else { checks.as_str() }
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
