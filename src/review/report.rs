use serde::Serialize;

use crate::comparator::DuplicationComparison;

use super::{CheckId, WarningSink};

/// A warning emitted by one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub check: CheckId,
    pub message: String,
}

/// Everything one review run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub executed: Vec<CheckId>,
    pub warnings: Vec<Warning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplication: Option<DuplicationComparison>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Warning messages in emission order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().map(|w| w.message.as_str())
    }
}

impl WarningSink for Report {
    fn warn(&mut self, check: CheckId, message: &str) {
        tracing::debug!(%check, text = message, "warning emitted");
        self.warnings.push(Warning {
            check,
            message: message.to_string(),
        });
    }

    fn comparison(&mut self, comparison: DuplicationComparison) {
        self.duplication = Some(comparison);
    }
}
