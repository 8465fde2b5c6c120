use serde::Serialize;

use crate::comparator::DuplicationComparison;
use crate::error::Result;
use crate::review::{Report, Warning};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    checks: Vec<&'static str>,
    warnings: &'a [Warning],
    #[serde(skip_serializing_if = "Option::is_none")]
    duplication: Option<JsonDuplication>,
}

#[derive(Serialize)]
struct Summary {
    checks_run: usize,
    warnings: usize,
}

#[derive(Serialize)]
struct JsonDuplication {
    current: usize,
    target: usize,
    increased: bool,
}

impl From<DuplicationComparison> for JsonDuplication {
    fn from(c: DuplicationComparison) -> Self {
        Self {
            current: c.current,
            target: c.target,
            increased: c.exceeded(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                checks_run: report.executed.len(),
                warnings: report.warnings.len(),
            },
            checks: report.executed.iter().map(|c| c.name()).collect(),
            warnings: &report.warnings,
            duplication: report.duplication.map(Into::into),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::{CheckId, DUPLICATION_INCREASED};

    #[test]
    fn serializes_summary_and_warnings() {
        let report = Report {
            executed: vec![CheckId::Duplication],
            warnings: vec![Warning {
                check: CheckId::Duplication,
                message: DUPLICATION_INCREASED.to_string(),
            }],
            duplication: Some(DuplicationComparison {
                current: 300,
                target: 250,
            }),
        };

        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format(&report).unwrap()).unwrap();

        assert_eq!(json["summary"]["checks_run"], 1);
        assert_eq!(json["summary"]["warnings"], 1);
        assert_eq!(json["checks"][0], "duplication");
        assert_eq!(json["warnings"][0]["check"], "duplication");
        assert_eq!(json["warnings"][0]["message"], DUPLICATION_INCREASED);
        assert_eq!(json["duplication"]["current"], 300);
        assert_eq!(json["duplication"]["target"], 250);
        assert_eq!(json["duplication"]["increased"], true);
    }

    #[test]
    fn omits_duplication_when_no_comparison_ran() {
        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format(&Report::default()).unwrap()).unwrap();

        assert!(json.get("duplication").is_none());
        assert_eq!(json["summary"]["warnings"], 0);
        assert_eq!(json["warnings"], serde_json::json!([]));
    }
}
