use crate::core::text;
use crate::models::CompatibilityReport;
use serde::{Deserialize, Serialize};

/// Short shareable summary of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
}

impl ShareMessage {
    pub fn new(score: u8, verdict_label: &str) -> Self {
        Self {
            title: text::SHARE_TITLE.to_string(),
            text: text::share_text(score, verdict_label),
        }
    }
}

impl From<&CompatibilityReport> for ShareMessage {
    fn from(report: &CompatibilityReport) -> Self {
        Self::new(report.score, &report.verdict_label)
    }
}
