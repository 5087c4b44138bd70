use serde::{Deserialize, Serialize};
use crate::models::domain::{CompatibilityReport, ZodiacSign};
use crate::models::requests::FieldErrors;

/// Response for the evaluate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResponse {
    #[serde(rename = "reportId")]
    pub report_id: String,
    #[serde(flatten)]
    pub report: CompatibilityReport,
    #[serde(rename = "shareText")]
    pub share_text: String,
}

/// One entry of the zodiac listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZodiacEntry {
    pub name: String,
    pub english: String,
}

impl From<ZodiacSign> for ZodiacEntry {
    fn from(sign: ZodiacSign) -> Self {
        Self {
            name: sign.name().to_string(),
            english: sign.english().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZodiacListResponse {
    pub signs: Vec<ZodiacEntry>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(rename = "fieldErrors", default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn bad_request(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: 400,
            field_errors: None,
        }
    }
}
