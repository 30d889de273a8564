//! API request and response models
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use todo_application::dto::{ProgressionCommand, ProgressionDto, TodoItemCommand, TodoItemDto};

/// Create or update request for a todo item
///
/// Missing `title`/`category` deserialize as empty and are rejected by the
/// service with a field-specific message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoItemRequest {
    /// Item title
    pub title: String,
    /// Free-text description (optional)
    pub description: Option<String>,
    /// Category name, one of the configured categories
    pub category: String,
}

impl From<TodoItemRequest> for TodoItemCommand {
    fn from(request: TodoItemRequest) -> Self {
        TodoItemCommand {
            title: request.title,
            description: request.description,
            category: request.category,
        }
    }
}

/// Progress registration request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionRequest {
    /// When the progress was made; RFC 3339, or a naive date/time taken as UTC
    #[serde(deserialize_with = "deserialize_date")]
    #[schema(value_type = String, format = DateTime)]
    pub date: DateTime<Utc>,
    /// Percentage of the whole task, in (0, 100]
    #[schema(value_type = f64)]
    pub percent: Decimal,
}

impl From<ProgressionRequest> for ProgressionCommand {
    fn from(request: ProgressionRequest) -> Self {
        ProgressionCommand {
            date: request.date,
            percent: request.percent,
        }
    }
}

/// Todo item response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemResponse {
    /// Item ID
    pub id: i64,
    /// Title
    pub title: String,
    /// Description, empty when none was given
    pub description: String,
    /// Category
    pub category: String,
    /// Whether accumulated progress reached 100%
    pub is_completed: bool,
    /// Progressions in date order
    pub progressions: Vec<ProgressionResponse>,
}

impl From<TodoItemDto> for TodoItemResponse {
    fn from(dto: TodoItemDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            category: dto.category,
            is_completed: dto.is_completed,
            progressions: dto.progressions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Progression response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionResponse {
    /// Progress date
    #[schema(value_type = String, format = DateTime)]
    pub date: DateTime<Utc>,
    /// Percent added by this entry
    #[schema(value_type = f64)]
    pub percent: Decimal,
    /// Running total up to and including this entry
    #[schema(value_type = f64)]
    pub accumulated_percent: Decimal,
}

impl From<ProgressionDto> for ProgressionResponse {
    fn from(dto: ProgressionDto) -> Self {
        Self {
            date: dto.date,
            percent: dto.percent,
            accumulated_percent: dto.accumulated_percent,
        }
    }
}

/// Rendered progress report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrintOutputResponse {
    /// Report text, one block per item
    pub output: String,
}

/// Error body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw)))
}

/// Parse an RFC 3339 timestamp, or a naive date/time as UTC
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_formats() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 18, 0, 0, 0).unwrap();

        assert_eq!(parse_date("2025-03-18T00:00:00Z"), Some(expected));
        assert_eq!(parse_date("2025-03-18T02:00:00+02:00"), Some(expected));
        assert_eq!(parse_date("2025-03-18T00:00:00"), Some(expected));
        assert_eq!(parse_date("2025-03-18 00:00:00"), Some(expected));
        assert_eq!(parse_date("2025-03-18"), Some(expected));
        assert_eq!(parse_date("18/03/2025"), None);
    }

    #[test]
    fn test_item_request_missing_fields_default_to_empty() {
        let request: TodoItemRequest = serde_json::from_str(r#"{"title":"Only"}"#).unwrap();
        assert_eq!(request.title, "Only");
        assert_eq!(request.category, "");
        assert!(request.description.is_none());
    }

    #[test]
    fn test_null_body_is_absent_request() {
        let request: Option<TodoItemRequest> = serde_json::from_str("null").unwrap();
        assert!(request.is_none());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let response = TodoItemResponse {
            id: 1,
            title: "T".into(),
            description: String::new(),
            category: "Work".into(),
            is_completed: false,
            progressions: vec![ProgressionResponse {
                date: Utc.with_ymd_and_hms(2025, 3, 18, 0, 0, 0).unwrap(),
                percent: Decimal::new(125, 1),
                accumulated_percent: Decimal::new(305, 1),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["isCompleted"], false);
        assert_eq!(json["progressions"][0]["percent"], 12.5);
        assert_eq!(json["progressions"][0]["accumulatedPercent"], 30.5);
        assert_eq!(json["progressions"][0]["date"], "2025-03-18T00:00:00Z");
    }

    #[test]
    fn test_progression_request_rejects_bad_date() {
        let result: Result<ProgressionRequest, _> =
            serde_json::from_str(r#"{"date":"yesterday","percent":10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_progression_request_percent_is_exact() {
        let request: ProgressionRequest =
            serde_json::from_str(r#"{"date":"2025-03-18","percent":40.0000004}"#).unwrap();
        assert_eq!(request.percent, Decimal::new(400_000_004, 7));

        let request: ProgressionRequest =
            serde_json::from_str(r#"{"date":"2025-03-18","percent":10}"#).unwrap();
        assert_eq!(request.percent, Decimal::TEN);
    }
}
