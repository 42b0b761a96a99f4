//! Uniform envelope returned by the JSON endpoints.

use chrono::Utc;
use serde::Serialize;

use crate::formatting::format_number;

/// `data`/`message` only appear on success, `error` only on failure.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Current epoch seconds rendered with thousands separators (`"1,760,781,234"`).
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        build_api_response(true, Some(data), None, None)
    }

    pub fn failure(error: &str) -> Self {
        build_api_response(false, None, Some(error), None)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

pub fn build_api_response<T>(
    success: bool,
    data: Option<T>,
    error: Option<&str>,
    message: Option<&str>,
) -> ApiResponse<T> {
    let timestamp = format_number(Utc::now().timestamp());

    if success {
        return ApiResponse {
            success,
            timestamp,
            data,
            message: non_empty(message),
            error: None,
        };
    }

    let error = non_empty(error);
    if let Some(error) = &error {
        log::error!("API Error: {error}");
    }

    ApiResponse {
        success,
        timestamp,
        data: None,
        message: None,
        error,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn timestamp_digits(value: &Value) -> String {
        value["timestamp"].as_str().unwrap().replace(',', "")
    }

    #[test]
    fn success_response_carries_data() {
        let response = build_api_response(true, Some(json!({"n": 1})), None, None);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"], json!({"n": 1}));
        assert!(value.get("error").is_none());
        assert!(value.get("message").is_none());
        assert!(timestamp_digits(&value).parse::<i64>().unwrap() > 0);
    }

    #[test]
    fn success_response_keeps_message() {
        let response = build_api_response::<Value>(true, None, None, Some("Data loaded"));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["message"], json!("Data loaded"));
        assert!(value.get("data").is_none());
    }

    #[test]
    fn failure_response_carries_error_only() {
        let response = build_api_response(
            false,
            Some(json!([1, 2])),
            Some("database unavailable"),
            Some("ignored"),
        );
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"], json!("database unavailable"));
        assert!(value.get("data").is_none());
        assert!(value.get("message").is_none());
    }

    #[test]
    fn empty_error_is_omitted() {
        let response = ApiResponse::<Value>::failure("");

        assert_eq!(response.error, None);
        assert!(!response.success);
    }

    #[test]
    fn timestamp_is_grouped_epoch_seconds() {
        let before = Utc::now().timestamp();
        let response = ApiResponse::ok(1);
        let after = Utc::now().timestamp();

        assert!(response.timestamp.contains(','));
        let seconds = response.timestamp.replace(',', "").parse::<i64>().unwrap();
        assert!((before..=after).contains(&seconds));
    }
}
