use serde_json::Value;

/// Shapes a failed backend interaction can take by the time it is caught.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCause {
    /// The server answered with an error status, plus whatever body it sent.
    /// `None` stands for an empty body.
    Response { status: u16, body: Option<Value> },
    /// The request died before a response arrived: DNS failure, refused
    /// connection, broken stream, or an undecodable success body.
    Transport { message: String },
    /// A plain error message raised somewhere on the call path.
    Message(String),
    /// A failure only describable by serializing it.
    Value(Value),
}

/// Last-resort display string when a failure value cannot be serialized.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Reduce any failure shape to the single string shown to the user.
///
/// Precedence:
/// 1. string response body, verbatim;
/// 2. object response body: its `error` field, then `message`, then the
///    serialized object;
/// 3. bodyless response: `Request failed with status code {n}`;
/// 4. transport message verbatim, or `Network error` when empty;
/// 5. plain message as-is;
/// 6. anything else serialized, or `Unknown error` if that fails.
pub fn extract_error_message(cause: &RemoteCause) -> String {
    match cause {
        RemoteCause::Response {
            body: Some(Value::String(text)),
            ..
        } => text.clone(),
        RemoteCause::Response {
            body: Some(Value::Object(fields)),
            ..
        } => {
            if let Some(text) = nonempty_str(fields.get("error")) {
                return text.to_string();
            }
            if let Some(text) = nonempty_str(fields.get("message")) {
                return text.to_string();
            }
            serialize_or_unknown(&Value::Object(fields.clone()))
        }
        RemoteCause::Response { status, body: None }
        | RemoteCause::Response {
            status,
            body: Some(Value::Null),
        } => format!("Request failed with status code {}", status),
        RemoteCause::Response {
            body: Some(other), ..
        } => serialize_or_unknown(other),
        RemoteCause::Transport { message } if message.is_empty() => "Network error".to_string(),
        RemoteCause::Transport { message } => message.clone(),
        RemoteCause::Message(message) => message.clone(),
        RemoteCause::Value(value) => serialize_or_unknown(value),
    }
}

fn nonempty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|text| !text.is_empty())
}

fn serialize_or_unknown(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| UNKNOWN_ERROR.to_string())
}

/// Failure of a gateway operation, already reduced to its display string.
///
/// `Display` yields exactly the string a UI would show, so callers can print
/// the error without knowing which shape it started as.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    message: String,
    cause: RemoteCause,
}

impl RemoteError {
    /// Wrap a failure shape, extracting its display message once.
    pub fn new(cause: RemoteCause) -> Self {
        let message = extract_error_message(&cause);
        Self { message, cause }
    }

    /// The human-readable string for display.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The failure shape the message was extracted from.
    pub fn cause(&self) -> &RemoteCause {
        &self.cause
    }

    /// Capture an error response, reading whatever body the server sent.
    /// Bodies that are not valid JSON are kept as plain strings.
    pub(crate) async fn from_error_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(text) if text.is_empty() => None,
            Ok(text) => Some(serde_json::from_str(&text).unwrap_or(Value::String(text))),
            Err(_) => None,
        };
        Self::new(RemoteCause::Response { status, body })
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(RemoteCause::Transport {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_body_is_used_verbatim() {
        let cause = RemoteCause::Response {
            status: 500,
            body: Some(json!("database connection lost")),
        };
        assert_eq!(extract_error_message(&cause), "database connection lost");
    }

    #[test]
    fn test_error_field_beats_message_field() {
        let cause = RemoteCause::Response {
            status: 400,
            body: Some(json!({
                "error": "Invalid payment amount",
                "message": "initial_payment must be positive",
            })),
        };
        assert_eq!(extract_error_message(&cause), "Invalid payment amount");
    }

    #[test]
    fn test_message_field_used_when_error_absent() {
        let cause = RemoteCause::Response {
            status: 404,
            body: Some(json!({"message": "Property not found"})),
        };
        assert_eq!(extract_error_message(&cause), "Property not found");
    }

    #[test]
    fn test_empty_error_field_falls_through_to_message() {
        let cause = RemoteCause::Response {
            status: 400,
            body: Some(json!({"error": "", "message": "visit_date is required"})),
        };
        assert_eq!(extract_error_message(&cause), "visit_date is required");
    }

    #[test]
    fn test_object_without_known_fields_is_serialized() {
        let cause = RemoteCause::Response {
            status: 422,
            body: Some(json!({"code": 17})),
        };
        assert_eq!(extract_error_message(&cause), r#"{"code":17}"#);
    }

    #[test]
    fn test_bodyless_response_reports_status_code() {
        let cause = RemoteCause::Response {
            status: 502,
            body: None,
        };
        assert_eq!(
            extract_error_message(&cause),
            "Request failed with status code 502"
        );
    }

    #[test]
    fn test_null_body_counts_as_no_body() {
        let cause = RemoteCause::Response {
            status: 500,
            body: Some(Value::Null),
        };
        assert_eq!(
            extract_error_message(&cause),
            "Request failed with status code 500"
        );
    }

    #[test]
    fn test_array_body_is_serialized() {
        let cause = RemoteCause::Response {
            status: 400,
            body: Some(json!(["bad", "worse"])),
        };
        assert_eq!(extract_error_message(&cause), r#"["bad","worse"]"#);
    }

    #[test]
    fn test_transport_message_is_used_verbatim() {
        let cause = RemoteCause::Transport {
            message: "Network Error".to_string(),
        };
        assert_eq!(extract_error_message(&cause), "Network Error");
    }

    #[test]
    fn test_empty_transport_message_gets_fallback() {
        let cause = RemoteCause::Transport {
            message: String::new(),
        };
        assert_eq!(extract_error_message(&cause), "Network error");
    }

    #[test]
    fn test_plain_message_passes_through() {
        let cause = RemoteCause::Message("Date must be in future".to_string());
        assert_eq!(extract_error_message(&cause), "Date must be in future");
    }

    #[test]
    fn test_bare_value_is_serialized() {
        let cause = RemoteCause::Value(json!(["a", 1]));
        assert_eq!(extract_error_message(&cause), r#"["a",1]"#);
    }

    #[test]
    fn test_remote_error_displays_extracted_message() {
        let err = RemoteError::new(RemoteCause::Response {
            status: 404,
            body: Some(json!({"error": "Property not found"})),
        });
        assert_eq!(err.to_string(), "Property not found");
        assert_eq!(err.message(), "Property not found");
        assert!(matches!(err.cause(), RemoteCause::Response { status: 404, .. }));
    }
}
