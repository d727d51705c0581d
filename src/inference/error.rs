use std::fmt;

/// Classified inference error — tells the caller *why* the identification
/// call failed so the presentation layer can pick the right message.
#[derive(Debug)]
pub struct InferenceError {
    pub kind: InferenceErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceErrorKind {
    /// Connection refused, DNS failure, reset, etc.
    Network,
    /// Request timed out or the endpoint took too long.
    Timeout,
    /// 500/502/503/504 — endpoint-side outage.
    ServerError,
    /// The response body could not be parsed as a structured JSON object at
    /// all. Field-level gaps are never this — they are absorbed by defaults.
    Malformed,
    /// Anything else.
    Unknown,
}

impl InferenceError {
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            408 => InferenceErrorKind::Timeout,
            500 | 502 | 503 | 504 => InferenceErrorKind::ServerError,
            _ => InferenceErrorKind::Unknown,
        };
        Self {
            kind,
            status: Some(status),
            message: truncate_body(body),
        }
    }

    pub fn network(err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            InferenceErrorKind::Timeout
        } else {
            InferenceErrorKind::Network
        };
        Self {
            kind,
            status: None,
            message: err.to_string(),
        }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self {
            kind: InferenceErrorKind::Malformed,
            status: None,
            message: detail.into(),
        }
    }

    /// User-facing summary suitable for the result screen.
    pub fn user_message(&self) -> String {
        match self.kind {
            InferenceErrorKind::Network => {
                "Cannot reach the identification service (network error).".to_string()
            }
            InferenceErrorKind::Timeout => "The identification request timed out.".to_string(),
            InferenceErrorKind::ServerError => {
                "The identification service is experiencing issues (server error).".to_string()
            }
            InferenceErrorKind::Malformed => {
                "The identification service returned unreadable data.".to_string()
            }
            InferenceErrorKind::Unknown => format!("Identification failed: {}", self.message),
        }
    }
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            write!(
                f,
                "Inference error ({}, {:?}): {}",
                status, self.kind, self.message
            )
        } else {
            write!(f, "Inference error ({:?}): {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for InferenceError {}

fn truncate_body(body: &str) -> String {
    if body.len() > 300 {
        let mut end = 300;
        while end > 0 && !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_statuses_classify_as_server_error() {
        for status in [500, 502, 503, 504] {
            let err = InferenceError::from_status(status, "boom");
            assert_eq!(err.kind, InferenceErrorKind::ServerError);
            assert_eq!(err.status, Some(status));
        }
    }

    #[test]
    fn user_messages_reflect_the_error_kind() {
        assert!(InferenceError::from_status(408, "")
            .user_message()
            .contains("timed out"));
        assert!(InferenceError::from_status(503, "")
            .user_message()
            .contains("server error"));
        assert!(InferenceError::malformed("bad payload")
            .user_message()
            .contains("unreadable"));
        assert!(InferenceError::from_status(418, "teapot")
            .user_message()
            .contains("teapot"));
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundaries() {
        let body = "识".repeat(200); // 3 bytes per char, 600 bytes total
        let err = InferenceError::from_status(500, &body);
        assert!(err.message.len() <= 303);
        assert!(err.message.ends_with("..."));
    }
}
