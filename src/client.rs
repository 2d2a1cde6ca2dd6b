//! HTTP client for the calculation endpoint.
//!
//! The network call itself is a thin wrapper around `reqwest` (which
//! compiles to the browser fetch API under wasm32); all decision logic
//! lives in [`interpret_response`] so it can be tested without a server.

use std::fmt;

use crate::request::CalculationRequest;
use crate::response::{CalculationReply, CalculationResult};

/// Why a request produced no usable answer.
#[derive(Debug)]
pub enum RequestError {
    /// The request never completed: connection failure, the body could not
    /// be read, or a similar transport problem.
    Transport(String),
    /// Non-success HTTP status without a recognizable error payload.
    Status(u16),
    /// A success status whose body matched neither response shape.
    Decode(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Transport(msg) => write!(f, "request failed: {}", msg),
            RequestError::Status(status) => write!(f, "server answered with status {}", status),
            RequestError::Decode(msg) => write!(f, "unreadable server response: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

/// A completed round trip: either data to render or the server's own
/// rejection message, surfaced verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationOutcome {
    Computed(CalculationResult),
    Rejected(String),
}

/// Decide what a (status, body) pair means.
///
/// An `error` field in the body is authoritative whatever the status. A
/// parseable result still requires a success status; everything else is a
/// status or decode failure.
pub fn interpret_response(status: u16, body: &str) -> Result<CalculationOutcome, RequestError> {
    let success = (200..300).contains(&status);
    match serde_json::from_str::<CalculationReply>(body) {
        Ok(CalculationReply::Rejected { error }) => Ok(CalculationOutcome::Rejected(error)),
        Ok(CalculationReply::Computed(result)) if success => {
            Ok(CalculationOutcome::Computed(result))
        }
        Ok(CalculationReply::Computed(_)) => Err(RequestError::Status(status)),
        Err(_) if !success => Err(RequestError::Status(status)),
        Err(err) => Err(RequestError::Decode(err.to_string())),
    }
}

/// POST the request and interpret the answer.
pub async fn post_calculation(
    endpoint: &str,
    request: &CalculationRequest,
) -> Result<CalculationOutcome, RequestError> {
    let response = reqwest::Client::new()
        .post(endpoint)
        .json(request)
        .send()
        .await
        .map_err(|err| RequestError::Transport(err.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|err| RequestError::Transport(err.to_string()))?;

    interpret_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{"terms": [[1, 1.0]], "suma": 1.0, "multiplicacion": 1.0}"#;

    #[test]
    fn success_status_with_data() {
        let outcome = interpret_response(200, OK_BODY).unwrap();
        assert!(matches!(outcome, CalculationOutcome::Computed(_)));
    }

    #[test]
    fn error_field_is_authoritative_on_any_status() {
        for status in [200, 400, 500] {
            let outcome = interpret_response(status, r#"{"error": "bad formula"}"#).unwrap();
            assert_eq!(outcome, CalculationOutcome::Rejected("bad formula".to_string()));
        }
    }

    #[test]
    fn bad_status_without_error_field_is_a_status_failure() {
        let err = interpret_response(502, "Bad Gateway").unwrap_err();
        assert!(matches!(err, RequestError::Status(502)));
    }

    #[test]
    fn data_with_bad_status_is_a_status_failure() {
        let err = interpret_response(500, OK_BODY).unwrap_err();
        assert!(matches!(err, RequestError::Status(500)));
    }

    #[test]
    fn garbage_on_success_status_is_a_decode_failure() {
        let err = interpret_response(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }
}
