//! Rules of the talent listing fetch.
//!
//! The fetch is split around the actual I/O:
//! - `TalentFetcher::prepare` checks the session token and builds the request
//!   body. Without a token it fails with `FetchError::Unauthenticated` and no
//!   request is ever sent.
//! - `TalentFetcher::interpret` classifies whatever the transport produced.
//!   Failures become `FetchError::Transport` with a sanitized message for the
//!   UI and the raw cause kept in `detail` for logs. A valid response with an
//!   empty `data` array is `Fetched::Empty`, which is not an error.
//!
//! There is no caching and no retry.

use thiserror::Error;

use crate::model::talent::TalentRecord;
use crate::requests::TalentListRequest;
use crate::responses::Envelope;
use crate::transport::{RawResponse, TransportFailure};

pub const FIRST_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 30;

const UNREACHABLE_MESSAGE: &str = "Unable to reach the talent service. Please try again later.";
const TIMEOUT_MESSAGE: &str = "The talent service took too long to respond. Please try again.";
const EXPIRED_MESSAGE: &str = "Your session is no longer valid. Please log in again.";
const MALFORMED_MESSAGE: &str = "The talent service returned an unexpected response.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("You are not logged in. Please log in to view talents.")]
    Unauthenticated,
    #[error("{message}")]
    Transport { message: String, detail: String },
}

impl FetchError {
    fn transport(message: impl Into<String>, detail: impl Into<String>) -> Self {
        FetchError::Transport {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Raw cause for logging, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            FetchError::Unauthenticated => None,
            FetchError::Transport { detail, .. } => Some(detail),
        }
    }
}

/// A successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    Records(Vec<TalentRecord>),
    Empty,
}

/// A request ready to be sent: the bearer credential plus the JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedFetch {
    pub token: String,
    pub request: TalentListRequest,
}

impl PreparedFetch {
    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TalentFetcher {
    page_size: u32,
}

impl Default for TalentFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TalentFetcher {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn prepare(&self, token: Option<&str>, page: u32) -> Result<PreparedFetch, FetchError> {
        let token = token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(FetchError::Unauthenticated)?;

        Ok(PreparedFetch {
            token: token.to_string(),
            request: TalentListRequest::page(page, self.page_size),
        })
    }

    pub fn interpret(
        &self,
        outcome: Result<RawResponse, TransportFailure>,
    ) -> Result<Fetched, FetchError> {
        let response = outcome.map_err(|failure| {
            let message = match failure {
                TransportFailure::Timeout { .. } => TIMEOUT_MESSAGE,
                TransportFailure::Encode(_) | TransportFailure::Network(_) => UNREACHABLE_MESSAGE,
            };
            FetchError::transport(message, failure.detail())
        })?;

        if !response.is_success() {
            let detail = format!("status {}: {}", response.status, response.body);
            return Err(match response.status {
                401 | 403 => FetchError::transport(EXPIRED_MESSAGE, detail),
                status => FetchError::transport(
                    format!("The talent service is unavailable right now (status {status})."),
                    detail,
                ),
            });
        }

        let envelope: Envelope<Vec<TalentRecord>> = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::transport(MALFORMED_MESSAGE, e.to_string()))?;

        if envelope.data.is_empty() {
            Ok(Fetched::Empty)
        } else {
            Ok(Fetched::Records(envelope.data))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ok(body: &str) -> Result<RawResponse, TransportFailure> {
        Ok(RawResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    #[test]
    fn missing_token_fails_before_any_request() {
        let fetcher = TalentFetcher::default();
        assert_eq!(fetcher.prepare(None, FIRST_PAGE), Err(FetchError::Unauthenticated));
        assert_eq!(fetcher.prepare(Some("  "), FIRST_PAGE), Err(FetchError::Unauthenticated));
    }

    #[test]
    fn prepared_request_uses_first_page_and_default_size() {
        let prepared = TalentFetcher::default().prepare(Some("tok"), 0).unwrap();
        assert_eq!(prepared.authorization(), "Bearer tok");
        assert_eq!(prepared.request.page, 1);
        assert_eq!(prepared.request.page_size, 30);
        assert!(prepared.request.positions.is_empty());

        let body = serde_json::to_value(&prepared.request).unwrap();
        assert_eq!(body["pageSize"], 30);
        assert_eq!(body["levels"], serde_json::json!([]));
    }

    #[test]
    fn empty_data_array_is_not_an_error() {
        let fetched = TalentFetcher::default().interpret(ok(r#"{"data": []}"#));
        assert_eq!(fetched, Ok(Fetched::Empty));
    }

    #[test]
    fn records_are_returned_in_order() {
        let body = include_str!("../tests/fixtures/talents.json");
        match TalentFetcher::default().interpret(ok(body)) {
            Ok(Fetched::Records(records)) => {
                let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
                assert_eq!(names, vec!["jet", "sage", "phoenix"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn textual_years_do_not_drop_the_listing() {
        let body = r#"{"data": [
            {"id": 1, "name": "jet", "email": "jett@yopmail.com", "yearsOfExperience": ""},
            {"id": 2, "name": "sage", "email": "sage@yopmail.com", "yearsOfExperience": "5"}
        ]}"#;
        match TalentFetcher::default().interpret(ok(body)) {
            Ok(Fetched::Records(records)) => {
                let years: Vec<Option<f64>> =
                    records.iter().map(|r| r.years_of_experience()).collect();
                assert_eq!(years, vec![None, Some(5.0)]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn network_failure_message_is_sanitized() {
        let err = TalentFetcher::default()
            .interpret(Err(TransportFailure::Network("network down".to_string())))
            .unwrap_err();
        assert_eq!(err.to_string(), UNREACHABLE_MESSAGE);
        assert_eq!(err.detail(), Some("network error: network down"));
    }

    #[test]
    fn timeout_maps_to_transport_error() {
        let err = TalentFetcher::default()
            .interpret(Err(TransportFailure::Timeout { after_ms: 15_000 }))
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert_eq!(err.to_string(), TIMEOUT_MESSAGE);
    }

    #[test]
    fn non_success_status_hides_server_body() {
        let err = TalentFetcher::default()
            .interpret(Ok(RawResponse {
                status: 500,
                body: "java.lang.NullPointerException at ...".to_string(),
            }))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The talent service is unavailable right now (status 500)."
        );
        assert!(err.detail().unwrap().contains("NullPointerException"));

        let expired = TalentFetcher::default()
            .interpret(Ok(RawResponse {
                status: 401,
                body: String::new(),
            }))
            .unwrap_err();
        assert_eq!(expired.to_string(), EXPIRED_MESSAGE);
    }

    #[test]
    fn malformed_body_is_a_transport_error() {
        let err = TalentFetcher::default().interpret(ok("<html>")).unwrap_err();
        assert_eq!(err.to_string(), MALFORMED_MESSAGE);
    }
}
