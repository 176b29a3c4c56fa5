//! Boundary between the pure request/response rules and the code doing I/O.
//!
//! The browser side sends the request and hands back either a `RawResponse`
//! or a `TransportFailure`; `fetcher` and `auth` classify the result.

/// Status and body of a completed HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why no response was obtained at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// The request could not be built (payload serialization failed).
    Encode(String),
    /// The network layer reported an error.
    Network(String),
    /// No response arrived before the timeout.
    Timeout { after_ms: u32 },
}

impl TransportFailure {
    /// Raw description for logs. Never shown to users.
    pub fn detail(&self) -> String {
        match self {
            TransportFailure::Encode(detail) => format!("request encoding failed: {detail}"),
            TransportFailure::Network(detail) => format!("network error: {detail}"),
            TransportFailure::Timeout { after_ms } => {
                format!("no response after {after_ms} ms")
            }
        }
    }
}
