//! Login form rules.
//!
//! Credentials are validated client-side first, then the password is salted
//! and hashed before it leaves the browser. The auth endpoint answers with
//! `{ "data": { "jwt_token": "…" } }`; anything else counts as a rejection.

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::requests::LoginRequest;
use crate::responses::{Envelope, LoginPayload};
use crate::transport::{RawResponse, TransportFailure};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email format or password. Please try again!")]
    InvalidInput,
    #[error("Invalid email format or password. Please try again!")]
    Rejected { status: u16 },
    #[error("Unable to reach the server. Please try again.")]
    Transport(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Rejects malformed emails and passwords shorter than [`MIN_PASSWORD_LEN`].
    pub fn validate(&self) -> Result<(), AuthError> {
        if is_valid_email(self.email.trim()) && self.password.chars().count() >= MIN_PASSWORD_LEN {
            Ok(())
        } else {
            Err(AuthError::InvalidInput)
        }
    }

    /// Builds the wire request, replacing the password by its salted hash.
    pub fn to_request(&self, salt: &str) -> LoginRequest {
        LoginRequest {
            username: self.email.trim().to_string(),
            password: hash_password(salt, &self.password),
        }
    }
}

/// Lowercase hex SHA-256 of `salt` followed by `password`.
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Extracts the bearer token from the auth endpoint's answer.
pub fn interpret_login(outcome: Result<RawResponse, TransportFailure>) -> Result<String, AuthError> {
    let response = outcome.map_err(|failure| AuthError::Transport(failure.detail()))?;
    if !response.is_success() {
        return Err(AuthError::Rejected {
            status: response.status,
        });
    }

    serde_json::from_str::<Envelope<LoginPayload>>(&response.body)
        .ok()
        .and_then(|envelope| envelope.data.jwt_token)
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::Rejected {
            status: response.status,
        })
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, rest)| !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INVALID_CREDENTIALS: &str = "Invalid email format or password. Please try again!";

    #[test]
    fn validation_requires_email_shape_and_password_length() {
        assert_eq!(Credentials::new("khoa.tran@yopmail.com", "@Abc123456").validate(), Ok(()));
        assert_eq!(
            Credentials::new("khoa.tran@yopmail.com", "short").validate(),
            Err(AuthError::InvalidInput)
        );
        for email in ["", "no-at-sign", "@yopmail.com", "a@b", "a@.com", "a@b.", "a b@c.com"] {
            assert_eq!(
                Credentials::new(email, "long enough").validate(),
                Err(AuthError::InvalidInput),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn request_never_carries_the_plain_password() {
        let request = Credentials::new(" khoa.tran@yopmail.com ", "@Abc123456").to_request("pepper");
        assert_eq!(request.username, "khoa.tran@yopmail.com");
        assert_ne!(request.password, "@Abc123456");
        assert_eq!(request.password, hash_password("pepper", "@Abc123456"));
        assert_eq!(request.password.len(), 64);
    }

    #[test]
    fn hash_is_salt_dependent() {
        assert_ne!(hash_password("a", "secret123"), hash_password("b", "secret123"));
        assert_eq!(
            hash_password("", "abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn token_is_read_from_the_envelope() {
        let outcome = Ok(RawResponse {
            status: 200,
            body: r#"{"data": {"jwt_token": "eyJ.abc"}}"#.to_string(),
        });
        assert_eq!(interpret_login(outcome), Ok("eyJ.abc".to_string()));
    }

    #[test]
    fn missing_token_or_error_status_is_a_rejection() {
        let missing = Ok(RawResponse {
            status: 200,
            body: r#"{"data": {}}"#.to_string(),
        });
        assert_eq!(interpret_login(missing), Err(AuthError::Rejected { status: 200 }));

        let unauthorized = Ok(RawResponse {
            status: 401,
            body: "bad credentials".to_string(),
        });
        let err = interpret_login(unauthorized).unwrap_err();
        assert_eq!(err, AuthError::Rejected { status: 401 });
        assert_eq!(err.to_string(), INVALID_CREDENTIALS);
    }

    #[test]
    fn transport_failure_keeps_detail_out_of_the_message() {
        let err = interpret_login(Err(TransportFailure::Network("dns".to_string()))).unwrap_err();
        assert_eq!(err.to_string(), "Unable to reach the server. Please try again.");
    }
}
