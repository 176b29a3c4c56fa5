use serde::Deserialize;

/// Every endpoint wraps its payload in a `data` field.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
}

/// Payload of a successful login.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginPayload {
    #[serde(default)]
    pub jwt_token: Option<String>,
}
