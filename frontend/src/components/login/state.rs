use common::auth::Credentials;

pub struct LoginComponent {
    pub credentials: Credentials,
    /// Cosmetic only; the token is always persisted.
    pub remember: bool,
    /// Set while a login request is in flight; further submits are ignored.
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginComponent {
    pub fn new() -> Self {
        Self {
            credentials: Credentials::default(),
            remember: false,
            submitting: false,
            error: None,
        }
    }
}
