use common::auth::AuthError;

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    ToggleRemember,
    Submit,
    LoginFinished(Result<String, AuthError>),
}
