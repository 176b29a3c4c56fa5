//! HTTP calls to the TalentX API.
//!
//! Requests go through `post_json`, which races the request against
//! `REQUEST_TIMEOUT_MS` and flattens whatever happened into the transport
//! types of `common`. Classification of the answer stays in `common`.

use common::auth::{interpret_login, AuthError, Credentials};
use common::fetcher::{FetchError, Fetched, TalentFetcher};
use common::transport::{RawResponse, TransportFailure};
use futures_util::future::{select, Either};
use gloo_console::{error, log};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::config::{endpoint, password_salt, PAGE_SIZE, REQUEST_TIMEOUT_MS};

const LOGIN_PATH: &str = "auth/login";
const TALENTS_PATH: &str = "talents/list";

async fn post_json<T: Serialize>(
    url: &str,
    authorization: Option<&str>,
    body: &T,
) -> Result<RawResponse, TransportFailure> {
    let mut builder = Request::post(url);
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let request = builder
        .json(body)
        .map_err(|e| TransportFailure::Encode(e.to_string()))?;

    let sending = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    let response = match select(sending, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| TransportFailure::Network(e.to_string()))?,
        Either::Right(_) => {
            return Err(TransportFailure::Timeout {
                after_ms: REQUEST_TIMEOUT_MS,
            })
        }
    };

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportFailure::Network(e.to_string()))?;
    Ok(RawResponse { status, body })
}

/// Fetches the first page of talents. Without a token no request is made.
pub async fn fetch_talents(token: Option<String>) -> Result<Fetched, FetchError> {
    let fetcher = TalentFetcher::new(PAGE_SIZE);
    let prepared = fetcher.prepare(token.as_deref(), common::fetcher::FIRST_PAGE)?;

    let url = endpoint(TALENTS_PATH);
    let outcome = post_json(&url, Some(&prepared.authorization()), &prepared.request).await;
    let result = fetcher.interpret(outcome);

    match &result {
        Ok(Fetched::Records(records)) => log!(format!("fetched {} talents", records.len())),
        Ok(Fetched::Empty) => log!("talent listing is empty"),
        Err(err) => error!(format!(
            "talent fetch failed: {}",
            err.detail().unwrap_or("no session token")
        )),
    }
    result
}

/// Sends the credentials and returns the bearer token on success.
pub async fn login(credentials: Credentials) -> Result<String, AuthError> {
    credentials.validate()?;
    let request = credentials.to_request(password_salt());

    let outcome = post_json(&endpoint(LOGIN_PATH), None, &request).await;
    let result = interpret_login(outcome);
    match &result {
        Ok(_) => log!("login accepted"),
        Err(AuthError::Transport(detail)) => error!(format!("login request failed: {detail}")),
        Err(AuthError::Rejected { status }) => log!(format!("login rejected with status {status}")),
        Err(AuthError::InvalidInput) => {}
    }
    result
}
