use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while processing requests. Every one of these goes
/// through the same failure path in `Client::call`: logged, shown to the user,
/// and handed back to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The method wasn't a valid HTTP token.
    #[error("invalid HTTP method: {0:?}")]
    Method(String),

    /// We couldn't turn the request body into JSON.
    #[error("could not encode request body: {0}")]
    Body(#[source] serde_json::Error),

    /// We couldn't talk to the server at all, for example if it was down or
    /// the connection dropped partway through.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with something other than a 2xx. The message is
    /// the status text.
    #[error("API Error: {0}")]
    Status(String),

    /// The server said OK but the body wasn't the JSON we expected.
    #[error("could not parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// Build a status error from a failed response. The message is the reason
    /// phrase the server sent, if it sent a non-standard one. Otherwise it's
    /// the standard phrase for the code ("Internal Server Error"), or just
    /// the code if there isn't one.
    pub fn status(resp: &reqwest::Response) -> Self {
        let reason = resp
            .extensions()
            .get::<ReasonPhrase>()
            .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned());

        Self::status_text(resp.status(), reason)
    }

    /// Build a status error from a code and whatever reason phrase came with
    /// it.
    pub fn status_text(status: StatusCode, reason: Option<String>) -> Self {
        Self::Status(reason.unwrap_or_else(|| {
            status
                .canonical_reason()
                .map_or_else(|| status.as_str().to_string(), str::to_string)
        }))
    }
}
