use super::error::{Error, Result};
use super::notify::{LogNotifier, Notifier, FAILURE_MESSAGE};
use super::{auth, availability, bookings, cancel, seats, stations};
use core::fmt::{self, Debug, Formatter};
use reqwest::{header::CONTENT_TYPE, Method};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use url::Url;

/// Where the booking API lives when nobody says otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client for the booking API. Cloning is cheap and shares the connection
/// pool and notifier.
#[derive(Clone)]
pub struct Client {
    /// The address every path gets appended to, without a trailing slash.
    base: String,

    /// Connection pool for outgoing requests.
    http: reqwest::Client,

    /// Who to tell when a call fails.
    notifier: Arc<dyn Notifier>,
}

impl Client {
    /// Construct a new client that reports failures to the log.
    ///
    /// ## Errors
    ///
    /// Returns `Error::Url` if `base` is not a valid URL.
    pub fn new(base: &str) -> Result<Self> {
        Self::with_notifier(base, LogNotifier)
    }

    /// Construct a new client that reports failures to `notifier`.
    ///
    /// ## Errors
    ///
    /// Returns `Error::Url` if `base` is not a valid URL.
    pub fn with_notifier<N>(base: &str, notifier: N) -> Result<Self>
    where
        N: Notifier + 'static,
    {
        Url::parse(base)?;

        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            notifier: Arc::new(notifier),
        })
    }

    /// Use a specific `reqwest` client, for example one shared with the rest
    /// of an application.
    #[must_use]
    pub fn with_http(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// The base address requests go to.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The full target for a path: the base address with `path` stuck on the
    /// end, exactly as given.
    ///
    /// ## Errors
    ///
    /// Returns `Error::Url` if the result doesn't parse.
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{path}", self.base))?)
    }

    /// Make a request and parse the JSON response. `method` is passed through
    /// verbatim, and `body` (if any) is sent as JSON.
    ///
    /// Every failure is logged, shown to the user through the notifier, and
    /// then returned. There are no retries.
    ///
    /// ## Errors
    ///
    /// - `Error::Status` if the server returned anything other than a 2xx
    /// - `Error::Http` if we couldn't reach the server
    /// - `Error::Parse` if the response body wasn't the JSON we wanted
    /// - `Error::Url`, `Error::Method` or `Error::Body` if we couldn't build
    ///   the request in the first place
    pub async fn call<B, T>(&self, path: &str, method: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.call_inner(path, method, body).await {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::error!(?err, path, method, "API Call Failed: {err}");
                self.notifier.notify(FAILURE_MESSAGE);
                Err(err)
            }
        }
    }

    /// `call` with `GET` and no body.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `call`.
    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.call::<(), T>(path, "GET", None).await
    }

    /// The actual implementation of `call`, without the failure reporting.
    async fn call_inner<B, T>(&self, path: &str, method: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| Error::Method(method.to_string()))?;

        let mut req = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            req = req.body(serde_json::to_vec(body).map_err(Error::Body)?);
        }

        let resp = req.send().await?;

        let status = resp.status();
        tracing::debug!(%status, path, "got response");

        if !status.is_success() {
            return Err(Error::status(&resp));
        }

        let bytes = resp.bytes().await?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Log in, creating the account if the server hasn't seen this email.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `call`.
    pub async fn login(&self, email: &str) -> Result<auth::Resp> {
        let req = auth::Req {
            email: email.to_string(),
        };

        self.call(auth::PATH, "POST", Some(&req)).await
    }

    /// List every station, in route order.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `call`.
    pub async fn stations(&self) -> Result<stations::Resp> {
        self.get(stations::PATH).await
    }

    /// List the seats on a bus.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `call`.
    pub async fn seats(&self, bus_id: i64) -> Result<seats::Resp> {
        self.get(&seats::path(bus_id)).await
    }

    /// Get the IDs of seats already taken for a journey.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `call`.
    pub async fn availability(&self, query: &availability::Query) -> Result<availability::Resp> {
        self.get(&query.path()).await
    }

    /// Book a seat.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `call`.
    pub async fn book(&self, req: &bookings::Req) -> Result<bookings::Booking> {
        self.call(bookings::PATH, "POST", Some(req)).await
    }

    /// List everything a user has booked, including cancelled bookings.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `call`.
    pub async fn user_bookings(&self, email: &str) -> Result<bookings::Resp> {
        self.get(&bookings::user_path(email)).await
    }

    /// Cancel a booking.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `call`. Notably, an unknown booking is a 404,
    /// so it comes back as `Error::Status("Not Found")`.
    pub async fn cancel(&self, booking_id: i64) -> Result<cancel::Resp> {
        self.call::<(), _>(&cancel::path(booking_id), "POST", None)
            .await
    }
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Client")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}
