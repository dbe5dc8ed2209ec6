//! Client-side pieces for the sleeper bus booking service: a JSON API client
//! and the little bit of session state that remembers who is logged in.

/// Talk to the booking API.
pub mod api;
pub use api::Client;

/// Remember the logged-in user between runs.
pub mod session;
pub use session::SessionStore;

/// Helpers for tests that need a server or want to see what was reported.
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;
