use super::error::Result;
use super::navigate::{LogNavigator, Navigator, LANDING_PAGE};
use super::storage::{MemoryStorage, Storage};

/// The storage key the logged-in user's email lives under.
pub const SESSION_KEY: &str = "user_email";

/// Who is logged in. There's at most one user at a time: logging in again
/// replaces whoever was there before.
#[derive(Debug, Default)]
pub struct SessionStore<S = MemoryStorage, N = LogNavigator> {
    /// Where the session is kept.
    storage: S,

    /// Where to send the user after logging out.
    navigator: N,
}

impl<S, N> SessionStore<S, N>
where
    S: Storage,
    N: Navigator,
{
    /// Create a session store on top of some storage.
    pub fn new(storage: S, navigator: N) -> Self {
        Self { storage, navigator }
    }

    /// Remember `email` as the logged-in user. We don't check that it looks
    /// like an email.
    ///
    /// ## Errors
    ///
    /// Fails if the storage can't be written.
    pub fn login(&self, email: &str) -> Result<()> {
        tracing::info!(email, "logging in");

        self.storage.set_item(SESSION_KEY, email)
    }

    /// The logged-in user's email, exactly as it was given to `login`.
    ///
    /// ## Errors
    ///
    /// Fails if the storage can't be read.
    pub fn current_user(&self) -> Result<Option<String>> {
        self.storage.get_item(SESSION_KEY)
    }

    /// Forget the logged-in user and send them to the landing page. Treat
    /// this as the end of the current flow.
    ///
    /// ## Errors
    ///
    /// Fails if the storage can't be written. In that case we don't navigate,
    /// since the user is still logged in.
    pub fn logout(&self) -> Result<()> {
        tracing::info!("logging out");

        self.storage.remove_item(SESSION_KEY)?;
        self.navigator.navigate(LANDING_PAGE);

        Ok(())
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
