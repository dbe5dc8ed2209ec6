/// Things that can go wrong while reading or writing the session
pub mod error;
pub use error::Error;

/// Where session data is kept
pub mod storage;
pub use storage::{FileStorage, MemoryStorage, Storage};

/// Where users go when they log out
pub mod navigate;
pub use navigate::Navigator;

/// Logging in and out
pub mod store;
pub use store::SessionStore;
