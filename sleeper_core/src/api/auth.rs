use serde::{Deserialize, Serialize};

/// The request to log in.
#[derive(Debug, Serialize, Deserialize)]
pub struct Req {
    /// Email to log in as. The server creates the account if it's new.
    pub email: String,
}

/// An account on the server.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct User {
    /// The server's ID for this account.
    pub id: i64,

    /// The email the account was created with.
    pub email: String,
}

/// Result of logging in.
pub type Resp = User;

/// Where the login endpoint lives.
pub const PATH: &str = "/auth/login";
