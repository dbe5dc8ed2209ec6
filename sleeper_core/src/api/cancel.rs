use serde::{Deserialize, Serialize};

/// Confirmation that the booking was cancelled.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resp {
    /// What the server had to say about it.
    pub message: String,
}

/// Where the cancel endpoint lives.
pub const PATH: &str = "/bookings/cancel/:id";

/// Construct a path given a booking ID.
pub fn path(id: i64) -> String {
    PATH.replace(":id", &id.to_string())
}
