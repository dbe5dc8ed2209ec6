use serde::{Deserialize, Serialize};

/// A stop along the route.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Station {
    /// The ID to use when booking.
    pub id: i64,

    /// Human-readable name, e.g. "Surat".
    pub name: String,

    /// Position along the route. Journeys only go from lower to higher.
    pub order: i64,
}

/// Result of listing stations
pub type Resp = Vec<Station>;

/// Where the stations endpoint lives.
pub const PATH: &str = "/stations/";
