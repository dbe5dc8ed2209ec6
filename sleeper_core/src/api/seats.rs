use serde::{Deserialize, Serialize};

/// A seat (well, a berth) on a bus.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Seat {
    /// The ID to use when booking.
    pub id: i64,

    /// Which bus this seat is on.
    pub bus_id: i64,

    /// The label on the seat, like `L1` or `U10`.
    pub seat_number: String,

    /// Whether you can lie down in it.
    pub is_sleeper: bool,
}

/// Result of listing seats
pub type Resp = Vec<Seat>;

/// Where the seats endpoint lives.
pub const PATH: &str = "/bookings/seats/:bus_id";

/// Construct a path given a bus ID.
pub fn path(bus_id: i64) -> String {
    PATH.replace(":bus_id", &bus_id.to_string())
}
