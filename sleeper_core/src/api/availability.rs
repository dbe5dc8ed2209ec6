use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// A journey to check seats for.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct Query {
    /// Station the journey starts at.
    pub source_id: i64,

    /// Station the journey ends at.
    pub dest_id: i64,

    /// Day of travel.
    pub date: NaiveDate,
}

impl Query {
    /// The path (including query string) to ask about this journey.
    pub fn path(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("source_id", &self.source_id.to_string())
            .append_pair("dest_id", &self.dest_id.to_string())
            .append_pair("date", &self.date.format("%Y-%m-%d").to_string())
            .finish();

        format!("{PATH}?{query}")
    }
}

/// IDs of seats that are already booked for some part of the journey. The
/// server returns an empty list for journeys that don't make sense (unknown
/// stations, or going backwards.)
pub type Resp = Vec<i64>;

/// Where the availability endpoint lives.
pub const PATH: &str = "/bookings/availability";
