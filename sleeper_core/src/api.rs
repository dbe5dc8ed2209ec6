/// Things that can go wrong in the API
pub mod error;
pub use error::Error;

/// The client that makes every request
pub mod client;
pub use client::Client;

/// Telling the user that something went wrong
pub mod notify;
pub use notify::Notifier;

/// Log in (and sign up, the server doesn't distinguish)
pub mod auth;

/// Stations along the route
pub mod stations;

/// Seats on a bus
pub mod seats;

/// Which seats are taken for a journey
pub mod availability;

/// Make and list bookings
pub mod bookings;

/// Cancel a booking
pub mod cancel;
