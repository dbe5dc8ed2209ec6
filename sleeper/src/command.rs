use crate::landing::Landing;
use chrono::NaiveDate;
use clap::Subcommand;
use serde_json::{json, Value};
use sleeper_core::api::{self, availability, bookings, Client};
use sleeper_core::session::{self, FileStorage, SessionStore};

/// Connections to the outside world that commands use.
pub struct Context {
    /// The booking API
    pub api: Client,

    /// Who is logged in
    pub session: SessionStore<FileStorage, Landing>,
}

/// Things you can ask for on the command line.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in (signing up if this email is new) and remember who you are
    Login {
        /// The email to log in as
        email: String,
    },

    /// Show who is logged in
    Whoami,

    /// Forget who is logged in
    Logout,

    /// List the stations along the route
    Stations,

    /// List the seats on a bus
    Seats {
        /// Which bus
        bus_id: i64,
    },

    /// Show which seats are already taken for a journey
    Availability {
        /// Station ID to board at
        #[clap(long)]
        from: i64,

        /// Station ID to get off at
        #[clap(long)]
        to: i64,

        /// Day of travel (YYYY-MM-DD)
        #[clap(long)]
        date: NaiveDate,
    },

    /// Book a seat for the logged-in user
    Book {
        /// Station ID to board at
        #[clap(long)]
        from: i64,

        /// Station ID to get off at
        #[clap(long)]
        to: i64,

        /// Seat ID to book
        #[clap(long)]
        seat: i64,

        /// Day of travel (YYYY-MM-DD)
        #[clap(long)]
        date: NaiveDate,

        /// Meal preference: Veg, Non-Veg, Jain or None
        #[clap(long, default_value = "None")]
        meal: String,
    },

    /// List the logged-in user's bookings
    Bookings,

    /// Cancel a booking
    Cancel {
        /// Which booking
        booking_id: i64,
    },

    /// Call any endpoint and print the JSON that comes back
    Call {
        /// Path to append to the base URL, e.g. `/stations/`
        path: String,

        /// HTTP method, passed through as-is
        #[clap(long, short = 'X', default_value = "GET")]
        method: String,

        /// JSON request body
        #[clap(long, short)]
        body: Option<String>,
    },
}

impl Command {
    /// Run the command, returning what to print (if anything.)
    ///
    /// ## Errors
    ///
    /// See `Problem`.
    pub async fn run(self, ctx: &Context) -> Result<Option<Value>, Problem> {
        match self {
            Self::Login { email } => {
                let user = ctx.api.login(&email).await?;
                ctx.session.login(&email)?;

                Ok(Some(serde_json::to_value(user)?))
            }

            Self::Whoami => Ok(Some(json!({ "email": ctx.session.current_user()? }))),

            Self::Logout => {
                ctx.session.logout()?;

                Ok(None)
            }

            Self::Stations => Ok(Some(serde_json::to_value(ctx.api.stations().await?)?)),

            Self::Seats { bus_id } => Ok(Some(serde_json::to_value(ctx.api.seats(bus_id).await?)?)),

            Self::Availability { from, to, date } => {
                let query = availability::Query {
                    source_id: from,
                    dest_id: to,
                    date,
                };

                Ok(Some(serde_json::to_value(
                    ctx.api.availability(&query).await?,
                )?))
            }

            Self::Book {
                from,
                to,
                seat,
                date,
                meal,
            } => {
                let req = bookings::Req {
                    user_email: Self::logged_in(ctx)?,
                    source_station_id: from,
                    dest_station_id: to,
                    seat_id: seat,
                    travel_date: date,
                    meal_choice: meal,
                };

                Ok(Some(serde_json::to_value(ctx.api.book(&req).await?)?))
            }

            Self::Bookings => {
                let email = Self::logged_in(ctx)?;

                Ok(Some(serde_json::to_value(
                    ctx.api.user_bookings(&email).await?,
                )?))
            }

            Self::Cancel { booking_id } => {
                Ok(Some(serde_json::to_value(ctx.api.cancel(booking_id).await?)?))
            }

            Self::Call { path, method, body } => {
                let body: Option<Value> = body.as_deref().map(serde_json::from_str).transpose()?;

                let resp: Value = ctx.api.call(&path, &method, body.as_ref()).await?;

                Ok(Some(resp))
            }
        }
    }

    /// The logged-in user's email, or a problem saying nobody is.
    fn logged_in(ctx: &Context) -> Result<String, Problem> {
        ctx.session.current_user()?.ok_or(Problem::NotLoggedIn)
    }
}

/// Problems that can happen while running a `Command`.
#[derive(Debug, thiserror::Error)]
pub enum Problem {
    /// We had a problem communicating with the server.
    #[error("{0}")]
    Api(#[from] api::Error),

    /// We couldn't read or write who is logged in.
    #[error("Problem with the saved session: {0}")]
    Session(#[from] session::Error),

    /// We had a problem reading or writing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The command needs a logged-in user and there isn't one.
    #[error("Not logged in. Run `sleeper login <email>` first.")]
    NotLoggedIn,
}
