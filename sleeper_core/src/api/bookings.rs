use super::seats::Seat;
use super::stations::Station;
use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// The request to book a seat.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Req {
    /// Who the booking is for.
    pub user_email: String,

    /// Where the passenger gets on.
    pub source_station_id: i64,

    /// Where the passenger gets off.
    pub dest_station_id: i64,

    /// Which seat to book.
    pub seat_id: i64,

    /// Day of travel.
    pub travel_date: NaiveDate,

    /// Meal preference. The server expects one of `Veg`, `Non-Veg`, `Jain`
    /// or `None`, but doesn't enforce it.
    pub meal_choice: String,
}

/// Where a booking stands.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// The seat is held for the passenger.
    Confirmed,

    /// The passenger gave the seat up.
    Cancelled,

    /// Something newer than this client knows about.
    #[serde(untagged)]
    Other(String),
}

/// A booking, as the server sees it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Booking {
    /// The ID to use when cancelling.
    pub id: i64,

    /// Whether the booking still holds a seat.
    pub status: Status,

    /// The server's guess at how likely this booking is to be confirmed, from
    /// 0 to 1.
    pub p_success: f64,

    /// Everything that was asked for when booking.
    #[serde(flatten)]
    pub details: Req,

    /// The boarding station, when the server includes it.
    #[serde(default)]
    pub source_station: Option<Station>,

    /// The destination station, when the server includes it.
    #[serde(default)]
    pub dest_station: Option<Station>,

    /// The seat, when the server includes it.
    #[serde(default)]
    pub seat: Option<Seat>,
}

/// Result of listing a user's bookings
pub type Resp = Vec<Booking>;

/// Where the booking endpoint lives.
pub const PATH: &str = "/bookings/";

/// Where a user's bookings live.
pub const USER_PATH: &str = "/bookings/user/:email";

/// Characters that can't appear as-is in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Construct the path to a user's bookings. The email is percent-encoded so
/// that it stays one path segment and arrives unchanged.
pub fn user_path(email: &str) -> String {
    USER_PATH.replace(":email", &utf8_percent_encode(email, PATH_SEGMENT).to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::{availability, cancel, notify::FAILURE_MESSAGE, Client, Error};
    use crate::test_util::{serve, Recorder};
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn booking_json(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "status": status,
            "p_success": 0.85,
            "user_email": "a@x.com",
            "source_station_id": 1,
            "dest_station_id": 6,
            "seat_id": 3,
            "travel_date": "2024-03-09",
            "meal_choice": "Veg",
            "source_station": {"id": 1, "name": "Ahmedabad", "order": 1},
            "dest_station": {"id": 6, "name": "Mumbai", "order": 6},
            "seat": {"id": 3, "bus_id": 1, "seat_number": "L2", "is_sleeper": true},
        })
    }

    fn router() -> Router {
        Router::new()
            .route(
                "/auth/login",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({"id": 7, "email": body["email"]}))
                }),
            )
            .route(
                "/stations/",
                get(|| async {
                    Json(json!([
                        {"id": 1, "name": "Ahmedabad", "order": 1},
                        {"id": 2, "name": "Vadodara", "order": 2},
                    ]))
                }),
            )
            .route(
                "/bookings/seats/:bus_id",
                get(|Path(bus_id): Path<i64>| async move {
                    Json(json!([
                        {"id": 1, "bus_id": bus_id, "seat_number": "L1", "is_sleeper": true},
                    ]))
                }),
            )
            .route(
                "/bookings/availability",
                get(|Query(query): Query<HashMap<String, String>>| async move {
                    if query.get("date").map(String::as_str) == Some("2024-03-09") {
                        Json(json!([3, 4]))
                    } else {
                        Json(json!([]))
                    }
                }),
            )
            .route(
                "/bookings/",
                post(|Json(mut booking): Json<Value>| async move {
                    booking["id"] = json!(11);
                    booking["status"] = json!("CONFIRMED");
                    booking["p_success"] = json!(0.5);
                    Json(booking)
                }),
            )
            .route(
                "/bookings/user/:email",
                get(|Path(email): Path<String>| async move {
                    if email == "a+b@x.com" {
                        Json(json!([booking_json(1, "CONFIRMED"), booking_json(2, "CANCELLED")]))
                    } else if email == "a b@x.com" {
                        Json(json!([booking_json(3, "CONFIRMED")]))
                    } else {
                        Json(json!([]))
                    }
                }),
            )
            .route(
                "/bookings/cancel/:id",
                post(|Path(id): Path<i64>| async move {
                    if id == 1 {
                        Ok(Json(json!({"message": "Booking cancelled successfully"})))
                    } else {
                        Err((StatusCode::NOT_FOUND, Json(json!({"detail": "Booking not found"}))))
                    }
                }),
            )
    }

    async fn client() -> (Client, Recorder) {
        let recorder = Recorder::default();
        let client = Client::with_notifier(&serve(router()).await, recorder.clone()).unwrap();

        (client, recorder)
    }

    fn travel_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn user_path_keeps_email_in_one_segment() {
        assert_eq!(user_path("a/b@x.com"), "/bookings/user/a%2Fb@x.com");
    }

    #[test]
    fn user_path_encodes_spaces_as_spaces() {
        assert_eq!(user_path("a b@x.com"), "/bookings/user/a%20b@x.com");
    }

    #[test]
    fn user_path_leaves_plus_alone() {
        assert_eq!(user_path("a+b@x.com"), "/bookings/user/a+b@x.com");
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status: Status = serde_json::from_value(json!("WAITLISTED")).unwrap();

        assert_eq!(status, Status::Other("WAITLISTED".to_string()));
    }

    #[test]
    fn known_status_round_trips_as_uppercase() {
        assert_eq!(
            serde_json::to_value(Status::Cancelled).unwrap(),
            json!("CANCELLED")
        );
    }

    #[test]
    fn booking_without_relations_parses() {
        let mut value = booking_json(1, "CONFIRMED");
        let object = value.as_object_mut().unwrap();
        object.remove("seat");
        object.remove("source_station");
        object.remove("dest_station");

        let booking: Booking = serde_json::from_value(value).unwrap();

        assert_eq!(booking.seat, None);
        assert_eq!(booking.details.seat_id, 3);
    }

    #[test_log::test(tokio::test)]
    async fn login_returns_user() {
        let (client, _) = client().await;

        let user = client.login("a@x.com").await.unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.email, "a@x.com");
    }

    #[test_log::test(tokio::test)]
    async fn stations_are_listed() {
        let (client, _) = client().await;

        let stations = client.stations().await.unwrap();

        assert_eq!(
            stations.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["Ahmedabad", "Vadodara"]
        );
    }

    #[test_log::test(tokio::test)]
    async fn seats_are_listed_for_bus() {
        let (client, _) = client().await;

        let seats = client.seats(4).await.unwrap();

        assert_eq!(seats[0].bus_id, 4);
    }

    #[test_log::test(tokio::test)]
    async fn availability_sends_journey() {
        let (client, _) = client().await;

        let taken = client
            .availability(&availability::Query {
                source_id: 1,
                dest_id: 6,
                date: travel_date(),
            })
            .await
            .unwrap();

        assert_eq!(taken, vec![3, 4]);
    }

    #[test_log::test(tokio::test)]
    async fn book_returns_confirmed_booking() {
        let (client, _) = client().await;

        let req = Req {
            user_email: "a@x.com".to_string(),
            source_station_id: 1,
            dest_station_id: 6,
            seat_id: 3,
            travel_date: travel_date(),
            meal_choice: "Jain".to_string(),
        };

        let booking = client.book(&req).await.unwrap();

        assert_eq!(booking.id, 11);
        assert_eq!(booking.status, Status::Confirmed);
        assert_eq!(booking.details, req);
    }

    #[test_log::test(tokio::test)]
    async fn user_bookings_decode_email() {
        let (client, _) = client().await;

        let bookings = client.user_bookings("a+b@x.com").await.unwrap();

        assert_eq!(
            bookings.iter().map(|b| &b.status).collect::<Vec<_>>(),
            vec![&Status::Confirmed, &Status::Cancelled]
        );
    }

    #[test_log::test(tokio::test)]
    async fn user_bookings_keep_spaces_in_email() {
        let (client, _) = client().await;

        let bookings = client.user_bookings("a b@x.com").await.unwrap();

        assert_eq!(
            bookings.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![3]
        );
    }

    #[test_log::test(tokio::test)]
    async fn cancel_confirms() {
        let (client, recorder) = client().await;

        let resp = client.cancel(1).await.unwrap();

        assert_eq!(
            resp,
            cancel::Resp {
                message: "Booking cancelled successfully".to_string()
            }
        );
        assert!(recorder.messages().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn cancel_unknown_booking_fails() {
        let (client, recorder) = client().await;

        let err = client.cancel(99).await.unwrap_err();

        assert_eq!(err.to_string(), "API Error: Not Found");
        assert!(matches!(err, Error::Status(_)));
        assert_eq!(recorder.messages(), vec![FAILURE_MESSAGE.to_string()]);
    }
}
