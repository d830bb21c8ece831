use axum::Json;

use crate::{
    error::AppJson,
    message::{TripRequest, TripResponse},
    services::trip::calculate_trip,
};

pub async fn calculate_trip_handler(AppJson(payload): AppJson<TripRequest>) -> Json<TripResponse> {
    Json(calculate_trip(&payload))
}
