// src/services/trip.rs
use crate::message::{TripRequest, TripResponse};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average city-ride speed used for the duration estimate.
pub const AVERAGE_SPEED_KMH: f64 = 45.0;

/// Great-circle distance in km between two points given in degrees.
pub fn haversine_km(from_lat: f64, from_lng: f64, to_lat: f64, to_lng: f64) -> f64 {
    let phi1 = from_lat.to_radians();
    let phi2 = to_lat.to_radians();
    let d_phi = (to_lat - from_lat).to_radians();
    let d_lambda = (to_lng - from_lng).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

pub fn estimate_duration_minutes(distance_km: f64) -> f64 {
    if distance_km > 0.0 {
        distance_km / AVERAGE_SPEED_KMH * 60.0
    } else {
        0.0
    }
}

/// Rounds half away from zero on the scaled binary value. Exact ties such as
/// 127.535 go up (127.54), where a half-to-even rounding would give 127.53.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn calculate_trip(req: &TripRequest) -> TripResponse {
    let distance = haversine_km(req.from_lat, req.from_lng, req.to_lat, req.to_lng);
    let duration_minutes = estimate_duration_minutes(distance);
    let price = distance * req.price_per_km;

    tracing::debug!(distance, duration_minutes, price, "trip calculated");

    TripResponse {
        distance_km: round_to(distance, 2),
        duration_minutes: round_to(duration_minutes, 1),
        price: round_to(price, 2),
    }
}
