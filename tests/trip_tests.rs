use taxi_backend::message::{DEFAULT_PRICE_PER_KM, TripRequest};
use taxi_backend::services::trip::{calculate_trip, haversine_km};

fn trip(from: (f64, f64), to: (f64, f64), price_per_km: f64) -> TripRequest {
    TripRequest {
        from_lat: from.0,
        from_lng: from.1,
        to_lat: to.0,
        to_lng: to.1,
        price_per_km,
    }
}

const AMSTERDAM: (f64, f64) = (52.3676, 4.9041);
const UTRECHT: (f64, f64) = (52.0907, 5.1214);

#[test]
fn test_coincident_points() {
    for rate in [0.0, 1.5, 99.0] {
        let res = calculate_trip(&trip(AMSTERDAM, AMSTERDAM, rate));
        assert_eq!(res.distance_km, 0.0);
        assert_eq!(res.duration_minutes, 0.0);
        assert_eq!(res.price, 0.0);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let there = haversine_km(AMSTERDAM.0, AMSTERDAM.1, UTRECHT.0, UTRECHT.1);
    let back = haversine_km(UTRECHT.0, UTRECHT.1, AMSTERDAM.0, AMSTERDAM.1);
    assert!((there - back).abs() < 1e-9);
}

#[test]
fn test_amsterdam_to_utrecht() {
    let res = calculate_trip(&trip(AMSTERDAM, UTRECHT, DEFAULT_PRICE_PER_KM));
    assert!((res.distance_km - 34.16).abs() < 0.1, "got {}", res.distance_km);
    assert_eq!(res.distance_km, 34.16);
    assert_eq!(res.duration_minutes, 45.5);
    assert_eq!(res.price, 51.24);
}

#[test]
fn test_price_scales_with_rate() {
    let distance = haversine_km(AMSTERDAM.0, AMSTERDAM.1, UTRECHT.0, UTRECHT.1);
    let single = calculate_trip(&trip(AMSTERDAM, UTRECHT, 1.5));
    let double = calculate_trip(&trip(AMSTERDAM, UTRECHT, 3.0));
    assert!((double.price - 2.0 * distance * 1.5).abs() < 0.01);
    // Each side is rounded separately, so allow one cent of drift.
    assert!((double.price - 2.0 * single.price).abs() < 0.011);
    assert_eq!(single.distance_km, double.distance_km);
}

#[test]
fn test_long_distance() {
    // Paris to London
    let res = calculate_trip(&trip((48.8566, 2.3522), (51.5074, -0.1278), 1.0));
    assert_eq!(res.distance_km, 343.56);
    assert_eq!(res.price, 343.56);
}
