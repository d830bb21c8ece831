// src/message.rs
use serde::{Deserialize, Deserializer, Serialize, de};

pub const DEFAULT_PRICE_PER_KM: f64 = 1.5;

fn default_price_per_km() -> f64 {
    DEFAULT_PRICE_PER_KM
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accepts a JSON number or a string holding a finite number, e.g. `"52.3676"`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(raw) => match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(de::Error::custom(format!("expected a number, got \"{raw}\""))),
        },
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    #[serde(deserialize_with = "lenient_f64")]
    pub from_lat: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub from_lng: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub to_lat: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub to_lng: f64,
    #[serde(default = "default_price_per_km", deserialize_with = "lenient_f64")]
    pub price_per_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResponse {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub price: f64,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_request_takes_numeric_strings() {
        let req: TripRequest = serde_json::from_str(
            r#"{"from_lat": " 52.5 ", "from_lng": 4, "to_lat": "-1e1", "to_lng": 0.25}"#,
        )
        .unwrap();
        assert_eq!(req.from_lat, 52.5);
        assert_eq!(req.from_lng, 4.0);
        assert_eq!(req.to_lat, -10.0);
        assert_eq!(req.price_per_km, DEFAULT_PRICE_PER_KM);
    }

    #[test]
    fn trip_request_rejects_non_numbers() {
        for bad in ["\"north\"", "\"NaN\"", "\"inf\"", "true", "null"] {
            let body = format!(
                r#"{{"from_lat": {bad}, "from_lng": 4.9, "to_lat": 52.0, "to_lng": 5.1}}"#
            );
            assert!(serde_json::from_str::<TripRequest>(&body).is_err(), "{bad} was accepted");
        }
    }
}
