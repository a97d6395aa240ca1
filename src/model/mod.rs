//! Wire types for the car resource.

use serde::{Deserialize, Serialize};

/// A single catalog entry, exactly as the server stores it.
///
/// All fields are strings except the embedded [`Place`]; `year` and
/// `licence` carry fixed formats (`"2020/2020"`, `"ABC-1234"`) that are
/// checked client-side before submission, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub year: String,
    pub name: String,
    pub licence: String,
    pub place: Place,
}

/// Latitude/longitude pair, set once from a single map tap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub lat: f64,
    pub long: f64,
}

/// Read-one responses arrive wrapped: `{"id": ..., "value": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarEnvelope {
    pub id: String,
    pub value: Car,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Car {
        Car {
            id: "001".to_string(),
            image_url: "https://image".to_string(),
            year: "2020/2020".to_string(),
            name: "Gaspar".to_string(),
            licence: "ABC-1234".to_string(),
            place: Place { lat: 0.0, long: 0.0 },
        }
    }

    #[test]
    fn car_round_trips_through_json() {
        let car = sample();
        let json = serde_json::to_string(&car).unwrap();
        let back: Car = serde_json::from_str(&json).unwrap();
        assert_eq!(back, car);
    }

    #[test]
    fn image_url_keeps_wire_spelling() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn envelope_decodes_wrapped_car() {
        let json = r#"{"id":"001","value":{"id":"001","imageUrl":"https://image","year":"2020/2020","name":"Gaspar","licence":"ABC-1234","place":{"lat":-23.5,"long":-46.6}}}"#;
        let envelope: CarEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.id, "001");
        assert_eq!(envelope.value.name, "Gaspar");
        assert_eq!(envelope.value.place.lat, -23.5);
    }
}
