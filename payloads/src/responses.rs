//! Response bodies as served by the backend.
//!
//! The backend is loose about a couple of fields (capacity arrives as
//! either a JSON string or a number, weather conditions as an empty
//! string when absent), so those are normalized here at the boundary
//! rather than letting the looseness reach UI state.

use crate::{ImageId, ImageType, InspectionId, RecordId, WeatherCondition};
use jiff::{Timestamp, civil};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// The admin that uploaded a record or conducted an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminIdentity {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

impl AdminIdentity {
    /// Name to show in the UI: display name when set, username otherwise.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: ImageId,
    /// Server-relative path; resolve with `APIClient::image_url`.
    pub file_path: String,
    #[serde(rename = "type")]
    pub image_type: ImageType,
    #[serde(default, deserialize_with = "weather_from_wire")]
    pub weather_condition: Option<WeatherCondition>,
    pub upload_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformerRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub location_lat: Option<f64>,
    #[serde(default)]
    pub location_lng: Option<f64>,
    #[serde(default, deserialize_with = "capacity_from_wire")]
    pub capacity: Option<Decimal>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub uploaded_by: Option<AdminIdentity>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub id: InspectionId,
    pub transformer_record_id: RecordId,
    pub inspection_date: civil::Date,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub images: Vec<Image>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub conducted_by: Option<AdminIdentity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminIdentity,
}

/// Capacity is serialized upstream as either a number or a numeric
/// string. Empty or unparseable values are treated as not present.
fn capacity_from_wire<'de, D>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(Decimal),
        Text(String),
    }

    Ok(match Option::<Wire>::deserialize(deserializer)? {
        None => None,
        Some(Wire::Number(n)) => Some(n),
        Some(Wire::Text(s)) => s.trim().parse().ok(),
    })
}

/// Weather conditions arrive as an empty string for non-baseline images.
fn weather_from_wire<'de, D>(
    deserializer: D,
) -> Result<Option<WeatherCondition>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn capacity_accepts_number_or_string() {
        let base = |capacity: &str| {
            format!(
                r#"{{"id":1,"name":"T1","capacity":{capacity},
                    "createdAt":"2024-05-01T10:00:00Z"}}"#
            )
        };

        let record: TransformerRecord =
            serde_json::from_str(&base("120")).unwrap();
        assert_eq!(record.capacity, Some(dec!(120)));

        let record: TransformerRecord =
            serde_json::from_str(&base("\"62.5\"")).unwrap();
        assert_eq!(record.capacity, Some(dec!(62.5)));

        let record: TransformerRecord =
            serde_json::from_str(&base("\"\"")).unwrap();
        assert_eq!(record.capacity, None);

        let record: TransformerRecord =
            serde_json::from_str(&base("null")).unwrap();
        assert_eq!(record.capacity, None);
    }

    #[test]
    fn capacity_defaults_to_none_when_absent() {
        let record: TransformerRecord = serde_json::from_str(
            r#"{"id":1,"name":"T1","createdAt":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(record.capacity, None);
        assert!(record.images.is_empty());
        assert_eq!(record.uploaded_by, None);
    }

    #[test]
    fn image_weather_normalizes_empty_string() {
        let image: Image = serde_json::from_str(
            r#"{"id":7,"filePath":"/uploads/7.jpg","type":"Maintenance",
                "weatherCondition":"",
                "uploadTime":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(image.weather_condition, None);

        let image: Image = serde_json::from_str(
            r#"{"id":8,"filePath":"/uploads/8.jpg","type":"Baseline",
                "weatherCondition":"Sunny",
                "uploadTime":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(image.weather_condition, Some(WeatherCondition::Sunny));
        assert_eq!(image.image_type, ImageType::Baseline);
    }

    #[test]
    fn unknown_weather_is_rejected() {
        let result = serde_json::from_str::<Image>(
            r#"{"id":9,"filePath":"/uploads/9.jpg","type":"Baseline",
                "weatherCondition":"Foggy",
                "uploadTime":"2024-05-01T10:00:00Z"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn display_label_falls_back_to_username() {
        let admin = AdminIdentity {
            id: 1,
            username: "ops".into(),
            display_name: None,
        };
        assert_eq!(admin.display_label(), "ops");

        let admin = AdminIdentity {
            id: 1,
            username: "ops".into(),
            display_name: Some("Operations".into()),
        };
        assert_eq!(admin.display_label(), "Operations");
    }
}
