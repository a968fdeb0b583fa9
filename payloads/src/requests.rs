use crate::pending::PendingImage;
use crate::{InspectionId, RecordId};
use jiff::civil;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// A `{name, lat, lng}` triple produced by the location picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Scalar fields plus validated pending images for a record create or
/// update. Serialized as one multipart payload: the scalar parts, then
/// per image one `images` file part with parallel `types` and
/// `weatherConditions` text parts (empty string for non-baseline).
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRecord {
    pub name: String,
    pub location: Location,
    pub capacity: String,
    pub images: Vec<PendingImage>,
}

/// Multipart payload for creating an inspection under a record.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInspection {
    pub transformer_record_id: RecordId,
    pub inspection_date: civil::Date,
    pub notes: String,
    pub images: Vec<crate::pending::FileHandle>,
}

/// Multipart payload for appending images to an existing inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadInspectionImages {
    pub inspection_id: InspectionId,
    pub images: Vec<crate::pending::FileHandle>,
}
