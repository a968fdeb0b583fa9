//! State machine for the upload/edit form's pending image slots.
//!
//! Each slot collects a file, a type, and (for baseline images) a
//! weather condition. The whole set is validated together with the
//! record's scalar fields before anything touches the network.

use crate::{ImageType, WeatherCondition};

/// A browser file that has been read into memory, ready for multipart
/// submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub file: Option<FileHandle>,
    pub image_type: ImageType,
    pub weather_condition: Option<WeatherCondition>,
}

impl Default for PendingImage {
    fn default() -> Self {
        Self {
            file: None,
            image_type: ImageType::Baseline,
            weather_condition: None,
        }
    }
}

/// Whether the form is creating a new record or editing an existing
/// one. When creating, at least one slot must remain; when editing,
/// new images are optional and all slots may be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Ordered list of pending image slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImages {
    mode: FormMode,
    slots: Vec<PendingImage>,
}

impl PendingImages {
    pub fn new(mode: FormMode) -> Self {
        let slots = match mode {
            FormMode::Create => vec![PendingImage::default()],
            FormMode::Edit => vec![],
        };
        Self { mode, slots }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn slots(&self) -> &[PendingImage] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn add_slot(&mut self) {
        self.slots.push(PendingImage::default());
    }

    /// Removes slot `index`. A no-op when out of range, or when it is
    /// the only remaining slot in create mode.
    pub fn remove_slot(&mut self, index: usize) {
        if index >= self.slots.len() {
            return;
        }
        if self.mode == FormMode::Create && self.slots.len() == 1 {
            return;
        }
        self.slots.remove(index);
    }

    pub fn set_file(&mut self, index: usize, file: FileHandle) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.file = Some(file);
        }
    }

    /// Switching to baseline initializes weather to a valid default if
    /// unset; switching away clears it.
    pub fn set_image_type(&mut self, index: usize, image_type: ImageType) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.image_type = image_type;
            match image_type {
                ImageType::Baseline => {
                    slot.weather_condition
                        .get_or_insert(WeatherCondition::Sunny);
                }
                ImageType::Maintenance => {
                    slot.weather_condition = None;
                }
            }
        }
    }

    pub fn set_weather(&mut self, index: usize, weather: WeatherCondition) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.weather_condition = Some(weather);
        }
    }

    /// Resets to the post-submit state for the current mode.
    pub fn clear(&mut self) {
        *self = Self::new(self.mode);
    }
}

/// Every validation violation found on submit, aggregated into one
/// message. Slots are referenced 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", problems.join("; "))]
pub struct FormError {
    pub problems: Vec<String>,
}

/// Validate the record's scalar fields together with the pending image
/// slots. Any violation aborts submission before any network call.
pub fn validate_record_form(
    name: &str,
    location: Option<&crate::requests::Location>,
    capacity: &str,
    pending: &PendingImages,
) -> Result<(), FormError> {
    let mut problems = Vec::new();

    if name.trim().is_empty() {
        problems.push("Name is required".to_string());
    }
    if location.is_none() {
        problems.push("Location is required".to_string());
    }
    if capacity.trim().is_empty() {
        problems.push("Capacity is required".to_string());
    }

    for (i, slot) in pending.slots().iter().enumerate() {
        let n = i + 1;
        if slot.file.is_none() {
            problems.push(format!("Image {n}: file is required"));
        }
        if slot.image_type == ImageType::Baseline
            && slot.weather_condition.is_none()
        {
            problems.push(format!(
                "Image {n}: weather condition is required for baseline images"
            ));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(FormError { problems })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::Location;

    fn file(name: &str) -> FileHandle {
        FileHandle {
            name: name.to_string(),
            bytes: vec![0xff, 0xd8],
        }
    }

    fn location() -> Location {
        Location {
            name: "Depot".into(),
            lat: Some(6.9271),
            lng: Some(79.8612),
        }
    }

    #[test]
    fn create_mode_starts_with_one_slot_and_keeps_it() {
        let mut pending = PendingImages::new(FormMode::Create);
        assert_eq!(pending.slots().len(), 1);

        // The last remaining slot cannot be removed when creating.
        pending.remove_slot(0);
        assert_eq!(pending.slots().len(), 1);

        pending.add_slot();
        pending.remove_slot(1);
        assert_eq!(pending.slots().len(), 1);

        // Out of range is a no-op.
        pending.remove_slot(5);
        assert_eq!(pending.slots().len(), 1);
    }

    #[test]
    fn edit_mode_allows_removing_every_slot() {
        let mut pending = PendingImages::new(FormMode::Edit);
        assert!(pending.is_empty());

        pending.add_slot();
        pending.remove_slot(0);
        assert!(pending.is_empty());
    }

    #[test]
    fn switching_type_manages_weather() {
        let mut pending = PendingImages::new(FormMode::Create);

        pending.set_image_type(0, ImageType::Maintenance);
        assert_eq!(pending.slots()[0].weather_condition, None);

        // Switching to baseline initializes a valid default.
        pending.set_image_type(0, ImageType::Baseline);
        assert_eq!(
            pending.slots()[0].weather_condition,
            Some(WeatherCondition::Sunny)
        );

        // Switching away clears even an explicit choice.
        pending.set_weather(0, WeatherCondition::Rainy);
        pending.set_image_type(0, ImageType::Maintenance);
        assert_eq!(pending.slots()[0].weather_condition, None);
    }

    #[test]
    fn baseline_without_weather_blocks_submission() {
        let mut pending = PendingImages::new(FormMode::Create);
        pending.set_file(0, file("a.jpg"));
        pending.add_slot();
        pending.set_file(1, file("b.jpg"));
        pending.set_image_type(1, ImageType::Maintenance);

        // Slot 1 is baseline with no weather selected.
        let err = validate_record_form(
            "T-100",
            Some(&location()),
            "120",
            &pending,
        )
        .unwrap_err();
        assert_eq!(err.problems.len(), 1);
        assert!(err.problems[0].contains("Image 1"));
        assert!(err.to_string().contains("weather condition"));
    }

    #[test]
    fn scalar_fields_are_required() {
        let pending = PendingImages::new(FormMode::Edit);
        let err =
            validate_record_form("  ", None, "", &pending).unwrap_err();
        assert_eq!(
            err.problems,
            [
                "Name is required",
                "Location is required",
                "Capacity is required"
            ]
        );
    }

    #[test]
    fn missing_file_is_reported_per_slot() {
        let mut pending = PendingImages::new(FormMode::Edit);
        pending.add_slot();
        pending.set_weather(0, WeatherCondition::Cloudy);
        pending.add_slot();
        pending.set_file(1, file("b.jpg"));
        pending.set_weather(1, WeatherCondition::Cloudy);

        let err = validate_record_form(
            "T-100",
            Some(&location()),
            "120",
            &pending,
        )
        .unwrap_err();
        assert_eq!(err.problems, ["Image 1: file is required"]);
    }

    #[test]
    fn valid_form_passes() {
        let mut pending = PendingImages::new(FormMode::Create);
        pending.set_file(0, file("a.jpg"));
        pending.set_weather(0, WeatherCondition::Sunny);

        validate_record_form("T-100", Some(&location()), "120", &pending)
            .unwrap();

        // Edit mode with no pending slots is also valid.
        let pending = PendingImages::new(FormMode::Edit);
        validate_record_form("T-100", Some(&location()), "120", &pending)
            .unwrap();
    }

    #[test]
    fn clear_resets_to_post_submit_state() {
        let mut pending = PendingImages::new(FormMode::Create);
        pending.set_file(0, file("a.jpg"));
        pending.add_slot();
        pending.clear();
        assert_eq!(pending.slots().len(), 1);
        assert_eq!(pending.slots()[0], PendingImage::default());

        let mut pending = PendingImages::new(FormMode::Edit);
        pending.add_slot();
        pending.clear();
        assert!(pending.is_empty());
    }
}
