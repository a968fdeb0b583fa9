use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod listing;
pub mod pending;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

/// Maximum accepted size for a single image file, checked client-side
/// before the file is read into memory.
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

macro_rules! id_type {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            derive_more::Display,
            derive_more::FromStr,
        )]
        pub struct $name(pub i64);
    };
}

id_type!(RecordId);
id_type!(ImageId);
id_type!(InspectionId);

/// Classification of an uploaded image. Baseline images additionally
/// require a weather condition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
pub enum ImageType {
    #[default]
    Baseline,
    Maintenance,
}

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::Maintenance => "Maintenance",
        }
    }

    pub const ALL: [ImageType; 2] = [Self::Baseline, Self::Maintenance];
}

/// Weather at the time a baseline image was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
        }
    }

    pub const ALL: [WeatherCondition; 3] =
        [Self::Sunny, Self::Cloudy, Self::Rainy];
}

impl std::str::FromStr for WeatherCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sunny" => Ok(Self::Sunny),
            "Cloudy" => Ok(Self::Cloudy),
            "Rainy" => Ok(Self::Rainy),
            other => Err(format!("unknown weather condition: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_parses_exact_names_only() {
        for w in WeatherCondition::ALL {
            assert_eq!(w.as_str().parse::<WeatherCondition>(), Ok(w));
        }
        // The weather select's placeholder carries an empty value; it
        // must never parse into a condition.
        assert!("".parse::<WeatherCondition>().is_err());
        assert!("sunny".parse::<WeatherCondition>().is_err());
        assert!("Foggy".parse::<WeatherCondition>().is_err());
    }
}
