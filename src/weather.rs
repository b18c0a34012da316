use askama::Template;
use serde::Deserialize;
use serde_json::{Map, Value};

pub const NAIROBI_IMAGE: &str = "images/nairobi.jpg";
pub const ARUSHA_IMAGE: &str = "images/arusha.jpg";
pub const KAMPALA_IMAGE: &str = "images/kampala.jpg";
pub const DEFAULT_IMAGE: &str = "images/default.jpg";

/// Decorative image for a city. Only exact matches on the known names count.
pub fn image_for_city(city: &str) -> &'static str {
    match city {
        "Nairobi" => NAIROBI_IMAGE,
        "Arusha" => ARUSHA_IMAGE,
        "Kampala" => KAMPALA_IMAGE,
        _ => DEFAULT_IMAGE,
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MainReadings {
    pub temp: f64, // Celsius
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Condition {
    pub description: String,
}

/// One city's entry in the dataset. Everything else in the payload is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub name: String,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
}

impl WeatherRecord {
    pub fn from_value(value: &Value) -> Result<WeatherRecord, serde_json::Error> {
        WeatherRecord::deserialize(value)
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// City name to raw record, in the order the cities appear in the document.
///
/// Records are only decoded when asked for, so a bad record is noticed when
/// its city is reached rather than up front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherDataset {
    cities: Map<String, Value>,
}

impl WeatherDataset {
    pub fn from_slice(data: &[u8]) -> Result<WeatherDataset, serde_json::Error> {
        Ok(WeatherDataset {
            cities: serde_json::from_slice(data)?,
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cities.iter().map(|(city, value)| (city.as_str(), value))
    }
}

#[derive(Template)]
#[template(path = "fragment.html")]
pub struct CityFragment<'a> {
    pub image_url: &'a str,
    pub name: &'a str,
    pub temperature: f64,
    pub description: &'a str,
}
