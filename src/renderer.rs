use askama::Template;
use thiserror::Error;

use crate::document::Document;
use crate::source::{FetchError, WeatherSource};
use crate::weather::{CityFragment, WeatherDataset, WeatherRecord, image_for_city};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{source}")]
    Fetch {
        #[from]
        source: FetchError,
    },
    #[error("invalid weather data: {source}")]
    InvalidDataset {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid weather record for {city}: {source}")]
    InvalidRecord {
        city: String,
        source: serde_json::Error,
    },
    #[error("no weather condition for {city}")]
    MissingCondition { city: String },
    #[error("no page element with id {id}")]
    MissingElement { id: String },
    #[error("could not render fragment: {source}")]
    Template {
        #[from]
        source: askama::Error,
    },
}

pub struct WeatherRenderer {
    source: Box<dyn WeatherSource>,
}

impl WeatherRenderer {
    pub fn new(source: Box<dyn WeatherSource>) -> WeatherRenderer {
        WeatherRenderer { source }
    }

    /// Fetches the dataset and writes every city into its page element.
    ///
    /// Failure is reported once, as a single error log line. Cities handled
    /// before the failure keep their new content.
    pub async fn render(&self, document: &mut dyn Document) {
        match self.try_render(document).await {
            Ok(count) => log::info!("rendered weather for {} cities", count),
            Err(error) => log::error!("Error fetching weather data: {}", error),
        }
    }

    /// Like [`WeatherRenderer::render`] but hands the error back. Returns how
    /// many cities were written.
    pub async fn try_render(&self, document: &mut dyn Document) -> Result<usize, RenderError> {
        let data = self.source.fetch().await?;
        let dataset = WeatherDataset::from_slice(&data)?;

        let mut rendered = 0;
        for (city, value) in dataset.entries() {
            let record =
                WeatherRecord::from_value(value).map_err(|source| RenderError::InvalidRecord {
                    city: city.to_string(),
                    source,
                })?;
            let fragment = render_fragment(city, &record)?;

            let id = city.to_lowercase();
            let element = document
                .get_element_by_id(&id)
                .ok_or_else(|| RenderError::MissingElement { id: id.clone() })?;
            element.set_inner_html(fragment);

            log::debug!("rendered weather for {} into #{}", city, id);
            rendered += 1;
        }
        Ok(rendered)
    }
}

fn render_fragment(city: &str, record: &WeatherRecord) -> Result<String, RenderError> {
    let condition = record
        .condition()
        .ok_or_else(|| RenderError::MissingCondition {
            city: city.to_string(),
        })?;
    let fragment = CityFragment {
        image_url: image_for_city(city),
        name: &record.name,
        temperature: record.main.temp,
        description: &condition.description,
    };
    Ok(fragment.render()?)
}
