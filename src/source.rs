use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not read weather data: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
    #[error("could not download weather data: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },
}

/// Where the weather dataset comes from.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;
}

/// Serves a fixed byte buffer. Nothing is read from outside the process.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct InMemorySource {
    data: Vec<u8>,
}

#[allow(dead_code)]
impl InMemorySource {
    pub fn new(data: impl Into<Vec<u8>>) -> InMemorySource {
        InMemorySource { data: data.into() }
    }
}

#[async_trait]
impl WeatherSource for InMemorySource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        Ok(self.data.clone())
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    file_path: PathBuf,
}

impl FileSource {
    pub fn new(file_path: impl Into<PathBuf>) -> FileSource {
        FileSource {
            file_path: file_path.into(),
        }
    }
}

#[async_trait]
impl WeatherSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        Ok(fs::read(&self.file_path).await?)
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> HttpSource {
        HttpSource {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl WeatherSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Picks an http source for `http://` and `https://` locations and treats
/// anything else as a path on disk.
pub fn create_source(location: &str) -> Box<dyn WeatherSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        log::info!("reading weather data from url {}", location);
        Box::new(HttpSource::new(location))
    } else {
        log::info!("reading weather data from file {}", location);
        Box::new(FileSource::new(location))
    }
}
