use crate::error::{GomiiError, Result};
use reqwest::blocking::{Client, ClientBuilder};
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("gomii-deploy/", env!("CARGO_PKG_VERSION"));

pub struct Downloader {
    client: Client,
}

impl Downloader {
    /// Builds the blocking client. `None` means the request may block forever.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = client_builder(timeout)
            .build()
            .map_err(|source| GomiiError::Client { source })?;

        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// GETs `url` and streams the body into `destination`, returning the
    /// number of bytes written.
    ///
    /// The destination is truncated or created but its directory never is.
    /// A failure while copying leaves whatever was written on disk.
    pub fn download_file(&self, url: &str, destination: &Path) -> Result<u64> {
        let download_error = |source| GomiiError::Download {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(download_error)?;
        debug!(
            status = %response.status(),
            content_length = ?response.content_length(),
            "response received from {url}"
        );
        let mut response = response.error_for_status().map_err(download_error)?;

        let mut file = File::create(destination).map_err(|source| GomiiError::Save {
            path: destination.to_path_buf(),
            source,
        })?;

        let written = io::copy(&mut response, &mut file).map_err(|source| GomiiError::Write {
            path: destination.to_path_buf(),
            source,
        })?;

        debug!("wrote {written} bytes to {}", destination.display());
        Ok(written)
    }
}

/// Client settings shared by every request: identifying user agent and the
/// whole-request timeout.
pub(crate) fn client_builder(timeout: Option<Duration>) -> ClientBuilder {
    Client::builder().user_agent(USER_AGENT).timeout(timeout)
}
