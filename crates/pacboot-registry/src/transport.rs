use std::io::Write;
use std::time::Duration;

use pacboot_constants::{CONNECT_TIMEOUT_SECS, USER_AGENT};
use pacboot_error::{BootstrapError, Result};

/// Network access used by the bootstrap. Every call blocks until the
/// transfer finishes; there is no retry.
pub trait Transport: Send + Sync {
    /// GET `url` and return the body as text.
    fn fetch_text(&self, url: &str) -> Result<String>;

    /// GET `url` and stream the body into `writer`. Returns the byte count.
    fn download(&self, url: &str, writer: &mut dyn Write) -> Result<u64>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(None)
            .build()
            .map_err(|e| BootstrapError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let resp = self.client.get(url).send().map_err(|e| {
            BootstrapError::Network(if e.is_connect() {
                format!("Connection failed for {url}: {e}")
            } else if e.is_timeout() {
                format!("Request timeout for {url}")
            } else {
                format!("Request error for {url}: {e}")
            })
        })?;

        resp.error_for_status()
            .map_err(|e| BootstrapError::Network(format!("HTTP error for {url}: {e}")))
    }
}

impl Transport for HttpTransport {
    fn fetch_text(&self, url: &str) -> Result<String> {
        self.get(url)?
            .text()
            .map_err(|e| BootstrapError::Network(format!("Failed to read response for {url}: {e}")))
    }

    fn download(&self, url: &str, writer: &mut dyn Write) -> Result<u64> {
        let mut resp = self.get(url)?;
        resp.copy_to(writer)
            .map_err(|e| BootstrapError::Network(format!("Failed to download {url}: {e}")))
    }
}
