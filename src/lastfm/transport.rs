use std::time::Duration;

use reqwest::blocking::Client;

use crate::{error::SyncError, types::QueryParams};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Only 200 counts as success.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Synchronous GET used by [`super::LastFmApi`].
pub trait Transport {
    fn get(
        &self,
        url: &str,
        params: &QueryParams,
        timeout: Duration,
    ) -> Result<HttpResponse, SyncError>;
}

/// Blocking reqwest client. Network and timeout errors become `LookupFailure`.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the blocking client with a `lastfm-sync/<version>` user agent.
    ///
    /// # Errors
    ///
    /// `LookupFailure` if the TLS backend or client cannot be initialized.
    pub fn new() -> Result<Self, SyncError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(
        &self,
        url: &str,
        params: &QueryParams,
        timeout: Duration,
    ) -> Result<HttpResponse, SyncError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .timeout(timeout)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(HttpResponse { status, body })
    }
}
