//! HTTP utilities for downloading the Inno Setup installer.
//!
//! Redirects are followed by hand so the hop count can be capped and each
//! hop logged; the client itself never follows a `Location` header.

use crate::error::{ActionError, ErrorExt, Result};
use reqwest::{header::LOCATION, redirect::Policy};
use std::{future::Future, path::Path};
use tokio::io::AsyncWriteExt;
use url::Url;

/// Maximum number of redirects followed before giving up.
pub const MAX_REDIRECTS: usize = 5;

/// Fetches a URL into a file on disk.
pub trait Downloader {
    /// Download `url` to `dest`, returning the number of bytes written.
    fn download(&self, url: &str, dest: &Path) -> impl Future<Output = Result<u64>> + Send;
}

/// Production downloader backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: reqwest::Client,
    max_redirects: usize,
}

impl HttpDownloader {
    /// Create a downloader with the default redirect cap.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client))
    }

    /// Wrap an existing client.
    ///
    /// The client must be built with `redirect::Policy::none()`; redirects it
    /// follows on its own bypass the hop cap.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            max_redirects: MAX_REDIRECTS,
        }
    }

    /// Resolve the redirect chain starting at `url` and return the final response.
    async fn resolve(&self, url: &str) -> Result<reqwest::Response> {
        let mut current = Url::parse(url)?;
        let mut redirects = 0;

        loop {
            if redirects > self.max_redirects {
                return Err(ActionError::TooManyRedirects);
            }

            let response = self.client.get(current.clone()).send().await?;
            let status = response.status();

            if status.is_redirection()
                && let Some(location) = response.headers().get(LOCATION)
            {
                let location = location.to_str().map_err(|e| {
                    ActionError::GenericError(format!("Invalid redirect location: {}", e))
                })?;
                let next = current.join(location)?;
                log::debug!("Redirect {} -> {} ({})", current, next, status);
                current = next;
                redirects += 1;
                continue;
            }

            if !status.is_success() {
                return Err(ActionError::DownloadStatus {
                    status: status.as_u16(),
                });
            }

            return Ok(response);
        }
    }
}

impl Downloader for HttpDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        log::info!("Downloading {}", url);

        let mut response = self.resolve(url).await?;

        let mut file = tokio::fs::File::create(dest)
            .await
            .fs_context("creating download file", dest)?;
        let mut written: u64 = 0;

        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk)
                .await
                .fs_context("writing download file", dest)?;
            written += chunk.len() as u64;
        }
        file.flush().await.fs_context("flushing download file", dest)?;

        log::debug!("Wrote {} bytes to {}", written, dest.display());
        Ok(written)
    }
}
