//! Single-GET fetch layer for the location feed.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Request, Response};

/// Transport seam for the feed fetch. Tests substitute a canned-response
/// implementation so the pipeline runs without a network.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

/// Plain [`reqwest`] client, the one implementation used outside tests.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: Request) -> reqwest::Result<Response> {
        self.0.execute(req).await
    }
}

/// Fetches the full text body from `url` with a single GET.
///
/// A non-success HTTP status is an error; there is no retry and no
/// streaming. The body is decoded as UTF-8 text.
pub async fn fetch_text<C: HttpClient>(client: &C, url: &str) -> Result<String> {
    let req = Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.text().await?)
}
