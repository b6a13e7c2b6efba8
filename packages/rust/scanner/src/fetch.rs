//! Recommendation page fetcher.
//!
//! One HTTP GET per visited appid against the store's "more like this"
//! endpoint. Fetch failures are signalled as [`ScanError::Network`] and
//! absorbed by the traversal engine — they never abort a scan.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use similarscan_shared::{AppId, Result, ScanError};

/// Browser-like User-Agent; the store only serves the full similar-items
/// markup to browser clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/115.0 Safari/537.36";

/// URL prefix for recommendation pages; the appid is appended.
const RECOMMEND_URL_BASE: &str = "https://store.steampowered.com/recommended/morelike/app/";

/// Fetches the raw markup of one recommendation page per appid.
///
/// Constructor-injected into the traversal engine so tests can drive the
/// engine with canned pages.
pub trait PageFetcher {
    /// Fetch the recommendation page for `appid`, returning the body text.
    fn fetch(&self, appid: AppId) -> impl Future<Output = Result<String>>;
}

/// HTTP fetcher backed by a shared `reqwest` client.
pub struct HttpFetcher {
    client: Client,
    base: String,
}

impl HttpFetcher {
    /// Create a fetcher targeting the live store.
    pub fn new() -> Result<Self> {
        Self::with_base(RECOMMEND_URL_BASE.to_string())
    }

    /// Create a fetcher with an alternate URL prefix (mock servers in tests).
    pub fn with_base(base: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ScanError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base })
    }

    /// Recommendation page URL for an appid.
    fn page_url(&self, appid: AppId) -> String {
        format!("{}{appid}/", self.base)
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, appid: AppId) -> Result<String> {
        let url = self.page_url(appid);
        debug!(%appid, url, "fetching recommendation page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ScanError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Network(format!("{url}: HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| ScanError::Network(format!("{url}: body read failed: {e}")))
    }
}
