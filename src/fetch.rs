//! HTTP page fetching.
//!
//! One GET per page with the configured user agent and timeout, redirects
//! followed. A 403 gets its own error variant because callers handle it by
//! asking for the page source to be pasted in by hand.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::FetchSettings;
use crate::encoding;
use crate::url_utils::absolute_url;

/// Redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Instructions shown when a site refuses the fetcher.
pub const MANUAL_PASTE_HELP: &str = "\
The site refused the request (403 Forbidden).

Paste the HTML in manually instead:
1. Open the page in your browser
2. Right-click and choose View page source
3. Select all (Ctrl/Cmd+A) and copy
4. Save it to a file and pass it with --html (or pipe it in with --html -)";

/// Errors that can occur during fetching
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("403 Forbidden: {url}")]
    Forbidden { url: String },
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// The page must be supplied by hand.
    #[must_use]
    pub fn needs_manual_paste(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }

    fn from_status(status: StatusCode, url: &Url) -> Option<Self> {
        if status.is_success() {
            None
        } else if status == StatusCode::FORBIDDEN {
            Some(Self::Forbidden {
                url: url.to_string(),
            })
        } else {
            Some(Self::Status {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }
}

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects
    pub final_url: Url,
    /// HTTP status code
    pub status: u16,
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
    /// Raw response body
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Body decoded to UTF-8, trusting the header charset before any
    /// in-document declaration.
    #[must_use]
    pub fn text(&self) -> String {
        let declared = self
            .content_type
            .as_deref()
            .and_then(encoding::charset_from_content_type);
        encoding::decode_html(&self.body, declared)
    }
}

/// Page fetcher
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build a fetcher from settings.
    ///
    /// # Errors
    ///
    /// [`FetchError::Http`] if the HTTP client cannot be constructed.
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(&settings.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch `url`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] unless `url` is absolute http(s)
    /// - [`FetchError::Forbidden`] on 403
    /// - [`FetchError::Status`] on any other non-2xx status
    /// - [`FetchError::Http`] on transport failure or timeout
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let url = absolute_url(url).ok_or_else(|| FetchError::InvalidUrl(url.trim().to_string()))?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let final_url = response.url().clone();
        debug!(%url, %final_url, status = status.as_u16(), "fetched");

        if let Some(err) = FetchError::from_status(status, &final_url) {
            return Err(err);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(FetchedPage {
            final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
