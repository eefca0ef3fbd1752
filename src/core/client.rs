//! Public client surface + builder.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::GwError;

/// Identifying UA; NewsAPI rejects anonymous clients on some plans.
pub(crate) const USER_AGENT: &str = concat!("goldwire/", env!("CARGO_PKG_VERSION"));

/// Google generative-language API base (model paths are appended).
pub(crate) const DEFAULT_BASE_GEMINI: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// NewsAPI base (endpoint paths are appended).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/v2/";

/// Overall per-request deadline. Generation calls routinely take tens of seconds.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection establishment deadline.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable holding the Gemini API key for [`GwClient::from_env`].
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable holding the NewsAPI key for [`GwClient::from_env`].
pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";

/// Shared HTTP client plus endpoint configuration.
///
/// Cloning is cheap; all clones share the same connection pool.
#[derive(Clone)]
pub struct GwClient {
    http: Client,
    base_gemini: Url,
    base_news: Url,
    gemini_api_key: String,
    news_api_key: String,
}

impl std::fmt::Debug for GwClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // API keys stay out of debug output.
        f.debug_struct("GwClient")
            .field("base_gemini", &self.base_gemini.as_str())
            .field("base_news", &self.base_news.as_str())
            .finish_non_exhaustive()
    }
}

impl GwClient {
    /// Create a new builder.
    pub fn builder() -> GwClientBuilder {
        GwClientBuilder::default()
    }

    /// Build a client with keys read from `GEMINI_API_KEY` and `NEWS_API_KEY`.
    ///
    /// # Errors
    /// Returns [`GwError::Config`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self, GwError> {
        let gemini = std::env::var(GEMINI_API_KEY_VAR)
            .map_err(|_| GwError::Config(format!("{GEMINI_API_KEY_VAR} is not set")))?;
        let news = std::env::var(NEWS_API_KEY_VAR)
            .map_err(|_| GwError::Config(format!("{NEWS_API_KEY_VAR} is not set")))?;
        Self::builder()
            .gemini_api_key(gemini)
            .news_api_key(news)
            .build()
    }

    /* -------- internal getters used by the endpoint modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_gemini(&self) -> &Url {
        &self.base_gemini
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }
    pub(crate) fn news_api_key(&self) -> &str {
        &self.news_api_key
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct GwClientBuilder {
    gemini_api_key: Option<String>,
    news_api_key: Option<String>,
    base_gemini: Option<Url>,
    base_news: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl GwClientBuilder {
    /// Set the Gemini API key (required).
    pub fn gemini_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    /// Set the NewsAPI key (required).
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Override the generative-language API base (e.g., `https://generativelanguage.googleapis.com/v1beta/`).
    pub fn base_gemini(mut self, url: Url) -> Self {
        self.base_gemini = Some(url);
        self
    }

    /// Override the NewsAPI base (e.g., `https://newsapi.org/v2/`).
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: 30s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: 10s.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns [`GwError::Config`] if a required key is missing or empty,
    /// or [`GwError::Http`] if the underlying HTTP client fails to build.
    pub fn build(self) -> Result<GwClient, GwError> {
        let gemini_api_key = self
            .gemini_api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GwError::Config("gemini_api_key is required".into()))?;
        let news_api_key = self
            .news_api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GwError::Config("news_api_key is required".into()))?;

        let base_gemini = match self.base_gemini {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_GEMINI)?,
        };
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .build()?;

        Ok(GwClient {
            http,
            base_gemini,
            base_news,
            gemini_api_key,
            news_api_key,
        })
    }
}
