use std::fmt::Debug;
use std::time::Duration;

/// The public E-utilities endpoint.
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

/// Value of the `tool` parameter identifying this client to NCBI.
pub const DEFAULT_TOOL: &str = "varinsight";

// NCBI allows 3 requests per second without an API key and 10 with one.
const ANONYMOUS_INTERVAL: Duration = Duration::from_millis(334);
const KEYED_INTERVAL: Duration = Duration::from_millis(100);

/// Builder for [`EutilsConfig`].
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct EutilsConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    email: Option<String>,
    tool: Option<String>,
    min_interval: Option<Duration>,
}

impl EutilsConfigBuilder {
    /// Creates a builder with every option unset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom base URL.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the NCBI API key, which also raises the request rate ceiling.
    #[inline]
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the contact email sent along with every request.
    #[inline]
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Overrides the `tool` parameter.
    #[inline]
    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Overrides the minimum interval between two requests.
    ///
    /// `Duration::ZERO` disables rate limiting.
    #[inline]
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = Some(min_interval);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> EutilsConfig {
        let mut base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let min_interval = self.min_interval.unwrap_or(match self.api_key {
            Some(_) => KEYED_INTERVAL,
            None => ANONYMOUS_INTERVAL,
        });
        EutilsConfig {
            base_url,
            api_key: self.api_key,
            email: self.email,
            tool: self.tool.unwrap_or_else(|| DEFAULT_TOOL.to_owned()),
            min_interval,
        }
    }
}

impl Debug for EutilsConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EutilsConfigBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .field("tool", &self.tool)
            .field("min_interval", &self.min_interval)
            .finish()
    }
}

/// Configuration for the HTTP transport.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EutilsConfig {
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) tool: String,
    pub(crate) min_interval: Duration,
}

impl EutilsConfig {
    /// Returns the base URL, always ending with `/`.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the minimum interval between two requests.
    #[inline]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Parameters appended to every request so NCBI can identify the caller.
    pub(crate) fn etiquette_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("tool".to_owned(), self.tool.clone())];
        if let Some(email) = &self.email {
            params.push(("email".to_owned(), email.clone()));
        }
        if let Some(api_key) = &self.api_key {
            params.push(("api_key".to_owned(), api_key.clone()));
        }
        params
    }
}

impl Default for EutilsConfig {
    #[inline]
    fn default() -> Self {
        EutilsConfigBuilder::new().build()
    }
}

impl Debug for EutilsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EutilsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .field("tool", &self.tool)
            .field("min_interval", &self.min_interval)
            .finish()
    }
}
