use std::fmt;
use std::time::Duration;

/// Deadline of a `GenerateObject` call.
pub const DEFAULT_UNARY_TIMEOUT: Duration = Duration::from_secs(10);
/// Deadline of a whole `StreamGeneratedObjects` call, every item included.
pub const DEFAULT_STREAM_TIMEOUT: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the service lives and how to authenticate against it.
///
/// ```rust
/// use objectweaver::client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("localhost:2008", "my-api-key")
///     .with_stream_timeout(Duration::from_secs(60));
///
/// assert_eq!(config.endpoint(), "http://localhost:2008");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
    connect_timeout: Duration,
    unary_timeout: Duration,
    stream_timeout: Duration,
}

impl ClientConfig {
    /// `base_url` may omit the scheme, plain `http` is assumed then.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            unary_timeout: DEFAULT_UNARY_TIMEOUT,
            stream_timeout: DEFAULT_STREAM_TIMEOUT,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_unary_timeout(mut self, timeout: Duration) -> Self {
        self.unary_timeout = timeout;
        self
    }

    pub fn with_stream_timeout(mut self, timeout: Duration) -> Self {
        self.stream_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The URI connections are opened to.
    pub fn endpoint(&self) -> String {
        if self.base_url.contains("://") {
            self.base_url.clone()
        } else {
            format!("http://{}", self.base_url)
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn unary_timeout(&self) -> Duration {
        self.unary_timeout
    }

    pub fn stream_timeout(&self) -> Duration {
        self.stream_timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("connect_timeout", &self.connect_timeout)
            .field("unary_timeout", &self.unary_timeout)
            .field("stream_timeout", &self.stream_timeout)
            .finish()
    }
}
