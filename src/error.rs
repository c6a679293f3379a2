use thiserror::Error;

/// Failures raised by a [`Transport`](crate::services::transport::Transport)
/// before any response text exists.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("access to {0} was denied")]
    AccessDenied(String),
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("unsupported url scheme `{0}`")]
    UnsupportedScheme(String),
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl TransportError {
    pub fn is_access_denied(&self) -> bool {
        matches!(self, TransportError::AccessDenied(_))
    }
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("invalid resource locator `{locator}`: {source}")]
    Locator {
        locator: String,
        #[source]
        source: url::ParseError,
    },
    #[error("reading {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },
    #[error("reading {url} returned status {status}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
}

impl ReadError {
    /// Whatever text the request held when it failed.
    ///
    /// A status failure still carries the response body. Every other failure
    /// yields an empty string.
    pub fn into_text(self) -> String {
        match self {
            ReadError::Status { body, .. } => body,
            _ => String::new(),
        }
    }
}

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("failed to parse {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid METADATA_BASE_URL `{value}`: {source}")]
    BaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("current directory cannot be used as a base url: {0}")]
    WorkingDir(String),
    #[error("invalid METADATA_TIMEOUT_SECS `{0}`")]
    Timeout(String),
}
