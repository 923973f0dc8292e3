use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Backing storage could not be read, or held a value that does not decode.
    #[error("storage read failed for key '{key}': {reason}")]
    StorageRead { key: String, reason: String },

    /// Backing storage rejected a write.
    #[error("storage write failed for key '{key}': {reason}")]
    StorageWrite { key: String, reason: String },

    /// Transport, status or decode failure talking to the catalog API.
    #[error("catalog fetch failed: {0}")]
    NetworkFetch(String),

    #[error("catalog item not found: {id}")]
    NotFound { id: String },

    /// The favorites owner task has shut down.
    #[error("favorites store is closed")]
    StoreClosed,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Credentials did not match the fixed rule.
    #[error("Login failed")]
    LoginFailed,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("prompt error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn storage_read(key: &str, reason: impl ToString) -> Self {
        Error::StorageRead {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn storage_write(key: &str, reason: impl ToString) -> Self {
        Error::StorageWrite {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkFetch(err.to_string())
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}
