use thiserror::Error;

/// Errors that can occur while talking to the recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request could not be sent or no response was received
    #[error("Request to recipe catalog failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The catalog answered with a non-2xx status
    #[error("Recipe catalog returned unexpected status {status}")]
    UnexpectedStatus { status: u16, body: Option<String> },

    /// A response arrived but carried no body
    #[error("Recipe catalog returned an empty response")]
    EmptyResponse,

    /// The body does not have the expected JSON shape
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Well-formed response, but the requested recipe is absent
    #[error("No recipe detail found for id '{0}'")]
    NotFound(String),

    /// Base URL could not be parsed
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Ingredient slot count must be at least one
    #[error("Ingredient slot count must be at least 1, got {0}")]
    InvalidSlots(usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Coarse category of a [`CatalogError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    UnexpectedStatus,
    EmptyResponse,
    Decode,
    NotFound,
    Setup,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Transport(_) => ErrorKind::Transport,
            CatalogError::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            CatalogError::EmptyResponse => ErrorKind::EmptyResponse,
            CatalogError::Decode(_) => ErrorKind::Decode,
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::InvalidBaseUrl { .. }
            | CatalogError::ClientBuild(_)
            | CatalogError::InvalidSlots(_)
            | CatalogError::Config(_) => ErrorKind::Setup,
        }
    }
}
