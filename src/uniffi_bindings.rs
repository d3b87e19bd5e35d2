//! UniFFI bindings for dessert-catalog
//!
//! FFI-compatible types and functions for the iOS and Android apps. Each call
//! wraps the async client in its own tokio runtime; the host app runs it off
//! its UI thread and hands the result back to it.

use std::fmt;
use std::time::Duration;

use crate::view::sort_by_name;
use crate::{CatalogError, ErrorKind, RecipeClient, RecipeDetail, RecipeSummary};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeSummary {
    pub id: String,
    pub name: String,
}

impl From<RecipeSummary> for FfiRecipeSummary {
    fn from(summary: RecipeSummary) -> Self {
        FfiRecipeSummary {
            id: summary.id,
            name: summary.name,
        }
    }
}

/// FFI-compatible recipe detail
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeDetail {
    pub name: String,
    pub instructions: String,
    /// `"<measure> <ingredient>"` lines in slot order
    pub ingredients: Vec<String>,
}

impl From<RecipeDetail> for FfiRecipeDetail {
    fn from(detail: RecipeDetail) -> Self {
        FfiRecipeDetail {
            name: detail.name,
            instructions: detail.instructions,
            ingredients: detail.ingredients,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiCatalogError {
    /// Request could not be sent or no response was received
    Transport { message: String },
    /// Non-2xx response
    UnexpectedStatus { status: u16 },
    /// Response without a body
    EmptyResponse,
    /// Body was not the expected JSON shape
    Decode { message: String },
    /// No recipe with the requested id
    NotFound { id: String },
    /// Client could not be configured
    Setup { message: String },
    /// Runtime error (tokio)
    Runtime { message: String },
}

impl fmt::Display for FfiCatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiCatalogError::Transport { message } => write!(f, "Network error: {}", message),
            FfiCatalogError::UnexpectedStatus { status } => {
                write!(f, "Server returned status {}", status)
            }
            FfiCatalogError::EmptyResponse => write!(f, "No data"),
            FfiCatalogError::Decode { message } => write!(f, "Decode error: {}", message),
            FfiCatalogError::NotFound { .. } => write!(f, "No recipe detail found"),
            FfiCatalogError::Setup { message } => write!(f, "Setup error: {}", message),
            FfiCatalogError::Runtime { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiCatalogError {}

impl From<CatalogError> for FfiCatalogError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnexpectedStatus { status, .. } => {
                FfiCatalogError::UnexpectedStatus { status }
            }
            CatalogError::NotFound(id) => FfiCatalogError::NotFound { id },
            other => {
                let message = other.to_string();
                match other.kind() {
                    ErrorKind::Transport => FfiCatalogError::Transport { message },
                    ErrorKind::EmptyResponse => FfiCatalogError::EmptyResponse,
                    ErrorKind::Decode => FfiCatalogError::Decode { message },
                    _ => FfiCatalogError::Setup { message },
                }
            }
        }
    }
}

/// Optional client overrides
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiClientConfig {
    /// Catalog root URL (public catalog if not specified)
    pub base_url: Option<String>,
    /// Timeout in seconds (transport default if not specified)
    pub timeout_seconds: Option<u64>,
    /// Ingredient slots to read (5 if not specified)
    pub ingredient_slots: Option<u32>,
}

fn create_client(config: Option<FfiClientConfig>) -> Result<RecipeClient, FfiCatalogError> {
    let config = config.unwrap_or_default();
    let mut builder = RecipeClient::builder();

    if let Some(base_url) = config.base_url {
        builder = builder.base_url(base_url);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    if let Some(slots) = config.ingredient_slots {
        builder = builder.ingredient_slots(slots as usize);
    }

    Ok(builder.build()?)
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiCatalogError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiCatalogError::Runtime {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// List every dessert, sorted by name for display
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_desserts(
    config: Option<FfiClientConfig>,
) -> Result<Vec<FfiRecipeSummary>, FfiCatalogError> {
    let client = create_client(config)?;
    let rt = create_runtime()?;
    let mut recipes = rt.block_on(client.list_desserts())?;
    sort_by_name(&mut recipes);
    Ok(recipes.into_iter().map(Into::into).collect())
}

/// Fetch the detail of one recipe
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_recipe_detail(
    id: String,
    config: Option<FfiClientConfig>,
) -> Result<FfiRecipeDetail, FfiCatalogError> {
    let client = create_client(config)?;
    let rt = create_runtime()?;
    let detail = rt.block_on(client.get_detail(&id))?;
    Ok(detail.into())
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
