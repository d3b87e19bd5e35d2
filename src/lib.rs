//! Client for the dessert section of the TheMealDB recipe catalog.
//!
//! Two read-only operations are offered: listing every dessert and looking up
//! the full detail of one recipe by id.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), dessert_catalog::CatalogError> {
//! let client = dessert_catalog::RecipeClient::new()?;
//! let desserts = client.list_desserts().await?;
//! if let Some(first) = desserts.first() {
//!     let detail = client.get_detail(&first.id).await?;
//!     println!("{}: {:?}", detail.name, detail.ingredients);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod model;
pub mod uniffi_bindings;
pub mod view;

pub use builder::RecipeClientBuilder;
pub use client::{RecipeClient, RecipeSource, DESSERT_CATEGORY};
pub use config::{CatalogConfig, DEFAULT_BASE_URL};
pub use error::{CatalogError, ErrorKind};
pub use model::{RecipeDetail, RecipeSummary};

/// List desserts from the public catalog with default settings
pub async fn list_desserts() -> Result<Vec<RecipeSummary>, CatalogError> {
    RecipeClient::new()?.list_desserts().await
}

/// Look up one recipe from the public catalog with default settings
pub async fn get_recipe_detail(id: &str) -> Result<RecipeDetail, CatalogError> {
    RecipeClient::new()?.get_detail(id).await
}
