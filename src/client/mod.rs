use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::builder::RecipeClientBuilder;
use crate::decode::{decode_detail, decode_summaries};
use crate::error::CatalogError;
use crate::model::{RecipeDetail, RecipeSummary};

/// Category value the filter endpoint is queried with
pub const DESSERT_CATEGORY: &str = "Dessert";

const FILTER_ENDPOINT: &str = "filter.php";
const LOOKUP_ENDPOINT: &str = "lookup.php";

/// Read-only access to the recipe catalog.
///
/// This is what the presentation layer depends on. Every call resolves exactly
/// once, with either the decoded value or a [`CatalogError`].
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// All dessert summaries, in upstream order
    async fn list_desserts(&self) -> Result<Vec<RecipeSummary>, CatalogError>;

    /// Full detail for one recipe id
    async fn get_detail(&self, id: &str) -> Result<RecipeDetail, CatalogError>;
}

/// Async HTTP client for the catalog.
///
/// Holds no mutable state, so clones can be used from any number of tasks at
/// once. Each operation issues exactly one GET request.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    client: Client,
    base_url: String,
    ingredient_slots: usize,
}

impl RecipeClient {
    /// Client with default settings against the public catalog
    pub fn new() -> Result<Self, CatalogError> {
        RecipeClientBuilder::default().build()
    }

    pub fn builder() -> RecipeClientBuilder {
        RecipeClientBuilder::default()
    }

    pub(crate) fn from_parts(client: Client, base_url: String, ingredient_slots: usize) -> Self {
        Self {
            client,
            base_url,
            ingredient_slots,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn ingredient_slots(&self) -> usize {
        self.ingredient_slots
    }

    /// Fetch every recipe in the dessert category.
    ///
    /// Records without a name are dropped; the remaining order is whatever the
    /// catalog returned.
    pub async fn list_desserts(&self) -> Result<Vec<RecipeSummary>, CatalogError> {
        let body = self
            .get(FILTER_ENDPOINT, &[("c", DESSERT_CATEGORY)])
            .await?;
        let summaries = decode_summaries(&body)?;
        debug!("Decoded {} dessert summaries", summaries.len());
        Ok(summaries)
    }

    /// Fetch the detail of a single recipe.
    ///
    /// `id` is passed through untouched; an unknown id surfaces as
    /// [`CatalogError::NotFound`].
    pub async fn get_detail(&self, id: &str) -> Result<RecipeDetail, CatalogError> {
        let body = self.get(LOOKUP_ENDPOINT, &[("i", id)]).await?;
        let detail = decode_detail(&body, id, self.ingredient_slots)?;
        debug!(
            "Decoded recipe '{}' with {} ingredients",
            detail.name,
            detail.ingredients.len()
        );
        Ok(detail)
    }

    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, CatalogError> {
        let url = endpoint_url(&self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(CatalogError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                body: response.text().await.ok(),
            });
        }

        let body = response.bytes().await.map_err(CatalogError::Transport)?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl RecipeSource for RecipeClient {
    async fn list_desserts(&self) -> Result<Vec<RecipeSummary>, CatalogError> {
        RecipeClient::list_desserts(self).await
    }

    async fn get_detail(&self, id: &str) -> Result<RecipeDetail, CatalogError> {
        RecipeClient::get_detail(self, id).await
    }
}

fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}/{}", base_url, endpoint)
}
