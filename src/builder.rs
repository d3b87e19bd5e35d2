use std::time::Duration;

use reqwest::Url;

use crate::client::RecipeClient;
use crate::config::{CatalogConfig, DEFAULT_BASE_URL};
use crate::decode::DEFAULT_INGREDIENT_SLOTS;
use crate::error::CatalogError;

/// Builder for configuring a [`RecipeClient`]
#[derive(Debug, Default)]
pub struct RecipeClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    ingredient_slots: Option<usize>,
}

impl RecipeClientBuilder {
    /// Start from a loaded [`CatalogConfig`]
    ///
    /// # Example
    /// ```
    /// use dessert_catalog::{CatalogConfig, RecipeClient};
    ///
    /// let builder = RecipeClient::builder().from_config(&CatalogConfig::default());
    /// ```
    pub fn from_config(mut self, config: &CatalogConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        if let Some(timeout) = config.timeout {
            self.timeout = Some(Duration::from_secs(timeout));
        }
        if let Some(user_agent) = &config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        self.ingredient_slots = Some(config.ingredient_slots);
        self
    }

    /// Override the catalog root URL
    ///
    /// # Example
    /// ```
    /// use dessert_catalog::RecipeClient;
    ///
    /// let builder = RecipeClient::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use dessert_catalog::RecipeClient;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeClient::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Number of `strIngredientN`/`strMeasureN` slots to read (default 5)
    pub fn ingredient_slots(mut self, slots: usize) -> Self {
        self.ingredient_slots = Some(slots);
        self
    }

    /// Build the async client
    ///
    /// # Errors
    /// Returns `CatalogError` if:
    /// - the base URL is not an absolute http(s) URL, or carries a query or fragment
    /// - the ingredient slot count is zero
    /// - the HTTP client cannot be constructed
    pub fn build(self) -> Result<RecipeClient, CatalogError> {
        let (base_url, slots) = self.validated()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder.build().map_err(CatalogError::ClientBuild)?;

        Ok(RecipeClient::from_parts(client, base_url, slots))
    }

    fn validated(&self) -> Result<(String, usize), CatalogError> {
        let slots = self.ingredient_slots.unwrap_or(DEFAULT_INGREDIENT_SLOTS);
        if slots == 0 {
            return Err(CatalogError::InvalidSlots(slots));
        }

        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let url = Url::parse(raw).map_err(|e| CatalogError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidBaseUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        // Endpoints are appended to the path, so nothing may follow it
        if url.query().is_some() || url.fragment().is_some() {
            return Err(CatalogError::InvalidBaseUrl {
                url: raw.to_string(),
                reason: "query strings and fragments are not supported".to_string(),
            });
        }

        Ok((raw.trim_end_matches('/').to_string(), slots))
    }
}
