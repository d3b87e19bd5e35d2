//! Presentation helpers: loading state, ordering and plain-text rendering of
//! the dessert list and recipe detail screens.

use std::fmt::Write;

use crate::client::RecipeSource;
use crate::error::CatalogError;
use crate::model::{RecipeDetail, RecipeSummary};

/// State of one screen's single outstanding request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    /// Display text of the failure
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    /// Enter `Loading`, clearing any previous value or error
    pub fn begin(&mut self) {
        *self = LoadState::Loading;
    }

    /// Store the outcome of the outstanding request.
    ///
    /// Only a `Loading` state accepts a result; anything else is left as is
    /// and `false` is returned.
    pub fn resolve(&mut self, result: Result<T, CatalogError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Case-sensitive ascending order by name
pub fn sort_by_name(recipes: &mut [RecipeSummary]) {
    recipes.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Load the dessert list screen, sorted for display
pub async fn load_dessert_list(source: &dyn RecipeSource) -> LoadState<Vec<RecipeSummary>> {
    let mut state = LoadState::default();
    state.begin();
    let result = source.list_desserts().await.map(|mut recipes| {
        sort_by_name(&mut recipes);
        recipes
    });
    state.resolve(result);
    state
}

/// Load the detail screen for `id`
pub async fn load_recipe_detail(source: &dyn RecipeSource, id: &str) -> LoadState<RecipeDetail> {
    let mut state = LoadState::default();
    state.begin();
    state.resolve(source.get_detail(id).await);
    state
}

pub fn render_list(recipes: &[RecipeSummary]) -> String {
    let mut out = String::from("Desserts\n");
    for recipe in recipes {
        let _ = writeln!(out, "  {:>6}  {}", recipe.id, recipe.name);
    }
    out
}

pub fn render_detail(detail: &RecipeDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", detail.instructions.trim_end());
    if !detail.ingredients.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Ingredients");
        for ingredient in &detail.ingredients {
            let _ = writeln!(out, "  - {}", ingredient);
        }
    }
    out
}

/// Render any screen state with the given renderer for the loaded value
pub fn render_state<T>(state: &LoadState<T>, render: impl Fn(&T) -> String) -> String {
    match state {
        LoadState::Idle => String::new(),
        LoadState::Loading => "Loading...\n".to_string(),
        LoadState::Loaded(value) => render(value),
        LoadState::Failed(message) => format!("Error: {}\n", message),
    }
}
