use serde::Serialize;

/// One entry of the dessert catalog list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
}

/// Full recipe as returned by the lookup endpoint.
///
/// Each ingredient is formatted as `"<measure> <ingredient>"`, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub name: String,
    pub instructions: String,
    pub ingredients: Vec<String>,
}
