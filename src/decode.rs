//! JSON decoding for the two catalog endpoints.
//!
//! Both endpoints wrap their records in `{ "meals": [...] | null }`. The list
//! decoder is lenient per record, the detail decoder is strict about the
//! record it uses.

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::CatalogError;
use crate::model::{RecipeDetail, RecipeSummary};

/// Number of numbered ingredient/measure slots read by default
pub const DEFAULT_INGREDIENT_SLOTS: usize = 5;

#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    #[serde(default)]
    meals: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RawSummary {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDetail {
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strInstructions")]
    instructions: String,
}

/// Rejects bodies that are absent or only whitespace
pub fn ensure_body(body: &[u8]) -> Result<&[u8], CatalogError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CatalogError::EmptyResponse);
    }
    Ok(body)
}

/// Decode the filter endpoint response into summaries, in upstream order.
///
/// A malformed top-level object fails the whole call. Individual records that
/// do not decode are skipped, and records without a name are dropped.
pub fn decode_summaries(body: &[u8]) -> Result<Vec<RecipeSummary>, CatalogError> {
    let envelope: MealsEnvelope = serde_json::from_slice(ensure_body(body)?)?;
    let records = envelope.meals.unwrap_or_default();

    let mut summaries = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let raw: RawSummary = match serde_json::from_value(record) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping malformed catalog record #{}: {}", index, e);
                continue;
            }
        };

        match raw.name {
            Some(name) if !name.trim().is_empty() => summaries.push(RecipeSummary {
                id: raw.id,
                name,
            }),
            _ => debug!("Dropping catalog record '{}' without a name", raw.id),
        }
    }

    Ok(summaries)
}

/// Decode the lookup endpoint response for `id`.
///
/// Only the first record is used; an absent, null or empty `meals` array
/// yields [`CatalogError::NotFound`].
pub fn decode_detail(body: &[u8], id: &str, slots: usize) -> Result<RecipeDetail, CatalogError> {
    let envelope: MealsEnvelope = serde_json::from_slice(ensure_body(body)?)?;
    let record = envelope
        .meals
        .and_then(|meals| meals.into_iter().next())
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

    let ingredients = match &record {
        Value::Object(fields) => collect_ingredients(fields, slots),
        _ => Vec::new(),
    };
    // Non-object records fail here with a type error
    let raw: RawDetail = serde_json::from_value(record)?;

    Ok(RecipeDetail {
        name: raw.name,
        instructions: raw.instructions,
        ingredients,
    })
}

/// Build the ingredient list from `strIngredient<i>` / `strMeasure<i>` for
/// `i` in `1..=slots`.
///
/// A slot is kept only when both values are strings that are non-blank after
/// trimming. Non-string values count as missing.
pub fn collect_ingredients(record: &Map<String, Value>, slots: usize) -> Vec<String> {
    (1..=slots)
        .filter_map(|slot| {
            let ingredient = slot_value(record, "strIngredient", slot)?;
            let measure = slot_value(record, "strMeasure", slot)?;
            Some(format!("{} {}", measure, ingredient))
        })
        .collect()
}

fn slot_value<'a>(record: &'a Map<String, Value>, prefix: &str, slot: usize) -> Option<&'a str> {
    record
        .get(&format!("{}{}", prefix, slot))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
