//! Drink recipes and their public projections.
//!
//! A recipe is persisted as serialized JSON text. The short projection is
//! what anonymous clients see: colour and proportion of each layer, never
//! the ingredient name. The long projection carries every field.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// One layer of a drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Ingredient {
    #[validate(length(min = 1))]
    pub color: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub parts: u32,
}

/// Redacted layer: enough to draw the drink, not enough to make it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

impl From<&Ingredient> for ShortIngredient {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            color: ingredient.color.clone(),
            parts: ingredient.parts,
        }
    }
}

/// Recipe as accepted from clients: a single layer or a list of layers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(list) => list,
            RecipeInput::One(single) => vec![single],
        }
    }
}

/// A recipe must have at least one layer and every layer must be complete.
pub fn validate_recipe(ingredients: &[Ingredient]) -> Result<(), CoreError> {
    if ingredients.is_empty() {
        return Err(CoreError::Validation(
            "recipe must contain at least one ingredient".into(),
        ));
    }
    for ingredient in ingredients {
        ingredient.validate()?;
    }
    Ok(())
}

/// Serialize a recipe for storage.
pub fn encode_recipe(ingredients: &[Ingredient]) -> Result<String, CoreError> {
    serde_json::to_string(ingredients)
        .map_err(|e| CoreError::Internal(format!("failed to encode recipe: {e}")))
}

/// Parse a stored recipe.
pub fn decode_recipe(text: &str) -> Result<Vec<Ingredient>, CoreError> {
    serde_json::from_str(text)
        .map_err(|e| CoreError::Internal(format!("stored recipe is not valid JSON: {e}")))
}

/// Short projection of a recipe.
pub fn shorten(ingredients: &[Ingredient]) -> Vec<ShortIngredient> {
    ingredients.iter().map(ShortIngredient::from).collect()
}
