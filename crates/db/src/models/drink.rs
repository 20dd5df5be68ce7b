//! Drink model, DTOs and the short/long projections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::error::CoreError;
use trio_core::recipe::{self, Ingredient, RecipeInput, ShortIngredient};
use trio_core::types::DbId;
use validator::Validate;

/// A row from the `drinks` table. `recipe` is JSON text.
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: DbId,
    pub title: String,
    pub recipe: String,
}

/// Public drink view: layer colours and proportions only.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkShort {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

/// Full drink view including ingredient names.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkLong {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    pub fn short(&self) -> Result<DrinkShort, CoreError> {
        let ingredients = recipe::decode_recipe(&self.recipe)?;
        Ok(DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: recipe::shorten(&ingredients),
        })
    }

    pub fn long(&self) -> Result<DrinkLong, CoreError> {
        Ok(DrinkLong {
            id: self.id,
            title: self.title.clone(),
            recipe: recipe::decode_recipe(&self.recipe)?,
        })
    }
}

/// DTO for creating a drink.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateDrink {
    #[validate(length(min = 1, max = 80))]
    pub title: String,
    pub recipe: RecipeInput,
}

/// DTO for patching a drink. Either field may be omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateDrink {
    #[validate(length(min = 1, max = 80))]
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}

/// Validated, storage-ready drink fields.
#[derive(Debug, Clone)]
pub struct NewDrink {
    pub title: String,
    pub recipe: String,
}

impl CreateDrink {
    /// Validate the title and every ingredient, then encode the recipe.
    pub fn into_new_drink(self) -> Result<NewDrink, CoreError> {
        trio_core::validation::validate_input(&self)?;
        trio_core::validation::require_text("title", &self.title)?;
        let ingredients = self.recipe.into_ingredients();
        recipe::validate_recipe(&ingredients)?;
        Ok(NewDrink {
            title: self.title,
            recipe: recipe::encode_recipe(&ingredients)?,
        })
    }
}

/// Validated patch: `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default)]
pub struct DrinkPatch {
    pub title: Option<String>,
    pub recipe: Option<String>,
}

impl UpdateDrink {
    pub fn into_patch(self) -> Result<DrinkPatch, CoreError> {
        trio_core::validation::validate_input(&self)?;
        trio_core::validation::require_text_if_present("title", self.title.as_deref())?;
        let recipe = match self.recipe {
            Some(input) => {
                let ingredients = input.into_ingredients();
                recipe::validate_recipe(&ingredients)?;
                Some(recipe::encode_recipe(&ingredients)?)
            }
            None => None,
        };
        Ok(DrinkPatch {
            title: self.title,
            recipe,
        })
    }
}
