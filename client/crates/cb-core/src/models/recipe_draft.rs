use crate::{Category, CoreError, CoreResult, Recipe};

use std::path::PathBuf;

const DEFAULT_DIFFICULTY: &str = "Easy";

/// Image attached to a recipe draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeImage {
    /// Local file uploaded as a multipart part.
    File(PathBuf),
    /// Already-hosted image, sent as `imageUrl`.
    Url(String),
}

/// Admin payload for creating or updating a recipe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub cook_time: String,
    pub difficulty: String,
    pub calories: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub category: Option<Category>,
    pub image: Option<RecipeImage>,
}

impl RecipeDraft {
    /// Check the draft before it is sent; the first failing rule wins.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("Recipe name is required."));
        }
        if self.cook_time.trim().is_empty() {
            return Err(CoreError::validation("Cook time is required."));
        }
        if self.instructions.trim().is_empty() {
            return Err(CoreError::validation("Instructions are required."));
        }
        if !is_number(&self.calories) {
            return Err(CoreError::validation("Calories must be a valid number."));
        }
        if self.valid_ingredients().is_empty() {
            return Err(CoreError::validation(
                "At least one ingredient is required.",
            ));
        }
        if self.category.is_none() {
            return Err(CoreError::validation("Please select a category."));
        }
        Ok(())
    }

    /// A bare number of minutes gets a unit; anything else is kept as typed.
    pub fn normalized_cook_time(&self) -> String {
        let trimmed = self.cook_time.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            format!("{trimmed} mins")
        } else {
            trimmed.to_string()
        }
    }

    pub fn valid_ingredients(&self) -> Vec<&str> {
        self.ingredients
            .iter()
            .map(String::as_str)
            .filter(|i| !i.trim().is_empty())
            .collect()
    }
}

impl From<&Recipe> for RecipeDraft {
    /// Prefill an edit form from an existing recipe.
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone().unwrap_or_default(),
            cook_time: recipe.cook_time.clone().unwrap_or_default(),
            difficulty: recipe
                .difficulty
                .clone()
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
            calories: recipe.calories.clone().unwrap_or_default(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone().unwrap_or_default(),
            category: recipe.categories.first().cloned(),
            image: Some(recipe.image_url.clone())
                .filter(|url| !url.is_empty())
                .map(RecipeImage::Url),
        }
    }
}

fn is_number(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}
