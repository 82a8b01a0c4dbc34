use crate::Category;
use crate::models::lenient::{either_id, null_as_default, opt_string_or_number};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "RecipeRepr")]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub categories: Vec<Category>,
}

/// Wire shape as sent by the backend, before the id is settled.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeRepr {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "opt_string_or_number")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    image_url: String,
    #[serde(default)]
    cook_time: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    /// Sent by the backend as either a string or a number.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    calories: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    categories: Vec<Category>,
}

impl TryFrom<RecipeRepr> for Recipe {
    type Error = String;

    fn try_from(repr: RecipeRepr) -> Result<Self, Self::Error> {
        let id = either_id(repr.id, repr.mongo_id).ok_or("recipe without an id")?;

        Ok(Self {
            id,
            name: repr.name,
            image_url: repr.image_url,
            cook_time: repr.cook_time,
            difficulty: repr.difficulty,
            calories: repr.calories,
            description: repr.description,
            ingredients: repr.ingredients,
            instructions: repr.instructions,
            categories: repr.categories,
        })
    }
}

impl Recipe {
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.category_names().any(|c| c == name)
    }
}
