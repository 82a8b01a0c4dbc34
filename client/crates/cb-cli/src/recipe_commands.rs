use crate::{CliError, CliResult};

use std::path::PathBuf;

use cb_core::{Category, RecipeDraft, RecipeImage};
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// List recipes
    List {
        /// Category name ("All" for every category)
        #[arg(long)]
        category: Option<String>,

        /// Only recipes whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Get a recipe by ID
    Get {
        /// Recipe ID
        id: String,
    },

    /// List recipe categories
    Categories,

    /// Create a recipe (admin only)
    Create {
        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Update a recipe (admin only); omitted fields keep their current value
    Update {
        /// Recipe ID
        id: String,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Delete a recipe (admin only)
    Delete {
        /// Recipe ID
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct RecipeFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Cook time; a bare number means minutes
    #[arg(long)]
    pub cook_time: Option<String>,

    #[arg(long)]
    pub difficulty: Option<String>,

    #[arg(long)]
    pub calories: Option<String>,

    /// Ingredient (repeat for each one); replaces the current list
    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,

    #[arg(long)]
    pub instructions: Option<String>,

    /// Category name or ID
    #[arg(long)]
    pub category: Option<String>,

    /// Local image file or http(s) URL
    #[arg(long)]
    pub image: Option<String>,
}

impl RecipeFields {
    /// Overwrite the fields of `draft` that were given on the command line.
    ///
    /// The category is looked up by ID or name in `categories`.
    pub fn apply_to(self, draft: &mut RecipeDraft, categories: &[Category]) -> CliResult<()> {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(cook_time) = self.cook_time {
            draft.cook_time = cook_time;
        }
        if let Some(difficulty) = self.difficulty {
            draft.difficulty = difficulty;
        }
        if let Some(calories) = self.calories {
            draft.calories = calories;
        }
        if !self.ingredients.is_empty() {
            draft.ingredients = self.ingredients;
        }
        if let Some(instructions) = self.instructions {
            draft.instructions = instructions;
        }
        if let Some(wanted) = self.category {
            let found = categories
                .iter()
                .find(|c| c.id == wanted || c.name.eq_ignore_ascii_case(&wanted))
                .ok_or_else(|| CliError::input(format!("Unknown category '{wanted}'")))?;
            draft.category = Some(found.clone());
        }
        if let Some(image) = self.image {
            draft.image = Some(parse_image(image));
        }
        Ok(())
    }
}

fn parse_image(value: String) -> RecipeImage {
    if value.starts_with("http://") || value.starts_with("https://") {
        RecipeImage::Url(value)
    } else {
        RecipeImage::File(PathBuf::from(value))
    }
}
