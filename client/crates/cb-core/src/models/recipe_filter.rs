use crate::Recipe;

/// Category name that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Home-screen style filtering by category and name search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub category: Option<String>,
    pub query: String,
}

impl RecipeFilter {
    pub fn new(category: Option<String>, query: Option<String>) -> Self {
        Self {
            category,
            query: query.unwrap_or_default(),
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let matches_category = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => recipe.has_category(category),
        };

        let matches_search = self.query.is_empty()
            || recipe
                .name
                .to_lowercase()
                .contains(&self.query.to_lowercase());

        matches_category && matches_search
    }

    pub fn apply(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        recipes.into_iter().filter(|r| self.matches(r)).collect()
    }
}
