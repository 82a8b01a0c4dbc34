use crate::{ALL_CATEGORIES, Recipe, RecipeFilter};

use serde_json::json;

fn recipes() -> Vec<Recipe> {
    serde_json::from_value(json!([
        { "_id": "1", "name": "Chicken Curry", "categories": [{ "_id": "a", "name": "Dinner" }] },
        { "_id": "2", "name": "Banana Bread", "categories": [{ "_id": "b", "name": "Dessert" }] },
        { "_id": "3", "name": "Chicken Soup", "categories": [{ "_id": "c", "name": "Soup" }] }
    ]))
    .unwrap()
}

fn ids(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_default_filter_matches_everything() {
    let filtered = RecipeFilter::default().apply(recipes());
    assert_eq!(ids(&filtered), vec!["1", "2", "3"]);
}

#[test]
fn test_all_category_matches_everything() {
    let filter = RecipeFilter::new(Some(ALL_CATEGORIES.into()), None);
    assert_eq!(filter.apply(recipes()).len(), 3);
}

#[test]
fn test_category_filter_is_exact() {
    let filter = RecipeFilter::new(Some("Soup".into()), None);
    assert_eq!(ids(&filter.apply(recipes())), vec!["3"]);

    let filter = RecipeFilter::new(Some("soup".into()), None);
    assert!(filter.apply(recipes()).is_empty());
}

#[test]
fn test_query_is_case_insensitive_substring() {
    let filter = RecipeFilter::new(None, Some("CHICKEN".into()));
    assert_eq!(ids(&filter.apply(recipes())), vec!["1", "3"]);
}

#[test]
fn test_category_and_query_combine() {
    let filter = RecipeFilter::new(Some("Dinner".into()), Some("chicken".into()));
    assert_eq!(ids(&filter.apply(recipes())), vec!["1"]);
}
