use crate::Recipe;

use serde_json::json;

#[test]
fn test_recipe_deserializes_backend_shape() {
    let recipe: Recipe = serde_json::from_value(json!({
        "_id": "r1",
        "name": "Pho",
        "imageUrl": "http://img/pho.png",
        "cookTime": "90 mins",
        "difficulty": "Hard",
        "calories": 450,
        "ingredients": ["beef", "noodles"],
        "categories": [{ "_id": "c1", "name": "Soup" }, "Vietnamese"]
    }))
    .unwrap();

    assert_eq!(recipe.id, "r1");
    assert_eq!(recipe.image_url, "http://img/pho.png");
    assert_eq!(recipe.cook_time.as_deref(), Some("90 mins"));
    assert_eq!(recipe.calories.as_deref(), Some("450"));
    assert_eq!(recipe.ingredients.len(), 2);
    assert!(recipe.has_category("Soup"));
    assert!(recipe.has_category("Vietnamese"));
    assert!(!recipe.has_category("Dessert"));
}

#[test]
fn test_recipe_minimal_shape() {
    let recipe: Recipe = serde_json::from_value(json!({ "_id": "r2", "name": "Toast" })).unwrap();

    assert!(recipe.image_url.is_empty());
    assert!(recipe.calories.is_none());
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.categories.is_empty());
}

#[test]
fn test_recipe_string_calories() {
    let recipe: Recipe =
        serde_json::from_value(json!({ "_id": "r3", "name": "Salad", "calories": "120" })).unwrap();

    assert_eq!(recipe.calories.as_deref(), Some("120"));
}

#[test]
fn test_recipe_with_both_id_keys_prefers_id() {
    let recipe: Recipe = serde_json::from_value(json!({
        "_id": "mongo-r1",
        "id": "r1",
        "name": "Soup",
        "categories": [{ "_id": "c1", "id": "c1", "name": "Soup" }]
    }))
    .unwrap();

    assert_eq!(recipe.id, "r1");
    assert_eq!(recipe.categories[0].id, "c1");
}

#[test]
fn test_recipe_explicit_nulls_read_as_defaults() {
    let recipe: Recipe = serde_json::from_value(json!({
        "_id": "r1",
        "name": "Soup",
        "imageUrl": null,
        "cookTime": null,
        "calories": null,
        "ingredients": null,
        "categories": null
    }))
    .unwrap();

    assert!(recipe.image_url.is_empty());
    assert!(recipe.cook_time.is_none());
    assert!(recipe.calories.is_none());
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.categories.is_empty());
}

#[test]
fn test_recipe_without_any_id_is_rejected() {
    let result = serde_json::from_value::<Recipe>(json!({ "name": "Soup" }));

    assert!(result.is_err());
}

#[test]
fn test_recipe_serializes_with_mongo_id_key() {
    let recipe: Recipe = serde_json::from_value(json!({ "id": "r1", "name": "Soup" })).unwrap();

    let value = serde_json::to_value(&recipe).unwrap();

    assert_eq!(value["_id"], "r1");
    assert_eq!(value["imageUrl"], "");
    assert!(value.get("id").is_none());
}
