use crate::Category;

use serde_json::json;

#[test]
fn test_category_from_object() {
    let category: Category = serde_json::from_value(json!({
        "_id": "c1",
        "name": "Dessert",
        "description": "Sweet things"
    }))
    .unwrap();

    assert_eq!(category.id, "c1");
    assert_eq!(category.name, "Dessert");
    assert_eq!(category.description, "Sweet things");
}

#[test]
fn test_category_from_bare_name() {
    let category: Category = serde_json::from_value(json!("Soup")).unwrap();

    assert_eq!(category.name, "Soup");
    assert!(category.id.is_empty());
}

#[test]
fn test_category_serializes_with_underscore_id() {
    let category = Category {
        id: "c1".into(),
        name: "Dessert".into(),
        description: String::new(),
    };

    let value = serde_json::to_value(&category).unwrap();

    assert_eq!(value, json!({ "_id": "c1", "name": "Dessert", "description": "" }));
}

#[test]
fn test_category_with_both_id_keys() {
    let category: Category = serde_json::from_value(json!({
        "_id": "c1",
        "id": "c1",
        "name": "Dessert",
        "description": null
    }))
    .unwrap();

    assert_eq!(category.id, "c1");
    assert_eq!(category.description, "");
}
