use crate::{Category, RecipeDraft};

use googletest::assert_that;
use googletest::prelude::{anything, ok};

fn valid_draft() -> RecipeDraft {
    RecipeDraft {
        name: "Pancakes".into(),
        description: String::new(),
        cook_time: "20".into(),
        difficulty: "Easy".into(),
        calories: "350".into(),
        ingredients: vec!["flour".into(), "  ".into(), "milk".into()],
        instructions: "Mix and fry.".into(),
        category: Some(Category {
            id: "c1".into(),
            name: "Breakfast".into(),
            description: String::new(),
        }),
        image: None,
    }
}

fn validation_message(draft: &RecipeDraft) -> String {
    draft.validate().unwrap_err().message()
}

#[test]
fn given_complete_draft_when_validate_then_ok() {
    assert_that!(valid_draft().validate(), ok(anything()));
}

#[test]
fn given_blank_name_when_validate_then_name_required() {
    let draft = RecipeDraft {
        name: "   ".into(),
        ..valid_draft()
    };

    assert_eq!(validation_message(&draft), "Recipe name is required.");
}

#[test]
fn given_blank_cook_time_when_validate_then_cook_time_required() {
    let draft = RecipeDraft {
        cook_time: String::new(),
        ..valid_draft()
    };

    assert_eq!(validation_message(&draft), "Cook time is required.");
}

#[test]
fn given_blank_instructions_when_validate_then_instructions_required() {
    let draft = RecipeDraft {
        instructions: "\n".into(),
        ..valid_draft()
    };

    assert_eq!(validation_message(&draft), "Instructions are required.");
}

#[test]
fn given_non_numeric_calories_when_validate_then_error() {
    for calories in ["", "lots", "NaN"] {
        let draft = RecipeDraft {
            calories: calories.into(),
            ..valid_draft()
        };

        assert_eq!(
            validation_message(&draft),
            "Calories must be a valid number.",
            "calories = {calories:?}"
        );
    }
}

#[test]
fn given_only_blank_ingredients_when_validate_then_error() {
    let draft = RecipeDraft {
        ingredients: vec![" ".into(), String::new()],
        ..valid_draft()
    };

    assert_eq!(
        validation_message(&draft),
        "At least one ingredient is required."
    );
}

#[test]
fn given_no_category_when_validate_then_error() {
    let draft = RecipeDraft {
        category: None,
        ..valid_draft()
    };

    assert_eq!(validation_message(&draft), "Please select a category.");
}

#[test]
fn test_normalized_cook_time() {
    assert_eq!(valid_draft().normalized_cook_time(), "20 mins");

    let draft = RecipeDraft {
        cook_time: " 1 hour ".into(),
        ..valid_draft()
    };
    assert_eq!(draft.normalized_cook_time(), "1 hour");
}

#[test]
fn test_valid_ingredients_drops_blank_entries() {
    assert_eq!(valid_draft().valid_ingredients(), vec!["flour", "milk"]);
}

#[test]
fn given_existing_recipe_when_prefilling_draft_then_fields_carry_over() {
    let recipe: crate::Recipe = serde_json::from_value(serde_json::json!({
        "_id": "r1",
        "name": "Pho",
        "imageUrl": "https://img.example.com/pho.jpg",
        "cookTime": "45 mins",
        "calories": 500,
        "ingredients": ["noodles"],
        "instructions": "Simmer.",
        "categories": [{ "_id": "c1", "name": "Soup" }, "Dinner"]
    }))
    .unwrap();

    let draft = RecipeDraft::from(&recipe);

    assert_eq!(draft.cook_time, "45 mins");
    assert_eq!(draft.calories, "500");
    assert_eq!(draft.difficulty, "Easy");
    assert_eq!(draft.category.as_ref().map(|c| c.id.as_str()), Some("c1"));
    assert_eq!(
        draft.image,
        Some(crate::RecipeImage::Url("https://img.example.com/pho.jpg".into()))
    );
    assert_that!(draft.validate(), ok(anything()));
}

#[test]
fn given_recipe_without_image_when_prefilling_draft_then_no_image() {
    let recipe: crate::Recipe =
        serde_json::from_value(serde_json::json!({ "_id": "r2", "name": "Toast" })).unwrap();

    let draft = RecipeDraft::from(&recipe);

    assert_eq!(draft.image, None);
    assert_eq!(draft.category, None);
}

#[test]
fn given_infinite_calories_when_validate_then_error() {
    for calories in ["inf", "-inf", "infinity", "Infinity"] {
        let draft = RecipeDraft {
            calories: calories.into(),
            ..valid_draft()
        };
        assert_eq!(
            validation_message(&draft),
            "Calories must be a valid number.",
            "calories = {calories:?}"
        );
    }
}

#[test]
fn given_decimal_calories_when_validate_then_ok() {
    let draft = RecipeDraft {
        calories: " 350.5 ".into(),
        ..valid_draft()
    };

    assert_that!(draft.validate(), ok(anything()));
}
