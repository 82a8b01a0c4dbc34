use crate::models::lenient::{either_id, opt_string_or_number};

use serde::{Deserialize, Serialize};

/// Recipe category. Some endpoints embed full objects, others only names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "CategoryRepr")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRepr {
    Full {
        #[serde(default, deserialize_with = "opt_string_or_number")]
        id: Option<String>,
        #[serde(rename = "_id", default, deserialize_with = "opt_string_or_number")]
        mongo_id: Option<String>,
        name: String,
        #[serde(default)]
        description: Option<String>,
    },
    Name(String),
}

impl From<CategoryRepr> for Category {
    fn from(repr: CategoryRepr) -> Self {
        match repr {
            CategoryRepr::Full {
                id,
                mongo_id,
                name,
                description,
            } => Self {
                id: either_id(id, mongo_id).unwrap_or_default(),
                name,
                description: description.unwrap_or_default(),
            },
            CategoryRepr::Name(name) => Self {
                id: String::new(),
                name,
                description: String::new(),
            },
        }
    }
}
