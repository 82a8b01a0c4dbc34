pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::api_message::ApiMessage;
pub use models::category::Category;
pub use models::comment::{Comment, CommentAuthor};
pub use models::login_response::{LoginResponse, LoginUser};
pub use models::recipe::Recipe;
pub use models::recipe_draft::{RecipeDraft, RecipeImage};
pub use models::recipe_filter::{ALL_CATEGORIES, RecipeFilter};
pub use models::role::Role;
pub use models::user_session::UserSession;
