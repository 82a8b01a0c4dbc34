pub mod api_message;
pub mod category;
pub mod comment;
pub mod login_response;
pub mod recipe;
pub mod recipe_draft;
pub mod recipe_filter;
pub mod role;
pub mod user_session;

pub(crate) mod lenient;
