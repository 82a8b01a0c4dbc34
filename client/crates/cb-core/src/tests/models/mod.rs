mod api_message;
mod category;
mod comment;
mod login_response;
mod recipe;
mod recipe_draft;
mod recipe_filter;
mod role;
mod user_session;
