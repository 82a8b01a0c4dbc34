//! cb-cli library
//!
//! Command definitions and dispatch for the `cookbook` binary.

pub(crate) mod app;
pub(crate) mod auth_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod comment_commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod recipe_commands;
pub(crate) mod saved_commands;


pub use app::App;
pub use auth_commands::AuthCommands;
pub use cli::Cli;
pub use commands::Commands;
pub use comment_commands::CommentCommands;
pub use error::{CliError, Result as CliResult};
pub use logger::initialize as initialize_logger;
pub use recipe_commands::{RecipeCommands, RecipeFields};
pub use saved_commands::SavedCommands;
