use crate::{
    auth_commands::AuthCommands, comment_commands::CommentCommands,
    recipe_commands::RecipeCommands, saved_commands::SavedCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, sign out and account operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Recipe operations
    Recipe {
        #[command(subcommand)]
        action: RecipeCommands,
    },

    /// Comment operations
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },

    /// Recipes bookmarked on this device
    Bookmark {
        #[command(subcommand)]
        action: SavedCommands,
    },

    /// Recipes marked as favorite on this device
    Favorite {
        #[command(subcommand)]
        action: SavedCommands,
    },

    /// Ask the cooking assistant
    Chat {
        /// Question or request for the assistant
        message: String,
    },
}
