use clap::Subcommand;

#[derive(Subcommand)]
pub enum CommentCommands {
    /// List comments on a recipe
    List {
        /// Recipe ID
        recipe_id: String,
    },

    /// Comment on a recipe
    Add {
        /// Recipe ID
        recipe_id: String,

        /// Comment content
        #[arg(long)]
        content: String,
    },
}
