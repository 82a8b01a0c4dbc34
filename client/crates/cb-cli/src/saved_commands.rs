use clap::Subcommand;

#[derive(Subcommand)]
pub enum SavedCommands {
    /// List saved recipes, dropping ones that no longer exist
    List {
        /// Only recipes whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Save or unsave a recipe
    Toggle {
        /// Recipe ID
        id: String,
    },

    /// Unsave a recipe
    Remove {
        /// Recipe ID
        id: String,
    },
}
