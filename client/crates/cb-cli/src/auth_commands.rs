use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Sign in and remember the session on this device
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account (sign in afterwards)
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the session on this device
    Logout,

    /// Show the signed-in user
    Whoami,
}
