use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(about = "Browse recipes, keep bookmarks and talk to the cooking assistant")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides api.base_url and CB_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
