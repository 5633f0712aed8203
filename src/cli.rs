use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "gh-activity")]
#[command(about = "Browse a GitHub user's recent public activity from the terminal")]
pub struct CliArgs {
    /// Username to look up on startup
    pub username: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// GitHub API base URL (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Print the first page of activity and exit instead of starting the TUI
    #[arg(long, requires = "username")]
    pub print: bool,
}
