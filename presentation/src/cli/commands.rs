//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for trivia-api
#[derive(Parser, Debug)]
#[command(name = "trivia-api")]
#[command(author, version, about = "JSON API for browsing trivia questions and playing quizzes")]
#[command(long_about = r#"
trivia-api serves the trivia frontend: paged question browsing, search,
per-category listings, question management and a quiz mode that never
repeats a question within a session.

Configuration files are loaded from (in priority order):
1. TRIVIA_* environment variables (e.g. TRIVIA_SERVER__PORT=8080)
2. --config <path>     Explicit config file
3. ./trivia.toml       Project-level config
4. ~/.config/trivia-api/config.toml   Global config

Example:
  trivia-api
  trivia-api --port 8080 --database /var/lib/trivia/trivia.db
  trivia-api --memory --seed 42 -vv
"#)]
pub struct Cli {
    /// Interface to bind (overrides server.host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// SQLite database file (overrides database.path)
    #[arg(short, long, value_name = "PATH", conflicts_with = "memory")]
    pub database: Option<PathBuf>,

    /// Keep all data in memory instead of SQLite
    #[arg(long)]
    pub memory: bool,

    /// Seed for quiz question selection (overrides quiz.seed)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
