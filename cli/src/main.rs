//! CLI entrypoint for trivia-api
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::net::ToSocketAddrs;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_application::{CategoryStore, QuestionStore};
use trivia_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, InMemoryCategoryStore, InMemoryQuestionStore,
    SqliteDatabase, StorageBackend, picker_for_seed,
};
use trivia_presentation::{AppState, Cli, cors_layer, create_router, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, &config.logging)?;

    info!("Starting trivia-api");

    // === Dependency Injection ===
    let (questions, categories) = open_stores(&config)?;
    let picker = picker_for_seed(config.quiz.seed);
    let state = AppState::new(
        questions,
        categories,
        picker,
        config.pagination.to_browse_config(),
    );

    let cors = cors_layer(&config.server.cors_origin)
        .with_context(|| format!("Invalid CORS origin: {}", config.server.cors_origin))?;
    let router = create_router(state, cors);

    let bind = config.server.bind_address();
    let addr = bind
        .to_socket_addrs()
        .with_context(|| format!("Invalid bind address: {}", bind))?
        .next()
        .with_context(|| format!("No address found for {}", bind))?;

    serve(router, addr).await?;

    Ok(())
}

fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(path) = &cli.database {
        config.database.backend = StorageBackend::Sqlite;
        config.database.path = path.clone();
    }
    if cli.memory {
        config.database.backend = StorageBackend::Memory;
    }
    if cli.seed.is_some() {
        config.quiz.seed = cli.seed;
    }
}

/// `RUST_LOG` wins, then `-v`, then `logging.level`, then `info`
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        _ if std::env::var_os("RUST_LOG").is_some() => EnvFilter::from_default_env(),
        0 => EnvFilter::try_new(logging.level.as_deref().unwrap_or("info"))
            .context("Invalid logging.level")?,
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match &logging.file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

fn open_stores(config: &FileConfig) -> Result<(Arc<dyn QuestionStore>, Arc<dyn CategoryStore>)> {
    match config.database.backend {
        StorageBackend::Sqlite => {
            let path = &config.database.path;
            let db = SqliteDatabase::open(path)
                .with_context(|| format!("Failed to open database {}", path.display()))?;
            if config.database.seed_categories {
                let seeded = db.seed_categories()?;
                if seeded > 0 {
                    info!("Seeded {} categories", seeded);
                }
            }
            info!("Using SQLite database {}", path.display());
            let questions: Arc<dyn QuestionStore> = Arc::new(db.question_store());
            let categories: Arc<dyn CategoryStore> = Arc::new(db.category_store());
            Ok((questions, categories))
        }
        StorageBackend::Memory => {
            let categories = if config.database.seed_categories {
                InMemoryCategoryStore::with_defaults()
            } else {
                InMemoryCategoryStore::default()
            };
            let categories = Arc::new(categories);
            info!("Using in-memory storage");
            let questions: Arc<dyn QuestionStore> =
                Arc::new(InMemoryQuestionStore::new(categories.clone()));
            let categories: Arc<dyn CategoryStore> = categories;
            Ok((questions, categories))
        }
    }
}
