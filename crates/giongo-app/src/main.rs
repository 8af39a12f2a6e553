use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use giongo_config::Config;
use giongo_config::logging::LoggingConfig;
use giongo_dictionary::OnomatopoeiaLoader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod search;
pub mod state;
pub mod ui;


use self::controller::{AppController, ChannelSet};
use self::search::SearchReport;
use self::state::AppState;

#[derive(Parser)]
#[command(
    name = "giongo",
    version,
    about = "Look up Japanese onomatopoeia by romaji, hiragana or katakana"
)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dictionary JSON, overrides the configured path
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a single query
    Search {
        #[arg(required = true)]
        term: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read queries from stdin, one per line
    Interactive,
    /// Build the dictionary JSON from raw source data
    Compile {
        #[arg(long)]
        data_dir: Option<PathBuf>,

        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // Logs go to stderr; stdout carries results
    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    if let Some(path) = cli.dictionary {
        config.dictionary.path = path;
    }
    config.logging.json |= cli.json_logs;

    init_tracing(&config.logging);

    match cli.command {
        Command::Search { term, json } => run_search(&config, &term.join(" "), json),
        Command::Compile { data_dir, output } => {
            let data_dir = data_dir.unwrap_or_else(|| config.compile.data_dir.clone());
            let output = output.unwrap_or_else(|| config.compile.output.clone());
            run_compile(&data_dir, &output)
        }
        Command::Interactive => {
            let state = Arc::new(AppState::new(config));
            run_interactive(state).await
        }
    }
}

fn run_search(config: &Config, query: &str, json: bool) -> anyhow::Result<()> {
    let dictionary = OnomatopoeiaLoader::load_with_additional(
        &config.dictionary.path,
        config.dictionary.additional_paths.as_slice(),
    )
    .with_context(|| format!("loading {}", config.dictionary.path.display()))?;

    let processor = giongo_lang_japanese::JapaneseProcessor::new();
    let report = SearchReport::new(query, &dictionary, &processor);
    tracing::debug!("'{}' -> '{}'", report.query, report.canonical);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text(&dictionary, &processor));
    }

    Ok(())
}

fn run_compile(data_dir: &std::path::Path, output: &std::path::Path) -> anyhow::Result<()> {
    let dictionary = giongo_dictionary::compile(data_dir)
        .with_context(|| format!("compiling sources in {}", data_dir.display()))?;
    OnomatopoeiaLoader::write_to_file(&dictionary, output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

pub async fn run_interactive(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(
        ChannelSet::new(),
        BufReader::new(std::io::stdin()),
        tokio::io::stdout(),
    );

    // Shutdown future (Ctrl+C)
    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut shutting_down = false;

    loop {
        tokio::select! {
            _ = &mut shutdown, if !shutting_down => {
                tracing::info!("Shutdown requested");
                shutting_down = true;
                controller.shutdown();
            }
            joined = tasks.join_next() => match joined {
                None => break,
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    tracing::error!("task failed: {e}");
                    controller.shutdown();
                    tasks.abort_all();
                    return Err(e);
                }
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    controller.shutdown();
                    tasks.abort_all();
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}
