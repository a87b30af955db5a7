//! mpg - music prompt generator command line
//!
//! Builds "Sound Prompt" text from per-category selections, auto-fills
//! selections from genres and keeps a local prompt history.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mpg_cli::commands;
use mpg_cli::HistoryStore;
use mpg_common::config::{load_toml_config, resolve_root_folder, TomlConfig};
use mpg_common::{Genre, SchemaRegistry, SectionId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Command-line arguments for mpg
#[derive(Parser, Debug)]
#[command(name = "mpg")]
#[command(about = "Music prompt generator")]
#[command(version)]
struct Args {
    /// Root folder holding the prompt history
    #[arg(long, global = true, env = "MPG_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,

    /// Config file (defaults to the per-user config directory)
    #[arg(long, global = true, env = "MPG_CONFIG")]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, env = "MPG_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List genre ids and labels
    Genres,

    /// List sections and their category rows
    Sections,

    /// Show the candidate phrases for one slot
    Options {
        section: SectionId,
        row: usize,
        genre: Genre,
    },

    /// Format a prompt from selections
    Format {
        /// Selection as KEY=GENRE:VALUE, e.g. core-0=lofi:Dusty Lo-Fi
        #[arg(long = "select", value_name = "KEY=GENRE:VALUE")]
        selects: Vec<String>,

        /// JSON file with a selection matrix
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Also print the per-genre breakdown
        #[arg(long)]
        detailed: bool,

        /// Save the prompt to the history
        #[arg(long)]
        record: bool,
    },

    /// Fill every slot from the given genres (all genres if none)
    Autofill {
        #[arg(long = "genre", value_name = "ID")]
        genres: Vec<Genre>,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        detailed: bool,

        #[arg(long)]
        record: bool,
    },

    /// Manage the prompt history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// List saved prompts, newest first
    List,
    /// Remove every saved prompt
    Clear,
    /// Give a saved prompt a name
    Rename { id: Uuid, name: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before tracing starts so its level can seed the filter
    let config_result = load_toml_config(args.config.as_deref());
    let level = args
        .log_level
        .clone()
        .or_else(|| config_result.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "mpg v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = config_result.context("Failed to load configuration")?;
    let registry = SchemaRegistry::builtin();

    match args.command {
        Command::Genres => print!("{}", commands::list_genres(registry)),
        Command::Sections => print!("{}", commands::list_sections(registry)),
        Command::Options {
            section,
            row,
            genre,
        } => print!("{}", commands::list_options(registry, section, row, genre)?),
        Command::Format {
            selects,
            input,
            detailed,
            record,
        } => {
            let matrix = commands::build_matrix(&selects, input.as_deref())
                .context("Failed to read selections")?;
            let out = commands::render_matrix(registry, &matrix, detailed);
            if !out.is_empty() {
                println!("{}", out);
            }
            if record {
                let store = history_store(args.root_folder.as_deref(), &config);
                let prompt = mpg_common::format_prompt(registry, &matrix);
                commands::record(&store, &prompt, &matrix, None)?;
            }
        }
        Command::Autofill {
            genres,
            seed,
            detailed,
            record,
        } => {
            let genres = if genres.is_empty() {
                config.autofill.genres()
            } else {
                genres
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let (matrix, name) =
                commands::autofill(registry, &genres, &chrono::Local::now(), &mut rng);
            info!("Preset: {}", name);
            println!("{}", commands::render_matrix(registry, &matrix, detailed));
            if record {
                let store = history_store(args.root_folder.as_deref(), &config);
                let prompt = mpg_common::format_prompt(registry, &matrix);
                commands::record(&store, &prompt, &matrix, Some(name))?;
            }
        }
        Command::History { action } => {
            let store = history_store(args.root_folder.as_deref(), &config);
            match action {
                HistoryAction::List => {
                    let history = store.load()?;
                    print!("{}", commands::list_history(&history));
                }
                HistoryAction::Clear => {
                    commands::clear_history(&store)?;
                    info!("History cleared");
                }
                HistoryAction::Rename { id, name } => {
                    commands::rename_history(&store, id, &name)
                        .with_context(|| format!("Failed to rename {}", id))?;
                }
            }
        }
    }

    Ok(())
}

fn history_store(cli_root: Option<&std::path::Path>, config: &TomlConfig) -> HistoryStore {
    let root = resolve_root_folder(cli_root, config);
    debug!("Root folder: {}", root.display());
    HistoryStore::new(config.history_path(&root), config.history.limit)
}
