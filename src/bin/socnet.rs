//! CLI entry point for the `socnet` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use social_graph::cli::commands;
use social_graph::{load_config, ErrorKind, IngestConfig, IngestMode};

#[derive(Parser)]
#[command(
    name = "socnet",
    about = "socnet: friendship graphs, shortest paths and network diameter"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// TOML file with ingestion settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for random friendships (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Random friendships per user in "users" mode (overrides the config file)
    #[arg(long, global = true)]
    friends: Option<usize>,

    /// Input mode: "users" (one name per line) or "pairs" (one or two names per line)
    #[arg(long, global = true)]
    mode: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every user and their friends
    Show {
        /// Input file
        file: PathBuf,
    },
    /// Shortest friendship chain between two users
    Path {
        /// Input file
        file: PathBuf,
        /// Starting user
        source: String,
        /// Target user
        destination: String,
    },
    /// Longest shortest path between connected users
    Diameter {
        /// Input file
        file: PathBuf,
    },
    /// Pick a user uniformly at random
    Random {
        /// Input file
        file: PathBuf,
    },
    /// Detailed statistics about the network
    Stats {
        /// Input file
        file: PathBuf,
    },
}

fn resolve_config(cli: &Cli) -> IngestConfig {
    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(6);
            }
        },
        None => IngestConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(friends) = cli.friends {
        config.friendships_per_user = friends;
    }
    if let Some(mode) = &cli.mode {
        config.mode = match IngestMode::from_name(mode) {
            Some(mode) => mode,
            None => {
                eprintln!("Invalid mode: {}", mode);
                process::exit(3);
            }
        };
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    config
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    let config = resolve_config(&cli);

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let result = match &cli.command {
        Commands::Show { file } => commands::cmd_show(file, &config, json),
        Commands::Path {
            file,
            source,
            destination,
        } => commands::cmd_path(file, &config, source, destination, json),
        Commands::Diameter { file } => commands::cmd_diameter(file, &config, json),
        Commands::Random { file } => commands::cmd_random(file, &config, json),
        Commands::Stats { file } => commands::cmd_stats(file, &config, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match e.kind() {
            ErrorKind::Io => 1,
            ErrorKind::Input => 6,
            ErrorKind::InvalidArgument => 3,
            ErrorKind::NotFound => 4,
            ErrorKind::EmptyCollection => 5,
        };
        process::exit(code);
    }
}
