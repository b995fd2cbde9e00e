//! Rootline CLI entry point

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "rootline")]
#[command(about = "File-level dependency analysis for web projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project root path (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// Analyzer configuration file (defaults to rootline.toml in the root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the files the analyzer sees
    Scan,
    /// Report every circular dependency in the project
    Cycles,
    /// Summarize the dependencies of one file
    Summary {
        /// File path, relative to the root or absolute
        file: PathBuf,
    },
    /// List the files that depend on one file
    Dependents {
        /// File path, relative to the root or absolute
        file: PathBuf,
    },
    /// Print the whole dependency graph
    Graph {
        #[arg(short, long, value_enum, default_value_t = GraphFormat::Dot)]
        format: GraphFormat,
    },
    /// Ask a question about the dependencies of one file
    Chat {
        /// File the question is about
        file: PathBuf,

        /// The question
        question: String,

        /// Completion provider
        #[arg(short, long, default_value = "openai")]
        provider: String,

        /// Model name passed to the provider
        #[arg(short, long)]
        model: Option<String>,

        /// Base URL of an OpenAI-compatible endpoint
        #[arg(short, long)]
        endpoint: Option<String>,
    },
    /// Show version
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum GraphFormat {
    Dot,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("rootline={}", log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Rootline v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Project root: {}", cli.root.display());

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Scan => commands::scan(&cli.root, config).await,
        Commands::Cycles => commands::cycles(&cli.root, config).await,
        Commands::Summary { file } => commands::summary(&cli.root, config, &file).await,
        Commands::Dependents { file } => commands::dependents(&cli.root, config, &file).await,
        Commands::Graph { format } => match format {
            GraphFormat::Dot => commands::graph_dot(&cli.root, config).await,
            GraphFormat::Json => commands::graph_json(&cli.root, config).await,
        },
        Commands::Chat {
            file,
            question,
            provider,
            model,
            endpoint,
        } => commands::chat(&cli.root, config, &file, &question, &provider, model, endpoint).await,
        Commands::Version => {
            println!("Rootline v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
