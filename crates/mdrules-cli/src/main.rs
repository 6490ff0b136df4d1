//! mdrules - render markdown into UI element trees

mod outline;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mdrules_core::{parser, Config, Node};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdrules")]
#[command(about = "Render markdown into UI element descriptions", version)]
struct Cli {
    /// Config file (defaults to ~/.mdrules/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document and print the element tree
    Render {
        /// Markdown file, or `-` for stdin
        input: String,

        /// Treat the input as a JSON node tree instead of markdown
        #[arg(long)]
        ast: bool,

        #[arg(long, value_enum, default_value_t = Format::Outline)]
        format: Format,
    },
    /// Parse markdown and print the node tree as JSON
    Parse {
        /// Markdown file, or `-` for stdin
        input: String,
    },
    /// Print the effective style table as TOML
    Styles,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Outline,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_default().context("Failed to load default config")?,
    };

    match cli.command {
        Commands::Render { input, ast, format } => {
            let text = read_input(&input)?;
            let nodes = if ast {
                Node::from_json(&text).context("Invalid node tree")?
            } else {
                parser::parse(&text)
            };
            info!(nodes = nodes.len(), "document loaded");

            let root = config.renderer()?.render_document(&nodes);
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&root)?),
                Format::Outline => print!("{}", outline::outline(&root)?),
            }
        }
        Commands::Parse { input } => {
            let nodes = parser::parse(&read_input(&input)?);
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }
        Commands::Styles => {
            let table = config.style_table()?;
            print!("{}", toml::to_string_pretty(&table.to_named())?);
        }
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}
