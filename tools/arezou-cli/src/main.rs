//! Are-zōu CLI - render and inspect the product page locally.
//!
//! Commands:
//! - `arezou render` - Stream the page for a state into a file or stdout
//! - `arezou state` - Decode a query string and apply actions
//! - `arezou actions` - List every page action
//! - `arezou config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ActionsArgs, ConfigArgs, RenderArgs, StateArgs};

/// Are-zōu CLI - render and inspect the product page
#[derive(Parser)]
#[command(name = "arezou")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page for a state
    Render(RenderArgs),

    /// Show the state a query string and actions lead to
    State(StateArgs),

    /// List every page action
    Actions(ActionsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .try_init();
    }

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::State(args) => commands::state::run(args, &ctx).await,
        Commands::Actions(args) => commands::actions::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
