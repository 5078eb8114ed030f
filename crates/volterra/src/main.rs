//! Volterra — terminal dashboard for options-market analysis.
//!
//! The binary wires configuration, logging and the analysis API client
//! around the navigation core, then hands control to the ratatui shell.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use tracing::error;

use volterra::config::VolterraConfig;
use volterra::logging::{self, LogConfig};
use volterra::tui;
use volterra_nav::RouteTable;

#[derive(Parser, Debug)]
#[command(name = "volterra", about = "Terminal dashboard for options-market analysis")]
struct Cli {
    /// Enable verbose logging (info/debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Config file path (defaults to ~/.volterra/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Analysis API base URL override
    #[arg(long, global = true, env = "VOLTERRA_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the terminal dashboard (default)
    Tui(tui::TuiArgs),

    /// Print the command-bar route table
    Routes {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let tui_mode = matches!(cli.command, None | Some(Commands::Tui(_)));
    if let Err(e) = logging::init_logging(LogConfig {
        verbose: cli.verbose,
        tui_mode,
    }) {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => VolterraConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => VolterraConfig::load_default().context("Failed to load config")?,
    };
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }

    match cli.command {
        None => tui::run(tui::TuiArgs::default(), config),
        Some(Commands::Tui(args)) => tui::run(args, config),
        Some(Commands::Routes { json }) => print_routes(json),
    }
}

fn print_routes(json: bool) -> Result<()> {
    let table = RouteTable::new();

    if json {
        println!("{}", serde_json::to_string_pretty(table.entries())?);
        return Ok(());
    }

    let mut out = Table::new();
    out.load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Token", "View", "Tab"]);
    for entry in table.entries() {
        out.add_row(vec![
            entry.token,
            entry.view.as_str(),
            entry.tab.unwrap_or("-"),
        ]);
    }
    println!("{out}");
    Ok(())
}
