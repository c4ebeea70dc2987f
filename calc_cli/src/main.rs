//! # Calcdeck CLI
//!
//! Command-line and terminal front end for the calculator catalogue.
//! Every calculator can be run non-interactively (`calcdeck run`) or
//! explored in the two-pane TUI (`calcdeck tui`).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod tui;

use commands::{cmd_config_init, cmd_config_show, cmd_list, cmd_run, cmd_show, load_settings, RunArgs};
use logging::init_logging;

#[derive(Parser)]
#[command(name = "calcdeck", version)]
#[command(about = "Everyday calculators: finance, health, dates, math")]
#[command(after_help = "\
QUICK START:
  calcdeck list                              # Browse calculators
  calcdeck show mortgage                     # Fields and defaults
  calcdeck run tip -s bill_amount=80 -s people=4
  calcdeck run bmi --json                    # Machine-readable output
  calcdeck run quadratic -s b=5 --export     # Save quadratic-results.pdf
  calcdeck tui                               # Interactive two-pane UI")]
struct Cli {
    /// Settings file (default: ./calcdeck.json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List calculators, grouped by category
    List {
        /// Only show one category (financial, health, math, general, fun)
        #[arg(short, long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a calculator's fields and their defaults
    Show {
        /// Calculator slug, e.g. `mortgage`
        slug: String,
    },
    /// Run a calculator and print its results
    Run {
        /// Calculator slug
        slug: String,
        /// Set a field, `KEY=VALUE` (repeatable)
        #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// Load the whole input from a JSON file before applying --set
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Export the results as a PDF
        #[arg(long)]
        export: bool,
        /// Export directory (default: settings export_dir)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
        /// Text layout width
        #[arg(long, default_value_t = 80)]
        width: usize,
    },
    /// Open the interactive terminal UI
    Tui {
        /// Start on this calculator instead of the picker
        slug: Option<String>,
    },
    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `calcdeck config`
#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective settings
    Show,
    /// Write a default settings file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (settings, settings_path) = load_settings(cli.config.as_deref())?;

    // Log lines on stderr would tear the TUI; keep it quiet unless RUST_LOG asks.
    let level = match cli.command {
        Commands::Tui { .. } => "off",
        _ => settings.log_level.as_str(),
    };
    init_logging(level);

    match cli.command {
        Commands::List { category, json } => cmd_list(category.as_deref(), json),
        Commands::Show { slug } => cmd_show(&slug, &settings),
        Commands::Run {
            slug,
            set,
            input,
            json,
            export,
            out_dir,
            width,
        } => cmd_run(
            &settings,
            RunArgs {
                slug,
                set,
                input,
                json,
                export,
                out_dir,
                width,
            },
        ),
        Commands::Tui { slug } => tui::run(settings, slug.as_deref()),
        Commands::Config { command } => match command {
            ConfigCommand::Show => cmd_config_show(&settings, &settings_path),
            ConfigCommand::Init { force } => cmd_config_init(&settings_path, force),
        },
    }
}
