//! Top-level CLI definition and dispatch.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell as CompletionShell};
use colored::{control, Colorize};
use serde_json::json;
use thiserror::Error;

use badgers_kitchen::core::config::Config;
use badgers_kitchen::core::errors::BdkError;
use badgers_kitchen::menu::Menu;
use badgers_kitchen::tui::{run_kitchen, KitchenRuntimeConfig};

/// Badger's Kitchen — an animated dish board for the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "bdk",
    author,
    version,
    about = "Badger's Kitchen - today's dishes, pinned to a corkboard",
    long_about = None
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode (inspection commands).
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Increase verbosity.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Quiet mode (errors only).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Subcommand to execute. Defaults to `open`.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Open the kitchen board (the default).
    Open(OpenArgs),
    /// Print the effective menu without opening the board.
    Menu(MenuArgs),
    /// Show the effective configuration.
    Config(ConfigArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args, Default)]
struct OpenArgs {
    /// Load the menu from a TOML file instead of the builtin dishes.
    #[arg(long, value_name = "PATH")]
    menu: Option<PathBuf>,
    /// Directory of text-art files overriding the builtin gallery.
    #[arg(long, value_name = "DIR")]
    art_dir: Option<PathBuf>,
    /// Animation tick cadence in milliseconds.
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,
    /// Collapse scene transitions to a single step.
    #[arg(long)]
    reduced_motion: bool,
    /// Disable mouse capture (keyboard only).
    #[arg(long)]
    no_mouse: bool,
    /// Disable the JSONL interaction log for this session.
    #[arg(long)]
    no_log: bool,
}

#[derive(Debug, Clone, Args, Default)]
struct MenuArgs {
    /// Load the menu from a TOML file instead of the builtin dishes.
    #[arg(long, value_name = "PATH")]
    menu: Option<PathBuf>,
}

#[derive(Debug, Clone, Args, Default)]
struct ConfigArgs {
    /// Print the config file path instead of the contents.
    #[arg(long)]
    path: bool,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: CompletionShell,
}

/// CLI error type with explicit exit-code mapping.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input at runtime.
    #[error("{0}")]
    User(String),
    /// Environment/runtime failure.
    #[error("{0}")]
    Runtime(String),
    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    /// Output write failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code contract for the CLI.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Runtime(_) | Self::Io(_) => 2,
            Self::Json(_) => 3,
        }
    }
}

impl From<BdkError> for CliError {
    fn from(err: BdkError) -> Self {
        match err {
            BdkError::InvalidConfig { .. }
            | BdkError::MissingConfig { .. }
            | BdkError::ConfigParse { .. }
            | BdkError::InvalidMenu { .. }
            | BdkError::MissingMenu { .. } => Self::User(err.to_string()),
            _ => Self::Runtime(err.to_string()),
        }
    }
}

/// Dispatch CLI commands.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color || !io::stdout().is_terminal() {
        control::set_override(false);
    }

    match &cli.command {
        None => run_open(cli, &OpenArgs::default()),
        Some(Command::Open(args)) => run_open(cli, args),
        Some(Command::Menu(args)) => run_menu(cli, args),
        Some(Command::Config(args)) => run_config(cli, args),
        Some(Command::Completions(args)) => {
            let mut command = Cli::command();
            let binary_name = command.get_name().to_string();
            generate(args.shell, &mut command, binary_name, &mut io::stdout());
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, CliError> {
    Ok(Config::load(cli.config.as_deref())?)
}

fn run_open(cli: &Cli, args: &OpenArgs) -> Result<(), CliError> {
    let config = load_config(cli)?;

    let menu_file = args.menu.clone().or_else(|| config.menu.file.clone());
    let menu = Menu::load_or_builtin(menu_file.as_deref())?;

    let tick_ms = args.tick_ms.unwrap_or(config.ui.tick_rate_ms);
    let log_file = if args.no_log || !config.log.enabled {
        None
    } else {
        Some(config.log_file())
    };

    if cli.verbose
        && let Some(path) = &log_file
    {
        eprintln!("bdk: interaction log at {}", path.display());
    }

    run_kitchen(KitchenRuntimeConfig {
        menu,
        art_dir: args.art_dir.clone().or_else(|| config.assets.art_dir.clone()),
        tick_rate: Duration::from_millis(tick_ms),
        reduced_motion: args.reduced_motion || config.ui.reduced_motion,
        mouse: config.ui.mouse && !args.no_mouse,
        log_file,
    })?;
    Ok(())
}

fn run_menu(cli: &Cli, args: &MenuArgs) -> Result<(), CliError> {
    let config = load_config(cli)?;
    let menu_file = args.menu.clone().or_else(|| config.menu.file.clone());
    let menu = Menu::load_or_builtin(menu_file.as_deref())?;

    if cli.json {
        let dishes: Vec<_> = menu
            .iter()
            .map(|d| {
                json!({
                    "id": d.id,
                    "label": d.label,
                    "description": d.description,
                    "rotation": d.rotation,
                    "position": {"top": d.position.top, "left": d.position.left},
                })
            })
            .collect();
        let payload = json!({"command": "menu", "dish_count": menu.len(), "dishes": dishes});
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if cli.quiet {
        for dish in &menu {
            println!("{}", dish.id);
        }
        return Ok(());
    }

    println!("{}", "Today's menu".bold());
    for (i, dish) in menu.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, dish.label.bold(), dish.id.dimmed());
        println!("     {}", dish.description);
        if cli.verbose {
            println!(
                "     {}",
                format!(
                    "tilt {:+.1}°, pinned at {:.0}%/{:.0}%",
                    dish.rotation, dish.position.top, dish.position.left
                )
                .dimmed()
            );
        }
    }
    Ok(())
}

fn run_config(cli: &Cli, args: &ConfigArgs) -> Result<(), CliError> {
    let config = load_config(cli)?;

    if args.path {
        println!("{}", config.paths.config_file.display());
        return Ok(());
    }

    if cli.json {
        let payload = serde_json::to_value(&config)?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        let rendered = toml::to_string_pretty(&config)
            .map_err(|e| CliError::Runtime(format!("failed to render config: {e}")))?;
        print!("{rendered}");
    }
    Ok(())
}
