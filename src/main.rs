mod repl;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use orca::calculator::{Mode, evaluate_expression, render_keypad};
use orca::config::Config;
use orca::help;
use orca::panel::Panel;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "orca",
    version,
    about = "On-the-fly Ready Calculator Add-on",
    disable_help_subcommand = true
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum number of history entries to keep.
    #[arg(long, global = true)]
    history_capacity: Option<usize>,

    /// Start with the advanced keypad.
    #[arg(long, global = true)]
    advanced: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate expressions and print their results.
    Eval {
        #[arg(required = true, allow_hyphen_values = true)]
        expressions: Vec<String>,
    },
    /// Interactive calculator session (default).
    Repl,
    /// Print the keypad layout.
    Keypad,
    /// Print the operations guide.
    Help,
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Command::Repl) {
        Command::Eval { expressions } => eval(&expressions),
        Command::Repl => {
            let mut panel = Panel::new(config);
            repl::run(&mut panel, io::stdin().lock(), io::stdout().lock())
        }
        Command::Keypad => {
            let mode = config.mode();
            println!("{}", render_keypad(mode));
            if mode == Mode::Simple {
                println!("({}: --advanced)", mode.switch_label());
            }
            Ok(())
        }
        Command::Help => {
            print!("{}", help::render());
            Ok(())
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(capacity) = cli.history_capacity {
        config.history_capacity = capacity;
    }
    if cli.advanced {
        config.advanced_mode = true;
    }
    config.validate().context("invalid configuration")
}

fn eval(expressions: &[String]) -> Result<()> {
    let mut failed = 0;
    for expression in expressions {
        let result = evaluate_expression(expression);
        if !result.is_success() {
            failed += 1;
        }
        println!("{}", result.display());
    }
    if failed > 0 {
        bail!("{failed} of {} expressions could not be evaluated", expressions.len());
    }
    Ok(())
}
