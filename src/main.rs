use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use deskcalc::calculator::{AngleMode, Calculator};
use deskcalc::config::{Settings, load_settings};
use deskcalc::console::{process_line, run_console, run_keypad};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "deskcalc", version, about = "A desk calculator for the terminal")]
struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Angle mode for trigonometric functions (deg or rad)
    #[arg(long, global = true)]
    angle: Option<AngleMode>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate `<number> <operator> <number>` triples from stdin
    Console,
    /// Drive the keypad with key names from stdin
    Keypad {
        /// Apply one line of keys, print the result and exit
        #[arg(long)]
        keys: Option<String>,
    },
    /// Print the effective settings as TOML
    Config,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "deskcalc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn keypad_calculator(settings: &Settings, angle: Option<AngleMode>) -> Calculator {
    Calculator::new()
        .with_history_capacity(settings.history_capacity)
        .with_max_display_len(settings.max_display_len)
        .with_angle_mode(angle.unwrap_or(settings.angle_mode))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = load_settings(cli.config.as_deref())?;
    info!(?settings, "settings loaded");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or(Command::Console) {
        Command::Console => {
            let angle = cli.angle.unwrap_or(settings.console_angle_mode);
            run_console(stdin, &mut stdout, angle)?;
        }
        Command::Keypad { keys: Some(keys) } => {
            let mut calc = keypad_calculator(&settings, cli.angle);
            process_line(&mut calc, &keys, &mut stdout)?;
        }
        Command::Keypad { keys: None } => {
            let mut calc = keypad_calculator(&settings, cli.angle);
            run_keypad(stdin, &mut stdout, &mut calc)?;
        }
        Command::Config => {
            write!(stdout, "{}", settings.to_toml()?)?;
        }
    }

    stdout.flush()?;
    Ok(())
}
