//! Car Configurator
//!
//! Interactive terminal front-end: every edit is propagated through the
//! solver service, the derived profile is recomputed locally, and a complete
//! configuration can be requested at any time.

use anyhow::Result;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use car_configurator::catalog::Preset;
use car_configurator::utils::init_logging;
use car_configurator::{ui, Configurator, ConfiguratorError, HttpSolver, SolverConfig, Variable};

// ──────────────────────────────────────────────────────────────────────────────
// COMMANDS
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
enum Command {
    Set(Variable, String),
    Clear(Variable),
    Preset(String),
    Presets,
    Solve,
    Reset,
    Show,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            ["set", var, value] => Ok(Command::Set(variable(var)?, value.to_string())),
            ["clear", var] => Ok(Command::Clear(variable(var)?)),
            ["preset", name] => Ok(Command::Preset(name.to_string())),
            ["presets"] => Ok(Command::Presets),
            ["solve"] => Ok(Command::Solve),
            ["reset"] => Ok(Command::Reset),
            ["show"] | [] => Ok(Command::Show),
            ["help"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            _ => Err(format!("Unrecognised command: '{}' (try 'help')", line.trim())),
        }
    }
}

fn variable(name: &str) -> Result<Variable, String> {
    Variable::parse(name).map_err(|e| e.to_string())
}

const HELP: &str = "\
Commands:
  set <variable> <value>   choose a value (e.g. set engine petrol_2_0)
  clear <variable>         make a variable unspecified
  preset <name>            load a preset (see 'presets')
  solve                    ask for a complete configuration
  reset                    clear every choice
  show                     redraw the current state
  quit                     leave";

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let config = SolverConfig::from_env();
    let solver = HttpSolver::new(&config)?;
    info!("Using solver service at {}", solver.base_url());

    println!("\n{}", "═".repeat(60));
    println!("🚗 Car Configurator");
    println!("{}", "═".repeat(60));
    println!("Solver: {}", config.base_url);
    println!("{}\n", HELP);

    let configurator = Configurator::new(Arc::new(solver));
    if let Err(e) = configurator.start().await {
        warn!("Initial propagation failed: {}", e);
    }
    println!("{}", ui::render(&configurator.snapshot().await));

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        let outcome: Result<(), ConfiguratorError> = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Presets => {
                println!("Presets: {}", Preset::names().collect::<Vec<_>>().join(", "));
                continue;
            }
            Command::Show => Ok(()),
            Command::Set(variable, token) => configurator.select_token(variable, &token).await.map(drop),
            Command::Clear(variable) => configurator.clear(variable).await.map(drop),
            Command::Preset(name) => configurator.apply_preset(&name).await.map(drop),
            Command::Reset => configurator.reset().await.map(drop).map_err(Into::into),
            Command::Solve => configurator.solve().await.map(drop).map_err(Into::into),
        };

        if let Err(e) = outcome {
            println!("⚠️  {}", e);
        }
        println!("{}", ui::render(&configurator.snapshot().await));
    }

    println!("👋 Goodbye");
    Ok(())
}
