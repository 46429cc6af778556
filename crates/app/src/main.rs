//! Hackdesk - hackathon organizer console
//!
//! Walks organizers through creating a hackathon and tracks meal
//! distribution for participants, one session per organizer.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod console;
mod error;
mod state;
mod viewmodel;

use config::AppConfig;
use console::Command;
use state::SessionHub;

fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging; stdout is reserved for console output
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    tracing::info!("Starting Hackdesk");

    let seed = match config.seed_tracker() {
        Ok(tracker) => tracker,
        Err(e) => {
            tracing::error!("Failed to load roster: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(participants = seed.len(), "Roster ready");

    let mut hub = SessionHub::new(seed);
    if let Err(e) = run(&mut hub) {
        tracing::error!("Console failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Shutting down");
}

fn run(hub: &mut SessionHub) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Hackdesk. Type 'help' for commands.")?;
    print_output(&mut stdout, console::execute(hub, Command::Show))?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| console::execute(hub, command));
        match result {
            Ok(output) if output.quit => break,
            Ok(output) => print_output(&mut stdout, Ok(output))?,
            Err(e) => {
                tracing::debug!(input = %line, error = %e, "Command failed");
                writeln!(stdout, "error: {}", e)?;
            }
        }
    }
    Ok(())
}

fn print_output(out: &mut impl Write, output: error::Result<console::Output>) -> io::Result<()> {
    match output {
        Ok(output) => {
            for line in &output.lines {
                writeln!(out, "{}", line)?;
            }
            for notice in &output.notices {
                writeln!(out, "{}", notice)?;
            }
        }
        Err(e) => writeln!(out, "error: {}", e)?,
    }
    out.flush()
}
