//! Same-screen terminal battleship.

use anyhow::Context;
use battleship_core::FleetPlacer;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod input;
mod render;
mod session;

use session::{Reply, Session};

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> anyhow::Result<()> {
    // Initialize tracing; quiet by default so log lines don't break up the boards
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Optional fixed seed for `auto` placement
    let placer = match std::env::var("BATTLESHIP_SEED") {
        Ok(seed) => {
            let seed: u64 = seed
                .parse()
                .with_context(|| format!("BATTLESHIP_SEED must be an integer, got {:?}", seed))?;
            info!(seed, "using fixed placement seed");
            FleetPlacer::with_seed(seed)
        }
        Err(_) => FleetPlacer::new(),
    };

    let mut session = Session::new(placer);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", render::render(&session.game))?;
    write!(out, "> ")?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }

        let reply = match input::parse_line(&line) {
            Ok(input) => session.handle(input),
            Err(err) => Reply::Message(err.to_string()),
        };

        match reply {
            Reply::Quit => break,
            Reply::Message(message) => writeln!(out, "{}", message)?,
            Reply::Redraw(message) => {
                writeln!(out)?;
                writeln!(out, "{}", render::render(&session.game))?;
                if !message.is_empty() {
                    writeln!(out, "{}", message)?;
                }
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    info!("goodbye");
    Ok(())
}
