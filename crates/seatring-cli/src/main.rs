//! seatring: inspect seat ring layouts
//!
//! Usage:
//!   seatring -c 6 -v 3                     # 6-max table seen from seat 3
//!   seatring -c 9 -o 0=alice -o 4=bob      # capacity clamped to 8
//!   seatring --config layout.toml --format json

mod args;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use seatring_layout::{SeatAssignment, TableCapacity};
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Format};
use crate::render::{render_json, render_text, TextOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = seatring_config::load(cli.config.as_deref())
        .context("Failed to load layout configuration")?;
    if let Some(direction) = cli.direction {
        config.direction = direction.into();
    }
    let engine = config
        .build_engine()
        .context("Invalid layout configuration")?;

    let capacity = TableCapacity::clamped(cli.capacity);
    let seats = SeatAssignment::fill_empty(capacity, cli.occupied);
    tracing::debug!(
        capacity = capacity.seats(),
        viewer = ?cli.viewer,
        seats = seats.len(),
        "computing layout"
    );
    let layout = engine.layout(capacity, cli.viewer, &seats);

    match cli.format {
        Format::Text => {
            let options = TextOptions {
                size: cli.width.zip(cli.height),
                display_numbers: cli.display_numbers,
            };
            print!("{}", render_text(&layout, options));
        }
        Format::Json => {
            println!("{}", render_json(&layout).context("Failed to encode layout")?);
        }
    }

    Ok(())
}
