//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use seatring_layout::{Direction, SeatAssignment};

/// Print where each seat of a poker table lands relative to the viewer
#[derive(Parser, Debug)]
#[command(name = "seatring", version, about)]
pub struct Cli {
    /// Table capacity; clamped into 2..=8
    #[arg(long, short, default_value_t = 6, allow_negative_numbers = true)]
    pub capacity: i64,
    /// Viewer's 0-based seat index (omit for spectators)
    #[arg(long, short)]
    pub viewer: Option<usize>,
    /// Occupied seat as SEAT=PLAYER, repeatable; other seats render empty
    #[arg(long = "occupied", short = 'o', value_parser = parse_occupied)]
    pub occupied: Vec<SeatAssignment>,
    /// Deal direction, overriding the config file
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,
    /// Layout config file (defaults to $SEATRING_CONFIG, then the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Table width in pixels, adds pixel coordinates to text output
    #[arg(long, requires = "height")]
    pub width: Option<f32>,
    /// Table height in pixels
    #[arg(long, requires = "width")]
    pub height: Option<f32>,
    /// Show 1-based seat numbers instead of indices
    #[arg(long)]
    pub display_numbers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Clockwise,
    CounterClockwise,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Clockwise => Direction::Clockwise,
            DirectionArg::CounterClockwise => Direction::CounterClockwise,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

fn parse_occupied(value: &str) -> Result<SeatAssignment, String> {
    let (seat, player) = value
        .split_once('=')
        .ok_or_else(|| format!("expected SEAT=PLAYER, got `{value}`"))?;
    let seat: usize = seat
        .trim()
        .parse()
        .map_err(|e| format!("invalid seat `{seat}`: {e}"))?;
    let player = player.trim();
    if player.is_empty() {
        return Err(format!("missing player for seat {seat}"));
    }
    Ok(SeatAssignment::occupied(seat, player))
}
