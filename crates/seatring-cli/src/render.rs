//! Text and JSON output for a computed layout

use std::fmt::Write;

use seatring_layout::SeatLayout;
use serde::Serialize;

/// Options controlling the text table
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    pub size: Option<(f32, f32)>,
    pub display_numbers: bool,
}

/// One row per seat: seat, player, anchor, relative distance and optional pixels
pub fn render_text(layout: &SeatLayout, options: TextOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} table, viewer at seat {}",
        layout.capacity,
        seat_label(layout.viewer, options.display_numbers)
    );
    let _ = writeln!(
        out,
        "{:<6}{:<14}{:>8}{:>8}{:>10}",
        "seat", "player", "left%", "top%", "relative"
    );

    for placement in &layout.placements {
        let player = placement.occupant.player_id().unwrap_or("(empty)");
        let relative = if placement.is_viewer {
            "viewer".to_string()
        } else {
            placement.relative.to_string()
        };
        let _ = write!(
            out,
            "{:<6}{:<14}{:>8.1}{:>8.1}{:>10}",
            seat_label(placement.seat, options.display_numbers),
            player,
            placement.anchor.left,
            placement.anchor.top,
            relative
        );
        if let Some((width, height)) = options.size {
            let (x, y) = placement.anchor.to_pixels(width, height);
            let _ = write!(out, "  ({x:.0}, {y:.0})px");
        }
        if placement.fallback {
            out.push_str("  [fallback]");
        }
        out.push('\n');
    }

    out
}

#[derive(Serialize)]
struct JsonLayout<'a> {
    #[serde(flatten)]
    layout: &'a SeatLayout,
    css: Vec<CssEntry>,
}

#[derive(Serialize)]
struct CssEntry {
    seat: usize,
    style: String,
}

/// Pretty JSON of the layout with a ready-made style string per seat
pub fn render_json(layout: &SeatLayout) -> serde_json::Result<String> {
    let css = layout
        .placements
        .iter()
        .map(|p| CssEntry {
            seat: p.seat,
            style: p.anchor.css(),
        })
        .collect();
    serde_json::to_string_pretty(&JsonLayout { layout, css })
}

fn seat_label(seat: usize, display_numbers: bool) -> String {
    if display_numbers {
        format!("#{}", seat + 1)
    } else {
        seat.to_string()
    }
}
