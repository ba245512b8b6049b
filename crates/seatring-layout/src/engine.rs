//! Hero-relative seat rotation
//!
//! The viewer's seat is pinned to a fixed bottom-center anchor. Every other
//! seat is placed by its distance from the viewer around the ring:
//!
//! ```text
//! relative = (seat - viewer) mod slots, with 0 mapped to slots
//! anchor   = table[slots][clamp(relative - 1)]
//! ```
//!
//! A non-viewer seat sharing the viewer's residue (possible when the viewer
//! index lies outside the table) is pushed to the far end of the rotation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{AnchorPosition, Direction, LayoutTable, Occupant, SeatAssignment, TableCapacity};

/// Where one seat lands on screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatPlacement {
    pub seat: usize,
    pub occupant: Occupant,
    pub anchor: AnchorPosition,
    /// Distance from the viewer in deal order; 0 for the viewer's own seat
    pub relative: usize,
    pub is_viewer: bool,
    /// No anchors were configured for the capacity, so the center was used
    pub fallback: bool,
}

/// Placements for every seat passed to [`SeatLayoutEngine::layout`], in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatLayout {
    pub capacity: TableCapacity,
    pub viewer: usize,
    pub placements: Vec<SeatPlacement>,
}

impl SeatLayout {
    /// Anchor per seat index
    pub fn anchors(&self) -> BTreeMap<usize, AnchorPosition> {
        self.placements.iter().map(|p| (p.seat, p.anchor)).collect()
    }

    /// Placement of a seat index
    pub fn get(&self, seat: usize) -> Option<&SeatPlacement> {
        self.placements.iter().find(|p| p.seat == seat)
    }

    /// Placement of the viewer's own seat, if it was part of the input
    pub fn viewer_placement(&self) -> Option<&SeatPlacement> {
        self.placements.iter().find(|p| p.is_viewer)
    }

    /// Whether any seat fell back to the center anchor
    pub fn used_fallback(&self) -> bool {
        self.placements.iter().any(|p| p.fallback)
    }
}

/// Computes seat anchors from a layout table
#[derive(Debug, Clone)]
pub struct SeatLayoutEngine {
    table: LayoutTable,
    direction: Direction,
    viewer_anchor: AnchorPosition,
    fallback_anchor: AnchorPosition,
}

impl Default for SeatLayoutEngine {
    fn default() -> Self {
        Self::new(LayoutTable::standard())
    }
}

impl SeatLayoutEngine {
    /// Engine over `table`, dealing clockwise
    pub fn new(table: LayoutTable) -> Self {
        Self {
            table,
            direction: Direction::Clockwise,
            viewer_anchor: AnchorPosition::VIEWER,
            fallback_anchor: AnchorPosition::CENTER,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_viewer_anchor(mut self, anchor: AnchorPosition) -> Self {
        self.viewer_anchor = anchor;
        self
    }

    pub fn with_fallback_anchor(mut self, anchor: AnchorPosition) -> Self {
        self.fallback_anchor = anchor;
        self
    }

    pub fn table(&self) -> &LayoutTable {
        &self.table
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn viewer_anchor(&self) -> AnchorPosition {
        self.viewer_anchor
    }

    pub fn fallback_anchor(&self) -> AnchorPosition {
        self.fallback_anchor
    }

    /// Place every seat. A missing viewer (spectator) sits at index 0.
    pub fn layout(
        &self,
        capacity: TableCapacity,
        viewer: Option<usize>,
        seats: &[SeatAssignment],
    ) -> SeatLayout {
        let viewer = viewer.unwrap_or(0);
        let anchors = self.usable_anchors(capacity);
        if anchors.is_none() && seats.iter().any(|s| s.seat != viewer) {
            tracing::warn!(
                capacity = capacity.seats(),
                fallback = ?self.fallback_anchor,
                "no seat anchors configured for table capacity, using fallback"
            );
        }

        let placements = seats
            .iter()
            .map(|assignment| {
                let mut placement = self.place(capacity, viewer, assignment.seat, anchors);
                placement.occupant = assignment.occupant.clone();
                placement
            })
            .collect();

        SeatLayout {
            capacity,
            viewer,
            placements,
        }
    }

    /// Anchor per seat index
    pub fn positions(
        &self,
        capacity: TableCapacity,
        viewer: Option<usize>,
        seats: &[SeatAssignment],
    ) -> BTreeMap<usize, AnchorPosition> {
        self.layout(capacity, viewer, seats).anchors()
    }

    /// Anchor for a single seat index
    pub fn anchor_for(
        &self,
        capacity: TableCapacity,
        viewer: Option<usize>,
        seat: usize,
    ) -> AnchorPosition {
        let anchors = self.usable_anchors(capacity);
        self.place(capacity, viewer.unwrap_or(0), seat, anchors).anchor
    }

    fn usable_anchors(&self, capacity: TableCapacity) -> Option<&[AnchorPosition]> {
        self.table.anchors(capacity).filter(|a| !a.is_empty())
    }

    fn place(
        &self,
        capacity: TableCapacity,
        viewer: usize,
        seat: usize,
        anchors: Option<&[AnchorPosition]>,
    ) -> SeatPlacement {
        if seat == viewer {
            return SeatPlacement {
                seat,
                occupant: Occupant::Empty,
                anchor: self.viewer_anchor,
                relative: 0,
                is_viewer: true,
                fallback: false,
            };
        }

        let relative = relative_distance(capacity, viewer, seat);
        let (anchor, fallback) = match anchors {
            Some(anchors) => {
                let index = (relative - 1).min(anchors.len() - 1);
                (self.direction.orient(anchors[index]), false)
            }
            None => (self.fallback_anchor, true),
        };

        SeatPlacement {
            seat,
            occupant: Occupant::Empty,
            anchor,
            relative,
            is_viewer: false,
            fallback,
        }
    }
}

/// Distance of a non-viewer `seat` from `viewer` in deal order, in `1..=slots`
pub fn relative_distance(capacity: TableCapacity, viewer: usize, seat: usize) -> usize {
    let slots = capacity.seats();
    let relative = (seat % slots + slots - viewer % slots) % slots;
    if relative == 0 {
        slots
    } else {
        relative
    }
}

/// Anchor per seat using the stock clockwise layout.
///
/// `capacity` is clamped into the supported range and a missing viewer sits at
/// index 0. Never panics.
pub fn layout_seats(
    capacity: i64,
    viewer: Option<usize>,
    seats: &[SeatAssignment],
) -> BTreeMap<usize, AnchorPosition> {
    SeatLayoutEngine::default().positions(TableCapacity::clamped(capacity), viewer, seats)
}
