//! Per-capacity anchor tables
//!
//! Each entry lists the anchors of every seat except the viewer's, ordered by
//! relative distance from the viewer in clockwise deal order: entry 0 is the
//! seat right after the viewer, the last entry the seat right before.

use std::collections::BTreeMap;

use crate::error::{LayoutTableError, Result};
use crate::{AnchorPosition, TableCapacity};

/// Stock anchors, clockwise on screen starting bottom-left of the viewer
const STANDARD: [(u8, &[(f32, f32)]); 7] = [
    (2, &[(50.0, 12.0)]),
    (3, &[(15.0, 30.0), (85.0, 30.0)]),
    (4, &[(10.0, 45.0), (50.0, 12.0), (90.0, 45.0)]),
    (5, &[(10.0, 60.0), (25.0, 15.0), (75.0, 15.0), (90.0, 60.0)]),
    (
        6,
        &[(8.0, 62.0), (15.0, 22.0), (50.0, 10.0), (85.0, 22.0), (92.0, 62.0)],
    ),
    (
        7,
        &[
            (8.0, 65.0),
            (10.0, 30.0),
            (35.0, 10.0),
            (65.0, 10.0),
            (90.0, 30.0),
            (92.0, 65.0),
        ],
    ),
    (
        8,
        &[
            (10.0, 68.0),
            (6.0, 40.0),
            (20.0, 14.0),
            (50.0, 8.0),
            (80.0, 14.0),
            (94.0, 40.0),
            (90.0, 68.0),
        ],
    ),
];

/// Anchors for the non-viewer seats of each supported capacity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutTable {
    entries: BTreeMap<TableCapacity, Vec<AnchorPosition>>,
}

impl LayoutTable {
    /// Table with no capacities; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock layout for 2 to 8 seats
    pub fn standard() -> Self {
        let entries = STANDARD
            .iter()
            .map(|(seats, anchors)| {
                (
                    TableCapacity::clamped(*seats as i64),
                    anchors.iter().copied().map(AnchorPosition::from).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Replace the anchors for one capacity after validating them
    pub fn set(&mut self, seats: i64, anchors: Vec<AnchorPosition>) -> Result<()> {
        let capacity =
            TableCapacity::new(seats).ok_or(LayoutTableError::UnsupportedCapacity(seats))?;
        validate(capacity, &anchors)?;
        self.entries.insert(capacity, anchors);
        Ok(())
    }

    /// Builder form of [`LayoutTable::set`]
    pub fn with(mut self, seats: i64, anchors: Vec<AnchorPosition>) -> Result<Self> {
        self.set(seats, anchors)?;
        Ok(self)
    }

    /// Drop the anchors for one capacity
    pub fn remove(&mut self, capacity: TableCapacity) -> Option<Vec<AnchorPosition>> {
        self.entries.remove(&capacity)
    }

    /// Anchors for a capacity, if configured
    pub fn anchors(&self, capacity: TableCapacity) -> Option<&[AnchorPosition]> {
        self.entries.get(&capacity).map(Vec::as_slice)
    }

    /// Configured capacities, smallest first
    pub fn capacities(&self) -> impl Iterator<Item = TableCapacity> + '_ {
        self.entries.keys().copied()
    }
}

fn validate(capacity: TableCapacity, anchors: &[AnchorPosition]) -> Result<()> {
    let max = capacity.seats() - 1;
    if anchors.len() > max {
        return Err(LayoutTableError::TooManyAnchors {
            capacity: capacity.seats(),
            max,
            got: anchors.len(),
        });
    }

    for (index, anchor) in anchors.iter().enumerate() {
        if !anchor.is_within_table() {
            return Err(LayoutTableError::AnchorOutOfBounds {
                capacity: capacity.seats(),
                index,
                left: anchor.left,
                top: anchor.top,
            });
        }
        if let Some(first) = anchors[..index].iter().position(|a| a == anchor) {
            return Err(LayoutTableError::DuplicateAnchor {
                capacity: capacity.seats(),
                index,
                first,
            });
        }
    }

    Ok(())
}
