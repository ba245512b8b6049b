//! Seat assignments as delivered by the game-state feed

use serde::{Deserialize, Serialize};

use crate::TableCapacity;

/// Who sits in a seat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Occupant {
    /// Open seat, still rendered as a placeholder
    #[default]
    Empty,
    /// Seated player identity
    Player(String),
}

impl Occupant {
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupant::Empty)
    }

    pub fn player_id(&self) -> Option<&str> {
        match self {
            Occupant::Player(id) => Some(id),
            Occupant::Empty => None,
        }
    }
}

/// A logical seat (0-based index) and its occupant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    /// 0-based seat index, independent of on-screen position
    pub seat: usize,
    #[serde(default)]
    pub occupant: Occupant,
}

impl SeatAssignment {
    /// Seat taken by a player
    pub fn occupied(seat: usize, player_id: impl Into<String>) -> Self {
        Self {
            seat,
            occupant: Occupant::Player(player_id.into()),
        }
    }

    /// Open seat
    pub fn empty(seat: usize) -> Self {
        Self {
            seat,
            occupant: Occupant::Empty,
        }
    }

    /// Every seat of a table, all empty
    pub fn ring(capacity: TableCapacity) -> Vec<SeatAssignment> {
        (0..capacity.seats()).map(Self::empty).collect()
    }

    /// Complete `occupied` with empty placeholders for every missing index of the table.
    ///
    /// The result is sorted by seat index. Assignments outside the table are kept.
    pub fn fill_empty(
        capacity: TableCapacity,
        occupied: impl IntoIterator<Item = SeatAssignment>,
    ) -> Vec<SeatAssignment> {
        let mut seats: Vec<SeatAssignment> = occupied.into_iter().collect();
        for seat in 0..capacity.seats() {
            if !seats.iter().any(|s| s.seat == seat) {
                seats.push(Self::empty(seat));
            }
        }
        seats.sort_by_key(|s| s.seat);
        seats
    }

    /// 1-based seat number shown to players
    pub fn display_number(&self) -> usize {
        self.seat + 1
    }

    /// Seat index for a 1-based display number; `0` is not a valid display number
    pub fn index_from_display(display: usize) -> Option<usize> {
        display.checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_empty() {
        let capacity = TableCapacity::clamped(4);
        let seats = SeatAssignment::fill_empty(
            capacity,
            vec![
                SeatAssignment::occupied(2, "bob"),
                SeatAssignment::occupied(0, "alice"),
            ],
        );
        assert_eq!(seats.len(), 4);
        assert_eq!(seats[0].occupant.player_id(), Some("alice"));
        assert!(seats[1].occupant.is_empty());
        assert_eq!(seats[2].occupant.player_id(), Some("bob"));
        assert!(seats[3].occupant.is_empty());
    }

    #[test]
    fn test_display_numbers() {
        assert_eq!(SeatAssignment::empty(0).display_number(), 1);
        assert_eq!(SeatAssignment::index_from_display(6), Some(5));
        assert_eq!(SeatAssignment::index_from_display(0), None);
    }

    #[test]
    fn test_occupant_defaults_to_empty() {
        let seat: SeatAssignment = serde_json::from_str(r#"{"seat": 3}"#).unwrap();
        assert_eq!(seat, SeatAssignment::empty(3));

        let seat: SeatAssignment =
            serde_json::from_str(r#"{"seat": 1, "occupant": {"kind": "player", "id": "p1"}}"#)
                .unwrap();
        assert_eq!(seat, SeatAssignment::occupied(1, "p1"));
    }
}
