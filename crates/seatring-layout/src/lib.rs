//! seatring-layout: seat ring layout for poker table clients
//!
//! Given a table capacity, the viewer's seat and the seats around the table,
//! this crate computes a normalized anchor for every seat such that:
//! - the viewer's own seat is always rendered at the bottom center
//! - every other seat keeps a fixed slot determined by its distance from the
//!   viewer in deal order, whether the seat is occupied or not
//! - bad input (odd capacities, out-of-range viewer indices, missing layout
//!   tables) degrades to a safe anchor instead of failing
//!
//! ```
//! use seatring_layout::{layout_seats, AnchorPosition, SeatAssignment, TableCapacity};
//!
//! let seats = SeatAssignment::ring(TableCapacity::clamped(6));
//! let anchors = layout_seats(6, Some(3), &seats);
//! assert_eq!(anchors[&3], AnchorPosition::VIEWER);
//! ```

pub mod anchor;
pub mod capacity;
pub mod direction;
pub mod engine;
pub mod error;
pub mod seat;
pub mod table;

// Re-export commonly used types
pub use anchor::AnchorPosition;
pub use capacity::TableCapacity;
pub use direction::Direction;
pub use engine::{layout_seats, relative_distance, SeatLayout, SeatLayoutEngine, SeatPlacement};
pub use error::LayoutTableError;
pub use seat::{Occupant, SeatAssignment};
pub use table::LayoutTable;
