pub use seatring_config as config;
pub use seatring_layout::{
    anchor, capacity, direction, engine, error, layout_seats, relative_distance, seat, table,
    AnchorPosition, Direction, LayoutTable, LayoutTableError, Occupant, SeatAssignment,
    SeatLayout, SeatLayoutEngine, SeatPlacement, TableCapacity,
};
