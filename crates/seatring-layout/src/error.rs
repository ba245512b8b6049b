//! Errors raised while building layout tables.
//!
//! Computing a layout never fails; these only surface when a table is
//! assembled from configuration.

/// Error types for layout table construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutTableError {
    #[error("Unsupported table capacity: {0} (supported 2..=8)")]
    UnsupportedCapacity(i64),

    #[error("Too many anchors for {capacity}-seat table: at most {max}, got {got}")]
    TooManyAnchors { capacity: usize, max: usize, got: usize },

    #[error("Anchor {index} of {capacity}-seat table is off the table: ({left}, {top})")]
    AnchorOutOfBounds {
        capacity: usize,
        index: usize,
        left: f32,
        top: f32,
    },

    #[error("Anchor {index} of {capacity}-seat table repeats anchor {first}")]
    DuplicateAnchor {
        capacity: usize,
        index: usize,
        first: usize,
    },
}

pub type Result<T> = std::result::Result<T, LayoutTableError>;
