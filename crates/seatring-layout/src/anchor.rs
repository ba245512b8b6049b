//! Anchor positions for seat nodes on the table surface

use serde::{Deserialize, Serialize};

/// A normalized position on the table's bounding box.
///
/// Both coordinates are percentages: `left` runs from 0.0 (left edge) to 100.0
/// (right edge), `top` from 0.0 (top edge) to 100.0 (bottom edge). Renderers
/// place a seat node at this point with a centering transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPosition {
    /// Horizontal offset in percent
    pub left: f32,
    /// Vertical offset in percent
    pub top: f32,
}

impl AnchorPosition {
    /// Fixed bottom-center anchor reserved for the viewer's own seat
    pub const VIEWER: Self = Self::new(50.0, 80.0);

    /// Center of the table, used when no layout is known for a capacity
    pub const CENTER: Self = Self::new(50.0, 50.0);

    /// Create an anchor from percentage offsets
    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    /// Whether both coordinates are finite and inside `[0, 100]`
    pub fn is_within_table(&self) -> bool {
        let inside = |v: f32| v.is_finite() && (0.0..=100.0).contains(&v);
        inside(self.left) && inside(self.top)
    }

    /// Reflect the anchor across the vertical center line
    pub fn mirrored(&self) -> Self {
        Self::new(100.0 - self.left, self.top)
    }

    /// Convert to absolute coordinates inside a `width` x `height` box
    pub fn to_pixels(&self, width: f32, height: f32) -> (f32, f32) {
        (self.left / 100.0 * width, self.top / 100.0 * height)
    }

    /// Inline style fragment placing a node centered on this anchor
    pub fn css(&self) -> String {
        format!(
            "left: {}%; top: {}%; transform: translate(-50%, -50%);",
            self.left, self.top
        )
    }
}

impl Default for AnchorPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

impl From<(f32, f32)> for AnchorPosition {
    fn from((left, top): (f32, f32)) -> Self {
        Self::new(left, top)
    }
}
