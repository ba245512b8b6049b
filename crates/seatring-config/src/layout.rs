//! Layout configuration model

use serde::{Deserialize, Serialize};

use seatring_layout::{AnchorPosition, Direction, LayoutTable, SeatLayoutEngine};

use crate::error::{ConfigError, Result};

/// Anchors replacing the stock entry for one capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOverride {
    pub capacity: i64,
    #[serde(default)]
    pub anchors: Vec<AnchorPosition>,
}

/// Settings for building a [`SeatLayoutEngine`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Deal direction around the table
    pub direction: Direction,
    /// Start from the stock tables; when false only `tables` are known
    pub standard_tables: bool,
    /// Anchor of the viewer's own seat
    pub viewer_anchor: AnchorPosition,
    /// Anchor used for capacities without a table
    pub fallback_anchor: AnchorPosition,
    /// Per-capacity overrides, applied in order
    pub tables: Vec<TableOverride>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Clockwise,
            standard_tables: true,
            viewer_anchor: AnchorPosition::VIEWER,
            fallback_anchor: AnchorPosition::CENTER,
            tables: Vec::new(),
        }
    }
}

impl LayoutConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Assemble the layout table this configuration describes
    pub fn layout_table(&self) -> Result<LayoutTable> {
        let mut table = if self.standard_tables {
            LayoutTable::standard()
        } else {
            LayoutTable::empty()
        };
        for entry in &self.tables {
            table.set(entry.capacity, entry.anchors.clone())?;
        }
        Ok(table)
    }

    /// Validate and build an engine
    pub fn build_engine(&self) -> Result<SeatLayoutEngine> {
        check_anchor("viewer", self.viewer_anchor)?;
        check_anchor("fallback", self.fallback_anchor)?;
        let table = self.layout_table()?;
        tracing::debug!(
            direction = ?self.direction,
            capacities = table.capacities().count(),
            "built seat layout engine"
        );
        Ok(SeatLayoutEngine::new(table)
            .with_direction(self.direction)
            .with_viewer_anchor(self.viewer_anchor)
            .with_fallback_anchor(self.fallback_anchor))
    }
}

fn check_anchor(name: &'static str, anchor: AnchorPosition) -> Result<()> {
    if anchor.is_within_table() {
        Ok(())
    } else {
        Err(ConfigError::InvalidAnchor {
            name,
            left: anchor.left,
            top: anchor.top,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatring_layout::{LayoutTableError, TableCapacity};

    #[test]
    fn test_empty_document_is_default() {
        let config = LayoutConfig::from_toml_str("").unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn test_parse_overrides() {
        let config = LayoutConfig::from_toml_str(
            r#"
direction = "counter_clockwise"
viewer_anchor = { left = 50.0, top = 85.0 }

[[tables]]
capacity = 3
anchors = [{ left = 20.0, top = 20.0 }, { left = 80.0, top = 20.0 }]
"#,
        )
        .unwrap();
        assert_eq!(config.direction, Direction::CounterClockwise);
        assert!(config.standard_tables);

        let engine = config.build_engine().unwrap();
        let three = TableCapacity::clamped(3);
        assert_eq!(
            engine.anchor_for(three, Some(0), 1),
            AnchorPosition::new(80.0, 20.0)
        );
        assert_eq!(
            engine.anchor_for(three, Some(0), 0),
            AnchorPosition::new(50.0, 85.0)
        );
        assert!(engine.table().anchors(TableCapacity::MAX).is_some());
    }

    #[test]
    fn test_without_standard_tables() {
        let config = LayoutConfig {
            standard_tables: false,
            tables: vec![TableOverride {
                capacity: 2,
                anchors: vec![AnchorPosition::new(50.0, 15.0)],
            }],
            ..LayoutConfig::default()
        };
        let table = config.layout_table().unwrap();
        assert_eq!(table.capacities().count(), 1);
    }

    #[test]
    fn test_rejects_bad_table() {
        let config = LayoutConfig {
            tables: vec![TableOverride {
                capacity: 11,
                anchors: vec![],
            }],
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.build_engine(),
            Err(ConfigError::Table(LayoutTableError::UnsupportedCapacity(11)))
        ));
    }

    #[test]
    fn test_rejects_bad_viewer_anchor() {
        let config = LayoutConfig {
            viewer_anchor: AnchorPosition::new(50.0, 140.0),
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.build_engine(),
            Err(ConfigError::InvalidAnchor { name: "viewer", .. })
        ));
    }

    #[test]
    fn test_toml_roundtrip_keeps_overrides() {
        let config = LayoutConfig {
            direction: Direction::CounterClockwise,
            tables: vec![TableOverride {
                capacity: 2,
                anchors: vec![AnchorPosition::new(50.0, 15.0)],
            }],
            ..LayoutConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(LayoutConfig::from_toml_str(&text).unwrap(), config);
    }
}
