//! Target document container and layer table (§3.2)

use super::entity::{Block, Entity};

/// The document the serializer consumes: a flat layer table, an ordered
/// entity list, and an ordered block-definition list (§3.2).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub layers: Vec<Layer>,
    pub entities: Vec<Entity>,
    pub blocks: Vec<Block>,
}

/// A single flattened layer-table entry (§3.2, §4.5).
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    /// 1–255; 0 only appears on entities, meaning "inherit from layer".
    pub color: i32,
    pub line_type: String,
    pub frozen: bool,
    pub locked: bool,
}

impl Layer {
    /// The mandatory `"0"` layer every `LAYER` table carries ahead of the
    /// transformed layers (§4.6 "LAYER table").
    pub fn zero() -> Layer {
        Layer {
            name: "0".to_string(),
            color: 7,
            line_type: "CONTINUOUS".to_string(),
            frozen: false,
            locked: false,
        }
    }

    /// Combines frozen (bit 0) and locked (bit 2) into the table-entry flag
    /// word (§4.6 "Layer flags combine frozen ... and locked").
    pub fn flags(&self) -> u8 {
        (self.frozen as u8) | ((self.locked as u8) << 2)
    }
}
