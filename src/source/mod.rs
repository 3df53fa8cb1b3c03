//! Source document model: what the decoder produces (§3.1)

mod block;
mod document;
mod entity;

pub use block::BlockDefinition;
pub use document::{Document, Layer, LayerGroup, LayerState};
pub use entity::{Arc, BlockRef, Dimension, Entity, EntityBase, Line, Point, Solid, Text};

use std::collections::HashMap;

/// Per-kind entity counts across a decoded document (§13 of the expanded
/// spec — a read-only diagnostic, grounded on the reference JWW reader's
/// `entity_counts` helper).
pub fn entity_counts(entities: &[Entity]) -> HashMap<&'static str, usize> {
    let mut counts = HashMap::new();
    for entity in entities {
        *counts.entry(entity.kind_name()).or_insert(0) += 1;
    }
    counts
}
