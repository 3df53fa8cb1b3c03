//! Block definitions (§3.1)

use super::entity::{Entity, EntityBase};

/// A named, reusable collection of entities, recursively encoded the same
/// way as the top-level entity list (§4.2 "Block-definition list").
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDefinition {
    pub base: EntityBase,
    pub number: u32,
    pub is_referenced: bool,
    pub name: String,
    pub entities: Vec<Entity>,
}
