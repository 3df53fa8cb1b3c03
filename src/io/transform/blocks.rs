//! Block-definition lookup and resolution (§4.5, §13)

use crate::source::BlockDefinition;

/// Resolves a block-reference's definition number to a name, linear-
/// searching the definition table, falling back to a synthesized
/// `BLOCK_<n>` name when no definition matches (§4.5).
pub fn resolve_block_name(defs: &[BlockDefinition], number: u32) -> String {
    defs.iter()
        .find(|def| def.number == number)
        .map(|def| def.name.clone())
        .unwrap_or_else(|| format!("BLOCK_{number}"))
}

/// A read-only audit of a document's block-reference graph (§13 of the
/// expanded spec — additive reporting alongside the per-entity fallback
/// §4.5 already mandates; it does not change that resolution rule).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockReferenceReport {
    pub total_references: usize,
    pub resolved_references: usize,
    pub unresolved_definition_numbers: Vec<u32>,
}

/// Builds a [`BlockReferenceReport`] from the raw block-reference numbers
/// found in a document (collected by the caller from its `Entity::BlockRef`
/// variants) against the document's definition table.
pub fn validate_block_references(
    defs: &[BlockDefinition],
    reference_numbers: &[u32],
) -> BlockReferenceReport {
    let mut report = BlockReferenceReport {
        total_references: reference_numbers.len(),
        ..Default::default()
    };
    for &number in reference_numbers {
        if defs.iter().any(|def| def.number == number) {
            report.resolved_references += 1;
        } else if !report.unresolved_definition_numbers.contains(&number) {
            report.unresolved_definition_numbers.push(number);
        }
    }
    report
}
