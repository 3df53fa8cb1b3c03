//! Block-definition list decoding (§4.2 "Block-definition list")

use crate::error::{JwwError, Result};
use crate::io::byte_reader::ByteReader;
use crate::source::BlockDefinition;

use super::entity_list::decode_entity_list;
use super::pid_registry::PidRegistry;
use super::records::read_entity_base;

/// Block counts this large are never legitimate; treat them as a corrupt
/// or absent section rather than failing the whole decode (§7
/// "ImplausibleCount").
const MAX_PLAUSIBLE_COUNT: u32 = 10_000;

/// Decodes the block-definition list that immediately follows the
/// top-level entity list. Uses the same class-definition / instance-
/// reference protocol as the entity list, but each instance carries
/// additional definition metadata and a recursively nested entity list.
pub fn parse_block_definitions(reader: &mut ByteReader, version: u32) -> Result<Vec<BlockDefinition>> {
    // A file that ends right after the entity list has no block-definition
    // section at all; a short read of the count itself means "absent", not
    // a fatal error (§7 "ImplausibleCount" treats the section as optional).
    let count = match reader.read_u32("block_defs.count") {
        Ok(count) => count,
        Err(JwwError::ShortRead { .. }) => return Ok(Vec::new()),
        Err(other) => return Err(other),
    };
    if count > MAX_PLAUSIBLE_COUNT {
        return Ok(Vec::new());
    }

    let mut registry = PidRegistry::new();
    let mut defs = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let tag = reader.read_u16("block_defs.tag")?;
        match tag {
            0xFFFF => registry.define_class(reader)?,
            0x8000 => {}
            _ => {
                let pid = tag & 0x7FFF;
                registry.resolve(pid)?;
                defs.push(parse_block_definition(reader, version)?);
                registry.advance_instance();
            }
        }
    }

    Ok(defs)
}

fn parse_block_definition(reader: &mut ByteReader, version: u32) -> Result<BlockDefinition> {
    let base = read_entity_base(reader, version)?;
    let number = reader.read_u32("block_def.number")?;
    let is_referenced = reader.read_u32("block_def.is_referenced")? != 0;
    reader.skip(4, "block_def.timestamp")?;
    let name = reader.read_string("block_def.name")?;
    let entities = decode_entity_list(reader, version)?;

    Ok(BlockDefinition {
        base,
        number,
        is_referenced,
        name,
        entities,
    })
}
