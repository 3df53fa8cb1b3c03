//! Entity-list scanning and decoding (§4.2 "Entity-list entry point")

use crate::error::{JwwError, Result};
use crate::io::byte_reader::ByteReader;
use crate::source::Entity;

use super::pid_registry::PidRegistry;
use super::records;

/// Prefix shared by every entity class name (§4.3's dispatch table); the
/// scan uses this to distinguish a real entity-list header from an
/// incidental byte pattern.
const ENTITY_CLASS_PREFIX: &str = "CData";

/// Scans for the first byte pattern matching a `u16` count, `0xFFFF`, the
/// file's version as a `u16`, a class-name length in `[8, 20]`, and a class
/// name starting with [`ENTITY_CLASS_PREFIX`]. Bytes between the fixed
/// prefix and the entity list carry version- and content-dependent optional
/// settings that are not part of the stable contract, so this is a scan
/// rather than a direct read (§9 "Heuristic entity-list seek").
pub fn find_entity_list_offset(data: &[u8], version: u32) -> Result<usize> {
    const SCAN_START: usize = 100;
    const TAIL_MARGIN: usize = 20;

    if data.len() <= SCAN_START + TAIL_MARGIN {
        return Err(JwwError::EntityListNotFound {
            scanned_from: SCAN_START,
        });
    }

    let version_bytes = (version as u16).to_le_bytes();
    let end = data.len() - TAIL_MARGIN;

    for i in SCAN_START..end {
        if data[i + 2] != 0xFF || data[i + 3] != 0xFF {
            continue;
        }
        if data[i + 4] != version_bytes[0] || data[i + 5] != version_bytes[1] {
            continue;
        }
        let name_len = u16::from_le_bytes([data[i + 6], data[i + 7]]) as usize;
        if !(8..=20).contains(&name_len) {
            continue;
        }
        let name_start = i + 8;
        let name_end = name_start + name_len;
        if name_end > data.len() {
            continue;
        }
        if data[name_start..name_end].starts_with(ENTITY_CLASS_PREFIX.as_bytes()) {
            return Ok(i);
        }
    }

    Err(JwwError::EntityListNotFound {
        scanned_from: SCAN_START,
    })
}

/// Decodes one entity list in place: a `u16` count followed by that many
/// tagged records, each either a class definition, a null marker, or an
/// instance reference (§4.2 "Per-list decode"). Used both for the
/// top-level list and, recursively, for each block definition's nested
/// list — each call gets its own [`PidRegistry`] (§3.3).
pub fn decode_entity_list(reader: &mut ByteReader, version: u32) -> Result<Vec<Entity>> {
    let count = reader.read_u16("entity_list.count")?;
    let mut registry = PidRegistry::new();
    let mut entities = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let tag = reader.read_u16("entity_list.tag")?;
        match tag {
            0xFFFF => registry.define_class(reader)?,
            0x8000 => {}
            _ => {
                let pid = tag & 0x7FFF;
                let class_name = registry.resolve(pid)?.to_string();
                let entity = records::decode_entity(reader, &class_name, version)?;
                entities.push(entity);
                registry.advance_instance();
            }
        }
    }

    Ok(entities)
}
