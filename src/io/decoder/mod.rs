//! Object-graph decoder: bytes → source document (Component B/C, §4.2)

mod block_defs;
mod entity_list;
mod header;
mod pid_registry;
mod records;

pub use pid_registry::PidRegistry;

use crate::error::Result;
use crate::io::byte_reader::ByteReader;
use crate::source::Document;

/// Decodes a complete source document from a byte buffer: the fixed
/// prefix (§6.1), the heuristically-located entity list (§4.2), and the
/// block-definition list that immediately follows it. This is the crate's
/// `parse` entry point (§6.3).
pub fn decode(data: &[u8]) -> Result<Document> {
    let mut reader = ByteReader::new(data);
    let prefix = header::parse_prefix(&mut reader)?;

    let entity_list_offset = entity_list::find_entity_list_offset(data, prefix.version)?;
    reader.seek(entity_list_offset);

    let entities = entity_list::decode_entity_list(&mut reader, prefix.version)?;
    let block_defs = block_defs::parse_block_definitions(&mut reader, prefix.version)?;

    Ok(Document {
        version: prefix.version,
        memo: prefix.memo,
        paper_size: prefix.paper_size,
        active_layer_group: prefix.active_layer_group,
        layer_groups: prefix.layer_groups,
        entities,
        block_defs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a minimal end-to-end JWW byte buffer: signature, version,
    /// a one-byte memo, paper size, active group, 16 default layer groups,
    /// then an entity list containing exactly one `CDataSen` line (§8
    /// "End-to-end" scenario).
    fn minimal_document_bytes(version: u32) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"JwwData.");
        out.extend_from_slice(&version.to_le_bytes());
        out.push(1);
        out.push(b'X');
        out.extend_from_slice(&0u32.to_le_bytes()); // paper size
        out.extend_from_slice(&0u32.to_le_bytes()); // active layer group
        for _ in 0..16 {
            out.extend_from_slice(&0u32.to_le_bytes()); // group state
            out.extend_from_slice(&0u32.to_le_bytes()); // active layer
            out.extend_from_slice(&1.0f64.to_le_bytes()); // scale
            out.extend_from_slice(&0u32.to_le_bytes()); // protect
            for _ in 0..16 {
                out.extend_from_slice(&0u32.to_le_bytes());
                out.extend_from_slice(&0u32.to_le_bytes());
            }
        }

        // entity list: count=1, one class def + one CDataSen instance
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&[0xFF, 0xFF]);
        out.extend_from_slice(&(version as u16).to_le_bytes()); // schema version, must match file version
        out.extend_from_slice(&8u16.to_le_bytes());
        out.extend_from_slice(b"CDataSen");
        out.extend_from_slice(&0x0001u16.to_le_bytes()); // instance ref, class pid 1

        // EntityBase (version >= 351 includes pen_width)
        out.extend_from_slice(&0u32.to_le_bytes()); // group
        out.push(0); // pen_style
        out.extend_from_slice(&0u16.to_le_bytes()); // pen_color
        out.extend_from_slice(&0u16.to_le_bytes()); // pen_width
        out.extend_from_slice(&0u16.to_le_bytes()); // layer
        out.extend_from_slice(&0u16.to_le_bytes()); // layer_group
        out.extend_from_slice(&0u16.to_le_bytes()); // flag
        out.extend_from_slice(&0f64.to_le_bytes()); // start.x
        out.extend_from_slice(&0f64.to_le_bytes()); // start.y
        out.extend_from_slice(&1f64.to_le_bytes()); // end.x
        out.extend_from_slice(&1f64.to_le_bytes()); // end.y

        // block-definition list: zero blocks
        out.extend_from_slice(&0u32.to_le_bytes());

        out
    }

    #[test]
    fn test_decode_minimal_document() {
        let bytes = minimal_document_bytes(600);
        let doc = decode(&bytes).unwrap();
        assert_eq!(doc.version, 600);
        assert_eq!(doc.memo.as_deref(), Some("X"));
        assert_eq!(doc.entities.len(), 1);
        assert!(doc.block_defs.is_empty());
        match &doc.entities[0] {
            crate::source::Entity::Line(line) => {
                assert_eq!(line.end, crate::types::Vector2::new(1.0, 1.0));
            }
            other => panic!("expected Line, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_bad_signature() {
        let mut bytes = minimal_document_bytes(600);
        bytes[0] = b'X';
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, crate::error::JwwError::InvalidSignature));
    }
}
