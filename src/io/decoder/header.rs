//! File prefix: signature, version, memo, and the 16×16 layer matrix (§6.1)

use crate::error::{JwwError, Result};
use crate::io::byte_reader::ByteReader;
use crate::source::{Layer, LayerGroup};

const SIGNATURE: &[u8; 8] = b"JwwData.";

/// Everything parsed linearly before the heuristic entity-list scan takes
/// over.
pub struct Prefix {
    pub version: u32,
    pub memo: Option<String>,
    pub paper_size: u32,
    pub active_layer_group: u16,
    pub layer_groups: [LayerGroup; 16],
}

pub fn parse_prefix(reader: &mut ByteReader) -> Result<Prefix> {
    let mut signature = [0u8; 8];
    for byte in signature.iter_mut() {
        *byte = reader.read_u8("signature")?;
    }
    if &signature != SIGNATURE {
        return Err(JwwError::InvalidSignature);
    }

    let version = reader.read_u32("version")?;
    let memo_raw = reader.read_string("memo")?;
    let memo = if memo_raw.is_empty() { None } else { Some(memo_raw) };
    let paper_size = reader.read_u32("paper_size")?;
    let active_layer_group = reader.read_u32("active_layer_group")? as u16;

    let mut layer_groups: [LayerGroup; 16] = std::array::from_fn(|_| LayerGroup::default());
    for group in layer_groups.iter_mut() {
        *group = parse_layer_group(reader)?;
    }

    Ok(Prefix {
        version,
        memo,
        paper_size,
        active_layer_group,
        layer_groups,
    })
}

fn parse_layer_group(reader: &mut ByteReader) -> Result<LayerGroup> {
    let state = reader.read_u32("layer_group.state")? as u8;
    let active_layer = reader.read_u32("layer_group.active_layer")? as u16;
    let scale = reader.read_f64("layer_group.scale")?;
    let protect = reader.read_u32("layer_group.protect")? != 0;

    let mut layers: [Layer; 16] = std::array::from_fn(|_| Layer::default());
    for layer in layers.iter_mut() {
        let layer_state = reader.read_u32("layer.state")? as u8;
        let layer_protect = reader.read_u32("layer.protect")? != 0;
        *layer = Layer {
            state: layer_state,
            protect: layer_protect,
            name: None,
        };
    }

    Ok(LayerGroup {
        state,
        active_layer,
        scale,
        protect,
        layers,
        name: None,
    })
}
