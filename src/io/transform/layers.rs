//! Layer-matrix flattening (§4.5, Component F)
//!
//! The source document's 16×16 layer-group/layer matrix has no direct
//! target equivalent — DXF-like interchange formats have one flat layer
//! table — so this flattens it into an ordered list and derives, for any
//! given (layer-group, layer) pair, the exact same name the flattened
//! table entry carries.

use crate::source::Document;
use crate::target::Layer as TargetLayer;

const GROUP_COUNT: usize = 16;
const LAYER_COUNT: usize = 16;

/// Flattens the 16×16 matrix into 256 target layers, iterating groups then
/// layers within each group so the emission order matches `layer_name`'s
/// addressing (§4.5).
pub fn flatten_layers(doc: &Document) -> Vec<TargetLayer> {
    let mut out = Vec::with_capacity(GROUP_COUNT * LAYER_COUNT);
    for (g, group) in doc.layer_groups.iter().enumerate() {
        for (l, layer) in group.layers.iter().enumerate() {
            out.push(TargetLayer {
                name: layer_composite_name(g, l, layer.name.as_deref()),
                color: layer_color_index(g, l),
                line_type: "CONTINUOUS".to_string(),
                frozen: layer.state == 0,
                locked: layer.protect,
            });
        }
    }
    out
}

/// `(group × 16 + layer) mod 255 + 1` — a legacy mapping kept for
/// compatibility, flagged in §9 as unlikely to be what a strict reader
/// expects, but not "fixed" here per that Open Question.
fn layer_color_index(group: usize, layer: usize) -> i32 {
    (((group * LAYER_COUNT + layer) % 255) + 1) as i32
}

fn layer_composite_name(group: usize, layer: usize, name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => format!("{:X}-{:X}", group, layer),
    }
}

/// Resolves the target layer name for an entity's (layer-group, layer)
/// pair, tolerating out-of-range indices by falling back to the same
/// composite the flattener would have produced had the index been in
/// range (§3.1 invariant, §4.5).
pub fn resolve_layer_name(doc: &Document, layer_group: u16, layer: u16) -> String {
    let g = layer_group as usize;
    let l = layer as usize;
    if g < GROUP_COUNT && l < LAYER_COUNT {
        layer_composite_name(g, l, doc.layer_groups[g].layers[l].name.as_deref())
    } else {
        format!("{:X}-{:X}", g, l)
    }
}
