//! Shared byte-buffer builders for jww2dxf integration tests.
//!
//! Consolidates the hand-rolled wire encoding used across the integration
//! suite: a minimal file prefix, a single class-definition-then-instance
//! entity list, and a trailing empty block-definition list.

#![allow(dead_code)]

/// Appends a minimal valid file prefix (signature, version, memo, paper
/// size, active layer group, 16 default layer groups) to `out`.
pub fn push_prefix(out: &mut Vec<u8>, version: u32, memo: &str) {
    out.extend_from_slice(b"JwwData.");
    out.extend_from_slice(&version.to_le_bytes());
    if memo.is_empty() {
        out.push(0);
    } else {
        out.push(memo.len() as u8);
        out.extend_from_slice(memo.as_bytes());
    }
    out.extend_from_slice(&0u32.to_le_bytes()); // paper size
    out.extend_from_slice(&0u32.to_le_bytes()); // active layer group
    for _ in 0..16 {
        push_default_layer_group(out);
    }
}

fn push_default_layer_group(out: &mut Vec<u8>) {
    out.extend_from_slice(&0u32.to_le_bytes()); // group state
    out.extend_from_slice(&0u32.to_le_bytes()); // active layer
    out.extend_from_slice(&1.0f64.to_le_bytes()); // scale
    out.extend_from_slice(&0u32.to_le_bytes()); // protect
    for _ in 0..16 {
        out.extend_from_slice(&0u32.to_le_bytes()); // layer state
        out.extend_from_slice(&0u32.to_le_bytes()); // layer protect
    }
}

/// Appends an entity-list header (`u16` count) + one class-definition
/// record binding PID 1 to `class_name`, leaving the caller to append the
/// instance tag and fields.
///
/// The class definition's schema-version field is set to the document
/// `version`, since the heuristic entity-list scan (§4.2 "Entity-list
/// entry point") keys on that coincidence to distinguish a real entity
/// list header from an incidental byte pattern.
pub fn push_single_class_entity_list_header(out: &mut Vec<u8>, version: u32, count: u16, class_name: &str) {
    out.extend_from_slice(&count.to_le_bytes());
    out.extend_from_slice(&[0xFF, 0xFF]);
    out.extend_from_slice(&(version as u16).to_le_bytes());
    out.extend_from_slice(&(class_name.len() as u16).to_le_bytes());
    out.extend_from_slice(class_name.as_bytes());
}

/// Appends an instance-reference tag for class PID 1.
pub fn push_instance_tag(out: &mut Vec<u8>) {
    out.extend_from_slice(&0x0001u16.to_le_bytes());
}

/// Appends an `EntityBase` record for `version`.
pub fn push_entity_base(out: &mut Vec<u8>, version: u32, pen_style: u8, pen_color: u16, layer: u16, layer_group: u16) {
    out.extend_from_slice(&0u32.to_le_bytes()); // group
    out.push(pen_style);
    out.extend_from_slice(&pen_color.to_le_bytes());
    if version >= 351 {
        out.extend_from_slice(&0u16.to_le_bytes()); // pen_width
    }
    out.extend_from_slice(&layer.to_le_bytes());
    out.extend_from_slice(&layer_group.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // flag
}

pub fn push_point(out: &mut Vec<u8>, x: f64, y: f64) {
    out.extend_from_slice(&x.to_le_bytes());
    out.extend_from_slice(&y.to_le_bytes());
}

/// Appends an empty (zero-count) block-definition list.
pub fn push_empty_block_defs(out: &mut Vec<u8>) {
    out.extend_from_slice(&0u32.to_le_bytes());
}
