//! Semantic transformer: source document → target document (Component D, §4.4)
//!
//! Pure function of the decoded value tree — no byte-level knowledge lives
//! here, and nothing here knows how the target document gets serialized.

pub mod blocks;
pub mod geometry;
pub mod layers;
pub mod palette;

use geometry::ClassifiedArc;

use crate::source;
use crate::target;

/// Lowers a decoded source document into the target document the
/// serializer consumes. This is the crate's `convert` entry point (§6.3).
pub fn convert(doc: &source::Document) -> target::Document {
    let target_layers = layers::flatten_layers(doc);
    let entities = doc
        .entities
        .iter()
        .filter_map(|entity| lower_entity(doc, entity))
        .collect();
    let blocks = doc.block_defs.iter().map(|def| lower_block(doc, def)).collect();

    target::Document {
        layers: target_layers,
        entities,
        blocks,
    }
}

fn entity_base(doc: &source::Document, base: source::EntityBase) -> target::EntityBase {
    target::EntityBase {
        layer: layers::resolve_layer_name(doc, base.layer_group, base.layer),
        color: palette::map_color(base.pen_color),
        line_type: palette::map_line_type(base.pen_style).to_string(),
    }
}

fn lower_entity(doc: &source::Document, entity: &source::Entity) -> Option<target::Entity> {
    match entity {
        source::Entity::Line(line) => Some(target::Entity::Line(lower_line(doc, line))),
        source::Entity::Arc(arc) => Some(lower_arc(doc, arc)),
        source::Entity::Point(point) => lower_point(doc, point),
        source::Entity::Text(text) => Some(target::Entity::Text(lower_text(doc, text))),
        source::Entity::Solid(solid) => Some(target::Entity::Solid(lower_solid(doc, solid))),
        source::Entity::BlockRef(block_ref) => {
            Some(target::Entity::Insert(lower_block_ref(doc, block_ref)))
        }
        // §4.4/§9: a Dimension surfaces only its embedded Line.
        source::Entity::Dimension(dimension) => {
            Some(target::Entity::Line(lower_line(doc, &dimension.line)))
        }
    }
}

fn lower_line(doc: &source::Document, line: &source::Line) -> target::Line {
    target::Line {
        base: entity_base(doc, line.base),
        start: line.start,
        end: line.end,
    }
}

fn lower_arc(doc: &source::Document, arc: &source::Arc) -> target::Entity {
    let base = entity_base(doc, arc.base);
    match geometry::classify_arc(arc, base) {
        ClassifiedArc::Circle(circle) => target::Entity::Circle(circle),
        ClassifiedArc::Ellipse(ellipse) => target::Entity::Ellipse(ellipse),
        ClassifiedArc::Arc(arc) => target::Entity::Arc(arc),
    }
}

/// Temporary points are dropped (§4.4 "Point filter").
fn lower_point(doc: &source::Document, point: &source::Point) -> Option<target::Entity> {
    if point.is_temporary {
        return None;
    }
    Some(target::Entity::Point(target::Point {
        base: entity_base(doc, point.base),
        position: point.position,
    }))
}

fn lower_text(doc: &source::Document, text: &source::Text) -> target::Text {
    target::Text {
        base: entity_base(doc, text.base),
        position: text.start,
        height: geometry::text_height(text.size_y),
        content: text.content.clone(),
        rotation: text.angle,
        style: if text.font_name.is_empty() {
            None
        } else {
            Some(text.font_name.clone())
        },
    }
}

fn lower_solid(doc: &source::Document, solid: &source::Solid) -> target::Solid {
    target::Solid {
        base: entity_base(doc, solid.base),
        corners: solid.corners,
    }
}

fn lower_block_ref(doc: &source::Document, block_ref: &source::BlockRef) -> target::Insert {
    target::Insert {
        base: entity_base(doc, block_ref.base),
        block_name: blocks::resolve_block_name(&doc.block_defs, block_ref.definition_number),
        insertion: block_ref.insertion,
        scale_x: block_ref.scale_x,
        scale_y: block_ref.scale_y,
        rotation_deg: block_ref.rotation.to_degrees(),
    }
}

fn lower_block(doc: &source::Document, def: &source::BlockDefinition) -> target::Block {
    target::Block {
        name: def.name.clone(),
        // §3.1 carries no explicit insertion/base-point field for block
        // definitions; the origin is the only reasonable default absent
        // one (recorded as an Open Question resolution in DESIGN.md).
        base_point: crate::types::Vector2::ZERO,
        entities: def.entities.iter().filter_map(|e| lower_entity(doc, e)).collect(),
    }
}
