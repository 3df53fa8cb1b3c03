//! Per-section and per-entity emission (§4.6, Component E)
//!
//! One function per document section, in the strict order §4.6 mandates;
//! one function per target entity variant, exhaustively matched (§9
//! "Sum-typed entities" — the serializer is the second of the design's two
//! dispatch points).

use crate::target;
use crate::types::HandleCounter;

use super::escape::escape;
use super::writer::AsciiWriter;

/// §4.6 step 1: a minimal `HEADER` with at least the ACAD-version variable
/// pinned to the stable `"AC1015"` string and a metric measurement
/// variable.
pub fn write_header(w: &mut AsciiWriter) {
    w.write_str(0, "SECTION");
    w.write_str(2, "HEADER");
    w.write_str(9, "$ACADVER");
    w.write_str(1, "AC1015");
    w.write_str(9, "$MEASUREMENT");
    w.write_int(70, 1);
    w.write_str(0, "ENDSEC");
}

/// §4.6 step 2: `LTYPE`, `LAYER`, `STYLE` tables, in that order.
pub fn write_tables(w: &mut AsciiWriter, doc: &target::Document, handles: &mut HandleCounter) {
    w.write_str(0, "SECTION");
    w.write_str(2, "TABLES");
    write_ltype_table(w, handles);
    write_layer_table(w, doc, handles);
    write_style_table(w, handles);
    w.write_str(0, "ENDSEC");
}

const REQUIRED_LINE_TYPES: [(&str, &str); 3] = [
    ("BYLAYER", ""),
    ("BYBLOCK", ""),
    ("CONTINUOUS", "Solid line"),
];

fn write_ltype_table(w: &mut AsciiWriter, handles: &mut HandleCounter) {
    w.write_str(0, "TABLE");
    w.write_str(2, "LTYPE");
    w.write_handle(5, handles.next());
    w.write_int(70, REQUIRED_LINE_TYPES.len() as i64);
    for (name, description) in REQUIRED_LINE_TYPES {
        w.write_str(0, "LTYPE");
        w.write_handle(5, handles.next());
        w.write_str(2, name);
        w.write_int(70, 0);
        w.write_str(3, description);
        w.write_int(72, 65); // alignment, always 65 (§4.6 "standardized placeholders")
        w.write_int(73, 0); // zero dashes
        w.write_float(40, 0.0); // zero pattern length
    }
    w.write_str(0, "ENDTAB");
}

fn write_layer_table(w: &mut AsciiWriter, doc: &target::Document, handles: &mut HandleCounter) {
    w.write_str(0, "TABLE");
    w.write_str(2, "LAYER");
    w.write_handle(5, handles.next());
    w.write_int(70, doc.layers.len() as i64 + 1);

    write_layer_entry(w, &target::Layer::zero(), handles);
    for layer in &doc.layers {
        write_layer_entry(w, layer, handles);
    }

    w.write_str(0, "ENDTAB");
}

fn write_layer_entry(w: &mut AsciiWriter, layer: &target::Layer, handles: &mut HandleCounter) {
    w.write_str(0, "LAYER");
    w.write_handle(5, handles.next());
    w.write_str(2, &layer.name);
    w.write_int(70, layer.flags() as i64);
    w.write_int(62, layer.color as i64);
    w.write_str(6, &layer.line_type);
}

fn write_style_table(w: &mut AsciiWriter, handles: &mut HandleCounter) {
    w.write_str(0, "TABLE");
    w.write_str(2, "STYLE");
    w.write_handle(5, handles.next());
    w.write_int(70, 1);

    w.write_str(0, "STYLE");
    w.write_handle(5, handles.next());
    w.write_str(2, "STANDARD");
    w.write_int(70, 0);
    w.write_float(40, 0.0);
    w.write_float(41, 1.0);
    w.write_float(50, 0.0);
    w.write_int(71, 0);
    w.write_float(42, 0.0);
    w.write_str(3, "txt.shx"); // standardized font reference (§4.6)

    w.write_str(0, "ENDTAB");
}

/// §4.6 step 3: one `BLOCK`/`ENDBLK` pair per block, nested entities
/// serialized in full.
pub fn write_blocks(w: &mut AsciiWriter, doc: &target::Document) {
    w.write_str(0, "SECTION");
    w.write_str(2, "BLOCKS");
    for block in &doc.blocks {
        w.write_str(0, "BLOCK");
        w.write_str(8, "0");
        w.write_str(2, &block.name);
        w.write_float(10, block.base_point.x);
        w.write_float(20, block.base_point.y);
        w.write_float(30, 0.0);
        for entity in &block.entities {
            write_entity(w, entity);
        }
        w.write_str(0, "ENDBLK");
    }
    w.write_str(0, "ENDSEC");
}

/// §4.6 step 4: every transformed entity, in order.
pub fn write_entities(w: &mut AsciiWriter, doc: &target::Document) {
    w.write_str(0, "SECTION");
    w.write_str(2, "ENTITIES");
    for entity in &doc.entities {
        write_entity(w, entity);
    }
    w.write_str(0, "ENDSEC");
}

fn write_entity(w: &mut AsciiWriter, entity: &target::Entity) {
    match entity {
        target::Entity::Line(line) => write_line(w, line),
        target::Entity::Circle(circle) => write_circle(w, circle),
        target::Entity::Arc(arc) => write_arc(w, arc),
        target::Entity::Ellipse(ellipse) => write_ellipse(w, ellipse),
        target::Entity::Point(point) => write_point(w, point),
        target::Entity::Text(text) => write_text(w, text),
        target::Entity::Solid(solid) => write_solid(w, solid),
        target::Entity::Insert(insert) => write_insert(w, insert),
    }
}

fn write_common(w: &mut AsciiWriter, base: &target::EntityBase) {
    w.write_str(8, &base.layer);
    w.write_int(62, base.color as i64);
    w.write_str(6, &base.line_type);
}

fn write_line(w: &mut AsciiWriter, line: &target::Line) {
    w.write_str(0, "LINE");
    write_common(w, &line.base);
    w.write_float(10, line.start.x);
    w.write_float(20, line.start.y);
    w.write_float(30, 0.0);
    w.write_float(11, line.end.x);
    w.write_float(21, line.end.y);
    w.write_float(31, 0.0);
}

fn write_circle(w: &mut AsciiWriter, circle: &target::Circle) {
    w.write_str(0, "CIRCLE");
    write_common(w, &circle.base);
    w.write_float(10, circle.center.x);
    w.write_float(20, circle.center.y);
    w.write_float(30, 0.0);
    w.write_float(40, circle.radius);
}

fn write_arc(w: &mut AsciiWriter, arc: &target::Arc) {
    w.write_str(0, "ARC");
    write_common(w, &arc.base);
    w.write_float(10, arc.center.x);
    w.write_float(20, arc.center.y);
    w.write_float(30, 0.0);
    w.write_float(40, arc.radius);
    w.write_float(50, arc.start_angle_deg);
    w.write_float(51, arc.end_angle_deg);
}

fn write_ellipse(w: &mut AsciiWriter, ellipse: &target::Ellipse) {
    w.write_str(0, "ELLIPSE");
    write_common(w, &ellipse.base);
    w.write_float(10, ellipse.center.x);
    w.write_float(20, ellipse.center.y);
    w.write_float(30, 0.0);
    w.write_float(11, ellipse.major_axis.x);
    w.write_float(21, ellipse.major_axis.y);
    w.write_float(31, 0.0);
    w.write_float(40, ellipse.ratio);
    w.write_float(41, ellipse.start_param);
    w.write_float(42, ellipse.end_param);
}

fn write_point(w: &mut AsciiWriter, point: &target::Point) {
    w.write_str(0, "POINT");
    write_common(w, &point.base);
    w.write_float(10, point.position.x);
    w.write_float(20, point.position.y);
    w.write_float(30, 0.0);
}

fn write_text(w: &mut AsciiWriter, text: &target::Text) {
    w.write_str(0, "TEXT");
    w.write_str(8, &escape(&text.base.layer));
    w.write_int(62, text.base.color as i64);
    w.write_str(6, &text.base.line_type);
    w.write_float(10, text.position.x);
    w.write_float(20, text.position.y);
    w.write_float(30, 0.0);
    w.write_float(40, text.height);
    w.write_str(1, &escape(&text.content));
    if text.rotation != 0.0 {
        w.write_float(50, text.rotation);
    }
    if let Some(style) = &text.style {
        w.write_str(7, style);
    }
}

fn write_solid(w: &mut AsciiWriter, solid: &target::Solid) {
    w.write_str(0, "SOLID");
    write_common(w, &solid.base);
    let codes = [(10, 20, 30), (11, 21, 31), (12, 22, 32), (13, 23, 33)];
    for (corner, (cx, cy, cz)) in solid.corners.iter().zip(codes) {
        w.write_float(cx, corner.x);
        w.write_float(cy, corner.y);
        w.write_float(cz, 0.0);
    }
}

fn write_insert(w: &mut AsciiWriter, insert: &target::Insert) {
    w.write_str(0, "INSERT");
    write_common(w, &insert.base);
    w.write_str(2, &insert.block_name);
    w.write_float(10, insert.insertion.x);
    w.write_float(20, insert.insertion.y);
    w.write_float(30, 0.0);
    w.write_float(41, insert.scale_x);
    w.write_float(42, insert.scale_y);
    w.write_float(43, 1.0);
    w.write_float(50, insert.rotation_deg);
}
