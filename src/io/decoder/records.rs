//! Per-class record layouts (§4.3)
//!
//! Every record starts with an `EntityBase`; the class name resolved from
//! the PID registry then selects one of the parsers below. This is the
//! only place that dispatches on class name — the serializer dispatches
//! on the target `Entity` variant instead (§9 "Sum-typed entities").

use crate::error::{JwwError, Result};
use crate::io::byte_reader::ByteReader;
use crate::source::{Arc, BlockRef, Dimension, Entity, EntityBase, Line, Point, Solid, Text};
use crate::types::Vector2;

pub fn decode_entity(reader: &mut ByteReader, class_name: &str, version: u32) -> Result<Entity> {
    let base = read_entity_base(reader, version)?;
    match class_name {
        "CDataSen" => Ok(Entity::Line(parse_line(reader, base)?)),
        "CDataEnko" => Ok(Entity::Arc(parse_arc(reader, base)?)),
        "CDataTen" => Ok(Entity::Point(parse_point(reader, base)?)),
        "CDataMoji" => Ok(Entity::Text(parse_text(reader, base)?)),
        "CDataSolid" => Ok(Entity::Solid(parse_solid(reader, base)?)),
        "CDataBlock" => Ok(Entity::BlockRef(parse_block_ref(reader, base)?)),
        "CDataSunpou" => Ok(Entity::Dimension(parse_dimension(reader, base, version)?)),
        other => Err(JwwError::UnknownClass {
            name: other.to_string(),
            offset: reader.position(),
        }),
    }
}

/// Shared header read before any class-specific fields; pen-width is only
/// present on the wire when `version >= 351` (§3.1, §9 "Version-conditional
/// record layout" — the one place this branch belongs).
pub(crate) fn read_entity_base(reader: &mut ByteReader, version: u32) -> Result<EntityBase> {
    let group = reader.read_u32("entity_base.group")?;
    let pen_style = reader.read_u8("entity_base.pen_style")?;
    let pen_color = reader.read_u16("entity_base.pen_color")?;
    let pen_width = if version >= 351 {
        reader.read_u16("entity_base.pen_width")?
    } else {
        0
    };
    let layer = reader.read_u16("entity_base.layer")?;
    let layer_group = reader.read_u16("entity_base.layer_group")?;
    let flag = reader.read_u16("entity_base.flag")?;
    Ok(EntityBase {
        group,
        pen_style,
        pen_color,
        pen_width,
        layer,
        layer_group,
        flag,
    })
}

fn read_point(reader: &mut ByteReader, field: &'static str) -> Result<Vector2> {
    let x = reader.read_f64(field)?;
    let y = reader.read_f64(field)?;
    Ok(Vector2::new(x, y))
}

fn parse_line(reader: &mut ByteReader, base: EntityBase) -> Result<Line> {
    let start = read_point(reader, "line.start")?;
    let end = read_point(reader, "line.end")?;
    Ok(Line { base, start, end })
}

fn parse_arc(reader: &mut ByteReader, base: EntityBase) -> Result<Arc> {
    let center = read_point(reader, "arc.center")?;
    let radius = reader.read_f64("arc.radius")?;
    let start_angle = reader.read_f64("arc.start_angle")?;
    let arc_angle = reader.read_f64("arc.arc_angle")?;
    let tilt_angle = reader.read_f64("arc.tilt_angle")?;
    let flatness = reader.read_f64("arc.flatness")?;
    let full_circle = reader.read_bool("arc.full_circle")?;
    Ok(Arc {
        base,
        center,
        radius,
        start_angle,
        arc_angle,
        tilt_angle,
        flatness,
        full_circle,
    })
}

fn parse_point(reader: &mut ByteReader, base: EntityBase) -> Result<Point> {
    let position = read_point(reader, "point.position")?;
    let is_temporary = reader.read_bool("point.is_temporary")?;
    let (code, angle, scale) = if base.pen_style == 100 {
        (
            reader.read_u32("point.code")?,
            reader.read_f64("point.angle")?,
            reader.read_f64("point.scale")?,
        )
    } else {
        (0, 0.0, 0.0)
    };
    Ok(Point {
        base,
        position,
        is_temporary,
        code,
        angle,
        scale,
    })
}

fn parse_text(reader: &mut ByteReader, base: EntityBase) -> Result<Text> {
    let start = read_point(reader, "text.start")?;
    let end = read_point(reader, "text.end")?;
    let style_flags = reader.read_u32("text.style_flags")?;
    let size_x = reader.read_f64("text.size_x")?;
    let size_y = reader.read_f64("text.size_y")?;
    let spacing = reader.read_f64("text.spacing")?;
    let angle = reader.read_f64("text.angle")?;
    let font_name = reader.read_string("text.font_name")?;
    let content = reader.read_string("text.content")?;
    Ok(Text {
        base,
        start,
        end,
        style_flags,
        size_x,
        size_y,
        spacing,
        angle,
        font_name,
        content,
    })
}

fn parse_solid(reader: &mut ByteReader, base: EntityBase) -> Result<Solid> {
    // Wire order is 1, 4, 2, 3; reorder into the canonical 1, 2, 3, 4
    // storage layout expected by the rest of the pipeline (§3.1).
    let p1 = read_point(reader, "solid.corner1")?;
    let p4 = read_point(reader, "solid.corner4")?;
    let p2 = read_point(reader, "solid.corner2")?;
    let p3 = read_point(reader, "solid.corner3")?;
    let rgb = if base.pen_color == 10 {
        Some(reader.read_u32("solid.rgb")?)
    } else {
        None
    };
    Ok(Solid {
        base,
        corners: [p1, p2, p3, p4],
        rgb,
    })
}

fn parse_block_ref(reader: &mut ByteReader, base: EntityBase) -> Result<BlockRef> {
    let insertion = read_point(reader, "block_ref.insertion")?;
    let scale_x = reader.read_f64("block_ref.scale_x")?;
    let scale_y = reader.read_f64("block_ref.scale_y")?;
    let rotation = reader.read_f64("block_ref.rotation")?;
    let definition_number = reader.read_u32("block_ref.definition_number")?;
    Ok(BlockRef {
        base,
        insertion,
        scale_x,
        scale_y,
        rotation,
        definition_number,
    })
}

/// The embedded Line and Text are full records in their own right — each
/// reads its own fresh `EntityBase` off the wire, just like a top-level
/// `CDataSen`/`CDataMoji` would (§3.1: an "embedded Line record" is a Line
/// record, i.e. `base + start + end`). A Dimension therefore consumes
/// three `EntityBase`s in total: its own, then one each for the embedded
/// Line and Text.
fn parse_embedded_line(reader: &mut ByteReader, version: u32) -> Result<Line> {
    let base = read_entity_base(reader, version)?;
    let start = read_point(reader, "dimension.line.start")?;
    let end = read_point(reader, "dimension.line.end")?;
    Ok(Line { base, start, end })
}

fn parse_embedded_text(reader: &mut ByteReader, version: u32) -> Result<Text> {
    let base = read_entity_base(reader, version)?;
    let start = read_point(reader, "dimension.text.start")?;
    let end = read_point(reader, "dimension.text.end")?;
    let style_flags = reader.read_u32("dimension.text.style_flags")?;
    let size_x = reader.read_f64("dimension.text.size_x")?;
    let size_y = reader.read_f64("dimension.text.size_y")?;
    let spacing = reader.read_f64("dimension.text.spacing")?;
    let angle = reader.read_f64("dimension.text.angle")?;
    let font_name = reader.read_string("dimension.text.font_name")?;
    let content = reader.read_string("dimension.text.content")?;
    Ok(Text {
        base,
        start,
        end,
        style_flags,
        size_x,
        size_y,
        spacing,
        angle,
        font_name,
        content,
    })
}

/// The four trailing aux points are full `CDataTen`-shaped records too,
/// each with its own `EntityBase` (§3.1).
fn parse_embedded_point(reader: &mut ByteReader, version: u32) -> Result<Point> {
    let base = read_entity_base(reader, version)?;
    parse_point(reader, base)
}

fn parse_dimension(reader: &mut ByteReader, base: EntityBase, version: u32) -> Result<Dimension> {
    let line = parse_embedded_line(reader, version)?;
    let text = parse_embedded_text(reader, version)?;

    if version < 420 {
        return Ok(Dimension {
            base,
            line,
            text,
            sxf_mode: None,
            aux_lines: Vec::new(),
            aux_points: Vec::new(),
        });
    }

    // Trailing fields are a recovered, non-fatal extension (§7
    // "DimensionOptionalFailure"): if the stream runs short here the
    // dimension still surfaces with its primary Line and Text intact.
    match parse_dimension_extension(reader, version) {
        Ok((sxf_mode, aux_lines, aux_points)) => Ok(Dimension {
            base,
            line,
            text,
            sxf_mode: Some(sxf_mode),
            aux_lines,
            aux_points,
        }),
        Err(JwwError::ShortRead { .. }) => Ok(Dimension {
            base,
            line,
            text,
            sxf_mode: None,
            aux_lines: Vec::new(),
            aux_points: Vec::new(),
        }),
        Err(other) => Err(other),
    }
}

fn parse_dimension_extension(
    reader: &mut ByteReader,
    version: u32,
) -> Result<(u16, Vec<Line>, Vec<Point>)> {
    let sxf_mode = reader.read_u16("dimension.sxf_mode")?;
    let mut aux_lines = Vec::with_capacity(2);
    for _ in 0..2 {
        aux_lines.push(parse_embedded_line(reader, version)?);
    }
    let mut aux_points = Vec::with_capacity(4);
    for _ in 0..4 {
        aux_points.push(parse_embedded_point(reader, version)?);
    }
    Ok((sxf_mode, aux_lines, aux_points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_bytes(version: u32, pen_style: u8, pen_color: u16) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&0u32.to_le_bytes()); // group
        out.push(pen_style);
        out.extend_from_slice(&pen_color.to_le_bytes());
        if version >= 351 {
            out.extend_from_slice(&0u16.to_le_bytes()); // pen_width
        }
        out.extend_from_slice(&0u16.to_le_bytes()); // layer
        out.extend_from_slice(&0u16.to_le_bytes()); // layer_group
        out.extend_from_slice(&0u16.to_le_bytes()); // flag
        out
    }

    #[test]
    fn test_entity_base_omits_pen_width_before_351() {
        let bytes = base_bytes(300, 0, 0);
        let mut reader = ByteReader::new(&bytes);
        let base = read_entity_base(&mut reader, 300).unwrap();
        assert_eq!(base.pen_width, 0);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_decode_line() {
        let mut bytes = base_bytes(600, 0, 1);
        bytes.extend_from_slice(&0f64.to_le_bytes());
        bytes.extend_from_slice(&0f64.to_le_bytes());
        bytes.extend_from_slice(&100f64.to_le_bytes());
        bytes.extend_from_slice(&100f64.to_le_bytes());
        let mut reader = ByteReader::new(&bytes);
        let entity = decode_entity(&mut reader, "CDataSen", 600).unwrap();
        match entity {
            Entity::Line(line) => {
                assert_eq!(line.start, Vector2::new(0.0, 0.0));
                assert_eq!(line.end, Vector2::new(100.0, 100.0));
            }
            other => panic!("expected Line, got {other:?}"),
        }
    }

    #[test]
    fn test_solid_corner_reorder() {
        let mut bytes = base_bytes(600, 0, 0);
        for (x, _) in [(1.0, 1), (4.0, 4), (2.0, 2), (3.0, 3)] {
            bytes.extend_from_slice(&x.to_le_bytes());
            bytes.extend_from_slice(&x.to_le_bytes());
        }
        let mut reader = ByteReader::new(&bytes);
        let entity = decode_entity(&mut reader, "CDataSolid", 600).unwrap();
        match entity {
            Entity::Solid(solid) => {
                assert_eq!(solid.corners[0], Vector2::new(1.0, 1.0));
                assert_eq!(solid.corners[1], Vector2::new(2.0, 2.0));
                assert_eq!(solid.corners[2], Vector2::new(3.0, 3.0));
                assert_eq!(solid.corners[3], Vector2::new(4.0, 4.0));
                assert_eq!(solid.rgb, None);
            }
            other => panic!("expected Solid, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_class_is_fatal() {
        let bytes = base_bytes(600, 0, 0);
        let mut reader = ByteReader::new(&bytes);
        let err = decode_entity(&mut reader, "CDataBogus", 600).unwrap_err();
        assert!(matches!(err, JwwError::UnknownClass { .. }));
    }

    #[test]
    fn test_dimension_recovers_from_short_extension() {
        let mut bytes = base_bytes(600, 0, 0);
        // embedded line: its own EntityBase, then start/end
        bytes.extend_from_slice(&base_bytes(600, 0, 0));
        bytes.extend_from_slice(&0f64.to_le_bytes());
        bytes.extend_from_slice(&0f64.to_le_bytes());
        bytes.extend_from_slice(&1f64.to_le_bytes());
        bytes.extend_from_slice(&1f64.to_le_bytes());
        // embedded text: its own EntityBase, then start, end, style flags,
        // size_x, size_y, spacing, angle, font, content
        bytes.extend_from_slice(&base_bytes(600, 0, 0));
        for _ in 0..4 {
            bytes.extend_from_slice(&0f64.to_le_bytes());
        }
        bytes.extend_from_slice(&0u32.to_le_bytes());
        for _ in 0..4 {
            bytes.extend_from_slice(&0f64.to_le_bytes());
        }
        bytes.push(0); // empty font name
        bytes.push(0); // empty content
        // version >= 420 but stream ends here: extension read must fail short
        let mut reader = ByteReader::new(&bytes);
        let base = read_entity_base(&mut reader, 600).unwrap();
        let dimension = parse_dimension(&mut reader, base, 420).unwrap();
        assert_eq!(dimension.sxf_mode, None);
        assert!(dimension.aux_lines.is_empty());
    }
}
