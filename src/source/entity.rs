//! Decoded source entities (§3.1)
//!
//! Each variant is a distinct record; `Entity` itself is a closed
//! discriminated union matched exhaustively at the two points the design
//! calls for polymorphic dispatch: the per-class decoder table
//! (`io::decoder::records`) and the transformer (`io::transform`).

use crate::types::Vector2;

/// Header shared by every entity, read before any class-specific fields.
///
/// `pen_width` is only present in the byte stream when the document version
/// is ≥ 351; decoders default it to 0 for older files rather than modeling
/// it as an `Option`, since the transformer never needs to distinguish
/// "absent" from "zero" for this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityBase {
    pub group: u32,
    pub pen_style: u8,
    pub pen_color: u16,
    pub pen_width: u16,
    pub layer: u16,
    pub layer_group: u16,
    pub flag: u16,
}

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub base: EntityBase,
    pub start: Vector2,
    pub end: Vector2,
}

/// An arc, circle, or ellipse record (classified by the transformer, §4.4)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub base: EntityBase,
    pub center: Vector2,
    pub radius: f64,
    pub start_angle: f64,
    pub arc_angle: f64,
    pub tilt_angle: f64,
    /// Minor/major axis ratio; 1.0 for a true circle.
    pub flatness: f64,
    pub full_circle: bool,
}

/// A point, optionally carrying orientation data when `pen_style == 100`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub base: EntityBase,
    pub position: Vector2,
    pub is_temporary: bool,
    pub code: u32,
    pub angle: f64,
    pub scale: f64,
}

/// Additive style-flag thresholds carried in a `Text`'s `style_flags`
/// field (§3.1: "+10000 italic, +20000 bold"). These are sums, not
/// bitmasks — `10_000` and `20_000` are not bit-disjoint — so the style is
/// decomposed arithmetically rather than with `bitflags`.
const TEXT_STYLE_ITALIC: u32 = 10_000;
const TEXT_STYLE_BOLD: u32 = 20_000;

/// A text label
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub base: EntityBase,
    pub start: Vector2,
    pub end: Vector2,
    pub style_flags: u32,
    pub size_x: f64,
    pub size_y: f64,
    pub spacing: f64,
    /// Rotation in degrees, already in the target unit per the source format.
    pub angle: f64,
    pub font_name: String,
    pub content: String,
}

impl Text {
    /// `+20000` is added independently of `+10000`, so bold is just
    /// "flags reached the bold threshold" (§3.1).
    pub fn is_bold(&self) -> bool {
        self.style_flags >= TEXT_STYLE_BOLD
    }

    /// Strip off the bold contribution (if any) before checking for the
    /// italic threshold, since the two thresholds are summed rather than
    /// bitwise-or'd (§3.1).
    pub fn is_italic(&self) -> bool {
        (self.style_flags % TEXT_STYLE_BOLD) >= TEXT_STYLE_ITALIC
    }
}

/// A filled quadrilateral. Corners are stored in the target's canonical
/// winding order (1,2,3,4); the decoder is responsible for reordering the
/// 1,4,2,3 wire order into this layout (§3.1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    pub base: EntityBase,
    pub corners: [Vector2; 4],
    /// Packed RGB, present only when `base.pen_color == 10`.
    pub rgb: Option<u32>,
}

/// A reference to a block definition by number
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRef {
    pub base: EntityBase,
    pub insertion: Vector2,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Rotation in radians, as read from the wire.
    pub rotation: f64,
    pub definition_number: u32,
}

/// A dimension. Per §3.1/§4.4 and §9's Open Question, only the embedded
/// `line` is surfaced to the target document; the auxiliary fields are kept
/// here only so the decoder can report them diagnostically and so nothing
/// downstream needs to special-case their absence.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub base: EntityBase,
    pub line: Line,
    pub text: Text,
    pub sxf_mode: Option<u16>,
    pub aux_lines: Vec<Line>,
    pub aux_points: Vec<Point>,
}

/// A single decoded source entity (§3.1)
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Line(Line),
    Arc(Arc),
    Point(Point),
    Text(Text),
    Solid(Solid),
    BlockRef(BlockRef),
    Dimension(Dimension),
}

impl Entity {
    /// Shared header, regardless of variant
    pub fn base(&self) -> EntityBase {
        match self {
            Entity::Line(e) => e.base,
            Entity::Arc(e) => e.base,
            Entity::Point(e) => e.base,
            Entity::Text(e) => e.base,
            Entity::Solid(e) => e.base,
            Entity::BlockRef(e) => e.base,
            Entity::Dimension(e) => e.base,
        }
    }

    /// Short uppercase name for diagnostics, matching the target entity type
    /// it will eventually become (used by `entity_counts`, §13 of the
    /// expanded spec).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Entity::Line(_) => "LINE",
            Entity::Arc(_) => "ARC",
            Entity::Point(_) => "POINT",
            Entity::Text(_) => "TEXT",
            Entity::Solid(_) => "SOLID",
            Entity::BlockRef(_) => "INSERT",
            Entity::Dimension(_) => "DIMENSION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_flags() {
        let t = Text {
            base: EntityBase::default(),
            start: Vector2::ZERO,
            end: Vector2::ZERO,
            style_flags: 10_000 + 20_000,
            size_x: 1.0,
            size_y: 1.0,
            spacing: 0.0,
            angle: 0.0,
            font_name: String::new(),
            content: String::new(),
        };
        assert!(t.is_italic());
        assert!(t.is_bold());
    }

    #[test]
    fn test_text_style_flags_italic_only() {
        let mut t = Text {
            base: EntityBase::default(),
            start: Vector2::ZERO,
            end: Vector2::ZERO,
            style_flags: 10_000,
            size_x: 1.0,
            size_y: 1.0,
            spacing: 0.0,
            angle: 0.0,
            font_name: String::new(),
            content: String::new(),
        };
        assert!(t.is_italic());
        assert!(!t.is_bold());

        t.style_flags = 20_000;
        assert!(!t.is_italic());
        assert!(t.is_bold());
    }

    #[test]
    fn test_kind_name() {
        let base = EntityBase::default();
        let line = Entity::Line(Line {
            base,
            start: Vector2::ZERO,
            end: Vector2::ZERO,
        });
        assert_eq!(line.kind_name(), "LINE");
    }
}
