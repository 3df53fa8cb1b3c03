//! Target entities: what the ASCII serializer emits per variant (§3.2, §4.6)
//!
//! Every variant carries the same three-field header the teacher's
//! per-entity structs carry (layer/colour/line-type); geometry fields
//! follow the required-codes table in §4.6.

use crate::types::Vector2;

/// Header shared by every target entity: the resolved layer name, the
/// already-mapped colour index, and the already-mapped line-type name
/// (§3.2).
#[derive(Debug, Clone, PartialEq)]
pub struct EntityBase {
    pub layer: String,
    /// 0 means "inherit from layer" (§3.2).
    pub color: i32,
    pub line_type: String,
}

/// A straight line between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub base: EntityBase,
    pub start: Vector2,
    pub end: Vector2,
}

/// A true circle: a source `Arc` with `full_circle` set and `flatness == 1.0`
/// (§4.4).
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub base: EntityBase,
    pub center: Vector2,
    pub radius: f64,
}

/// A circular arc, in degrees (§4.4 "Convert start-angle ... to degrees").
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub base: EntityBase,
    pub center: Vector2,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
}

/// An ellipse, already canonicalized so the minor/major ratio is ≤ 1 (§4.4
/// "axis swap").
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub base: EntityBase,
    pub center: Vector2,
    pub major_axis: Vector2,
    pub ratio: f64,
    pub start_param: f64,
    pub end_param: f64,
}

/// A single point (temporary source points are dropped before reaching
/// here, §4.4 "Point filter").
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub base: EntityBase,
    pub position: Vector2,
}

/// A text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub base: EntityBase,
    pub position: Vector2,
    pub height: f64,
    pub content: String,
    /// Degrees; emitted only when non-zero (§4.6).
    pub rotation: f64,
    /// Emitted under group code 7 only when present (§4.6).
    pub style: Option<String>,
}

/// A filled quadrilateral, corners in the target's canonical winding order.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub base: EntityBase,
    pub corners: [Vector2; 4],
}

/// A block reference ("INSERT" in the target vocabulary).
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub base: EntityBase,
    pub block_name: String,
    pub insertion: Vector2,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation_deg: f64,
}

/// A single target entity (§3.2), the closed sum type the serializer
/// matches exhaustively — the second of the design's two dispatch points
/// (§9 "Sum-typed entities").
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    Point(Point),
    Text(Text),
    Solid(Solid),
    Insert(Insert),
}

/// A named, reusable collection of entities (§3.2).
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    pub base_point: Vector2,
    pub entities: Vec<Entity>,
}
