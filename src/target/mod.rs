//! Target document model: what the ASCII serializer consumes (§3.2)

mod document;
mod entity;

pub use document::{Document, Layer};
pub use entity::{Arc, Block, Circle, Ellipse, Entity, EntityBase, Insert, Line, Point, Solid, Text};
