//! I/O module: byte-level reading, object-graph decoding, transformation,
//! and ASCII serialization (§2)

pub mod byte_reader;
pub mod decoder;
pub mod dxf;
pub mod transform;
