//! # jww2dxf
//!
//! Decodes a JWW CAD drawing — a length-prefixed, little-endian
//! object-graph serialization produced by a legacy Japanese 2D CAD
//! application — and re-emits it as an ASCII DXF-like interchange file.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let bytes = std::fs::read("drawing.jww")?;
//! let document = jww2dxf::parse(&bytes)?;
//! let target = jww2dxf::convert(&document);
//! let text = jww2dxf::serialize(&target);
//! # Ok::<(), jww2dxf::error::JwwError>(())
//! ```
//!
//! Callers may compose `parse` → `convert` → `serialize`, stop at
//! `convert` for in-memory inspection of the decoded object graph, or
//! call `parse` alone for decoded-only analyses (§6.3).
//!
//! ## Architecture
//!
//! - [`io::byte_reader`] — little-endian primitive and string decoding.
//! - [`io::decoder`] — the object-graph decoder (PID registry, per-class
//!   record layouts, entity-list scan).
//! - [`source`] — the decoded document model.
//! - [`io::transform`] — geometry classification, palette mapping, layer
//!   flattening, block resolution.
//! - [`target`] — the document model the serializer consumes.
//! - [`io::dxf`] — the ASCII group-code serializer.
//!
//! Everything outside these modules (argument parsing, file I/O glue,
//! progress reporting) is a thin adapter and lives in `src/bin/`, not in
//! the library.

pub mod error;
pub mod io;
pub mod source;
pub mod target;
pub mod types;

pub use error::{JwwError, Result};

/// Library version, read from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decodes a JWW byte buffer into a source document (§6.3a).
pub fn parse(bytes: &[u8]) -> Result<source::Document> {
    io::decoder::decode(bytes)
}

/// Lowers a decoded source document into the target document model
/// (§6.3b).
pub fn convert(document: &source::Document) -> target::Document {
    io::transform::convert(document)
}

/// Serializes a target document into the ASCII interchange text (§6.3c).
pub fn serialize(document: &target::Document) -> String {
    io::dxf::serialize(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_invalid_signature_is_rejected() {
        let err = parse(b"not a jww file at all").unwrap_err();
        assert!(matches!(err, JwwError::InvalidSignature));
    }
}
