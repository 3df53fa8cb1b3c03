//! ASCII interchange serializer (§4.6, Component E)

mod escape;
mod sections;
mod writer;

pub use escape::escape;
pub use writer::AsciiWriter;

use crate::target::Document;
use crate::types::HandleCounter;

/// Serializes a target document into the ASCII interchange text described
/// in §4.6: `HEADER`, `TABLES`, `BLOCKS`, `ENTITIES`, `EOF`, in that strict
/// order with no omissions. This is the crate's `serialize` entry point
/// (§6.3).
pub fn serialize(doc: &Document) -> String {
    let mut writer = AsciiWriter::new();
    let mut handles = HandleCounter::new();

    sections::write_header(&mut writer);
    sections::write_tables(&mut writer, doc, &mut handles);
    sections::write_blocks(&mut writer, doc);
    sections::write_entities(&mut writer, doc);
    writer.write_str(0, "EOF");

    writer.into_string()
}
