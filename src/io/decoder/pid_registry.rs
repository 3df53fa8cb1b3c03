//! Persistent-identifier registry for the object-graph decoder (§4.2, §9)
//!
//! A single monotone counter assigns identifiers to both class definitions
//! and object instances, in the order they appear in the stream. The
//! registry only ever maps class-PIDs to names; instance-PIDs are never
//! looked up, but the counter must still advance past them to keep later
//! class-PIDs aligned with the definitions that introduced them.

use indexmap::IndexMap;

use crate::error::{JwwError, Result};
use crate::io::byte_reader::ByteReader;

/// Scoped to one entity list or one nested block-definition list (§3.3);
/// never shared across decoding sessions.
pub struct PidRegistry {
    next_pid: u16,
    classes: IndexMap<u16, String>,
}

impl PidRegistry {
    pub fn new() -> Self {
        PidRegistry {
            next_pid: 1,
            classes: IndexMap::new(),
        }
    }

    /// Consumes a `0xFFFF` class-definition record: schema version (u16,
    /// unused beyond being read off the wire), name length (u16), name
    /// bytes. Binds the current PID to the class name, then advances.
    pub fn define_class(&mut self, reader: &mut ByteReader) -> Result<()> {
        let _schema_version = reader.read_u16("class_def.schema_version")?;
        let name_len = reader.read_u16("class_def.name_len")? as usize;
        let name = reader.read_fixed_string(name_len, "class_def.name")?;
        self.classes.insert(self.next_pid, name);
        self.next_pid = self.next_pid.wrapping_add(1);
        Ok(())
    }

    /// Resolves a class-PID (the low 15 bits of an instance tag) to the
    /// class name bound to it. A miss is fatal (§7 "DanglingClassRef").
    pub fn resolve(&self, pid: u16) -> Result<&str> {
        self.classes
            .get(&pid)
            .map(String::as_str)
            .ok_or_else(|| JwwError::DanglingClassRef {
                pid,
                known: self.classes.keys().copied().collect(),
            })
    }

    /// Advances the counter past a successfully decoded instance. Must not
    /// be called for `0x8000` null markers.
    pub fn advance_instance(&mut self) {
        self.next_pid = self.next_pid.wrapping_add(1);
    }
}
