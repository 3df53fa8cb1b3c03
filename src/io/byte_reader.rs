//! Little-endian byte-cursor reader over an in-memory buffer (§2, Component A)
//!
//! Every primitive read advances an internal cursor and fails with
//! [`JwwError::ShortRead`] if the buffer runs out, naming the field being
//! read and the offset the read started at so decoder errors stay
//! diagnosable without re-running the parse under a debugger.

use byteorder::{ByteOrder, LittleEndian};
use encoding_rs::SHIFT_JIS;

use crate::error::{JwwError, Result};

/// Reads JWW's primitive and string encodings from a byte slice.
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteReader { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Repositions the cursor to an absolute offset, used after the
    /// heuristic entity-list scan locates the real start of the entity
    /// list (§4.2 "Entity-list entry point").
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }

    /// Reads a fixed-length string with no tiered length prefix, used for
    /// class names in the object-graph decoder where the length is an
    /// explicit `u16` field rather than the three-tier encoding used by
    /// ordinary strings.
    pub fn read_fixed_string(&mut self, len: usize, field: &'static str) -> Result<String> {
        let raw = self.take(len, field)?;
        Ok(decode_shift_jis(raw))
    }

    fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8]> {
        let start = self.pos;
        let end = start.checked_add(len).ok_or(JwwError::ShortRead {
            field,
            offset: start,
        })?;
        if end > self.data.len() {
            return Err(JwwError::ShortRead {
                field,
                offset: start,
            });
        }
        self.pos = end;
        Ok(&self.data[start..end])
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        Ok(self.take(1, field)?[0])
    }

    pub fn read_u16(&mut self, field: &'static str) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2, field)?))
    }

    pub fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4, field)?))
    }

    pub fn read_i32(&mut self, field: &'static str) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take(4, field)?))
    }

    pub fn read_f64(&mut self, field: &'static str) -> Result<f64> {
        Ok(LittleEndian::read_f64(self.take(8, field)?))
    }

    pub fn read_bool(&mut self, field: &'static str) -> Result<bool> {
        Ok(self.read_u8(field)? != 0)
    }

    pub fn skip(&mut self, len: usize, field: &'static str) -> Result<()> {
        self.take(len, field)?;
        Ok(())
    }

    /// Reads the three-tier length-prefixed string used throughout the
    /// format (§2 "String encoding"): a leading byte under `0xFF` is the
    /// length directly; `0xFF` means the real length is a following `u16`
    /// (itself `0xFFFF`-escaped to a following `u32` for the rare very long
    /// string). The raw bytes are Shift-JIS, trailing NUL bytes are
    /// trimmed, and a transcode failure is recovered non-fatally by
    /// returning the raw bytes reinterpreted as Latin-1 rather than
    /// aborting the whole parse (§7, "TranscodeFailure").
    pub fn read_string(&mut self, field: &'static str) -> Result<String> {
        let len = self.read_string_length(field)?;
        let raw = self.take(len, field)?;
        let trimmed = match raw.iter().position(|&b| b == 0) {
            Some(nul) => &raw[..nul],
            None => raw,
        };
        Ok(decode_shift_jis(trimmed))
    }

    fn read_string_length(&mut self, field: &'static str) -> Result<usize> {
        let first = self.read_u8(field)?;
        if first < 0xFF {
            return Ok(first as usize);
        }
        let second = self.read_u16(field)?;
        if second < 0xFFFF {
            return Ok(second as usize);
        }
        Ok(self.read_u32(field)? as usize)
    }
}

/// Decodes Shift-JIS bytes, the legacy Japanese codepage this format was
/// authored under. `encoding_rs` never fails outright (it substitutes
/// U+FFFD for unmappable bytes), so the non-fatal fallback path is really
/// about avoiding lossy mangling of data that happens to not be text at
/// all; callers that need to detect that can compare `had_errors`.
fn decode_shift_jis(bytes: &[u8]) -> String {
    let (text, _, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        bytes.iter().map(|&b| b as char).collect()
    } else {
        text.into_owned()
    }
}
