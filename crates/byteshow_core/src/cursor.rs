//! Stepping UTF-8 decoder over a borrowed byte buffer.
//!
//! The cursor advances through the buffer one scalar value at a time. On a
//! malformed sequence it consumes the maximal well-formed prefix of an
//! encoded scalar (at least one byte) and reports how many bytes it ate.
//! This is the "substitution of maximal subparts" policy from the Unicode
//! standard (also what `str::from_utf8`'s `error_len` reports), so a 4-byte
//! sequence truncated after 3 well-formed bytes fails once, not three times.
//!
//! # Invariant
//!
//! The cursor only moves forward, and every call to [`decode_next`] that
//! returns `Some` advances it by at least one byte. Callers can therefore
//! partition the buffer into `[start, pos)` runs without fearing an infinite
//! loop.
//!
//! [`decode_next`]: DecodeCursor::decode_next

/// Failed decode attempt. The cursor has already advanced past the offending
/// bytes; `len` is how many it consumed (always >= 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Malformed {
    /// Number of bytes consumed by the failed attempt.
    pub len: usize,
}

/// Stepping UTF-8 decoder: a borrowed buffer plus a byte position.
///
/// The cursor is [`Copy`], enabling cheap snapshots.
#[derive(Clone, Copy, Debug)]
pub struct DecodeCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> DecodeCursor<'a> {
    /// Create a cursor at position 0.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset into the buffer.
    #[inline]
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` once the whole buffer has been consumed.
    #[inline]
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Decode one scalar value at the current position.
    ///
    /// Returns `None` at EOF. On success the cursor sits just past the
    /// scalar's encoding; on failure it sits past the maximal well-formed
    /// prefix (at least one byte). Surrogate encodings and values above
    /// `0x10FFFF` are rejected at the earliest offending byte, so a
    /// successful decode always yields a valid `char`.
    pub fn decode_next(&mut self) -> Option<Result<char, Malformed>> {
        let lead = *self.buf.get(self.pos)?;
        if lead < 0x80 {
            self.pos += 1;
            return Some(Ok(char::from(lead)));
        }

        // Valid window for the second byte depends on the lead: the E0/ED/F0/F4
        // special cases exclude overlong encodings, surrogates, and values
        // above 0x10FFFF without ever assembling an out-of-range scalar.
        let (width, second) = match lead {
            0xC2..=0xDF => (2_usize, 0x80..=0xBF),
            0xE0 => (3, 0xA0..=0xBF),
            0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80..=0xBF),
            0xED => (3, 0x80..=0x9F),
            0xF0 => (4, 0x90..=0xBF),
            0xF1..=0xF3 => (4, 0x80..=0xBF),
            0xF4 => (4, 0x80..=0x8F),
            // Stray continuation (0x80..=0xBF), overlong lead (C0/C1), or
            // out-of-range lead (F5..=FF): one byte, no valid prefix.
            _ => {
                self.pos += 1;
                return Some(Err(Malformed { len: 1 }));
            }
        };

        let mut value = u32::from(lead & (0x7F >> width));
        match self.buf.get(self.pos + 1) {
            Some(&b) if second.contains(&b) => value = value << 6 | u32::from(b & 0x3F),
            _ => {
                self.pos += 1;
                return Some(Err(Malformed { len: 1 }));
            }
        }
        for i in 2..width {
            match self.buf.get(self.pos + i) {
                Some(&b) if (0x80..=0xBF).contains(&b) => {
                    value = value << 6 | u32::from(b & 0x3F);
                }
                _ => {
                    self.pos += i;
                    return Some(Err(Malformed { len: i }));
                }
            }
        }
        self.pos += width;

        match char::from_u32(value) {
            Some(c) => Some(Ok(c)),
            // Unreachable: the second-byte windows above exclude every
            // encoding of a surrogate or out-of-range value.
            None => Some(Err(Malformed { len: width })),
        }
    }
}

#[cfg(test)]
mod tests;
