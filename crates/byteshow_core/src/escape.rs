//! Char and string escapers.
//!
//! Both string escapers share one scan: maintain a committed boundary
//! `start` and a decode cursor, flush the pending run `[start, pos)` verbatim
//! whenever something needs escaping, emit the escape, and move `start`
//! forward. They differ only in the undecodable-byte policy:
//!
//! - [`escape_exact`]: every undecodable byte becomes `\xHH`, so the quoted
//!   output reads back to the input byte-for-byte.
//! - [`escape_lossy`]: each failed decode becomes a single U+FFFD.
//!
//! Format-classified codepoints (ZWJ, bidi controls, variation selectors)
//! stay verbatim inside string runs but are escaped by [`escape_char`]:
//! rendering the farmer emoji `👨‍🌾` must keep its interior ZWJ, while
//! rendering that ZWJ on its own must show `\u{200d}`.

use core::fmt::{self, Write};

use crate::classify::{classify, ControlKind};
use crate::cursor::DecodeCursor;
use thiserror::Error;

/// Largest valid Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x0010_FFFF;

/// Display mode for all escapers.
///
/// `Quoted` wraps the output in `'...'` (char) or `"..."` (string) and
/// escapes the enclosing delimiter (and `\` for strings). `Bare` emits the
/// escaped content only. A third mode cannot be expressed, which retires the
/// "unrecognized mode specifier" failure class at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Wrap in quotes and escape the delimiter (the default).
    #[default]
    Quoted,
    /// No surrounding quotes, no delimiter escaping.
    Bare,
}

/// Errors the char escaper can produce.
///
/// Sink failures are kept distinct from the engine's own error kind: string
/// escapers return a plain [`fmt::Result`] because only the sink can fail
/// there, while [`escape_char`] can also reject its input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscapeError {
    /// The value is above `0x10FFFF` and has no `\u{...}` rendering.
    #[error("codepoint {0:#x} is above the Unicode maximum 0x10ffff")]
    CodepointTooLarge(u32),
    /// The output sink rejected a write.
    #[error("output sink rejected a write")]
    Sink(#[from] fmt::Error),
}

/// Escape a single scalar value.
///
/// Control and Format values render as `\t`/`\r`/`\n`, `\xHH` (below 0x80),
/// or `\u{HEX}` (at or above 0x80). Normal values render literally, with `'`
/// escaped in quoted mode. Surrogates are accepted and render as `\u{HEX}`;
/// values above [`MAX_SCALAR`] fail with
/// [`EscapeError::CodepointTooLarge`].
pub fn escape_char(cp: u32, mode: Mode, out: &mut impl Write) -> Result<(), EscapeError> {
    if cp > MAX_SCALAR {
        return Err(EscapeError::CodepointTooLarge(cp));
    }
    if mode == Mode::Quoted {
        out.write_char('\'')?;
    }
    match char::from_u32(cp) {
        Some(c) if classify(cp) == ControlKind::Normal => {
            if mode == Mode::Quoted && c == '\'' {
                out.write_str("\\'")?;
            } else {
                out.write_char(c)?;
            }
        }
        // Control or Format scalar; surrogates land here too since they
        // classify as Control.
        _ => write_forced_escape(cp, out)?,
    }
    if mode == Mode::Quoted {
        out.write_char('\'')?;
    }
    Ok(())
}

/// Escape a byte buffer, preserving it byte-for-byte.
///
/// Every byte the decoder cannot consume as part of a scalar value is
/// rendered as `\xHH`, so reading the quoted output back as a string literal
/// reproduces `bytes` exactly, malformed sequences included.
pub fn escape_exact(bytes: &[u8], mode: Mode, out: &mut impl Write) -> fmt::Result {
    escape_string(bytes, mode, InvalidBytes::Exact, out)
}

/// Escape a byte buffer, substituting undecodable sequences.
///
/// Each failed decode attempt, however many bytes it consumed, becomes a
/// single U+FFFD replacement character, per the standard Unicode
/// recommendation. Everything else matches [`escape_exact`].
pub fn escape_lossy(bytes: &[u8], mode: Mode, out: &mut impl Write) -> fmt::Result {
    escape_string(bytes, mode, InvalidBytes::Lossy, out)
}

/// Undecodable-byte policy distinguishing the two string escapers.
#[derive(Clone, Copy)]
enum InvalidBytes {
    Exact,
    Lossy,
}

/// Shared scan for both string escapers.
///
/// # Invariant
///
/// Bytes in `[0, start)` have been fully emitted; `[start, cursor)` is the
/// pending run of verbatim output. The run only ever contains successfully
/// decoded scalars, so flushing it as UTF-8 text is always valid.
fn escape_string(
    bytes: &[u8],
    mode: Mode,
    policy: InvalidBytes,
    out: &mut impl Write,
) -> fmt::Result {
    if mode == Mode::Quoted {
        out.write_char('"')?;
    }

    let mut cursor = DecodeCursor::new(bytes);
    let mut start = 0;
    loop {
        let at = cursor.pos();
        let Some(step) = cursor.decode_next() else {
            break;
        };
        match step {
            Ok(c) => match classify(u32::from(c)) {
                ControlKind::Control => {
                    flush_run(bytes, start, at, out)?;
                    write_forced_escape(u32::from(c), out)?;
                    start = cursor.pos();
                }
                // Format joins the run like Normal: escaping it would strip
                // the joiner out of grapheme sequences.
                ControlKind::Format | ControlKind::Normal => {
                    if mode == Mode::Quoted && (c == '"' || c == '\\') {
                        flush_run(bytes, start, at, out)?;
                        out.write_char('\\')?;
                        out.write_char(c)?;
                        start = cursor.pos();
                    }
                }
            },
            Err(_) => {
                flush_run(bytes, start, at, out)?;
                match policy {
                    InvalidBytes::Exact => {
                        for &b in &bytes[at..cursor.pos()] {
                            write!(out, "\\x{b:02x}")?;
                        }
                    }
                    InvalidBytes::Lossy => out.write_char('\u{FFFD}')?,
                }
                start = cursor.pos();
            }
        }
    }
    flush_run(bytes, start, bytes.len(), out)?;

    if mode == Mode::Quoted {
        out.write_char('"')?;
    }
    Ok(())
}

/// Emit the escape sequence for a Control/Format scalar (or a surrogate).
fn write_forced_escape(cp: u32, out: &mut impl Write) -> fmt::Result {
    match cp {
        0x09 => out.write_str("\\t"),
        0x0D => out.write_str("\\r"),
        0x0A => out.write_str("\\n"),
        _ if cp < 0x80 => write!(out, "\\x{cp:02x}"),
        _ => write!(out, "\\u{{{cp:x}}}"),
    }
}

/// Flush the pending run `[start, end)` verbatim.
///
/// The run consists solely of successfully decoded scalars, so it is valid
/// UTF-8 by construction; the `from_utf8` check only guards against scanner
/// bugs.
fn flush_run(bytes: &[u8], start: usize, end: usize, out: &mut impl Write) -> fmt::Result {
    debug_assert!(
        core::str::from_utf8(&bytes[start..end]).is_ok(),
        "pending run must be valid UTF-8"
    );
    let run = core::str::from_utf8(&bytes[start..end]).map_err(|_| fmt::Error)?;
    out.write_str(run)
}
