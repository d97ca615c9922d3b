//! Source-literal escaping engine for bytes and Unicode scalar values.
//!
//! Given raw bytes that are putatively (but not guaranteed) valid UTF-8, or a
//! single scalar value, the engine writes a human-legible escaped rendering to
//! a caller-supplied sink. Two string policies are offered:
//!
//! - [`escape_exact`] is byte-exact invertible: reading the quoted output back
//!   as a string literal reproduces the input bytes, including malformed
//!   UTF-8 (every undecodable byte becomes `\xHH`).
//! - [`escape_lossy`] substitutes each undecodable sequence with a single
//!   U+FFFD replacement character.
//!
//! # Architecture
//!
//! ```text
//! escape_exact / escape_lossy        escape_char
//!         │                              │
//!         ▼                              │
//!   DecodeCursor (stepping UTF-8)        │
//!         │                              │
//!         └────────► classify ◄──────────┘
//!                (Normal/Format/Control)
//! ```
//!
//! Everything is synchronous, allocation-free, and stateless across calls.
//! The classification table is `const` data shared freely between threads.

pub mod classify;
pub mod cursor;
pub mod escape;

pub use classify::{classify, is_control, ControlKind};
pub use cursor::{DecodeCursor, Malformed};
pub use escape::{escape_char, escape_exact, escape_lossy, EscapeError, Mode, MAX_SCALAR};
