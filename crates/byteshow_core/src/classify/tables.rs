//! Generated Format-category range data.
//!
//! Mechanically derived from the Unicode Character Database (14.0.0):
//! general category `Cf`, plus the variation selector blocks
//! (`U+180B..=U+180D`, `U+FE00..=U+FE0F`, `U+E0100..=U+E01EF`), which are
//! `Mn` in the UCD but behave as invisible shaping codepoints for our
//! purposes. Do not edit by hand; regenerate against a newer UCD release
//! instead.
//!
//! Ranges are inclusive on both ends, sorted by start, and pairwise disjoint
//! (verified by `classify/tests.rs`).

/// Inclusive `(start, end)` ranges of Format-classified scalar values.
pub(super) const FORMAT_RANGES: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x180B, 0x180E),
    (0x200B, 0x200F),
    (0x202A, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFE00, 0xFE0F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x13438),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
    (0xE0100, 0xE01EF),
];
