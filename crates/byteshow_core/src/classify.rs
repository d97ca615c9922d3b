//! Scalar value classification for escape rendering.
//!
//! Every scalar value in `0..=0x10FFFF` maps to exactly one [`ControlKind`].
//! Classification is total and pure: the same input always yields the same
//! kind, and there is no "unknown" category.
//!
//! # Categories
//!
//! - `Control`: C0 controls, DEL plus the C1 block, and the surrogate block.
//!   Always rendered as an escape sequence, in every context.
//! - `Format`: invisible codepoints that shape or join surrounding text
//!   (zero-width joiners, bidi controls, variation selectors, tag
//!   characters). Escaped when shown standalone, but left verbatim inside a
//!   string: stripping a ZWJ out of an emoji sequence would break the
//!   grapheme apart.
//! - `Normal`: everything else.

mod tables;

/// Escape-rendering category of a scalar value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Rendered literally (modulo delimiter escaping).
    Normal,
    /// Invisible shaping/joining codepoint: escaped standalone, verbatim in
    /// running text.
    Format,
    /// Always rendered as an escape sequence.
    Control,
}

/// Classify a scalar value.
///
/// Total over `u32`: values above `0x10FFFF` fall through to `Normal` here,
/// but the escapers reject them before classification matters (see
/// [`EscapeError::CodepointTooLarge`](crate::EscapeError::CodepointTooLarge)).
#[must_use]
pub fn classify(cp: u32) -> ControlKind {
    match cp {
        // C0 controls, DEL, C1 controls.
        0x0000..=0x001F | 0x007F..=0x009F => ControlKind::Control,
        // Surrogates cannot render literally; well-formed UTF-8 never decodes
        // to one, so only the char escaper ever sees these.
        0xD800..=0xDFFF => ControlKind::Control,
        _ if in_format_table(cp) => ControlKind::Format,
        _ => ControlKind::Normal,
    }
}

/// Returns `true` when `cp` is escaped standalone, i.e. `classify(cp)` is
/// anything but `Normal`.
#[must_use]
pub fn is_control(cp: u32) -> bool {
    classify(cp) != ControlKind::Normal
}

/// Binary search over the sorted, disjoint Format range table.
fn in_format_table(cp: u32) -> bool {
    // Index of the first range starting after cp; its predecessor is the only
    // candidate that can contain cp.
    let idx = tables::FORMAT_RANGES.partition_point(|&(start, _)| start <= cp);
    match idx.checked_sub(1) {
        Some(prev) => cp <= tables::FORMAT_RANGES[prev].1,
        None => false,
    }
}

#[cfg(test)]
mod tests;
