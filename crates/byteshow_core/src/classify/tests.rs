use pretty_assertions::assert_eq;

use super::tables::FORMAT_RANGES;
use super::{classify, is_control, ControlKind};

#[test]
fn c0_controls_and_del() {
    assert_eq!(classify(0x00), ControlKind::Control);
    assert_eq!(classify(0x09), ControlKind::Control);
    assert_eq!(classify(0x1F), ControlKind::Control);
    assert_eq!(classify(0x7F), ControlKind::Control);
}

#[test]
fn c1_block_boundaries() {
    assert_eq!(classify(0x7E), ControlKind::Normal); // '~'
    assert_eq!(classify(0x80), ControlKind::Control);
    assert_eq!(classify(0x9F), ControlKind::Control);
    assert_eq!(classify(0xA0), ControlKind::Normal); // NBSP renders literally
}

#[test]
fn surrogates_are_control() {
    assert_eq!(classify(0xD7FF), ControlKind::Normal);
    assert_eq!(classify(0xD800), ControlKind::Control);
    assert_eq!(classify(0xDFFF), ControlKind::Control);
    assert_eq!(classify(0xE000), ControlKind::Normal);
}

#[test]
fn format_codepoints() {
    // Soft hyphen, ZWJ, bidi embedding, variation selector, tag character.
    assert_eq!(classify(0x00AD), ControlKind::Format);
    assert_eq!(classify(0x200D), ControlKind::Format);
    assert_eq!(classify(0x202A), ControlKind::Format);
    assert_eq!(classify(0xFE0F), ControlKind::Format);
    assert_eq!(classify(0xE0020), ControlKind::Format);
}

#[test]
fn format_table_boundaries() {
    assert_eq!(classify(0x200A), ControlKind::Normal); // hair space
    assert_eq!(classify(0x200B), ControlKind::Format); // ZWSP
    assert_eq!(classify(0x200F), ControlKind::Format);
    assert_eq!(classify(0x2010), ControlKind::Normal); // hyphen
    assert_eq!(classify(0xE01EF), ControlKind::Format);
    assert_eq!(classify(0xE01F0), ControlKind::Normal);
}

#[test]
fn ordinary_text_is_normal() {
    assert_eq!(classify(u32::from('a')), ControlKind::Normal);
    assert_eq!(classify(u32::from(' ')), ControlKind::Normal);
    assert_eq!(classify(u32::from('é')), ControlKind::Normal);
    assert_eq!(classify(0x1F468), ControlKind::Normal); // 👨
    assert_eq!(classify(0x10FFFF), ControlKind::Normal);
}

#[test]
fn is_control_covers_format_and_control() {
    assert!(is_control(0x05));
    assert!(is_control(0x200D));
    assert!(!is_control(u32::from('!')));
}

#[test]
fn format_table_sorted_and_disjoint() {
    for window in FORMAT_RANGES.windows(2) {
        let (_, prev_end) = window[0];
        let (next_start, _) = window[1];
        assert!(
            prev_end < next_start,
            "ranges must be sorted and disjoint: {:#x} vs {:#x}",
            prev_end,
            next_start
        );
    }
    for &(start, end) in FORMAT_RANGES {
        assert!(start <= end, "empty range at {start:#x}");
    }
}
