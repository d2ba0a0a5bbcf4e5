//! Per-kind scrub arithmetic.
//!
//! A [`ScrubState`] is built once per interaction from the literal's original
//! text and never re-reads the buffer: once a channel saturates the live text
//! no longer says how far past the bound the user has gone, so only the
//! origin values plus the accumulated delta can reproduce the right output.

use super::literal::{find_near, LiteralKind, LiteralSpan};
use crate::model::{GroupTag, GroupTagAllocator};

/// Decoded origin value of a literal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A decimal number; `increment` is 1 for integers and 0.1 when the text had a '.'
    PlainNumber { origin: f64, increment: f64 },
    /// `#rgb`, 4-bit channels
    Color3 { rgb: [u8; 3] },
    /// `#rrggbb`, 8-bit channels
    Color6 { rgb: [u8; 3] },
}

impl LiteralValue {
    /// Parse a matched literal. `None` for text the pattern accepted but that
    /// does not decode (treated the same as no match).
    pub fn parse(kind: LiteralKind, text: &str) -> Option<Self> {
        match kind {
            LiteralKind::PlainNumber => {
                let origin: f64 = text.parse().ok()?;
                if !origin.is_finite() {
                    return None;
                }
                let increment = if text.contains('.') { 0.1 } else { 1.0 };
                Some(LiteralValue::PlainNumber { origin, increment })
            }
            LiteralKind::Color3 => {
                let digits = text.strip_prefix('#')?;
                if digits.len() != 3 {
                    return None;
                }
                let mut rgb = [0u8; 3];
                for (channel, c) in rgb.iter_mut().zip(digits.chars()) {
                    *channel = c.to_digit(16)? as u8;
                }
                Some(LiteralValue::Color3 { rgb })
            }
            LiteralKind::Color6 => {
                let digits = text.strip_prefix('#')?;
                if digits.len() != 6 || !digits.is_ascii() {
                    return None;
                }
                let mut rgb = [0u8; 3];
                for (i, channel) in rgb.iter_mut().enumerate() {
                    *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()?;
                }
                Some(LiteralValue::Color6 { rgb })
            }
        }
    }

    pub fn kind(&self) -> LiteralKind {
        match self {
            LiteralValue::PlainNumber { .. } => LiteralKind::PlainNumber,
            LiteralValue::Color3 { .. } => LiteralKind::Color3,
            LiteralValue::Color6 { .. } => LiteralKind::Color6,
        }
    }

    /// Render the literal shifted by `delta` steps.
    pub fn update(&self, delta: i64) -> String {
        match *self {
            LiteralValue::PlainNumber { origin, increment } => {
                format_number(origin + delta as f64 * increment, increment)
            }
            LiteralValue::Color3 { rgb } => {
                let [r, g, b] = rgb.map(|c| clip(c, delta, 15));
                format!("#{:x}{:x}{:x}", r, g, b)
            }
            LiteralValue::Color6 { rgb } => {
                let [r, g, b] = rgb.map(|c| clip(c, delta, 255));
                format!("#{:02x}{:02x}{:02x}", r, g, b)
            }
        }
    }
}

/// Saturating channel shift
fn clip(channel: u8, delta: i64, max: i64) -> i64 {
    (i64::from(channel).saturating_add(delta)).clamp(0, max)
}

fn format_number(value: f64, increment: f64) -> String {
    if increment < 1.0 {
        // Round half up to one decimal so repeated tenths do not drift.
        let rounded = (value * 10.0 + 0.5).floor() / 10.0;
        let mut text = render(rounded);
        if !text.contains('.') {
            // Keep "3.0" from collapsing to "3" mid-drag.
            text.push_str(".0");
        }
        text
    } else {
        render(value)
    }
}

fn render(value: f64) -> String {
    // Adding zero turns -0.0 into 0.0.
    format!("{}", value + 0.0)
}

/// The value being scrubbed plus the undo group its edits belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubState {
    pub value: LiteralValue,
    pub tag: GroupTag,
}

impl ScrubState {
    pub fn new(value: LiteralValue, tag: GroupTag) -> Self {
        Self { value, tag }
    }

    /// Build a state from a located span
    pub fn from_span(kind: LiteralKind, span: &LiteralSpan, tag: GroupTag) -> Option<Self> {
        LiteralValue::parse(kind, &span.text).map(|value| Self::new(value, tag))
    }

    pub fn kind(&self) -> LiteralKind {
        self.value.kind()
    }

    /// New literal text for an accumulated delta
    pub fn update(&self, delta: i64) -> String {
        self.value.update(delta)
    }
}

/// Locate the literal touching `column` and build a fresh state for it.
///
/// A kind whose match fails to decode is skipped in favour of the next kind.
/// A tag is only allocated when something is found.
pub fn detect(
    line: &str,
    column: usize,
    tags: &mut GroupTagAllocator,
) -> Option<(LiteralSpan, ScrubState)> {
    LiteralKind::PRIORITY.into_iter().find_map(|kind| {
        let span = find_near(kind, line, column)?;
        let value = LiteralValue::parse(kind, &span.text)?;
        Some((span, ScrubState::new(value, tags.next_tag())))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(text: &str) -> LiteralValue {
        LiteralValue::parse(LiteralKind::PlainNumber, text).unwrap()
    }

    fn color3(text: &str) -> LiteralValue {
        LiteralValue::parse(LiteralKind::Color3, text).unwrap()
    }

    fn color6(text: &str) -> LiteralValue {
        LiteralValue::parse(LiteralKind::Color6, text).unwrap()
    }

    #[test]
    fn test_number_round_trip() {
        assert_eq!(number("5").update(0), "5");
        assert_eq!(number("5.0").update(0), "5.0");
        assert_eq!(number("-12").update(0), "-12");
        assert_eq!(number("3.25").update(0), "3.3");
    }

    #[test]
    fn test_integer_increment() {
        assert_eq!(number("3").update(1), "4");
        assert_eq!(number("3").update(-5), "-2");
        assert_eq!(number("9").update(1), "10");
    }

    #[test]
    fn test_decimal_increment() {
        assert_eq!(number("3.0").update(1), "3.1");
        assert_eq!(number("3.0").update(-1), "2.9");
        assert_eq!(number("0.5").update(5), "1.0");
        assert_eq!(number("2.9").update(1), "3.0");
    }

    #[test]
    fn test_decimal_many_steps_do_not_drift() {
        let value = number("0.0");
        for step in 1..100 {
            let text = value.update(step);
            let decimals = text.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 1, "{text}");
        }
    }

    #[test]
    fn test_crossing_zero() {
        assert_eq!(number("1").update(-1), "0");
        assert_eq!(number("-0.1").update(1), "0.0");
        assert_eq!(number("-1").update(-1), "-2");
    }

    #[test]
    fn test_number_increment_choice() {
        assert_eq!(
            number("12"),
            LiteralValue::PlainNumber {
                origin: 12.0,
                increment: 1.0
            }
        );
        assert_eq!(
            number(".5"),
            LiteralValue::PlainNumber {
                origin: 0.5,
                increment: 0.1
            }
        );
    }

    #[test]
    fn test_malformed_number_rejected() {
        let huge = "9".repeat(400);
        assert!(LiteralValue::parse(LiteralKind::PlainNumber, &huge).is_none());
        assert!(LiteralValue::parse(LiteralKind::PlainNumber, "-").is_none());
    }

    #[test]
    fn test_color6_saturates() {
        let white = color6("#ffffff");
        assert_eq!(white.update(1), "#ffffff");
        assert_eq!(white.update(1000), "#ffffff");

        let black = color6("#000000");
        assert_eq!(black.update(-1), "#000000");
        assert_eq!(black.update(1), "#010101");
    }

    #[test]
    fn test_color6_channels_clip_independently() {
        let c = color6("#fa1000");
        assert_eq!(c.update(5), "#ff1505");
        assert_eq!(c.update(10), "#ff1a0a");
        assert_eq!(c.update(-16), "#ea0000");
    }

    #[test]
    fn test_color6_pads_and_lowercases() {
        assert_eq!(color6("#0A0B0C").update(0), "#0a0b0c");
        assert_eq!(color6("#000000").update(15), "#0f0f0f");
    }

    #[test]
    fn test_color3_saturates_at_f() {
        let c = color3("#f80");
        assert_eq!(c.update(1), "#f91");
        assert_eq!(c.update(20), "#fff");
        assert_eq!(c.update(-20), "#000");
        assert_eq!(color3("#ABC").update(0), "#abc");
    }

    #[test]
    fn test_kind_round_trips() {
        assert_eq!(color3("#abc").kind(), LiteralKind::Color3);
        assert_eq!(color6("#abcdef").kind(), LiteralKind::Color6);
        assert_eq!(number("1").kind(), LiteralKind::PlainNumber);
    }

    #[test]
    fn test_detect_builds_state() {
        let mut tags = GroupTagAllocator::new();
        let (span, state) = detect("border: 1px solid #abc123;", 19, &mut tags).unwrap();
        assert_eq!(span.text, "#abc123");
        assert_eq!(state.kind(), LiteralKind::Color6);
        assert_eq!(state.update(0), "#abc123");
    }

    #[test]
    fn test_detect_nothing_allocates_no_tag() {
        let mut tags = GroupTagAllocator::new();
        assert!(detect("none", 1, &mut tags).is_none());
        assert_eq!(tags.next_tag(), GroupTag(1));
    }

    #[test]
    fn test_state_from_span_carries_tag() {
        let span = LiteralSpan::new(0, "#123");
        let state = ScrubState::from_span(LiteralKind::Color3, &span, GroupTag(9)).unwrap();
        assert_eq!(state.tag, GroupTag(9));
        assert_eq!(state.update(1), "#234");
    }
}
