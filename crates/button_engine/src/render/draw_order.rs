//! Layer draw order
//!
//! An instance may carry a compact order code: up to five two-digit decimal
//! codes, `01` fill, `02` bitmap, `03` icon, `04` text, `05` border. Parsing
//! is all-or-nothing; any malformed code yields the default order
//! `fill, bitmap, text, border`.

use std::fmt;
use std::ops::Index;

use crate::render::diagnostics::{emit, Diagnostic, DiagnosticSink};

/// Number of slots in a resolved draw order
pub const DRAW_ORDER_SLOTS: usize = 5;

/// Visual layer of a button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum LayerKind {
    /// Empty slot
    #[default]
    None = 0,
    /// Solid or gradient background
    Fill = 1,
    /// Bitmap layers
    Bitmap = 2,
    /// Icon
    Icon = 3,
    /// Text label
    Text = 4,
    /// Border
    Border = 5,
}

impl LayerKind {
    /// Map an order code; only 1..=5 are valid, `None` is never produced
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Fill),
            2 => Some(Self::Bitmap),
            3 => Some(Self::Icon),
            4 => Some(Self::Text),
            5 => Some(Self::Border),
            _ => None,
        }
    }

    /// Numeric code of this layer
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Fill => "fill",
            Self::Bitmap => "bitmap",
            Self::Icon => "icon",
            Self::Text => "text",
            Self::Border => "border",
        };
        f.write_str(name)
    }
}

/// Resolved order of the five layer slots, padded with [`LayerKind::None`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawOrder([LayerKind; DRAW_ORDER_SLOTS]);

impl DrawOrder {
    /// Order used whenever no valid code is given
    pub const DEFAULT: Self = Self([
        LayerKind::Fill,
        LayerKind::Bitmap,
        LayerKind::Text,
        LayerKind::Border,
        LayerKind::None,
    ]);

    /// Build an order from explicit slots
    pub const fn from_slots(slots: [LayerKind; DRAW_ORDER_SLOTS]) -> Self {
        Self(slots)
    }

    /// Resolve an order code, reporting every fallback to `sink`
    ///
    /// Empty codes and codes with an odd number of characters silently select
    /// the default. More than five codes are clamped to the first five with a
    /// warning. Any code outside `01..=05` rejects the whole string.
    pub fn resolve(code: &str, sink: &mut dyn DiagnosticSink) -> Self {
        let chars: Vec<char> = code.chars().collect();
        if chars.is_empty() || chars.len() % 2 != 0 {
            return Self::DEFAULT;
        }

        let mut count = chars.len() / 2;
        if count > DRAW_ORDER_SLOTS {
            emit(sink, Diagnostic::DrawOrderOverflow { count });
            count = DRAW_ORDER_SLOTS;
        }

        let mut slots = [LayerKind::None; DRAW_ORDER_SLOTS];
        for (position, pair) in chars.chunks_exact(2).take(count).enumerate() {
            match parse_pair(pair).and_then(LayerKind::from_code) {
                Some(kind) => slots[position] = kind,
                None => {
                    emit(
                        sink,
                        Diagnostic::InvalidDrawOrderCode {
                            position,
                            pair: pair.iter().collect(),
                        },
                    );
                    return Self::DEFAULT;
                }
            }
        }

        Self(slots)
    }

    /// Resolve an order code, logging fallbacks only
    pub fn parse(code: &str) -> Self {
        Self::resolve(code, &mut ())
    }

    /// All five slots, including empty ones
    pub const fn slots(&self) -> &[LayerKind; DRAW_ORDER_SLOTS] {
        &self.0
    }

    /// Non-empty slots in draw order
    pub fn layers(&self) -> impl Iterator<Item = LayerKind> + '_ {
        self.0.iter().copied().filter(|kind| *kind != LayerKind::None)
    }

    /// Encode back into the two-digit format, stopping at the first empty slot
    pub fn to_code(&self) -> String {
        self.0
            .iter()
            .take_while(|kind| **kind != LayerKind::None)
            .map(|kind| format!("{:02}", kind.code()))
            .collect()
    }
}

impl Default for DrawOrder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Index<usize> for DrawOrder {
    type Output = LayerKind;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Two ASCII digits to a number; anything else is rejected
fn parse_pair(pair: &[char]) -> Option<u8> {
    match pair {
        [hi, lo] => u8::try_from(hi.to_digit(10)? * 10 + lo.to_digit(10)?).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LayerKind::{Bitmap, Border, Fill, Icon, None as Empty, Text};

    fn resolve(code: &str) -> (DrawOrder, Vec<Diagnostic>) {
        let mut sink = Vec::new();
        let order = DrawOrder::resolve(code, &mut sink);
        (order, sink)
    }

    #[test]
    fn test_default_order() {
        assert_eq!(DrawOrder::default().slots(), &[Fill, Bitmap, Text, Border, Empty]);
        assert_eq!(DrawOrder::default().to_code(), "01020405");
    }

    #[test]
    fn test_empty_and_odd_lengths_use_default() {
        for code in ["", "0", "010", "01020", "010203040"] {
            let (order, diags) = resolve(code);
            assert_eq!(order, DrawOrder::DEFAULT, "code {:?}", code);
            assert!(diags.is_empty(), "odd/empty codes are not reported: {:?}", code);
        }
    }

    #[test]
    fn test_odd_character_count_is_silent_for_multibyte_codes() {
        for code in ["é", "01é", "ééé"] {
            let (order, diags) = resolve(code);
            assert_eq!(order, DrawOrder::DEFAULT, "code {:?}", code);
            assert!(diags.is_empty(), "code {:?} reported {:?}", code, diags);
        }
    }

    #[test]
    fn test_even_multibyte_code_is_reported_by_character() {
        let (order, diags) = resolve("01é2");
        assert_eq!(order, DrawOrder::DEFAULT);
        assert_eq!(
            diags,
            vec![Diagnostic::InvalidDrawOrderCode { position: 1, pair: "é2".to_string() }]
        );
    }

    #[test]
    fn test_custom_order() {
        let (order, diags) = resolve("0504030201");
        assert_eq!(order.slots(), &[Border, Text, Icon, Bitmap, Fill]);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_short_order_padded_with_none() {
        let (order, _) = resolve("0201");
        assert_eq!(order.slots(), &[Bitmap, Fill, Empty, Empty, Empty]);
        assert_eq!(order.layers().collect::<Vec<_>>(), vec![Bitmap, Fill]);
    }

    #[test]
    fn test_overflow_clamps_to_five_and_warns() {
        let (order, diags) = resolve("050403020101");
        assert_eq!(order.slots(), &[Border, Text, Icon, Bitmap, Fill]);
        assert_eq!(diags, vec![Diagnostic::DrawOrderOverflow { count: 6 }]);
    }

    #[test]
    fn test_overflow_ignores_garbage_after_fifth_code() {
        let (order, diags) = resolve("0102030405zz");
        assert_eq!(order.slots(), &[Fill, Bitmap, Icon, Text, Border]);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_invalid_code_is_all_or_nothing() {
        let (order, diags) = resolve("0106");
        assert_eq!(order, DrawOrder::DEFAULT);
        assert_eq!(
            diags,
            vec![Diagnostic::InvalidDrawOrderCode { position: 1, pair: "06".to_string() }]
        );
    }

    #[test]
    fn test_invalid_codes_anywhere() {
        for code in ["00", "06", "ab", "0100", "01ab02", "+1", " 1", "99"] {
            let (order, diags) = resolve(code);
            assert_eq!(order, DrawOrder::DEFAULT, "code {:?}", code);
            assert_eq!(diags.len(), 1, "code {:?} should report one error", code);
        }
    }

    #[test]
    fn test_to_code_roundtrip() {
        let (order, _) = resolve("030201");
        assert_eq!(order.to_code(), "030201");
        assert_eq!(DrawOrder::parse(&order.to_code()), order);
    }

    #[test]
    fn test_layer_kind_codes() {
        assert_eq!(LayerKind::from_code(0), None);
        assert_eq!(LayerKind::from_code(3), Some(Icon));
        assert_eq!(LayerKind::from_code(6), None);
        assert_eq!(Border.code(), 5);
    }
}
