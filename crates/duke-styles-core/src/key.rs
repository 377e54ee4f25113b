//! Canonical style keys for duplicate detection
//!
//! A key is a fixed-width byte string. Fields are written in the canonical
//! attribute order, integers little-endian:
//!
//! | bytes | field |
//! |-------|-------|
//! | 1 | key layout version |
//! | 2 | data format id |
//! | 1 each | hidden, locked, quote prefix |
//! | 1 | horizontal alignment code |
//! | 1 | wrapped |
//! | 1 | vertical alignment code |
//! | 2 | rotation (canonical) |
//! | 2 | indent |
//! | 1 each | left, right, top, bottom border line code |
//! | 4 each | left, right, top, bottom border color |
//! | 1 | fill pattern code |
//! | 4 each | fill background, fill foreground color |
//! | 1 | shrink to fit |
//!
//! A color is a tag byte (0 auto, 1 indexed, 2 RGB) and three payload bytes
//! (index as u16 plus a zero byte, or r, g, b).
//!
//! Every attribute occupies its own fixed slot, so two styles get the same
//! key exactly when they are structurally equal.

use std::fmt;

use crate::adapter::ValidatedStyle;
use crate::style::Color;

/// Layout version written as the first key byte
pub const KEY_VERSION: u8 = 1;

/// Encoded key length in bytes
pub const KEY_LEN: usize = 43;

/// Canonical encoding of a [`ValidatedStyle`]
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleKey(Box<[u8]>);

impl StyleKey {
    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Debug for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StyleKey({})", self.to_hex())
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Encodes validated styles into [`StyleKey`]s
pub struct StyleKeyEncoder;

impl StyleKeyEncoder {
    /// Encode a style
    pub fn encode(style: &ValidatedStyle) -> StyleKey {
        let mut buf = Vec::with_capacity(KEY_LEN);
        buf.push(KEY_VERSION);

        buf.extend_from_slice(&style.data_format.to_le_bytes());
        buf.push(style.protection.hidden as u8);
        buf.push(style.protection.locked as u8);
        buf.push(style.quote_prefix as u8);

        let al = &style.alignment;
        buf.push(al.horizontal.code());
        buf.push(al.wrap_text as u8);
        buf.push(al.vertical.code());
        buf.extend_from_slice(&al.rotation.to_le_bytes());
        buf.extend_from_slice(&al.indent.to_le_bytes());

        let border = &style.border;
        for edge in [border.left, border.right, border.top, border.bottom] {
            buf.push(edge.style.code());
        }
        for edge in [border.left, border.right, border.top, border.bottom] {
            push_color(&mut buf, edge.color);
        }

        buf.push(style.fill.pattern.code());
        push_color(&mut buf, style.fill.background);
        push_color(&mut buf, style.fill.foreground);

        buf.push(al.shrink_to_fit as u8);

        debug_assert_eq!(buf.len(), KEY_LEN);
        StyleKey(buf.into_boxed_slice())
    }
}

fn push_color(buf: &mut Vec<u8>, color: Color) {
    match color {
        Color::Auto => buf.extend_from_slice(&[0, 0, 0, 0]),
        Color::Indexed(i) => {
            let [lo, hi] = i.to_le_bytes();
            buf.extend_from_slice(&[1, lo, hi, 0]);
        }
        Color::Rgb { r, g, b } => buf.extend_from_slice(&[2, r, g, b]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::normalize;
    use crate::format::FormatDescriptor;
    use crate::style::{BorderLineStyle, BorderStyle, ResolvedStyle};

    fn key(style: ResolvedStyle) -> StyleKey {
        StyleKeyEncoder::encode(&normalize(&style, &FormatDescriptor::xlsx()).unwrap())
    }

    #[test]
    fn test_equal_styles_equal_keys() {
        let a = ResolvedStyle::default().rotation(45).locked(false);
        let b = ResolvedStyle::default().locked(false).rotation(45);
        assert_eq!(key(a), key(b));
    }

    #[test]
    fn test_default_key_layout() {
        let k = key(ResolvedStyle::default());
        assert_eq!(k.as_bytes().len(), KEY_LEN);
        assert_eq!(k.as_bytes()[0], KEY_VERSION);
        // locked defaults to true
        assert_eq!(&k.as_bytes()[3..6], &[0, 1, 0]);
        assert_eq!(k.to_hex().len(), KEY_LEN * 2);
    }

    #[test]
    fn test_small_differences_change_key() {
        let base = key(ResolvedStyle::default());
        let variants = [
            ResolvedStyle::default().data_format(1),
            ResolvedStyle::default().hidden(true),
            ResolvedStyle::default().locked(false),
            ResolvedStyle::default().rotation(1),
            ResolvedStyle::default().fill_color(Color::Indexed(8)),
            ResolvedStyle::default().fill_color(Color::BLACK),
            ResolvedStyle::default().border(BorderStyle::all(BorderLineStyle::Hair, Color::Auto)),
            ResolvedStyle {
                quote_prefix: true,
                ..Default::default()
            },
        ];
        let mut seen = vec![base];
        for variant in variants {
            let k = key(variant);
            assert!(!seen.contains(&k), "duplicate key {k}");
            seen.push(k);
        }
    }

    #[test]
    fn test_indexed_and_rgb_black_differ() {
        // Same rendered color, different stored value
        let indexed = key(ResolvedStyle::default().fill_color(Color::Indexed(8)));
        let rgb = key(ResolvedStyle::default().fill_color(Color::rgb(0, 0, 0)));
        assert_ne!(indexed, rgb);
    }

    #[test]
    fn test_border_sides_are_distinguished() {
        let mut left = ResolvedStyle::default();
        left.border.left.style = BorderLineStyle::Thin;
        let mut right = ResolvedStyle::default();
        right.border.right.style = BorderLineStyle::Thin;
        assert_ne!(key(left), key(right));
    }
}
