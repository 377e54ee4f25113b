//! Cell style value types
//!
//! This module contains the concrete attribute types of a cell style:
//! - [`ResolvedStyle`] - Complete, fully concrete cell style
//! - [`FillStyle`] - Background fill
//! - [`BorderStyle`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`Rotation`] - Canonical text rotation and dialect conversion
//! - [`Color`] - Color representation
//! - [`NumberFormatTable`] - Builtin and custom number formats

mod alignment;
mod border;
mod color;
mod fill;
mod number_format;
mod rotation;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle};
pub use color::{nearest_index, palette_rgb, Color, AUTOMATIC_INDEX, PALETTE_SIZE};
pub use fill::{FillStyle, PatternType};
pub use number_format::{NumberFormat, NumberFormatTable, FIRST_CUSTOM_ID, MAX_BUILTIN_ID};
pub use rotation::{
    canonical_to_legacy, legacy_to_canonical, Rotation, RotationDomain, VERTICAL_TEXT,
};

/// Complete cell style with every attribute concrete
///
/// Produced by the scope resolver; equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedStyle {
    /// Number format id
    pub data_format: u16,
    /// Cell protection
    pub protection: Protection,
    /// Quote ("123") prefix
    pub quote_prefix: bool,
    /// Text alignment
    pub alignment: Alignment,
    /// Border settings
    pub border: BorderStyle,
    /// Fill/background settings
    pub fill: FillStyle,
}

impl ResolvedStyle {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number format id
    pub fn data_format(mut self, id: u16) -> Self {
        self.data_format = id;
        self
    }

    /// Set locked flag
    pub fn locked(mut self, locked: bool) -> Self {
        self.protection.locked = locked;
        self
    }

    /// Set hidden flag
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.protection.hidden = hidden;
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = align;
        self
    }

    /// Set rotation in canonical degrees
    pub fn rotation(mut self, degrees: i16) -> Self {
        self.alignment.rotation = degrees;
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::solid(color);
        self
    }

    /// Set all four borders
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }
}

/// Cell protection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Protection {
    /// Cell is locked (protected when sheet is protected)
    pub locked: bool,
    /// Formula is hidden when sheet is protected
    pub hidden: bool,
}

impl Protection {
    /// Create default protection (locked, not hidden)
    pub fn new() -> Self {
        Self {
            locked: true,
            hidden: false,
        }
    }

    /// Create unlocked protection
    pub fn unlocked() -> Self {
        Self {
            locked: false,
            hidden: false,
        }
    }
}

impl Default for Protection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_schema() {
        let style = ResolvedStyle::default();
        assert_eq!(style.data_format, NumberFormat::ID_GENERAL);
        assert!(style.protection.locked);
        assert!(!style.protection.hidden);
        assert!(!style.quote_prefix);
        assert_eq!(style.alignment.vertical, VerticalAlignment::Bottom);
        assert!(style.border.is_empty());
        assert!(style.fill.is_none());
    }

    #[test]
    fn test_builder() {
        let style = ResolvedStyle::new()
            .locked(false)
            .rotation(45)
            .fill_color(Color::Indexed(13));
        assert!(!style.protection.locked);
        assert_eq!(style.alignment.rotation, 45);
        assert_eq!(style.fill.pattern, PatternType::Solid);
        assert_ne!(style, ResolvedStyle::default());
    }
}
