//! Border style types

use super::Color;

/// Border style for a cell
///
/// Unlike a sparse border record, every edge of a resolved style is concrete;
/// an absent border is an edge with [`BorderLineStyle::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderStyle {
    /// Left border
    pub left: BorderEdge,
    /// Right border
    pub right: BorderEdge,
    /// Top border
    pub top: BorderEdge,
    /// Bottom border
    pub bottom: BorderEdge,
}

impl BorderStyle {
    /// Create a new border style with no borders
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all borders to the same style
    pub fn all(style: BorderLineStyle, color: Color) -> Self {
        let edge = BorderEdge::new(style, color);
        Self {
            left: edge,
            right: edge,
            top: edge,
            bottom: edge,
        }
    }

    /// Check if all borders are empty
    pub fn is_empty(&self) -> bool {
        [self.left, self.right, self.top, self.bottom]
            .iter()
            .all(|edge| edge.style == BorderLineStyle::None)
    }
}

/// A single border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderEdge {
    /// Line style
    pub style: BorderLineStyle,
    /// Line color
    pub color: Color,
}

impl BorderEdge {
    /// Create a new border edge
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self { style, color }
    }

    /// Create a thin border in the automatic color
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin, Color::Auto)
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderLineStyle {
    /// No border
    #[default]
    None,
    /// Thin line
    Thin,
    /// Medium line
    Medium,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Thick line
    Thick,
    /// Double line
    Double,
    /// Hair line (very thin)
    Hair,
    /// Medium dashed
    MediumDashed,
    /// Dash-dot
    DashDot,
    /// Medium dash-dot
    MediumDashDot,
    /// Dash-dot-dot
    DashDotDot,
    /// Medium dash-dot-dot
    MediumDashDotDot,
    /// Slant dash-dot
    SlantDashDot,
}

impl BorderLineStyle {
    /// BIFF line style code (0-13)
    pub fn code(self) -> u8 {
        match self {
            BorderLineStyle::None => 0,
            BorderLineStyle::Thin => 1,
            BorderLineStyle::Medium => 2,
            BorderLineStyle::Dashed => 3,
            BorderLineStyle::Dotted => 4,
            BorderLineStyle::Thick => 5,
            BorderLineStyle::Double => 6,
            BorderLineStyle::Hair => 7,
            BorderLineStyle::MediumDashed => 8,
            BorderLineStyle::DashDot => 9,
            BorderLineStyle::MediumDashDot => 10,
            BorderLineStyle::DashDotDot => 11,
            BorderLineStyle::MediumDashDotDot => 12,
            BorderLineStyle::SlantDashDot => 13,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_empty() {
        assert!(BorderStyle::new().is_empty());

        let border = BorderStyle::all(BorderLineStyle::Thin, Color::Indexed(10));
        assert!(!border.is_empty());
        assert_eq!(border.left, border.bottom);
        assert_eq!(border.top.color, Color::Indexed(10));
    }

    #[test]
    fn test_line_codes() {
        assert_eq!(BorderLineStyle::None.code(), 0);
        assert_eq!(BorderLineStyle::Thick.code(), 5);
        assert_eq!(BorderLineStyle::SlantDashDot.code(), 13);
    }
}
