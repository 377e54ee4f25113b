//! Schema attribute identifiers

use std::fmt;

/// One formatting attribute of the cell style schema
///
/// The declaration order of the variants is the canonical attribute order
/// used by the resolver, the adapter and the key encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    /// Number format id
    DataFormat,
    /// Formula hidden when the sheet is protected
    Hidden,
    /// Cell locked when the sheet is protected
    Locked,
    /// "123 prefix": treat numeric-looking text as text
    QuotePrefix,
    /// Horizontal alignment
    HorizontalAlignment,
    /// Wrap text
    Wrapped,
    /// Vertical alignment
    VerticalAlignment,
    /// Text rotation
    Rotation,
    /// Indent in spaces
    Indent,
    /// Left border line style
    BorderLeft,
    /// Right border line style
    BorderRight,
    /// Top border line style
    BorderTop,
    /// Bottom border line style
    BorderBottom,
    /// Left border color
    LeftBorderColor,
    /// Right border color
    RightBorderColor,
    /// Top border color
    TopBorderColor,
    /// Bottom border color
    BottomBorderColor,
    /// Fill pattern
    FillPattern,
    /// Fill background color
    FillBackgroundColor,
    /// Fill foreground color
    FillForegroundColor,
    /// Shrink text to fit the cell
    ShrinkToFit,
}

impl Attribute {
    /// Every attribute in canonical order
    pub const ALL: [Attribute; 21] = [
        Attribute::DataFormat,
        Attribute::Hidden,
        Attribute::Locked,
        Attribute::QuotePrefix,
        Attribute::HorizontalAlignment,
        Attribute::Wrapped,
        Attribute::VerticalAlignment,
        Attribute::Rotation,
        Attribute::Indent,
        Attribute::BorderLeft,
        Attribute::BorderRight,
        Attribute::BorderTop,
        Attribute::BorderBottom,
        Attribute::LeftBorderColor,
        Attribute::RightBorderColor,
        Attribute::TopBorderColor,
        Attribute::BottomBorderColor,
        Attribute::FillPattern,
        Attribute::FillBackgroundColor,
        Attribute::FillForegroundColor,
        Attribute::ShrinkToFit,
    ];

    /// Schema name of the attribute
    pub fn name(self) -> &'static str {
        match self {
            Attribute::DataFormat => "data_format",
            Attribute::Hidden => "hidden",
            Attribute::Locked => "locked",
            Attribute::QuotePrefix => "quote_prefix",
            Attribute::HorizontalAlignment => "horizontal_alignment",
            Attribute::Wrapped => "wrapped",
            Attribute::VerticalAlignment => "vertical_alignment",
            Attribute::Rotation => "rotation",
            Attribute::Indent => "indent",
            Attribute::BorderLeft => "border_left",
            Attribute::BorderRight => "border_right",
            Attribute::BorderTop => "border_top",
            Attribute::BorderBottom => "border_bottom",
            Attribute::LeftBorderColor => "left_border_color",
            Attribute::RightBorderColor => "right_border_color",
            Attribute::TopBorderColor => "top_border_color",
            Attribute::BottomBorderColor => "bottom_border_color",
            Attribute::FillPattern => "fill_pattern",
            Attribute::FillBackgroundColor => "fill_background_color",
            Attribute::FillForegroundColor => "fill_foreground_color",
            Attribute::ShrinkToFit => "shrink_to_fit",
        }
    }

    pub(crate) fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
