//! Text alignment types

/// Text alignment settings of a resolved style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Horizontal alignment
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment
    pub vertical: VerticalAlignment,
    /// Wrap text
    pub wrap_text: bool,
    /// Shrink to fit
    pub shrink_to_fit: bool,
    /// Indent level in spaces
    pub indent: u16,
    /// Text rotation in canonical degrees (0-180, or 255 for vertical text)
    ///
    /// Resolution keeps whatever was declared; the format adapter checks the
    /// domain. See [`Rotation`](super::Rotation) for dialect conversion.
    pub rotation: i16,
}

impl Alignment {
    /// Create a new default alignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set horizontal alignment
    pub fn with_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn with_vertical(mut self, align: VerticalAlignment) -> Self {
        self.vertical = align;
        self
    }

    /// Enable text wrapping
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    /// Set indent level
    pub fn with_indent(mut self, indent: u16) -> Self {
        self.indent = indent;
        self
    }

    /// Set rotation angle in canonical degrees
    pub fn with_rotation(mut self, degrees: i16) -> Self {
        self.rotation = degrees;
        self
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// General alignment (text left, numbers right)
    #[default]
    General,
    /// Left aligned
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
    /// Fill (repeat content to fill cell width)
    Fill,
    /// Justify (stretch to fit width)
    Justify,
    /// Center across selection
    CenterContinuous,
    /// Distributed (like justify, but for East Asian text)
    Distributed,
}

impl HorizontalAlignment {
    /// BIFF alignment code (0-7)
    pub fn code(self) -> u8 {
        match self {
            HorizontalAlignment::General => 0,
            HorizontalAlignment::Left => 1,
            HorizontalAlignment::Center => 2,
            HorizontalAlignment::Right => 3,
            HorizontalAlignment::Fill => 4,
            HorizontalAlignment::Justify => 5,
            HorizontalAlignment::CenterContinuous => 6,
            HorizontalAlignment::Distributed => 7,
        }
    }
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    /// Top aligned
    Top,
    /// Center aligned
    Center,
    /// Bottom aligned (default)
    #[default]
    Bottom,
    /// Justify
    Justify,
    /// Distributed
    Distributed,
}

impl VerticalAlignment {
    /// BIFF alignment code (0-4)
    pub fn code(self) -> u8 {
        match self {
            VerticalAlignment::Top => 0,
            VerticalAlignment::Center => 1,
            VerticalAlignment::Bottom => 2,
            VerticalAlignment::Justify => 3,
            VerticalAlignment::Distributed => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alignment() {
        let al = Alignment::new();
        assert_eq!(al.horizontal, HorizontalAlignment::General);
        assert_eq!(al.vertical, VerticalAlignment::Bottom);
        assert_eq!(al.rotation, 0);
    }

    #[test]
    fn test_codes() {
        assert_eq!(HorizontalAlignment::General.code(), 0);
        assert_eq!(HorizontalAlignment::Distributed.code(), 7);
        assert_eq!(VerticalAlignment::Top.code(), 0);
        assert_eq!(VerticalAlignment::Bottom.code(), 2);
    }
}
