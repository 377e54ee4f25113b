//! Style declarations: partial attribute sets contributed by one scope

use std::fmt;

use crate::attribute::Attribute;
use crate::style::{
    BorderLineStyle, Color, HorizontalAlignment, PatternType, ResolvedStyle, VerticalAlignment,
};

/// Tagged value of one attribute in a declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attr<T> {
    /// Value set by this scope
    Explicit(T),
    /// Defer to lower scopes, then to the inherited parent style
    #[default]
    Inherited,
    /// Use the attribute default, ignoring the inherited parent style
    Default,
}

impl<T> Attr<T> {
    /// Check if the scope sets a value
    pub fn is_explicit(&self) -> bool {
        matches!(self, Attr::Explicit(_))
    }

    /// The explicit value, if any
    pub fn explicit(&self) -> Option<&T> {
        match self {
            Attr::Explicit(v) => Some(v),
            _ => None,
        }
    }
}

/// Origin of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scope {
    /// Document-wide defaults
    #[default]
    Global,
    /// Declared on a record type
    Type,
    /// Declared on a single field
    Field,
    /// Supplied at write time
    Override,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scope::Global => "global",
            Scope::Type => "type",
            Scope::Field => "field",
            Scope::Override => "override",
        })
    }
}

/// Possibly partial set of formatting attributes from one scope
///
/// Attributes that are never set stay [`Attr::Inherited`]. Declarations are
/// built with the chained setters and are not modified afterwards.
///
/// ```
/// use duke_styles_core::{Scope, StyleDeclaration};
///
/// let field = StyleDeclaration::new(Scope::Field)
///     .locked(false)
///     .rotation(135);
/// assert_eq!(field.explicit_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleDeclaration {
    scope: Scope,
    pub(crate) data_format: Attr<u16>,
    pub(crate) hidden: Attr<bool>,
    pub(crate) locked: Attr<bool>,
    pub(crate) quote_prefix: Attr<bool>,
    pub(crate) horizontal_alignment: Attr<HorizontalAlignment>,
    pub(crate) wrapped: Attr<bool>,
    pub(crate) vertical_alignment: Attr<VerticalAlignment>,
    pub(crate) rotation: Attr<i16>,
    pub(crate) indent: Attr<u16>,
    pub(crate) border_left: Attr<BorderLineStyle>,
    pub(crate) border_right: Attr<BorderLineStyle>,
    pub(crate) border_top: Attr<BorderLineStyle>,
    pub(crate) border_bottom: Attr<BorderLineStyle>,
    pub(crate) left_border_color: Attr<Color>,
    pub(crate) right_border_color: Attr<Color>,
    pub(crate) top_border_color: Attr<Color>,
    pub(crate) bottom_border_color: Attr<Color>,
    pub(crate) fill_pattern: Attr<PatternType>,
    pub(crate) fill_background_color: Attr<Color>,
    pub(crate) fill_foreground_color: Attr<Color>,
    pub(crate) shrink_to_fit: Attr<bool>,
}

impl StyleDeclaration {
    /// Create an empty declaration for a scope
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    /// Declaration that sets every attribute of `style` explicitly
    pub fn from_style(scope: Scope, style: &ResolvedStyle) -> Self {
        Self::new(scope)
            .data_format(style.data_format)
            .hidden(style.protection.hidden)
            .locked(style.protection.locked)
            .quote_prefix(style.quote_prefix)
            .horizontal_alignment(style.alignment.horizontal)
            .wrapped(style.alignment.wrap_text)
            .vertical_alignment(style.alignment.vertical)
            .rotation(style.alignment.rotation)
            .indent(style.alignment.indent)
            .border_left(style.border.left.style)
            .border_right(style.border.right.style)
            .border_top(style.border.top.style)
            .border_bottom(style.border.bottom.style)
            .left_border_color(style.border.left.color)
            .right_border_color(style.border.right.color)
            .top_border_color(style.border.top.color)
            .bottom_border_color(style.border.bottom.color)
            .fill_pattern(style.fill.pattern)
            .fill_background_color(style.fill.background)
            .fill_foreground_color(style.fill.foreground)
            .shrink_to_fit(style.alignment.shrink_to_fit)
    }

    /// Scope this declaration came from
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Set the number format id
    pub fn data_format(mut self, id: u16) -> Self {
        self.data_format = Attr::Explicit(id);
        self
    }

    /// Set the hidden flag
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Attr::Explicit(hidden);
        self
    }

    /// Set the locked flag
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = Attr::Explicit(locked);
        self
    }

    /// Turn the quote prefix on or off
    pub fn quote_prefix(mut self, quote_prefix: bool) -> Self {
        self.quote_prefix = Attr::Explicit(quote_prefix);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal_alignment = Attr::Explicit(align);
        self
    }

    /// Set text wrapping
    pub fn wrapped(mut self, wrapped: bool) -> Self {
        self.wrapped = Attr::Explicit(wrapped);
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.vertical_alignment = Attr::Explicit(align);
        self
    }

    /// Set rotation in canonical degrees (0-180, 255 for vertical text)
    pub fn rotation(mut self, degrees: i16) -> Self {
        self.rotation = Attr::Explicit(degrees);
        self
    }

    /// Set indent in spaces
    pub fn indent(mut self, indent: u16) -> Self {
        self.indent = Attr::Explicit(indent);
        self
    }

    /// Set left border line style
    pub fn border_left(mut self, style: BorderLineStyle) -> Self {
        self.border_left = Attr::Explicit(style);
        self
    }

    /// Set right border line style
    pub fn border_right(mut self, style: BorderLineStyle) -> Self {
        self.border_right = Attr::Explicit(style);
        self
    }

    /// Set top border line style
    pub fn border_top(mut self, style: BorderLineStyle) -> Self {
        self.border_top = Attr::Explicit(style);
        self
    }

    /// Set bottom border line style
    pub fn border_bottom(mut self, style: BorderLineStyle) -> Self {
        self.border_bottom = Attr::Explicit(style);
        self
    }

    /// Set left border color
    pub fn left_border_color(mut self, color: Color) -> Self {
        self.left_border_color = Attr::Explicit(color);
        self
    }

    /// Set right border color
    pub fn right_border_color(mut self, color: Color) -> Self {
        self.right_border_color = Attr::Explicit(color);
        self
    }

    /// Set top border color
    pub fn top_border_color(mut self, color: Color) -> Self {
        self.top_border_color = Attr::Explicit(color);
        self
    }

    /// Set bottom border color
    pub fn bottom_border_color(mut self, color: Color) -> Self {
        self.bottom_border_color = Attr::Explicit(color);
        self
    }

    /// Set fill pattern
    pub fn fill_pattern(mut self, pattern: PatternType) -> Self {
        self.fill_pattern = Attr::Explicit(pattern);
        self
    }

    /// Set fill background color
    pub fn fill_background_color(mut self, color: Color) -> Self {
        self.fill_background_color = Attr::Explicit(color);
        self
    }

    /// Set fill foreground color
    pub fn fill_foreground_color(mut self, color: Color) -> Self {
        self.fill_foreground_color = Attr::Explicit(color);
        self
    }

    /// Set shrink to fit
    pub fn shrink_to_fit(mut self, shrink: bool) -> Self {
        self.shrink_to_fit = Attr::Explicit(shrink);
        self
    }

    /// Set all four border line styles
    pub fn borders(self, style: BorderLineStyle) -> Self {
        self.border_left(style)
            .border_right(style)
            .border_top(style)
            .border_bottom(style)
    }

    /// Set all four border colors
    pub fn border_colors(self, color: Color) -> Self {
        self.left_border_color(color)
            .right_border_color(color)
            .top_border_color(color)
            .bottom_border_color(color)
    }

    /// Tag an attribute [`Attr::Default`]
    pub fn use_default(self, attribute: Attribute) -> Self {
        self.retag(attribute, true)
    }

    /// Tag an attribute [`Attr::Inherited`]
    pub fn inherit(self, attribute: Attribute) -> Self {
        self.retag(attribute, false)
    }

    /// Number of attributes this scope sets explicitly
    pub fn explicit_count(&self) -> usize {
        Attribute::ALL
            .iter()
            .filter(|a| self.is_explicit(**a))
            .count()
    }

    /// Check whether this scope sets an attribute explicitly
    pub fn is_explicit(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::DataFormat => self.data_format.is_explicit(),
            Attribute::Hidden => self.hidden.is_explicit(),
            Attribute::Locked => self.locked.is_explicit(),
            Attribute::QuotePrefix => self.quote_prefix.is_explicit(),
            Attribute::HorizontalAlignment => self.horizontal_alignment.is_explicit(),
            Attribute::Wrapped => self.wrapped.is_explicit(),
            Attribute::VerticalAlignment => self.vertical_alignment.is_explicit(),
            Attribute::Rotation => self.rotation.is_explicit(),
            Attribute::Indent => self.indent.is_explicit(),
            Attribute::BorderLeft => self.border_left.is_explicit(),
            Attribute::BorderRight => self.border_right.is_explicit(),
            Attribute::BorderTop => self.border_top.is_explicit(),
            Attribute::BorderBottom => self.border_bottom.is_explicit(),
            Attribute::LeftBorderColor => self.left_border_color.is_explicit(),
            Attribute::RightBorderColor => self.right_border_color.is_explicit(),
            Attribute::TopBorderColor => self.top_border_color.is_explicit(),
            Attribute::BottomBorderColor => self.bottom_border_color.is_explicit(),
            Attribute::FillPattern => self.fill_pattern.is_explicit(),
            Attribute::FillBackgroundColor => self.fill_background_color.is_explicit(),
            Attribute::FillForegroundColor => self.fill_foreground_color.is_explicit(),
            Attribute::ShrinkToFit => self.shrink_to_fit.is_explicit(),
        }
    }

    fn retag(mut self, attribute: Attribute, default: bool) -> Self {
        fn tag<T>(default: bool) -> Attr<T> {
            if default {
                Attr::Default
            } else {
                Attr::Inherited
            }
        }

        match attribute {
            Attribute::DataFormat => self.data_format = tag(default),
            Attribute::Hidden => self.hidden = tag(default),
            Attribute::Locked => self.locked = tag(default),
            Attribute::QuotePrefix => self.quote_prefix = tag(default),
            Attribute::HorizontalAlignment => self.horizontal_alignment = tag(default),
            Attribute::Wrapped => self.wrapped = tag(default),
            Attribute::VerticalAlignment => self.vertical_alignment = tag(default),
            Attribute::Rotation => self.rotation = tag(default),
            Attribute::Indent => self.indent = tag(default),
            Attribute::BorderLeft => self.border_left = tag(default),
            Attribute::BorderRight => self.border_right = tag(default),
            Attribute::BorderTop => self.border_top = tag(default),
            Attribute::BorderBottom => self.border_bottom = tag(default),
            Attribute::LeftBorderColor => self.left_border_color = tag(default),
            Attribute::RightBorderColor => self.right_border_color = tag(default),
            Attribute::TopBorderColor => self.top_border_color = tag(default),
            Attribute::BottomBorderColor => self.bottom_border_color = tag(default),
            Attribute::FillPattern => self.fill_pattern = tag(default),
            Attribute::FillBackgroundColor => self.fill_background_color = tag(default),
            Attribute::FillForegroundColor => self.fill_foreground_color = tag(default),
            Attribute::ShrinkToFit => self.shrink_to_fit = tag(default),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_declaration_inherits_everything() {
        let decl = StyleDeclaration::new(Scope::Type);
        assert_eq!(decl.scope(), Scope::Type);
        assert_eq!(decl.explicit_count(), 0);
        assert_eq!(decl.rotation, Attr::Inherited);
    }

    #[test]
    fn test_setters_are_explicit() {
        let decl = StyleDeclaration::new(Scope::Field)
            .hidden(true)
            .borders(BorderLineStyle::Thin);
        assert_eq!(decl.explicit_count(), 5);
        assert!(decl.is_explicit(Attribute::BorderTop));
        assert_eq!(decl.hidden.explicit(), Some(&true));
    }

    #[test]
    fn test_retag() {
        let decl = StyleDeclaration::new(Scope::Override)
            .indent(3)
            .use_default(Attribute::Indent)
            .use_default(Attribute::Locked);
        assert_eq!(decl.indent, Attr::Default);
        assert_eq!(decl.locked, Attr::Default);

        let decl = decl.inherit(Attribute::Locked);
        assert_eq!(decl.locked, Attr::Inherited);
    }

    #[test]
    fn test_from_style_sets_everything() {
        let decl = StyleDeclaration::from_style(Scope::Global, &ResolvedStyle::default());
        assert_eq!(decl.explicit_count(), Attribute::ALL.len());
    }
}
