//! Scope resolution: merging ordered declarations into one concrete style
//!
//! Declarations are passed lowest precedence first. For every attribute:
//!
//! 1. the highest-precedence [`Attr::Explicit`] value wins;
//! 2. otherwise, if no scope tagged the attribute [`Attr::Default`] and a
//!    parent style is attached, the parent's value is inherited;
//! 3. otherwise the attribute default applies;
//! 4. with no default either, resolution fails with [`Error::Config`].
//!
//! The merge only reads its inputs, so equal inputs always give equal
//! output and resolvers can be shared between threads.

use crate::attribute::Attribute;
use crate::declaration::{Attr, StyleDeclaration};
use crate::error::{Error, Result};
use crate::style::{Alignment, BorderEdge, BorderStyle, FillStyle, Protection, ResolvedStyle};

/// Per-attribute fallback values
///
/// Starts from a complete style; individual attributes can be removed to
/// make them mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefaults {
    base: ResolvedStyle,
    missing: u32,
}

impl StyleDefaults {
    /// Defaults of the cell style schema (General, locked, bottom aligned,
    /// no borders, no fill, automatic colors)
    pub fn builtin() -> Self {
        Self::from_style(ResolvedStyle::default())
    }

    /// Use every attribute of `style` as default
    pub fn from_style(style: ResolvedStyle) -> Self {
        Self {
            base: style,
            missing: 0,
        }
    }

    /// Remove the default of an attribute
    pub fn without(mut self, attribute: Attribute) -> Self {
        self.missing |= attribute.bit();
        self
    }

    /// Check whether an attribute has a default
    pub fn has(&self, attribute: Attribute) -> bool {
        self.missing & attribute.bit() == 0
    }

    /// The style holding the default values
    pub fn style(&self) -> &ResolvedStyle {
        &self.base
    }
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Merges ordered declarations into a [`ResolvedStyle`]
#[derive(Debug, Clone, Default)]
pub struct StyleScopeResolver {
    defaults: StyleDefaults,
    parent: Option<ResolvedStyle>,
}

impl StyleScopeResolver {
    /// Create a resolver with builtin defaults and no parent style
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the defaults table
    pub fn with_defaults(mut self, defaults: StyleDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Attach the parent style that `Inherited` attributes fall back to
    pub fn with_parent(mut self, parent: ResolvedStyle) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Defaults table
    pub fn defaults(&self) -> &StyleDefaults {
        &self.defaults
    }

    /// Parent style, if attached
    pub fn parent(&self) -> Option<&ResolvedStyle> {
        self.parent.as_ref()
    }

    /// Merge declarations ordered from lowest to highest precedence
    pub fn merge(&self, declarations: &[StyleDeclaration]) -> Result<ResolvedStyle> {
        let d = declarations;

        let protection = Protection {
            locked: self.pick(d, Attribute::Locked, |s| &s.locked, |r| {
                r.protection.locked
            })?,
            hidden: self.pick(d, Attribute::Hidden, |s| &s.hidden, |r| {
                r.protection.hidden
            })?,
        };

        let alignment = Alignment {
            horizontal: self.pick(
                d,
                Attribute::HorizontalAlignment,
                |s| &s.horizontal_alignment,
                |r| r.alignment.horizontal,
            )?,
            vertical: self.pick(
                d,
                Attribute::VerticalAlignment,
                |s| &s.vertical_alignment,
                |r| r.alignment.vertical,
            )?,
            wrap_text: self.pick(d, Attribute::Wrapped, |s| &s.wrapped, |r| {
                r.alignment.wrap_text
            })?,
            shrink_to_fit: self.pick(d, Attribute::ShrinkToFit, |s| &s.shrink_to_fit, |r| {
                r.alignment.shrink_to_fit
            })?,
            indent: self.pick(d, Attribute::Indent, |s| &s.indent, |r| r.alignment.indent)?,
            rotation: self.pick(d, Attribute::Rotation, |s| &s.rotation, |r| {
                r.alignment.rotation
            })?,
        };

        let border = BorderStyle {
            left: BorderEdge::new(
                self.pick(d, Attribute::BorderLeft, |s| &s.border_left, |r| {
                    r.border.left.style
                })?,
                self.pick(d, Attribute::LeftBorderColor, |s| &s.left_border_color, |r| {
                    r.border.left.color
                })?,
            ),
            right: BorderEdge::new(
                self.pick(d, Attribute::BorderRight, |s| &s.border_right, |r| {
                    r.border.right.style
                })?,
                self.pick(d, Attribute::RightBorderColor, |s| &s.right_border_color, |r| {
                    r.border.right.color
                })?,
            ),
            top: BorderEdge::new(
                self.pick(d, Attribute::BorderTop, |s| &s.border_top, |r| {
                    r.border.top.style
                })?,
                self.pick(d, Attribute::TopBorderColor, |s| &s.top_border_color, |r| {
                    r.border.top.color
                })?,
            ),
            bottom: BorderEdge::new(
                self.pick(d, Attribute::BorderBottom, |s| &s.border_bottom, |r| {
                    r.border.bottom.style
                })?,
                self.pick(
                    d,
                    Attribute::BottomBorderColor,
                    |s| &s.bottom_border_color,
                    |r| r.border.bottom.color,
                )?,
            ),
        };

        let fill = FillStyle {
            pattern: self.pick(d, Attribute::FillPattern, |s| &s.fill_pattern, |r| {
                r.fill.pattern
            })?,
            foreground: self.pick(
                d,
                Attribute::FillForegroundColor,
                |s| &s.fill_foreground_color,
                |r| r.fill.foreground,
            )?,
            background: self.pick(
                d,
                Attribute::FillBackgroundColor,
                |s| &s.fill_background_color,
                |r| r.fill.background,
            )?,
        };

        Ok(ResolvedStyle {
            data_format: self.pick(d, Attribute::DataFormat, |s| &s.data_format, |r| {
                r.data_format
            })?,
            protection,
            quote_prefix: self.pick(d, Attribute::QuotePrefix, |s| &s.quote_prefix, |r| {
                r.quote_prefix
            })?,
            alignment,
            border,
            fill,
        })
    }

    fn pick<T: Copy>(
        &self,
        declarations: &[StyleDeclaration],
        attribute: Attribute,
        declared: impl Fn(&StyleDeclaration) -> &Attr<T>,
        stored: impl Fn(&ResolvedStyle) -> T,
    ) -> Result<T> {
        let mut inherit = true;
        for declaration in declarations.iter().rev() {
            match declared(declaration) {
                Attr::Explicit(value) => return Ok(*value),
                Attr::Default => inherit = false,
                Attr::Inherited => {}
            }
        }

        if inherit {
            if let Some(parent) = &self.parent {
                return Ok(stored(parent));
            }
        }
        if self.defaults.has(attribute) {
            return Ok(stored(&self.defaults.base));
        }
        Err(Error::Config { attribute })
    }
}

/// Merge declarations with the builtin defaults and no parent style
pub fn merge(declarations: &[StyleDeclaration]) -> Result<ResolvedStyle> {
    StyleScopeResolver::new().merge(declarations)
}
