//! Format adapter: checks a resolved style against an output format
//!
//! Normalization never touches the input; it builds a [`ValidatedStyle`]
//! whose values all lie in the format's legal domains:
//!
//! - number format ids are builtin or registered custom formats;
//! - rotation is canonical (0-180 or 255), whatever the output dialect;
//! - indent is at most the format's ceiling;
//! - palette indices are 0-63, with 64 folded into [`Color::Auto`];
//! - formats with [`ColorModel::Indexed`] get RGB colors replaced by the
//!   nearest palette entry (see [`nearest_index`]).
//!
//! Out-of-domain values fail with [`Error::Format`], or are clamped when
//! the descriptor's policy is [`DomainPolicy::Clamp`].

use std::ops::Deref;

use crate::attribute::Attribute;
use crate::error::{Error, Result};
use crate::format::{ColorModel, DomainPolicy, FormatDescriptor};
use crate::style::{
    nearest_index, Color, NumberFormat, ResolvedStyle, Rotation, AUTOMATIC_INDEX, PALETTE_SIZE,
};

/// Resolved style whose values are legal in the target format
///
/// Only [`FormatAdapter::normalize`] creates these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidatedStyle(ResolvedStyle);

impl ValidatedStyle {
    /// Canonical text rotation
    pub fn rotation(&self) -> Rotation {
        Rotation::from_canonical(self.0.alignment.rotation).unwrap_or(Rotation::NONE)
    }

    /// The underlying style values
    pub fn as_resolved(&self) -> &ResolvedStyle {
        &self.0
    }

    /// Unwrap into the underlying style values
    pub fn into_resolved(self) -> ResolvedStyle {
        self.0
    }
}

impl Deref for ValidatedStyle {
    type Target = ResolvedStyle;

    fn deref(&self) -> &ResolvedStyle {
        &self.0
    }
}

/// Converts resolved styles into the legal domain of one format
#[derive(Debug, Clone, Copy)]
pub struct FormatAdapter<'a> {
    format: &'a FormatDescriptor,
}

impl<'a> FormatAdapter<'a> {
    /// Create an adapter for a format
    pub fn new(format: &'a FormatDescriptor) -> Self {
        Self { format }
    }

    /// Validate and convert a resolved style
    pub fn normalize(&self, style: &ResolvedStyle) -> Result<ValidatedStyle> {
        let mut out = style.clone();

        out.data_format = self.number_format(style.data_format)?;
        out.alignment.rotation = self.rotation(style.alignment.rotation)?;
        out.alignment.indent = self.indent(style.alignment.indent)?;

        out.border.left.color = self.color(Attribute::LeftBorderColor, style.border.left.color)?;
        out.border.right.color =
            self.color(Attribute::RightBorderColor, style.border.right.color)?;
        out.border.top.color = self.color(Attribute::TopBorderColor, style.border.top.color)?;
        out.border.bottom.color =
            self.color(Attribute::BottomBorderColor, style.border.bottom.color)?;
        out.fill.foreground =
            self.color(Attribute::FillForegroundColor, style.fill.foreground)?;
        out.fill.background =
            self.color(Attribute::FillBackgroundColor, style.fill.background)?;

        Ok(ValidatedStyle(out))
    }

    fn number_format(&self, id: u16) -> Result<u16> {
        if self.format.number_formats.contains(id) {
            return Ok(id);
        }
        self.out_of_domain(
            Attribute::DataFormat,
            id,
            "builtin or registered number format id",
            NumberFormat::ID_GENERAL,
        )
    }

    fn rotation(&self, degrees: i16) -> Result<i16> {
        if Rotation::from_canonical(degrees).is_some() {
            return Ok(degrees);
        }
        self.out_of_domain(
            Attribute::Rotation,
            degrees,
            "0..=180 or 255",
            degrees.clamp(0, 180),
        )
    }

    fn indent(&self, indent: u16) -> Result<u16> {
        if indent <= self.format.max_indent {
            return Ok(indent);
        }
        self.out_of_domain(
            Attribute::Indent,
            indent,
            "indent within the format's ceiling",
            self.format.max_indent,
        )
    }

    fn color(&self, attribute: Attribute, color: Color) -> Result<Color> {
        match color {
            Color::Auto => Ok(Color::Auto),
            Color::Indexed(i) if i < PALETTE_SIZE => Ok(color),
            Color::Indexed(AUTOMATIC_INDEX) => Ok(Color::Auto),
            Color::Indexed(i) => {
                self.out_of_domain(attribute, i, "palette index 0..=64", Color::Auto)
            }
            Color::Rgb { r, g, b } => match self.format.color_model {
                ColorModel::Rgb => Ok(color),
                ColorModel::Indexed => {
                    let index = nearest_index(r, g, b);
                    log::trace!("{attribute}: mapped {color} to palette index {index}");
                    Ok(Color::Indexed(index))
                }
            },
        }
    }

    fn out_of_domain<T: std::fmt::Display>(
        &self,
        attribute: Attribute,
        value: impl std::fmt::Display,
        expected: &'static str,
        clamped: T,
    ) -> Result<T> {
        match self.format.policy {
            DomainPolicy::Reject => Err(Error::format(attribute, value, expected)),
            DomainPolicy::Clamp => {
                log::warn!("{attribute}: clamped out-of-domain value {value} to {clamped}");
                Ok(clamped)
            }
        }
    }
}

/// Validate and convert a resolved style for a format
pub fn normalize(style: &ResolvedStyle, format: &FormatDescriptor) -> Result<ValidatedStyle> {
    FormatAdapter::new(format).normalize(style)
}
