//! Output format descriptors

use crate::error::Result;
use crate::style::{NumberFormatTable, RotationDomain};

/// Maximum distinct cell formats in an XLSX workbook
pub const XLSX_MAX_STYLES: usize = 64_000;

/// Maximum distinct cell formats in an XLS (BIFF8) workbook
pub const XLS_MAX_STYLES: usize = 4_000;

/// Color storage supported by an output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorModel {
    /// Only palette indices; RGB requests map to the nearest palette entry
    Indexed,
    /// Direct RGB; the nearest palette index is available as a fallback
    #[default]
    Rgb,
}

/// What the adapter does with out-of-domain values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainPolicy {
    /// Fail with a format error
    #[default]
    Reject,
    /// Clamp into the legal domain and log a warning
    Clamp,
}

/// Legal value domains of an output format
///
/// ```
/// use duke_styles_core::{DomainPolicy, FormatDescriptor};
///
/// let format = FormatDescriptor::xls()
///     .with_max_styles(1_000)
///     .with_policy(DomainPolicy::Clamp);
/// assert_eq!(format.max_styles, 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatDescriptor {
    /// Maximum number of distinct styles
    pub max_styles: usize,
    /// Supported color model
    pub color_model: ColorModel,
    /// Rotation domain used when styles are written out
    pub rotation_domain: RotationDomain,
    /// Largest legal indent
    pub max_indent: u16,
    /// Handling of out-of-domain values
    pub policy: DomainPolicy,
    /// Builtin and custom number formats
    pub number_formats: NumberFormatTable,
}

impl FormatDescriptor {
    /// Office Open XML spreadsheet (XLSX)
    pub fn xlsx() -> Self {
        Self {
            max_styles: XLSX_MAX_STYLES,
            color_model: ColorModel::Rgb,
            rotation_domain: RotationDomain::Canonical,
            max_indent: 250,
            policy: DomainPolicy::Reject,
            number_formats: NumberFormatTable::new(),
        }
    }

    /// Legacy binary spreadsheet (XLS, BIFF8)
    pub fn xls() -> Self {
        Self {
            max_styles: XLS_MAX_STYLES,
            color_model: ColorModel::Indexed,
            rotation_domain: RotationDomain::Legacy,
            max_indent: 15,
            policy: DomainPolicy::Reject,
            number_formats: NumberFormatTable::new(),
        }
    }

    /// Set the distinct-style ceiling
    pub fn with_max_styles(mut self, max_styles: usize) -> Self {
        self.max_styles = max_styles;
        self
    }

    /// Set the color model
    pub fn with_color_model(mut self, color_model: ColorModel) -> Self {
        self.color_model = color_model;
        self
    }

    /// Set the rotation domain
    pub fn with_rotation_domain(mut self, domain: RotationDomain) -> Self {
        self.rotation_domain = domain;
        self
    }

    /// Set the indent ceiling
    pub fn with_max_indent(mut self, max_indent: u16) -> Self {
        self.max_indent = max_indent;
        self
    }

    /// Set the out-of-domain policy
    pub fn with_policy(mut self, policy: DomainPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Declare a custom number format under an explicit id
    pub fn with_custom_format(mut self, id: u16, code: &str) -> Result<Self> {
        self.number_formats.register(id, code)?;
        Ok(self)
    }
}

impl Default for FormatDescriptor {
    fn default() -> Self {
        Self::xlsx()
    }
}
