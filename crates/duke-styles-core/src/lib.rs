//! # duke-styles-core
//!
//! Pure building blocks of the duke-styles engine. Nothing in this crate
//! holds shared state, so every type here can be used from any number of
//! threads at once.
//!
//! - [`StyleDeclaration`] - Partial attribute set contributed by one scope
//! - [`StyleScopeResolver`] - Merges ordered declarations into a [`ResolvedStyle`]
//! - [`FormatAdapter`] - Validates a resolved style against a [`FormatDescriptor`]
//! - [`StyleKeyEncoder`] - Canonical [`StyleKey`] of a [`ValidatedStyle`]
//!
//! ## Example
//!
//! ```rust
//! use duke_styles_core::{
//!     normalize, FormatDescriptor, Scope, StyleDeclaration, StyleKeyEncoder,
//!     StyleScopeResolver,
//! };
//!
//! let global = StyleDeclaration::new(Scope::Global).hidden(false).locked(true);
//! let field = StyleDeclaration::new(Scope::Field).locked(false).rotation(135);
//!
//! let resolved = StyleScopeResolver::new().merge(&[global, field]).unwrap();
//! let format = FormatDescriptor::xls();
//! let validated = normalize(&resolved, &format).unwrap();
//!
//! assert_eq!(validated.rotation().in_domain(format.rotation_domain), -45);
//! let key = StyleKeyEncoder::encode(&validated);
//! assert_eq!(key, StyleKeyEncoder::encode(&validated));
//! ```

pub mod adapter;
pub mod attribute;
pub mod declaration;
pub mod error;
pub mod format;
pub mod key;
pub mod resolve;
pub mod style;

// Re-exports for convenience
pub use adapter::{normalize, FormatAdapter, ValidatedStyle};
pub use attribute::Attribute;
pub use declaration::{Attr, Scope, StyleDeclaration};
pub use error::{Error, ErrorKind, Result};
pub use format::{ColorModel, DomainPolicy, FormatDescriptor, XLSX_MAX_STYLES, XLS_MAX_STYLES};
pub use key::{StyleKey, StyleKeyEncoder};
pub use resolve::{merge, StyleDefaults, StyleScopeResolver};

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, HorizontalAlignment,
    NumberFormat, NumberFormatTable, PatternType, Protection, ResolvedStyle, Rotation,
    RotationDomain, VerticalAlignment,
};
