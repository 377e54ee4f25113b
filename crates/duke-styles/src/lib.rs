//! # duke-styles
//!
//! Style resolution and deduplication for spreadsheet writers.
//!
//! A writer describes each cell's formatting as an ordered list of partial
//! [`StyleDeclaration`]s (global, type, field, override). The engine merges
//! them, checks the result against the output format, and deduplicates it
//! into a compact table of distinct styles that cells refer to by
//! [`StyleHandle`].
//!
//! ## Features
//!
//! - Per-attribute scope precedence with explicit, inherited and default values
//! - XLSX and legacy XLS format descriptors (style ceilings, palette colors,
//!   ±90 text rotation)
//! - Sharded registry that many threads can intern into at once
//! - Generation-checked handles so sessions can be reused across documents
//!
//! ## Example
//!
//! ```rust
//! use duke_styles::prelude::*;
//!
//! let session = StyleSession::new(FormatDescriptor::xls());
//! let header = StyleDeclaration::new(Scope::Type)
//!     .horizontal_alignment(HorizontalAlignment::Center)
//!     .fill_pattern(PatternType::Solid)
//!     .fill_foreground_color(Color::rgb(250, 100, 10));
//!
//! let mut cells = Vec::new();
//! for col in 0..3 {
//!     session
//!         .apply(CellCoordinate::new(0, col), &[header.clone()], &mut cells)
//!         .unwrap();
//! }
//!
//! let table = session.seal();
//! assert_eq!(table.len(), 1);
//! assert_eq!(cells.len(), 3);
//! ```

pub mod prelude;
pub mod registry;
pub mod session;
pub mod sink;
pub mod table;

pub use registry::{RegistryState, RegistryStats, StyleHandle, StyleRegistry};
pub use session::{resolve, StyleSession};
pub use sink::{CellCoordinate, CellStyleSink};
pub use table::{FinalStyleTable, XfRecord};

// Re-export core types
pub use duke_styles_core::{
    normalize, Alignment, Attr, Attribute, BorderEdge, BorderLineStyle, BorderStyle, Color,
    ColorModel, DomainPolicy, Error, ErrorKind, FillStyle, FormatAdapter, FormatDescriptor,
    HorizontalAlignment, NumberFormat, NumberFormatTable, PatternType, Protection, ResolvedStyle,
    Result, Rotation, RotationDomain, Scope, StyleDeclaration, StyleDefaults, StyleKey,
    StyleKeyEncoder, StyleScopeResolver, ValidatedStyle, VerticalAlignment, XLSX_MAX_STYLES,
    XLS_MAX_STYLES,
};
