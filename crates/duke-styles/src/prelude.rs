//! Prelude module - common imports for duke-styles users
//!
//! ```rust
//! use duke_styles::prelude::*;
//! ```

pub use crate::{
    // Style values
    Attribute,
    BorderLineStyle,
    BorderStyle,
    // Sinks
    CellCoordinate,
    CellStyleSink,
    Color,
    ColorModel,
    DomainPolicy,
    // Error types
    Error,
    ErrorKind,
    FinalStyleTable,
    // Formats
    FormatDescriptor,
    HorizontalAlignment,
    NumberFormat,
    PatternType,
    Result,
    Rotation,
    RotationDomain,
    // Declarations
    Scope,
    StyleDeclaration,
    StyleDefaults,
    StyleHandle,
    StyleRegistry,
    StyleScopeResolver,
    // Main types
    StyleSession,
    VerticalAlignment,
};
