//! Style sessions: one document's resolver, format and registry

use duke_styles_core::{
    normalize, Error, FormatDescriptor, Result, StyleDeclaration, StyleKeyEncoder,
    StyleScopeResolver, ValidatedStyle,
};

use crate::registry::{RegistryState, RegistryStats, StyleHandle, StyleRegistry};
use crate::sink::{CellCoordinate, CellStyleSink};
use crate::table::FinalStyleTable;

/// Resolve, normalize and intern one cell's declarations
///
/// Declarations are ordered from lowest to highest precedence. Resolution
/// and format errors are returned before the registry is touched. The
/// registry's ceiling must not exceed the format's.
pub fn resolve(
    declarations: &[StyleDeclaration],
    format: &FormatDescriptor,
    resolver: &StyleScopeResolver,
    registry: &StyleRegistry,
) -> Result<StyleHandle> {
    check_ceiling(format, registry)?;
    let resolved = resolver.merge(declarations)?;
    let validated = normalize(&resolved, format)?;
    let key = StyleKeyEncoder::encode(&validated);
    registry.intern_keyed(key, validated)
}

fn check_ceiling(format: &FormatDescriptor, registry: &StyleRegistry) -> Result<()> {
    if registry.max_styles() > format.max_styles {
        return Err(Error::Registry {
            reason: format!(
                "registry holds up to {} styles, format allows {}",
                registry.max_styles(),
                format.max_styles
            ),
        });
    }
    Ok(())
}

/// Style state of one document being written
///
/// `resolve` and `apply` take `&self`, so a session can be shared by
/// reference between worker threads. Configuration changes, sealing and
/// resetting happen between writes.
///
/// ```
/// use duke_styles::{Scope, StyleDeclaration, StyleSession, FormatDescriptor};
///
/// let session = StyleSession::new(FormatDescriptor::xls());
/// let global = StyleDeclaration::new(Scope::Global).hidden(false).locked(true);
/// let field = StyleDeclaration::new(Scope::Field).locked(false).rotation(135);
///
/// let a = session.resolve(&[global.clone(), field.clone()]).unwrap();
/// let b = session.resolve(&[global, field]).unwrap();
/// assert_eq!(a, b);
///
/// let table = session.seal();
/// let record = table.records(session.format()).next().unwrap();
/// assert_eq!(record.rotation, -45);
/// ```
#[derive(Debug)]
pub struct StyleSession {
    base_format: FormatDescriptor,
    format: FormatDescriptor,
    resolver: StyleScopeResolver,
    registry: StyleRegistry,
    overflow: Option<StyleHandle>,
}

impl StyleSession {
    /// Create a session writing to `format`
    pub fn new(format: FormatDescriptor) -> Self {
        let registry = StyleRegistry::new(format.max_styles);
        Self::from_parts(format, registry)
    }

    /// Create a session around an existing registry
    ///
    /// The registry must be open, empty and have a ceiling no larger than
    /// the format's.
    pub fn with_registry(format: FormatDescriptor, registry: StyleRegistry) -> Result<Self> {
        check_ceiling(&format, &registry)?;
        if registry.is_sealed() {
            return Err(Error::Registry {
                reason: "registry is sealed".into(),
            });
        }
        if !registry.is_empty() {
            return Err(Error::Registry {
                reason: format!("registry already holds {} styles", registry.len()),
            });
        }
        Ok(Self::from_parts(format, registry))
    }

    fn from_parts(format: FormatDescriptor, registry: StyleRegistry) -> Self {
        Self {
            base_format: format.clone(),
            format,
            resolver: StyleScopeResolver::new(),
            registry,
            overflow: None,
        }
    }

    /// Replace the resolver configuration
    pub fn with_resolver(mut self, resolver: StyleScopeResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Output format, including number formats registered so far
    pub fn format(&self) -> &FormatDescriptor {
        &self.format
    }

    /// Resolver configuration
    pub fn resolver(&self) -> &StyleScopeResolver {
        &self.resolver
    }

    /// Number of distinct styles interned
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if no style has been interned
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Distinct-style ceiling
    pub fn max_styles(&self) -> usize {
        self.registry.max_styles()
    }

    /// Registry lifecycle state
    pub fn state(&self) -> RegistryState {
        self.registry.state()
    }

    /// Registry activity since the last reset
    pub fn stats(&self) -> RegistryStats {
        self.registry.stats()
    }

    /// Declare a custom number format under an explicit id
    pub fn register_number_format(&mut self, id: u16, code: &str) -> Result<()> {
        self.format.number_formats.register(id, code)
    }

    /// Declare a number format code, returning its id
    ///
    /// Builtin and previously added codes keep their existing id.
    pub fn add_number_format(&mut self, code: &str) -> Result<u16> {
        self.format.number_formats.add(code)
    }

    /// Resolve and normalize without interning
    pub fn validate(&self, declarations: &[StyleDeclaration]) -> Result<ValidatedStyle> {
        let resolved = self.resolver.merge(declarations)?;
        normalize(&resolved, &self.format)
    }

    /// Resolve one cell's declarations to a style handle
    ///
    /// When the style table is full and an overflow style is set, new
    /// styles get the overflow handle instead of an error.
    pub fn resolve(&self, declarations: &[StyleDeclaration]) -> Result<StyleHandle> {
        match resolve(declarations, &self.format, &self.resolver, &self.registry) {
            Err(Error::CapacityExceeded { limit, key }) => match self.overflow {
                Some(handle) => {
                    log::warn!(
                        "style table full ({limit} styles), using overflow style {handle} for key {key}"
                    );
                    Ok(handle)
                }
                None => Err(Error::CapacityExceeded { limit, key }),
            },
            other => other,
        }
    }

    /// Intern the shared style that replaces new styles once the table is
    /// full
    pub fn set_overflow_style(&mut self, declarations: &[StyleDeclaration]) -> Result<StyleHandle> {
        let handle = resolve(declarations, &self.format, &self.resolver, &self.registry)?;
        self.overflow = Some(handle);
        Ok(handle)
    }

    /// Current overflow style, if any
    pub fn overflow_style(&self) -> Option<StyleHandle> {
        self.overflow
    }

    /// Resolve a cell's declarations and hand the result to a sink
    pub fn apply<S: CellStyleSink>(
        &self,
        cell: CellCoordinate,
        declarations: &[StyleDeclaration],
        sink: &mut S,
    ) -> Result<StyleHandle> {
        let handle = self.resolve(declarations)?;
        sink.accept(cell, handle);
        Ok(handle)
    }

    /// Freeze the style table
    pub fn seal(&self) -> FinalStyleTable {
        self.registry.seal()
    }

    /// Start a new document: empty registry, initial number formats and no
    /// overflow style
    pub fn reset(&mut self) {
        self.registry.reset();
        self.format = self.base_format.clone();
        self.overflow = None;
    }
}
