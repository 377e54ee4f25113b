//! Text rotation and its dialect-specific encodings
//!
//! Styles store rotation in the canonical domain: 0-180 degrees, where 0-90
//! rotates counter-clockwise and 91-180 rotates clockwise, plus the marker
//! 255 for vertically stacked text. Legacy (BIFF-era) formats use a signed
//! ±90 domain instead. Conversion happens only when a value is written out:
//!
//! ```text
//! legacy    = canonical <= 90 ? canonical : canonical - 180
//! canonical = legacy >= 0     ? legacy    : legacy + 180
//! ```
//!
//! The mapping is lossless for canonical 0-179. Canonical 180 encodes to
//! legacy 0, which decodes back to canonical 0; that is the only point where
//! two canonical values share a legacy representative.

/// Marker value for vertically stacked text, identical in both domains
pub const VERTICAL_TEXT: i16 = 255;

/// Rotation value domain of an output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationDomain {
    /// 0 to 180 degrees (XLSX)
    #[default]
    Canonical,
    /// -90 to 90 degrees (XLS)
    Legacy,
}

/// Validated text rotation in the canonical domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// Rotation angle, 0-180
    Degrees(u8),
    /// Vertically stacked text
    Vertical,
}

impl Rotation {
    /// No rotation
    pub const NONE: Rotation = Rotation::Degrees(0);

    /// Parse a canonical value (0-180 or 255)
    pub fn from_canonical(value: i16) -> Option<Self> {
        match value {
            0..=180 => Some(Rotation::Degrees(value as u8)),
            VERTICAL_TEXT => Some(Rotation::Vertical),
            _ => None,
        }
    }

    /// Parse a legacy value (-90 to 90 or 255)
    pub fn from_legacy(value: i16) -> Option<Self> {
        match value {
            -90..=90 => Self::from_canonical(legacy_to_canonical(value)),
            VERTICAL_TEXT => Some(Rotation::Vertical),
            _ => None,
        }
    }

    /// Value in the canonical domain
    pub fn canonical(self) -> i16 {
        match self {
            Rotation::Degrees(d) => d as i16,
            Rotation::Vertical => VERTICAL_TEXT,
        }
    }

    /// Value in the legacy ±90 domain
    pub fn legacy(self) -> i16 {
        match self {
            Rotation::Degrees(d) => canonical_to_legacy(d as i16),
            Rotation::Vertical => VERTICAL_TEXT,
        }
    }

    /// Value in the given domain
    pub fn in_domain(self, domain: RotationDomain) -> i16 {
        match domain {
            RotationDomain::Canonical => self.canonical(),
            RotationDomain::Legacy => self.legacy(),
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::NONE
    }
}

/// Map canonical degrees (0-180) to the legacy ±90 domain
pub fn canonical_to_legacy(canonical: i16) -> i16 {
    if canonical <= 90 {
        canonical
    } else {
        canonical - 180
    }
}

/// Map legacy degrees (-90 to 90) to the canonical domain
pub fn legacy_to_canonical(legacy: i16) -> i16 {
    if legacy >= 0 {
        legacy
    } else {
        legacy + 180
    }
}
