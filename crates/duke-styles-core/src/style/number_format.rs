//! Number format ids and the per-session custom format table

use std::collections::BTreeMap;

use crate::attribute::Attribute;
use crate::error::{Error, Result};

/// Highest builtin number format id
pub const MAX_BUILTIN_ID: u16 = 49;

/// First id available to custom number formats
pub const FIRST_CUSTOM_ID: u16 = 164;

/// Longest accepted custom format code, in characters
const MAX_CODE_LEN: usize = 255;

/// Builtin format ids
pub struct NumberFormat;

impl NumberFormat {
    /// 0 - General
    pub const ID_GENERAL: u16 = 0;
    /// 1 - 0
    pub const ID_NUMBER_INT: u16 = 1;
    /// 2 - 0.00
    pub const ID_NUMBER_DEC2: u16 = 2;
    /// 3 - #,##0
    pub const ID_NUMBER_SEP: u16 = 3;
    /// 4 - #,##0.00
    pub const ID_NUMBER_SEP_DEC2: u16 = 4;
    /// 9 - 0%
    pub const ID_PERCENT_INT: u16 = 9;
    /// 10 - 0.00%
    pub const ID_PERCENT_DEC2: u16 = 10;
    /// 11 - 0.00E+00
    pub const ID_SCIENTIFIC: u16 = 11;
    /// 14 - m/d/yy
    pub const ID_DATE_SHORT: u16 = 14;
    /// 20 - h:mm
    pub const ID_TIME_24H: u16 = 20;
    /// 22 - m/d/yy h:mm
    pub const ID_DATETIME: u16 = 22;
    /// 49 - @
    pub const ID_TEXT: u16 = 49;

    /// Check whether an id is one of the builtin formats
    pub fn is_builtin(id: u16) -> bool {
        id <= MAX_BUILTIN_ID
    }

    /// Format code of a builtin id
    ///
    /// Ids 23-36 are reserved for locale-specific formats and have no fixed
    /// code.
    pub fn builtin_code(id: u16) -> Option<&'static str> {
        let code = match id {
            0 => "General",
            1 => "0",
            2 => "0.00",
            3 => "#,##0",
            4 => "#,##0.00",
            5 => "\"$\"#,##0_);(\"$\"#,##0)",
            6 => "\"$\"#,##0_);[Red](\"$\"#,##0)",
            7 => "\"$\"#,##0.00_);(\"$\"#,##0.00)",
            8 => "\"$\"#,##0.00_);[Red](\"$\"#,##0.00)",
            9 => "0%",
            10 => "0.00%",
            11 => "0.00E+00",
            12 => "# ?/?",
            13 => "# ??/??",
            14 => "m/d/yy",
            15 => "d-mmm-yy",
            16 => "d-mmm",
            17 => "mmm-yy",
            18 => "h:mm AM/PM",
            19 => "h:mm:ss AM/PM",
            20 => "h:mm",
            21 => "h:mm:ss",
            22 => "m/d/yy h:mm",
            37 => "#,##0_);(#,##0)",
            38 => "#,##0_);[Red](#,##0)",
            39 => "#,##0.00_);(#,##0.00)",
            40 => "#,##0.00_);[Red](#,##0.00)",
            41 => "_(* #,##0_);_(* (#,##0);_(* \"-\"_);_(@_)",
            42 => "_(\"$\"* #,##0_);_(\"$\"* (#,##0);_(\"$\"* \"-\"_);_(@_)",
            43 => "_(* #,##0.00_);_(* (#,##0.00);_(* \"-\"??_);_(@_)",
            44 => "_(\"$\"* #,##0.00_);_(\"$\"* (#,##0.00);_(\"$\"* \"-\"??_);_(@_)",
            45 => "mm:ss",
            46 => "[h]:mm:ss",
            47 => "mm:ss.0",
            48 => "##0.0E+0",
            49 => "@",
            _ => return None,
        };
        Some(code)
    }

    /// Builtin id whose code matches exactly
    pub fn builtin_id(code: &str) -> Option<u16> {
        (0..=MAX_BUILTIN_ID).find(|id| Self::builtin_code(*id) == Some(code))
    }
}

/// Builtin plus user-declared number formats of one session
///
/// Custom ids are kept in a sorted map so iteration order only depends on
/// the registered ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberFormatTable {
    custom: BTreeMap<u16, String>,
}

impl NumberFormatTable {
    /// Create a table with only the builtin formats
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an id is builtin or registered
    pub fn contains(&self, id: u16) -> bool {
        NumberFormat::is_builtin(id) || self.custom.contains_key(&id)
    }

    /// Format code for an id
    pub fn code(&self, id: u16) -> Option<&str> {
        NumberFormat::builtin_code(id).or_else(|| self.custom.get(&id).map(String::as_str))
    }

    /// Register a custom format under an explicit id
    ///
    /// Registering the same code under the same id twice is a no-op. Builtin
    /// ids, ids below [`FIRST_CUSTOM_ID`] and ids already bound to a
    /// different code are rejected.
    pub fn register(&mut self, id: u16, code: &str) -> Result<()> {
        if id < FIRST_CUSTOM_ID {
            return Err(Error::format(
                Attribute::DataFormat,
                id,
                "custom format id >= 164",
            ));
        }
        validate_code(code)?;
        match self.custom.get(&id) {
            Some(existing) if existing == code => Ok(()),
            Some(_) => Err(Error::format(
                Attribute::DataFormat,
                id,
                "custom format id not bound to another code",
            )),
            None => {
                self.custom.insert(id, code.to_string());
                Ok(())
            }
        }
    }

    /// Add a custom format, returning its id
    ///
    /// Codes equal to a builtin or an already registered format reuse that
    /// id; otherwise the next free id from [`FIRST_CUSTOM_ID`] is assigned.
    pub fn add(&mut self, code: &str) -> Result<u16> {
        validate_code(code)?;
        if let Some(id) = NumberFormat::builtin_id(code) {
            return Ok(id);
        }
        if let Some((&id, _)) = self.custom.iter().find(|(_, c)| c.as_str() == code) {
            return Ok(id);
        }

        let mut id = FIRST_CUSTOM_ID;
        while self.custom.contains_key(&id) {
            id = id.checked_add(1).ok_or_else(|| {
                Error::format(Attribute::DataFormat, code, "a free custom format id")
            })?;
        }
        self.custom.insert(id, code.to_string());
        Ok(id)
    }

    /// Registered custom formats in id order
    pub fn custom_formats(&self) -> impl Iterator<Item = (u16, &str)> {
        self.custom.iter().map(|(id, code)| (*id, code.as_str()))
    }

    /// Number of registered custom formats
    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }
}

/// Reject empty, overlong or more-than-four-section codes
fn validate_code(code: &str) -> Result<()> {
    const EXPECTED: &str = "non-empty code of at most 255 chars and 4 sections";

    let len = code.chars().count();
    if len == 0 || len > MAX_CODE_LEN {
        return Err(Error::format(Attribute::DataFormat, code, EXPECTED));
    }

    let mut sections = 1;
    let mut quoted = false;
    let mut escaped = false;
    for ch in code.chars() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => quoted = !quoted,
            ';' if !quoted => sections += 1,
            _ => {}
        }
    }
    if sections > 4 {
        return Err(Error::format(Attribute::DataFormat, code, EXPECTED));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(NumberFormat::builtin_code(0), Some("General"));
        assert_eq!(NumberFormat::builtin_code(49), Some("@"));
        assert_eq!(NumberFormat::builtin_code(30), None);
        assert_eq!(NumberFormat::builtin_code(50), None);
        assert_eq!(NumberFormat::builtin_id("0.00%"), Some(10));
        assert!(NumberFormat::is_builtin(30));
        assert!(!NumberFormat::is_builtin(50));
    }

    #[test]
    fn test_register_custom() {
        let mut table = NumberFormatTable::new();
        table.register(164, "0.000").unwrap();
        assert!(table.contains(164));
        assert_eq!(table.code(164), Some("0.000"));

        // Same code again is fine
        table.register(164, "0.000").unwrap();
        assert_eq!(table.custom_len(), 1);
    }

    #[test]
    fn test_colliding_ids_rejected() {
        let mut table = NumberFormatTable::new();
        table.register(170, "yyyy-mm-dd").unwrap();

        let err = table.register(170, "0.0").unwrap_err();
        assert_eq!(err.attribute(), Some(Attribute::DataFormat));
        assert!(table.register(14, "0.0").is_err());
        assert!(table.register(100, "0.0").is_err());
        assert_eq!(table.code(170), Some("yyyy-mm-dd"));
    }

    #[test]
    fn test_add_allocates_and_reuses() {
        let mut table = NumberFormatTable::new();
        table.register(164, "0.000").unwrap();

        assert_eq!(table.add("0.0000").unwrap(), 165);
        assert_eq!(table.add("0.0000").unwrap(), 165);
        assert_eq!(table.add("0.000").unwrap(), 164);
        assert_eq!(table.add("#,##0").unwrap(), 3);
        assert_eq!(
            table.custom_formats().collect::<Vec<_>>(),
            vec![(164, "0.000"), (165, "0.0000")]
        );
    }

    #[test]
    fn test_code_validation() {
        let mut table = NumberFormatTable::new();
        assert!(table.add("").is_err());
        assert!(table.add(&"0".repeat(256)).is_err());
        assert!(table.add("0;0;0;@;0").is_err());
        // Quoted and escaped semicolons do not start a section
        assert!(table.add("0\";\";0;0;@").is_ok());
        assert!(table.add("0\\;0;0;0;@").is_ok());
    }
}
