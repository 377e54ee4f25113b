//! Color representation

use std::fmt;

/// Number of entries in the standard indexed palette
pub const PALETTE_SIZE: u16 = 64;

/// Palette index meaning "automatic" (system foreground/background)
pub const AUTOMATIC_INDEX: u16 = 64;

/// First palette index of the user-visible palette; 0-7 duplicate 8-15
const FIRST_USER_INDEX: usize = 8;

/// Standard Excel color palette, indices 0-63
const PALETTE: [(u8, u8, u8); PALETTE_SIZE as usize] = [
    (0, 0, 0),       // 0: Black
    (255, 255, 255), // 1: White
    (255, 0, 0),     // 2: Red
    (0, 255, 0),     // 3: Bright Green
    (0, 0, 255),     // 4: Blue
    (255, 255, 0),   // 5: Yellow
    (255, 0, 255),   // 6: Pink
    (0, 255, 255),   // 7: Turquoise
    (0, 0, 0),       // 8: Black
    (255, 255, 255), // 9: White
    (255, 0, 0),     // 10: Red
    (0, 255, 0),     // 11: Bright Green
    (0, 0, 255),     // 12: Blue
    (255, 255, 0),   // 13: Yellow
    (255, 0, 255),   // 14: Pink
    (0, 255, 255),   // 15: Turquoise
    (128, 0, 0),     // 16: Dark Red
    (0, 128, 0),     // 17: Green
    (0, 0, 128),     // 18: Dark Blue
    (128, 128, 0),   // 19: Dark Yellow
    (128, 0, 128),   // 20: Violet
    (0, 128, 128),   // 21: Teal
    (192, 192, 192), // 22: 25% Gray
    (128, 128, 128), // 23: 50% Gray
    (153, 153, 255), // 24: Periwinkle
    (153, 51, 102),  // 25: Plum
    (255, 255, 204), // 26: Ivory
    (204, 255, 255), // 27: Light Turquoise
    (102, 0, 102),   // 28: Dark Purple
    (255, 128, 128), // 29: Coral
    (0, 102, 204),   // 30: Ocean Blue
    (204, 204, 255), // 31: Ice Blue
    (0, 0, 128),     // 32: Dark Blue
    (255, 0, 255),   // 33: Pink
    (255, 255, 0),   // 34: Yellow
    (0, 255, 255),   // 35: Turquoise
    (128, 0, 128),   // 36: Violet
    (128, 0, 0),     // 37: Dark Red
    (0, 128, 128),   // 38: Teal
    (0, 0, 255),     // 39: Blue
    (0, 204, 255),   // 40: Sky Blue
    (204, 255, 255), // 41: Light Turquoise
    (204, 255, 204), // 42: Light Green
    (255, 255, 153), // 43: Light Yellow
    (153, 204, 255), // 44: Pale Blue
    (255, 153, 204), // 45: Rose
    (204, 153, 255), // 46: Lavender
    (255, 204, 153), // 47: Tan
    (51, 102, 255),  // 48: Light Blue
    (51, 204, 204),  // 49: Aqua
    (153, 204, 0),   // 50: Lime
    (255, 204, 0),   // 51: Gold
    (255, 153, 0),   // 52: Light Orange
    (255, 102, 0),   // 53: Orange
    (102, 102, 153), // 54: Blue-Gray
    (150, 150, 150), // 55: 40% Gray
    (0, 51, 102),    // 56: Dark Teal
    (51, 153, 102),  // 57: Sea Green
    (0, 51, 0),      // 58: Dark Green
    (51, 51, 0),     // 59: Olive Green
    (153, 51, 0),    // 60: Brown
    (153, 51, 102),  // 61: Plum
    (51, 51, 153),   // 62: Indigo
    (51, 51, 51),    // 63: 80% Gray
];

/// Color representation
///
/// A style color is either automatic, a reference into the indexed palette,
/// or a direct RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// Indexed color (legacy Excel palette, 0-63; 64 is automatic)
    Indexed(u16),

    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Color::Rgb { r, g, b })
    }

    /// Convert to hex string (without # prefix)
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Convert to RGB tuple
    ///
    /// Automatic and out-of-palette indices render as black.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Auto => (0, 0, 0),
            Color::Indexed(i) => palette_rgb(*i).unwrap_or((0, 0, 0)),
            Color::Rgb { r, g, b } => (*r, *g, *b),
        }
    }

    /// Check if color is automatic/default
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }

    /// Palette index for formats that only store indexed colors
    ///
    /// Automatic maps to [`AUTOMATIC_INDEX`]; RGB colors use
    /// [`nearest_index`].
    pub fn palette_index(&self) -> u16 {
        match self {
            Color::Auto => AUTOMATIC_INDEX,
            Color::Indexed(i) => *i,
            Color::Rgb { r, g, b } => nearest_index(*r, *g, *b),
        }
    }

    // Common colors
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color::Rgb { r: 0, g: 0, b: 255 };
    pub const YELLOW: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 0,
    };
}

/// RGB value of a palette entry, `None` outside 0-63
pub fn palette_rgb(index: u16) -> Option<(u8, u8, u8)> {
    PALETTE.get(index as usize).copied()
}

/// Nearest palette entry to an RGB value
///
/// Searches the user palette (indices 8-63) for the entry with the smallest
/// squared Euclidean distance in RGB space. Ties resolve to the lowest
/// index, so the result only depends on the input color.
pub fn nearest_index(r: u8, g: u8, b: u8) -> u16 {
    let distance = |(pr, pg, pb): (u8, u8, u8)| -> u32 {
        let dr = pr as i32 - r as i32;
        let dg = pg as i32 - g as i32;
        let db = pb as i32 - b as i32;
        (dr * dr + dg * dg + db * db) as u32
    };

    let mut best = FIRST_USER_INDEX;
    let mut best_distance = distance(PALETTE[FIRST_USER_INDEX]);
    for (index, entry) in PALETTE.iter().enumerate().skip(FIRST_USER_INDEX + 1) {
        let d = distance(*entry);
        if d < best_distance {
            best = index;
            best_distance = d;
        }
    }
    best as u16
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Indexed(i) => write!(f, "indexed({})", i),
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(
            Color::from_hex("#FF0000"),
            Some(Color::Rgb { r: 255, g: 0, b: 0 })
        );
        assert_eq!(
            Color::from_hex("00FF00"),
            Some(Color::Rgb { r: 0, g: 255, b: 0 })
        );
        assert_eq!(Color::from_hex("#80FFFFFF"), None);
        assert_eq!(Color::from_hex("zzzzzz"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::RED.to_hex(), "FF0000");
        assert_eq!(Color::Indexed(53).to_hex(), "FF6600");
    }

    #[test]
    fn test_exact_palette_match() {
        // Duplicates in 0-7 never win over the user palette
        assert_eq!(nearest_index(255, 0, 0), 10);
        assert_eq!(nearest_index(0, 0, 0), 8);
        assert_eq!(nearest_index(255, 102, 0), 53);
    }

    #[test]
    fn test_nearest_match() {
        // (250, 100, 10) is closest to Orange (255, 102, 0)
        assert_eq!(nearest_index(250, 100, 10), 53);
        // Mid gray sits between 50% Gray (128) and 40% Gray (150)
        assert_eq!(nearest_index(130, 130, 130), 23);
        assert_eq!(nearest_index(145, 145, 145), 55);
    }

    #[test]
    fn test_tie_prefers_lowest_index() {
        // Dark Blue appears at 18 and 32, Plum at 25 and 61
        assert_eq!(nearest_index(0, 0, 128), 18);
        assert_eq!(nearest_index(153, 51, 102), 25);
    }

    #[test]
    fn test_palette_index() {
        assert_eq!(Color::Auto.palette_index(), AUTOMATIC_INDEX);
        assert_eq!(Color::Indexed(12).palette_index(), 12);
        assert_eq!(Color::rgb(0, 204, 255).palette_index(), 40);
    }
}
