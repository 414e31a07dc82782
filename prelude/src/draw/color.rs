//! Simple RGB color which can be read from hex strings
//!
//! Persisted snapshots carry colors as their `#rrggbb` form, so serde goes
//! through the string representation rather than the raw triple.

use eyre::Report;
use serde::{Deserialize, Serialize};
use std::{error, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u8, u8, u8);

/// Tag colors handed to players round-robin at creation.
pub const PLAYER_PALETTE: [Color; 8] = [
    Color(0xe0, 0x7a, 0x5f),
    Color(0x81, 0xb2, 0x9a),
    Color(0xf2, 0xcc, 0x8f),
    Color(0x6d, 0x9d, 0xc5),
    Color(0xb5, 0x65, 0x76),
    Color(0x8e, 0x7d, 0xbe),
    Color(0x70, 0xa2, 0x88),
    Color(0xd6, 0x8c, 0x45),
];

/// Accent colors handed to teams the same way.
pub const TEAM_PALETTE: [Color; 6] = [
    Color(0x3d, 0x40, 0x5b),
    Color(0x9a, 0x03, 0x1e),
    Color(0x0f, 0x4c, 0x5c),
    Color(0x5f, 0x0f, 0x40),
    Color(0x38, 0x66, 0x41),
    Color(0xbc, 0x6c, 0x25),
];

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b)
    }
}

#[derive(Debug)]
pub enum ColorParseError {
    BadLength(usize),
    BadFormat,
    ParseIntError,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ColorParseError::*;
        match self {
            BadLength(l) => write!(f, "Failed to parse color: wrong length ({l})"),
            BadFormat => write!(f, "Failed to parse color: no '#' sign"),
            ParseIntError => write!(f, "Failed to parse color to integers"),
        }
    }
}

impl error::Error for ColorParseError {}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = Report;
    /// Must be a valid hex color value, preceded by #. #000000 to #ffffff
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let l = s.len();

        use ColorParseError::*;
        if l == 7 && &s[0..1] != "#" {
            return Err(BadFormat.into());
        } else if !(l == 6 || l == 7) {
            return Err(BadLength(l).into());
        }

        let r = u8::from_str_radix(&s[l - 6..l - 4], 16).map_err(|_| ParseIntError)?;
        let g = u8::from_str_radix(&s[l - 4..l - 2], 16).map_err(|_| ParseIntError)?;
        let b = u8::from_str_radix(&s[l - 2..l], 16).map_err(|_| ParseIntError)?;

        Ok(Color(r, g, b))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse().map_err(|e: Report| e.to_string())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_hex() {
        let color: Color = "#e07a5f".parse().unwrap();
        assert_eq!(color, Color::new(0xe0, 0x7a, 0x5f));
        assert_eq!(color.to_string(), "#e07a5f");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("e07a5f7".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("#fff".parse::<Color>().is_err());
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::new(0x3d, 0x40, 0x5b)).unwrap();
        assert_eq!(json, "\"#3d405b\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::new(0x3d, 0x40, 0x5b));
    }
}
