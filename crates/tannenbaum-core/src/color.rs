//! Solid colors stored as packed 24-bit RGB

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color '{0}': expected #rrggbb or 0xrrggbb")]
    InvalidFormat(String),
    #[error("Invalid hex digits in color '{0}'")]
    InvalidDigits(String),
}

/// A packed `0xRRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFFFFFF);
    pub const GOLD: Rgb = Rgb(0xFFD700);

    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Components as `[r, g, b]` bytes
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xFF_FFFF)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Accepts `#rrggbb`, `0xrrggbb` or bare `rrggbb`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 {
            return Err(ColorError::InvalidFormat(s.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(Rgb)
            .map_err(|_| ColorError::InvalidDigits(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        let c = Rgb(0x8B4513);
        assert_eq!(c.to_bytes(), [0x8B, 0x45, 0x13]);
    }

    #[test]
    fn test_parse_prefixes() {
        assert_eq!("#0a0a1a".parse::<Rgb>().unwrap(), Rgb(0x0A0A1A));
        assert_eq!("0xFFD700".parse::<Rgb>().unwrap(), Rgb::GOLD);
        assert_eq!("228b22".parse::<Rgb>().unwrap(), Rgb(0x228B22));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!("#fff".parse::<Rgb>(), Err(ColorError::InvalidFormat(_))));
        assert!(matches!("#gg0000".parse::<Rgb>(), Err(ColorError::InvalidDigits(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb(0x0A0A1A).to_string(), "#0a0a1a");
    }
}
