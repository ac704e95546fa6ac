//! This module defines [`AdditiveColor`], the 8-bit RGB triple that every other part of the crate
//! starts from, along with its canonical hex encoding. Hex parsing comes in two flavors: the total
//! [`parse_hex`], which never fails and instead falls back to black on malformed input, and the
//! strict [`try_parse_hex`] (also available through `FromStr`), which reports what went wrong. The
//! total version is what the game uses on its own brand data; the strict one exists for callers that
//! need to tell an actual `#000000` apart from garbage.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::colors::HueColor;
use crate::coord::Coord;

lazy_static! {
    // two hex digits per channel, optional leading '#', nothing else
    static ref HEX_CODE: Regex =
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// A color made of three independent channel intensities, each an integer from 0 to 255. This is
/// the representation the player manipulates with the sliders and the one similarity is measured
/// in. It is a plain value: every transformation returns a new color.
///
/// # Example
/// ```
/// # use chromatch::color::AdditiveColor;
/// let coral = AdditiveColor::new(216, 103, 98);
/// assert_eq!(coral.to_string(), "#D86762");
/// assert_eq!("#d86762".parse::<AdditiveColor>(), Ok(coral));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AdditiveColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl AdditiveColor {
    /// Black, which is also what [`parse_hex`] returns for input it can't read.
    pub const BLACK: AdditiveColor = AdditiveColor { r: 0, g: 0, b: 0 };
    /// White, the color furthest from black.
    pub const WHITE: AdditiveColor = AdditiveColor {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Constructs a color from its three channels.
    pub fn new(r: u8, g: u8, b: u8) -> AdditiveColor {
        AdditiveColor { r, g, b }
    }

    /// The canonical `#RRGGBB` form of this color. Always exactly 7 characters, uppercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts to hue, saturation, and lightness. The result keeps full floating-point precision,
    /// so converting it back with [`HueColor::to_additive`] gives this exact color. For the whole
    /// degrees and percentages shown to players, call [`HueColor::rounded`] on the result; rounded
    /// values can land a few units away when converted back.
    pub fn to_hue(&self) -> HueColor {
        HueColor::from(*self)
    }

    /// The channels scaled down to the unit interval, in the order red, green, blue.
    pub(crate) fn unit_channels(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Builds a color from unit-interval channels, clamping anything outside it and rounding to the
    /// nearest integer.
    pub(crate) fn from_unit_channels(r: f64, g: f64, b: f64) -> AdditiveColor {
        let scale = |x: f64| (num::clamp(x, 0.0, 1.0) * 255.0).round() as u8;
        AdditiveColor {
            r: scale(r),
            g: scale(g),
            b: scale(b),
        }
    }
}

impl From<(u8, u8, u8)> for AdditiveColor {
    fn from(rgb: (u8, u8, u8)) -> AdditiveColor {
        AdditiveColor::new(rgb.0, rgb.1, rgb.2)
    }
}

impl From<AdditiveColor> for Coord {
    fn from(c: AdditiveColor) -> Coord {
        Coord {
            x: f64::from(c.r),
            y: f64::from(c.g),
            z: f64::from(c.b),
        }
    }
}

impl fmt::Display for AdditiveColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// An error in strictly parsing a hex code.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum HexParseError {
    /// The input didn't have exactly six digits after the optional '#'.
    WrongLength,
    /// The input had six characters, but not all of them were hex digits.
    InvalidDigits,
}

impl fmt::Display for HexParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            HexParseError::WrongLength => write!(f, "hex code must have exactly 6 digits"),
            HexParseError::InvalidDigits => write!(f, "hex code contains non-hex characters"),
        }
    }
}

impl Error for HexParseError {}

/// Strictly parses `#RRGGBB` or `RRGGBB`, in any case. Unlike [`parse_hex`], malformed input is
/// reported instead of silently mapped to black.
///
/// # Errors
/// [`HexParseError::WrongLength`] if the input doesn't have six characters after the optional
/// '#', and [`HexParseError::InvalidDigits`] if any of those characters isn't a hex digit.
pub fn try_parse_hex(text: &str) -> Result<AdditiveColor, HexParseError> {
    let caps = match HEX_CODE.captures(text) {
        Some(caps) => caps,
        None => {
            let digits = text.strip_prefix('#').unwrap_or(text);
            return if digits.chars().count() == 6 {
                Err(HexParseError::InvalidDigits)
            } else {
                Err(HexParseError::WrongLength)
            };
        }
    };
    // the regex already guarantees two hex digits in each group
    let channel =
        |i: usize| u8::from_str_radix(&caps[i], 16).map_err(|_| HexParseError::InvalidDigits);
    Ok(AdditiveColor {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

/// Parses `#RRGGBB` or `RRGGBB`, in any case. This never fails: anything else comes back as
/// [`AdditiveColor::BLACK`], so a black result from untrusted input may mean the input was bad. Use
/// [`try_parse_hex`] when that distinction matters.
///
/// # Example
/// ```
/// # use chromatch::color::{parse_hex, AdditiveColor};
/// assert_eq!(parse_hex("5da2e6"), AdditiveColor::new(0x5D, 0xA2, 0xE6));
/// assert_eq!(parse_hex("not a color"), AdditiveColor::BLACK);
/// ```
pub fn parse_hex(text: &str) -> AdditiveColor {
    try_parse_hex(text).unwrap_or(AdditiveColor::BLACK)
}

/// Formats a color as `#RRGGBB`. Equivalent to [`AdditiveColor::to_hex`].
pub fn format_hex(color: AdditiveColor) -> String {
    color.to_hex()
}

impl FromStr for AdditiveColor {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<AdditiveColor, HexParseError> {
        try_parse_hex(s)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(format_hex(AdditiveColor::new(0, 0, 0)), "#000000");
        assert_eq!(format_hex(AdditiveColor::new(255, 255, 255)), "#FFFFFF");
        // zero padding per channel
        assert_eq!(format_hex(AdditiveColor::new(1, 10, 171)), "#010AAB");
        assert_eq!(AdditiveColor::new(0x5D, 0xA2, 0xE6).to_string(), "#5DA2E6");
    }

    #[test]
    fn test_hex_parsing() {
        let coral = AdditiveColor::new(0xD8, 0x67, 0x62);
        assert_eq!(parse_hex("#D86762"), coral);
        assert_eq!(parse_hex("D86762"), coral);
        assert_eq!(parse_hex("#d86762"), coral);
        assert_eq!(parse_hex("d8676A"), AdditiveColor::new(0xD8, 0x67, 0x6A));
    }

    #[test]
    fn test_hex_fallback() {
        let malformed = [
            "", "#", "#FFF", "#GGGGGG", "##FFFFFF", "#FFFFFF0", " #FFFFFF", "rgb(1, 2, 3)",
        ];
        for bad in &malformed {
            assert_eq!(parse_hex(bad), AdditiveColor::BLACK, "{:?}", bad);
        }
    }

    #[test]
    fn test_strict_parsing_errors() {
        assert_eq!(try_parse_hex("#FFF"), Err(HexParseError::WrongLength));
        assert_eq!(try_parse_hex(""), Err(HexParseError::WrongLength));
        assert_eq!(try_parse_hex("#12345G"), Err(HexParseError::InvalidDigits));
        assert_eq!(try_parse_hex("zzzzzz"), Err(HexParseError::InvalidDigits));
        assert_eq!("#000000".parse::<AdditiveColor>(), Ok(AdditiveColor::BLACK));
        assert!("black".parse::<AdditiveColor>().is_err());
    }

    #[test]
    fn test_coord_embedding() {
        let c: Coord = AdditiveColor::new(1, 2, 3).into();
        assert_eq!(c, Coord { x: 1., y: 2., z: 3. });
    }
}
