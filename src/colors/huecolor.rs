//! This file implements HSL as it is used on the web: a simple cylindrical transformation of 8-bit
//! RGB. HSL isn't perceptually uniform in any meaningful sense, but it has the one property the
//! variation generator needs: moving along an axis means something a player would recognize. Nudging
//! the hue keeps a color "the same kind of blue," while nudging lightness makes it paler or darker,
//! which is much closer to how a plausible wrong answer should look than random channel noise.
//!
//! Lightness is the average of the largest and smallest channel, which gives the familiar
//! "bi-hexcone": lightness runs from black through fully saturated colors at 50% to white. Gray has
//! no meaningful hue, and here it is simply given a hue of 0 degrees.
//!
//! Conversions from [`AdditiveColor`] keep full floating-point precision, so converting there and
//! back is exact up to the final rounding to integer channels: no channel moves by more than 1. The
//! integer form shown to players (whole degrees and whole percentages) is available through
//! [`HueColor::rounded`], but converting that back can drift by a few units per channel.

use crate::bound::Bound;
use crate::color::AdditiveColor;
use crate::coord::Coord;

/// A color in hue, saturation, and lightness.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HueColor {
    /// The hue, as an angle in degrees. Ranges from 0 up to, but not including, 360.
    pub h: f64,
    /// The saturation, as a percentage from 0 to 100. Relative to the most saturated color possible
    /// at this lightness, so very light colors can still be "fully saturated."
    pub s: f64,
    /// The lightness, as a percentage from 0 (black) to 100 (white).
    pub l: f64,
}

impl HueColor {
    /// Constructs a new color. No normalization is performed: see [`Bound::clamp`] for that.
    pub fn new(h: f64, s: f64, l: f64) -> HueColor {
        HueColor { h, s, l }
    }

    /// Rounds hue to the nearest degree and saturation and lightness to the nearest percent, the
    /// way the values are displayed. A hue that rounds up to 360 becomes 0.
    pub fn rounded(&self) -> HueColor {
        let h = self.h.round();
        HueColor {
            h: if h >= 360.0 { 0.0 } else { h },
            s: self.s.round(),
            l: self.l.round(),
        }
    }

    /// Converts back to RGB, rounding each channel to the nearest integer.
    pub fn to_additive(&self) -> AdditiveColor {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        if s == 0.0 {
            // achromatic, hue doesn't matter
            return AdditiveColor::from_unit_channels(l, l, l);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        // hue in turns, one third of a turn apart per channel
        let h = self.h / 360.0;
        AdditiveColor::from_unit_channels(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

/// The interpolation helper shared by all three channels: given the two lightness-derived bounds
/// and a hue offset in turns, returns that channel's value on the unit interval.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl From<AdditiveColor> for HueColor {
    fn from(rgb: AdditiveColor) -> HueColor {
        let [r, g, b] = rgb.unit_channels();
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let lightness = (max_c + min_c) / 2.0;

        if max_c == min_c {
            // gray: hue is undefined, use 0
            return HueColor {
                h: 0.0,
                s: 0.0,
                l: lightness * 100.0,
            };
        }

        let chroma = max_c - min_c;
        let saturation = if lightness > 0.5 {
            chroma / (2.0 - max_c - min_c)
        } else {
            chroma / (max_c + min_c)
        };
        // which sector of the hexagon we're in, measured in sixths of a turn
        let sector = if max_c == r {
            (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
        } else if max_c == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };
        let hue = sector * 60.0;

        HueColor {
            h: if hue >= 360.0 { hue - 360.0 } else { hue },
            s: saturation * 100.0,
            l: lightness * 100.0,
        }
    }
}

impl From<HueColor> for AdditiveColor {
    fn from(hsl: HueColor) -> AdditiveColor {
        hsl.to_additive()
    }
}

impl From<Coord> for HueColor {
    fn from(c: Coord) -> HueColor {
        HueColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HueColor> for Coord {
    fn from(c: HueColor) -> Coord {
        Coord {
            x: c.h,
            y: c.s,
            z: c.l,
        }
    }
}

impl Bound for HueColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 100.), (0., 100.)]
    }

    // hue is an angle, so it wraps instead of clamping
    fn clamp_coord(point: Coord) -> Coord {
        let [_, s_range, l_range] = Self::bounds();
        let h = point.x.rem_euclid(360.0);
        Coord {
            // rem_euclid can land on 360 itself for tiny negative inputs
            x: if h >= 360.0 { 0.0 } else { h },
            y: num::clamp(point.y, s_range.0, s_range.1),
            z: num::clamp(point.z, l_range.0, l_range.1),
        }
    }
}
