//! This module contains the color spaces other than RGB. For convenience, each main type is
//! imported into this module's namespace directly.
pub mod huecolor;

pub use self::huecolor::HueColor;
