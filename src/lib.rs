//! Chromatch is the scoring and round-generation engine behind a brand color matching game. Players
//! either mix a logo's colors back together with RGB sliders, or pick the real color out of a line-up
//! of convincing fakes, and this crate provides everything about that which is actually about color:
//! conversion between RGB, hex codes, and HSL, a bounded similarity score between two colors, and a
//! generator of fake colors calibrated by difficulty. Everything here is a pure function of its
//! inputs, apart from the random generator that round generation takes as an argument.
//!
//! ```
//! use chromatch::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let target = parse_hex("#D86762");
//! let attempt = AdditiveColor::new(210, 110, 100);
//! assert!(similarity(target, attempt) > 95.0);
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let options = generate("#D86762", &Difficulty::Hard.profile(), &mut rng).unwrap();
//! assert_eq!(options.len(), 6);
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate serde_derive;

pub mod bound;
pub mod brand_palettes;
pub mod color;
pub mod colors;
pub mod coord;
pub mod difficulty;
pub mod prelude;
pub mod rating;
pub mod similarity;
pub mod variation;
