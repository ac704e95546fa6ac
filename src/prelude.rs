//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports: the two color types and their hex helpers, scoring, the difficulty
//! configuration, and round generation. The brand table and rating thresholds are not included.

pub use crate::bound::Bound;
pub use crate::color::{format_hex, parse_hex, try_parse_hex, AdditiveColor, HexParseError};
pub use crate::colors::HueColor;
pub use crate::difficulty::{Difficulty, DifficultyProfile, DifficultyTable, ProfileError};
pub use crate::similarity::{average_similarity, similarity};
pub use crate::variation::{generate, ColorOption, VariationError};
