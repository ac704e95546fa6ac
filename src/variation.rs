//! Multiple-choice rounds: given the real color, make up some convincing fakes. The fakes are random
//! nudges of the real color in HSL, bounded per axis by a [`DifficultyProfile`], so they stay the
//! same general kind of color instead of being arbitrary noise. The candidates are guaranteed to
//! have distinct hex codes, which is not the same as looking distinct: around grays and near-black
//! colors, hue nudges do nothing visible and some fakes may be hard to tell apart from the real one.
//!
//! Randomness is always passed in, so a seeded generator reproduces a round exactly, shuffle order
//! included.
//!
//! Narrow profiles can run out of room. Each pass gives up after a fixed number of draws and the
//! spread is widened for the next pass, up to a hard limit, after which generation fails instead of
//! looping forever. The profile passed in is never modified.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::bound::Bound;
use crate::color::{parse_hex, AdditiveColor};
use crate::colors::HueColor;
use crate::coord::Coord;
use crate::difficulty::{DifficultyProfile, ProfileError};
use crate::similarity::similarity;

/// How many draws per wanted candidate a pass makes before the spread is widened.
pub const ATTEMPTS_PER_CANDIDATE: usize = 50;

/// How much the spread grows each time a pass comes up short.
pub const WIDENING_FACTOR: f64 = 1.5;

/// How many times the spread may be widened before giving up.
pub const MAX_WIDENINGS: usize = 10;

/// The largest hue spread, in degrees, ever sampled. Wider profiles are treated as this wide.
pub const MAX_HUE_SPREAD: f64 = 360.0;

/// The largest saturation or lightness spread, in percentage points, ever sampled.
pub const MAX_PERCENT_SPREAD: f64 = 100.0;

/// One choice in a multiple-choice round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorOption {
    /// The candidate's canonical `#RRGGBB` code.
    pub hex: String,
    /// Whether this is the real color.
    pub is_correct: bool,
}

impl ColorOption {
    /// The candidate as a color.
    pub fn color(&self) -> AdditiveColor {
        parse_hex(&self.hex)
    }
}

/// An error in generating a round. Both cases mean the profile is wrong, not that the call was
/// unlucky.
#[derive(Debug, Clone, PartialEq)]
pub enum VariationError {
    /// The profile failed validation: no candidates, or a negative or non-finite spread.
    InvalidProfile(ProfileError),
    /// Every widening was used up before enough distinct colors turned up: typically all spreads
    /// are 0, or the only non-zero spread is hue around a gray.
    Unsatisfiable {
        /// The candidate count asked for.
        wanted: usize,
        /// How many distinct colors were found, the real one included.
        found: usize,
    },
}

impl fmt::Display for VariationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VariationError::InvalidProfile(e) => write!(f, "invalid difficulty profile: {}", e),
            VariationError::Unsatisfiable { wanted, found } => write!(
                f,
                "only {} of {} distinct colors could be generated",
                found, wanted
            ),
        }
    }
}

impl Error for VariationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VariationError::InvalidProfile(e) => Some(e),
            VariationError::Unsatisfiable { .. } => None,
        }
    }
}

impl From<ProfileError> for VariationError {
    fn from(e: ProfileError) -> VariationError {
        VariationError::InvalidProfile(e)
    }
}

/// Generates the choices for one round around `reference`, a hex code read with
/// [`parse_hex`](crate::color::parse_hex) (so malformed input means black). Returns exactly
/// `profile.candidate_count` options with distinct hex codes, in random order, exactly one of which
/// is correct and carries the reference's canonical hex code. A count of 1 returns just the
/// reference without touching `rng`.
///
/// # Errors
/// [`VariationError::InvalidProfile`] if the profile doesn't validate, and
/// [`VariationError::Unsatisfiable`] if it can't produce enough distinct colors around this
/// reference.
///
/// # Example
/// ```
/// # use chromatch::difficulty::DifficultyProfile;
/// # use chromatch::variation::generate;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let profile = DifficultyProfile::new(4, 20.0, 15.0, 15.0);
/// let options = generate("#5DA2E6", &profile, &mut rng).unwrap();
/// assert_eq!(options.len(), 4);
/// let correct: Vec<_> = options.iter().filter(|o| o.is_correct).collect();
/// assert_eq!(correct.len(), 1);
/// assert_eq!(correct[0].hex, "#5DA2E6");
/// ```
pub fn generate<R: Rng + ?Sized>(
    reference: &str,
    profile: &DifficultyProfile,
    rng: &mut R,
) -> Result<Vec<ColorOption>, VariationError> {
    profile.validate()?;
    let reference = parse_hex(reference);
    let wanted = profile.candidate_count;

    let mut pool = vec![reference];
    if wanted > 1 {
        fill_pool(&mut pool, reference, profile, rng)?;
        pool.shuffle(rng);
    }

    Ok(pool
        .into_iter()
        .map(|color| ColorOption {
            hex: color.to_hex(),
            is_correct: color == reference,
        })
        .collect())
}

/// Like [`generate`], using the thread-local random generator.
pub fn generate_with_thread_rng(
    reference: &str,
    profile: &DifficultyProfile,
) -> Result<Vec<ColorOption>, VariationError> {
    generate(reference, profile, &mut rand::thread_rng())
}

// draws nudged colors until the pool is full or every widening is spent
fn fill_pool<R: Rng + ?Sized>(
    pool: &mut Vec<AdditiveColor>,
    reference: AdditiveColor,
    profile: &DifficultyProfile,
    rng: &mut R,
) -> Result<(), VariationError> {
    let wanted = profile.candidate_count;
    let center: Coord = reference.to_hue().into();
    let mut spread = cap_spread(Coord {
        x: profile.hue_shift,
        y: profile.saturation_shift,
        z: profile.lightness_shift,
    });
    let attempts = ATTEMPTS_PER_CANDIDATE.saturating_mul(wanted);
    let mut seen: HashSet<AdditiveColor> = pool.iter().cloned().collect();

    for widening in 0..=MAX_WIDENINGS {
        if widening > 0 {
            spread = cap_spread(spread * WIDENING_FACTOR);
            debug!(
                "{}: {} of {} candidates after pass {}, widening spread to {:?}",
                reference,
                pool.len(),
                wanted,
                widening,
                spread
            );
        }
        for _ in 0..attempts {
            let offset = Coord {
                x: rng.gen_range(-spread.x..=spread.x),
                y: rng.gen_range(-spread.y..=spread.y),
                z: rng.gen_range(-spread.z..=spread.z),
            };
            let candidate = HueColor::clamp(HueColor::from(center + offset)).to_additive();
            if seen.insert(candidate) {
                trace!("{}: accepted candidate {}", reference, candidate);
                pool.push(candidate);
                if pool.len() == wanted {
                    return Ok(());
                }
            }
        }
    }

    warn!(
        "{}: gave up with {} of {} candidates",
        reference,
        pool.len(),
        wanted
    );
    Err(VariationError::Unsatisfiable {
        wanted,
        found: pool.len(),
    })
}

// a full turn of hue, or the whole saturation or lightness scale, already reaches every value
fn cap_spread(spread: Coord) -> Coord {
    Coord {
        x: spread.x.min(MAX_HUE_SPREAD),
        y: spread.y.min(MAX_PERCENT_SPREAD),
        z: spread.z.min(MAX_PERCENT_SPREAD),
    }
}

/// The accuracy a multiple-choice pick earns: 100 for the correct option, otherwise how similar the
/// picked color is to the reference.
pub fn choice_accuracy(reference: AdditiveColor, picked: &ColorOption) -> f64 {
    if picked.is_correct {
        100.0
    } else {
        similarity(reference, picked.color())
    }
}
