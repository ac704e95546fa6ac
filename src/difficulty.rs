//! Difficulty tiers and the knobs each one turns. A [`DifficultyProfile`] says how many choices a
//! multiple-choice round offers and how far the wrong answers may drift from the right one along
//! each HSL axis. Profiles live in a table keyed by tier rather than being scattered through the
//! generator, so the generator never needs to know which tier it is serving, and the whole tuning
//! surface can be swapped out at once with [`DifficultyTable::from_csv_reader`].

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// The four tiers, in order from easiest to hardest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Single-color logos, fewest choices.
    Easy,
    /// Two-color logos.
    Normal,
    /// Three-color logos.
    Hard,
    /// The five-color logo, most choices and widest spread.
    Extreme,
}

/// Every tier, easiest first.
pub static DIFFICULTIES: [Difficulty; 4] = [
    Difficulty::Easy,
    Difficulty::Normal,
    Difficulty::Hard,
    Difficulty::Extreme,
];

impl Difficulty {
    /// The lowercase name used in configuration files.
    pub fn name(&self) -> &'static str {
        match *self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }

    /// The built-in profile for this tier.
    pub fn profile(&self) -> DifficultyProfile {
        DEFAULT_PROFILES[self]
    }

    /// The next tier up, or `None` for the hardest.
    pub fn next(&self) -> Option<Difficulty> {
        match *self {
            Difficulty::Easy => Some(Difficulty::Normal),
            Difficulty::Normal => Some(Difficulty::Hard),
            Difficulty::Hard => Some(Difficulty::Extreme),
            Difficulty::Extreme => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Difficulty, ProfileError> {
        DIFFICULTIES
            .iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .cloned()
            .ok_or_else(|| ProfileError::UnknownDifficulty(s.to_string()))
    }
}

/// The most candidates a round can have: one per distinct `#RRGGBB` code.
pub const MAX_CANDIDATES: usize = 1 << 24;

/// How one tier generates its multiple-choice rounds.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// How many choices each round offers, the correct one included. At least 1.
    pub candidate_count: usize,
    /// The largest hue change, in degrees, a wrong answer may have.
    pub hue_shift: f64,
    /// The largest saturation change, in percentage points, a wrong answer may have.
    pub saturation_shift: f64,
    /// The largest lightness change, in percentage points, a wrong answer may have.
    pub lightness_shift: f64,
}

impl DifficultyProfile {
    /// Constructs a new profile. Nothing is checked until [`validate`](Self::validate).
    pub fn new(
        candidate_count: usize,
        hue_shift: f64,
        saturation_shift: f64,
        lightness_shift: f64,
    ) -> DifficultyProfile {
        DifficultyProfile {
            candidate_count,
            hue_shift,
            saturation_shift,
            lightness_shift,
        }
    }

    /// Checks that the profile can be used at all.
    /// # Errors
    /// [`ProfileError::InvalidCandidateCount`] for a candidate count of 0 or above
    /// [`MAX_CANDIDATES`], and
    /// [`ProfileError::InvalidSpread`] for any spread that is negative or not finite. Note that a
    /// profile can pass this and still be impossible to satisfy: all-zero spreads with more than one
    /// candidate can never produce a second color.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.candidate_count == 0 || self.candidate_count > MAX_CANDIDATES {
            return Err(ProfileError::InvalidCandidateCount(self.candidate_count));
        }
        for &spread in &[self.hue_shift, self.saturation_shift, self.lightness_shift] {
            if !spread.is_finite() || spread < 0.0 {
                return Err(ProfileError::InvalidSpread(spread));
            }
        }
        Ok(())
    }
}

lazy_static! {
    /// The built-in profile of every tier. Harder tiers offer more choices and let them drift
    /// further, which leaves more plausible-looking impostors around the real color.
    pub static ref DEFAULT_PROFILES: HashMap<Difficulty, DifficultyProfile> = hashmap! {
        Difficulty::Easy => DifficultyProfile::new(4, 15.0, 10.0, 10.0),
        Difficulty::Normal => DifficultyProfile::new(5, 20.0, 15.0, 15.0),
        Difficulty::Hard => DifficultyProfile::new(6, 25.0, 18.0, 18.0),
        Difficulty::Extreme => DifficultyProfile::new(8, 30.0, 20.0, 20.0),
    };
}

/// An error in building or loading a difficulty table.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// A tier name that isn't one of the four tiers.
    UnknownDifficulty(String),
    /// A candidate count of 0, or more than there are hex codes.
    InvalidCandidateCount(usize),
    /// A spread that is negative, infinite, or NaN.
    InvalidSpread(f64),
    /// A loaded table that doesn't define every tier.
    MissingTier(Difficulty),
    /// A loaded table that defines the same tier twice.
    DuplicateTier(Difficulty),
    /// The table source couldn't be read or didn't have the expected columns.
    Csv(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProfileError::UnknownDifficulty(name) => write!(f, "unknown difficulty {:?}", name),
            ProfileError::InvalidCandidateCount(n) => {
                write!(
                    f,
                    "candidate count must be between 1 and {}, got {}",
                    MAX_CANDIDATES, n
                )
            }
            ProfileError::InvalidSpread(s) => {
                write!(f, "spread must be finite and non-negative, got {}", s)
            }
            ProfileError::MissingTier(d) => write!(f, "no profile for difficulty {}", d),
            ProfileError::DuplicateTier(d) => write!(f, "difficulty {} defined twice", d),
            ProfileError::Csv(msg) => write!(f, "could not read difficulty table: {}", msg),
        }
    }
}

impl Error for ProfileError {}

impl From<csv::Error> for ProfileError {
    fn from(e: csv::Error) -> ProfileError {
        ProfileError::Csv(e.to_string())
    }
}

// one row of a difficulty table file
#[derive(Debug, Deserialize)]
struct Record {
    difficulty: Difficulty,
    candidate_count: usize,
    hue_shift: f64,
    saturation_shift: f64,
    lightness_shift: f64,
}

/// A complete set of profiles, one per tier. Starts out as the built-in defaults; individual tiers
/// can be replaced, or a whole table loaded from CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyTable {
    profiles: HashMap<Difficulty, DifficultyProfile>,
}

impl Default for DifficultyTable {
    fn default() -> DifficultyTable {
        DifficultyTable {
            profiles: DEFAULT_PROFILES.clone(),
        }
    }
}

impl DifficultyTable {
    /// The profile for a tier.
    pub fn profile(&self, difficulty: Difficulty) -> DifficultyProfile {
        // every tier is present by construction
        self.profiles
            .get(&difficulty)
            .cloned()
            .unwrap_or_else(|| difficulty.profile())
    }

    /// Replaces the profile for one tier, returning the old one.
    /// # Errors
    /// Whatever [`DifficultyProfile::validate`] reports; the table is unchanged in that case.
    pub fn set_profile(
        &mut self,
        difficulty: Difficulty,
        profile: DifficultyProfile,
    ) -> Result<DifficultyProfile, ProfileError> {
        profile.validate()?;
        let old = self.profile(difficulty);
        self.profiles.insert(difficulty, profile);
        Ok(old)
    }

    /// Loads a table from CSV with a header row naming the columns `difficulty`,
    /// `candidate_count`, `hue_shift`, `saturation_shift`, and `lightness_shift`, and one row per
    /// tier, for example:
    ///
    /// ```text
    /// difficulty,candidate_count,hue_shift,saturation_shift,lightness_shift
    /// easy,4,15,10,10
    /// normal,5,20,15,15
    /// hard,6,25,18,18
    /// extreme,8,30,20,20
    /// ```
    /// # Errors
    /// [`ProfileError::Csv`] on unreadable input or unknown tier names, [`ProfileError::DuplicateTier`]
    /// and [`ProfileError::MissingTier`] unless each tier appears exactly once, and any error from
    /// [`DifficultyProfile::validate`].
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<DifficultyTable, ProfileError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut profiles = HashMap::new();
        for result in rdr.deserialize() {
            let record: Record = result?;
            let profile = DifficultyProfile::new(
                record.candidate_count,
                record.hue_shift,
                record.saturation_shift,
                record.lightness_shift,
            );
            profile.validate()?;
            debug!("loaded {} profile: {:?}", record.difficulty, profile);
            if profiles.insert(record.difficulty, profile).is_some() {
                return Err(ProfileError::DuplicateTier(record.difficulty));
            }
        }
        if let Some(missing) = DIFFICULTIES.iter().find(|d| !profiles.contains_key(*d)) {
            return Err(ProfileError::MissingTier(*missing));
        }
        Ok(DifficultyTable { profiles })
    }
}
