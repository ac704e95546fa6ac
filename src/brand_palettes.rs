//! This file provides the built-in brand logos the game is played with, and the colors players are
//! asked to match for each. Logos are grouped by difficulty: easy logos have a single color, normal
//! ones two, hard ones three, and the extreme logo five.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{parse_hex, AdditiveColor};
use crate::difficulty::Difficulty;

/// What kind of organization a brand belongs to.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandCategory {
    /// Schools and educational nonprofits.
    Education,
    /// Technology companies and platforms.
    Tech,
    /// Other companies.
    Company,
    /// Government agencies.
    Government,
}

/// A logo and the colors it's made of.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Brand {
    /// A stable identifier, unique among the built-in brands.
    pub id: u32,
    /// The name shown to players.
    pub name: &'static str,
    /// What kind of organization this is.
    pub category: BrandCategory,
    /// The tier this logo is played on.
    pub difficulty: Difficulty,
    /// The logo's colors as `#RRGGBB` codes, most prominent first.
    pub colors: &'static [&'static str],
}

impl Brand {
    /// The logo's colors, parsed.
    pub fn targets(&self) -> Vec<AdditiveColor> {
        self.colors.iter().map(|hex| parse_hex(hex)).collect()
    }

    /// Picks one of the logo's colors uniformly at random, as a multiple-choice round does.
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> AdditiveColor {
        // every brand has at least one color, but don't panic if that ever changes
        self.colors
            .choose(rng)
            .map(|hex| parse_hex(hex))
            .unwrap_or(AdditiveColor::BLACK)
    }
}

// values sampled from each logo image
static BRANDS: [Brand; 12] = [
    Brand {
        id: 1,
        name: "Modulabs",
        category: BrandCategory::Education,
        difficulty: Difficulty::Easy,
        colors: &["#D86762"],
    },
    Brand {
        id: 2,
        name: "Tenstorrent",
        category: BrandCategory::Tech,
        difficulty: Difficulty::Easy,
        colors: &["#8A78FF"],
    },
    Brand {
        id: 3,
        name: "Ewha Womans University Startup Support",
        category: BrandCategory::Education,
        difficulty: Difficulty::Easy,
        colors: &["#2F6543"],
    },
    Brand {
        id: 4,
        name: "Yozm IT",
        category: BrandCategory::Tech,
        difficulty: Difficulty::Easy,
        colors: &["#A55AFE"],
    },
    Brand {
        id: 5,
        name: "AiFrenz",
        category: BrandCategory::Tech,
        difficulty: Difficulty::Normal,
        colors: &["#444444", "#C47A40"],
    },
    Brand {
        id: 6,
        name: "Kakao Impact",
        category: BrandCategory::Company,
        difficulty: Difficulty::Normal,
        colors: &["#E8C44A", "#000000"],
    },
    Brand {
        id: 7,
        name: "J-Pub",
        category: BrandCategory::Company,
        difficulty: Difficulty::Normal,
        colors: &["#9DC44A", "#000000"],
    },
    Brand {
        id: 8,
        name: "Ministry of Employment and Labor",
        category: BrandCategory::Government,
        difficulty: Difficulty::Normal,
        colors: &["#0F2A4A", "#C6342D"],
    },
    Brand {
        id: 9,
        name: "HRD Korea",
        category: BrandCategory::Government,
        difficulty: Difficulty::Hard,
        colors: &["#7EC7F7", "#4A84D9", "#234A89"],
    },
    Brand {
        id: 10,
        name: "K-Hightech Platform",
        category: BrandCategory::Tech,
        difficulty: Difficulty::Hard,
        colors: &["#5BA7E1", "#9CC56A", "#D48A45"],
    },
    Brand {
        id: 11,
        name: "Dongrami Foundation",
        category: BrandCategory::Education,
        difficulty: Difficulty::Hard,
        colors: &["#6A9D91", "#99ACA9", "#CFDCDC"],
    },
    Brand {
        id: 12,
        name: "ClaBi",
        category: BrandCategory::Company,
        difficulty: Difficulty::Extreme,
        colors: &["#5DA2E6", "#E58A3A", "#F0C44A", "#65A857", "#0E0E0E"],
    },
];

/// Every built-in brand, in id order.
pub fn brands() -> &'static [Brand] {
    &BRANDS
}

/// The brands played on a given tier, in id order.
pub fn brands_for(difficulty: Difficulty) -> Vec<&'static Brand> {
    BRANDS
        .iter()
        .filter(|brand| brand.difficulty == difficulty)
        .collect()
}

/// Looks up a brand by its id.
pub fn brand_by_id(id: u32) -> Option<&'static Brand> {
    BRANDS.iter().find(|brand| brand.id == id)
}
