//! Scoring: how close is the color a player made to the one they were aiming for? The score is a
//! percentage built from plain Euclidean distance in RGB space, normalized by the largest distance
//! possible (black to white). This is deliberately simple rather than perceptual, and every score in
//! the game is computed the same way so they can be compared and averaged.
//!
//! All scores are rounded to one decimal place, the precision they are shown with.

use crate::color::AdditiveColor;
use crate::coord::Coord;

/// The distance between black and white, the two furthest-apart colors in RGB space: the square
/// root of 3 * 255^2.
pub const MAX_DISTANCE: f64 = 441.672_955_930_063_7;

/// Rounds to one decimal place, rounding halves away from zero.
pub fn round_to_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// The similarity of two colors, as a percentage from 0 to 100 with one decimal place. Identical
/// colors score exactly 100.0, and black against white scores exactly 0.0. Symmetric in its
/// arguments.
///
/// # Example
/// ```
/// # use chromatch::color::parse_hex;
/// # use chromatch::similarity::similarity;
/// let target = parse_hex("#D86762");
/// assert_eq!(similarity(target, target), 100.0);
/// assert_eq!(similarity(parse_hex("#000000"), parse_hex("#FFFFFF")), 0.0);
/// ```
pub fn similarity(a: AdditiveColor, b: AdditiveColor) -> f64 {
    similarity_within(a, b, MAX_DISTANCE)
}

/// Like [`similarity`], but treating `max_distance` as the distance that scores 0: anything at
/// least that far away scores 0.0. Smaller ranges make the score harsher. A non-positive or NaN
/// `max_distance` makes every pair of distinct colors score 0.0.
pub fn similarity_within(a: AdditiveColor, b: AdditiveColor, max_distance: f64) -> f64 {
    let distance = Coord::from(a).euclidean_distance(&Coord::from(b));
    if distance == 0.0 {
        return 100.0;
    }
    if !(max_distance > 0.0) {
        return 0.0;
    }
    let score = 100.0 * (1.0 - distance / max_distance);
    round_to_tenth(num::clamp(score, 0.0, 100.0))
}

/// The arithmetic mean of a set of scores, rounded to one decimal place. An empty set averages to
/// 0.
pub fn average_similarity(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: f64 = scores.iter().sum();
    round_to_tenth(sum / scores.len() as f64)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::parse_hex;
    use float_cmp::approx_eq;

    #[test]
    fn test_max_distance() {
        let black_to_white =
            Coord::from(AdditiveColor::BLACK).euclidean_distance(&Coord::from(AdditiveColor::WHITE));
        assert!(approx_eq!(f64, MAX_DISTANCE, black_to_white, ulps = 2));
    }

    #[test]
    fn test_similarity_extremes() {
        let coral = parse_hex("#D86762");
        assert_eq!(similarity(coral, coral), 100.0);
        assert_eq!(similarity(AdditiveColor::BLACK, AdditiveColor::WHITE), 0.0);
        assert_eq!(similarity(AdditiveColor::WHITE, AdditiveColor::BLACK), 0.0);
    }

    #[test]
    fn test_similarity_values() {
        // one channel off by 255: 1 - 1/sqrt(3)
        let red = AdditiveColor::new(255, 0, 0);
        assert_eq!(similarity(AdditiveColor::BLACK, red), 42.3);
        // a single unit off is still not a perfect match
        let nudged = AdditiveColor::new(216, 103, 99);
        assert_eq!(similarity(parse_hex("#D86762"), nudged), 99.8);
        // starting point of the slider game against a navy target
        let gray = AdditiveColor::new(127, 127, 127);
        assert_eq!(similarity(gray, parse_hex("#0F2A4A")), 66.0);
    }

    #[test]
    fn test_similarity_within_range() {
        let a = AdditiveColor::new(100, 100, 100);
        let b = AdditiveColor::new(100, 100, 175);
        assert_eq!(similarity_within(a, b, 150.0), 50.0);
        // further than the range clamps to 0
        assert_eq!(similarity_within(AdditiveColor::BLACK, AdditiveColor::WHITE, 150.0), 0.0);
        assert_eq!(similarity_within(a, a, 150.0), 100.0);
        assert_eq!(similarity_within(a, b, 0.0), 0.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(average_similarity(&[]), 0.0);
        assert_eq!(average_similarity(&[100.0, 80.0, 60.0]), 80.0);
        assert_eq!(average_similarity(&[99.0, 90.0]), 94.5);
        assert_eq!(average_similarity(&[42.3]), 42.3);
        assert_eq!(average_similarity(&[100.0, 100.0, 0.0]), 66.7);
    }
}
