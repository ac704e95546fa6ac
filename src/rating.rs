//! Thresholds for turning accuracy scores into verdicts: whether a color was matched closely enough,
//! whether a stage was passed, and how many stars its average earns.

/// The average accuracy a stage needs to be passed.
pub const REQUIRED_ACCURACY: f64 = 90.0;

/// The accuracy a single slider submission needs to count as a match.
pub const SLIDER_SUCCESS_ACCURACY: f64 = 85.0;

/// The distance the logo slider game treats as a total miss. Much tighter than the black-to-white
/// distance used by [`similarity`](crate::similarity::similarity), so its scores fall off faster.
pub const LOGO_GAME_MAX_DISTANCE: f64 = 150.0;

/// Returns `true` if a stage average is good enough to pass.
pub fn is_passing(average_accuracy: f64) -> bool {
    average_accuracy >= REQUIRED_ACCURACY
}

/// Returns `true` if a single slider submission counts as a match.
pub fn is_slider_match(accuracy: f64) -> bool {
    accuracy >= SLIDER_SUCCESS_ACCURACY
}

/// The number of stars, from 0 to 3, earned by a stage average: 3 from 95, 2 from 90, 1 from 80.
pub fn star_rating(average_accuracy: f64) -> u8 {
    if average_accuracy >= 95.0 {
        3
    } else if average_accuracy >= 90.0 {
        2
    } else if average_accuracy >= 80.0 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::AdditiveColor;
    use crate::similarity::{similarity, similarity_within};

    #[test]
    fn test_logo_game_range_is_harsher() {
        let target = AdditiveColor::new(0x0F, 0x2A, 0x4A);
        let attempt = AdditiveColor::new(0x2F, 0x4A, 0x6A);
        // 32 off on every channel
        assert_eq!(similarity(target, attempt), 87.5);
        assert_eq!(similarity_within(target, attempt, LOGO_GAME_MAX_DISTANCE), 63.0);
        assert!(is_slider_match(similarity(target, attempt)));
    }

    #[test]
    fn test_star_boundaries() {
        assert_eq!(star_rating(100.0), 3);
        assert_eq!(star_rating(95.0), 3);
        assert_eq!(star_rating(94.9), 2);
        assert_eq!(star_rating(90.0), 2);
        assert_eq!(star_rating(80.0), 1);
        assert_eq!(star_rating(79.9), 0);
        assert_eq!(star_rating(0.0), 0);
    }

    #[test]
    fn test_thresholds() {
        assert!(is_passing(90.0));
        assert!(!is_passing(89.9));
        assert!(is_slider_match(85.0));
        assert!(!is_slider_match(84.9));
    }
}
