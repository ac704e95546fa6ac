//! This module describes the Bound trait, which describes the range of valid values of a color type
//! that can be embedded in 3D space. RGB channels are bounded by construction (they're `u8`s), but
//! hue, saturation, and lightness are floats, and arithmetic on them, like the random nudges the
//! variation generator makes, can easily leave the valid range.

use crate::coord::Coord;

/// Describes a color type whose components have explicit bounds, such as a saturation that can't
/// exceed 100%. Only applies to colors that can be embedded in 3D space.
/// # Example
/// ```
/// # use chromatch::bound::Bound;
/// # use chromatch::colors::HueColor;
/// let out_of_bounds = HueColor::new(370., 120., -4.);
/// let in_bounds = HueColor::clamp(out_of_bounds);
/// assert!((in_bounds.h - 10.).abs() <= 1e-10);
/// assert_eq!(in_bounds.s, 100.);
/// assert_eq!(in_bounds.l, 0.);
/// ```
pub trait Bound: Into<Coord> + From<Coord> + Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation. If
    /// some parts of the bounds don't exist, using infinity or negative infinity works.
    fn bounds() -> [(f64, f64); 3];
    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds. Types with a periodic component should override this to wrap it instead.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let components = [point.x, point.y, point.z];
        let mut point_vals = [0.; 3];
        for i in 0..3 {
            let (min, max) = ranges[i];
            point_vals[i] = num::clamp(components[i], min, max);
        }
        Coord {
            x: point_vals[0],
            y: point_vals[1],
            z: point_vals[2],
        }
    }
    /// Returns a version of the given color that is inside the bounds of its space. If the color is
    /// already valid, it comes back unchanged.
    fn clamp(color: Self) -> Self {
        Self::from(Self::clamp_coord(color.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::Bound;
    use crate::coord::Coord;

    #[derive(Debug, Copy, Clone, PartialEq)]
    struct Unit(Coord);

    impl From<Coord> for Unit {
        fn from(c: Coord) -> Unit {
            Unit(c)
        }
    }

    impl From<Unit> for Coord {
        fn from(u: Unit) -> Coord {
            u.0
        }
    }

    impl Bound for Unit {
        fn bounds() -> [(f64, f64); 3] {
            [(0., 1.), (0., 1.), (f64::NEG_INFINITY, f64::INFINITY)]
        }
    }

    #[test]
    fn test_default_clamping() {
        let point = Unit(Coord { x: 0.1, y: -0.2, z: 1.2e9 });
        assert_eq!(Unit::clamp(point), Unit(Coord { x: 0.1, y: 0., z: 1.2e9 }));
        let inside = Unit(Coord { x: 0.5, y: 1., z: -3. });
        assert_eq!(Unit::clamp(inside), inside);
    }
}
