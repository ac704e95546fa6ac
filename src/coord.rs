//! This module contains a struct, [`Coord`], that models a point in 3D space. Colors
//! are embedded in it so that the math that doesn't care which color space it's in, like distance,
//! only has to be written once.

use std::ops::{Add, Mul, Sub};

/// A point in 3D space. `Coord` has three axes, denoted `x`, `y`, and `z`. Any color that converts
/// to and from a `Coord` matches its components with these axes in the order of the letters in its
/// name: an [`AdditiveColor`](crate::color::AdditiveColor) puts `r` on the x-axis, `g` on the y-axis,
/// and `b` on the z-axis.
///
/// # Example
/// ```
/// # use chromatch::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// let prod = point_1 * 1.5;  // the point (1.5, 12, 10.5)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(prod, Coord{x: 1.5, y: 12., z: 10.5});
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// scalar multiplication, only from the right: (a, b, c) * s = (sa, sb, sc)
impl Mul<f64> for Coord {
    type Output = Coord;
    fn mul(self, rhs: f64) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Coord {
    /// The Euclidean distance between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. Symmetric: swapping the points gives exactly the same
    /// result, not just one within floating-point error.
    ///
    /// This is not a good model of how different two colors *look*: humans are much better at
    /// telling blues apart than greens, for example. For a casual matching game it's good enough,
    /// and it is cheap and predictable.
    /// # Example
    /// ```
    /// # use chromatch::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        let diff = *self - *other;
        (diff.x.powi(2) + diff.y.powi(2) + diff.z.powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_symmetry() {
        let a = Coord { x: 216., y: 103., z: 98. };
        let b = Coord { x: 93., y: 162., z: 230. };
        assert_eq!(a.euclidean_distance(&b), b.euclidean_distance(&a));
        assert_eq!(a.euclidean_distance(&a), 0.);
    }
}
