// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::num::Coordinate;

/// An immutable point `(x, y)` on the integer lattice.
///
/// The point is a plain `Copy` value. All magnitude queries are taken with
/// respect to the origin unless stated otherwise.
///
/// # Examples
///
/// ```rust
/// # use roundel_core::geometry::Point;
///
/// let p = Point::new(3i64, 4);
/// assert_eq!(p.squared_norm(), 25);
/// assert_eq!(p.radius(), 5.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point<T> {
    x: T,
    y: T,
}

impl<T> Point<T>
where
    T: Coordinate,
{
    /// Creates a new point from its coordinates.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the origin `(0, 0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roundel_core::geometry::Point;
    ///
    /// let o = Point::<i32>::origin();
    /// assert!(o.is_origin());
    /// assert_eq!(o.radius(), 0.0);
    /// ```
    #[inline(always)]
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Returns the `x` coordinate.
    #[inline(always)]
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the `y` coordinate.
    #[inline(always)]
    pub fn y(&self) -> T {
        self.y
    }

    /// Returns `true` if this point is the origin.
    #[inline(always)]
    pub fn is_origin(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Returns the exact squared Euclidean norm `x² + y²`.
    ///
    /// The value is computed in `u128`: `|x|` and `|y|` are at most `2^63`, so
    /// the sum is at most `2^127` and cannot overflow. Two points compare by
    /// squared norm exactly as they compare by distance from the origin.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roundel_core::geometry::Point;
    ///
    /// assert_eq!(Point::new(-3i8, 4).squared_norm(), 25);
    /// assert_eq!(
    ///     Point::new(i64::MIN, i64::MIN).squared_norm(),
    ///     1u128 << 127
    /// );
    /// ```
    #[inline]
    pub fn squared_norm(&self) -> u128 {
        let x = widen(self.x).unsigned_abs() as u128;
        let y = widen(self.y).unsigned_abs() as u128;
        x * x + y * y
    }

    /// Returns the Euclidean distance `sqrt(x² + y²)` from the origin, i.e. the
    /// radius of the origin-centered circle passing through this point.
    #[inline]
    pub fn radius(&self) -> f64 {
        (widen(self.x) as f64).hypot(widen(self.y) as f64)
    }
}

#[inline(always)]
fn widen<T>(value: T) -> i64
where
    T: Coordinate,
{
    value.into()
}

impl<T> From<(T, T)> for Point<T>
where
    T: Coordinate,
{
    #[inline(always)]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Point<T>> for (T, T)
where
    T: Coordinate,
{
    #[inline(always)]
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T> std::fmt::Debug for Point<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({:?}, {:?})", self.x, self.y)
    }
}

impl<T> std::fmt::Display for Point<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_origin() {
        let p = Point::new(-2i32, 7);
        assert_eq!(p.x(), -2);
        assert_eq!(p.y(), 7);
        assert!(!p.is_origin());
        assert!(Point::<i64>::origin().is_origin());
        assert_eq!(Point::<i16>::default(), Point::origin());
    }

    #[test]
    fn test_squared_norm_is_exact() {
        assert_eq!(Point::new(0i64, 0).squared_norm(), 0);
        assert_eq!(Point::new(1i64, 2).squared_norm(), 5);
        assert_eq!(Point::new(2i64, 1).squared_norm(), 5);
        assert_eq!(Point::new(-3i64, -4).squared_norm(), 25);

        let a = Point::new(3_037_000_499i64, 1);
        let b = Point::new(3_037_000_499i64, 2);
        assert!(a.squared_norm() < b.squared_norm());
    }

    #[test]
    fn test_squared_norm_extremes_do_not_overflow() {
        let p = Point::new(i64::MIN, i64::MIN);
        assert_eq!(p.squared_norm(), 1u128 << 127);

        let q = Point::new(i64::MAX, i64::MIN);
        assert!(q.squared_norm() < p.squared_norm());
    }

    #[test]
    fn test_radius() {
        assert_eq!(Point::new(0i32, 0).radius(), 0.0);
        assert_eq!(Point::new(1i32, 0).radius(), 1.0);
        assert!((Point::new(3i32, 4).radius() - 5.0).abs() < 1e-12);
        assert!((Point::new(1i32, 2).radius() - 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_tuple_conversions() {
        let p: Point<i64> = (5, -6).into();
        assert_eq!(p, Point::new(5, -6));
        let t: (i64, i64) = p.into();
        assert_eq!(t, (5, -6));
    }

    #[test]
    fn test_display_and_debug() {
        let p = Point::new(-1i32, 2);
        assert_eq!(format!("{}", p), "(-1, 2)");
        assert_eq!(format!("{:?}", p), "Point(-1, 2)");
    }
}
