// PhotoZoom -- Zoom and pan geometry for single-photo gallery views
//
// Copyright (c) 2024-2025 Martin van der Werff <github (at) newinnovations.nl>
//
// This file is part of PhotoZoom.
//
// PhotoZoom is free software: you can redistribute it and/or modify it under the terms of
// the GNU Affero General Public License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR
// IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND
// FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR
// BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
// STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::fmt::Debug;

/// Numeric requirements shared by all geometry types in this module.
pub trait Scalar:
    Copy
    + Default
    + PartialOrd
    + Debug
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
{
}

impl<T> Scalar for T where
    T: Copy
        + Default
        + PartialOrd
        + Debug
        + std::ops::Add<Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + std::ops::Div<Output = T>
{
}

fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a <= b {
        a
    } else {
        b
    }
}

fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a >= b {
        a
    } else {
        b
    }
}

/// Width and height of a viewport, image or rectangle.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Size<T> {
    width: T,
    height: T,
}

impl<T: Scalar> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> T {
        self.width
    }

    pub fn height(&self) -> T {
        self.height
    }

    /// Returns the size multiplied uniformly on both axes.
    pub fn scale(&self, scale: T) -> Self {
        Self::new(self.width * scale, self.height * scale)
    }

    /// True when the size has no area (either dimension zero or negative).
    pub fn is_empty(&self) -> bool {
        self.width <= T::default() || self.height <= T::default()
    }

    /// True when this size fits inside `other` on both axes.
    pub fn fits_within(&self, other: &Self) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

/// A point or a displacement in 2D space.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct VectorPoint<T> {
    x: T,
    y: T,
}

impl<T: Scalar> VectorPoint<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    pub fn translate(&self, offset: VectorPoint<T>) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    pub fn scale(&self, scale: T) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }

    /// Returns the vector pointing in the opposite direction
    pub fn neg(&self) -> Self {
        Self::new(T::default() - self.x, T::default() - self.y)
    }
}

impl<T: Scalar> std::ops::Add for VectorPoint<T> {
    type Output = VectorPoint<T>;

    fn add(self, rhs: Self) -> Self::Output {
        self.translate(rhs)
    }
}

impl<T: Scalar> std::ops::Sub for VectorPoint<T> {
    type Output = VectorPoint<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.translate(rhs.neg())
    }
}

/// A rectangle defined by two corner points (x0, y0) and (x1, y1).
///
/// Empty rectangles have x0 >= x1 or y0 >= y1. Most callers think in origin
/// and size, see [`Rect::from_origin_size`].
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub x0: T,
    pub y0: T,
    pub x1: T,
    pub y1: T,
}

impl<T: Scalar> Rect<T> {
    /// Creates a new rectangle with the given corners. No validation is performed.
    pub const fn new(x0: T, y0: T, x1: T, y1: T) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle with its origin at (0, 0) covering `size`.
    pub fn new_from_size(size: Size<T>) -> Self {
        Self::new(T::default(), T::default(), size.width, size.height)
    }

    pub fn from_origin_size(origin: VectorPoint<T>, size: Size<T>) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Half-open containment test: [x0, x1) and [y0, y1). Empty rectangles
    /// contain nothing.
    pub fn contains(&self, p: VectorPoint<T>) -> bool {
        !self.is_empty() && p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
    }

    /// Width of the rectangle, zero for empty rectangles.
    pub fn width(&self) -> T {
        if self.is_empty() {
            T::default()
        } else {
            self.x1 - self.x0
        }
    }

    /// Height of the rectangle, zero for empty rectangles.
    pub fn height(&self) -> T {
        if self.is_empty() {
            T::default()
        } else {
            self.y1 - self.y0
        }
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width(), self.height())
    }

    pub fn origin(&self) -> VectorPoint<T> {
        VectorPoint::new(self.x0, self.y0)
    }

    /// Largest rectangle contained in both. Empty if they do not overlap.
    pub fn intersect(&self, other: &Self) -> Self {
        Self::new(
            max(self.x0, other.x0),
            max(self.y0, other.y0),
            min(self.x1, other.x1),
            min(self.y1, other.y1),
        )
    }

    pub fn translate(&self, offset: VectorPoint<T>) -> Self {
        Self::new(
            self.x0 + offset.x,
            self.y0 + offset.y,
            self.x1 + offset.x,
            self.y1 + offset.y,
        )
    }
}

// Floating-point specific implementations
impl Rect<f64> {
    pub fn center(&self) -> PointD {
        PointD::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Rectangle of the given size whose center is `center`.
    pub fn centered_at(center: PointD, size: SizeD) -> Self {
        let origin = PointD::new(
            center.x() - size.width() / 2.0,
            center.y() - size.height() / 2.0,
        );
        Self::from_origin_size(origin, size)
    }

    /// Moves the rectangle so it lies inside `bounds` without changing its size.
    ///
    /// On an axis where the rectangle is larger than `bounds` it is centered
    /// over `bounds` instead.
    pub fn clamp_within(&self, bounds: &RectD) -> Self {
        let dx = Self::clamp_axis(self.x0, self.x1, bounds.x0, bounds.x1);
        let dy = Self::clamp_axis(self.y0, self.y1, bounds.y0, bounds.y1);
        self.translate(VectorD::new(dx, dy))
    }

    fn clamp_axis(lo: f64, hi: f64, bound_lo: f64, bound_hi: f64) -> f64 {
        if hi - lo > bound_hi - bound_lo {
            (bound_lo + bound_hi) / 2.0 - (lo + hi) / 2.0
        } else if lo < bound_lo {
            bound_lo - lo
        } else if hi > bound_hi {
            bound_hi - hi
        } else {
            0.0
        }
    }
}

/// Distances from each edge of a container to its content.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Insets<T> {
    pub top: T,
    pub left: T,
    pub bottom: T,
    pub right: T,
}

impl<T: Scalar> Insets<T> {
    pub const fn new(top: T, left: T, bottom: T, right: T) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Inset of `horizontal` on left and right, `vertical` on top and bottom.
    pub fn symmetric(horizontal: T, vertical: T) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of the left and right insets
    pub fn horizontal(&self) -> T {
        self.left + self.right
    }

    /// Sum of the top and bottom insets
    pub fn vertical(&self) -> T {
        self.top + self.bottom
    }
}

pub type RectD = Rect<f64>;
pub type SizeD = Size<f64>;
pub type PointD = VectorPoint<f64>;
pub type VectorD = VectorPoint<f64>;
pub type InsetsD = Insets<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        let size = SizeD::new(300.0, 150.0);
        assert_eq!(size.scale(2.0), SizeD::new(600.0, 300.0));
        assert!(!size.is_empty());
        assert!(SizeD::new(0.0, 150.0).is_empty());
        assert!(SizeD::new(300.0, -1.0).is_empty());
        assert!(size.fits_within(&SizeD::new(300.0, 300.0)));
        assert!(!size.fits_within(&SizeD::new(299.0, 300.0)));
    }

    #[test]
    fn test_vector_ops() {
        let a = PointD::new(10.0, 20.0);
        let b = VectorD::new(5.0, -5.0);
        assert_eq!(a + b, PointD::new(15.0, 15.0));
        assert_eq!(a - b, PointD::new(5.0, 25.0));
        assert_eq!(a.neg(), PointD::new(-10.0, -20.0));
        assert_eq!(a.scale(0.5), PointD::new(5.0, 10.0));
    }

    #[test]
    fn test_origin_size() {
        let rect = RectD::from_origin_size(PointD::new(10.0, 20.0), SizeD::new(100.0, 50.0));
        assert_eq!(rect, RectD::new(10.0, 20.0, 110.0, 70.0));
        assert_eq!(rect.origin(), PointD::new(10.0, 20.0));
        assert_eq!(rect.size(), SizeD::new(100.0, 50.0));
        assert_eq!(rect.center(), PointD::new(60.0, 45.0));
    }

    #[test]
    fn test_contains_half_open() {
        let rect = RectD::new(0.0, 0.0, 10.0, 20.0);
        assert!(rect.contains(PointD::new(0.0, 0.0)));
        assert!(rect.contains(PointD::new(5.0, 19.9)));
        assert!(!rect.contains(PointD::new(10.0, 5.0))); // Exclusive upper bound
        assert!(!rect.contains(PointD::new(-0.1, 5.0)));

        let empty = RectD::new(5.0, 5.0, 5.0, 5.0);
        assert!(empty.is_empty());
        assert!(!empty.contains(PointD::new(5.0, 5.0)));
        assert_eq!(empty.width(), 0.0);
    }

    #[test]
    fn test_intersect() {
        let rect1 = RectD::new(0.0, 0.0, 10.0, 10.0);
        let rect2 = RectD::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(rect1.intersect(&rect2), RectD::new(5.0, 5.0, 10.0, 10.0));

        let rect3 = RectD::new(20.0, 20.0, 30.0, 30.0);
        assert!(rect1.intersect(&rect3).is_empty());
    }

    #[test]
    fn test_centered_at() {
        let rect = RectD::centered_at(PointD::new(50.0, 50.0), SizeD::new(20.0, 10.0));
        assert_eq!(rect, RectD::new(40.0, 45.0, 60.0, 55.0));
    }

    #[test]
    fn test_clamp_within_shifts_only() {
        let bounds = RectD::new(0.0, 0.0, 300.0, 150.0);

        // Already inside
        let inside = RectD::new(10.0, 10.0, 110.0, 110.0);
        assert_eq!(inside.clamp_within(&bounds), inside);

        // Sticks out top-left
        let tl = RectD::new(-30.0, -20.0, 70.0, 80.0);
        assert_eq!(tl.clamp_within(&bounds), RectD::new(0.0, 0.0, 100.0, 100.0));

        // Sticks out bottom-right
        let br = RectD::new(250.0, 100.0, 350.0, 200.0);
        assert_eq!(br.clamp_within(&bounds), RectD::new(200.0, 50.0, 300.0, 150.0));
    }

    #[test]
    fn test_clamp_within_oversized_axis_is_centered() {
        let bounds = RectD::new(0.0, 0.0, 300.0, 10.0);
        let rect = RectD::new(250.0, 40.0, 350.0, 140.0);
        let clamped = rect.clamp_within(&bounds);
        assert_eq!(clamped, RectD::new(200.0, -45.0, 300.0, 55.0));
        assert_eq!(clamped.size(), rect.size());
    }

    #[test]
    fn test_insets() {
        let insets = InsetsD::symmetric(0.0, 75.0);
        assert_eq!(insets, InsetsD::new(75.0, 0.0, 75.0, 0.0));
        assert_eq!(insets.horizontal(), 0.0);
        assert_eq!(insets.vertical(), 150.0);
        assert_eq!(InsetsD::zero(), InsetsD::new(0.0, 0.0, 0.0, 0.0));
    }
}
