// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::{geometry::point::Point, numeric::scalar::Scalar};

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
///
/// The value is twice the signed area of the triangle `abc` in the xy-plane.
#[inline]
pub fn orient2d<T: Scalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Strict counter-clockwise test; collinear triples are not CCW.
#[inline]
pub fn is_ccw<T: Scalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> bool {
    orient2d(a, b, c) > T::zero()
}

/// Twice the signed area of a closed polygon (shoelace). Positive for CCW.
pub fn signed_area2<'a, T, I>(points: I) -> T
where
    T: Scalar,
    I: IntoIterator<Item = &'a Point<T>>,
{
    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return T::zero();
    };
    let mut sum = T::zero();
    let mut prev = first;
    for p in iter {
        sum = sum + (prev.x * p.y - p.x * prev.y);
        prev = p;
    }
    sum + (prev.x * first.y - first.x * prev.y)
}
