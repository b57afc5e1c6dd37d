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

use crate::{geometry::point::Point, kernel::orientation::orient2d, numeric::scalar::Scalar};

/// In-circle determinant of `d` against the circle through `a`, `b`, `c`.
///
/// Positive when `d` is inside and `abc` is counter-clockwise; the sign flips
/// for a clockwise `abc`. Coordinates are taken relative to `d` to keep the
/// lifted terms small.
pub fn in_circle_value<T: Scalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>, d: &Point<T>) -> T {
    let adx = a.x - d.x;
    let ady = a.y - d.y;
    let bdx = b.x - d.x;
    let bdy = b.y - d.y;
    let cdx = c.x - d.x;
    let cdy = c.y - d.y;

    let ab_det = adx * bdy - bdx * ady;
    let bc_det = bdx * cdy - cdx * bdy;
    let ca_det = cdx * ady - adx * cdy;

    let a_lift = adx * adx + ady * ady;
    let b_lift = bdx * bdx + bdy * bdy;
    let c_lift = cdx * cdx + cdy * cdy;

    a_lift * bc_det + b_lift * ca_det + c_lift * ab_det
}

/// Whether `d` lies strictly inside the circumcircle of `abc`, whatever the
/// winding of `abc`. Values within [`Scalar::in_circle_threshold`] count as
/// on the circle. A collinear `abc` has no circle and contains nothing.
pub fn is_in_circle<T: Scalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>, d: &Point<T>) -> bool {
    let o = orient2d(a, b, c);
    if o == T::zero() {
        return false;
    }
    let v = in_circle_value(a, b, c, d);
    let v = if o < T::zero() { -v } else { v };
    v > T::in_circle_threshold()
}

/// Whether `p` lies strictly inside the CCW triangle `abc`. Points on an
/// edge or a corner are outside.
pub fn point_in_triangle<T: Scalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>, p: &Point<T>) -> bool {
    let zero = T::zero();
    orient2d(a, b, p) > zero && orient2d(b, c, p) > zero && orient2d(c, a, p) > zero
}

/// Whether the closed segments `p1q1` and `p2q2` share a point, touching
/// and collinear overlap included.
pub fn segments_intersect<T: Scalar>(p1: &Point<T>, q1: &Point<T>, p2: &Point<T>, q2: &Point<T>) -> bool {
    let o1 = sign(orient2d(p1, q1, p2));
    let o2 = sign(orient2d(p1, q1, q2));
    let o3 = sign(orient2d(p2, q2, p1));
    let o4 = sign(orient2d(p2, q2, q1));
    (o1 != o2 && o3 != o4)
        || (o1 == 0 && within_box(p1, p2, q1))
        || (o2 == 0 && within_box(p1, q2, q1))
        || (o3 == 0 && within_box(p2, p1, q2))
        || (o4 == 0 && within_box(p2, q1, q2))
}

/// Whether `t` is seen from `v` inside the corner `prev -> v -> next` of a
/// counter-clockwise ring, i.e. strictly left of the turn. Works for reflex
/// corners too.
pub fn in_corner<T: Scalar>(prev: &Point<T>, v: &Point<T>, next: &Point<T>, t: &Point<T>) -> bool {
    let zero = T::zero();
    if orient2d(v, next, prev) > zero {
        orient2d(v, next, t) > zero && orient2d(v, prev, t) < zero
    } else {
        orient2d(v, next, t) > zero || orient2d(v, prev, t) < zero
    }
}

fn sign<T: Scalar>(v: T) -> i8 {
    if v > T::zero() {
        1
    } else if v < T::zero() {
        -1
    } else {
        0
    }
}

/// `q` inside the bounding box of `p` and `r`.
fn within_box<T: Scalar>(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Even-odd ray crossing test of `p` against a closed polygon.
pub fn point_in_polygon<T: Scalar>(polygon: &[Point<T>], p: &Point<T>) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        if crosses_ray(&polygon[i], &polygon[j], p) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether the edge `v1 -> v2` crosses the horizontal ray running from `p`
/// towards +x.
#[inline]
pub(crate) fn crosses_ray<T: Scalar>(v1: &Point<T>, v2: &Point<T>, p: &Point<T>) -> bool {
    (v1.y > p.y) != (v2.y > p.y) && p.x < (v2.x - v1.x) * (p.y - v1.y) / (v2.y - v1.y) + v1.x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new_2d(x, y)
    }

    #[test]
    fn centre_is_inside_unit_circle() {
        let (a, b, c) = (p(1.0, 0.0), p(0.0, 1.0), p(-1.0, 0.0));
        assert!(in_circle_value(&a, &b, &c, &p(0.0, 0.0)) > 0.0);
        assert!(is_in_circle(&a, &b, &c, &p(0.0, 0.0)));
        // Orientation of abc does not matter for the boolean form.
        assert!(is_in_circle(&c, &b, &a, &p(0.0, 0.0)));
        assert!(!is_in_circle(&a, &b, &c, &p(2.0, 0.0)));
    }

    #[test]
    fn cocircular_point_is_not_inside() {
        let (a, b, c) = (p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0));
        assert_eq!(in_circle_value(&a, &b, &c, &p(0.0, 10.0)), 0.0);
        assert!(!is_in_circle(&a, &b, &c, &p(0.0, 10.0)));
    }

    #[test]
    fn collinear_triangle_has_no_circle() {
        let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
        assert!(!is_in_circle(&a, &b, &c, &p(1.0, 0.1)));
    }

    #[test]
    fn triangle_containment_is_strict() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
        assert!(point_in_triangle(&a, &b, &c, &p(1.0, 1.0)));
        assert!(!point_in_triangle(&a, &b, &c, &p(2.0, 0.0)));
        assert!(!point_in_triangle(&a, &b, &c, &p(0.0, 0.0)));
        assert!(!point_in_triangle(&a, &b, &c, &p(3.0, 3.0)));
    }

    #[test]
    fn crossing_and_touching_segments() {
        let (a, b) = (p(0.0, 0.0), p(4.0, 4.0));
        assert!(segments_intersect(&a, &b, &p(0.0, 4.0), &p(4.0, 0.0)));
        // Passing exactly through a corner counts.
        assert!(segments_intersect(&a, &b, &p(2.0, 2.0), &p(2.0, 5.0)));
        assert!(!segments_intersect(&a, &b, &p(3.0, 0.0), &p(4.0, 1.0)));
        assert!(!segments_intersect(&a, &b, &p(5.0, 5.0), &p(6.0, 6.0)));
    }

    #[test]
    fn corner_visibility() {
        // Convex corner of a CCW square at the origin.
        let (prev, v, next) = (p(0.0, 4.0), p(0.0, 0.0), p(4.0, 0.0));
        assert!(in_corner(&prev, &v, &next, &p(1.0, 1.0)));
        assert!(!in_corner(&prev, &v, &next, &p(-1.0, 1.0)));
        assert!(!in_corner(&prev, &v, &next, &p(2.0, 0.0)));
        // The same corner walked the other way is reflex.
        assert!(!in_corner(&next, &v, &prev, &p(1.0, 1.0)));
        assert!(in_corner(&next, &v, &prev, &p(-1.0, 1.0)));
        assert!(in_corner(&next, &v, &prev, &p(1.0, -1.0)));
    }

    #[test]
    fn polygon_containment() {
        let square = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        assert!(point_in_polygon(&square, &p(2.0, 2.0)));
        assert!(!point_in_polygon(&square, &p(5.0, 2.0)));
        assert!(!point_in_polygon(&square[..2], &p(2.0, 0.0)));
    }
}
