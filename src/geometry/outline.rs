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

use crate::{
    error::{DegenerateReason, Result, TessError},
    geometry::{aabb::Aabb, vertex::Vertex},
    kernel::orientation::signed_area2,
    numeric::scalar::Scalar,
};

/// Rotational direction of a closed contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Clockwise, negative signed area.
    Cw,
    /// Counter-clockwise, positive signed area.
    Ccw,
}

impl Winding {
    pub fn reversed(self) -> Winding {
        match self {
            Winding::Cw => Winding::Ccw,
            Winding::Ccw => Winding::Cw,
        }
    }
}

/// One contour of a shape: an ordered, implicitly closed sequence of
/// control points. The closing edge from the last vertex back to the first
/// is never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline<T: Scalar> {
    vertices: Vec<Vertex<T>>,
}

impl<T: Scalar> Outline<T> {
    pub fn new() -> Self {
        Self { vertices: Vec::new() }
    }

    pub fn from_vertices(vertices: Vec<Vertex<T>>) -> Self {
        Self { vertices }
    }

    /// All points on-curve.
    pub fn from_xy(coords: &[[T; 2]]) -> Self {
        Self {
            vertices: coords.iter().map(|c| Vertex::on_curve(c[0], c[1])).collect(),
        }
    }

    pub fn add_vertex(&mut self, v: Vertex<T>) {
        self.vertices.push(v);
    }

    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn bbox(&self) -> Aabb<T> {
        Aabb::from_points(self.vertices.iter().map(|v| &v.point))
    }

    /// Signed area, positive for counter-clockwise contours.
    pub fn area(&self) -> T {
        signed_area2(self.vertices.iter().map(|v| &v.point)) * T::half()
    }

    /// Winding from the sign of the area. Flat contours have none, so they
    /// are reported as degenerate with outline index 0; callers that track
    /// contour identity use [`Outline::winding_of`].
    pub fn winding(&self) -> Result<Winding> {
        self.winding_of(0)
    }

    pub fn winding_of(&self, outline: usize) -> Result<Winding> {
        if self.vertices.len() < 3 {
            return Err(TessError::DegenerateOutline {
                outline,
                reason: DegenerateReason::TooFewVertices(self.vertices.len()),
            });
        }
        let area2 = signed_area2(self.vertices.iter().map(|v| &v.point));
        if area2.abs() <= T::area_threshold() {
            return Err(TessError::DegenerateOutline {
                outline,
                reason: DegenerateReason::ZeroArea,
            });
        }
        Ok(if area2 > T::zero() { Winding::Ccw } else { Winding::Cw })
    }

    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
        }
    }

    /// Drops vertices that repeat their predecessor within `eps`, including
    /// a trailing copy of the first vertex. When an off-curve and an
    /// on-curve point coincide the on-curve one is kept.
    pub fn dedup(&self, eps: T) -> Self {
        let mut out: Vec<Vertex<T>> = Vec::with_capacity(self.vertices.len());
        for v in &self.vertices {
            match out.last_mut() {
                Some(last) if last.point.approx_eq(&v.point, eps) => {
                    last.on_curve |= v.on_curve;
                }
                _ => out.push(*v),
            }
        }
        while out.len() > 1 {
            let (first, last) = (out[0], out[out.len() - 1]);
            if !first.point.approx_eq(&last.point, eps) {
                break;
            }
            out[0].on_curve |= last.on_curve;
            out.pop();
        }
        Self { vertices: out }
    }

    /// Inserts the implied on-curve midpoint between every pair of
    /// consecutive off-curve points, as in TrueType outlines, so that each
    /// off-curve point sits between two on-curve neighbours.
    pub fn with_implied_on_curve(&self) -> Self {
        let n = self.vertices.len();
        let mut out = Vec::with_capacity(n);
        for (i, v) in self.vertices.iter().enumerate() {
            out.push(*v);
            let next = &self.vertices[(i + 1) % n];
            if n > 1 && !v.on_curve && !next.on_curve {
                out.push(Vertex::new(v.point.midpoint(&next.point), true));
            }
        }
        Self { vertices: out }
    }
}

impl<T: Scalar> FromIterator<Vertex<T>> for Outline<T> {
    fn from_iter<I: IntoIterator<Item = Vertex<T>>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}
