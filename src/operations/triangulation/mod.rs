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
    geometry::{outline::Outline, point::Point, vertex::Vertex},
    kernel::orientation::orient2d,
    numeric::scalar::Scalar,
};

pub mod curves;
pub mod triangulator;

pub use triangulator::{Shape, Tessellation, Triangulator, TriangulatorConfig, triangulate_shapes};

/// Triangulates one boundary contour minus its holes.
pub trait Triangulate2D<T: Scalar> {
    fn triangulate(&mut self, boundary: &Outline<T>, holes: &[Outline<T>]) -> Tessellation<T>;
}

/// One output triangle.
///
/// `boundary[i]` tells whether corner `i` sits on a boundary contour, which
/// the renderer uses to pick curve-aware shading. Curve triangles produced
/// from off-curve control points also carry Loop–Blinn texture coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<T: Scalar> {
    pub vertices: [Vertex<T>; 3],
    pub boundary: [bool; 3],
    pub tex_coords: Option<[[T; 2]; 3]>,
}

impl<T: Scalar> Triangle<T> {
    pub fn new(vertices: [Vertex<T>; 3], boundary: [bool; 3]) -> Self {
        Self {
            vertices,
            boundary,
            tex_coords: None,
        }
    }

    pub fn points(&self) -> [Point<T>; 3] {
        self.vertices.map(|v| v.point)
    }

    /// Signed area in the xy-plane; positive for counter-clockwise corners.
    pub fn area(&self) -> T {
        let [a, b, c] = self.points();
        orient2d(&a, &b, &c) * T::half()
    }

    pub fn is_ccw(&self) -> bool {
        self.area() > T::zero()
    }

    pub fn is_curve(&self) -> bool {
        self.tex_coords.is_some()
    }
}
