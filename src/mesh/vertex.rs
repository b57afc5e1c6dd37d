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

use smallvec::SmallVec;

use crate::{
    geometry::{point::Point, vertex::Vertex},
    numeric::scalar::Scalar,
};

/// Arena-resident wrapper around an input [`Vertex`].
///
/// `edges` lists the half-edges leaving this vertex, live or removed.
/// `boundary_contained` is set for corners of boundary contours and for the
/// points of curve triangles.
#[derive(Clone, Debug)]
pub struct MeshVertex<T: Scalar> {
    pub vertex: Vertex<T>,
    boundary_contained: bool,
    edges: SmallVec<[usize; 4]>,
}

impl<T: Scalar> MeshVertex<T> {
    pub fn new(vertex: Vertex<T>) -> Self {
        Self {
            vertex,
            boundary_contained: false,
            edges: SmallVec::new(),
        }
    }

    #[inline]
    pub fn point(&self) -> &Point<T> {
        &self.vertex.point
    }

    #[inline]
    pub fn is_on_curve(&self) -> bool {
        self.vertex.on_curve
    }

    #[inline]
    pub fn is_boundary_contained(&self) -> bool {
        self.boundary_contained
    }

    pub(crate) fn mark_boundary_contained(&mut self) {
        self.boundary_contained = true;
    }

    /// Half-edges that start at this vertex, in creation order.
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    pub(crate) fn add_edge(&mut self, he: usize) {
        self.edges.push(he);
    }
}
