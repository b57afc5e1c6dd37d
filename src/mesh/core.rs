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
    error::Result,
    geometry::{outline::Outline, point::Point, vertex::Vertex},
    kernel::predicates::in_corner,
    mesh::{
        basic_types::Mesh,
        half_edge::{EdgeKind, HalfEdge},
        outline::MeshOutline,
        vertex::MeshVertex,
    },
    numeric::scalar::Scalar,
};

impl<T: Scalar> Default for Mesh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Mesh<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
        }
    }

    pub fn add_vertex(&mut self, vertex: Vertex<T>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(MeshVertex::new(vertex));
        idx
    }

    /// Copies `outline` into the arena. Fails without touching the arena if
    /// the contour has no winding.
    pub fn add_outline(&mut self, outline: &Outline<T>, id: usize) -> Result<MeshOutline> {
        let winding = outline.winding_of(id)?;
        let vertices = outline
            .vertices()
            .iter()
            .map(|v| self.add_vertex(*v))
            .collect();
        Ok(MeshOutline {
            id,
            vertices,
            winding,
        })
    }

    /// Creates an unlinked half-edge and registers it on its origin.
    pub fn add_half_edge(&mut self, origin: usize, kind: EdgeKind) -> usize {
        let idx = self.half_edges.len();
        self.half_edges.push(HalfEdge::new(origin, kind));
        self.vertices[origin].add_edge(idx);
        idx
    }

    /// Links `a -> b` in ring order.
    #[inline]
    pub fn connect(&mut self, a: usize, b: usize) {
        self.half_edges[a].next = b;
        self.half_edges[b].prev = a;
    }

    pub fn make_siblings(&mut self, a: usize, b: usize) {
        self.half_edges[a].sibling = Some(b);
        self.half_edges[b].sibling = Some(a);
    }

    pub(crate) fn remove_half_edge(&mut self, he: usize) {
        self.half_edges[he].removed = true;
    }

    /// First live boundary or hole half-edge starting at `v`.
    pub fn find_bound_edge(&self, v: usize) -> Option<usize> {
        self.vertices[v].edges().iter().copied().find(|&he| {
            let e = &self.half_edges[he];
            e.is_bound() && !e.removed
        })
    }

    /// Live half-edge leaving `v` whose ring corner at `v` opens towards
    /// `target`. A vertex visited more than once by the ring, as bridge ends
    /// are, has one corner per visit.
    pub fn corner_edge(&self, v: usize, target: &Point<T>) -> Option<usize> {
        let pv = self.vertex_point(v);
        self.vertices[v].edges().iter().copied().find(|&he| {
            !self.half_edges[he].removed
                && in_corner(self.edge_point(self.prev(he)), pv, self.edge_point(self.next(he)), target)
        })
    }

    #[inline]
    pub fn next(&self, he: usize) -> usize {
        self.half_edges[he].next
    }

    #[inline]
    pub fn prev(&self, he: usize) -> usize {
        self.half_edges[he].prev
    }

    #[inline]
    pub fn origin(&self, he: usize) -> usize {
        self.half_edges[he].origin
    }

    #[inline]
    pub fn vertex_point(&self, v: usize) -> &Point<T> {
        self.vertices[v].point()
    }

    /// Position of the origin of `he`.
    #[inline]
    pub fn edge_point(&self, he: usize) -> &Point<T> {
        self.vertex_point(self.origin(he))
    }

    pub(crate) fn mark_boundary_contained(&mut self, v: usize) {
        self.vertices[v].mark_boundary_contained();
    }

    /// Half-edges of the ring through `root`, starting at `root`. Stops
    /// early on a broken link rather than spinning forever.
    pub fn ring(&self, root: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut e = root;
        loop {
            out.push(e);
            e = self.half_edges[e].next;
            if e == root || e >= self.half_edges.len() || out.len() > self.half_edges.len() {
                break;
            }
        }
        out
    }

    /// Origins of the ring through `root`, in ring order.
    pub fn ring_vertices(&self, root: usize) -> Vec<usize> {
        self.ring(root).into_iter().map(|he| self.origin(he)).collect()
    }

    /// Checks `e.next.prev == e` and `e.prev.next == e` around the ring and
    /// that the ring actually closes on `root`.
    pub fn is_ring_consistent(&self, root: usize) -> bool {
        let m = self.half_edges.len();
        let mut e = root;
        for _ in 0..=m {
            let he = &self.half_edges[e];
            if he.next >= m || he.prev >= m || he.removed {
                return false;
            }
            if self.half_edges[he.next].prev != e || self.half_edges[he.prev].next != e {
                return false;
            }
            e = he.next;
            if e == root {
                return true;
            }
        }
        false
    }
}
