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

use log::trace;

use crate::{
    error::{DegenerateReason, Result, TessError},
    geometry::{aabb::Aabb, outline::Winding, point::Point},
    kernel::{
        orientation::is_ccw,
        predicates::{crosses_ray, is_in_circle, point_in_triangle, segments_intersect},
    },
    mesh::{basic_types::Mesh, half_edge::EdgeKind, outline::MeshOutline},
    numeric::scalar::Scalar,
    operations::triangulation::Triangle,
};

/// A live ring of half-edges being consumed one ear at a time.
///
/// The ring always runs counter-clockwise around the region still to be
/// filled. Holes are spliced into it through a pair of sibling `Inner`
/// half-edges, so a shape with holes is still a single ring.
#[derive(Clone, Debug)]
pub struct Loop<T: Scalar> {
    root: usize,
    bbox: Aabb<T>,
    initial: MeshOutline,
    exhausted: bool,
}

impl<T: Scalar> Loop<T> {
    /// Builds the primary ring of `outline`.
    ///
    /// The ring is oriented counter-clockwise whatever the input winding;
    /// `kind` only tags the edges. A contour that should be subtracted from
    /// an existing ring goes through [`Loop::add_constraint_curve`] instead.
    pub fn create(mesh: &mut Mesh<T>, outline: MeshOutline, kind: EdgeKind) -> Result<Self> {
        let mut bbox = Aabb::empty();
        let root = init_ring(mesh, &mut bbox, &outline, kind, Winding::Ccw)?;
        Ok(Self {
            root,
            bbox,
            initial: outline,
            exhausted: false,
        })
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn bbox(&self) -> &Aabb<T> {
        &self.bbox
    }

    /// The contour this loop was created from.
    pub fn initial(&self) -> &MeshOutline {
        &self.initial
    }

    /// True once the final triangle has been emitted.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn is_simplex(&self, mesh: &Mesh<T>) -> bool {
        mesh.next(mesh.next(mesh.next(self.root))) == self.root
    }

    /// Number of half-edges (and vertex occurrences) left in the ring.
    pub fn size(&self, mesh: &Mesh<T>) -> usize {
        if self.exhausted { 0 } else { mesh.ring(self.root).len() }
    }

    /// Splices `hole` into the ring.
    ///
    /// The hole ring is built clockwise, then joined to the primary ring by a
    /// sibling pair of `Inner` half-edges between the nearest compatible
    /// boundary vertex and hole vertex. On failure the primary ring is left
    /// as it was.
    pub fn add_constraint_curve(&mut self, mesh: &mut Mesh<T>, hole: &MeshOutline) -> Result<()> {
        let hole_root = init_ring(mesh, &mut self.bbox, hole, EdgeKind::Hole, Winding::Cw)?;

        let Some((root, v3_edge)) = self.locate_closest_vertex(mesh, hole, hole_root) else {
            for he in mesh.ring(hole_root) {
                mesh.remove_half_edge(he);
            }
            return Err(TessError::BridgeNotFound { outline: hole.id });
        };
        self.root = root;

        let root_prev = mesh.prev(root);
        let v3_edge_prev = mesh.prev(v3_edge);

        let cross = mesh.add_half_edge(mesh.origin(root), EdgeKind::Inner);
        let cross_sib = mesh.add_half_edge(mesh.origin(v3_edge), EdgeKind::Inner);
        mesh.make_siblings(cross, cross_sib);

        mesh.connect(root_prev, cross);
        mesh.connect(cross, v3_edge);
        mesh.connect(v3_edge_prev, cross_sib);
        mesh.connect(cross_sib, root);
        Ok(())
    }

    /// Picks the bridge for `hole`: the hole vertex nearest to a vertex `v`
    /// of the initial contour such that
    /// - no other hole vertex lies inside the circumcircle of
    ///   (v, v.next, candidate),
    /// - the bridge leaves `v` and enters the candidate through the inside
    ///   of their ring corners,
    /// - the bridge touches no live edge of either ring, earlier holes
    ///   included.
    ///
    /// Returns the half-edges the bridge starts before on each ring. Ties go
    /// to the first pair in scan order.
    fn locate_closest_vertex(
        &self,
        mesh: &Mesh<T>,
        hole: &MeshOutline,
        hole_root: usize,
    ) -> Option<(usize, usize)> {
        let edges: Vec<(usize, usize)> = mesh
            .ring(self.root)
            .into_iter()
            .chain(mesh.ring(hole_root))
            .map(|he| (mesh.origin(he), mesh.origin(mesh.next(he))))
            .collect();

        let mut closest = None;
        let mut min_distance = T::infinity();

        for (v, next_v) in self.initial.segments() {
            let (pv, pn) = (mesh.vertex_point(v), mesh.vertex_point(next_v));
            for &cand in &hole.vertices {
                let pc = mesh.vertex_point(cand);
                let distance = pv.distance_squared_to(pc);
                if distance >= min_distance {
                    continue;
                }
                let blocked = hole.vertices.iter().any(|&w| {
                    w != v && w != next_v && w != cand && is_in_circle(pv, pn, pc, mesh.vertex_point(w))
                });
                if blocked {
                    continue;
                }
                let (Some(from), Some(to)) = (mesh.corner_edge(v, pc), mesh.corner_edge(cand, pv)) else {
                    continue;
                };
                let crossed = edges.iter().any(|&(a, b)| {
                    a != v
                        && b != v
                        && a != cand
                        && b != cand
                        && segments_intersect(pv, pc, mesh.vertex_point(a), mesh.vertex_point(b))
                });
                if crossed {
                    trace!("bridge {pv:?} -> {pc:?} crosses the ring");
                    continue;
                }
                closest = Some((from, to));
                min_distance = distance;
            }
        }
        closest
    }

    /// Tries to cut the ear (root, root.next, root.next.next).
    ///
    /// Returns `None` without cutting when the ear is reflex or, with
    /// `delaunay`, when another ring vertex lies inside its circumcircle; the
    /// root then moves one step forward. Without `delaunay` the ear is only
    /// rejected when a ring vertex lies strictly inside it. A simplex yields
    /// its last triangle and exhausts the loop.
    pub fn cut(&mut self, mesh: &mut Mesh<T>, delaunay: bool) -> Option<Triangle<T>> {
        if self.exhausted {
            return None;
        }
        let root = self.root;
        if self.is_simplex(mesh) {
            let tri = self.make_triangle(mesh, root);
            for he in mesh.ring(root) {
                mesh.remove_half_edge(he);
            }
            self.exhausted = true;
            return Some(tri);
        }

        let prev = mesh.prev(root);
        let next1 = mesh.next(root);
        let next2 = mesh.next(next1);
        if !self.is_valid_neighbor(mesh, next2, delaunay) {
            self.root = next1;
            return None;
        }

        let v1 = mesh.origin(root);
        let v3 = mesh.origin(next2);

        // Close the ear into its own three-edge cycle...
        let v3_edge = mesh.add_half_edge(v3, EdgeKind::Inner);
        mesh.connect(v3_edge, root);
        mesh.connect(next1, v3_edge);

        // ...and let its sibling take the place of the two consumed edges.
        let v3_sib = mesh.add_half_edge(v1, EdgeKind::Inner);
        mesh.make_siblings(v3_edge, v3_sib);
        mesh.connect(prev, v3_sib);
        mesh.connect(v3_sib, next2);

        let tri = self.make_triangle(mesh, root);
        for he in [root, next1, v3_edge] {
            mesh.remove_half_edge(he);
        }
        self.root = next2;
        Some(tri)
    }

    fn is_valid_neighbor(&self, mesh: &Mesh<T>, cand_edge: usize, delaunay: bool) -> bool {
        let next = mesh.next(self.root);
        let (rv, nv, cv) = (mesh.origin(self.root), mesh.origin(next), mesh.origin(cand_edge));
        let (a, b, c) = (mesh.vertex_point(rv), mesh.vertex_point(nv), mesh.vertex_point(cv));
        if !is_ccw(a, b, c) {
            return false;
        }

        let mut e = mesh.next(cand_edge);
        while e != cand_edge {
            let w = mesh.origin(e);
            if w != rv && w != nv && w != cv {
                let p = mesh.vertex_point(w);
                if delaunay && is_in_circle(a, b, c, p) {
                    trace!("in-circle reject: {p:?} inside ({a:?}, {b:?}, {c:?})");
                    return false;
                }
                if !delaunay && point_in_triangle(a, b, c, p) {
                    trace!("containment reject: {p:?} inside ({a:?}, {b:?}, {c:?})");
                    return false;
                }
            }
            e = mesh.next(e);
        }
        true
    }

    fn make_triangle(&self, mesh: &Mesh<T>, root: usize) -> Triangle<T> {
        let e1 = mesh.next(root);
        let e2 = mesh.next(e1);
        let corners = [root, e1, e2].map(|he| &mesh.vertices[mesh.origin(he)]);
        Triangle::new(
            corners.map(|v| v.vertex),
            corners.map(|v| v.is_boundary_contained()),
        )
    }

    /// Even-odd test of `p` against the live ring, after a bounding-box
    /// reject. Points inside a bridged hole are outside.
    pub fn check_inside(&self, mesh: &Mesh<T>, p: &Point<T>) -> bool {
        if self.exhausted || !self.bbox.contains_2d(p) {
            return false;
        }
        let mut inside = false;
        for he in mesh.ring(self.root) {
            let v2 = mesh.edge_point(he);
            let v1 = mesh.edge_point(mesh.next(he));
            if crosses_ray(v1, v2, p) {
                inside = !inside;
            }
        }
        inside
    }
}

/// Builds a closed ring over `outline` oriented to `required`, walking the
/// vertices backwards when the input winding disagrees. Returns the first
/// half-edge of the ring.
fn init_ring<T: Scalar>(
    mesh: &mut Mesh<T>,
    bbox: &mut Aabb<T>,
    outline: &MeshOutline,
    kind: EdgeKind,
    required: Winding,
) -> Result<usize> {
    let n = outline.len();
    if n < 3 {
        return Err(TessError::DegenerateOutline {
            outline: outline.id,
            reason: DegenerateReason::TooFewVertices(n),
        });
    }

    let mut order = outline.vertices.clone();
    if outline.winding != required {
        order.reverse();
    }

    let mut first = None;
    let mut last: Option<usize> = None;
    for v in order {
        bbox.resize(mesh.vertex_point(v));
        let edge = mesh.add_half_edge(v, kind);
        match last {
            Some(prev) => mesh.connect(prev, edge),
            None => first = Some(edge),
        }
        last = Some(edge);
    }

    match (first, last) {
        (Some(first), Some(last)) => {
            mesh.connect(last, first);
            Ok(first)
        }
        _ => Err(TessError::DegenerateOutline {
            outline: outline.id,
            reason: DegenerateReason::TooFewVertices(n),
        }),
    }
}
