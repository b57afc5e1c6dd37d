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

use log::{debug, warn};

use crate::{
    error::{Result, TessError},
    geometry::outline::Outline,
    mesh::{basic_types::Mesh, edge_loop::Loop, half_edge::EdgeKind, outline::MeshOutline},
    numeric::scalar::Scalar,
    operations::triangulation::{Triangle, Triangulate2D, curves::extract_curve_triangles},
};

#[derive(Clone, Debug)]
pub struct TriangulatorConfig<T: Scalar> {
    /// Reject ears whose circumcircle holds another ring vertex.
    pub delaunay: bool,
    /// Drop repeated consecutive points before building loops.
    pub merge_duplicates: bool,
    /// Emit curve triangles for off-curve points.
    pub curve_triangles: bool,
    pub sharpness: T,
    /// Failed cut attempts tolerated since the last success, as a multiple
    /// of the ring size. After one full sweep the in-circle check is relaxed
    /// to a plain containment check, so values below 2 leave no room for it.
    pub stall_factor: usize,
}

impl<T: Scalar> Default for TriangulatorConfig<T> {
    fn default() -> Self {
        Self {
            delaunay: true,
            merge_duplicates: true,
            curve_triangles: false,
            sharpness: T::half(),
            stall_factor: 2,
        }
    }
}

impl<T: Scalar> TriangulatorConfig<T> {
    pub fn with_delaunay(mut self, delaunay: bool) -> Self {
        self.delaunay = delaunay;
        self
    }

    pub fn with_merge_duplicates(mut self, merge: bool) -> Self {
        self.merge_duplicates = merge;
        self
    }

    pub fn with_curve_triangles(mut self, curves: bool) -> Self {
        self.curve_triangles = curves;
        self
    }

    pub fn with_sharpness(mut self, sharpness: T) -> Self {
        self.sharpness = sharpness;
        self
    }

    pub fn with_stall_factor(mut self, factor: usize) -> Self {
        self.stall_factor = factor;
        self
    }
}

/// Result of triangulating one shape: every triangle that could be produced
/// and every per-outline failure met on the way.
#[derive(Clone, Debug, Default)]
pub struct Tessellation<T: Scalar> {
    pub triangles: Vec<Triangle<T>>,
    pub errors: Vec<TessError>,
}

impl<T: Scalar> Tessellation<T> {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Sum of the signed triangle areas.
    pub fn area(&self) -> T {
        self.triangles.iter().fold(T::zero(), |acc, t| acc + t.area())
    }

    /// Triangles filling the interior, without curve triangles.
    pub fn fill_triangles(&self) -> impl Iterator<Item = &Triangle<T>> {
        self.triangles.iter().filter(|t| !t.is_curve())
    }
}

/// One boundary contour and the holes cut out of it.
#[derive(Clone, Debug, Default)]
pub struct Shape<T: Scalar> {
    pub boundary: Outline<T>,
    pub holes: Vec<Outline<T>>,
}

impl<T: Scalar> Shape<T> {
    pub fn new(boundary: Outline<T>) -> Self {
        Self {
            boundary,
            holes: Vec::new(),
        }
    }

    pub fn with_hole(mut self, hole: Outline<T>) -> Self {
        self.holes.push(hole);
        self
    }
}

/// Turns outlines into loops and loops into triangles.
///
/// Outlines are numbered in the order they are added; that number is the
/// `outline` reported by every [`TessError`]. Each call to
/// [`Triangulator::generate`] consumes the pending loops and leaves the
/// triangulator empty.
#[derive(Clone, Debug)]
pub struct Triangulator<T: Scalar> {
    config: TriangulatorConfig<T>,
    mesh: Mesh<T>,
    loops: Vec<Loop<T>>,
    pending: Vec<Triangle<T>>,
    errors: Vec<TessError>,
    outline_count: usize,
}

impl<T: Scalar> Default for Triangulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Triangulator<T> {
    pub fn new() -> Self {
        Self::with_config(TriangulatorConfig::default())
    }

    pub fn with_config(config: TriangulatorConfig<T>) -> Self {
        Self {
            config,
            mesh: Mesh::new(),
            loops: Vec::new(),
            pending: Vec::new(),
            errors: Vec::new(),
            outline_count: 0,
        }
    }

    pub fn config(&self) -> &TriangulatorConfig<T> {
        &self.config
    }

    pub fn mesh(&self) -> &Mesh<T> {
        &self.mesh
    }

    pub fn loops(&self) -> &[Loop<T>] {
        &self.loops
    }

    pub fn reset(&mut self) {
        self.mesh = Mesh::new();
        self.loops.clear();
        self.pending.clear();
        self.errors.clear();
        self.outline_count = 0;
    }

    /// Adds a contour without saying what it is.
    ///
    /// A contour with a vertex inside an existing loop is bridged into that
    /// loop as a hole; any other contour opens a new boundary loop. Errors
    /// are returned and also kept for the next [`Triangulator::generate`].
    pub fn add_outline(&mut self, outline: &Outline<T>) -> Result<()> {
        let id = self.next_id();
        let outline = self.clean(outline);
        let container = self.loops.iter().position(|l| {
            outline
                .vertices()
                .iter()
                .any(|v| l.check_inside(&self.mesh, &v.point))
        });
        let res = match container {
            Some(idx) => self.bridge_hole(idx, id, &outline),
            None => self.open_boundary(id, &outline).map(|_| ()),
        };
        self.record(res)
    }

    /// Adds a boundary contour and returns the index of its loop.
    pub fn add_boundary(&mut self, outline: &Outline<T>) -> Result<usize> {
        let id = self.next_id();
        let outline = self.clean(outline);
        let res = self.open_boundary(id, &outline);
        self.record(res)
    }

    /// Bridges `outline` into loop `loop_idx` as a hole. A hole with no
    /// vertex inside the loop has nowhere to attach and is reported as
    /// [`TessError::BridgeNotFound`].
    pub fn add_hole(&mut self, loop_idx: usize, outline: &Outline<T>) -> Result<()> {
        let id = self.next_id();
        let outline = self.clean(outline);
        let contained = self.loops.get(loop_idx).is_some_and(|l| {
            outline
                .vertices()
                .iter()
                .any(|v| l.check_inside(&self.mesh, &v.point))
        });
        let res = if contained {
            self.bridge_hole(loop_idx, id, &outline)
        } else {
            Err(TessError::BridgeNotFound { outline: id })
        };
        self.record(res)
    }

    /// Cuts every pending loop down to nothing and returns the triangles,
    /// together with every error recorded since the last call.
    pub fn generate(&mut self) -> Tessellation<T> {
        for l in &self.loops {
            for &v in &l.initial().vertices {
                self.mesh.mark_boundary_contained(v);
            }
        }

        let mut triangles = std::mem::take(&mut self.pending);
        let mut errors = std::mem::take(&mut self.errors);
        let mut loops = std::mem::take(&mut self.loops);
        for (idx, l) in loops.iter_mut().enumerate() {
            match cut_loop(&mut self.mesh, l, &self.config, &mut triangles) {
                Ok(count) => debug!("loop {idx} finished with {count} triangles"),
                Err(e) => {
                    warn!("loop {idx}: {e}");
                    errors.push(e);
                }
            }
        }

        self.reset();
        Tessellation { triangles, errors }
    }

    fn next_id(&mut self) -> usize {
        let id = self.outline_count;
        self.outline_count += 1;
        id
    }

    fn clean(&self, outline: &Outline<T>) -> Outline<T> {
        let outline = if self.config.merge_duplicates {
            outline.dedup(T::point_merge_threshold())
        } else {
            outline.clone()
        };
        if self.config.curve_triangles {
            outline.with_implied_on_curve()
        } else {
            outline
        }
    }

    fn record<R>(&mut self, res: Result<R>) -> Result<R> {
        if let Err(e) = &res {
            warn!("skipping outline: {e}");
            self.errors.push(e.clone());
        }
        res
    }

    fn prepare(&mut self, id: usize, outline: &Outline<T>, hole: bool) -> Result<MeshOutline> {
        let mesh_outline = self.mesh.add_outline(outline, id)?;
        if !self.config.curve_triangles {
            return Ok(mesh_outline);
        }
        extract_curve_triangles(
            &mut self.mesh,
            &mesh_outline,
            hole,
            self.config.sharpness,
            &mut self.pending,
        )
    }

    fn open_boundary(&mut self, id: usize, outline: &Outline<T>) -> Result<usize> {
        let mesh_outline = self.prepare(id, outline, false)?;
        let n = mesh_outline.len();
        let l = Loop::create(&mut self.mesh, mesh_outline, EdgeKind::Boundary)?;
        self.loops.push(l);
        debug!("outline {id} opened loop {} with {n} vertices", self.loops.len() - 1);
        Ok(self.loops.len() - 1)
    }

    fn bridge_hole(&mut self, loop_idx: usize, id: usize, outline: &Outline<T>) -> Result<()> {
        let mesh_outline = self.prepare(id, outline, true)?;
        let Some(l) = self.loops.get_mut(loop_idx) else {
            return Err(TessError::BridgeNotFound { outline: id });
        };
        l.add_constraint_curve(&mut self.mesh, &mesh_outline)?;
        debug!("outline {id} bridged into loop {loop_idx}");
        Ok(())
    }
}

impl<T: Scalar> Triangulate2D<T> for Triangulator<T> {
    /// Triangulates `boundary` minus `holes`. The boundary is outline 0 and
    /// the holes follow in order. Holes that cannot be bridged are skipped
    /// and reported; the rest of the shape is still triangulated.
    fn triangulate(&mut self, boundary: &Outline<T>, holes: &[Outline<T>]) -> Tessellation<T> {
        self.reset();
        match self.add_boundary(boundary) {
            Ok(idx) => {
                for hole in holes {
                    let _ = self.add_hole(idx, hole);
                }
            }
            Err(_) => {
                // Holes of a missing boundary are dropped with it.
                self.outline_count += holes.len();
            }
        }
        self.generate()
    }
}

/// Triangulates independent shapes, each in its own arena. A failure in one
/// shape never affects another.
pub fn triangulate_shapes<T: Scalar>(
    shapes: &[Shape<T>],
    config: &TriangulatorConfig<T>,
) -> Vec<Tessellation<T>> {
    shapes
        .iter()
        .map(|shape| {
            Triangulator::with_config(config.clone()).triangulate(&shape.boundary, &shape.holes)
        })
        .collect()
}

/// Drives [`Loop::cut`] until the loop is exhausted. Returns the number of
/// triangles emitted.
fn cut_loop<T: Scalar>(
    mesh: &mut Mesh<T>,
    l: &mut Loop<T>,
    config: &TriangulatorConfig<T>,
    out: &mut Vec<Triangle<T>>,
) -> Result<usize> {
    let mut size = l.size(mesh);
    let mut attempts = 0usize;
    let mut count = 0usize;

    while !l.is_simplex(mesh) {
        let delaunay = config.delaunay && attempts <= size;
        attempts += 1;
        if let Some(tri) = l.cut(mesh, delaunay) {
            out.push(tri);
            count += 1;
            size -= 1;
            attempts = 0;
        } else if attempts > size * config.stall_factor {
            return Err(TessError::EarCutStalled {
                outline: l.initial().id,
                attempts,
                remaining: size,
            });
        }
    }

    if let Some(tri) = l.cut(mesh, config.delaunay) {
        out.push(tri);
        count += 1;
    }
    Ok(count)
}
