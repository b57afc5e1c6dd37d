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

//! Quadratic-curve extraction.
//!
//! Each off-curve control point, together with its two on-curve neighbours,
//! becomes a curve triangle the renderer shades with the Loop–Blinn
//! `u² - v` test. The remaining polygon, handed to the ear cutter, skips the
//! control points of arcs that bulge out of the filled region.

use crate::{
    error::{DegenerateReason, Result, TessError},
    geometry::outline::Winding,
    kernel::orientation::{orient2d, signed_area2},
    mesh::{basic_types::Mesh, outline::MeshOutline},
    numeric::scalar::Scalar,
    operations::triangulation::Triangle,
};

/// Emits one curve triangle per off-curve point of `outline` into `sink`
/// and returns the polygon left for the ear cutter.
///
/// On-curve points next to an off-curve point, and the off-curve point
/// itself, are marked boundary-contained. Control points of outward arcs on
/// boundary contours are dropped from the returned polygon; those of holes
/// and inward arcs are kept so the fill reaches the curve.
pub fn extract_curve_triangles<T: Scalar>(
    mesh: &mut Mesh<T>,
    outline: &MeshOutline,
    hole: bool,
    sharpness: T,
    sink: &mut Vec<Triangle<T>>,
) -> Result<MeshOutline> {
    let n = outline.len();
    let ids = &outline.vertices;
    let mut inner = Vec::with_capacity(n);

    for i in 0..n {
        let (i0, i1, i2) = (ids[(i + n - 1) % n], ids[i], ids[(i + 1) % n]);

        if mesh.vertices[i1].is_on_curve() {
            if !mesh.vertices[i0].is_on_curve() || !mesh.vertices[i2].is_on_curve() {
                mesh.mark_boundary_contained(i1);
            }
            inner.push(i1);
            continue;
        }

        let (v0, v1, v2) = (mesh.vertices[i0].vertex, mesh.vertices[i1].vertex, mesh.vertices[i2].vertex);
        let o = orient2d(&v0.point, &v1.point, &v2.point);
        if o == T::zero() {
            // Control point on the chord: a straight segment.
            continue;
        }
        for v in [i0, i1, i2] {
            mesh.mark_boundary_contained(v);
        }

        let outward = (o > T::zero()) == (outline.winding == Winding::Ccw);
        let sign = if hole || !outward { -T::one() } else { T::one() };
        let lift = T::from_f64(0.1);
        let tc0 = [T::zero(), sign * lift];
        let tc1 = [T::half(), sign * (sharpness + lift)];
        let tc2 = [T::one(), sign * lift];

        let mut tri = if o > T::zero() {
            Triangle::new([v0, v1, v2], [true; 3])
        } else {
            Triangle::new([v2, v1, v0], [true; 3])
        };
        tri.tex_coords = Some(if o > T::zero() { [tc0, tc1, tc2] } else { [tc2, tc1, tc0] });
        sink.push(tri);

        if hole || !outward {
            inner.push(i1);
        }
    }

    let area2 = signed_area2(inner.iter().map(|&v| mesh.vertex_point(v)));
    if inner.len() < 3 {
        return Err(TessError::DegenerateOutline {
            outline: outline.id,
            reason: DegenerateReason::TooFewVertices(inner.len()),
        });
    }
    if area2.abs() <= T::area_threshold() {
        return Err(TessError::DegenerateOutline {
            outline: outline.id,
            reason: DegenerateReason::ZeroArea,
        });
    }
    Ok(MeshOutline {
        id: outline.id,
        vertices: inner,
        winding: if area2 > T::zero() { Winding::Ccw } else { Winding::Cw },
    })
}
