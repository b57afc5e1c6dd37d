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

use outline_tess::{DegenerateReason, Outline, TessError, Vertex, Winding};

fn square(size: f64) -> Outline<f64> {
    Outline::from_xy(&[[0.0, 0.0], [size, 0.0], [size, size], [0.0, size]])
}

#[test]
fn test_winding_from_signed_area() {
    let ccw = square(2.0);
    assert_eq!(ccw.winding(), Ok(Winding::Ccw));
    assert_eq!(ccw.area(), 4.0);

    let cw = ccw.reversed();
    assert_eq!(cw.winding(), Ok(Winding::Cw));
    assert_eq!(cw.area(), -4.0);
    assert_eq!(Winding::Cw.reversed(), Winding::Ccw);
}

#[test]
fn test_two_vertices_are_degenerate() {
    let line = Outline::<f64>::from_xy(&[[0.0, 0.0], [1.0, 0.0]]);
    assert_eq!(
        line.winding_of(7),
        Err(TessError::DegenerateOutline {
            outline: 7,
            reason: DegenerateReason::TooFewVertices(2),
        })
    );
}

#[test]
fn test_collinear_vertices_are_degenerate() {
    let flat = Outline::<f64>::from_xy(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
    assert_eq!(
        flat.winding(),
        Err(TessError::DegenerateOutline {
            outline: 0,
            reason: DegenerateReason::ZeroArea,
        })
    );
}

#[test]
fn test_dedup_drops_repeats_and_closing_point() {
    let outline = Outline::<f64>::from_vertices(vec![
        Vertex::on_curve(0.0, 0.0),
        Vertex::on_curve(0.0, 0.0),
        Vertex::on_curve(4.0, 0.0),
        Vertex::off_curve(4.0, 4.0),
        Vertex::on_curve(4.0, 4.0),
        Vertex::on_curve(0.0, 4.0),
        Vertex::on_curve(0.0, 0.0),
    ]);
    let clean = outline.dedup(1e-9);
    assert_eq!(clean.len(), 4);
    // The on-curve flag wins when an off-curve point collapses onto it.
    assert!(clean.vertices().iter().all(|v| v.on_curve));
    assert_eq!(clean.area(), 16.0);
}

#[test]
fn test_implied_on_curve_midpoints() {
    let outline = Outline::<f64>::from_vertices(vec![
        Vertex::on_curve(0.0, 0.0),
        Vertex::off_curve(2.0, -1.0),
        Vertex::off_curve(4.0, 0.0),
        Vertex::on_curve(4.0, 4.0),
    ]);
    let full = outline.with_implied_on_curve();
    assert_eq!(full.len(), 5);
    let mid = full.vertices()[2];
    assert!(mid.on_curve);
    assert_eq!((mid.x(), mid.y()), (3.0, -0.5));
}

#[test]
fn test_bbox() {
    let b = square(3.0).bbox();
    assert_eq!((b.width(), b.height()), (3.0, 3.0));
}

#[test]
fn test_built_vertex_by_vertex() {
    let mut outline = Outline::new();
    assert!(outline.is_empty());
    for [x, y] in [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]] {
        outline.add_vertex(Vertex::on_curve(x, y));
    }
    assert_eq!(outline, square(2.0));
    assert_eq!(outline.winding(), Ok(Winding::Ccw));
}
