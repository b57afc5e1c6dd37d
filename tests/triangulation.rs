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

use outline_tess::{
    DegenerateReason, Outline, Point, Shape, TessError, Triangle, Triangulate2D, Triangulator,
    TriangulatorConfig, Vertex, triangulate_shapes,
};

fn square(x0: f64, y0: f64, size: f64) -> Outline<f64> {
    Outline::from_xy(&[
        [x0, y0],
        [x0 + size, y0],
        [x0 + size, y0 + size],
        [x0, y0 + size],
    ])
}

/// Clockwise square hole.
fn square_hole(x0: f64, y0: f64, size: f64) -> Outline<f64> {
    square(x0, y0, size).reversed()
}

fn centroid(t: &Triangle<f64>) -> Point<f64> {
    let [a, b, c] = t.points();
    Point::new_2d((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}

#[test]
fn test_square_makes_two_triangles() {
    let out = Triangulator::new().triangulate(&square(0.0, 0.0, 10.0), &[]);
    assert!(out.is_complete());
    assert_eq!(out.triangles.len(), 2);
    assert!(out.triangles.iter().all(|t| t.is_ccw()));
    assert!(out.triangles.iter().all(|t| t.boundary == [true; 3]));
    assert_eq!(out.area(), 100.0);
}

#[test]
fn test_clockwise_boundary_is_reoriented() {
    let out = Triangulator::new().triangulate(&square(0.0, 0.0, 10.0).reversed(), &[]);
    assert!(out.is_complete());
    assert_eq!(out.triangles.len(), 2);
    assert!(out.triangles.iter().all(|t| t.is_ccw()));
    assert_eq!(out.area(), 100.0);
}

#[test]
fn test_square_with_hole() {
    let out = Triangulator::new().triangulate(&square(0.0, 0.0, 10.0), &[square_hole(3.0, 3.0, 4.0)]);
    assert!(out.is_complete(), "{:?}", out.errors);
    // 4 + 4 vertices plus the two bridge duplicates.
    assert_eq!(out.triangles.len(), 8);
    assert!(out.triangles.iter().all(|t| t.is_ccw()));
    assert!((out.area() - 84.0).abs() < 1e-9);

    for t in &out.triangles {
        let c = centroid(t);
        let in_hole = c.x > 3.0 && c.x < 7.0 && c.y > 3.0 && c.y < 7.0;
        assert!(!in_hole, "triangle {t:?} covers the hole");

        for (v, &flag) in t.vertices.iter().zip(&t.boundary) {
            let on_outer = v.x() == 0.0 || v.x() == 10.0 || v.y() == 0.0 || v.y() == 10.0;
            assert_eq!(flag, on_outer);
        }
    }
}

#[test]
fn test_hole_winding_does_not_matter() {
    let cw = Triangulator::new().triangulate(&square(0.0, 0.0, 10.0), &[square_hole(3.0, 3.0, 4.0)]);
    let ccw = Triangulator::new().triangulate(&square(0.0, 0.0, 10.0), &[square(3.0, 3.0, 4.0)]);
    assert!(ccw.is_complete());
    assert_eq!(cw.triangles, ccw.triangles);
}

#[test]
fn test_two_holes() {
    let out = Triangulator::new().triangulate(
        &square(0.0, 0.0, 20.0),
        &[square_hole(3.0, 3.0, 4.0), square_hole(13.0, 13.0, 4.0)],
    );
    assert!(out.is_complete(), "{:?}", out.errors);
    assert_eq!(out.triangles.len(), 4 + 4 + 4 + 2 * 2 - 2);
    assert!((out.area() - (400.0 - 32.0)).abs() < 1e-9);
}

#[test]
fn test_hole_behind_another_hole() {
    // Seen from the corner at the origin, the small hole sits right behind
    // the first one; its bridge has to come from elsewhere.
    let out = Triangulator::new().triangulate(
        &square(0.0, 0.0, 20.0),
        &[square_hole(3.0, 3.0, 4.0), square_hole(9.0, 9.0, 2.0)],
    );
    assert!(out.is_complete(), "{:?}", out.errors);
    assert_eq!(out.triangles.len(), 4 + 4 + 4 + 2 * 2 - 2);
    assert!(out.triangles.iter().all(|t| t.is_ccw()));
    assert!((out.area() - (400.0 - 16.0 - 4.0)).abs() < 1e-9);

    for t in &out.triangles {
        let c = centroid(t);
        let in_first = c.x > 3.0 && c.x < 7.0 && c.y > 3.0 && c.y < 7.0;
        let in_second = c.x > 9.0 && c.x < 11.0 && c.y > 9.0 && c.y < 11.0;
        assert!(!in_first && !in_second, "triangle {t:?} covers a hole");
    }
}

#[test]
fn test_degenerate_boundary_yields_nothing() {
    let line = Outline::from_xy(&[[0.0, 0.0], [1.0, 0.0]]);
    let out = Triangulator::new().triangulate(&line, &[]);
    assert!(out.triangles.is_empty());
    assert_eq!(
        out.errors,
        vec![TessError::DegenerateOutline {
            outline: 0,
            reason: DegenerateReason::TooFewVertices(2),
        }]
    );

    let flat = Outline::from_xy(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
    let out = Triangulator::new().triangulate(&flat, &[]);
    assert!(out.triangles.is_empty());
    assert_eq!(
        out.errors,
        vec![TessError::DegenerateOutline {
            outline: 0,
            reason: DegenerateReason::ZeroArea,
        }]
    );
}

#[test]
fn test_degenerate_hole_is_skipped() {
    let sliver = Outline::from_xy(&[[4.0, 4.0], [5.0, 5.0]]);
    let out = Triangulator::new().triangulate(
        &square(0.0, 0.0, 10.0),
        &[sliver, square_hole(3.0, 3.0, 4.0)],
    );
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].outline(), 1);
    assert!(out.errors[0].is_recoverable());
    // The second hole still made it in.
    assert_eq!(out.triangles.len(), 8);
    assert!((out.area() - 84.0).abs() < 1e-9);
}

#[test]
fn test_hole_outside_boundary_is_not_bridged() {
    let out = Triangulator::new().triangulate(&square(0.0, 0.0, 10.0), &[square_hole(20.0, 20.0, 4.0)]);
    assert_eq!(out.errors, vec![TessError::BridgeNotFound { outline: 1 }]);
    assert_eq!(out.triangles.len(), 2);
    assert_eq!(out.area(), 100.0);
}

#[test]
fn test_repeated_points_are_merged() {
    let outline = Outline::from_xy(&[
        [0.0, 0.0],
        [10.0, 0.0],
        [10.0, 0.0],
        [10.0, 10.0],
        [0.0, 10.0],
        [0.0, 0.0],
    ]);
    let out = Triangulator::new().triangulate(&outline, &[]);
    assert!(out.is_complete());
    assert_eq!(out.triangles.len(), 2);
}

#[test]
fn test_triangulation_is_deterministic() {
    let boundary = square(0.0, 0.0, 20.0);
    let holes = [square_hole(3.0, 3.0, 4.0), square_hole(13.0, 13.0, 4.0)];
    let first = Triangulator::new().triangulate(&boundary, &holes);
    let second = Triangulator::new().triangulate(&boundary, &holes);
    assert_eq!(first.triangles, second.triangles);
}

#[test]
fn test_without_delaunay_check() {
    let config = TriangulatorConfig::default().with_delaunay(false);
    let out = Triangulator::with_config(config)
        .triangulate(&square(0.0, 0.0, 10.0), &[square_hole(3.0, 3.0, 4.0)]);
    assert!(out.is_complete());
    assert_eq!(out.triangles.len(), 8);
    assert!(out.triangles.iter().all(|t| t.is_ccw()));
    assert!((out.area() - 84.0).abs() < 1e-9);
}

#[test]
fn test_add_outline_classifies_holes() {
    let mut tri = Triangulator::new();
    tri.add_outline(&square(0.0, 0.0, 10.0)).unwrap();
    tri.add_outline(&square(3.0, 3.0, 4.0)).unwrap();
    // A separate island, like the dot of an "i".
    tri.add_outline(&square(20.0, 0.0, 2.0)).unwrap();
    assert_eq!(tri.loops().len(), 2);

    let out = tri.generate();
    assert!(out.is_complete());
    assert_eq!(out.triangles.len(), 8 + 2);
    assert!((out.area() - 88.0).abs() < 1e-9);
    assert!(tri.loops().is_empty());
}

#[test]
fn test_island_inside_hole_opens_new_loop() {
    let mut tri = Triangulator::new();
    tri.add_outline(&square(0.0, 0.0, 10.0)).unwrap();
    tri.add_outline(&square_hole(2.0, 2.0, 6.0)).unwrap();
    tri.add_outline(&square(4.0, 4.0, 2.0)).unwrap();
    assert_eq!(tri.loops().len(), 2);

    let out = tri.generate();
    assert!(out.is_complete(), "{:?}", out.errors);
    assert!((out.area() - (100.0 - 36.0 + 4.0)).abs() < 1e-9);
}

#[test]
fn test_stall_is_reported_per_outline() {
    // No retries at all: the first rejected ear stalls its loop.
    let config = TriangulatorConfig::default().with_stall_factor(0);
    let mut tri = Triangulator::with_config(config);
    tri.add_outline(&square(0.0, 0.0, 10.0)).unwrap();
    tri.add_outline(&square(20.0, 0.0, 10.0)).unwrap();
    tri.add_outline(&square_hole(23.0, 3.0, 4.0)).unwrap();

    let out = tri.generate();
    // The first square is unaffected by the second one failing.
    assert_eq!(out.triangles.len(), 2);
    assert_eq!(out.area(), 100.0);
    assert_eq!(
        out.errors,
        vec![TessError::EarCutStalled {
            outline: 1,
            attempts: 1,
            remaining: 10,
        }]
    );
    assert!(!out.errors[0].is_recoverable());
}

#[test]
fn test_add_outline_reports_and_records_errors() {
    let mut tri = Triangulator::new();
    let err = tri.add_outline(&Outline::from_xy(&[[0.0, 0.0], [1.0, 1.0]]));
    assert!(matches!(err, Err(TessError::DegenerateOutline { outline: 0, .. })));
    tri.add_outline(&square(0.0, 0.0, 1.0)).unwrap();

    let out = tri.generate();
    assert_eq!(out.triangles.len(), 2);
    assert_eq!(out.errors.len(), 1);
}

#[test]
fn test_batch_isolates_failures() {
    let shapes = vec![
        Shape::new(square(0.0, 0.0, 10.0)),
        Shape::new(Outline::from_xy(&[[0.0, 0.0], [1.0, 0.0]])),
        Shape::new(square(0.0, 0.0, 10.0)).with_hole(square_hole(3.0, 3.0, 4.0)),
    ];
    let results = triangulate_shapes(&shapes, &TriangulatorConfig::default());
    assert_eq!(results.len(), 3);
    assert!(results[0].is_complete());
    assert_eq!(results[0].triangles.len(), 2);
    assert!(results[1].triangles.is_empty());
    assert_eq!(results[1].errors.len(), 1);
    assert!(results[2].is_complete());
    assert_eq!(results[2].triangles.len(), 8);
}

#[test]
fn test_off_curve_flag_passes_through() {
    let outline = Outline::from_vertices(vec![
        Vertex::on_curve(0.0, 0.0),
        Vertex::on_curve(10.0, 0.0),
        Vertex::off_curve(10.0, 10.0),
        Vertex::on_curve(0.0, 10.0),
    ]);
    let out = Triangulator::new().triangulate(&outline, &[]);
    assert_eq!(out.triangles.len(), 2);
    let off = out
        .triangles
        .iter()
        .flat_map(|t| t.vertices)
        .filter(|v| !v.on_curve)
        .count();
    assert!(off >= 1);
}

#[test]
fn test_f32_coordinates() {
    let boundary = Outline::<f32>::from_xy(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
    let hole = Outline::<f32>::from_xy(&[[3.0, 3.0], [3.0, 7.0], [7.0, 7.0], [7.0, 3.0]]);
    let out = Triangulator::new().triangulate(&boundary, &[hole]);
    assert!(out.is_complete());
    assert_eq!(out.triangles.len(), 8);
    assert!((out.area() - 84.0).abs() < 1e-4);
}
