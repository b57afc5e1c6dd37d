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

//! Triangulation of glyph and vector outlines for GPU rendering.
//!
//! A shape is one boundary contour plus any number of hole contours, each an
//! ordered list of on-curve and off-curve control points. The contours are
//! copied into an index arena of half-edges, holes are bridged into the
//! boundary ring, and the ring is cut one ear at a time, preferring ears
//! whose circumcircle is empty. Every output triangle records which of its
//! corners lie on a boundary contour.
//!
//! ```
//! use outline_tess::{Outline, Triangulate2D, Triangulator};
//!
//! let square = Outline::from_xy(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
//! let hole = Outline::from_xy(&[[3.0, 3.0], [3.0, 7.0], [7.0, 7.0], [7.0, 3.0]]);
//!
//! let out = Triangulator::<f64>::new().triangulate(&square, &[hole]);
//! assert!(out.is_complete());
//! assert_eq!(out.triangles.len(), 8);
//! assert!((out.area() - 84.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod operations;

pub use error::{DegenerateReason, Result, TessError};
pub use geometry::{Aabb, Outline, Point, Vertex, Winding};
pub use numeric::scalar::Scalar;
pub use operations::triangulation::{
    Shape, Tessellation, Triangle, Triangulate2D, Triangulator, TriangulatorConfig,
    triangulate_shapes,
};
