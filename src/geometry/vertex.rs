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

use crate::{geometry::point::Point, numeric::scalar::Scalar};

/// An outline control point.
///
/// `on_curve` is false for the control point of a quadratic Bézier segment.
/// Plain triangulation passes it through untouched; only curve extraction
/// reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<T: Scalar> {
    pub point: Point<T>,
    pub on_curve: bool,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(point: Point<T>, on_curve: bool) -> Self {
        Self { point, on_curve }
    }

    pub fn on_curve(x: T, y: T) -> Self {
        Self::new(Point::new_2d(x, y), true)
    }

    pub fn off_curve(x: T, y: T) -> Self {
        Self::new(Point::new_2d(x, y), false)
    }

    #[inline]
    pub fn x(&self) -> T {
        self.point.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.point.y
    }
}
