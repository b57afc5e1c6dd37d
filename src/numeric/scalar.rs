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

use std::fmt::Debug;

use num_traits::{Float, NumCast};

/// Floating-point coordinate type used throughout the crate.
///
/// The tolerances are absolute and meant for outlines expressed in font
/// units or pixels; callers with very large or very small coordinates should
/// normalise their input first.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    /// Two coordinates closer than this on every axis are the same point.
    fn point_merge_threshold() -> Self;

    /// Twice the signed area at or below which a contour counts as flat.
    fn area_threshold() -> Self;

    /// In-circle determinant values at or below this are treated as
    /// "on the circle", never "inside".
    fn in_circle_threshold() -> Self;

    fn from_f64(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::zero)
    }

    fn half() -> Self {
        Self::from_f64(0.5)
    }
}

impl Scalar for f32 {
    fn point_merge_threshold() -> Self {
        1e-5
    }

    fn area_threshold() -> Self {
        1e-6
    }

    fn in_circle_threshold() -> Self {
        f32::EPSILON
    }
}

impl Scalar for f64 {
    fn point_merge_threshold() -> Self {
        1e-9
    }

    fn area_threshold() -> Self {
        1e-12
    }

    fn in_circle_threshold() -> Self {
        f64::EPSILON
    }
}
