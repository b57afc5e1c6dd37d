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

use std::ops::{Add, Sub};

use crate::numeric::scalar::Scalar;

/// A 3D coordinate. Only `x` and `y` take part in the 2D topology; `z` is
/// carried through for depth ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn new_2d(x: T, y: T) -> Self {
        Self { x, y, z: T::zero() }
    }

    pub fn distance_squared_to(&self, other: &Self) -> T {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Coordinate-wise equality within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: T) -> bool {
        (self.x - other.x).abs() < eps
            && (self.y - other.y).abs() < eps
            && (self.z - other.z).abs() < eps
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        let h = T::half();
        Self {
            x: (self.x + other.x) * h,
            y: (self.y + other.y) * h,
            z: (self.z + other.z) * h,
        }
    }
}

impl<T: Scalar> From<[T; 2]> for Point<T> {
    fn from(c: [T; 2]) -> Self {
        Point::new_2d(c[0], c[1])
    }
}

impl<T: Scalar> From<[T; 3]> for Point<T> {
    fn from(c: [T; 3]) -> Self {
        Point::new(c[0], c[1], c[2])
    }
}

impl<T: Scalar> Add for Point<T> {
    type Output = Point<T>;
    fn add(self, rhs: Point<T>) -> Point<T> {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Point<T> {
    type Output = Point<T>;
    fn sub(self, rhs: Point<T>) -> Point<T> {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
