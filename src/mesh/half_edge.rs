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

/// Where a half-edge came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Copied from the outer contour.
    Boundary,
    /// Copied from a hole contour.
    Hole,
    /// Synthesised while bridging a hole or cutting an ear.
    Inner,
}

#[derive(Clone, Debug)]
pub struct HalfEdge {
    pub origin: usize, // vertex this half-edge starts at
    pub next: usize,
    pub prev: usize,
    pub sibling: Option<usize>, // oppositely directed half-edge, if any
    pub kind: EdgeKind,
    pub removed: bool, // detached from the live ring by an ear cut
}

impl HalfEdge {
    pub fn new(origin: usize, kind: EdgeKind) -> Self {
        Self {
            origin,
            next: usize::MAX,
            prev: usize::MAX,
            sibling: None,
            kind,
            removed: false,
        }
    }

    /// Boundary and hole edges are "bound" to the input contours.
    #[inline]
    pub fn is_bound(&self) -> bool {
        matches!(self.kind, EdgeKind::Boundary | EdgeKind::Hole)
    }
}
