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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TessError>;

/// Why a contour could not be turned into a loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// Fewer than three vertices.
    TooFewVertices(usize),
    /// All vertices collinear or coincident.
    ZeroArea,
}

impl std::fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateReason::TooFewVertices(n) => write!(f, "{n} vertices, need at least 3"),
            DegenerateReason::ZeroArea => write!(f, "zero area"),
        }
    }
}

/// Per-outline triangulation failures. None of them aborts a batch; the
/// driver records them next to the triangles it did produce.
///
/// `outline` is the zero-based index of the contour in the order it was
/// handed to the driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TessError {
    #[error("outline {outline} is degenerate ({reason})")]
    DegenerateOutline {
        outline: usize,
        reason: DegenerateReason,
    },
    #[error("no bridge vertex found for hole outline {outline}")]
    BridgeNotFound { outline: usize },
    #[error(
        "ear cutting stalled on outline {outline} after {attempts} attempts with {remaining} vertices left"
    )]
    EarCutStalled {
        outline: usize,
        attempts: usize,
        remaining: usize,
    },
}

impl TessError {
    /// Index of the contour the error refers to.
    pub fn outline(&self) -> usize {
        match self {
            TessError::DegenerateOutline { outline, .. }
            | TessError::BridgeNotFound { outline }
            | TessError::EarCutStalled { outline, .. } => *outline,
        }
    }

    /// Whether the rest of the shape survives this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TessError::EarCutStalled { .. })
    }
}
