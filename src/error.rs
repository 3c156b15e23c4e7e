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

use crate::mesh::ids::PointId;

pub type Result<T> = std::result::Result<T, Error>;

/// crate specific Error enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Input point {index} has a coordinate that is not a finite f64")]
    NonFiniteCoordinate { index: usize },
    #[error("The puck radius must be finite and positive, got {0}")]
    InvalidPuckRadius(f64),
    #[error("The canvas must have finite non-negative bounds, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
    #[error("No vertex with id {0} exists in the mesh")]
    UnknownVertex(PointId),
    #[error("The start vertex {0} has no incident edges")]
    IsolatedStart(PointId),
    #[error("The puck at {start} overlaps the puck at {neighbor}")]
    IllegalStart { start: PointId, neighbor: PointId },
    #[error("No passable route reaches the boundary of the mesh")]
    NoPathFound,
    #[error("The search exceeded the maximum depth of {0} triangles")]
    DepthLimitExceeded(usize),
}
