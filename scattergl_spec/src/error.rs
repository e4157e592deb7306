// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::Channel;

/// Errors raised for malformed input data, encodings or interaction modes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required coordinate sequence is missing.
    #[error("input data should contain `x` and `y` attributes (missing `{0}`)")]
    MissingCoordinate(&'static str),
    /// The coordinate sequences have different lengths.
    #[error("`x` and `y` must have the same length (x: {x}, y: {y})")]
    CoordinateLength {
        /// Length of `x`.
        x: usize,
        /// Length of `y`.
        y: usize,
    },
    /// A per-point encoding does not have one entry per point.
    #[error("length of `{channel}` encoding is {len}, needs to be {expected}")]
    EncodingLength {
        /// The offending channel.
        channel: Channel,
        /// Length of the provided array.
        len: usize,
        /// Number of points.
        expected: usize,
    },
    /// The interaction mode is not one of `lasso`, `pan` or `box`.
    #[error("`{0}` needs to be one of lasso, pan or box")]
    InteractionMode(String),
}
