// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the plot adapter.

use scattergl_spec::ValidationError;

/// Convenience alias for results returned by the adapter's fallible entry points.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The plot could not be attached to a host element.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// The selector did not match anything on the host surface.
    #[error("`{0}` is neither a valid selector nor an element on the page")]
    Unresolved(String),
    /// The target exists but is not an element that can host a canvas.
    #[error("`{0}` does not refer to an element")]
    NotAnElement(String),
}

/// Any error surfaced by [`PlotAdapter`](crate::PlotAdapter).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Attaching to the host failed.
    #[error(transparent)]
    Binding(#[from] BindingError),
    /// Input data, an encoding or an interaction mode was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A JSON payload could not be decoded.
    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}
