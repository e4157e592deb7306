// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hooks for selection, hover and click events.

use tracing::info;

use crate::PointPayload;

/// Receives interaction events relayed from the engine.
///
/// Every method has a default that only logs, so implementors override just what they need.
/// `None` means the pointer was not close enough to any point.
pub trait InteractionHandler {
    /// A lasso or box selection finished with these point indices.
    fn on_select(&mut self, indices: &[usize]) {
        info!(count = indices.len(), ?indices, "selection ended");
    }

    /// A point was clicked.
    fn on_click(&mut self, point: Option<&PointPayload>) {
        info!(?point, "point clicked");
    }

    /// The pointer hovered over a point.
    fn on_hover(&mut self, point: Option<&PointPayload>) {
        info!(?point, "point hovered");
    }
}

/// A handler that only logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingHandler;

impl InteractionHandler for LoggingHandler {}

impl<T: InteractionHandler + ?Sized> InteractionHandler for Box<T> {
    fn on_select(&mut self, indices: &[usize]) {
        (**self).on_select(indices);
    }

    fn on_click(&mut self, point: Option<&PointPayload>) {
        (**self).on_click(point);
    }

    fn on_hover(&mut self, point: Option<&PointPayload>) {
        (**self).on_hover(point);
    }
}
