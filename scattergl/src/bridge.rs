// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relays engine events to an [`InteractionHandler`].

use serde::Deserialize;
use smallvec::SmallVec;
use tracing::trace;

use crate::{EngineEvent, EventKind, InteractionHandler, PointPayload, RenderEngine};

/// Decides which hover and click payloads count as "on a point".
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HoverFilter {
    /// Forward a payload only if it reports a `distance` no greater than `max_distance`;
    /// otherwise forward `None`.
    DistanceGated {
        /// Largest pointer-to-point distance, in world units, that still counts as a hit.
        max_distance: f64,
    },
    /// Forward every payload as reported by the engine.
    Passthrough,
}

impl HoverFilter {
    /// The hit radius used by [`HoverFilter::default`].
    pub const DEFAULT_MAX_DISTANCE: f64 = 1.5;

    /// Returns `true` if `payload` should reach the handler as a hit.
    pub fn accepts(&self, payload: &PointPayload) -> bool {
        match *self {
            Self::DistanceGated { max_distance } => {
                payload.distance.is_some_and(|d| d <= max_distance)
            }
            Self::Passthrough => true,
        }
    }
}

impl Default for HoverFilter {
    fn default() -> Self {
        Self::DistanceGated {
            max_distance: Self::DEFAULT_MAX_DISTANCE,
        }
    }
}

/// Tracks engine subscriptions and forwards events that belong to one.
///
/// Subscribing is idempotent, so re-subscribing on every render never stacks handlers.
#[derive(Debug, Default)]
pub(crate) struct InteractionBridge {
    filter: HoverFilter,
    subscribed: SmallVec<[EventKind; 3]>,
}

impl InteractionBridge {
    pub(crate) fn new(filter: HoverFilter) -> Self {
        Self {
            filter,
            subscribed: SmallVec::new(),
        }
    }

    pub(crate) fn is_subscribed(&self, kind: EventKind) -> bool {
        self.subscribed.contains(&kind)
    }

    pub(crate) fn subscribe(&mut self, engine: &mut impl RenderEngine, kind: EventKind) {
        if self.is_subscribed(kind) {
            return;
        }
        engine.subscribe(kind);
        self.subscribed.push(kind);
        trace!(%kind, "subscribed");
    }

    /// Unsubscribes from everything.
    pub(crate) fn teardown(&mut self, engine: &mut impl RenderEngine) {
        for kind in self.subscribed.drain(..) {
            engine.unsubscribe(kind);
            trace!(%kind, "unsubscribed");
        }
    }

    /// Forwards `event` to `handler`. Returns `false` if nothing is subscribed to it.
    pub(crate) fn forward(&self, event: EngineEvent, handler: &mut impl InteractionHandler) -> bool {
        let kind = event.kind();
        if !self.is_subscribed(kind) {
            trace!(%kind, "dropping event without a subscription");
            return false;
        }
        match event {
            EngineEvent::SelectionEnd(indices) => handler.on_select(&indices),
            EngineEvent::PointHovered(payload) => handler.on_hover(self.filtered(&payload)),
            EngineEvent::PointClicked(payload) => handler.on_click(self.filtered(&payload)),
        }
        true
    }

    fn filtered<'a>(&self, payload: &'a PointPayload) -> Option<&'a PointPayload> {
        self.filter.accepts(payload).then_some(payload)
    }
}
