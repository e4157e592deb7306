// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering engine seam.
//!
//! Implementations wrap the GPU visualization engine (in a browser, typically through
//! `wasm-bindgen` bindings). The adapter only ever calls the methods below; the engine's
//! events come back in through [`PlotAdapter::dispatch`](crate::PlotAdapter::dispatch).

use core::fmt;

use scattergl_spec::{Specification, ViewOptions};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A GPU visualization engine driven by declarative specifications.
pub trait RenderEngine {
    /// Attaches the engine's canvas to the host element.
    fn add_to_dom(&mut self);

    /// Initializes the engine with its first specification.
    fn set_specification(&mut self, spec: &Specification);

    /// Replaces the current specification.
    fn update_specification(&mut self, spec: &Specification);

    /// Resizes the drawing canvas.
    fn set_canvas_size(&mut self, width: f64, height: f64);

    /// Changes view options such as the active pointer tool.
    fn set_view_options(&mut self, options: &ViewOptions);

    /// Starts delivering events of `kind`.
    fn subscribe(&mut self, kind: EventKind);

    /// Stops delivering events of `kind`.
    fn unsubscribe(&mut self, kind: EventKind);
}

/// Engine event names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A lasso or box selection finished.
    SelectionEnd,
    /// The pointer moved over the plot.
    PointHovered,
    /// The plot was clicked.
    PointClicked,
}

impl EventKind {
    /// Returns the engine's name for this event.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SelectionEnd => "onSelectionEnd",
            Self::PointHovered => "pointHovered",
            Self::PointClicked => "pointClicked",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The nearest point reported with a hover or click.
///
/// Fields other than `index` and `distance` are kept in `extra` untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PointPayload {
    /// Index of the nearest point, if the engine found one.
    #[serde(default)]
    pub index: Option<usize>,
    /// Pointer-to-point distance in world units.
    #[serde(default)]
    pub distance: Option<f64>,
    /// Any other fields the engine attached.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PointPayload {
    /// Creates a payload for `index` at `distance`.
    pub fn new(index: usize, distance: f64) -> Self {
        Self {
            index: Some(index),
            distance: Some(distance),
            extra: Map::new(),
        }
    }
}

/// An event delivered by the engine.
///
/// Deserializes from `{"type": "<engine name>", "data": ...}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EngineEvent {
    /// Indices of the points inside a finished selection.
    #[serde(rename = "onSelectionEnd")]
    SelectionEnd(Vec<usize>),
    /// Hover payload.
    #[serde(rename = "pointHovered")]
    PointHovered(PointPayload),
    /// Click payload.
    #[serde(rename = "pointClicked")]
    PointClicked(PointPayload),
}

impl EngineEvent {
    /// Returns which subscription this event belongs to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::SelectionEnd(_) => EventKind::SelectionEnd,
            Self::PointHovered(_) => EventKind::PointHovered,
            Self::PointClicked(_) => EventKind::PointClicked,
        }
    }

    /// Decodes an event from the engine's JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
