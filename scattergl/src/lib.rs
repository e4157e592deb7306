// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scatter-plot component over a GPU visualization engine.
//!
//! [`PlotAdapter`] owns the plot's input data and encodings, turns them into a declarative
//! [`Specification`] (via `scattergl_spec`) and hands that to a [`RenderEngine`]. Drawing,
//! hit-testing and selection all happen inside the engine; this crate only:
//! - derives aspect-corrected axis bounds from the data and the host element's size,
//! - decides whether a render is the first ("set") or a later one ("update"),
//! - relays engine events to an [`InteractionHandler`], and
//! - debounces window resizes into a single canvas resize and specification update.
//!
//! Everything runs on the host's UI thread. The host feeds engine events through
//! [`PlotAdapter::dispatch`] and time through [`PlotAdapter::poll`].
//!
//! ```
//! use kurbo::Size;
//! use scattergl::{EncodingPatch, InputData, LoggingHandler, PlotAdapter};
//! use scattergl::headless::{RecordingEngine, StaticElement};
//!
//! let element = StaticElement::new(Size::new(400.0, 300.0));
//! let mut plot = PlotAdapter::new(element, RecordingEngine::default(), LoggingHandler).unwrap();
//! plot.set_input(InputData::new(vec![1.0, 2.0, 3.0], vec![3.0, 1.0, 2.0]).unwrap());
//! plot.set_state(EncodingPatch::new().with_color(vec![0.1, 0.5, 0.9]));
//! plot.render(None).unwrap();
//! assert_eq!(plot.render_count(), 1);
//! ```

mod adapter;
mod bridge;
mod config;
mod debounce;
mod engine;
mod error;
mod handler;
mod host;

pub mod headless;

pub use adapter::{Lifecycle, PlotAdapter};
pub use bridge::HoverFilter;
pub use config::PlotConfig;
pub use debounce::ResizeDebouncer;
pub use engine::{EngineEvent, EventKind, PointPayload, RenderEngine};
pub use error::{BindingError, Error, Result};
pub use handler::{InteractionHandler, LoggingHandler};
pub use host::{HostElement, HostSurface};

pub use kurbo::Size;
pub use peniko::Color;
pub use scattergl_spec::{
    Bounds, Channel, ChannelDefaults, ChannelEncoding, Domain, DomainOptions, EncodingPatch, EncodingState,
    EncodingValue, InputData, InteractionMode, Scalar, Specification, ValidationError,
    ViewOptions,
};
