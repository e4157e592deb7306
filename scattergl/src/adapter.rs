// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The plot component.

use kurbo::Size;
use scattergl_spec::{
    Bounds, Domain, EncodingPatch, EncodingState, InputData, InputRecord, InteractionMode,
    Specification, ValidationError, ViewOptions, aspect_corrected_bounds, build_specification,
    compute_domain_with,
};
use tracing::{debug, trace, warn};
use web_time::Instant;

use crate::bridge::InteractionBridge;
use crate::{
    BindingError, EngineEvent, EventKind, HostElement, HostSurface, InteractionHandler,
    LoggingHandler, PlotConfig, RenderEngine, ResizeDebouncer, Result,
};

/// Where a plot is in its render lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Nothing has been handed to the engine yet.
    Uninitialized,
    /// The first specification has been set.
    Initialized,
    /// At least one later render has replaced the specification.
    Updated,
}

/// Input data together with the padded domains derived from it.
#[derive(Clone, Debug)]
struct PlotData {
    input: InputData,
    x: Domain,
    y: Domain,
}

/// The plot's window-resize subscription.
///
/// Registered by the first render and dropped by [`PlotAdapter::dispose`].
#[derive(Clone, Copy, Debug)]
struct ResizeListener {
    debouncer: ResizeDebouncer,
}

/// A scatter plot bound to a host element and driven through a [`RenderEngine`].
///
/// The adapter owns the input data, the encodings and the derived domains. Every
/// [`render`](Self::render) rebuilds the [`Specification`] from scratch; the first one is
/// handed to the engine with `set_specification`, later ones with `update_specification`.
#[derive(Debug)]
pub struct PlotAdapter<E, H, I = LoggingHandler>
where
    E: RenderEngine,
    H: HostElement,
    I: InteractionHandler,
{
    element: H,
    engine: E,
    handler: I,
    config: PlotConfig,
    state: EncodingState,
    data: Option<PlotData>,
    interaction: Option<InteractionMode>,
    bridge: InteractionBridge,
    render_count: u64,
    resize_listener: Option<ResizeListener>,
    disposed: bool,
}

impl<E, H, I> PlotAdapter<E, H, I>
where
    E: RenderEngine,
    H: HostElement,
    I: InteractionHandler,
{
    /// Attaches a plot with the default configuration to `element`.
    pub fn new(element: H, engine: E, handler: I) -> Result<Self, BindingError> {
        Self::with_config(element, engine, handler, PlotConfig::default())
    }

    /// Attaches a plot to `element`.
    ///
    /// The engine's canvas is added to the element and the selection subscription is made
    /// here, once.
    pub fn with_config(
        element: H,
        mut engine: E,
        handler: I,
        config: PlotConfig,
    ) -> Result<Self, BindingError> {
        if !element.is_element() {
            return Err(BindingError::NotAnElement("provided element".into()));
        }

        engine.add_to_dom();
        let mut bridge = InteractionBridge::new(config.hover_filter);
        bridge.subscribe(&mut engine, EventKind::SelectionEnd);
        debug!(size = ?element.client_size(), "plot attached");

        Ok(Self {
            element,
            engine,
            handler,
            state: EncodingState::new(config.defaults.clone()),
            config,
            data: None,
            interaction: None,
            bridge,
            render_count: 0,
            resize_listener: None,
            disposed: false,
        })
    }

    /// Resolves `selector` on `surface` and attaches a plot with the default configuration.
    pub fn bind<S>(surface: &S, selector: &str, engine: E, handler: I) -> Result<Self, BindingError>
    where
        S: HostSurface<Element = H>,
    {
        Self::bind_with_config(surface, selector, engine, handler, PlotConfig::default())
    }

    /// Resolves `selector` on `surface` and attaches a plot.
    pub fn bind_with_config<S>(
        surface: &S,
        selector: &str,
        engine: E,
        handler: I,
        config: PlotConfig,
    ) -> Result<Self, BindingError>
    where
        S: HostSurface<Element = H>,
    {
        let element = surface
            .query_selector(selector)
            .ok_or_else(|| BindingError::Unresolved(selector.into()))?;
        if !element.is_element() {
            return Err(BindingError::NotAnElement(selector.into()));
        }
        Self::with_config(element, engine, handler, config)
    }

    /// Replaces the input data and recomputes both domains from scratch.
    pub fn set_input(&mut self, input: InputData) {
        let options = self.config.domain_options();
        let x = compute_domain_with(input.x(), options);
        let y = compute_domain_with(input.y(), options);
        debug!(points = input.len(), ?x, ?y, "input updated");
        self.data = Some(PlotData { input, x, y });
    }

    /// Validates and stores coordinate sequences.
    ///
    /// On error the previous input and domains are kept.
    pub fn set_coordinates(&mut self, x: Vec<f64>, y: Vec<f64>) -> Result<(), ValidationError> {
        let input = InputData::new(x, y)?;
        self.set_input(input);
        Ok(())
    }

    /// Decodes and stores input given as a JSON object with `x` and `y` arrays.
    ///
    /// Unknown keys are ignored. On error the previous input and domains are kept.
    pub fn set_input_json(&mut self, json: &str) -> Result<()> {
        let record: InputRecord = serde_json::from_str(json)?;
        let input = InputData::try_from(record)?;
        self.set_input(input);
        Ok(())
    }

    /// Merges encodings into the current state. Values are not validated here; per-point
    /// arrays are checked against the point count on the next render.
    pub fn set_state(&mut self, patch: EncodingPatch) {
        trace!(?patch, "encoding patch");
        self.state.apply(patch);
    }

    /// Decodes a JSON encoding patch and merges it. Unknown keys are ignored.
    pub fn set_state_json(&mut self, json: &str) -> Result<()> {
        let patch: EncodingPatch = serde_json::from_str(json)?;
        self.set_state(patch);
        Ok(())
    }

    /// Switches the engine's pointer tool. `mode` must be `lasso`, `pan` or `box`.
    pub fn set_interaction(&mut self, mode: &str) -> Result<(), ValidationError> {
        let mode = mode.parse()?;
        self.set_interaction_mode(mode);
        Ok(())
    }

    /// Switches the engine's pointer tool.
    pub fn set_interaction_mode(&mut self, mode: InteractionMode) {
        self.engine.set_view_options(&ViewOptions { tool: mode });
        self.interaction = Some(mode);
    }

    /// Builds the current specification and hands it to the engine.
    ///
    /// With `canvas`, the engine's canvas is resized first and bounds are corrected for that
    /// size; otherwise the element's laid-out size is used. A validation failure leaves the
    /// engine and the render count untouched.
    pub fn render(&mut self, canvas: Option<Size>) -> Result<(), ValidationError> {
        let container = canvas.unwrap_or_else(|| self.element.client_size());
        let spec = self.specification(container)?;

        if let Some(size) = canvas {
            self.engine.set_canvas_size(size.width, size.height);
        }

        if self.render_count == 0 {
            debug!(points = spec.default_data.x.len(), ?container, "setting specification");
            self.engine.set_specification(&spec);
            if !self.disposed {
                self.resize_listener = Some(ResizeListener {
                    debouncer: ResizeDebouncer::new(self.config.resize_debounce()),
                });
            }
        } else {
            debug!(
                points = spec.default_data.x.len(),
                ?container,
                render = self.render_count,
                "updating specification"
            );
            self.engine.update_specification(&spec);
        }
        self.render_count += 1;

        if !self.disposed {
            self.bridge.subscribe(&mut self.engine, EventKind::PointHovered);
            self.bridge.subscribe(&mut self.engine, EventKind::PointClicked);
        }
        Ok(())
    }

    /// Builds the specification for a container of the given size without applying it.
    pub fn specification(&self, container: Size) -> Result<Specification, ValidationError> {
        let data = self
            .data
            .as_ref()
            .ok_or(ValidationError::MissingCoordinate("x"))?;
        let bounds = aspect_corrected_bounds(data.x, data.y, container);
        build_specification(&data.input, &self.state, bounds)
    }

    /// Returns the aspect-corrected bounds for a container of the given size.
    pub fn bounds(&self, container: Size) -> Option<Bounds> {
        self.data
            .as_ref()
            .map(|data| aspect_corrected_bounds(data.x, data.y, container))
    }

    /// Resizes the engine's canvas.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.engine.set_canvas_size(width, height);
    }

    /// Relays an engine event to the handler. Returns `false` if the event was dropped
    /// because nothing is subscribed to it.
    pub fn dispatch(&mut self, event: EngineEvent) -> bool {
        self.bridge.forward(event, &mut self.handler)
    }

    /// Decodes an engine event from JSON and relays it.
    pub fn dispatch_json(&mut self, json: &str) -> Result<bool> {
        let event = EngineEvent::from_json(json)?;
        Ok(self.dispatch(event))
    }

    /// Records a window resize at `now`, postponing any pending resize.
    ///
    /// Returns `false` if the plot is not listening for resizes (before the first render, or
    /// after [`dispose`](Self::dispose)).
    pub fn notify_window_resize(&mut self, now: Instant) -> bool {
        let Some(listener) = self.resize_listener.as_mut() else {
            trace!("ignoring window resize without a listener");
            return false;
        };
        listener.debouncer.signal(now);
        true
    }

    /// Applies a settled window resize, if one is due at `now`.
    ///
    /// Bounds are recomputed for the element's size, then the canvas takes the parent
    /// element's size and the specification is updated. If the specification cannot be built
    /// the engine is left untouched. Returns `true` if a pending resize settled.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self
            .resize_listener
            .as_mut()
            .is_some_and(|listener| listener.debouncer.poll(now));
        if due {
            self.apply_resize();
        }
        due
    }

    /// Returns the instant the pending resize settles, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.resize_listener
            .as_ref()
            .and_then(|listener| listener.debouncer.deadline())
    }

    fn apply_resize(&mut self) {
        let spec = match self.specification(self.element.client_size()) {
            Ok(spec) => spec,
            Err(err) => {
                warn!(%err, "dropping resize update");
                return;
            }
        };
        match self.element.parent_size() {
            Some(parent) => self.engine.set_canvas_size(parent.width, parent.height),
            None => warn!("plot element has no parent; keeping the canvas size"),
        }
        debug!(render = self.render_count, "resize settled, updating specification");
        self.engine.update_specification(&spec);
    }

    /// Stops listening for window resizes and engine events.
    ///
    /// Called automatically on drop; calling it more than once is harmless.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.resize_listener = None;
        self.bridge.teardown(&mut self.engine);
        debug!("plot disposed");
    }

    /// Number of completed renders.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        match self.render_count {
            0 => Lifecycle::Uninitialized,
            1 => Lifecycle::Initialized,
            _ => Lifecycle::Updated,
        }
    }

    /// Returns `true` if the plot reacts to window resizes.
    pub fn is_listening_for_resize(&self) -> bool {
        self.resize_listener.is_some()
    }

    /// Returns `true` if the plot is subscribed to `kind`.
    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.bridge.is_subscribed(kind)
    }

    /// The padded `(x, y)` domains of the current input.
    pub fn domains(&self) -> Option<(Domain, Domain)> {
        self.data.as_ref().map(|data| (data.x, data.y))
    }

    /// The current input data.
    pub fn input(&self) -> Option<&InputData> {
        self.data.as_ref().map(|data| &data.input)
    }

    /// The current encodings.
    pub fn state(&self) -> &EncodingState {
        &self.state
    }

    /// The active pointer tool, if one was set.
    pub fn interaction(&self) -> Option<InteractionMode> {
        self.interaction
    }

    /// The configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// The host element.
    pub fn element(&self) -> &H {
        &self.element
    }

    /// The engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The engine, mutably.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The interaction handler.
    pub fn handler(&self) -> &I {
        &self.handler
    }

    /// The interaction handler, mutably.
    pub fn handler_mut(&mut self) -> &mut I {
        &mut self.handler
    }
}

impl<E, H, I> Drop for PlotAdapter<E, H, I>
where
    E: RenderEngine,
    H: HostElement,
    I: InteractionHandler,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
