// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless engine and host implementations.
//!
//! [`RecordingEngine`] keeps every call it receives instead of drawing, and
//! [`StaticElement`] reports sizes the caller controls. Together they let a
//! [`PlotAdapter`](crate::PlotAdapter) run without a browser, for tests, snapshotting
//! specifications, or server-side generation.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Size;
use scattergl_spec::{Specification, ViewOptions};

use crate::{EventKind, HostElement, HostSurface, RenderEngine};

/// A call received by a [`RecordingEngine`].
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    /// [`RenderEngine::add_to_dom`].
    AddToDom,
    /// [`RenderEngine::set_specification`].
    SetSpecification(Specification),
    /// [`RenderEngine::update_specification`].
    UpdateSpecification(Specification),
    /// [`RenderEngine::set_canvas_size`].
    SetCanvasSize {
        /// Canvas width.
        width: f64,
        /// Canvas height.
        height: f64,
    },
    /// [`RenderEngine::set_view_options`].
    SetViewOptions(ViewOptions),
    /// [`RenderEngine::subscribe`].
    Subscribe(EventKind),
    /// [`RenderEngine::unsubscribe`].
    Unsubscribe(EventKind),
}

/// An engine that records calls instead of rendering.
#[derive(Clone, Debug, Default)]
pub struct RecordingEngine {
    calls: Vec<EngineCall>,
}

impl RecordingEngine {
    /// All calls received so far, oldest first.
    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Forgets recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// The most recently applied specification, whether set or updated.
    pub fn current_specification(&self) -> Option<&Specification> {
        self.calls.iter().rev().find_map(|call| match call {
            EngineCall::SetSpecification(spec) | EngineCall::UpdateSpecification(spec) => {
                Some(spec)
            }
            _ => None,
        })
    }

    /// Number of `set_specification` calls.
    pub fn set_count(&self) -> usize {
        self.count(|call| matches!(call, EngineCall::SetSpecification(_)))
    }

    /// Number of `update_specification` calls.
    pub fn update_count(&self) -> usize {
        self.count(|call| matches!(call, EngineCall::UpdateSpecification(_)))
    }

    fn count(&self, pred: impl Fn(&EngineCall) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }
}

impl RenderEngine for RecordingEngine {
    fn add_to_dom(&mut self) {
        self.calls.push(EngineCall::AddToDom);
    }

    fn set_specification(&mut self, spec: &Specification) {
        self.calls.push(EngineCall::SetSpecification(spec.clone()));
    }

    fn update_specification(&mut self, spec: &Specification) {
        self.calls.push(EngineCall::UpdateSpecification(spec.clone()));
    }

    fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.calls.push(EngineCall::SetCanvasSize { width, height });
    }

    fn set_view_options(&mut self, options: &ViewOptions) {
        self.calls.push(EngineCall::SetViewOptions(*options));
    }

    fn subscribe(&mut self, kind: EventKind) {
        self.calls.push(EngineCall::Subscribe(kind));
    }

    fn unsubscribe(&mut self, kind: EventKind) {
        self.calls.push(EngineCall::Unsubscribe(kind));
    }
}

/// An element whose sizes are set by the caller.
///
/// Clones share their sizes, so a test can keep a handle and "re-layout" an element that a
/// plot owns.
#[derive(Clone, Debug)]
pub struct StaticElement {
    client: Rc<Cell<Size>>,
    parent: Rc<Cell<Option<Size>>>,
    element: bool,
}

impl StaticElement {
    /// Creates an attached element of `size` whose parent has the same size.
    pub fn new(size: Size) -> Self {
        Self {
            client: Rc::new(Cell::new(size)),
            parent: Rc::new(Cell::new(Some(size))),
            element: true,
        }
    }

    /// Creates a node that is not an element, such as a text node.
    pub fn non_element() -> Self {
        Self {
            element: false,
            ..Self::new(Size::ZERO)
        }
    }

    /// Sets the element's laid-out size.
    pub fn set_client_size(&self, size: Size) {
        self.client.set(size);
    }

    /// Sets the parent's laid-out size, or detaches the element with `None`.
    pub fn set_parent_size(&self, size: Option<Size>) {
        self.parent.set(size);
    }
}

impl HostElement for StaticElement {
    fn is_element(&self) -> bool {
        self.element
    }

    fn client_size(&self) -> Size {
        self.client.get()
    }

    fn parent_size(&self) -> Option<Size> {
        self.parent.get()
    }
}

/// A surface resolving selectors by exact match.
#[derive(Clone, Debug, Default)]
pub struct StaticSurface {
    elements: Vec<(String, StaticElement)>,
}

impl StaticSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `element` under `selector`.
    #[must_use]
    pub fn with_element(mut self, selector: impl Into<String>, element: StaticElement) -> Self {
        self.elements.push((selector.into(), element));
        self
    }
}

impl HostSurface for StaticSurface {
    type Element = StaticElement;

    fn query_selector(&self, selector: &str) -> Option<StaticElement> {
        self.elements
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, element)| element.clone())
    }
}
