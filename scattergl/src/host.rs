// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host UI surface hooks.
//!
//! The adapter never touches a DOM directly. It needs two things from the host: a way to
//! resolve a selector to an element, and the element's (and its parent's) laid-out size.
//! Browser embedders implement these over `web-sys`; tests and native hosts can use the
//! types in [`headless`](crate::headless).

use kurbo::Size;

/// An element the plot's canvas lives in.
pub trait HostElement {
    /// Returns `false` if this node cannot host a canvas (text nodes, comments, detached
    /// handles).
    fn is_element(&self) -> bool {
        true
    }

    /// The element's laid-out size. Zero while the element has not been laid out.
    fn client_size(&self) -> Size;

    /// The parent node's laid-out size, if the element is attached.
    fn parent_size(&self) -> Option<Size>;
}

/// Resolves selectors to elements.
pub trait HostSurface {
    /// The element type this surface hands out.
    type Element: HostElement;

    /// Returns the first element matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
}
