// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter configuration.

use std::time::Duration;

use scattergl_spec::{ChannelDefaults, DomainOptions};
use serde::Deserialize;

use crate::HoverFilter;

/// Tunables for a [`PlotAdapter`](crate::PlotAdapter).
///
/// Deserializes from a partial object; missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Fraction of each extreme's magnitude added around the data.
    pub padding_frac: f64,
    /// Fraction of the opposite extreme substituted for an extreme of exactly zero.
    pub zero_remap_frac: f64,
    /// Quiet period before a window resize is applied, in milliseconds.
    pub resize_debounce_ms: u64,
    /// Hover/click hit filter.
    pub hover_filter: HoverFilter,
    /// Per-channel fallbacks, also used as the initial encodings.
    pub defaults: ChannelDefaults,
}

impl PlotConfig {
    /// Decodes a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Domain padding options.
    pub fn domain_options(&self) -> DomainOptions {
        DomainOptions::new(self.padding_frac).with_zero_remap(self.zero_remap_frac)
    }

    /// Resize quiet period.
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Sets the padding fraction.
    #[must_use]
    pub fn with_padding(mut self, padding_frac: f64) -> Self {
        self.padding_frac = padding_frac;
        self
    }

    /// Sets the fraction substituted for an extreme of exactly zero.
    #[must_use]
    pub fn with_zero_remap(mut self, zero_remap_frac: f64) -> Self {
        self.zero_remap_frac = zero_remap_frac;
        self
    }

    /// Sets the resize quiet period.
    #[must_use]
    pub fn with_resize_debounce(mut self, delay: Duration) -> Self {
        self.resize_debounce_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the hover/click hit filter.
    #[must_use]
    pub fn with_hover_filter(mut self, hover_filter: HoverFilter) -> Self {
        self.hover_filter = hover_filter;
        self
    }

    /// Sets the per-channel defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: ChannelDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        let domain = DomainOptions::default();
        Self {
            padding_frac: domain.padding_frac,
            zero_remap_frac: domain.zero_remap_frac,
            resize_debounce_ms: 500,
            hover_filter: HoverFilter::default(),
            defaults: ChannelDefaults::default(),
        }
    }
}
