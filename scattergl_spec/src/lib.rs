// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data model, domain computation and specification building for `scattergl`.
//!
//! This crate is the pure half of the scatter-plot adapter:
//! - **Domains** are derived from raw coordinates with padding, then corrected for the
//!   container's aspect ratio so plotted data stays square.
//! - **Specifications** are the declarative objects a GPU visualization engine consumes:
//!   inline data, per-channel encodings and axis domains.
//!
//! Nothing here talks to an engine or a host UI. A specification is rebuilt from scratch
//! from `(InputData, EncodingState, Bounds)` on every render, so building one is pure and
//! idempotent.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod builder;
mod domain;
mod encoding;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod input;
mod specification;
mod view;

pub use builder::build_specification;
pub use domain::{
    Bounds, Domain, DomainOptions, aspect_corrected_bounds, aspect_ratio, compute_domain,
    compute_domain_with,
};
pub use encoding::{
    Channel, ChannelDefaults, EncodingPatch, EncodingState, EncodingValue, Scalar,
};
pub use error::ValidationError;
pub use input::{InputData, InputRecord};
pub use specification::{
    AxisDisplay, ChannelEncoding, Coordinate, CoordinateEncoding, DefaultData, FieldType,
    MarkType, Specification, Track,
};
pub use view::{InteractionMode, ViewOptions};
