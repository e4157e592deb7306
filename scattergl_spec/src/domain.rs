// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis domain computation.
//!
//! Raw coordinates are scanned once for their extremes, padded so boundary points are not
//! clipped, and finally corrected for the container's aspect ratio so that distances (and
//! circular lasso selections) look the same along both axes.

use kurbo::Size;
use serde::Serialize;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A visible range along one axis, `[min, max]`.
///
/// Serializes as a two-element array, which is how the engine expects track domains.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "[f64; 2]")]
pub struct Domain {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Domain {
    /// The domain used when there is nothing to measure: `[-1, 1]`.
    pub const UNIT: Self = Self::new(-1.0, 1.0);

    /// Creates a domain from its endpoints.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `max - min`.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if `other` lies entirely within this domain.
    pub fn covers(&self, other: &Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Returns the domain mirrored around the origin: `[-b, b]` with `b = max(|min|, |max|)`.
    pub fn symmetric(&self) -> Self {
        let bound = self.min.abs().max(self.max.abs());
        Self::new(-bound, bound)
    }

    /// Multiplies both endpoints by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }
}

impl From<Domain> for [f64; 2] {
    fn from(value: Domain) -> Self {
        [value.min, value.max]
    }
}

impl From<(f64, f64)> for Domain {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Padding parameters for [`compute_domain_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainOptions {
    /// Fraction of each extreme's magnitude added outside the raw range.
    pub padding_frac: f64,
    /// Fraction of the opposite extreme used in place of an extreme that is exactly zero.
    pub zero_remap_frac: f64,
}

impl DomainOptions {
    /// Creates options with the given padding fraction and the default zero remap.
    pub fn new(padding_frac: f64) -> Self {
        Self {
            padding_frac,
            ..Self::default()
        }
    }

    /// Sets the zero remap fraction.
    pub fn with_zero_remap(mut self, zero_remap_frac: f64) -> Self {
        self.zero_remap_frac = zero_remap_frac;
        self
    }
}

impl Default for DomainOptions {
    fn default() -> Self {
        Self {
            padding_frac: 0.05,
            zero_remap_frac: 0.05,
        }
    }
}

/// Computes a padded domain for `values` using [`DomainOptions::default`].
pub fn compute_domain(values: &[f64]) -> Domain {
    compute_domain_with(values, DomainOptions::default())
}

/// Computes a padded domain for `values`.
///
/// Extremes are found with a single scan. Non-finite values are ignored, and
/// [`Domain::UNIT`] is returned if no finite values are present. An extreme that is exactly
/// zero is replaced by `-zero_remap_frac * other` so the padding has something to scale.
/// The result is always finite and has non-zero width.
pub fn compute_domain_with(values: &[f64], options: DomainOptions) -> Domain {
    let Some((min, max)) = extremes(values) else {
        return Domain::UNIT;
    };

    let remap = options.zero_remap_frac.abs();
    let (lo, hi) = match (min == 0.0, max == 0.0) {
        (true, false) => (saturate(-remap * max, min), max),
        (false, true) => (min, saturate(-remap * min, max)),
        _ => (min, max),
    };

    let pad = options.padding_frac.abs();
    let domain = Domain::new(
        saturate(lo - (pad * lo).abs(), lo),
        saturate(hi + (pad * hi).abs(), hi),
    );

    if domain.width() > 0.0 {
        domain
    } else if min == 0.0 && max == 0.0 {
        Domain::UNIT
    } else {
        // Padding vanished; widen by at least one unit, relative to the magnitude.
        let step = (f64::EPSILON * min.abs().max(max.abs())).max(1.0);
        Domain::new(saturate(min - step, min), saturate(max + step, max))
    }
}

/// Clamps an overflowed endpoint to the largest finite value of the same sign, and replaces
/// `NaN` with `fallback`.
fn saturate(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else if value == f64::INFINITY {
        f64::MAX
    } else if value == f64::NEG_INFINITY {
        -f64::MAX
    } else {
        value
    }
}

fn extremes(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Symmetric, aspect-corrected axis bounds ready to be placed in a specification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Bound for the x axis.
    pub x: Domain,
    /// Bound for the y axis.
    pub y: Domain,
}

/// Returns `width / height`, or `1.0` if the container has not been laid out yet.
pub fn aspect_ratio(container: Size) -> f64 {
    let ratio = container.width / container.height;
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

/// Corrects padded domains for the container's aspect ratio.
///
/// Both domains are first made symmetric around the origin. For a wide container the x
/// endpoints are scaled by the aspect ratio, otherwise the y endpoints are scaled by its
/// inverse.
pub fn aspect_corrected_bounds(x: Domain, y: Domain, container: Size) -> Bounds {
    let ratio = aspect_ratio(container);
    let x = x.symmetric();
    let y = y.symmetric();
    if ratio > 1.0 {
        Bounds {
            x: x.scaled(ratio),
            y,
        }
    } else {
        Bounds {
            x,
            y: y.scaled(1.0 / ratio),
        }
    }
}
