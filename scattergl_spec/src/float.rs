// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! Some float methods are not available in `core` on every toolchain. We provide a small trait
//! that dispatches to `libm` when `std` is not enabled.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn abs(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn abs(self) -> Self {
        libm::fabs(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("scattergl_spec requires either the `std` or `libm` feature");
