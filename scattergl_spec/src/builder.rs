// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Specification building.

use alloc::vec;

use smallvec::SmallVec;

use crate::{
    AxisDisplay, Bounds, Channel, ChannelEncoding, DefaultData, EncodingState, EncodingValue,
    InputData, Scalar, Specification, Track, ValidationError,
};

/// Builds a specification from input data, encodings and axis bounds.
///
/// Positions are always quantitative encodings of the inline `x`/`y` columns over
/// `bounds`. Each visual channel in `state` becomes either an inline column (array values,
/// which must have one entry per point) or a constant. A falsy constant falls back to the
/// channel default held by `state`.
///
/// The result depends only on the arguments; `state` is never modified.
pub fn build_specification(
    input: &InputData,
    state: &EncodingState,
    bounds: Bounds,
) -> Result<Specification, ValidationError> {
    let expected = input.len();
    let mut inline = SmallVec::new();
    let mut track = Track::point(bounds.x, bounds.y);

    for (channel, value) in state.channels() {
        let encoding = match value {
            EncodingValue::Array(values) => {
                if values.len() != expected {
                    return Err(ValidationError::EncodingLength {
                        channel,
                        len: values.len(),
                        expected,
                    });
                }
                inline.push((channel, values.clone()));
                ChannelEncoding::inline(channel)
            }
            EncodingValue::Scalar(value) => {
                ChannelEncoding::value(resolve_scalar(state, channel, value))
            }
        };
        track.set_channel(channel, encoding);
    }

    Ok(Specification {
        default_data: DefaultData {
            x: input.x().to_vec(),
            y: input.y().to_vec(),
            inline,
        },
        x_axis: AxisDisplay::None,
        y_axis: AxisDisplay::None,
        tracks: vec![track],
    })
}

fn resolve_scalar(state: &EncodingState, channel: Channel, value: &Scalar) -> Scalar {
    if value.is_falsy()
        && let Some(fallback) = state.defaults().get(channel)
    {
        return fallback.clone();
    }
    value.clone()
}
