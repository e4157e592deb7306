// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The declarative specification handed to the rendering engine.
//!
//! The types here mirror the engine's JSON shape one-to-one: serializing a
//! [`Specification`] with `serde` yields exactly what the engine expects.

use alloc::vec::Vec;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::{Channel, Domain, Scalar};

/// A complete scatter-plot specification.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    /// Inline data: coordinates plus any per-point channel arrays.
    pub default_data: DefaultData,
    /// X axis display.
    pub x_axis: AxisDisplay,
    /// Y axis display.
    pub y_axis: AxisDisplay,
    /// Mark tracks. A scatter plot has exactly one.
    pub tracks: Vec<Track>,
}

impl Specification {
    /// Returns the point track.
    pub fn track(&self) -> Option<&Track> {
        self.tracks.first()
    }
}

/// How the engine draws an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisDisplay {
    /// No axis is drawn by the engine.
    #[default]
    None,
}

/// Inline data referenced by attribute encodings.
///
/// Serializes as an object with `x`, `y`, then one key per inline channel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefaultData {
    /// X coordinates.
    pub x: Vec<f64>,
    /// Y coordinates.
    pub y: Vec<f64>,
    /// Per-point channel arrays, in emission order.
    pub inline: SmallVec<[(Channel, Vec<Scalar>); 4]>,
}

impl DefaultData {
    /// Returns the per-point values for `channel`, if it is encoded inline.
    pub fn channel(&self, channel: Channel) -> Option<&[Scalar]> {
        self.inline
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, values)| values.as_slice())
    }
}

impl Serialize for DefaultData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.inline.len()))?;
        map.serialize_entry("x", &self.x)?;
        map.serialize_entry("y", &self.y)?;
        for (channel, values) in &self.inline {
            map.serialize_entry(channel.name(), values)?;
        }
        map.end()
    }
}

/// The kind of mark a track draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    /// One glyph per row.
    #[default]
    Point,
}

/// Coordinate attribute names in [`DefaultData`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Coordinate {
    /// The `x` column.
    X,
    /// The `y` column.
    Y,
}

/// How an attribute's values are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Continuous values mapped through the track's domain.
    Quantitative,
    /// Values used as-is, one per point.
    Inline,
}

/// A positional encoding bound to a domain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CoordinateEncoding {
    /// The coordinate column.
    pub attribute: Coordinate,
    /// Always [`FieldType::Quantitative`].
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Visible range.
    pub domain: Domain,
}

impl CoordinateEncoding {
    /// Creates a quantitative encoding for `attribute` over `domain`.
    pub fn quantitative(attribute: Coordinate, domain: Domain) -> Self {
        Self {
            attribute,
            field_type: FieldType::Quantitative,
            domain,
        }
    }
}

/// A visual channel encoding: a constant, or a reference to an inline column.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChannelEncoding {
    /// The same value for every point.
    Value {
        /// The constant.
        value: Scalar,
    },
    /// Per-point values read from [`DefaultData`].
    Attribute {
        /// Column name in [`DefaultData`].
        attribute: Channel,
        /// Always [`FieldType::Inline`].
        #[serde(rename = "type")]
        field_type: FieldType,
    },
}

impl ChannelEncoding {
    /// Creates a constant encoding.
    pub fn value(value: Scalar) -> Self {
        Self::Value { value }
    }

    /// Creates an inline encoding reading `channel` from [`DefaultData`].
    pub fn inline(channel: Channel) -> Self {
        Self::Attribute {
            attribute: channel,
            field_type: FieldType::Inline,
        }
    }

    /// Returns `true` for inline encodings.
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Attribute { .. })
    }
}

/// A point track: positional encodings plus visual channels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Track {
    /// Mark type.
    pub mark: MarkType,
    /// X position.
    pub x: CoordinateEncoding,
    /// Y position.
    pub y: CoordinateEncoding,
    /// Color channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ChannelEncoding>,
    /// Size channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ChannelEncoding>,
    /// Opacity channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<ChannelEncoding>,
    /// Shape channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<ChannelEncoding>,
}

impl Track {
    /// Creates a point track with positional encodings and no visual channels.
    pub fn point(x: Domain, y: Domain) -> Self {
        Self {
            mark: MarkType::Point,
            x: CoordinateEncoding::quantitative(Coordinate::X, x),
            y: CoordinateEncoding::quantitative(Coordinate::Y, y),
            color: None,
            size: None,
            opacity: None,
            shape: None,
        }
    }

    /// Returns the encoding for `channel`.
    pub fn channel(&self, channel: Channel) -> Option<&ChannelEncoding> {
        self.slot(channel).as_ref()
    }

    /// Sets the encoding for `channel`.
    pub fn set_channel(&mut self, channel: Channel, encoding: ChannelEncoding) {
        *self.slot_mut(channel) = Some(encoding);
    }

    fn slot(&self, channel: Channel) -> &Option<ChannelEncoding> {
        match channel {
            Channel::Color => &self.color,
            Channel::Size => &self.size,
            Channel::Opacity => &self.opacity,
            Channel::Shape => &self.shape,
        }
    }

    fn slot_mut(&mut self, channel: Channel) -> &mut Option<ChannelEncoding> {
        match channel {
            Channel::Color => &mut self.color,
            Channel::Size => &mut self.size,
            Channel::Opacity => &mut self.opacity,
            Channel::Shape => &mut self.shape,
        }
    }
}
