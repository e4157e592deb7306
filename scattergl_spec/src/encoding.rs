// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual channel encodings.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use peniko::Color;
use serde::{Deserialize, Serialize};

/// A visual channel a point can be encoded on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Fill color.
    Color,
    /// Glyph size.
    Size,
    /// Fill opacity.
    Opacity,
    /// Glyph shape.
    Shape,
}

impl Channel {
    /// All channels, in the order they are emitted into a specification.
    pub const ALL: [Self; 4] = [Self::Color, Self::Size, Self::Opacity, Self::Shape];

    /// Returns the attribute name used for this channel in a specification.
    pub fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Size => "size",
            Self::Opacity => "opacity",
            Self::Shape => "shape",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single encoded value: a number (size, opacity) or a string (CSS color, shape name).
///
/// Booleans and `null` are carried through untouched so loosely typed host data can be
/// forwarded to the engine as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// An absent value (`null`).
    Null,
    /// A boolean.
    Bool(bool),
    /// A numeric value.
    Number(f64),
    /// A textual value.
    Text(String),
}

impl Scalar {
    /// Returns `true` for values that mean "unset": `null`, `false`, zero, `NaN` and the
    /// empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Text(s) => s.is_empty(),
        }
    }

    /// Returns the numeric value, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the textual value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Colors are emitted as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
impl From<Color> for Scalar {
    fn from(value: Color) -> Self {
        let c = value.to_rgba8();
        let text = if c.a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
        };
        Self::Text(text)
    }
}

/// A channel value: uniform across all points, or one entry per point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EncodingValue {
    /// One value applied to every point.
    Scalar(Scalar),
    /// One value per point, parallel to the input coordinates.
    Array(Vec<Scalar>),
}

impl EncodingValue {
    /// Returns the per-point values, if this is an array encoding.
    pub fn as_array(&self) -> Option<&[Scalar]> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(values) => Some(values),
        }
    }
}

impl From<Scalar> for EncodingValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<f64> for EncodingValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<&str> for EncodingValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for EncodingValue {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<Color> for EncodingValue {
    fn from(value: Color) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<Vec<Scalar>> for EncodingValue {
    fn from(values: Vec<Scalar>) -> Self {
        Self::Array(values)
    }
}

impl From<Vec<f64>> for EncodingValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Array(values.into_iter().map(Scalar::Number).collect())
    }
}

impl From<Vec<String>> for EncodingValue {
    fn from(values: Vec<String>) -> Self {
        Self::Array(values.into_iter().map(Scalar::Text).collect())
    }
}

/// Per-channel fallbacks used when a scalar encoding is unset.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChannelDefaults {
    /// Default glyph size.
    pub size: Scalar,
    /// Default opacity.
    pub opacity: Scalar,
    /// Default fill color.
    pub color: Scalar,
    /// Default shape, if the engine should be told one.
    pub shape: Option<Scalar>,
}

impl ChannelDefaults {
    /// Returns the fallback for `channel`.
    pub fn get(&self, channel: Channel) -> Option<&Scalar> {
        match channel {
            Channel::Color => Some(&self.color),
            Channel::Size => Some(&self.size),
            Channel::Opacity => Some(&self.opacity),
            Channel::Shape => self.shape.as_ref(),
        }
    }
}

impl Default for ChannelDefaults {
    fn default() -> Self {
        Self {
            size: Scalar::Number(3.0),
            opacity: Scalar::Number(0.8),
            color: Color::from_rgb8(0x31, 0x82, 0xbd).into(),
            shape: None,
        }
    }
}

/// The encodings currently applied to a plot.
///
/// `size`, `color` and `opacity` always have a value; `shape` is only emitted once set.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodingState {
    /// Size encoding.
    pub size: EncodingValue,
    /// Color encoding.
    pub color: EncodingValue,
    /// Opacity encoding.
    pub opacity: EncodingValue,
    /// Optional shape encoding.
    pub shape: Option<EncodingValue>,
    defaults: ChannelDefaults,
}

impl EncodingState {
    /// Creates a state holding the given defaults as its initial values.
    pub fn new(defaults: ChannelDefaults) -> Self {
        Self {
            size: EncodingValue::Scalar(defaults.size.clone()),
            color: EncodingValue::Scalar(defaults.color.clone()),
            opacity: EncodingValue::Scalar(defaults.opacity.clone()),
            shape: defaults.shape.clone().map(EncodingValue::Scalar),
            defaults,
        }
    }

    /// Returns the per-channel fallbacks.
    pub fn defaults(&self) -> &ChannelDefaults {
        &self.defaults
    }

    /// Returns the encoding for `channel`, if set.
    pub fn get(&self, channel: Channel) -> Option<&EncodingValue> {
        match channel {
            Channel::Color => Some(&self.color),
            Channel::Size => Some(&self.size),
            Channel::Opacity => Some(&self.opacity),
            Channel::Shape => self.shape.as_ref(),
        }
    }

    /// Iterates over the channels that carry a value, in emission order.
    pub fn channels(&self) -> impl Iterator<Item = (Channel, &EncodingValue)> + '_ {
        Channel::ALL
            .into_iter()
            .filter_map(|channel| self.get(channel).map(|value| (channel, value)))
    }

    /// Merges the keys present in `patch`. Values are stored as given.
    pub fn apply(&mut self, patch: EncodingPatch) {
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity;
        }
        if let Some(shape) = patch.shape {
            self.shape = Some(shape);
        }
    }
}

impl Default for EncodingState {
    fn default() -> Self {
        Self::new(ChannelDefaults::default())
    }
}

/// A partial update to an [`EncodingState`].
///
/// When deserialized, unrecognized keys are ignored and `null` counts as absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EncodingPatch {
    /// New size encoding.
    pub size: Option<EncodingValue>,
    /// New color encoding.
    pub color: Option<EncodingValue>,
    /// New opacity encoding.
    pub opacity: Option<EncodingValue>,
    /// New shape encoding.
    pub shape: Option<EncodingValue>,
}

impl EncodingPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size encoding.
    pub fn with_size(mut self, size: impl Into<EncodingValue>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets the color encoding.
    pub fn with_color(mut self, color: impl Into<EncodingValue>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the opacity encoding.
    pub fn with_opacity(mut self, opacity: impl Into<EncodingValue>) -> Self {
        self.opacity = Some(opacity.into());
        self
    }

    /// Sets the shape encoding.
    pub fn with_shape(mut self, shape: impl Into<EncodingValue>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    /// Returns `true` if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.color.is_none() && self.opacity.is_none() && self.shape.is_none()
    }
}
