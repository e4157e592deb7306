// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point coordinates.

use alloc::vec::Vec;

use serde::Deserialize;

use crate::ValidationError;

/// Parallel `x`/`y` coordinate sequences.
///
/// Both sequences always have the same length; construction validates this.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "InputRecord")]
pub struct InputData {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl InputData {
    /// Creates input data from coordinate sequences of equal length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, ValidationError> {
        if x.len() != y.len() {
            return Err(ValidationError::CoordinateLength {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Returns the x coordinates.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the y coordinates.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if there are no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// The loose object shape input arrives in, before validation.
///
/// Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InputRecord {
    /// X coordinates.
    #[serde(default)]
    pub x: Option<Vec<f64>>,
    /// Y coordinates.
    #[serde(default)]
    pub y: Option<Vec<f64>>,
}

impl TryFrom<InputRecord> for InputData {
    type Error = ValidationError;

    fn try_from(record: InputRecord) -> Result<Self, Self::Error> {
        let x = record.x.ok_or(ValidationError::MissingCoordinate("x"))?;
        let y = record.y.ok_or(ValidationError::MissingCoordinate("y"))?;
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = InputData::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, ValidationError::CoordinateLength { x: 3, y: 2 });
    }

    #[test]
    fn missing_coordinates_are_named() {
        let record = InputRecord {
            x: Some(vec![1.0]),
            y: None,
        };
        assert_eq!(
            InputData::try_from(record),
            Err(ValidationError::MissingCoordinate("y"))
        );
    }

    #[test]
    fn deserializes_with_extra_keys() {
        let input: InputData =
            serde_json::from_str(r#"{"x": [1, 2], "y": [3, 4], "label": ["a", "b"]}"#).unwrap();
        assert_eq!(input.x(), &[1.0, 2.0]);
        assert_eq!(input.y(), &[3.0, 4.0]);
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn deserialization_reports_validation_failures() {
        let err = serde_json::from_str::<InputData>(r#"{"x": [1, 2], "y": [3]}"#).unwrap_err();
        assert!(err.to_string().contains("same length"), "{err}");
    }
}
