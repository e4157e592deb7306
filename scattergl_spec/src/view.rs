// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine view options.

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::ValidationError;

/// The pointer tool the engine uses for selection and navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Free-form lasso selection.
    Lasso,
    /// Panning and zooming.
    Pan,
    /// Rectangular selection.
    Box,
}

impl InteractionMode {
    /// Returns the engine's name for this tool.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lasso => "lasso",
            Self::Pan => "pan",
            Self::Box => "box",
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lasso" => Ok(Self::Lasso),
            "pan" => Ok(Self::Pan),
            "box" => Ok(Self::Box),
            other => Err(ValidationError::InteractionMode(other.into())),
        }
    }
}

/// Options forwarded to the engine's view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ViewOptions {
    /// Active pointer tool.
    pub tool: InteractionMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes_only() {
        assert_eq!("lasso".parse(), Ok(InteractionMode::Lasso));
        assert_eq!("box".parse(), Ok(InteractionMode::Box));
        assert_eq!(
            "zoom".parse::<InteractionMode>(),
            Err(ValidationError::InteractionMode("zoom".into()))
        );
    }

    #[test]
    fn view_options_serialize_the_tool_name() {
        let options = ViewOptions {
            tool: InteractionMode::Pan,
        };
        assert_eq!(
            serde_json::to_value(options).unwrap(),
            serde_json::json!({ "tool": "pan" })
        );
    }
}
