//! Breakpoint axes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::viewport::Dimensions;

/// The viewport dimension a breakpoint axis measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

/// How a threshold is compared against the measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Applies once the measurement reaches the threshold.
    Min,
    /// Applies while the measurement stays at or below the threshold.
    Max,
}

/// One of the four breakpoint directions.
///
/// | Axis | Reads | Applies when |
/// |------|-------|--------------|
/// | `min-width` | width | `threshold <= width` |
/// | `max-width` | width | `width <= threshold` |
/// | `min-height` | height | `threshold <= height` |
/// | `max-height` | height | `height <= threshold` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Axis {
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::MinWidth,
        Axis::MaxWidth,
        Axis::MinHeight,
        Axis::MaxHeight,
    ];

    /// Recognized axis names, in the same order as [`Axis::ALL`].
    pub const NAMES: [&'static str; 4] = ["min-width", "max-width", "min-height", "max-height"];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::MinWidth => "min-width",
            Axis::MaxWidth => "max-width",
            Axis::MinHeight => "min-height",
            Axis::MaxHeight => "max-height",
        }
    }

    pub fn dimension(self) -> Dimension {
        match self {
            Axis::MinWidth | Axis::MaxWidth => Dimension::Width,
            Axis::MinHeight | Axis::MaxHeight => Dimension::Height,
        }
    }

    pub fn bound(self) -> Bound {
        match self {
            Axis::MinWidth | Axis::MinHeight => Bound::Min,
            Axis::MaxWidth | Axis::MaxHeight => Bound::Max,
        }
    }

    /// Reads the dimension this axis compares against.
    pub fn measure(self, dimensions: Dimensions) -> f64 {
        match self.dimension() {
            Dimension::Width => dimensions.width,
            Dimension::Height => dimensions.height,
        }
    }

    /// Whether a breakpoint at `threshold` applies to `measurement`.
    ///
    /// Both bounds are inclusive: a measurement equal to the threshold
    /// always applies.
    pub fn applies(self, threshold: i32, measurement: f64) -> bool {
        let threshold = f64::from(threshold);
        match self.bound() {
            Bound::Min => threshold <= measurement,
            Bound::Max => measurement <= threshold,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Axis::ALL
            .into_iter()
            .find(|axis| axis.as_str() == s)
            .ok_or_else(|| ConfigurationError::InvalidAxis {
                axis: s.to_string(),
            })
    }
}

impl TryFrom<String> for Axis {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Axis> for String {
    fn from(axis: Axis) -> Self {
        axis.as_str().to_string()
    }
}
