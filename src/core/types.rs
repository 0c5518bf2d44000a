use chrono::{DateTime, Utc};
use glam::DVec3;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One chart sample. Sequence order is render order along the line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a sample whose x is the timestamp in fractional unix seconds.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        let x = time.timestamp_millis() as f64 / 1000.0;
        Ok(Self {
            x,
            y: decimal_component(value, "y")?,
        })
    }

    pub fn from_decimals(x: Decimal, y: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: decimal_component(x, "x")?,
            y: decimal_component(y, "y")?,
        })
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "data point coordinates must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Every `Decimal` (|value| < 2^96) lies inside f64 range, so this only
/// errors if `ToPrimitive::to_f64` ever reports a failed conversion.
/// Constructors stay fallible to match that API rather than unwrap it.
fn decimal_component(value: Decimal, axis: &str) -> ChartResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| ChartError::InvalidData(format!("{axis} value {value} does not fit in f64")))
}

/// Closed value ranges for both chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        }
    }
}

impl AxisBounds {
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("min_x", self.min_x),
            ("max_x", self.max_x),
            ("min_y", self.min_y),
            ("max_y", self.max_y),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfiguration(format!(
                    "axis bound `{name}` must be finite"
                )));
            }
        }
        if self.min_x > self.max_x {
            return Err(ChartError::InvalidConfiguration(format!(
                "x bounds are inverted: min_x={} > max_x={}",
                self.min_x, self.max_x
            )));
        }
        if self.min_y > self.max_y {
            return Err(ChartError::InvalidConfiguration(format!(
                "y bounds are inverted: min_y={} > max_y={}",
                self.min_y, self.max_y
            )));
        }
        Ok(self)
    }

    /// Clamps `point` into `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// Bounds must have passed `validate`.
    #[must_use]
    pub fn clamp_point(self, point: DataPoint) -> DataPoint {
        DataPoint {
            x: point.x.clamp(self.min_x, self.max_x),
            y: point.y.clamp(self.min_y, self.max_y),
        }
    }

    #[must_use]
    pub fn contains(self, point: DataPoint) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

/// Tick positions for both axes, repositioned in place by marker spacing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisMarkers {
    pub x: Vec<DVec3>,
    pub y: Vec<DVec3>,
}

impl AxisMarkers {
    #[must_use]
    pub fn new(x: Vec<DVec3>, y: Vec<DVec3>) -> Self {
        Self { x, y }
    }

    /// Creates `x_count` + `y_count` markers parked at the origin.
    #[must_use]
    pub fn with_counts(x_count: usize, y_count: usize) -> Self {
        Self {
            x: vec![DVec3::ZERO; x_count],
            y: vec![DVec3::ZERO; y_count],
        }
    }
}
