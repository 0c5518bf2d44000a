use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, AxisSegment, DataPoint};
use crate::error::{ChartError, ChartResult};

/// Which axis maximum scales a value before it is laid onto a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MappingDivisor {
    /// Both axes divide by `max_x`.
    ///
    /// Y values only span their segment when `max_y == max_x`. Kept as the
    /// default so existing charts render unchanged.
    #[default]
    SharedXMaximum,
    /// X divides by `max_x`, Y divides by `max_y`.
    PerAxisMaximum,
}

impl MappingDivisor {
    #[must_use]
    pub fn x_divisor(self, bounds: AxisBounds) -> f64 {
        bounds.max_x
    }

    #[must_use]
    pub fn y_divisor(self, bounds: AxisBounds) -> f64 {
        match self {
            Self::SharedXMaximum => bounds.max_x,
            Self::PerAxisMaximum => bounds.max_y,
        }
    }

    pub fn validate(self, bounds: AxisBounds) -> ChartResult<()> {
        for (axis, divisor) in [("x", self.x_divisor(bounds)), ("y", self.y_divisor(bounds))] {
            if divisor == 0.0 || !divisor.is_finite() {
                return Err(ChartError::InvalidConfiguration(format!(
                    "{axis} mapping divisor must be finite and non-zero, got {divisor}"
                )));
            }
        }
        Ok(())
    }
}

/// Returns how far along `segment` a value lands: `length * value / axis_max`.
///
/// Values outside `[0, axis_max]` extrapolate past the segment ends. Offsets
/// that overflow f64 are rejected.
pub fn value_to_segment_offset(segment: AxisSegment, axis_max: f64, value: f64) -> ChartResult<f64> {
    if axis_max == 0.0 || !axis_max.is_finite() {
        return Err(ChartError::InvalidConfiguration(format!(
            "axis maximum must be finite and non-zero, got {axis_max}"
        )));
    }
    if !value.is_finite() {
        return Err(ChartError::InvalidData("value must be finite".to_owned()));
    }

    let offset = segment.length() * (value / axis_max);
    if !offset.is_finite() {
        return Err(ChartError::InvalidConfiguration(format!(
            "offset for value {value} with axis maximum {axis_max} is not finite"
        )));
    }
    Ok(offset)
}

/// Maps one (already clamped) point onto the two axis segments.
pub fn map_point(
    point: DataPoint,
    x_axis: AxisSegment,
    y_axis: AxisSegment,
    bounds: AxisBounds,
    divisor: MappingDivisor,
) -> ChartResult<(f64, f64)> {
    let x = value_to_segment_offset(x_axis, divisor.x_divisor(bounds), point.x)?;
    let y = value_to_segment_offset(y_axis, divisor.y_divisor(bounds), point.y)?;
    Ok((x, y))
}
