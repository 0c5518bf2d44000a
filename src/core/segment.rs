use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Straight 3D line spanning the full value range of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSegment {
    pub start: DVec3,
    pub end: DVec3,
}

impl AxisSegment {
    #[must_use]
    pub const fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn validate(self, axis: &str) -> ChartResult<Self> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ChartError::InvalidConfiguration(format!(
                "{axis} axis endpoints must be finite"
            )));
        }
        if self.length() == 0.0 {
            return Err(ChartError::InvalidConfiguration(format!(
                "{axis} axis segment has zero length"
            )));
        }
        Ok(self)
    }
}
