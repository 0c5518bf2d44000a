use serde::{Deserialize, Serialize};

use crate::core::{AxisMarkers, DataPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::{LineTarget, RenderedLine};

use super::{ChartConfig, ChartRenderer};

/// Full observable chart state, for fixtures and regression checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub config: ChartConfig,
    pub points: Vec<DataPoint>,
    pub rendered: RenderedLine,
    pub markers: AxisMarkers,
}

impl<T: LineTarget> ChartRenderer<T> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            config: self.config,
            points: self.points.clone(),
            rendered: self.rendered.clone(),
            markers: self.markers.clone(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
