use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::LineTarget;

/// Ordered line positions, one per data point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedLine {
    pub positions: Vec<DVec3>,
}

impl RenderedLine {
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Headless line target used by tests and tooling.
///
/// It still rejects non-finite positions so callers catch broken geometry
/// before a real line primitive is attached.
#[derive(Debug, Default)]
pub struct PositionBuffer {
    pub line: RenderedLine,
    pub write_count: usize,
}

impl PositionBuffer {
    #[must_use]
    pub fn positions(&self) -> &[DVec3] {
        &self.line.positions
    }
}

impl LineTarget for PositionBuffer {
    fn set_positions(&mut self, positions: &[DVec3]) -> ChartResult<()> {
        if positions.iter().any(|position| !position.is_finite()) {
            return Err(ChartError::InvalidData(
                "line positions must be finite".to_owned(),
            ));
        }
        self.line.positions.clear();
        self.line.positions.extend_from_slice(positions);
        self.write_count += 1;
        Ok(())
    }
}
