use smallvec::SmallVec;

use crate::core::AxisSegment;
use crate::error::ChartResult;
use crate::render::{AxisKind, GizmoCube, GizmoSink};

/// Endpoint cubes for both axes: X start, X end, Y start, Y end.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugFrame {
    pub cubes: SmallVec<[GizmoCube; 4]>,
}

impl DebugFrame {
    #[must_use]
    pub fn for_axes(x_axis: AxisSegment, y_axis: AxisSegment, size: f64) -> Self {
        let cubes = [
            (AxisKind::X, x_axis.start),
            (AxisKind::X, x_axis.end),
            (AxisKind::Y, y_axis.start),
            (AxisKind::Y, y_axis.end),
        ]
        .into_iter()
        .map(|(axis, center)| GizmoCube::new(axis, center, size))
        .collect();
        Self { cubes }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for cube in &self.cubes {
            cube.validate()?;
        }
        Ok(())
    }

    pub fn draw<G: GizmoSink + ?Sized>(&self, sink: &mut G) -> ChartResult<()> {
        self.validate()?;
        for cube in &self.cubes {
            sink.draw_cube(cube)?;
        }
        Ok(())
    }
}

/// Gizmo sink that keeps every cube it is asked to draw.
#[derive(Debug, Default)]
pub struct GizmoRecorder {
    pub cubes: Vec<GizmoCube>,
}

impl GizmoSink for GizmoRecorder {
    fn draw_cube(&mut self, cube: &GizmoCube) -> ChartResult<()> {
        self.cubes.push(*cube);
        Ok(())
    }
}
