mod debug_frame;
mod position_buffer;
mod primitives;

pub use debug_frame::{DebugFrame, GizmoRecorder};
pub use position_buffer::{PositionBuffer, RenderedLine};
pub use primitives::{AxisKind, Color, GizmoCube};

use glam::DVec3;

use crate::error::ChartResult;

/// Consumer of the final ordered position sequence of a chart line.
///
/// Every call carries the complete line: implementations replace any prior
/// content and resize to `positions.len()`.
pub trait LineTarget {
    fn set_positions(&mut self, positions: &[DVec3]) -> ChartResult<()>;
}

/// Debug overlay capable of drawing solid cubes around axis endpoints.
pub trait GizmoSink {
    fn draw_cube(&mut self, cube: &GizmoCube) -> ChartResult<()>;
}

impl<T: LineTarget + ?Sized> LineTarget for Box<T> {
    fn set_positions(&mut self, positions: &[DVec3]) -> ChartResult<()> {
        (**self).set_positions(positions)
    }
}
