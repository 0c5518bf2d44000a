use crate::error::ChartResult;
use crate::render::{DebugFrame, GizmoSink, LineTarget};

use super::ChartRenderer;

impl<T: LineTarget> ChartRenderer<T> {
    #[must_use]
    pub fn debug_frame(&self) -> DebugFrame {
        DebugFrame::for_axes(self.config.x_axis, self.config.y_axis, self.config.gizmo_size)
    }

    /// Draws endpoint cubes for both axes. Read-only; safe between renders.
    pub fn debug_draw<G: GizmoSink + ?Sized>(&self, sink: &mut G) -> ChartResult<()> {
        self.debug_frame().draw(sink)
    }
}
