use tracing::{debug, trace};

use crate::core::DataPoint;
use crate::error::ChartResult;
use crate::render::LineTarget;

use super::ChartRenderer;

impl<T: LineTarget> ChartRenderer<T> {
    /// Appends one sample and immediately re-renders the whole chart.
    ///
    /// The point stays appended even if the render pass fails.
    pub fn add_data(&mut self, point: DataPoint) -> ChartResult<()> {
        self.add_data_without_render(point)?;
        self.render_chart()
    }

    /// Appends one sample without rendering.
    pub fn add_data_without_render(&mut self, point: DataPoint) -> ChartResult<()> {
        self.points.push(point.validate()?);
        trace!(count = self.points.len(), "append data point");
        Ok(())
    }

    /// Replaces all samples in bulk, typically before the first render.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        for point in &points {
            point.validate()?;
        }
        debug!(count = points.len(), "set data points");
        self.points = points;
        Ok(())
    }
}
