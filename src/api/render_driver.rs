use glam::DVec3;
use tracing::{debug, warn};

use crate::core::{AxisBounds, DataPoint, compute_bounds, map_point};
use crate::error::{ChartError, ChartResult};
use crate::render::LineTarget;

use super::ChartRenderer;

impl<T: LineTarget> ChartRenderer<T> {
    /// Clamps stored samples into the axis bounds, maps them onto the axis
    /// segments and replaces the target's whole position buffer.
    ///
    /// With bounds recalculation enabled, bounds are refitted to the data
    /// first. Nothing else is mutated unless every step succeeds.
    pub fn render_chart(&mut self) -> ChartResult<()> {
        let Some(mut target) = self.target.take() else {
            warn!("render requested without a line target");
            return Err(ChartError::MissingDependency(
                "line render target is not attached".to_owned(),
            ));
        };
        let result = self.render_into(&mut target);
        self.target = Some(target);
        result
    }

    fn render_into(&mut self, target: &mut T) -> ChartResult<()> {
        if self.config.recalculate_bounds {
            self.recalculate_bounds()?;
        }

        let bounds = self.config.bounds.validate()?;
        let divisor = self.config.mapping_divisor;
        divisor.validate(bounds)?;
        debug!(
            point_count = self.points.len(),
            min_x = bounds.min_x,
            max_x = bounds.max_x,
            min_y = bounds.min_y,
            max_y = bounds.max_y,
            "rendering chart"
        );

        let clamped: Vec<DataPoint> = self
            .points
            .iter()
            .map(|point| bounds.clamp_point(*point))
            .collect();

        let mut positions = Vec::with_capacity(clamped.len());
        for point in &clamped {
            let (x, y) = map_point(
                *point,
                self.config.x_axis,
                self.config.y_axis,
                bounds,
                divisor,
            )?;
            positions.push(DVec3::new(x, y, 0.0));
        }

        target.set_positions(&positions)?;
        self.points = clamped;
        self.rendered.positions = positions;
        Ok(())
    }

    /// Refits the stored axis bounds to the min/max of the current data.
    pub fn recalculate_bounds(&mut self) -> ChartResult<AxisBounds> {
        let bounds = compute_bounds(&self.points)?;
        debug!(
            min_x = bounds.min_x,
            max_x = bounds.max_x,
            min_y = bounds.min_y,
            max_y = bounds.max_y,
            "recalculated axis bounds"
        );
        self.config.bounds = bounds;
        Ok(bounds)
    }
}
