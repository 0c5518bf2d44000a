use tracing::trace;

use crate::core::{AxisBounds, DataPoint};
use crate::error::{ChartError, ChartResult};

/// Component-wise min/max over all points.
pub fn compute_bounds(points: &[DataPoint]) -> ChartResult<AxisBounds> {
    let Some((first, rest)) = points.split_first() else {
        return Err(ChartError::EmptyData(
            "cannot recalculate axis bounds without data points".to_owned(),
        ));
    };

    let mut bounds = AxisBounds::new(first.x, first.x, first.y, first.y);
    for point in rest {
        trace!(
            min_x = bounds.min_x,
            max_x = bounds.max_x,
            min_y = bounds.min_y,
            max_y = bounds.max_y,
            "scanning bounds"
        );
        bounds.min_x = bounds.min_x.min(point.x);
        bounds.max_x = bounds.max_x.max(point.x);
        bounds.min_y = bounds.min_y.min(point.y);
        bounds.max_y = bounds.max_y.max(point.y);
    }

    Ok(bounds)
}
