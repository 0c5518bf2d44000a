use tracing::debug;

use crate::core::{AxisMarkers, SpacingDirection, space_markers_in_place};
use crate::error::{ChartError, ChartResult};
use crate::render::LineTarget;

use super::ChartRenderer;

impl<T: LineTarget> ChartRenderer<T> {
    #[must_use]
    pub fn axis_markers(&self) -> &AxisMarkers {
        &self.markers
    }

    pub fn set_axis_markers(&mut self, markers: AxisMarkers) {
        debug!(x_count = markers.x.len(), y_count = markers.y.len(), "set axis markers");
        self.markers = markers;
    }

    /// Evenly respaces X markers along the X segment and Y markers along the
    /// Y segment. Each axis is spaced independently; an axis without markers
    /// is skipped. Fails only when neither axis has markers.
    pub fn manipulate_points(&mut self) -> ChartResult<()> {
        if self.markers.x.is_empty() && self.markers.y.is_empty() {
            return Err(ChartError::InvalidConfiguration(
                "no axis markers to space".to_owned(),
            ));
        }

        let convention = self.config.spacing_convention;
        for (markers, segment, direction) in [
            (&mut self.markers.x, self.config.x_axis, SpacingDirection::Horizontal),
            (&mut self.markers.y, self.config.y_axis, SpacingDirection::Vertical),
        ] {
            if markers.is_empty() {
                debug!(?direction, "no markers on axis, skipping");
                continue;
            }
            space_markers_in_place(markers, segment.start, segment.end, direction, convention)?;
        }
        Ok(())
    }
}
