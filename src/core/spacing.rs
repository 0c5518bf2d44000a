use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};

/// Axis component advanced between consecutive markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpacingDirection {
    /// Steps along x, holding y and z at the start point.
    Horizontal,
    /// Steps along y, holding x and z at the start point.
    Vertical,
}

/// How the segment is divided among `n` markers.
///
/// The start point never receives a marker under either convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpacingConvention {
    /// `spacing = length / n`; the last marker lands on the end point.
    #[default]
    MarkerCount,
    /// `spacing = length / (n + 1)`; every marker sits strictly inside the segment.
    ExcludeEnd,
}

impl SpacingConvention {
    fn slots(self, count: usize) -> f64 {
        match self {
            Self::MarkerCount => count as f64,
            Self::ExcludeEnd => (count + 1) as f64,
        }
    }
}

pub fn marker_spacing(
    start: DVec3,
    end: DVec3,
    count: usize,
    convention: SpacingConvention,
) -> ChartResult<f64> {
    if count == 0 {
        return Err(ChartError::InvalidConfiguration(
            "marker count must be > 0".to_owned(),
        ));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidConfiguration(
            "marker segment endpoints must be finite".to_owned(),
        ));
    }
    Ok(start.distance(end) / convention.slots(count))
}

/// Produces `count` evenly spaced marker positions, starting one spacing
/// after `start`.
pub fn space_markers(
    start: DVec3,
    end: DVec3,
    count: usize,
    direction: SpacingDirection,
    convention: SpacingConvention,
) -> ChartResult<Vec<DVec3>> {
    let mut markers = vec![start; count];
    space_markers_in_place(&mut markers, start, end, direction, convention)?;
    Ok(markers)
}

/// Repositions every marker in `markers`; the slice length is the marker count.
pub fn space_markers_in_place(
    markers: &mut [DVec3],
    start: DVec3,
    end: DVec3,
    direction: SpacingDirection,
    convention: SpacingConvention,
) -> ChartResult<()> {
    let spacing = marker_spacing(start, end, markers.len(), convention)?;
    debug!(?direction, %start, %end, spacing, count = markers.len(), "spacing markers");

    let step = match direction {
        SpacingDirection::Horizontal => DVec3::new(spacing, 0.0, 0.0),
        SpacingDirection::Vertical => DVec3::new(0.0, spacing, 0.0),
    };

    let mut pose = start + step;
    for (index, marker) in markers.iter_mut().enumerate() {
        let previous = *marker;
        trace!(index, from = %previous, to = %pose, "placing marker");
        *marker = pose;
        pose += step;
    }
    Ok(())
}
