//! Stateful chart facade.
//!
//! `ChartRenderer` owns the sample sequence, the axis markers and an
//! optional line target. Behaviour is split across controller modules that
//! each extend the same type.

mod chart_config;
mod data_controller;
mod debug_draw;
mod marker_controller;
mod render_driver;
mod renderer_init;
mod snapshot_controller;

pub use chart_config::ChartConfig;
pub use snapshot_controller::ChartSnapshot;

use crate::core::{AxisMarkers, DataPoint};
use crate::render::{LineTarget, RenderedLine};

/// Maps chart samples onto two 3D axis segments and feeds a line target.
///
/// All operations run synchronously to completion on the caller's thread.
pub struct ChartRenderer<T: LineTarget> {
    config: ChartConfig,
    points: Vec<DataPoint>,
    markers: AxisMarkers,
    rendered: RenderedLine,
    target: Option<T>,
}
