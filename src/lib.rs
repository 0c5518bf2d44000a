//! segment-chart: line charts laid out along 3D axis segments.
//!
//! Samples are clamped into configured axis bounds, mapped onto an X and a Y
//! segment, and handed to a line target as one ordered position buffer.
//! Axis tick markers and endpoint debug cubes are produced from the same
//! segment geometry.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartRenderer};
pub use error::{ChartError, ChartResult};
