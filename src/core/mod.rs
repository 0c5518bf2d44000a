pub mod axis_mapper;
pub mod range;
pub mod segment;
pub mod spacing;
pub mod types;

pub use axis_mapper::{MappingDivisor, map_point, value_to_segment_offset};
pub use range::compute_bounds;
pub use segment::AxisSegment;
pub use spacing::{
    SpacingConvention, SpacingDirection, marker_spacing, space_markers, space_markers_in_place,
};
pub use types::{AxisBounds, AxisMarkers, DataPoint};
