use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, AxisSegment, MappingDivisor, SpacingConvention};
use crate::error::{ChartError, ChartResult};

const DEFAULT_GIZMO_SIZE: f64 = 10.0;

/// Validated chart setup: axis bounds, axis segments and rendering policies.
///
/// Serializes to JSON so hosts can keep chart setup alongside their scene
/// files. Loading goes through the same validation as `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartConfigFile")]
pub struct ChartConfig {
    pub bounds: AxisBounds,
    pub x_axis: AxisSegment,
    pub y_axis: AxisSegment,
    pub recalculate_bounds: bool,
    pub mapping_divisor: MappingDivisor,
    pub spacing_convention: SpacingConvention,
    pub gizmo_size: f64,
}

impl ChartConfig {
    /// Creates a config with unit bounds on both axes.
    #[must_use]
    pub fn new(x_axis: AxisSegment, y_axis: AxisSegment) -> Self {
        Self {
            bounds: AxisBounds::default(),
            x_axis,
            y_axis,
            recalculate_bounds: false,
            mapping_divisor: MappingDivisor::default(),
            spacing_convention: SpacingConvention::default(),
            gizmo_size: DEFAULT_GIZMO_SIZE,
        }
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: AxisBounds) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_x_range(mut self, min_x: f64, max_x: f64) -> Self {
        self.bounds.min_x = min_x;
        self.bounds.max_x = max_x;
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, min_y: f64, max_y: f64) -> Self {
        self.bounds.min_y = min_y;
        self.bounds.max_y = max_y;
        self
    }

    /// Recomputes bounds from data before every render when enabled.
    #[must_use]
    pub fn with_recalculate_bounds(mut self, enabled: bool) -> Self {
        self.recalculate_bounds = enabled;
        self
    }

    #[must_use]
    pub fn with_mapping_divisor(mut self, divisor: MappingDivisor) -> Self {
        self.mapping_divisor = divisor;
        self
    }

    #[must_use]
    pub fn with_spacing_convention(mut self, convention: SpacingConvention) -> Self {
        self.spacing_convention = convention;
        self
    }

    #[must_use]
    pub fn with_gizmo_size(mut self, size: f64) -> Self {
        self.gizmo_size = size;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.x_axis.validate("x")?;
        self.y_axis.validate("y")?;
        self.bounds.validate()?;
        if !self.gizmo_size.is_finite() || self.gizmo_size <= 0.0 {
            return Err(ChartError::InvalidConfiguration(
                "gizmo size must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a JSON config.
    ///
    /// Missing axis endpoints are reported as `MissingDependency` rather than
    /// as parse failures.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let file: ChartConfigFile = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        Self::try_from(file)
    }

    pub fn from_json_value(value: serde_json::Value) -> ChartResult<Self> {
        let file: ChartConfigFile = serde_json::from_value(value)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        Self::try_from(file)
    }
}

/// On-disk shape of `ChartConfig`; endpoints may be left unset.
#[derive(Debug, Deserialize)]
struct ChartConfigFile {
    #[serde(default)]
    bounds: AxisBounds,
    #[serde(default)]
    x_axis: SegmentFile,
    #[serde(default)]
    y_axis: SegmentFile,
    #[serde(default)]
    recalculate_bounds: bool,
    #[serde(default)]
    mapping_divisor: MappingDivisor,
    #[serde(default)]
    spacing_convention: SpacingConvention,
    #[serde(default = "default_gizmo_size")]
    gizmo_size: f64,
}

#[derive(Debug, Default, Deserialize)]
struct SegmentFile {
    start: Option<DVec3>,
    end: Option<DVec3>,
}

impl SegmentFile {
    fn resolve(self, axis: &str) -> ChartResult<AxisSegment> {
        let start = self.start.ok_or_else(|| {
            ChartError::MissingDependency(format!("{axis} axis start endpoint is not set"))
        })?;
        let end = self.end.ok_or_else(|| {
            ChartError::MissingDependency(format!("{axis} axis end endpoint is not set"))
        })?;
        Ok(AxisSegment::new(start, end))
    }
}

impl TryFrom<ChartConfigFile> for ChartConfig {
    type Error = ChartError;

    fn try_from(file: ChartConfigFile) -> ChartResult<Self> {
        ChartConfig {
            bounds: file.bounds,
            x_axis: file.x_axis.resolve("x")?,
            y_axis: file.y_axis.resolve("y")?,
            recalculate_bounds: file.recalculate_bounds,
            mapping_divisor: file.mapping_divisor,
            spacing_convention: file.spacing_convention,
            gizmo_size: file.gizmo_size,
        }
        .validate()
    }
}

fn default_gizmo_size() -> f64 {
    DEFAULT_GIZMO_SIZE
}
