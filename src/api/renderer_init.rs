use tracing::debug;

use crate::core::{AxisMarkers, DataPoint};
use crate::error::ChartResult;
use crate::render::{LineTarget, RenderedLine};

use super::{ChartConfig, ChartRenderer};

impl<T: LineTarget> ChartRenderer<T> {
    /// Creates a renderer with no line target attached yet.
    pub fn create(config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        debug!(
            x_length = config.x_axis.length(),
            y_length = config.y_axis.length(),
            recalculate_bounds = config.recalculate_bounds,
            "create chart renderer"
        );
        Ok(Self {
            config,
            points: Vec::new(),
            markers: AxisMarkers::default(),
            rendered: RenderedLine::default(),
            target: None,
        })
    }

    pub fn with_target(target: T, config: ChartConfig) -> ChartResult<Self> {
        let mut renderer = Self::create(config)?;
        renderer.target = Some(target);
        Ok(renderer)
    }

    /// Attaches `target`, returning the previously attached one.
    pub fn attach_target(&mut self, target: T) -> Option<T> {
        self.target.replace(target)
    }

    pub fn detach_target(&mut self) -> Option<T> {
        self.target.take()
    }

    #[must_use]
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn into_target(self) -> Option<T> {
        self.target
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Replaces the whole config after validating it. Takes effect on the
    /// next render.
    pub fn update_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Positions written to the target by the last successful render.
    #[must_use]
    pub fn rendered_line(&self) -> &RenderedLine {
        &self.rendered
    }
}
