//! Chart rendering adapters
//!
//! Turn aggregation output into serialisable, Plotly-style figure specs. No
//! computation beyond reshaping happens here; every number comes from
//! [`crate::algorithm`].

pub mod charts;
pub mod palette;

use serde::Serialize;
use serde_json::Value;

pub use charts::{
    acquisition_trend_chart, animated_class_bar_chart, class_distribution_chart,
    country_distribution_chart, donut_chart, gender_trend_chart, geographic_map_chart,
    nationality_diversity_chart, sunburst_chart,
};

/// A renderable figure: traces, layout and optional animation frames
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Figure title
    pub title: String,
    /// Traces of the initial (or only) frame
    pub data: Vec<Value>,
    /// Layout options (axes, legend, template, ...)
    pub layout: Value,
    /// Animation frames, one per year for animated charts
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

/// One animation frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Frame label shown on the slider
    pub name: String,
    /// Traces of this frame
    pub data: Vec<Value>,
}

impl ChartSpec {
    /// Create a spec with a title and layout
    #[must_use]
    pub fn new(title: impl Into<String>, layout: Value) -> Self {
        Self {
            title: title.into(),
            data: Vec::new(),
            layout,
            frames: Vec::new(),
        }
    }

    /// Add a trace
    #[must_use]
    pub fn with_trace(mut self, trace: Value) -> Self {
        self.data.push(trace);
        self
    }

    /// Set the animation frames; the first frame also becomes the initial data
    #[must_use]
    pub fn with_frames(mut self, frames: Vec<Frame>) -> Self {
        if self.data.is_empty() {
            if let Some(first) = frames.first() {
                self.data = first.data.clone();
            }
        }
        self.frames = frames;
        self
    }

    /// Serialise to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
