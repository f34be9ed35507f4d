//! Declarative description of the charts in a metrics report.
//!
//! The types here serialize to the trace and layout objects understood by plotly.js. Nothing in
//! this crate renders anything, a report renderer embeds the serialized values into a document
//! and the charting library draws them in the viewer.

use serde::{Deserialize, Serialize};

/// A single chart in a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    /// The id of the document element the chart is drawn into
    pub id: String,
    /// The data series drawn on this chart, in legend order
    pub traces: Vec<Trace>,
    /// Titles, axes and sizing for the chart
    pub layout: Layout,
}

impl Chart {
    /// Create a new chart
    pub fn new(id: impl Into<String>, traces: Vec<Trace>, layout: Layout) -> Self {
        Self {
            id: id.into(),
            traces,
            layout,
        }
    }
}

/// The kind of plot used to draw a [Trace]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
    Bar,
}

/// How points of a scatter [Trace] are drawn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TraceMode {
    #[serde(rename = "lines")]
    Lines,
}

/// One data series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trace {
    pub x: serde_json::Value,
    pub y: serde_json::Value,
    /// The legend entry for this series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TraceMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    /// Create a named line series.
    ///
    /// Missing values should be passed as `None` so they serialize to `null`, which the charting
    /// library draws as a gap.
    pub fn line<X, Y>(name: impl Into<String>, x: X, y: Y) -> serde_json::Result<Self>
    where
        X: Serialize,
        Y: Serialize,
    {
        Ok(Self {
            x: serde_json::to_value(x)?,
            y: serde_json::to_value(y)?,
            name: Some(name.into()),
            kind: TraceKind::Scatter,
            mode: Some(TraceMode::Lines),
            line: None,
            marker: None,
        })
    }

    /// Create an unnamed bar series
    pub fn bar<X, Y>(x: X, y: Y) -> serde_json::Result<Self>
    where
        X: Serialize,
        Y: Serialize,
    {
        Ok(Self {
            x: serde_json::to_value(x)?,
            y: serde_json::to_value(y)?,
            name: None,
            kind: TraceKind::Bar,
            mode: None,
            line: None,
            marker: None,
        })
    }

    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }
}

/// Line styling, used both for line series and for marker outlines
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Line {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl Line {
    pub fn with_width(width: f64) -> Self {
        Self {
            color: None,
            width: Some(width),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Marker styling for bar series
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

impl Marker {
    pub fn colored(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            line: None,
        }
    }

    pub fn with_outline(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }
}

/// How hover labels are grouped
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HoverMode {
    /// One label listing every series at the hovered x value
    #[serde(rename = "x unified")]
    XUnified,
}

/// Chart-level presentation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<HoverMode>,
    /// Height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

impl Layout {
    pub fn new(title: impl Into<String>, xaxis: Axis, yaxis: Axis) -> Self {
        Self {
            title: title.into(),
            xaxis,
            yaxis,
            hovermode: None,
            height: None,
            margin: None,
        }
    }

    pub fn with_hovermode(mut self, hovermode: HoverMode) -> Self {
        self.hovermode = Some(hovermode);
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }
}

/// A chart axis
///
/// Without a range the charting library scales the axis to fit the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Axis {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    /// Rotation of the tick labels in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            range: None,
            tickangle: None,
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some([min, max]);
        self
    }

    pub fn with_tickangle(mut self, degrees: i32) -> Self {
        self.tickangle = Some(degrees);
        self
    }
}

/// Chart margins in pixels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Margin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<u32>,
}

impl Margin {
    pub fn bottom(b: u32) -> Self {
        Self { b: Some(b) }
    }
}

/// Options passed to the charting library alongside each chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlotConfig {
    /// Resize the chart with its container
    pub responsive: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self { responsive: true }
    }
}
