/// plotly.js build referenced by the report. The viewer loads it, nothing else is external.
pub const DEFAULT_PLOTLY_URL: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

/// Display settings for a report.
///
/// The value axis ceilings are fixed so reports from different machines compare at a glance, they
/// do not follow the observed data.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Document and page heading
    pub title: String,
    /// Script URL of the charting library
    pub plotly_url: String,
    /// Upper bound of the CPU axis, 400% is four fully used cores
    pub cpu_percent_ceiling: f64,
    /// Upper bound of the memory axis in KB
    pub rss_kb_ceiling: f64,
    /// Height of every chart in pixels
    pub chart_height: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "JVM Metrics Comparison".to_string(),
            plotly_url: DEFAULT_PLOTLY_URL.to_string(),
            cpu_percent_ceiling: 400.0,
            // 8 GiB
            rss_kb_ceiling: (8 * 1024 * 1024) as f64,
            chart_height: 500,
        }
    }
}
