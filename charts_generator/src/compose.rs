use std::collections::BTreeMap;

use metrics_chart_model::{Axis, Chart, HoverMode, Layout, Line, Margin, Marker, Trace};
use serde::Serialize;

use crate::options::ReportOptions;
use crate::summary::SummaryTable;
use crate::timeline::RunSamples;

pub const SUMMARY_CHART_ID: &str = "percentile-chart";
pub const CPU_CHART_ID: &str = "cpu-chart";
pub const RSS_CHART_ID: &str = "rss-chart";
pub const THREADS_CHART_ID: &str = "threads-chart";

const TIME_AXIS_TITLE: &str = "Time (seconds)";
const RUN_LINE_WIDTH: f64 = 2.0;

/// Build the report's charts: the summary bar chart when there is a summary, then CPU, memory and
/// thread count with one line per run.
///
/// Every run chart shares the time axis `[0, max_duration]` so runs of different lengths line up.
pub fn compose_charts(
    runs: &BTreeMap<String, RunSamples>,
    max_duration: i64,
    summary: Option<&SummaryTable>,
    options: &ReportOptions,
) -> serde_json::Result<Vec<Chart>> {
    let mut charts = Vec::with_capacity(4);

    if let Some(summary) = summary.filter(|summary| !summary.is_empty()) {
        charts.push(summary_chart(summary, options)?);
    }

    charts.push(Chart::new(
        CPU_CHART_ID,
        run_traces(runs, |samples| &samples.cpu_percent_per_core)?,
        run_layout(
            "CPU Percent per Core",
            max_duration,
            Axis::titled("CPU %").with_range(0.0, options.cpu_percent_ceiling),
            options,
        ),
    ));
    charts.push(Chart::new(
        RSS_CHART_ID,
        run_traces(runs, |samples| &samples.rss_kb)?,
        run_layout(
            "Memory usage in KB",
            max_duration,
            Axis::titled("Memory (KB)").with_range(0.0, options.rss_kb_ceiling),
            options,
        ),
    ));
    charts.push(Chart::new(
        THREADS_CHART_ID,
        run_traces(runs, |samples| &samples.threads)?,
        run_layout("Threads", max_duration, Axis::titled("Thread Count"), options),
    ));

    Ok(charts)
}

fn summary_chart(summary: &SummaryTable, options: &ReportOptions) -> serde_json::Result<Chart> {
    let trace = Trace::bar(&summary.categories, &summary.values)?.with_marker(
        Marker::colored("rgb(55, 128, 191)")
            .with_outline(Line::with_width(1.5).with_color("rgb(8, 48, 107)")),
    );
    // Rotated category names need room below the plot
    let layout = Layout::new(
        "95th Percentile Results",
        Axis::titled("Configuration").with_tickangle(-45),
        Axis::titled("Value (ms)"),
    )
    .with_height(options.chart_height)
    .with_margin(Margin::bottom(120));

    Ok(Chart::new(SUMMARY_CHART_ID, vec![trace], layout))
}

/// One line per run, in label order.
fn run_traces<Y, F>(
    runs: &BTreeMap<String, RunSamples>,
    values: F,
) -> serde_json::Result<Vec<Trace>>
where
    F: Fn(&RunSamples) -> &Y,
    Y: Serialize + ?Sized,
{
    runs.iter()
        .map(|(label, samples)| {
            Trace::line(label.as_str(), &samples.relative_time, values(samples))
                .map(|trace| trace.with_line(Line::with_width(RUN_LINE_WIDTH)))
        })
        .collect()
}

fn run_layout(title: &str, max_duration: i64, yaxis: Axis, options: &ReportOptions) -> Layout {
    Layout::new(
        title,
        Axis::titled(TIME_AXIS_TITLE).with_range(0.0, max_duration as f64),
        yaxis,
    )
    .with_hovermode(HoverMode::XUnified)
    .with_height(options.chart_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_chart_model::{TraceKind, TraceMode};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn samples(rows: usize) -> RunSamples {
        RunSamples {
            relative_time: (0..rows as i64).map(|i| i * 2).collect(),
            cpu_percent_per_core: (0..rows).map(|i| Some(i as f64)).collect(),
            rss_kb: (0..rows).map(|i| Some(1024.0 * i as f64)).collect(),
            threads: (0..rows).map(|i| Some(10 + i as i64)).collect(),
        }
    }

    fn runs() -> BTreeMap<String, RunSamples> {
        BTreeMap::from([
            ("A".to_string(), samples(3)),
            ("A_1".to_string(), samples(5)),
        ])
    }

    fn summary() -> SummaryTable {
        SummaryTable {
            categories: vec!["A".to_string(), "B".to_string()],
            values: vec![120.5, 98.0],
        }
    }

    #[test]
    fn without_summary_there_are_three_run_charts() -> anyhow::Result<()> {
        let charts = compose_charts(&runs(), 8, None, &ReportOptions::default())?;

        assert_eq!(
            vec![CPU_CHART_ID, RSS_CHART_ID, THREADS_CHART_ID],
            charts.iter().map(|c| c.id.as_str()).collect::<Vec<_>>()
        );
        Ok(())
    }

    #[test]
    fn summary_chart_comes_first() -> anyhow::Result<()> {
        let summary = summary();
        let charts = compose_charts(&runs(), 8, Some(&summary), &ReportOptions::default())?;

        assert_eq!(4, charts.len());
        assert_eq!(SUMMARY_CHART_ID, charts[0].id);

        let bar = &charts[0].traces[0];
        assert_eq!(TraceKind::Bar, bar.kind);
        assert_eq!(json!(["A", "B"]), bar.x);
        assert_eq!(json!([120.5, 98.0]), bar.y);
        assert_eq!(Some(-45), charts[0].layout.xaxis.tickangle);
        assert_eq!(Some(Margin::bottom(120)), charts[0].layout.margin);
        Ok(())
    }

    #[test]
    fn empty_summary_is_left_out() -> anyhow::Result<()> {
        let summary = SummaryTable {
            categories: vec![],
            values: vec![],
        };
        let charts = compose_charts(&runs(), 8, Some(&summary), &ReportOptions::default())?;

        assert_eq!(3, charts.len());
        Ok(())
    }

    #[test]
    fn one_named_line_per_run_in_label_order() -> anyhow::Result<()> {
        let charts = compose_charts(&runs(), 8, None, &ReportOptions::default())?;

        for chart in &charts {
            let names = chart
                .traces
                .iter()
                .map(|t| t.name.clone().unwrap_or_default())
                .collect::<Vec<_>>();
            assert_eq!(vec!["A", "A_1"], names, "traces of {}", chart.id);
            for trace in &chart.traces {
                assert_eq!(TraceKind::Scatter, trace.kind);
                assert_eq!(Some(TraceMode::Lines), trace.mode);
                assert_eq!(Some(Line::with_width(2.0)), trace.line);
            }
        }

        let cpu = &charts[0];
        assert_eq!(json!([0, 2, 4, 6, 8]), cpu.traces[1].x);
        assert_eq!(json!([0.0, 1.0, 2.0, 3.0, 4.0]), cpu.traces[1].y);
        let threads = &charts[2];
        assert_eq!(json!([10, 11, 12]), threads.traces[0].y);
        Ok(())
    }

    #[test]
    fn time_axes_share_the_max_duration() -> anyhow::Result<()> {
        let charts = compose_charts(&runs(), 8, None, &ReportOptions::default())?;

        for chart in &charts {
            assert_eq!(Some([0.0, 8.0]), chart.layout.xaxis.range);
            assert_eq!(Some(HoverMode::XUnified), chart.layout.hovermode);
            assert_eq!(Some(500), chart.layout.height);
        }
        Ok(())
    }

    #[test]
    fn value_axes_use_fixed_ceilings_except_threads() -> anyhow::Result<()> {
        let charts = compose_charts(&runs(), 8, None, &ReportOptions::default())?;

        assert_eq!(Some([0.0, 400.0]), charts[0].layout.yaxis.range);
        assert_eq!(Some([0.0, 8388608.0]), charts[1].layout.yaxis.range);
        assert_eq!(None, charts[2].layout.yaxis.range);
        Ok(())
    }

    #[test]
    fn ceilings_follow_the_options() -> anyhow::Result<()> {
        let options = ReportOptions {
            cpu_percent_ceiling: 800.0,
            rss_kb_ceiling: 1024.0,
            ..Default::default()
        };

        let charts = compose_charts(&runs(), 8, None, &options)?;

        assert_eq!(Some([0.0, 800.0]), charts[0].layout.yaxis.range);
        assert_eq!(Some([0.0, 1024.0]), charts[1].layout.yaxis.range);
        Ok(())
    }
}
