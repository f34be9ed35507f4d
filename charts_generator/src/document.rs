use metrics_chart_model::{Chart, PlotConfig};
use serde::Serialize;

use crate::options::ReportOptions;

/// Render charts into a standalone HTML document.
///
/// The charting library script is the only external reference. Charts appear in the given order,
/// each in its own container.
pub fn render_document(charts: &[Chart], options: &ReportOptions) -> serde_json::Result<String> {
    let config = script_json(&PlotConfig::default())?;

    let mut containers = String::new();
    let mut plots = String::new();
    for chart in charts {
        containers.push_str(&format!(
            "    <div class=\"chart-container\" id=\"{}\"></div>\n",
            escape_html(&chart.id)
        ));
        plots.push_str(&format!(
            "        Plotly.newPlot({id}, {traces}, {layout}, {config});\n",
            id = script_json(&chart.id)?,
            traces = script_json(&chart.traces)?,
            layout = script_json(&chart.layout)?,
        ));
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <script src="{plotly_url}"></script>
    <style>
        body {{
            margin: 0;
            padding: 20px;
            font-family: Arial, sans-serif;
            background-color: #f5f5f5;
        }}
        h1 {{
            text-align: center;
            color: #333;
            margin-bottom: 30px;
        }}
        .chart-container {{
            background: white;
            margin-bottom: 30px;
            padding: 15px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
{containers}
    <script>
{plots}    </script>
</body>
</html>
"#,
        title = escape_html(&options.title),
        plotly_url = escape_html(&options.plotly_url),
    ))
}

/// JSON that is safe to embed in a `<script>` block
fn script_json<T>(value: &T) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
