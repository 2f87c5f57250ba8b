use crate::content::metrics::{
    format_percent, format_rupiah, format_thousands, summarize, CONVERSION_DELTA,
    ORDER_VALUE_DELTA, SALES_DELTA, VISITORS_DELTA,
};
use crate::pages::charts::{bar_chart, line_chart, scatter_chart, Bar, ScatterPoint};
use crate::pages::layout::{document, metric_card};
use crate::pages::Page;
use crate::session::SessionContext;

pub fn render(session: &SessionContext) -> String {
    let samples = session.metrics();
    let summary = summarize(samples);

    let kpis = [
        metric_card(
            "Total Sales",
            &format_rupiah(summary.total_sales as f64),
            Some(SALES_DELTA),
        ),
        metric_card(
            "Total Visitors",
            &format_thousands(summary.total_visitors),
            Some(VISITORS_DELTA),
        ),
        metric_card(
            "Avg Conversion",
            &format_percent(summary.avg_conversion),
            Some(CONVERSION_DELTA),
        ),
        metric_card(
            "Avg Order Value",
            &format_rupiah(summary.avg_order_value),
            Some(ORDER_VALUE_DELTA),
        ),
    ]
    .concat();

    let sales: Vec<(String, f64)> = samples
        .iter()
        .map(|s| (s.date.format("%b %d").to_string(), s.sales as f64))
        .collect();
    let visitors: Vec<Bar> = samples
        .iter()
        .map(|s| Bar {
            label: s.date.format("%b %d").to_string(),
            value: s.visitors as f64,
            color: None,
            text: None,
        })
        .collect();
    let scatter: Vec<ScatterPoint> = samples
        .iter()
        .map(|s| ScatterPoint {
            x: s.visitors as f64,
            y: s.sales as f64,
            weight: s.conversion_rate,
        })
        .collect();

    let body = format!(
        r#"<h1>📊 Interactive Dashboard</h1>
<h2>📌 KPI Metrics</h2>
<div class="columns">{kpis}</div>
<hr>
<h2>📈 Sales Trend</h2>
{sales_chart}
<div class="columns">
  <div>{visitors_chart}</div>
  <div>{scatter_chart}</div>
</div>"#,
        sales_chart = line_chart("Daily Sales", &sales),
        visitors_chart = bar_chart("Daily Visitors", &visitors),
        scatter_chart = scatter_chart("Visitors vs Sales", "Visitors", "Sales", &scatter),
    );
    document(Page::Dashboard, &body)
}
