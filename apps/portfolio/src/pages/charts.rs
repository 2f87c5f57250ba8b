//! Inline SVG charts.
//!
//! Each function returns a self-contained `<figure>` so pages can drop charts
//! in without client-side scripts. Axes are plain lines with min/max labels.

use std::fmt::Write;

use crate::pages::layout::escape;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;
const PAD: f64 = 44.0;

/// Viridis control points, sampled at 0, 0.25, 0.5, 0.75, 1.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Maps `t` in [0, 1] onto the Viridis scale as a hex color.
pub fn viridis(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - i as f64;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    format!("#{:02x}{:02x}{:02x}", mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Position of `value` within [min, max] as a fraction; 0.5 for a flat range.
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        0.5
    } else {
        (value - min) / (max - min)
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn x_at(index: usize, count: usize) -> f64 {
    let span = WIDTH - 2.0 * PAD;
    if count <= 1 {
        PAD + span / 2.0
    } else {
        PAD + span * index as f64 / (count - 1) as f64
    }
}

fn y_at(fraction: f64) -> f64 {
    HEIGHT - PAD - fraction * (HEIGHT - 2.0 * PAD)
}

fn open(title: &str, class: &str) -> String {
    format!(
        r#"<figure class="chart {class}"><figcaption>{}</figcaption><svg viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{}" xmlns="http://www.w3.org/2000/svg">"#,
        escape(title),
        escape(title)
    )
}

fn axes(svg: &mut String, y_min: &str, y_max: &str, x_first: &str, x_last: &str) {
    let bottom = HEIGHT - PAD;
    let right = WIDTH - PAD;
    let _ = write!(
        svg,
        r##"<line class="axis" x1="{PAD}" y1="{PAD}" x2="{PAD}" y2="{bottom}" stroke="#888"/><line class="axis" x1="{PAD}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#888"/><text x="{}" y="{}" font-size="10" text-anchor="end">{}</text><text x="{}" y="{}" font-size="10" text-anchor="end">{}</text><text x="{PAD}" y="{}" font-size="10">{}</text><text x="{right}" y="{}" font-size="10" text-anchor="end">{}</text>"##,
        PAD - 4.0,
        bottom,
        escape(y_min),
        PAD - 4.0,
        PAD + 4.0,
        escape(y_max),
        bottom + 14.0,
        escape(x_first),
        bottom + 14.0,
        escape(x_last),
    );
}

fn close(svg: &mut String) {
    svg.push_str("</svg></figure>");
}

/// Line chart with a marker on every point.
pub fn line_chart(title: &str, points: &[(String, f64)]) -> String {
    let mut svg = open(title, "line-chart");
    if points.is_empty() {
        close(&mut svg);
        return svg;
    }
    let (min, max) = min_max(points.iter().map(|(_, v)| *v));
    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| (x_at(i, points.len()), y_at(normalize(*v, min, max))))
        .collect();

    axes(
        &mut svg,
        &format!("{min:.0}"),
        &format!("{max:.0}"),
        &points[0].0,
        &points[points.len() - 1].0,
    );
    let path: Vec<String> = coords.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect();
    let _ = write!(
        svg,
        r##"<polyline fill="none" stroke="#636efa" stroke-width="2" points="{}"/>"##,
        path.join(" ")
    );
    for ((x, y), (label, value)) in coords.iter().zip(points) {
        let _ = write!(
            svg,
            r##"<circle class="marker" cx="{x:.1}" cy="{y:.1}" r="3.5" fill="#636efa"><title>{}: {value:.0}</title></circle>"##,
            escape(label)
        );
    }
    close(&mut svg);
    svg
}

pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Fill color; defaults to the primary series color.
    pub color: Option<String>,
    /// Text printed above the bar.
    pub text: Option<String>,
}

/// Vertical bar chart with a zero baseline.
pub fn bar_chart(title: &str, bars: &[Bar]) -> String {
    let mut svg = open(title, "bar-chart");
    if bars.is_empty() {
        close(&mut svg);
        return svg;
    }
    let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let slot = (WIDTH - 2.0 * PAD) / bars.len() as f64;
    let bar_width = slot * 0.7;

    axes(
        &mut svg,
        "0",
        &format!("{max:.0}"),
        &bars[0].label,
        &bars[bars.len() - 1].label,
    );
    for (i, bar) in bars.iter().enumerate() {
        let top = y_at(if max > 0.0 { bar.value / max } else { 0.0 });
        let x = PAD + slot * i as f64 + (slot - bar_width) / 2.0;
        let height = HEIGHT - PAD - top;
        let color = bar.color.as_deref().unwrap_or("#636efa");
        let _ = write!(
            svg,
            r#"<rect class="bar" x="{x:.1}" y="{top:.1}" width="{bar_width:.1}" height="{height:.1}" fill="{}"><title>{}: {}</title></rect>"#,
            escape(color),
            escape(&bar.label),
            bar.value
        );
        if let Some(text) = &bar.text {
            let _ = write!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" font-size="11" text-anchor="middle">{}</text>"#,
                x + bar_width / 2.0,
                top - 4.0,
                escape(text)
            );
        }
    }
    close(&mut svg);
    svg
}

pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Drives marker radius and color.
    pub weight: f64,
}

/// Scatter chart; radius and Viridis color both scale with `weight`.
pub fn scatter_chart(title: &str, x_label: &str, y_label: &str, points: &[ScatterPoint]) -> String {
    let mut svg = open(title, "scatter-chart");
    if points.is_empty() {
        close(&mut svg);
        return svg;
    }
    let (x_min, x_max) = min_max(points.iter().map(|p| p.x));
    let (y_min, y_max) = min_max(points.iter().map(|p| p.y));
    let (w_min, w_max) = min_max(points.iter().map(|p| p.weight));

    axes(
        &mut svg,
        &format!("{y_min:.0}"),
        &format!("{y_max:.0}"),
        &format!("{x_label} {x_min:.0}"),
        &format!("{x_max:.0}"),
    );
    let _ = write!(
        svg,
        r#"<text x="{PAD}" y="{:.1}" font-size="10">{}</text>"#,
        PAD - 10.0,
        escape(y_label)
    );
    let span = WIDTH - 2.0 * PAD;
    for p in points {
        let t = normalize(p.weight, w_min, w_max);
        let cx = PAD + normalize(p.x, x_min, x_max) * span;
        let cy = y_at(normalize(p.y, y_min, y_max));
        let _ = write!(
            svg,
            r#"<circle class="point" cx="{cx:.1}" cy="{cy:.1}" r="{:.1}" fill="{}" fill-opacity="0.8"><title>{x_label} {:.0}, {y_label} {:.0}</title></circle>"#,
            3.0 + 9.0 * t,
            viridis(t),
            p.x,
            p.y
        );
    }
    close(&mut svg);
    svg
}
