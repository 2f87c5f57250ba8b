//! Page shell shared by every renderer: head, sidebar navigation, social
//! links and footer, plus small building blocks (notices, metric cards).

use std::fmt::Write;

use crate::content::catalog;
use crate::content::models::SocialLink;
use crate::pages::Page;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #262730; }
.app { display: flex; min-height: 100vh; }
.sidebar { width: 240px; background: #f0f2f6; padding: 1.5rem 1rem; }
.sidebar a { display: block; padding: .4rem .6rem; border-radius: .4rem; color: inherit; text-decoration: none; }
.sidebar a.active { background: #ff4b4b; color: #fff; }
.main { flex: 1; padding: 2rem 3rem; max-width: 1100px; }
.columns { display: flex; gap: 1.5rem; flex-wrap: wrap; }
.columns > * { flex: 1; min-width: 180px; }
.metric .value { font-size: 2rem; }
.delta.up { color: #09ab3b; } .delta.down { color: #ff2b2b; }
.notice { padding: .8rem 1rem; border-radius: .4rem; margin: .8rem 0; }
.notice.success { background: #dff5e3; } .notice.info { background: #e1effe; }
.notice.warning { background: #fff8d6; } .notice.error { background: #fde2e2; }
details { border: 1px solid #ddd; border-radius: .4rem; padding: .6rem 1rem; margin: .6rem 0; }
figure.chart svg { width: 100%; height: auto; }
"#;

/// Escapes text for HTML element content and attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        }
    }
}

pub fn notice(kind: NoticeKind, text: &str) -> String {
    format!(
        r#"<div class="notice {}" role="status">{}</div>"#,
        kind.class(),
        escape(text)
    )
}

/// KPI card with an optional "+3" / "-5%" style delta.
pub fn metric_card(label: &str, value: &str, delta: Option<&str>) -> String {
    let delta_html = delta
        .map(|d| {
            let direction = if d.starts_with('-') { "down" } else { "up" };
            format!(r#"<div class="delta {direction}">{}</div>"#, escape(d))
        })
        .unwrap_or_default();
    format!(
        r#"<div class="metric"><div class="label">{}</div><div class="value">{}</div>{delta_html}</div>"#,
        escape(label),
        escape(value)
    )
}

fn sidebar(active: Page, links: &[SocialLink]) -> String {
    let mut html = String::from(r#"<nav class="sidebar"><h2>📍 Navigation</h2>"#);
    for page in Page::ALL {
        let class = if page == active { r#" class="active""# } else { "" };
        let _ = write!(
            html,
            r#"<a href="{}"{class}>{}</a>"#,
            escape(&page.href()),
            escape(&page.display_label())
        );
    }
    html.push_str("<hr><h3>🔗 Social Media</h3><ul>");
    for link in links {
        let _ = write!(
            html,
            r#"<li><a href="{}">{}</a></li>"#,
            escape(&link.url),
            escape(&link.label)
        );
    }
    html.push_str("</ul><hr><small>© 2024 My Portfolio</small></nav>");
    html
}

/// Wraps a page body in the full document with the sidebar marking `active`.
pub fn document(active: Page, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} — Portfolio {}</title>
    <style>{STYLE}</style>
</head>
<body>
<div class="app">
{}
<main class="main">
{body}
</main>
</div>
</body>
</html>"#,
        escape(active.label()),
        escape(catalog::OWNER_ROLE),
        sidebar(active, &catalog::social_links()),
    )
}
