use std::fmt::Write;

use crate::content::catalog;
use crate::pages::charts::{bar_chart, viridis, Bar};
use crate::pages::layout::{document, escape};
use crate::pages::Page;
use crate::session::SessionContext;

pub fn render(session: &SessionContext) -> String {
    let mut specialties = String::new();
    for (area, detail) in catalog::SPECIALTIES {
        let _ = write!(
            specialties,
            "<li><strong>{}</strong>: {}</li>",
            escape(area),
            escape(detail)
        );
    }

    // Color scale spans the observed proficiency range, as in a continuous legend.
    let skills = session.skills();
    let lo = skills.iter().map(|s| s.proficiency).min().unwrap_or(0) as f64;
    let hi = skills.iter().map(|s| s.proficiency).max().unwrap_or(100) as f64;
    let bars: Vec<Bar> = skills
        .iter()
        .map(|s| {
            let value = s.proficiency as f64;
            let t = if hi > lo { (value - lo) / (hi - lo) } else { 1.0 };
            Bar {
                label: s.skill.clone(),
                value,
                color: Some(viridis(t)),
                text: Some(s.proficiency.to_string()),
            }
        })
        .collect();

    let certifications: String = catalog::certifications()
        .iter()
        .map(|c| {
            format!(
                "<div><strong>{}</strong><br>✅ Certified, {}</div>",
                escape(&c.name),
                c.year
            )
        })
        .collect();

    let body = format!(
        r#"<h1>👤 About Me</h1>
<h2>Background</h2>
<p>{background} I specialise in:</p>
<ul>{specialties}</ul>
<h2>🛠️ Technical Skills</h2>
{chart}
<h2>📚 Certifications</h2>
<div class="columns">{certifications}</div>"#,
        background = escape(catalog::BACKGROUND),
        chart = bar_chart("Skill Proficiency", &bars),
    );
    document(Page::About, &body)
}
