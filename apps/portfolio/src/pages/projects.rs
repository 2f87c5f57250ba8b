use std::fmt::Write;

use crate::content::catalog;
use crate::content::filter::{filter_projects, FilterCriteria, YEAR_MAX, YEAR_MIN};
use crate::content::models::{Category, Project};
use crate::pages::layout::{document, escape, notice, NoticeKind};
use crate::pages::Page;
use crate::session::SessionContext;

pub struct ProjectsView {
    pub criteria: FilterCriteria,
    pub screenshot_available: bool,
    /// Catalog index of a project whose "View Project" button was pressed.
    pub viewed: Option<usize>,
}

/// Query string reproducing `criteria`, so links keep the current filter.
pub fn filter_query(criteria: &FilterCriteria) -> String {
    let mut query = String::from("page=Projects&filtered=1");
    for category in &criteria.categories {
        let _ = write!(query, "&category={}", category.as_str());
    }
    let (lo, hi) = criteria.year_range;
    let _ = write!(query, "&year_from={lo}&year_to={hi}");
    query
}

fn filter_form(criteria: &FilterCriteria) -> String {
    let mut boxes = String::new();
    for category in Category::ALL {
        let checked = if criteria.categories.contains(&category) {
            " checked"
        } else {
            ""
        };
        let _ = write!(
            boxes,
            r#"<label><input type="checkbox" name="category" value="{0}"{checked}> {0}</label> "#,
            category.as_str()
        );
    }
    let (lo, hi) = criteria.year_range;
    format!(
        r#"<h2>🔍 Filter Projects</h2>
<form method="get" action="/" class="columns">
  <input type="hidden" name="page" value="Projects">
  <input type="hidden" name="filtered" value="1">
  <fieldset><legend>Category</legend>{boxes}</fieldset>
  <fieldset><legend>Year</legend>
    <input type="number" name="year_from" min="{YEAR_MIN}" max="{YEAR_MAX}" value="{lo}">
    –
    <input type="number" name="year_to" min="{YEAR_MIN}" max="{YEAR_MAX}" value="{hi}">
  </fieldset>
  <button type="submit">Apply</button>
</form>"#
    )
}

fn project_card(
    index: usize,
    project: &Project,
    expanded: bool,
    view: &ProjectsView,
) -> String {
    let d = &project.description;
    let highlights: String = d
        .highlights
        .iter()
        .map(|h| format!("<li>{}</li>", escape(h)))
        .collect();

    let screenshot = if !project.has_image {
        String::new()
    } else if view.screenshot_available {
        format!(
            r#"<aside><figure><img src="/assets/{}" alt="Project screenshot"><figcaption>Project Screenshot</figcaption></figure></aside>"#,
            catalog::PROJECT_SCREENSHOT
        )
    } else {
        format!(
            "<aside>{}</aside>",
            notice(NoticeKind::Info, "📷 Screenshot not available")
        )
    };

    let viewed = if view.viewed == Some(index) {
        notice(
            NoticeKind::Info,
            &format!("The link to project {} will open shortly!", project.title),
        )
    } else {
        String::new()
    };

    format!(
        r#"<details{open}>
  <summary>{icon} {title} ({year})</summary>
  <div class="columns">
    <section style="flex:2">
      <p><strong>Description:</strong> {summary}</p>
      <p><strong>Tools:</strong> {tools}</p>
      <p><strong>{label}:</strong></p>
      <ul>{highlights}</ul>
      <a class="button" href="/?{query}&amp;view={index}">🔗 View Project</a>
      {viewed}
    </section>
    {screenshot}
  </div>
</details>"#,
        open = if expanded { " open" } else { "" },
        icon = escape(&project.icon),
        title = escape(&project.title),
        year = project.year,
        summary = escape(&d.summary),
        tools = escape(&d.tools.join(", ")),
        label = escape(&d.highlights_label),
        query = escape(&filter_query(&view.criteria)),
    )
}

pub fn render(session: &SessionContext, view: &ProjectsView) -> String {
    let catalog = session.projects();
    let matching = filter_projects(catalog, &view.criteria);

    let results = if matching.is_empty() {
        notice(NoticeKind::Info, "📭 No projects match your filter")
    } else {
        matching
            .iter()
            .enumerate()
            .map(|(position, project)| {
                // Catalog index keeps "View Project" stable across filters.
                let index = catalog
                    .iter()
                    .position(|p| std::ptr::eq(p, *project))
                    .unwrap_or(position);
                project_card(index, project, position == 0, view)
            })
            .collect()
    };

    let body = format!(
        "<h1>📁 My Projects</h1>\n{}\n<hr>\n{}",
        filter_form(&view.criteria),
        results
    );
    document(Page::Projects, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn view(criteria: FilterCriteria) -> ProjectsView {
        ProjectsView {
            criteria,
            screenshot_available: false,
            viewed: None,
        }
    }

    #[test]
    fn test_default_filter_lists_all_projects() {
        let session = SessionContext::new(Uuid::new_v4(), None);
        let html = render(&session, &view(FilterCriteria::default()));
        assert_eq!(html.matches("<details").count(), 3);
        assert_eq!(html.matches("<details open>").count(), 1);
        assert!(html.contains("E-commerce Sales Analysis (2023)"));
    }

    #[test]
    fn test_empty_result_renders_empty_state() {
        let session = SessionContext::new(Uuid::new_v4(), None);
        let html = render(&session, &view(FilterCriteria::new(Vec::new(), (2021, 2024))));
        assert!(html.contains("No projects match your filter"));
        assert!(!html.contains("<details"));
    }

    #[test]
    fn test_filter_form_reflects_criteria() {
        let session = SessionContext::new(Uuid::new_v4(), None);
        let criteria = FilterCriteria::new([Category::Visualization], (2022, 2023));
        let html = render(&session, &view(criteria));
        assert!(html.contains(r#"value="Visualization" checked"#));
        assert!(!html.contains(r#"value="EDA" checked"#));
        assert!(html.contains(r#"name="year_from" min="2021" max="2024" value="2022""#));
    }

    #[test]
    fn test_viewed_project_acknowledged() {
        let session = SessionContext::new(Uuid::new_v4(), None);
        let mut v = view(FilterCriteria::default());
        v.viewed = Some(2);
        let html = render(&session, &v);
        assert!(html.contains("The link to project Churn Prediction Model will open shortly!"));
    }

    #[test]
    fn test_filter_query_round_trips_selection() {
        let criteria = FilterCriteria::new([Category::Eda, Category::Prediction], (2023, 2024));
        assert_eq!(
            filter_query(&criteria),
            "page=Projects&filtered=1&category=EDA&category=Prediction&year_from=2023&year_to=2024"
        );
    }
}
