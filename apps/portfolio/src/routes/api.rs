//! Axum route handlers for the JSON API.

use axum::{extract::State, Json};
use axum_extra::extract::{CookieJar, Query, QueryRejection};
use serde::{Deserialize, Serialize};

use crate::contact::{submit_form, ContactForm, ContactOutcome};
use crate::content::filter::{filter_projects, FilterCriteria};
use crate::content::metrics::{summarize, MetricsSummary};
use crate::content::{MetricSample, Project, SkillRating};
use crate::errors::AppError;
use crate::pages::Page;
use crate::routes::{resolve_session, PageQuery};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct PageEntry {
    pub label: String,
    pub display_label: String,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub criteria: FilterCriteria,
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub samples: Vec<MetricSample>,
    pub summary: MetricsSummary,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/pages
pub async fn handle_pages() -> Json<Vec<PageEntry>> {
    Json(
        Page::ALL
            .iter()
            .map(|p| PageEntry {
                label: p.label().to_string(),
                display_label: p.display_label(),
                href: p.href(),
            })
            .collect(),
    )
}

/// GET /api/v1/skills
pub async fn handle_skills(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<Vec<SkillRating>>) {
    let (session, jar) = resolve_session(&state, jar);
    let skills = session.skills().to_vec();
    (jar, Json(skills))
}

/// GET /api/v1/projects
///
/// Same filter parameters as the projects page; without any category the
/// configured defaults apply.
pub async fn handle_projects(
    State(state): State<AppState>,
    jar: CookieJar,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<(CookieJar, Json<ProjectsResponse>), AppError> {
    let query = PageQuery::from_extracted(query)?;
    let criteria = query.criteria(&state.config.default_filter)?;
    let (session, jar) = resolve_session(&state, jar);
    let projects = filter_projects(session.projects(), &criteria)
        .into_iter()
        .cloned()
        .collect();
    Ok((jar, Json(ProjectsResponse { criteria, projects })))
}

/// GET /api/v1/metrics
pub async fn handle_metrics(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MetricsResponse>) {
    let (session, jar) = resolve_session(&state, jar);
    let samples = session.metrics().to_vec();
    let summary = summarize(&samples);
    (jar, Json(MetricsResponse { samples, summary }))
}

/// POST /api/v1/contact
///
/// 200 with an acknowledgment, or 400 when a required field is empty.
pub async fn handle_contact(Json(form): Json<ContactForm>) -> Result<Json<ContactResponse>, AppError> {
    let outcome = submit_form(&form);
    match outcome {
        ContactOutcome::Accepted { .. } => Ok(Json(ContactResponse {
            status: "accepted",
            message: outcome.message(),
        })),
        ContactOutcome::Rejected { reason } => Err(AppError::Validation(reason)),
    }
}
