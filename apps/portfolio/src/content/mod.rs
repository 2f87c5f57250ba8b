//! Content Store: static catalog data, synthetic metrics and project filtering.
//! Nothing in here does I/O; per-session caching lives in crate::session.

pub mod catalog;
pub mod filter;
pub mod metrics;
pub mod models;

pub use models::{Category, MetricSample, Project, SkillRating};
