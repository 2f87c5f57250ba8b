use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content::models::{Category, Project};

/// Bounds of the year-range selector on the projects page.
pub const YEAR_MIN: i32 = 2021;
pub const YEAR_MAX: i32 = 2024;

/// Category and year selection for the project list. Rebuilt per request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    pub categories: BTreeSet<Category>,
    /// Inclusive on both ends.
    pub year_range: (i32, i32),
}

impl FilterCriteria {
    pub fn new(categories: impl IntoIterator<Item = Category>, year_range: (i32, i32)) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            year_range,
        }
    }

    /// Pins both ends of the year range into the selector bounds. An inverted
    /// range stays inverted.
    pub fn clamped(mut self) -> Self {
        let (lo, hi) = self.year_range;
        self.year_range = (lo.clamp(YEAR_MIN, YEAR_MAX), hi.clamp(YEAR_MIN, YEAR_MAX));
        self
    }

    pub fn matches(&self, project: &Project) -> bool {
        let (lo, hi) = self.year_range;
        self.categories.contains(&project.category) && lo <= project.year && project.year <= hi
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(
            [Category::Eda, Category::Dashboard, Category::Prediction],
            (YEAR_MIN, YEAR_MAX),
        )
    }
}

/// Returns the projects matching `criteria`, in catalog order.
pub fn filter_projects<'a>(projects: &'a [Project], criteria: &FilterCriteria) -> Vec<&'a Project> {
    projects.iter().filter(|p| criteria.matches(p)).collect()
}
