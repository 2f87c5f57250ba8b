use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "EDA")]
    Eda,
    Dashboard,
    Prediction,
    Visualization,
}

impl Category {
    /// All categories in selector order.
    pub const ALL: [Category; 4] = [
        Category::Eda,
        Category::Dashboard,
        Category::Prediction,
        Category::Visualization,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Eda => "EDA",
            Category::Dashboard => "Dashboard",
            Category::Prediction => "Prediction",
            Category::Visualization => "Visualization",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown project category '{s}'"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDescription {
    pub summary: String,
    pub tools: Vec<String>,
    /// Heading over `highlights`, e.g. "Key Insights" or "Performance".
    pub highlights_label: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    /// Emoji shown before the title in the project list.
    pub icon: String,
    pub category: Category,
    pub year: i32,
    pub description: ProjectDescription,
    pub has_image: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillRating {
    pub skill: String,
    pub proficiency: u8, // 0 – 100
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricSample {
    pub date: NaiveDate,
    pub sales: u32,
    pub visitors: u32,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certification {
    pub name: String,
    pub year: i32,
}

/// Headline counter on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickStat {
    pub label: String,
    pub value: u32,
    pub delta: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub display: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_case_insensitively() {
        assert_eq!("eda".parse::<Category>(), Ok(Category::Eda));
        assert_eq!(" Dashboard ".parse::<Category>(), Ok(Category::Dashboard));
        assert!("Forecasting".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_with_display_name() {
        let json = serde_json::to_string(&Category::Eda).unwrap();
        assert_eq!(json, "\"EDA\"");
        let back: Category = serde_json::from_str("\"Visualization\"").unwrap();
        assert_eq!(back, Category::Visualization);
    }
}
