//! Static portfolio content: skills, projects, certifications and links.
//!
//! Everything here is a literal. Callers normally go through
//! `SessionContext`, which builds each list once per session.

use crate::content::models::{
    Category, Certification, Project, ProjectDescription, QuickStat, SkillRating, SocialLink,
};

pub const OWNER_NAME: &str = "Muhammad Rizki";
pub const OWNER_ROLE: &str = "Data Analyst";
pub const CONTACT_EMAIL: &str = "email@example.com";

pub const PROFILE_IMAGE: &str = "profpict.png";
pub const PROJECT_SCREENSHOT: &str = "project1_ss.png";

pub const INTRO: &str = "I turn raw data into insights a business can act on. \
This portfolio collects the data projects I have worked on, from exploratory \
data analysis to business intelligence dashboards.";

pub const BACKGROUND: &str = "Data analyst with 3+ years of experience in the \
e-commerce and fintech industries.";

/// (area, detail) pairs listed under the background paragraph.
pub const SPECIALTIES: [(&str, &str); 4] = [
    ("Data Exploration & Cleaning", "Pandas & NumPy"),
    ("Data Visualization", "Tableau, PowerBI, Streamlit"),
    ("Statistical Analysis", "A/B Testing, Hypothesis Testing"),
    ("Business Intelligence", "Dashboard development, KPI tracking"),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn skills() -> Vec<SkillRating> {
    [
        ("Python", 95),
        ("SQL", 90),
        ("Tableau", 85),
        ("PowerBI", 80),
        ("Excel", 95),
        ("Statistics", 85),
    ]
    .into_iter()
    .map(|(skill, proficiency)| SkillRating {
        skill: skill.to_string(),
        proficiency,
    })
    .collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "E-commerce Sales Analysis".to_string(),
            icon: "📊".to_string(),
            category: Category::Eda,
            year: 2023,
            description: ProjectDescription {
                summary: "In-depth analysis of e-commerce sales data to identify trends \
                          and growth opportunities."
                    .to_string(),
                tools: strings(&["Python", "Pandas", "Matplotlib", "Streamlit"]),
                highlights_label: "Key Insights".to_string(),
                highlights: strings(&[
                    "Total sales grew 45% YoY",
                    "Electronics is the top performing category",
                    "Q4 is the best window for promotions",
                ]),
            },
            has_image: false,
        },
        Project {
            title: "Customer Segmentation Dashboard".to_string(),
            icon: "📈".to_string(),
            category: Category::Dashboard,
            year: 2023,
            description: ProjectDescription {
                summary: "Interactive dashboard segmenting customers with RFM analysis."
                    .to_string(),
                tools: strings(&["SQL", "Tableau", "Python"]),
                highlights_label: "Key Metrics".to_string(),
                highlights: strings(&[
                    "5 customer segments identified",
                    "Average CLV per segment",
                    "Churn risk prediction",
                ]),
            },
            has_image: false,
        },
        Project {
            title: "Churn Prediction Model".to_string(),
            icon: "🤖".to_string(),
            category: Category::Prediction,
            year: 2024,
            description: ProjectDescription {
                summary: "Machine learning model predicting customer churn with 85% accuracy."
                    .to_string(),
                tools: strings(&["Python", "Scikit-learn", "XGBoost"]),
                highlights_label: "Performance".to_string(),
                highlights: strings(&["Accuracy: 85%", "Precision: 0.82", "Recall: 0.88"]),
            },
            has_image: false,
        },
    ]
}

pub fn certifications() -> Vec<Certification> {
    [
        ("Google Analytics Certification", 2022),
        ("SQL for Data Analysis", 2021),
        ("Data Visualization with Tableau", 2023),
    ]
    .into_iter()
    .map(|(name, year)| Certification {
        name: name.to_string(),
        year,
    })
    .collect()
}

pub fn quick_stats() -> Vec<QuickStat> {
    [
        ("Projects Completed", 12, "+3"),
        ("Total Datasets", 50, "-5"),
        ("Clients", 8, "+2"),
        ("Years of Experience", 3, "+1"),
    ]
    .into_iter()
    .map(|(label, value, delta)| QuickStat {
        label: label.to_string(),
        value,
        delta: delta.to_string(),
    })
    .collect()
}

pub fn social_links() -> Vec<SocialLink> {
    [
        ("LinkedIn", "linkedin.com/in/username", "https://linkedin.com"),
        ("GitHub", "github.com/username", "https://github.com"),
        ("Email", CONTACT_EMAIL, "mailto:email@example.com"),
    ]
    .into_iter()
    .map(|(label, display, url)| SocialLink {
        label: label.to_string(),
        display: display.to_string(),
        url: url.to_string(),
    })
    .collect()
}
