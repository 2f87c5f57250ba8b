//! Contact form validation.
//!
//! Submissions are only validated and acknowledged; nothing is sent anywhere.

use serde::{Deserialize, Serialize};

pub const MISSING_FIELD_REASON: &str = "missing required field";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContactSubject {
    #[default]
    #[serde(rename = "Project Inquiry")]
    ProjectInquiry,
    Collaboration,
    #[serde(rename = "General Question")]
    GeneralQuestion,
    Others,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 4] = [
        ContactSubject::ProjectInquiry,
        ContactSubject::Collaboration,
        ContactSubject::GeneralQuestion,
        ContactSubject::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSubject::ProjectInquiry => "Project Inquiry",
            ContactSubject::Collaboration => "Collaboration",
            ContactSubject::GeneralQuestion => "General Question",
            ContactSubject::Others => "Others",
        }
    }

    /// Unknown or missing labels fall back to the default subject.
    pub fn from_label(label: Option<&str>) -> Self {
        label
            .and_then(|l| Self::ALL.into_iter().find(|s| s.as_str() == l.trim()))
            .unwrap_or_default()
    }
}

/// Raw form fields as submitted. Subject is kept as text so an unexpected value
/// degrades to the default instead of failing extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn subject(&self) -> ContactSubject {
        ContactSubject::from_label(self.subject.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContactOutcome {
    Accepted { name: String, subject: ContactSubject },
    Rejected { reason: String },
}

impl ContactOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ContactOutcome::Accepted { .. })
    }

    /// Text shown to the visitor after submitting.
    pub fn message(&self) -> String {
        match self {
            ContactOutcome::Accepted { name, .. } => format!(
                "Thank you, {name}! Your message has been sent. I will get back to you within 24 hours."
            ),
            ContactOutcome::Rejected { .. } => "Please fill in all fields!".to_string(),
        }
    }
}

/// Accepts iff name, email and message are all non-empty. The email is not
/// format-checked and whitespace counts as content.
pub fn submit(name: &str, email: &str, subject: ContactSubject, message: &str) -> ContactOutcome {
    if name.is_empty() || email.is_empty() || message.is_empty() {
        tracing::info!(subject = subject.as_str(), "Contact form rejected");
        return ContactOutcome::Rejected {
            reason: MISSING_FIELD_REASON.to_string(),
        };
    }
    tracing::info!(subject = subject.as_str(), "Contact form accepted");
    ContactOutcome::Accepted {
        name: name.to_string(),
        subject,
    }
}

pub fn submit_form(form: &ContactForm) -> ContactOutcome {
    submit(&form.name, &form.email, form.subject(), &form.message)
}
