use std::fmt::Write;

use crate::contact::{ContactForm, ContactOutcome, ContactSubject};
use crate::content::catalog;
use crate::pages::layout::{document, escape, notice, NoticeKind};
use crate::pages::Page;

/// Form values to pre-fill plus the outcome of the last submission, if any.
#[derive(Debug, Default)]
pub struct ContactView {
    pub form: ContactForm,
    pub outcome: Option<ContactOutcome>,
}

impl ContactView {
    /// Accepted submissions start from a blank form; rejected ones keep what
    /// the visitor typed so they can fix it and resend.
    pub fn after_submit(form: ContactForm, outcome: ContactOutcome) -> Self {
        let form = if outcome.is_accepted() {
            ContactForm::default()
        } else {
            form
        };
        Self {
            form,
            outcome: Some(outcome),
        }
    }
}

pub fn render(view: &ContactView) -> String {
    let selected = view.form.subject();
    let mut options = String::new();
    for subject in ContactSubject::ALL {
        let marker = if subject == selected { " selected" } else { "" };
        let _ = write!(
            options,
            r#"<option value="{0}"{marker}>{0}</option>"#,
            escape(subject.as_str())
        );
    }

    let outcome = match &view.outcome {
        Some(o @ ContactOutcome::Accepted { .. }) => {
            notice(NoticeKind::Success, &format!("✅ {}", o.message()))
        }
        Some(o @ ContactOutcome::Rejected { .. }) => {
            notice(NoticeKind::Error, &format!("❌ {}", o.message()))
        }
        None => String::new(),
    };

    let links: String = catalog::social_links()
        .iter()
        .map(|l| {
            format!(
                r#"<div><strong>{}</strong><br><a href="{}">{}</a></div>"#,
                escape(&l.label),
                escape(&l.url),
                escape(&l.display)
            )
        })
        .collect();

    let body = format!(
        r#"<h1>📧 Get in Touch</h1>
<p>If you are interested in collaborating or have a question, reach me through the form below!</p>
<hr>
<form method="post" action="/contact">
  <label>Full Name<br><input type="text" name="name" value="{name}"></label><br>
  <label>Email<br><input type="text" name="email" value="{email}"></label><br>
  <label>Subject<br><select name="subject">{options}</select></label><br>
  <label>Message<br><textarea name="message" rows="7">{message}</textarea></label><br>
  <button type="submit">📤 Send Message</button>
</form>
{outcome}
<hr>
<h2>🔗 Other Contacts</h2>
<div class="columns">{links}</div>"#,
        name = escape(&view.form.name),
        email = escape(&view.form.email),
        message = escape(&view.form.message),
    );
    document(Page::Contact, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::submit_form;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: Some("Collaboration".to_string()),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_blank_form_defaults_subject() {
        let html = render(&ContactView::default());
        assert!(html.contains(r#"<option value="Project Inquiry" selected>"#));
        assert!(!html.contains(r#"<div class="notice"#));
    }

    #[test]
    fn test_rejected_submission_keeps_values() {
        let submitted = form("", "a@b.com", "Hello <there>");
        let outcome = submit_form(&submitted);
        let html = render(&ContactView::after_submit(submitted, outcome));
        assert!(html.contains("Please fill in all fields!"));
        assert!(html.contains(r#"value="a@b.com""#));
        assert!(html.contains("Hello &lt;there&gt;"));
        assert!(html.contains(r#"<option value="Collaboration" selected>"#));
    }

    #[test]
    fn test_accepted_submission_thanks_sender_and_clears() {
        let submitted = form("Ana", "ana@example.com", "Hi");
        let outcome = submit_form(&submitted);
        let html = render(&ContactView::after_submit(submitted, outcome));
        assert!(html.contains("Thank you, Ana!"));
        assert!(!html.contains(r#"value="ana@example.com""#));
    }
}
