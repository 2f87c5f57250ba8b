use crate::content::catalog;
use crate::pages::layout::{document, escape, metric_card, notice, NoticeKind};
use crate::pages::Page;

/// Buttons on the home page. Both only acknowledge the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    DownloadCv,
    ContactMe,
}

impl HomeAction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "download_cv" => Some(HomeAction::DownloadCv),
            "contact_me" => Some(HomeAction::ContactMe),
            _ => None,
        }
    }

    fn acknowledgment(&self) -> String {
        match self {
            HomeAction::DownloadCv => notice(NoticeKind::Success, "CV downloaded!"),
            HomeAction::ContactMe => notice(
                NoticeKind::Info,
                "Head over to the Contact page to send me a message!",
            ),
        }
    }
}

pub struct HomeView {
    pub profile_image_available: bool,
    pub action: Option<HomeAction>,
}

/// Profile picture, or a warning plus hint when the file is missing.
pub fn profile_image(available: bool) -> String {
    if available {
        format!(
            r#"<figure><img src="/assets/{}" alt="Profile photo" style="width:100%"><figcaption>Profile Photo</figcaption></figure>"#,
            catalog::PROFILE_IMAGE
        )
    } else {
        format!(
            "{}{}",
            notice(
                NoticeKind::Warning,
                &format!("⚠️ File 'assets/{}' not found!", catalog::PROFILE_IMAGE)
            ),
            notice(
                NoticeKind::Info,
                "💡 Create an 'assets/' folder and put your photo in it."
            )
        )
    }
}

pub fn render(view: &HomeView) -> String {
    let ack = view
        .action
        .map(|a| a.acknowledgment())
        .unwrap_or_default();
    let stats: String = catalog::quick_stats()
        .iter()
        .map(|s| metric_card(&s.label, &s.value.to_string(), Some(s.delta.as_str())))
        .collect();

    let body = format!(
        r#"<div class="columns">
  <section style="flex:2">
    <h1>🌟 Welcome!</h1>
    <p>Hi, my name is <strong>{owner}</strong>. I am a <strong>{role}</strong>.</p>
    <p>{intro}</p>
    <div class="columns">
      <a class="button" href="/?page=Home&amp;action=download_cv">📥 Download CV</a>
      <a class="button" href="/?page=Home&amp;action=contact_me">💬 Contact Me</a>
    </div>
    {ack}
  </section>
  <aside>{image}</aside>
</div>
<hr>
<h2>📈 Quick Stats</h2>
<div class="columns">{stats}</div>"#,
        owner = escape(catalog::OWNER_NAME),
        role = escape(catalog::OWNER_ROLE),
        intro = escape(catalog::INTRO),
        image = profile_image(view.profile_image_available),
    );
    document(Page::Home, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_profile_image_shows_warning() {
        let html = render(&HomeView {
            profile_image_available: false,
            action: None,
        });
        assert!(html.contains("not found"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_profile_image_rendered_when_present() {
        let html = render(&HomeView {
            profile_image_available: true,
            action: None,
        });
        assert!(html.contains(r#"<img src="/assets/profpict.png""#));
    }

    #[test]
    fn test_quick_stats_and_action_notice() {
        let html = render(&HomeView {
            profile_image_available: false,
            action: Some(HomeAction::DownloadCv),
        });
        assert!(html.contains("Projects Completed"));
        assert!(html.contains("Years of Experience"));
        assert!(html.contains("CV downloaded!"));
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!(HomeAction::parse("contact_me"), Some(HomeAction::ContactMe));
        assert_eq!(HomeAction::parse("delete_all"), None);
    }
}
