//! Page Router and the five page renderers.
//! Renderers take the session context explicitly and return a full HTML document.

pub mod about;
pub mod charts;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod layout;
pub mod projects;

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    About,
    Projects,
    Dashboard,
    Contact,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Dashboard,
        Page::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Dashboard => "Dashboard",
            Page::Contact => "Contact",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::About => "👤",
            Page::Projects => "📁",
            Page::Dashboard => "📊",
            Page::Contact => "📧",
        }
    }

    /// Label as shown in the sidebar, e.g. "📁 Projects".
    pub fn display_label(&self) -> String {
        format!("{} {}", self.icon(), self.label())
    }

    pub fn href(&self) -> String {
        format!("/?page={}", self.label())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a navigation label to its page.
///
/// Accepts the plain label or the emoji-prefixed display label, ignoring ASCII
/// case. Returns `None` for anything else.
pub fn route(label: &str) -> Option<Page> {
    let label = label.trim();
    Page::ALL.into_iter().find(|page| {
        let plain = page.label();
        label.eq_ignore_ascii_case(plain)
            || label
                .strip_prefix(page.icon())
                .is_some_and(|rest| rest.trim().eq_ignore_ascii_case(plain))
    })
}

/// Current-page state for one session. Starts on `Home`; each selection fully
/// replaces the current page and nothing else is remembered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Page,
}

impl Navigator {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn select(&mut self, page: Page) -> Page {
        self.current = page;
        self.current
    }
}
