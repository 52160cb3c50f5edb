//! Site-level navigation helpers
//!
//! The quiz pages are served either from the root of a domain or from a
//! project sub-path (`/<repo>/` on static hosting). [`SiteRoot`] resolves
//! which one applies from the current page's path so that links, including
//! the quiz's home action, point at the right entry document. [`NavMenu`]
//! holds the open state of the collapsible header menu.

use serde::{Deserialize, Serialize};

use crate::constants::site::HOME_DOCUMENT;

/// Root path of the site, always starting and ending with `/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{base}")]
pub struct SiteRoot {
    base: String,
}

impl Default for SiteRoot {
    fn default() -> Self {
        Self {
            base: "/".to_owned(),
        }
    }
}

impl SiteRoot {
    /// Resolves the site root from a page path such as `/repo/pages/quiz.html`
    ///
    /// The first path segment is taken as a project sub-path when it is a
    /// directory, that is when more of the path follows it. A page directly
    /// under the domain root (`/index.html`) resolves to `/`.
    pub fn from_pathname(pathname: &str) -> Self {
        let mut segments = pathname.trim_start_matches('/').splitn(2, '/');

        match (segments.next(), segments.next()) {
            (Some(first), Some(_)) if !first.is_empty() => Self {
                base: format!("/{first}/"),
            },
            _ => Self::default(),
        }
    }

    /// Returns the root path
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the location of a document relative to the site root
    pub fn link(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// Returns the location of the site's entry document
    pub fn home(&self) -> String {
        self.link(HOME_DOCUMENT)
    }
}

/// Open state of the collapsible navigation menu
///
/// The hamburger icon and the menu it controls always share one state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Returns whether the menu is expanded
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Handles a click on the hamburger icon; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Handles a click on one of the menu's links
    pub fn link_clicked(&mut self) {
        self.open = false;
    }
}
