//! In-page navigation: section anchors and scroll offsets.

pub const HEADER_HEIGHT: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Sections linked from the navbar and footer, in page order.
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_id(id: &str) -> Option<Section> {
        [Section::Hero]
            .into_iter()
            .chain(Section::NAV)
            .find(|s| s.id() == id)
    }
}

/// Extracts the element id from an in-page link (`#about` or `/#about`).
pub fn anchor_id(href: &str) -> Option<&str> {
    let hash = href.strip_prefix('/').unwrap_or(href);
    let id = hash.strip_prefix('#')?;
    if id.is_empty() || id.contains(['/', '#']) {
        None
    } else {
        Some(id)
    }
}

/// Scroll position that puts the target just under the fixed header.
pub fn scroll_target(offset_top: f64, header_height: f64) -> f64 {
    (offset_top - header_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id() {
        assert_eq!(anchor_id("#about"), Some("about"));
        assert_eq!(anchor_id("/#projects"), Some("projects"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/"), None);
        assert_eq!(anchor_id("https://github.com"), None);
        assert_eq!(anchor_id("/blog#x"), None);
        assert_eq!(anchor_id("#a/b"), None);
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(1000.0, HEADER_HEIGHT), 930.0);
        assert_eq!(scroll_target(20.0, HEADER_HEIGHT), 0.0);
        assert_eq!(scroll_target(70.0, HEADER_HEIGHT), 0.0);
    }

    #[test]
    fn test_sections_round_trip_ids() {
        for s in Section::NAV {
            assert_eq!(Section::from_id(s.id()), Some(s));
            assert_eq!(anchor_id(&s.href()), Some(s.id()));
        }
        assert_eq!(Section::from_id("hero"), Some(Section::Hero));
        assert_eq!(Section::from_id("blog"), None);
    }
}
