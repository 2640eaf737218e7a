//! Navigation bar behavior: scroll spy and show/hide on scroll.
//!
//! Pure state; the host feeds it scroll positions, section geometry and key
//! presses and reads back what to highlight and whether the bar is shown.

/// Section anchors the scroll spy tracks, in page order.
pub const TRACKED_SECTIONS: [&str; 6] = [
    "about",
    "services",
    "projects",
    "skills",
    "experience",
    "contact",
];

/// Offset added to the scroll position before hit-testing sections.
pub const SPY_OFFSET: f64 = 100.0;
/// Scrolling down past this hides the bar.
pub const HIDE_AFTER: f64 = 150.0;
/// Scrolling past this switches the bar to its "scrolled" look.
pub const SCROLLED_AFTER: f64 = 20.0;

/// Vertical extent of a rendered section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The nav anchor (`#id`) to highlight at scroll position `scroll_y`.
///
/// The first tracked section containing `scroll_y + SPY_OFFSET` wins.
/// Sections outside [`TRACKED_SECTIONS`] (the hero, testimonials) are never
/// highlighted, and nothing is highlighted near the top of the page.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<String> {
    if scroll_y < SPY_OFFSET {
        return None;
    }
    let probe = scroll_y + SPY_OFFSET;
    sections
        .iter()
        .filter(|s| TRACKED_SECTIONS.contains(&s.id.as_str()))
        .find(|s| s.contains(probe))
        .map(|s| format!("#{}", s.id))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavbarState {
    pub menu_open: bool,
    pub hidden: bool,
    pub scrolled: bool,
    pub active: Option<String>,
    previous: f64,
}

impl NavbarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a new scroll position.
    pub fn on_scroll(&mut self, latest: f64, sections: &[SectionBounds]) {
        if latest > self.previous && latest > HIDE_AFTER {
            self.hidden = true;
            self.menu_open = false;
        } else {
            self.hidden = false;
        }
        self.scrolled = latest > SCROLLED_AFTER;
        self.active = active_section(sections, latest);
        self.previous = latest;
    }

    /// Escape closes the mobile menu; other keys are ignored.
    pub fn on_key(&mut self, key: &str) {
        if key == "Escape" {
            self.menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Follow a nav link: closes the menu and returns the section id to
    /// scroll to, if the link is an in-page anchor.
    pub fn nav_click<'a>(&mut self, href: &'a str) -> Option<&'a str> {
        self.menu_open = false;
        href.strip_prefix('#').filter(|id| !id.is_empty())
    }

    /// Body scrolling is locked while the mobile menu is open.
    pub fn scroll_locked(&self) -> bool {
        self.menu_open
    }
}
