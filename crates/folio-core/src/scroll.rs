//! Scroll-derived navigation state.
//!
//! [`ScrollTracker`] picks the nav link to highlight from live section
//! geometry; [`RevealTracker`] records one-shot fade-in reveals.

use crate::config::FolioConfig;
use std::collections::BTreeSet;

/// Section geometry measured from layout at the moment of the scroll event.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionDescriptor {
    pub id: String,
    pub top_offset: f64,
    pub height: f64,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top_offset,
            height,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollTracker {
    offset: f64,
    home_threshold: f64,
    home_section: String,
}

impl ScrollTracker {
    pub fn new(offset: f64, home_threshold: f64, home_section: impl Into<String>) -> Self {
        Self {
            offset,
            home_threshold,
            home_section: home_section.into(),
        }
    }

    pub fn from_config(config: &FolioConfig) -> Self {
        Self::new(
            config.scroll_offset,
            config.home_threshold,
            config.home_section.clone(),
        )
    }

    /// Activation window `[top - offset, top - offset + height)`.
    pub fn window(&self, section: &SectionDescriptor) -> (f64, f64) {
        let start = section.top_offset - self.offset;
        (start, start + section.height)
    }

    /// Id of the section whose link should be active at `scroll_y`.
    ///
    /// Sections are walked in document order and the last window containing
    /// `scroll_y` wins. Near the top of the page the home section always
    /// wins. `None` means no window matched and the current highlight stays.
    pub fn active_section<'a>(
        &'a self,
        sections: &'a [SectionDescriptor],
        scroll_y: f64,
    ) -> Option<&'a str> {
        if scroll_y < self.home_threshold {
            return Some(&self.home_section);
        }

        sections
            .iter()
            .rev()
            .find(|section| {
                let (start, end) = self.window(section);
                scroll_y >= start && scroll_y < end
            })
            .map(|section| section.id.as_str())
    }
}

/// `href` a nav link must carry to point at section `id`.
pub fn link_href(id: &str) -> String {
    format!("#{id}")
}

/// Element id an in-page anchor `href` targets. The bare `"#"` targets nothing.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Monotonic set of revealed elements, keyed by document-order index.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `index` revealed. Returns `true` only on the first call for it.
    pub fn reveal(&mut self, index: usize) -> bool {
        let first = self.revealed.insert(index);
        if first {
            tracing::debug!(index, "element revealed");
        }
        first
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::new("home", 0.0, 600.0),
            SectionDescriptor::new("about", 600.0, 800.0),
            SectionDescriptor::new("skills", 1400.0, 500.0),
            SectionDescriptor::new("contact", 1900.0, 700.0),
        ]
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::from_config(&FolioConfig::default())
    }

    #[test]
    fn window_is_shifted_by_offset() {
        let section = SectionDescriptor::new("about", 600.0, 800.0);
        assert_eq!(tracker().window(&section), (480.0, 1280.0));
    }

    #[test]
    fn near_top_always_home() {
        let sections = vec![SectionDescriptor::new("hero", -200.0, 1000.0)];
        assert_eq!(tracker().active_section(&sections, 50.0), Some("home"));
        assert_eq!(tracker().active_section(&[], 0.0), Some("home"));
    }

    #[test]
    fn picks_section_containing_scroll() {
        let sections = page();
        let tracker = tracker();

        assert_eq!(tracker.active_section(&sections, 480.0), Some("about"));
        assert_eq!(tracker.active_section(&sections, 1279.0), Some("about"));
        assert_eq!(tracker.active_section(&sections, 1280.0), Some("skills"));
        assert_eq!(tracker.active_section(&sections, 2000.0), Some("contact"));
    }

    #[test]
    fn overlapping_windows_last_in_document_order_wins() {
        let sections = vec![
            SectionDescriptor::new("outer", 200.0, 2000.0),
            SectionDescriptor::new("inner", 500.0, 300.0),
            SectionDescriptor::new("after", 3000.0, 300.0),
        ];
        assert_eq!(tracker().active_section(&sections, 500.0), Some("inner"));
        assert_eq!(tracker().active_section(&sections, 900.0), Some("outer"));
    }

    #[test]
    fn no_match_keeps_current_highlight() {
        let sections = vec![SectionDescriptor::new("about", 1000.0, 100.0)];
        assert_eq!(tracker().active_section(&sections, 5000.0), None);
    }

    #[test]
    fn custom_home_section() {
        let tracker = ScrollTracker::new(120.0, 100.0, "top");
        assert_eq!(tracker.active_section(&page(), 10.0), Some("top"));
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/blog"), None);
        assert_eq!(link_href("contact"), "#contact");
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut reveals = RevealTracker::new();
        assert!(reveals.is_empty());

        assert!(reveals.reveal(2));
        assert!(!reveals.reveal(2));
        assert!(reveals.reveal(0));

        assert!(reveals.is_revealed(2));
        assert!(!reveals.is_revealed(1));
        assert_eq!(reveals.len(), 2);
    }
}
