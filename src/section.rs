/// Scroll position probe offset compensating for the fixed header height.
pub const SCROLL_PROBE_OFFSET: f64 = 100.0;

/// The page's addressable sections, in document order. This order is the
/// single source of truth for the navigation bar and scroll-spy matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Education,
    Experience,
    Projects,
    Instagram,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Instagram,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM element id / anchor name.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Instagram => "instagram",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Instagram => "Instagram",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

/// A section's vertical extent in the rendered layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMetrics {
    pub top: f64,
    pub height: f64,
}

/// Source of rendered layout intervals. Production code reads the DOM;
/// tests supply synthetic metrics. `None` means the section isn't mounted.
pub trait LayoutMetrics {
    fn metrics(&self, section: Section) -> Option<SectionMetrics>;
}

/// The first section, in registry order, whose `[top, top + height)`
/// interval contains `position`. Unmounted sections are skipped. `None`
/// means no interval matched and the caller should keep its previous
/// active section.
pub fn active_at(layout: &impl LayoutMetrics, position: f64) -> Option<Section> {
    Section::ALL.into_iter().find(|section| {
        layout
            .metrics(*section)
            .is_some_and(|m| position >= m.top && position < m.top + m.height)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeLayout(HashMap<Section, SectionMetrics>);

    impl FakeLayout {
        fn stacked(heights: &[(Section, f64)]) -> Self {
            let mut top = 0.0;
            let mut map = HashMap::new();
            for (section, height) in heights {
                map.insert(*section, SectionMetrics {
                    top,
                    height: *height,
                });
                top += height;
            }
            Self(map)
        }
    }

    impl LayoutMetrics for FakeLayout {
        fn metrics(&self, section: Section) -> Option<SectionMetrics> {
            self.0.get(&section).copied()
        }
    }

    #[test]
    fn registry_order_matches_ids() {
        let ids = Section::ALL.iter().map(|s| s.id()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            [
                "home",
                "about",
                "education",
                "experience",
                "projects",
                "instagram",
                "skills",
                "contact"
            ]
        );
    }

    #[test]
    fn position_inside_a_section_selects_it() {
        let layout = FakeLayout::stacked(&[
            (Section::Home, 600.0),
            (Section::About, 400.0),
            (Section::Contact, 500.0),
        ]);
        assert_eq!(active_at(&layout, 0.0), Some(Section::Home));
        assert_eq!(active_at(&layout, 599.9), Some(Section::Home));
        assert_eq!(active_at(&layout, 600.0), Some(Section::About));
        assert_eq!(active_at(&layout, 1200.0), Some(Section::Contact));
    }

    #[test]
    fn interval_is_half_open() {
        let layout = FakeLayout::stacked(&[(Section::Home, 600.0), (Section::About, 400.0)]);
        // 600.0 belongs to the next section, not the one ending there
        assert_eq!(active_at(&layout, 600.0), Some(Section::About));
        assert_eq!(active_at(&layout, 999.9), Some(Section::About));
        assert_eq!(active_at(&layout, 1000.0), None);
    }

    #[test]
    fn first_match_wins_for_overlapping_sections() {
        let mut map = HashMap::new();
        map.insert(
            Section::Home,
            SectionMetrics {
                top: 0.0,
                height: 800.0,
            },
        );
        map.insert(
            Section::About,
            SectionMetrics {
                top: 400.0,
                height: 800.0,
            },
        );
        let layout = FakeLayout(map);
        // both intervals contain 500, registry order resolves the tie
        assert_eq!(active_at(&layout, 500.0), Some(Section::Home));
        assert_eq!(active_at(&layout, 900.0), Some(Section::About));
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let mut layout = FakeLayout::stacked(&[
            (Section::Home, 600.0),
            (Section::About, 400.0),
            (Section::Education, 400.0),
        ]);
        layout.0.remove(&Section::About);
        // About's old interval now falls through to whatever else matches
        assert_eq!(active_at(&layout, 700.0), None);
        assert_eq!(active_at(&layout, 1100.0), Some(Section::Education));
    }

    #[test]
    fn no_match_outside_every_interval() {
        let layout = FakeLayout::stacked(&[(Section::Home, 600.0)]);
        assert_eq!(active_at(&layout, -50.0), None);
        assert_eq!(active_at(&layout, 600.0), None);
    }
}
