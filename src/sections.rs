//! Page sections and the scroll position → active section mapping.

use std::collections::HashMap;

/// How far below the top edge of the viewport the tracker probes.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Document order, which is also match priority.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// Geometry source for the tracker. `None` means the section is not laid out.
pub trait SectionLayout {
    fn bounds(&self, section: Section) -> Option<SectionBounds>;
}

impl SectionLayout for HashMap<Section, SectionBounds> {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        self.get(&section).copied()
    }
}

/// First section, in priority order, whose extent holds `scroll_y` plus the lookahead.
pub fn section_at(scroll_y: f64, layout: &impl SectionLayout) -> Option<Section> {
    let probe = scroll_y + SCROLL_LOOKAHEAD_PX;

    Section::ALL.into_iter().find(|section| {
        layout
            .bounds(*section)
            .is_some_and(|bounds| bounds.contains(probe))
    })
}
