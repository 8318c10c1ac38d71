use std::rc::Rc;

use crate::{sections::Section, theme::Theme};

/// How long the programmatic-scroll flag stays raised after a nav click.
pub const SCROLL_COOLDOWN_MS: u32 = 1_000;

/// Page-level state owned by the root component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub active_section: Section,
    pub theme: Theme,
    pub scrolling_programmatically: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    /// Result of probing the layout at scroll time; `None` keeps the current section.
    Scrolled(Option<Section>),
    ToggleTheme,
    ProgrammaticScrollStarted,
    ProgrammaticScrollEnded,
}

impl ViewState {
    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn apply(self, action: ViewAction) -> Self {
        match action {
            ViewAction::Scrolled(Some(section)) => Self {
                active_section: section,
                ..self
            },
            ViewAction::Scrolled(None) => self,
            ViewAction::ToggleTheme => Self {
                theme: self.theme.toggled(),
                ..self
            },
            ViewAction::ProgrammaticScrollStarted => Self {
                scrolling_programmatically: true,
                ..self
            },
            ViewAction::ProgrammaticScrollEnded => Self {
                scrolling_programmatically: false,
                ..self
            },
        }
    }

    /// Like [`ViewState::apply`], but hands back the same allocation when the
    /// action changes nothing, so scroll events inside one section stay cheap.
    pub fn reduce_shared(self: Rc<Self>, action: ViewAction) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_home_in_dark_mode() {
        let state = ViewState::default();
        assert_eq!(state.active_section, Section::Home);
        assert!(state.is_dark_mode());
        assert!(!state.scrolling_programmatically);
    }

    #[test]
    fn scroll_without_match_keeps_section() {
        let state = ViewState::default().apply(ViewAction::Scrolled(Some(Section::Skills)));
        assert_eq!(state.active_section, Section::Skills);

        let state = state.apply(ViewAction::Scrolled(None));
        assert_eq!(state.active_section, Section::Skills);
    }

    #[test]
    fn unchanged_state_keeps_its_allocation() {
        let state = Rc::new(ViewState::default());

        let same = Rc::clone(&state).reduce_shared(ViewAction::Scrolled(Some(Section::Home)));
        assert!(Rc::ptr_eq(&state, &same));

        let same = Rc::clone(&state).reduce_shared(ViewAction::Scrolled(None));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = Rc::clone(&state).reduce_shared(ViewAction::Scrolled(Some(Section::About)));
        assert!(!Rc::ptr_eq(&state, &moved));
        assert_eq!(moved.active_section, Section::About);
    }

    #[test]
    fn theme_toggle_flips_and_restores() {
        let state = ViewState::default().apply(ViewAction::ToggleTheme);
        assert!(!state.is_dark_mode());
        let state = state.apply(ViewAction::ToggleTheme);
        assert!(state.is_dark_mode());
    }

    #[test]
    fn programmatic_scroll_flag_only_touches_itself() {
        let state = ViewState::default()
            .apply(ViewAction::Scrolled(Some(Section::Projects)))
            .apply(ViewAction::ProgrammaticScrollStarted);
        assert!(state.scrolling_programmatically);
        assert_eq!(state.active_section, Section::Projects);

        let state = state.apply(ViewAction::ProgrammaticScrollEnded);
        assert!(!state.scrolling_programmatically);
        assert_eq!(state.active_section, Section::Projects);
    }
}
