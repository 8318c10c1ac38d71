//! Typing/deleting text cycler for the hero banner.
//!
//! [`TextCycler`] is a pure state machine. Whoever drives it asks for
//! [`TextCycler::next_delay_ms`], waits that long, then calls
//! [`TextCycler::advance`]; exactly one timer is pending at any time.

use std::rc::Rc;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CyclerTimings {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    pub pause_ms: u32,
}

impl Default for CyclerTimings {
    fn default() -> Self {
        Self {
            typing_ms: 100,
            deleting_ms: 50,
            pause_ms: 1_500,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CyclerError {
    #[error("text cycler needs at least one phrase")]
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CyclerPhase {
    Typing,
    Paused,
    Deleting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextCycler {
    phrases: Rc<[String]>,
    timings: CyclerTimings,
    index: usize,
    shown: usize,
    phase: CyclerPhase,
}

impl TextCycler {
    pub fn new(phrases: impl Into<Rc<[String]>>, timings: CyclerTimings) -> Result<Self, CyclerError> {
        let phrases = phrases.into();
        if phrases.is_empty() {
            return Err(CyclerError::Empty);
        }

        Ok(Self {
            phrases,
            timings,
            index: 0,
            shown: 0,
            phase: CyclerPhase::Typing,
        })
    }

    pub fn phase(&self) -> CyclerPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    /// The visible text: the first `shown` characters of the current phrase.
    pub fn display(&self) -> &str {
        prefix_chars(self.current_phrase(), self.shown)
    }

    pub fn next_delay_ms(&self) -> u32 {
        match self.phase {
            CyclerPhase::Typing => self.timings.typing_ms,
            CyclerPhase::Paused => self.timings.pause_ms,
            CyclerPhase::Deleting => self.timings.deleting_ms,
        }
    }

    /// Applies one timer firing.
    pub fn advance(&mut self) {
        match self.phase {
            CyclerPhase::Typing => {
                let full = self.current_phrase().chars().count();
                if self.shown < full {
                    self.shown += 1;
                }
                if self.shown >= full {
                    self.phase = CyclerPhase::Paused;
                }
            }
            CyclerPhase::Paused => self.phase = CyclerPhase::Deleting,
            CyclerPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = CyclerPhase::Typing;
                }
            }
        }
    }
}

fn prefix_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
