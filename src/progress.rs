use std::fmt;

/// Fraction of an element that has to be on screen before it counts as seen.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// A skill level in whole percent, always within `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u32) -> Self {
        Self(value.min(100) as u8)
    }

    /// Entries without a level render as an empty bar rather than a broken one.
    pub fn from_optional(value: Option<u32>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_css_width(self) -> String {
        format!("width: {}%;", self.0)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Mirrors the observer's own rule: intersecting and at or past the threshold.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Latches on the first positive observation and ignores everything after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    seen: bool,
}

impl VisibilityLatch {
    /// Returns `true` exactly once, for the first visible observation.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.seen || !visible {
            return false;
        }
        self.seen = true;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillPhase {
    Waiting,
    Scheduled,
    Filled,
}

/// One-shot fill for a skill bar.
///
/// The bar reads 0 until it is first seen, then jumps to its target once the
/// start delay has elapsed. Later visibility changes are ignored; the CSS width
/// transition takes care of the visual interpolation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressFill {
    target: Percentage,
    delay_ms: u32,
    latch: VisibilityLatch,
    phase: FillPhase,
}

impl ProgressFill {
    pub fn new(target: Percentage, delay_ms: u32) -> Self {
        Self {
            target,
            delay_ms,
            latch: VisibilityLatch::default(),
            phase: FillPhase::Waiting,
        }
    }

    pub fn phase(&self) -> FillPhase {
        self.phase
    }

    pub fn displayed(&self) -> Percentage {
        match self.phase {
            FillPhase::Filled => self.target,
            FillPhase::Waiting | FillPhase::Scheduled => Percentage::ZERO,
        }
    }

    /// Feeds a visibility observation. On the first visible one, returns the
    /// delay after which [`ProgressFill::complete`] should be called.
    pub fn observe(&mut self, visible: bool) -> Option<u32> {
        if !self.latch.observe(visible) {
            return None;
        }
        self.phase = FillPhase::Scheduled;
        Some(self.delay_ms)
    }

    pub fn complete(&mut self) {
        if self.phase == FillPhase::Scheduled {
            self.phase = FillPhase::Filled;
        }
    }
}
