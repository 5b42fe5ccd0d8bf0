//! Ascending threshold ladders.
//!
//! A ladder is a fixed table of `(inclusive upper bound, level)` steps in
//! increasing bound order.  Classification returns the level of the first
//! step whose bound is `>=` the value; anything above the last bound (or a
//! NaN) is [`SeverityLevel::Invalid`].

use crate::severity::SeverityLevel;

#[derive(Debug, Clone, Copy)]
pub struct ThresholdLadder<T: 'static> {
    steps: &'static [(T, SeverityLevel)],
}

impl<T: PartialOrd + Copy> ThresholdLadder<T> {
    pub const fn new(steps: &'static [(T, SeverityLevel)]) -> Self {
        Self { steps }
    }

    pub fn classify(&self, value: T) -> SeverityLevel {
        self.steps
            .iter()
            .find(|(bound, _)| value <= *bound)
            .map_or(SeverityLevel::Invalid, |&(_, level)| level)
    }

    /// The levels this ladder can emit, in step order.
    pub fn levels(&self) -> impl Iterator<Item = SeverityLevel> + '_ {
        self.steps.iter().map(|&(_, level)| level)
    }
}
