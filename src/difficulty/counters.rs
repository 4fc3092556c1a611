//! Hysteresis counters.

use serde::{Deserialize, Serialize};

/// Excel and struggle counters shared across tasks.
///
/// A single result moves a counter by one step, and a difficulty change
/// needs a counter to reach the configured threshold, so one lucky or
/// unlucky task never flips difficulty on its own. Both counters are
/// floored at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyCounters {
    excel: u32,
    struggle: u32,
}

impl DifficultyCounters {
    pub fn excel(&self) -> u32 {
        self.excel
    }

    pub fn struggle(&self) -> u32 {
        self.struggle
    }

    /// A task well above expectations.
    pub fn reward(&mut self) {
        self.excel = self.excel.saturating_add(1);
        self.struggle = self.struggle.saturating_sub(1);
    }

    /// A task well below expectations.
    pub fn penalize(&mut self) {
        self.struggle = self.struggle.saturating_add(1);
        self.excel = self.excel.saturating_sub(1);
    }

    /// A task inside the flow band: both counters relax toward zero.
    pub fn decay(&mut self) {
        self.excel = self.excel.saturating_sub(1);
        self.struggle = self.struggle.saturating_sub(1);
    }

    pub(crate) fn reset_excel(&mut self) {
        self.excel = 0;
    }

    pub(crate) fn reset_struggle(&mut self) {
        self.struggle = 0;
    }
}
