//! Cohort vital status

use serde::{Deserialize, Serialize};

/// Vital status of a cohort
///
/// `Alive` is the only state in which the daily engine mutates a cohort.
/// The two death causes are terminal: once entered they never revert, and
/// growth/transport code skips the cohort from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CohortStatus {
    /// Normal functioning
    Alive,
    /// Died from carbon starvation (sapwood sugar exhausted)
    Starvation,
    /// Died from desiccation (stem relative water content below 0.5)
    Desiccation,
}

impl CohortStatus {
    /// Whether the cohort participates in daily growth
    pub fn is_alive(self) -> bool {
        matches!(self, CohortStatus::Alive)
    }

    /// Whether the status can no longer change
    pub fn is_terminal(self) -> bool {
        !self.is_alive()
    }

    /// One-directional transition: moving out of a terminal state is a no-op
    #[must_use]
    pub fn transition(self, to: CohortStatus) -> CohortStatus {
        if self.is_terminal() {
            self
        } else {
            to
        }
    }
}

impl std::fmt::Display for CohortStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CohortStatus::Alive => write!(f, "alive"),
            CohortStatus::Starvation => write!(f, "starvation"),
            CohortStatus::Desiccation => write!(f, "desiccation"),
        }
    }
}
