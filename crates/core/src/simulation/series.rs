//! Time-indexed output tables accumulated over a season run

use serde::{Deserialize, Serialize};

use crate::core_types::{CohortDailyOutput, CohortStatus};

/// Day-by-cohort table of daily output records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonSeries {
    /// Outer index is the day, inner index the cohort
    pub days: Vec<Vec<CohortDailyOutput>>,
}

impl SeasonSeries {
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    pub fn num_cohorts(&self) -> usize {
        self.days.first().map_or(0, Vec::len)
    }

    /// Daily values of one variable for one cohort
    pub fn cohort_daily(&self, cohort: usize, select: impl Fn(&CohortDailyOutput) -> f64) -> Vec<f64> {
        self.days.iter().map(|day| select(&day[cohort])).collect()
    }

    /// Sum of one variable over the whole run for one cohort
    pub fn cohort_total(&self, cohort: usize, select: impl Fn(&CohortDailyOutput) -> f64) -> f64 {
        self.days.iter().map(|day| select(&day[cohort])).sum()
    }

    /// The most recent daily record for one cohort, if any day has run
    pub fn last_day(&self, cohort: usize) -> Option<&CohortDailyOutput> {
        self.days.last().map(|day| &day[cohort])
    }
}

/// Result of a season run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonOutput {
    pub series: SeasonSeries,
    /// Cohort statuses at the end of the run
    pub final_status: Vec<CohortStatus>,
}
