//! Season driver: the outer day loop
//!
//! Thin orchestration over [`Stand::step_day`]: pulls each day's forcing
//! from the water/energy collaborator, accumulates the output tables, and
//! hands year boundaries to the annual updater.

use tracing::{debug, info};

use super::series::{SeasonOutput, SeasonSeries};
use super::Stand;
use crate::core_types::DailyForcing;

pub const DAYS_PER_YEAR: usize = 365;

/// Supplies the daily driver records
///
/// Implemented by the external water/energy-balance and phenology engine;
/// the stand reference lets providers scale drivers by the current canopy
/// (leaf area, sugar feedback on photosynthesis).
pub trait ForcingProvider {
    fn daily_forcing(&mut self, day: usize, stand: &Stand) -> DailyForcing;
}

/// Annual structural bookkeeping hook, called at each year boundary
///
/// Diameter/height/crown allometrics live behind this seam; they consume
/// the accumulated sapwood growth via [`Stand::take_annual_sapwood_growth`].
pub trait AnnualUpdater {
    fn end_of_year(&mut self, year: usize, stand: &mut Stand);
}

/// Annual updater that leaves the structure untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnnualUpdater;

impl AnnualUpdater for NoopAnnualUpdater {
    fn end_of_year(&mut self, _year: usize, _stand: &mut Stand) {}
}

/// Run `num_days` consecutive days over the stand
pub fn run_season<F, A>(
    stand: &mut Stand,
    forcing: &mut F,
    annual: &mut A,
    num_days: usize,
) -> SeasonOutput
where
    F: ForcingProvider,
    A: AnnualUpdater,
{
    info!(num_days, num_cohorts = stand.num_cohorts(), "season start");
    let mut series = SeasonSeries::default();
    series.days.reserve(num_days);
    for day in 0..num_days {
        let daily = forcing.daily_forcing(day, stand);
        let outputs = stand.step_day(&daily);
        series.days.push(outputs);
        if (day + 1) % DAYS_PER_YEAR == 0 {
            let year = day / DAYS_PER_YEAR;
            debug!(year, "year boundary");
            annual.end_of_year(year, stand);
        }
    }
    let alive = stand.statuses().iter().filter(|s| s.is_alive()).count();
    info!(num_days, alive, "season end");
    SeasonOutput {
        series,
        final_status: stand.statuses(),
    }
}
