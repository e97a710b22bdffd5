//! Per-cohort daily carbon balance and growth solver
//!
//! Three nested time scales: the daily driver iterates the sub-daily forcing
//! steps (respiration, photosynthesis, growth sinks), each sub-daily step
//! integrates phloem transport and sugar-starch conversion at one-second
//! resolution, and the end of the day applies senescence, turnover,
//! mortality and the structural updates fed back into the next day.

mod daily;
mod senescence;
mod transport;

pub use daily::grow_cohort_day;
