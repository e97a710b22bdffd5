//! Stand Carbon & Growth Simulation Core Library
//!
//! Simulates the daily and sub-daily carbon economy of woody-plant cohorts in a
//! mixed-species stand: photosynthate production, maintenance and growth
//! respiration, phloem sugar transport between leaf and sapwood storage pools,
//! sugar-starch interconversion, tissue growth, senescence, and mortality.
//!
//! Water balance, canopy energy balance, photosynthesis and phenology are
//! external collaborators: the engine consumes their output as read-only daily
//! forcing (see [`core_types::DailyForcing`] and [`simulation::ForcingProvider`]).
//!
//! ## Time scales
//!
//! The engine nests three loops: season (days) -> day (sub-daily steps, hourly
//! by default) -> per-second explicit integration of phloem transport and
//! starch dynamics. The inner loop is a forward-Euler pass whose update order
//! is load-bearing for the numerical results.

// Core types and parameter tables
pub mod core_types;

// Pure biophysical and allometric functions
pub mod physics;

// Per-cohort daily carbon balance and growth engine
pub mod solver;

// Stand state, season orchestration and synthetic forcing
pub mod simulation;

// Re-export core types
pub use core_types::{Cohort, CohortGeometry, CohortStatus, PhenologyKind, SpeciesParams};
pub use core_types::{CohortForcing, DailyForcing, PhenologyFlags, WaterStatusEndOfDay};
pub use core_types::{CohortDailyOutput, CohortSubdailySeries};

// Re-export the engine entry points
pub use simulation::{AllocationStrategy, CavitationRefill, SetupError, Stand, StandConfig};
pub use simulation::{run_season, AnnualUpdater, ForcingProvider, NoopAnnualUpdater};
pub use simulation::{SeasonOutput, SeasonSeries, SyntheticForcing};
pub use solver::grow_cohort_day;
