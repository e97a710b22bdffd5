//! Core state, parameter and forcing types

pub mod cohort;
pub mod drivers;
pub mod outputs;
pub mod species;
pub mod status;

pub use cohort::{Cohort, CohortGeometry};
pub use drivers::{CohortForcing, DailyForcing, PhenologyFlags, WaterStatusEndOfDay};
pub use outputs::{CohortDailyOutput, CohortSubdailySeries};
pub use species::{PhenologyKind, SpeciesParams};
pub use status::CohortStatus;
