//! Physical and physiological constants
//!
//! Respiration and turnover rates follow Ogle & Pacala (2010),
//! Tree Physiology 29, 587-605. Units are noted per constant; the engine
//! works in grams of glucose, moles of glucose per litre of storage volume,
//! MPa, degrees Celsius, cm (heights), cm2 (sapwood area) and m2 (leaf area).

/// Molar mass of glucose (g·mol-1)
pub const GLUCOSE_MOLAR_MASS: f64 = 180.156;

/// Molar mass of carbon (g·mol-1)
pub const CARBON_MOLAR_MASS: f64 = 12.0107;

/// Gas constant in osmotic-pressure units (MPa·l·mol-1·K-1)
pub const GAS_CONSTANT_MPA: f64 = 0.008314;

/// Leaf maintenance respiration rate (g gluc · g dw-1 · day-1)
pub const LEAF_RESPIRATION_RATE: f64 = 0.00260274;

/// Sapwood maintenance respiration rate (g gluc · g dw-1 · day-1)
pub const SAPWOOD_RESPIRATION_RATE: f64 = 6.849315e-5;

/// Fine-root maintenance respiration rate (g gluc · g dw-1 · day-1)
pub const FINEROOT_RESPIRATION_RATE: f64 = 0.002054795;

/// Q10 of maintenance respiration (dimensionless)
pub const Q10_RESPIRATION: f64 = 2.0;

/// Construction cost of leaf tissue (g gluc · g dw-1)
pub const LEAF_CONSTRUCTION_COST: f64 = 1.5;

/// Construction cost of sapwood tissue (g gluc · g dw-1)
pub const SAPWOOD_CONSTRUCTION_COST: f64 = 1.47;

/// Construction cost of fine-root tissue (g gluc · g dw-1)
pub const FINEROOT_CONSTRUCTION_COST: f64 = 1.30;

/// Maximum relative growth rate of leaves, relative to the leaf-area target
/// (m2 · m-2 · day-1)
pub const RGR_LEAF_MAX: f64 = 0.1;

/// Baseline daily sapwood-area turnover proportion (day-1).
/// Equivalent to 4.5 % per year: 1 - (1 - 0.045)^(1/365).
pub const DAILY_SAPWOOD_TURNOVER: f64 = 0.0001261398;

/// Daily fine-root turnover proportion (day-1).
/// Equivalent to 50 % per year: 1 - (1 - 0.5)^(1/365).
pub const DAILY_FINEROOT_TURNOVER: f64 = 0.001897231;

/// Fraction of sapwood cross-section occupied by dead conduits (vessels and
/// tracheids), excluded from living biomass and storage volume.
pub const CONDUIT_TO_SAPWOOD: f64 = 0.5;

/// Density of the dry wood matrix (g·cm-3), used to derive sapwood porosity.
pub const WOOD_MATRIX_DENSITY: f64 = 1.54;

/// Maximum starch storage as a fraction of leaf structural dry mass.
pub const LEAF_STARCH_DRY_FRACTION: f64 = 0.3;

/// Maximum starch storage as a fraction of living sapwood dry mass.
pub const SAPWOOD_STARCH_DRY_FRACTION: f64 = 0.2;

/// Kilograms of water per mole (used for xylem conductivity conversions).
pub const WATER_MOLAR_MASS_KG: f64 = 0.018;

/// Celsius to Kelvin offset.
pub const CELSIUS_TO_KELVIN: f64 = 273.15;
