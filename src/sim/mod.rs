mod context;
mod cycle;
mod runner;
mod sampler;
mod system;

pub use context::TickContext;
pub use cycle::{
    REELECTION_INTERVAL, REELECTION_PENALTY, UNFILLED_POSITION_PENALTY, YearlyCycle, calc_psi,
    reelection_count, simulate_year,
};
pub use runner::{NUM_YEARS, SimConfig, dispatch_systems, run, system_names};
pub use sampler::{
    LIFE_EXPECTANCY_MAX, LIFE_EXPECTANCY_MIN, LIFE_EXPECTANCY_MU, LIFE_EXPECTANCY_SIGMA,
    NEW_CANDIDATES_MU, NEW_CANDIDATES_SIGMA, NormalVitals, VitalSampler, draw_new_candidates,
    sample_life_expectancy, sample_new_candidates,
};
pub use system::SimSystem;
