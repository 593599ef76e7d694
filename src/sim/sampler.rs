use rand::RngCore;
use rand_distr::{Distribution, StandardNormal};

pub const LIFE_EXPECTANCY_MIN: u32 = 25;
pub const LIFE_EXPECTANCY_MAX: u32 = 80;
pub const LIFE_EXPECTANCY_MU: f64 = 55.0;
pub const LIFE_EXPECTANCY_SIGMA: f64 = 10.0;

pub const NEW_CANDIDATES_MU: f64 = 15.0;
pub const NEW_CANDIDATES_SIGMA: f64 = 5.0;

/// Source of the two random quantities a yearly cycle needs.
///
/// Object-safe, and takes the run's RNG explicitly so scenarios can swap in
/// fixed draws without touching the engine.
pub trait VitalSampler {
    /// Number of new candidates entering the lowest rank this year.
    fn new_candidates(&mut self, rng: &mut dyn RngCore) -> i32;

    /// Age at which one individual dies, drawn fresh per individual per year.
    fn life_expectancy(&mut self, rng: &mut dyn RngCore) -> u32;
}

/// The real distributions with the fixed constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalVitals;

impl VitalSampler for NormalVitals {
    fn new_candidates(&mut self, rng: &mut dyn RngCore) -> i32 {
        sample_new_candidates(rng)
    }

    fn life_expectancy(&mut self, rng: &mut dyn RngCore) -> u32 {
        sample_life_expectancy(
            rng,
            LIFE_EXPECTANCY_MIN,
            LIFE_EXPECTANCY_MAX,
            LIFE_EXPECTANCY_MU,
            LIFE_EXPECTANCY_SIGMA,
        )
    }
}

fn normal(rng: &mut dyn RngCore, mu: f64, sigma: f64) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mu + sigma * z
}

/// Rounded Normal(`mu`, `sigma`) draw, redrawn until it lands in `[min, max]`.
///
/// There is no cap on redraws. Termination is probabilistic: it holds almost
/// surely whenever `[min, max]` carries non-negligible mass, which is the case
/// for the life-expectancy constants (about 99% of draws are accepted).
pub fn sample_life_expectancy(
    rng: &mut dyn RngCore,
    min: u32,
    max: u32,
    mu: f64,
    sigma: f64,
) -> u32 {
    debug_assert!(min <= max, "empty life expectancy range [{min}, {max}]");
    loop {
        let value = normal(rng, mu, sigma).round();
        if value >= f64::from(min) && value <= f64::from(max) {
            return value as u32;
        }
    }
}

/// Unrounded inflow draw from Normal(15, 5).
pub fn draw_new_candidates(rng: &mut dyn RngCore) -> f64 {
    normal(rng, NEW_CANDIDATES_MU, NEW_CANDIDATES_SIGMA)
}

/// Inflow draw rounded to the nearest integer. Deliberately not clamped, so
/// the result can be negative.
pub fn sample_new_candidates(rng: &mut dyn RngCore) -> i32 {
    draw_new_candidates(rng).round() as i32
}
