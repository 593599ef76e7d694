use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::model::{Officeholder, Rank, Republic};
use crate::sim::{SimConfig, SimSystem, TickContext, VitalSampler, YearlyCycle, run};

// ---------------------------------------------------------------------------
// Fixed draws
// ---------------------------------------------------------------------------

/// Sampler that always returns the same inflow and life expectancy.
#[derive(Debug, Clone, Copy)]
pub struct FixedVitals {
    pub new_candidates: i32,
    pub life_expectancy: u32,
}

impl FixedVitals {
    pub fn new(new_candidates: i32, life_expectancy: u32) -> Self {
        Self {
            new_candidates,
            life_expectancy,
        }
    }

    /// Nobody ever dies before 80.
    pub fn immortal() -> Self {
        Self::new(15, 80)
    }
}

impl VitalSampler for FixedVitals {
    fn new_candidates(&mut self, _rng: &mut dyn RngCore) -> i32 {
        self.new_candidates
    }

    fn life_expectancy(&mut self, _rng: &mut dyn RngCore) -> u32 {
        self.life_expectancy
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn holder(rank: Rank, age: u32, service_years: u32) -> Officeholder {
    Officeholder {
        age,
        service_years,
        rank,
    }
}

pub fn republic_with(officeholders: Vec<Officeholder>) -> Republic {
    Republic {
        officeholders,
        ..Republic::new()
    }
}

// ---------------------------------------------------------------------------
// Tick execution helpers
// ---------------------------------------------------------------------------

/// Run a single system tick with a freshly seeded RNG.
pub fn tick_system(republic: &mut Republic, system: &mut dyn SimSystem, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut ctx = TickContext {
        republic,
        rng: &mut rng,
    };
    system.tick(&mut ctx);
}

/// Run the yearly cycle with the real distributions for `num_years` from an
/// empty republic.
pub fn run_years(seed: u64, num_years: u32) -> Republic {
    run_with(YearlyCycle::new(), SimConfig::new(1, num_years, seed))
}

/// Run the yearly cycle with fixed draws for `num_years` from an empty republic.
pub fn run_fixed(vitals: FixedVitals, num_years: u32) -> Republic {
    run_with(YearlyCycle::with_vitals(vitals), SimConfig::new(1, num_years, 0))
}

fn run_with<S: SimSystem + 'static>(system: S, config: SimConfig) -> Republic {
    let mut republic = Republic::new();
    let mut systems: Vec<Box<dyn SimSystem>> = vec![Box::new(system)];
    run(&mut republic, &mut systems, config).expect("run without checkpoints cannot fail");
    republic
}
