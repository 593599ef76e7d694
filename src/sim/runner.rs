use std::io;
use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use super::context::TickContext;
use super::system::SimSystem;
use crate::flush::flush_to_jsonl;
use crate::model::Republic;

/// Years simulated by a standard run.
pub const NUM_YEARS: u32 = 200;

/// Configuration for a simulation run.
pub struct SimConfig {
    pub start_year: u32,
    pub num_years: u32,
    pub seed: u64,
    /// If set, flush state every N years.
    pub flush_interval: Option<u32>,
    /// Directory to write flush checkpoints into.
    pub output_dir: Option<PathBuf>,
}

impl SimConfig {
    pub fn new(start_year: u32, num_years: u32, seed: u64) -> Self {
        Self {
            start_year,
            num_years,
            seed,
            flush_interval: None,
            output_dir: None,
        }
    }

    /// `NUM_YEARS` years starting at year 1.
    pub fn standard(seed: u64) -> Self {
        Self::new(1, NUM_YEARS, seed)
    }
}

/// Call each system once, in registration order.
pub fn dispatch_systems(
    republic: &mut Republic,
    systems: &mut [Box<dyn SimSystem>],
    rng: &mut dyn RngCore,
) {
    for system in systems.iter_mut() {
        let mut ctx = TickContext { republic, rng };
        system.tick(&mut ctx);
    }
}

/// Names of the registered systems, in dispatch order.
pub fn system_names(systems: &[Box<dyn SimSystem>]) -> Vec<&str> {
    systems.iter().map(|s| s.name()).collect()
}

/// Run the simulation for the configured number of years.
///
/// Creates a deterministic RNG from `config.seed`, so the same seed always
/// produces the same run. `republic.year` is moved to the year before
/// `config.start_year` so the first cycle lands on `start_year`.
pub fn run(
    republic: &mut Republic,
    systems: &mut [Box<dyn SimSystem>],
    config: SimConfig,
) -> io::Result<()> {
    if systems.is_empty() || config.num_years == 0 {
        return Ok(());
    }

    tracing::info!(
        seed = config.seed,
        years = config.num_years,
        systems = ?system_names(systems),
        "starting simulation"
    );

    let mut rng = SmallRng::seed_from_u64(config.seed);
    republic.year = config.start_year.saturating_sub(1);

    for year_offset in 0..config.num_years {
        dispatch_systems(republic, systems, &mut rng);

        // Flush checkpoint at configured interval
        if let (Some(interval), Some(dir)) = (config.flush_interval, &config.output_dir) {
            let is_last_year = year_offset == config.num_years - 1;
            if is_last_year || (interval > 0 && (year_offset + 1) % interval == 0) {
                let year = config.start_year + year_offset;
                let checkpoint_dir = dir.join(format!("year_{year:06}"));
                flush_to_jsonl(republic, &checkpoint_dir)?;
                tracing::debug!(year, dir = %checkpoint_dir.display(), "checkpoint written");
            }
        }
    }

    tracing::info!(
        psi = republic.psi,
        population = republic.population(),
        "simulation finished"
    );
    Ok(())
}
