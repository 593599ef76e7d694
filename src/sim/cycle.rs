use rand::RngCore;

use super::context::TickContext;
use super::sampler::{NormalVitals, VitalSampler};
use super::system::SimSystem;
use crate::model::{Officeholder, Rank, Republic, YearRecord};

/// Consuls serving fewer years than this count against stability.
pub const REELECTION_INTERVAL: u32 = 10;
pub const UNFILLED_POSITION_PENALTY: i64 = -5;
pub const REELECTION_PENALTY: i64 = -10;

/// Advances the republic by one year per tick: inflow, aging and mortality,
/// backfill, then the stability update.
pub struct YearlyCycle<V: VitalSampler = NormalVitals> {
    vitals: V,
}

impl YearlyCycle<NormalVitals> {
    pub fn new() -> Self {
        Self {
            vitals: NormalVitals,
        }
    }
}

impl Default for YearlyCycle<NormalVitals> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VitalSampler> YearlyCycle<V> {
    pub fn with_vitals(vitals: V) -> Self {
        Self { vitals }
    }
}

impl<V: VitalSampler> SimSystem for YearlyCycle<V> {
    fn name(&self) -> &str {
        "yearly_cycle"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        let record = simulate_year(ctx.republic, &mut self.vitals, ctx.rng);
        tracing::debug!(
            year = record.year,
            entrants = record.entrants(),
            deaths = record.deaths,
            psi = record.psi,
            population = record.population,
            "year simulated"
        );
        ctx.republic.chronicle.push(record);
    }
}

/// Run one full year against `republic` and return what happened.
///
/// Steps run in a fixed order; later steps read counts left by earlier ones.
pub fn simulate_year<V: VitalSampler + ?Sized>(
    republic: &mut Republic,
    vitals: &mut V,
    rng: &mut dyn RngCore,
) -> YearRecord {
    republic.year += 1;

    // --- Inflow ---
    let candidates_drawn = vitals.new_candidates(rng);
    for _ in 0..candidates_drawn {
        republic
            .officeholders
            .push(Officeholder::appointed(Rank::LOWEST));
    }

    // --- Aging & mortality ---
    // service_years is left untouched here.
    let before = republic.officeholders.len();
    republic.officeholders.retain_mut(|holder| {
        holder.age += 1;
        holder.age <= vitals.life_expectancy(rng)
    });
    let deaths = (before - republic.officeholders.len()) as u32;

    // --- Census & backfill ---
    let mut backfilled = [0u32; 4];
    let mut consul_census = 0;
    for rank in Rank::BACKFILL_ORDER {
        let census = republic.census(rank);
        if rank == Rank::TOP {
            consul_census = census;
        }
        let missing = rank.quota().saturating_sub(census);
        republic
            .officeholders
            .extend((0..missing).map(|_| Officeholder::appointed(rank)));
        backfilled[rank as usize] = missing;
    }

    // --- Stability ---
    let reelection_count = reelection_count(&republic.officeholders);
    republic.psi = adjust_psi(republic.psi, reelection_count);

    YearRecord {
        year: republic.year,
        candidates_drawn,
        deaths,
        consul_census,
        backfilled,
        reelection_count,
        psi: republic.psi,
        population: republic.population(),
    }
}

/// Consuls still inside the re-election interval.
pub fn reelection_count(officeholders: &[Officeholder]) -> u32 {
    officeholders
        .iter()
        .filter(|h| h.rank == Rank::TOP && h.service_years < REELECTION_INTERVAL)
        .count() as u32
}

/// Apply one year's stability adjustment to `psi`.
///
/// The unfilled-position penalty is charged for every Consul seat in the
/// quota, whether or not it was vacant before backfill.
pub fn calc_psi(psi: i64, officeholders: &[Officeholder]) -> i64 {
    adjust_psi(psi, reelection_count(officeholders))
}

fn adjust_psi(psi: i64, reelection_count: u32) -> i64 {
    let unfilled_penalty = i64::from(Rank::TOP.quota()) * UNFILLED_POSITION_PENALTY;
    let reelection_penalty = i64::from(reelection_count) * REELECTION_PENALTY;
    psi + unfilled_penalty + reelection_penalty
}
