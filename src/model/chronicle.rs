use serde::{Deserialize, Serialize};

use super::rank::Rank;

/// What happened in one simulated year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: u32,
    /// Raw inflow draw. May be negative, in which case nobody entered.
    pub candidates_drawn: i32,
    pub deaths: u32,
    /// Consuls alive before backfill.
    pub consul_census: u32,
    /// Seats created by backfill, indexed like `Rank::ALL`.
    pub backfilled: [u32; 4],
    /// Consuls still inside the re-election interval after backfill.
    pub reelection_count: u32,
    pub psi: i64,
    pub population: usize,
}

impl YearRecord {
    pub fn backfilled_for(&self, rank: Rank) -> u32 {
        self.backfilled[rank as usize]
    }

    pub fn entrants(&self) -> u32 {
        self.candidates_drawn.max(0) as u32
    }
}
