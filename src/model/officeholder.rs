use serde::{Deserialize, Serialize};

use super::rank::Rank;

/// One individual holding one seat.
///
/// Holders are not tracked across ranks, so rank, age and service are the
/// whole identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officeholder {
    pub age: u32,
    /// Years held in the current rank. Starts at 0 on appointment.
    pub service_years: u32,
    pub rank: Rank,
}

impl Officeholder {
    /// A fresh appointee at the rank's minimum eligible age.
    pub fn appointed(rank: Rank) -> Self {
        Self {
            age: rank.min_age(),
            service_years: 0,
            rank,
        }
    }
}
