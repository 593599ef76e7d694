use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four offices of the ladder, lowest first.
///
/// Ordering follows seniority, so `Rank::Quaestor < Rank::Consul`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Quaestor, // entry
    Aedile,   // mid
    Praetor,  // senior
    Consul,   // top
}

impl Rank {
    /// Entry → Top. Used for reporting.
    pub const ALL: [Rank; 4] = [Rank::Quaestor, Rank::Aedile, Rank::Praetor, Rank::Consul];

    /// Top → Entry. The order in which seats are counted and backfilled each year.
    pub const BACKFILL_ORDER: [Rank; 4] =
        [Rank::Consul, Rank::Praetor, Rank::Aedile, Rank::Quaestor];

    pub const LOWEST: Rank = Rank::Quaestor;
    pub const TOP: Rank = Rank::Consul;

    /// Seats available each year.
    pub fn quota(self) -> u32 {
        match self {
            Rank::Quaestor => 20,
            Rank::Aedile => 10,
            Rank::Praetor => 8,
            Rank::Consul => 2,
        }
    }

    pub fn min_age(self) -> u32 {
        match self {
            Rank::Quaestor => 30,
            Rank::Aedile => 36,
            Rank::Praetor => 39,
            Rank::Consul => 42,
        }
    }

    /// Years that must have been served in the preceding rank before holding
    /// this one. Not enforced: there is no promotion between ranks.
    pub fn min_prior_service(self) -> Option<u32> {
        match self {
            Rank::Quaestor => None,
            Rank::Aedile | Rank::Praetor | Rank::Consul => Some(2),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Quaestor => "Quaestor",
            Rank::Aedile => "Aedile",
            Rank::Praetor => "Praetor",
            Rank::Consul => "Consul",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
