use super::chronicle::YearRecord;
use super::officeholder::Officeholder;
use super::rank::Rank;

/// Starting value of the stability index.
pub const INITIAL_PSI: i64 = 100;

/// Simulation state threaded through every yearly cycle.
#[derive(Debug, Clone)]
pub struct Republic {
    /// Last completed year. 0 before the first cycle.
    pub year: u32,
    /// Stability index. No floor or ceiling.
    pub psi: i64,
    pub officeholders: Vec<Officeholder>,
    pub chronicle: Vec<YearRecord>,
}

impl Republic {
    pub fn new() -> Self {
        Self {
            year: 0,
            psi: INITIAL_PSI,
            officeholders: Vec::new(),
            chronicle: Vec::new(),
        }
    }

    pub fn population(&self) -> usize {
        self.officeholders.len()
    }

    /// Number of living holders of `rank`.
    pub fn census(&self, rank: Rank) -> u32 {
        self.officeholders.iter().filter(|h| h.rank == rank).count() as u32
    }

    pub fn holders(&self, rank: Rank) -> impl Iterator<Item = &Officeholder> {
        self.officeholders.iter().filter(move |h| h.rank == rank)
    }
}

impl Default for Republic {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_at_initial_psi() {
        let republic = Republic::new();
        assert_eq!(republic.year, 0);
        assert_eq!(republic.psi, 100);
        assert_eq!(republic.population(), 0);
        assert!(republic.chronicle.is_empty());
    }

    #[test]
    fn census_counts_only_matching_rank() {
        let mut republic = Republic::new();
        republic.officeholders.push(Officeholder::appointed(Rank::Consul));
        republic.officeholders.push(Officeholder::appointed(Rank::Aedile));
        republic.officeholders.push(Officeholder::appointed(Rank::Consul));
        assert_eq!(republic.census(Rank::Consul), 2);
        assert_eq!(republic.census(Rank::Aedile), 1);
        assert_eq!(republic.census(Rank::Praetor), 0);
        assert_eq!(republic.holders(Rank::Consul).count(), 2);
    }
}
