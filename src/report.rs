use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::model::{Officeholder, Rank, Republic};

/// Significant digits used when printing fill rates.
const FILL_RATE_DIGITS: usize = 5;

/// Summary of one rank in the final population.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfficeReport {
    pub rank: Rank,
    pub count: u32,
    /// Share of the whole population holding this rank, in percent.
    pub fill_rate: f64,
    /// age -> number of holders, ascending by age.
    pub ages: BTreeMap<u32, u32>,
}

/// End-of-run summary: final PSI, fill rates and age histograms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub psi: i64,
    pub population: usize,
    /// One entry per rank, Quaestor first.
    offices: Vec<OfficeReport>,
}

impl Report {
    pub fn from_republic(republic: &Republic) -> Self {
        Self::new(republic.psi, &republic.officeholders)
    }

    /// An empty population reports 0% for every rank.
    pub fn new(psi: i64, officeholders: &[Officeholder]) -> Self {
        let population = officeholders.len();
        if population == 0 {
            tracing::warn!("final population is empty; reporting 0% fill rates");
        }

        let offices = Rank::ALL
            .iter()
            .map(|&rank| {
                let mut ages = BTreeMap::new();
                for holder in officeholders.iter().filter(|h| h.rank == rank) {
                    *ages.entry(holder.age).or_insert(0) += 1;
                }
                let count: u32 = ages.values().sum();
                let fill_rate = if population == 0 {
                    0.0
                } else {
                    f64::from(count) / population as f64 * 100.0
                };
                OfficeReport {
                    rank,
                    count,
                    fill_rate,
                    ages,
                }
            })
            .collect();

        Self {
            psi,
            population,
            offices,
        }
    }

    /// One entry per rank, Quaestor first.
    pub fn offices(&self) -> &[OfficeReport] {
        &self.offices
    }

    pub fn office(&self, rank: Rank) -> &OfficeReport {
        &self.offices[rank as usize]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PSI: {}", self.psi)?;
        writeln!(f)?;

        writeln!(f, "Annual Fill Rate:")?;
        for office in &self.offices {
            writeln!(
                f,
                "{}: {} %",
                office.rank,
                significant(office.fill_rate, FILL_RATE_DIGITS)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Age Distribution:")?;
        for office in &self.offices {
            writeln!(f, "{}:", office.rank)?;
            for (age, count) in &office.ages {
                writeln!(f, "{age} years old, {count} people")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Format `value` rounded to `digits` significant digits, dropping trailing
/// zeros and a bare trailing point (`25`, `33.333`, `100`).
fn significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = |v: f64| v.abs().log10().floor() as i32;
    let mut exp = magnitude(value);
    // Rounding can carry into the next power of ten (99.9996 -> 100.00).
    let scale = 10f64.powi(exp - digits as i32 + 1);
    let rounded = (value / scale).round() * scale;
    if rounded != 0.0 {
        exp = magnitude(rounded);
    }
    let decimals = (digits as i32 - 1 - exp).max(0) as usize;
    let text = format!("{rounded:.decimals$}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder(rank: Rank, age: u32) -> Officeholder {
        Officeholder {
            age,
            service_years: 0,
            rank,
        }
    }

    fn four_holders() -> Vec<Officeholder> {
        vec![
            holder(Rank::Quaestor, 31),
            holder(Rank::Aedile, 40),
            holder(Rank::Praetor, 39),
            holder(Rank::Consul, 50),
        ]
    }

    #[test]
    fn one_holder_per_rank_is_a_quarter_each() {
        let report = Report::new(-5900, &four_holders());
        assert_eq!(report.population, 4);
        for (office, age) in report.offices.iter().zip([31, 40, 39, 50]) {
            assert_eq!(office.fill_rate, 25.0);
            assert_eq!(office.count, 1);
            assert_eq!(office.ages.iter().collect::<Vec<_>>(), vec![(&age, &1)]);
        }
    }

    #[test]
    fn empty_population_reports_zero() {
        let report = Report::new(100, &[]);
        assert_eq!(report.population, 0);
        for office in &report.offices {
            assert_eq!(office.fill_rate, 0.0);
            assert!(office.ages.is_empty());
        }
    }

    #[test]
    fn histogram_ascends_by_age_and_counts_duplicates() {
        let holders = vec![
            holder(Rank::Aedile, 50),
            holder(Rank::Aedile, 37),
            holder(Rank::Aedile, 50),
            holder(Rank::Quaestor, 30),
        ];
        let report = Report::new(0, &holders);
        let aediles = report.office(Rank::Aedile);
        assert_eq!(
            aediles.ages.iter().map(|(a, c)| (*a, *c)).collect::<Vec<_>>(),
            vec![(37, 1), (50, 2)]
        );
        assert_eq!(aediles.fill_rate, 75.0);
        assert_eq!(report.office(Rank::Consul).count, 0);
    }

    #[test]
    fn office_lookup_follows_rank_order() {
        let report = Report::new(0, &four_holders());
        for rank in Rank::ALL {
            assert_eq!(report.office(rank).rank, rank);
        }
        assert_eq!(report.offices().len(), Rank::ALL.len());
    }

    #[test]
    fn significant_digit_formatting() {
        assert_eq!(significant(25.0, 5), "25");
        assert_eq!(significant(100.0 / 3.0, 5), "33.333");
        assert_eq!(significant(100.0, 5), "100");
        assert_eq!(significant(99.99996, 5), "100");
        assert_eq!(significant(4.123456, 5), "4.1235");
        assert_eq!(significant(12.5, 5), "12.5");
        assert_eq!(significant(0.0, 5), "0");
    }

    #[test]
    fn renders_text_layout() {
        let text = Report::new(70, &four_holders()).to_string();
        let expected = "\
PSI: 70

Annual Fill Rate:
Quaestor: 25 %
Aedile: 25 %
Praetor: 25 %
Consul: 25 %

Age Distribution:
Quaestor:
31 years old, 1 people

Aedile:
40 years old, 1 people

Praetor:
39 years old, 1 people

Consul:
50 years old, 1 people

";
        assert_eq!(text, expected);
    }
}
