//! Compound growth simulation
//!
//! Projects an investment account fed by a monthly contribution. Each year
//! the twelve contributions are added first, then the whole balance grows by
//! the annual rate. Published figures are rounded to whole currency units;
//! the balance carried from one year to the next is not.

use serde::{Deserialize, Serialize};

use crate::error::{SmartBudgetError, SmartBudgetResult};

/// Longest projection the simulator accepts
pub const MAX_DURATION_YEARS: u32 = 100;

/// Parameters of a growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthInputs {
    pub initial_capital: f64,
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub duration_years: u32,
}

impl Default for GrowthInputs {
    fn default() -> Self {
        Self {
            initial_capital: 1000.0,
            monthly_contribution: 100.0,
            annual_rate_percent: 7.0,
            duration_years: 10,
        }
    }
}

impl GrowthInputs {
    /// Check the documented input ranges
    pub fn validate(&self) -> SmartBudgetResult<()> {
        if !self.initial_capital.is_finite() || self.initial_capital < 0.0 {
            return Err(SmartBudgetError::Validation(format!(
                "initial capital must be zero or more, got {}",
                self.initial_capital
            )));
        }
        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err(SmartBudgetError::Validation(format!(
                "monthly contribution must be zero or more, got {}",
                self.monthly_contribution
            )));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent <= -100.0 {
            return Err(SmartBudgetError::Validation(format!(
                "annual rate must be greater than -100%, got {}",
                self.annual_rate_percent
            )));
        }
        if !(1..=MAX_DURATION_YEARS).contains(&self.duration_years) {
            return Err(SmartBudgetError::Validation(format!(
                "duration must be between 1 and {} years, got {}",
                MAX_DURATION_YEARS, self.duration_years
            )));
        }
        Ok(())
    }
}

/// State of the account at the end of one simulated year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSnapshot {
    pub year: u32,
    pub capital: i64,
    pub cumulative_interest: i64,
    pub cumulative_contributions: i64,
}

/// Run the projection, one snapshot per year `1..=duration_years`
///
/// Inputs are not validated here; call [`GrowthInputs::validate`] first when
/// they come from a user. A zero duration yields no snapshots.
pub fn simulate_growth(inputs: &GrowthInputs) -> Vec<GrowthSnapshot> {
    let annual_contribution = inputs.monthly_contribution * 12.0;
    let growth_factor = 1.0 + inputs.annual_rate_percent / 100.0;

    let mut capital = inputs.initial_capital;
    let mut contributions = inputs.initial_capital;

    (1..=inputs.duration_years)
        .map(|year| {
            capital = (capital + annual_contribution) * growth_factor;
            contributions += annual_contribution;

            let published_capital = capital.round();
            GrowthSnapshot {
                year,
                capital: published_capital as i64,
                cumulative_interest: (published_capital - contributions).round() as i64,
                cumulative_contributions: contributions.round() as i64,
            }
        })
        .collect()
}

/// Final-year figures of a projection
pub fn final_snapshot(snapshots: &[GrowthSnapshot]) -> Option<&GrowthSnapshot> {
    snapshots.last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn inputs(initial: f64, monthly: f64, rate: f64, years: u32) -> GrowthInputs {
        GrowthInputs {
            initial_capital: initial,
            monthly_contribution: monthly,
            annual_rate_percent: rate,
            duration_years: years,
        }
    }

    #[test]
    fn test_first_year_known_values() {
        let snapshots = simulate_growth(&inputs(1000.0, 100.0, 7.0, 1));

        assert_eq!(
            snapshots,
            vec![GrowthSnapshot {
                year: 1,
                capital: 2354,
                cumulative_interest: 154,
                cumulative_contributions: 2200,
            }]
        );
    }

    #[test]
    fn test_default_ten_year_projection() {
        let snapshots = simulate_growth(&GrowthInputs::default());

        assert_eq!(snapshots.len(), 10);
        assert_eq!(
            snapshots.iter().map(|s| s.year).collect::<Vec<_>>(),
            (1..=10).collect::<Vec<_>>()
        );
        let last = final_snapshot(&snapshots).unwrap();
        assert_eq!(last.cumulative_contributions, 13_000);
        assert_eq!(last.capital - last.cumulative_contributions, last.cumulative_interest);
        // second year: (2354 + 1200) * 1.07 = 3802.78
        assert_eq!(snapshots[1].capital, 3803);
    }

    #[test]
    fn test_zero_rate_has_no_interest() {
        let snapshots = simulate_growth(&inputs(500.0, 50.0, 0.0, 3));
        assert!(snapshots.iter().all(|s| s.cumulative_interest == 0));
        assert_eq!(snapshots[2].capital, 500 + 3 * 600);
    }

    #[test]
    fn test_rounding_is_not_carried_between_years() {
        // 0.48 a year: rounding each year's balance would keep it at zero
        let snapshots = simulate_growth(&inputs(0.0, 0.04, 0.0, 4));
        let capitals: Vec<_> = snapshots.iter().map(|s| s.capital).collect();
        assert_eq!(capitals, vec![0, 1, 1, 2]);
    }

    #[test]
    fn test_zero_duration_is_empty() {
        assert!(simulate_growth(&inputs(1000.0, 100.0, 7.0, 0)).is_empty());
        assert!(final_snapshot(&[]).is_none());
    }

    #[test]
    fn test_validation() {
        assert!(GrowthInputs::default().validate().is_ok());
        assert!(inputs(-1.0, 0.0, 5.0, 1).validate().is_err());
        assert!(inputs(0.0, -5.0, 5.0, 1).validate().is_err());
        assert!(inputs(0.0, 0.0, -100.0, 1).validate().is_err());
        assert!(inputs(0.0, 0.0, f64::NAN, 1).validate().is_err());
        assert!(inputs(0.0, 0.0, 5.0, 0).validate().unwrap_err().is_validation());
        assert!(inputs(0.0, 0.0, 5.0, MAX_DURATION_YEARS + 1).validate().is_err());
    }

    #[test]
    fn test_simulation_is_repeatable() {
        let a = simulate_growth(&inputs(2500.0, 175.5, 4.25, 30));
        let b = simulate_growth(&inputs(2500.0, 175.5, 4.25, 30));
        assert_eq!(a, b);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_capital_matches_closed_form(
            initial in 0u32..100_000,
            monthly_cents in 0u32..200_000,
            rate_bp in 1u32..1500,
            years in 1u32..40,
        ) {
            let initial = initial as f64;
            let monthly = monthly_cents as f64 / 100.0;
            let rate = rate_bp as f64 / 100.0;
            let snapshots = simulate_growth(&inputs(initial, monthly, rate, years));

            let g = 1.0 + rate / 100.0;
            let annual = monthly * 12.0;
            for snapshot in &snapshots {
                let y = snapshot.year as i32;
                let expected = initial * g.powi(y) + annual * g * (g.powi(y) - 1.0) / (g - 1.0);
                let tolerance = 0.5 + expected.abs() * 1e-9;
                prop_assert!(
                    (snapshot.capital as f64 - expected).abs() <= tolerance,
                    "year {}: published {} vs exact {}", y, snapshot.capital, expected
                );
            }
        }

        #[test]
        fn prop_longer_runs_extend_shorter_ones(
            initial in 0u32..50_000,
            monthly in 0u32..2_000,
            rate_bp in 0u32..1200,
            years in 1u32..30,
            extra in 1u32..10,
        ) {
            let short = simulate_growth(&inputs(initial as f64, monthly as f64, rate_bp as f64 / 100.0, years));
            let long = simulate_growth(&inputs(initial as f64, monthly as f64, rate_bp as f64 / 100.0, years + extra));
            prop_assert_eq!(&long[..short.len()], &short[..]);
            for pair in long.windows(2) {
                prop_assert!(pair[1].cumulative_contributions >= pair[0].cumulative_contributions);
            }
        }
    }
}
