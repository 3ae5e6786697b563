//! Menstrual cycle predictor
//!
//! Pure calendar-date arithmetic: next period, ovulation day, 6-day fertile
//! window, and the three periods after the next one. Dates are local calendar
//! dates with no timezone handling; formatting is left to the page.

use crate::errors::ToolError;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Ovulation is assumed 14 days before the next period
const LUTEAL_PHASE_DAYS: i64 = 14;

/// Selectable cycle length bounds on the page
pub const CYCLE_LENGTH_RANGE: (i64, i64) = (21, 35);
/// Selectable period length bounds on the page
pub const PERIOD_LENGTH_RANGE: (i64, i64) = (3, 10);

/// Typed input for the cycle predictor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct CycleInput {
    /// First day of the most recent period
    pub last_period: NaiveDate,
    /// Days from one period start to the next
    #[validate(range(min = 21, max = 35))]
    pub cycle_length_days: i64,
    /// How long a period lasts
    #[validate(range(min = 3, max = 10))]
    pub period_length_days: i64,
}

impl CycleInput {
    /// Build an input, rejecting lengths outside the selectable ranges
    pub fn new(
        last_period: NaiveDate,
        cycle_length_days: i64,
        period_length_days: i64,
    ) -> Result<Self, ToolError> {
        let input = Self {
            last_period,
            cycle_length_days,
            period_length_days,
        };
        input
            .validate()
            .map_err(|e| ToolError::Validation(e.to_string()))?;
        Ok(input)
    }
}

/// Projected dates for the upcoming cycles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePrediction {
    /// Start of the next period (last period + cycle length)
    pub next_period: NaiveDate,
    /// Predicted ovulation day (next period - 14 days)
    pub ovulation: NaiveDate,
    /// First day of the 6-day fertile window (ovulation - 5 days)
    pub fertile_window_start: NaiveDate,
    /// Last day of the fertile window (ovulation + 1 day)
    pub fertile_window_end: NaiveDate,
    /// The three period starts after `next_period`
    pub future_periods: Vec<NaiveDate>,
    /// Carried through for display alongside the dates
    pub period_length_days: i64,
}

/// Project the upcoming cycle dates from an input.
///
/// Deterministic: the same input always produces the same prediction.
pub fn predict(input: &CycleInput) -> CyclePrediction {
    let cycle = Duration::days(input.cycle_length_days);
    let next_period = input.last_period + cycle;
    let ovulation = next_period - Duration::days(LUTEAL_PHASE_DAYS);

    let future_periods = (2..=4)
        .map(|i| input.last_period + Duration::days(input.cycle_length_days * i))
        .collect();

    CyclePrediction {
        next_period,
        ovulation,
        fertile_window_start: ovulation - Duration::days(5),
        fertile_window_end: ovulation + Duration::days(1),
        future_periods,
        period_length_days: input.period_length_days,
    }
}

/// Signed days from `today` to `date` (negative when `date` is past)
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Display branch for a predicted date relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Countdown {
    /// Date is `n` days in the future
    InDays(i64),
    Today,
    /// Date passed `n` days ago
    DaysAgo(i64),
}

impl Countdown {
    /// Classify a predicted date against today
    pub fn for_date(date: NaiveDate, today: NaiveDate) -> Self {
        let days = days_until(date, today);
        if days > 0 {
            Countdown::InDays(days)
        } else if days == 0 {
            Countdown::Today
        } else {
            Countdown::DaysAgo(-days)
        }
    }
}
