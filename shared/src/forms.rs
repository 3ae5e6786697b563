//! Typed form state for the calculator pages
//!
//! Each form holds its fields exactly as strings, the way the page does, and
//! offers two things: `is_ready`, the predicate behind the disabled submit
//! button, and `parse`, which produces the typed calculator input or `None`.
//! Parsing fails closed: empty or non-numeric fields mean "not ready", never
//! an error.

use crate::bmi::BmiInput;
use crate::calories::{ActivityLevel, BiologicalSex, CalorieProfile, FoodEntry, WeightGoal};
use crate::cycle::CycleInput;
use crate::units::UnitSystem;
use chrono::NaiveDate;

// ============================================================================
// Parse Helpers
// ============================================================================

/// Parse a numeric field, treating NaN and infinities as unparseable
fn parse_f64(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

fn parse_i32(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn parse_i64(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn present(raw: &str) -> bool {
    !raw.trim().is_empty()
}

// ============================================================================
// BMI Form
// ============================================================================

/// Raw state of the BMI calculator form
#[derive(Debug, Clone, Default)]
pub struct BmiForm {
    pub height: String,
    pub weight: String,
    pub unit_system: UnitSystem,
}

impl BmiForm {
    /// Both required fields present
    pub fn is_ready(&self) -> bool {
        present(&self.height) && present(&self.weight)
    }

    pub fn parse(&self) -> Option<BmiInput> {
        if !self.is_ready() {
            return None;
        }
        Some(BmiInput {
            height: parse_f64(&self.height)?,
            weight: parse_f64(&self.weight)?,
            unit_system: self.unit_system,
        })
    }
}

// ============================================================================
// Blood Pressure Form
// ============================================================================

/// Raw state of the blood pressure entry form
#[derive(Debug, Clone, Default)]
pub struct BpForm {
    pub systolic: String,
    pub diastolic: String,
}

/// Parsed blood pressure entry
#[derive(Debug, Clone, Copy)]
pub struct BpEntry {
    pub systolic: i32,
    pub diastolic: i32,
}

impl BpForm {
    pub fn is_ready(&self) -> bool {
        present(&self.systolic) && present(&self.diastolic)
    }

    pub fn parse(&self) -> Option<BpEntry> {
        if !self.is_ready() {
            return None;
        }
        Some(BpEntry {
            systolic: parse_i32(&self.systolic)?,
            diastolic: parse_i32(&self.diastolic)?,
        })
    }
}

// ============================================================================
// Calorie Goal Form
// ============================================================================

/// Raw state of the calorie goal form (all six fields required)
#[derive(Debug, Clone, Default)]
pub struct CalorieGoalForm {
    pub age: String,
    pub gender: String,
    pub weight: String,
    pub height: String,
    pub activity_level: String,
    pub goal: String,
}

impl CalorieGoalForm {
    pub fn is_ready(&self) -> bool {
        present(&self.age)
            && present(&self.gender)
            && present(&self.weight)
            && present(&self.height)
            && present(&self.activity_level)
            && present(&self.goal)
    }

    pub fn parse(&self) -> Option<CalorieProfile> {
        if !self.is_ready() {
            return None;
        }
        Some(CalorieProfile {
            age_years: parse_i32(&self.age)?,
            sex: self.gender.parse::<BiologicalSex>().ok()?,
            weight_kg: parse_f64(&self.weight)?,
            height_cm: parse_f64(&self.height)?,
            activity_level: self.activity_level.parse::<ActivityLevel>().ok()?,
            goal: self.goal.parse::<WeightGoal>().ok()?,
        })
    }
}

// ============================================================================
// Food Form
// ============================================================================

/// Raw state of the add-food form
#[derive(Debug, Clone)]
pub struct FoodForm {
    pub name: String,
    pub calories: String,
    pub quantity: String,
}

impl Default for FoodForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            calories: String::new(),
            // The page pre-fills quantity with 1
            quantity: "1".to_string(),
        }
    }
}

impl FoodForm {
    /// Name and calories required; quantity has a default
    pub fn is_ready(&self) -> bool {
        present(&self.name) && present(&self.calories)
    }

    pub fn parse(&self) -> Option<FoodEntry> {
        if !self.is_ready() {
            return None;
        }
        Some(FoodEntry {
            name: self.name.trim().to_string(),
            calories_per_serving: parse_i32(&self.calories)?,
            quantity: parse_i32(&self.quantity)?,
        })
    }
}

// ============================================================================
// Cycle Form
// ============================================================================

/// Raw state of the cycle predictor form
///
/// Cycle and period lengths come from selects, so they default to the page's
/// pre-selected values rather than empty.
#[derive(Debug, Clone)]
pub struct CycleForm {
    /// ISO 8601 date from the date field (YYYY-MM-DD)
    pub last_period: String,
    pub cycle_length: String,
    pub period_length: String,
}

impl Default for CycleForm {
    fn default() -> Self {
        Self {
            last_period: String::new(),
            cycle_length: "28".to_string(),
            period_length: "5".to_string(),
        }
    }
}

impl CycleForm {
    /// Only the date is free-form; the selects always hold a value
    pub fn is_ready(&self) -> bool {
        present(&self.last_period)
    }

    pub fn parse(&self) -> Option<CycleInput> {
        if !self.is_ready() {
            return None;
        }
        let last_period = NaiveDate::parse_from_str(self.last_period.trim(), "%Y-%m-%d").ok()?;
        CycleInput::new(
            last_period,
            parse_i64(&self.cycle_length)?,
            parse_i64(&self.period_length)?,
        )
        .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::{self, BmiCategory};
    use crate::calories;

    #[test]
    fn test_bmi_form_ready_and_parse() {
        let mut form = BmiForm::default();
        assert!(!form.is_ready());
        assert!(form.parse().is_none());

        form.height = "180".to_string();
        assert!(!form.is_ready());

        form.weight = "72".to_string();
        assert!(form.is_ready());

        let result = bmi::evaluate(&form.parse().unwrap());
        assert_eq!(result.value, 22.2);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_non_numeric_fails_closed() {
        let form = BmiForm {
            height: "tall".to_string(),
            weight: "72".to_string(),
            unit_system: UnitSystem::Metric,
        };
        assert!(form.is_ready()); // fields are present...
        assert!(form.parse().is_none()); // ...but parsing fails closed

        let form = BpForm {
            systolic: "12O".to_string(), // letter O, not zero
            diastolic: "80".to_string(),
        };
        assert!(form.parse().is_none());
    }

    #[test]
    fn test_nan_rejected() {
        let form = BmiForm {
            height: "NaN".to_string(),
            weight: "inf".to_string(),
            unit_system: UnitSystem::Metric,
        };
        assert!(form.parse().is_none());
    }

    #[test]
    fn test_bp_form_parse() {
        let form = BpForm {
            systolic: "119".to_string(),
            diastolic: " 79 ".to_string(),
        };
        let entry = form.parse().unwrap();
        assert_eq!(entry.systolic, 119);
        assert_eq!(entry.diastolic, 79);
    }

    #[test]
    fn test_calorie_goal_form_requires_all_fields() {
        let mut form = CalorieGoalForm {
            age: "25".to_string(),
            gender: "male".to_string(),
            weight: "70".to_string(),
            height: "175".to_string(),
            activity_level: "moderate".to_string(),
            goal: String::new(),
        };
        assert!(!form.is_ready());
        assert!(form.parse().is_none());

        form.goal = "lose".to_string();
        let profile = form.parse().unwrap();
        let goal = calories::calculate_goal(&profile);
        assert_eq!(goal.target_calories, 2095);
    }

    #[test]
    fn test_unknown_select_value_fails_closed() {
        let form = CalorieGoalForm {
            age: "25".to_string(),
            gender: "male".to_string(),
            weight: "70".to_string(),
            height: "175".to_string(),
            activity_level: "couch".to_string(),
            goal: "lose".to_string(),
        };
        assert!(form.is_ready());
        assert!(form.parse().is_none());
    }

    #[test]
    fn test_food_form_default_quantity() {
        let form = FoodForm {
            name: "Apple".to_string(),
            calories: "95".to_string(),
            ..FoodForm::default()
        };
        let entry = form.parse().unwrap();
        assert_eq!(entry.quantity, 1);
        assert_eq!(entry.total_calories(), 95);
    }

    #[test]
    fn test_cycle_form_defaults_and_parse() {
        let mut form = CycleForm::default();
        assert!(!form.is_ready());

        form.last_period = "2024-01-01".to_string();
        let input = form.parse().unwrap();
        assert_eq!(input.cycle_length_days, 28);
        assert_eq!(input.period_length_days, 5);

        let prediction = crate::cycle::predict(&input);
        assert_eq!(
            prediction.next_period,
            NaiveDate::from_ymd_opt(2024, 1, 29).unwrap()
        );
    }

    #[test]
    fn test_cycle_form_bad_date_fails_closed() {
        let form = CycleForm {
            last_period: "01/15/2024".to_string(),
            ..CycleForm::default()
        };
        assert!(form.parse().is_none());
    }
}
