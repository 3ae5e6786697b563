//! MedikaRx Health Tools WASM Module
//!
//! WebAssembly bindings over the shared calculation crate so the browser
//! pages can run the calculators without any backend.

use chrono::NaiveDate;
use medikarx_health_shared::{
    blood_pressure, bmi, calories, cycle, ActivityLevel, BiologicalSex, BmiInput, CalorieProfile,
    CycleInput, UnitSystem, WeightGoal,
};
use wasm_bindgen::prelude::*;

/// Calculate BMI, rounded to 1 decimal place for display
#[wasm_bindgen]
pub fn calculate_bmi(height: f64, weight: f64, imperial: bool) -> f64 {
    let input = BmiInput {
        height,
        weight,
        unit_system: if imperial {
            UnitSystem::Imperial
        } else {
            UnitSystem::Metric
        },
    };
    bmi::evaluate(&input).value
}

/// BMI category label for the same inputs
#[wasm_bindgen]
pub fn bmi_category(height: f64, weight: f64, imperial: bool) -> String {
    let input = BmiInput {
        height,
        weight,
        unit_system: if imperial {
            UnitSystem::Imperial
        } else {
            UnitSystem::Metric
        },
    };
    let (height_m, weight_kg) = input.to_si();
    bmi::classify_bmi(bmi::calculate_bmi(weight_kg, height_m))
        .description()
        .to_string()
}

/// Blood pressure category label for a reading
#[wasm_bindgen]
pub fn bp_category(systolic: i32, diastolic: i32) -> String {
    blood_pressure::classify_bp(systolic, diastolic)
        .description()
        .to_string()
}

/// Daily target calories from the goal form values.
///
/// Returns 0 when a select value does not parse, matching the page's
/// fail-closed handling of incomplete forms.
#[wasm_bindgen]
pub fn target_calories(
    age_years: i32,
    gender: &str,
    weight_kg: f64,
    height_cm: f64,
    activity_level: &str,
    goal: &str,
) -> i32 {
    let (Ok(sex), Ok(activity_level), Ok(goal)) = (
        gender.parse::<BiologicalSex>(),
        activity_level.parse::<ActivityLevel>(),
        goal.parse::<WeightGoal>(),
    ) else {
        return 0;
    };

    let profile = CalorieProfile {
        age_years,
        sex,
        weight_kg,
        height_cm,
        activity_level,
        goal,
    };
    calories::calculate_goal(&profile).target_calories
}

/// Cycle prediction as a JSON string, or empty on bad input.
///
/// `last_period` is an ISO 8601 date (YYYY-MM-DD), as produced by a date
/// input field.
#[wasm_bindgen]
pub fn predict_cycle(last_period: &str, cycle_length_days: i64, period_length_days: i64) -> String {
    let Ok(last_period) = NaiveDate::parse_from_str(last_period, "%Y-%m-%d") else {
        return String::new();
    };
    let Ok(input) = CycleInput::new(last_period, cycle_length_days, period_length_days) else {
        return String::new();
    };
    serde_json::to_string(&cycle::predict(&input)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_binding() {
        assert_eq!(calculate_bmi(180.0, 72.0, false), 22.2);
        assert_eq!(calculate_bmi(70.0, 150.0, true), 21.5);
        assert_eq!(bmi_category(180.0, 72.0, false), "Normal weight");
    }

    #[test]
    fn test_bp_binding() {
        assert_eq!(bp_category(119, 79), "Normal");
        assert_eq!(bp_category(185, 125), "Crisis");
    }

    #[test]
    fn test_target_calories_binding() {
        let target = target_calories(25, "male", 70.0, 175.0, "moderate", "lose");
        assert_eq!(target, 2095);

        // Unknown select value fails closed
        assert_eq!(target_calories(25, "male", 70.0, 175.0, "couch", "lose"), 0);
    }

    #[test]
    fn test_predict_cycle_binding() {
        let json = predict_cycle("2024-01-01", 28, 5);
        assert!(json.contains("2024-01-29"));
        assert!(json.contains("2024-01-15"));

        assert_eq!(predict_cycle("not-a-date", 28, 5), "");
        assert_eq!(predict_cycle("2024-01-01", 99, 5), "");
    }
}
