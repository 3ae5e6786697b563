//! BMI calculator
//!
//! Body Mass Index from height and weight, with the four-way category split
//! shown on the BMI page (thresholds 18.5 / 25 / 30, lower bound inclusive).
//! All calculations are pure; conversion from imperial input happens before
//! the formula runs.

use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};

/// Typed input for the BMI calculator
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BmiInput {
    /// Height in the unit implied by `unit_system` (cm or inches)
    pub height: f64,
    /// Weight in the unit implied by `unit_system` (kg or lbs)
    pub weight: f64,
    pub unit_system: UnitSystem,
}

impl BmiInput {
    /// Normalize to (height in meters, weight in kg)
    pub fn to_si(&self) -> (f64, f64) {
        let height_cm = self.unit_system.height_unit().to_cm(self.height);
        let weight_kg = self.unit_system.weight_unit().to_kg(self.weight);
        (height_cm / 100.0, weight_kg)
    }
}

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the BMI range for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value, rounded to 1 decimal place for display
    pub value: f64,
    /// Category derived from the unrounded value
    pub category: BmiCategory,
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate the complete BMI result for a form input
pub fn evaluate(input: &BmiInput) -> BmiResult {
    let (height_m, weight_kg) = input.to_si();
    let bmi = calculate_bmi(weight_kg, height_m);
    BmiResult {
        value: (bmi * 10.0).round() / 10.0,
        category: classify_bmi(bmi),
    }
}
