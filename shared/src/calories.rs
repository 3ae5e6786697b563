//! Calorie counter
//!
//! Two independent pieces, matching the page: a one-shot daily calorie goal
//! (Mifflin-St Jeor BMR, activity multiplier, goal offset) and a session-only
//! food log. The goal and the log are never reconciled with each other;
//! logging food does not recompute the goal and vice versa.

use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex for the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl std::str::FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            _ => Err(format!("Unknown biological sex: {}", s)),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise, physical job
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "veryActive" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Weight goal selected on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl WeightGoal {
    /// Daily calorie offset from TDEE (roughly 1 lb/week either way)
    pub fn calorie_offset(&self) -> i32 {
        match self {
            WeightGoal::Lose => -500,
            WeightGoal::Maintain => 0,
            WeightGoal::Gain => 500,
        }
    }
}

impl std::str::FromStr for WeightGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(WeightGoal::Lose),
            "maintain" => Ok(WeightGoal::Maintain),
            "gain" => Ok(WeightGoal::Gain),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// Profile data needed to compute a daily calorie goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalorieProfile {
    pub age_years: i32,
    pub sex: BiologicalSex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: WeightGoal,
}

// ============================================================================
// BMR / TDEE / Goal
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Daily calorie goal derived from a profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalorieGoal {
    /// Basal Metabolic Rate, whole calories
    pub bmr: i32,
    /// Total Daily Energy Expenditure, whole calories
    pub tdee: i32,
    pub goal: WeightGoal,
    /// TDEE adjusted by the goal offset
    pub target_calories: i32,
}

/// Calculate the complete calorie goal for a profile.
///
/// Each stage rounds to whole calories before the next applies: BMR rounds,
/// TDEE = round(BMR × multiplier), target = TDEE + goal offset.
pub fn calculate_goal(profile: &CalorieProfile) -> CalorieGoal {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    )
    .round() as i32;
    let tdee = (bmr as f64 * profile.activity_level.multiplier()).round() as i32;

    CalorieGoal {
        bmr,
        tdee,
        goal: profile.goal,
        target_calories: tdee + profile.goal.calorie_offset(),
    }
}

// ============================================================================
// Food Log
// ============================================================================

/// One logged food item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    pub calories_per_serving: i32,
    pub quantity: i32,
}

impl FoodEntry {
    /// Calories contributed by this entry
    pub fn total_calories(&self) -> i32 {
        self.calories_per_serving * self.quantity
    }
}

/// Session-only ordered list of logged food
///
/// Independent of any computed [`CalorieGoal`]; the page compares the two
/// only at display time.
#[derive(Debug, Clone, Default)]
pub struct FoodLog {
    entries: Vec<FoodEntry>,
}

impl FoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the log
    pub fn add(&mut self, entry: FoodEntry) {
        tracing::debug!(name = %entry.name, calories = entry.total_calories(), "adding food entry");
        self.entries.push(entry);
    }

    /// Remove the entry at `index`, returning it if the index was valid
    pub fn remove(&mut self, index: usize) -> Option<FoodEntry> {
        if index < self.entries.len() {
            let entry = self.entries.remove(index);
            tracing::debug!(name = %entry.name, "removed food entry");
            Some(entry)
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total intake: Σ(calories per serving × quantity)
    pub fn total_calories(&self) -> i32 {
        self.entries.iter().map(FoodEntry::total_calories).sum()
    }

    /// Intake as a percentage of a target (may exceed 100)
    pub fn progress_percent(&self, target_calories: i32) -> f64 {
        if target_calories == 0 {
            return 0.0;
        }
        self.total_calories() as f64 / target_calories as f64 * 100.0
    }
}
