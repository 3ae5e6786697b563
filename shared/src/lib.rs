//! MedikaRx Health Tools Shared Library
//!
//! Core calculations for the MedikaRx Labs health tool pages: the BMI
//! calculator, blood pressure tracker, calorie counter, and menstrual cycle
//! predictor. Every result is a pure function of its inputs; the only state
//! is the page-scoped blood pressure history and food log, which never
//! outlive a visit. Rendering, localization, and the mock dashboard data are
//! presentation concerns and live outside this crate.

pub mod blood_pressure;
pub mod bmi;
pub mod calories;
pub mod cycle;
pub mod errors;
pub mod forms;
pub mod units;

// Re-export commonly used items
pub use blood_pressure::{classify_bp, BpAverage, BpCategory, BpReading, BpReadingLog};
pub use bmi::{classify_bmi, BmiCategory, BmiInput, BmiResult};
pub use calories::{
    calculate_bmr, calculate_goal, ActivityLevel, BiologicalSex, CalorieGoal, CalorieProfile,
    FoodEntry, FoodLog, WeightGoal,
};
pub use cycle::{days_until, predict, Countdown, CycleInput, CyclePrediction};
pub use errors::ToolError;
pub use units::{HeightUnit, UnitSystem, WeightUnit};
