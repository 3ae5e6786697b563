//! Blood pressure tracker
//!
//! Classifies readings into the six categories shown on the BP page and keeps
//! a session-only history (most recent first) with a rolling average over the
//! last five readings. Nothing here persists: the log dies with the page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of recent readings the rolling average covers
pub const AVERAGE_WINDOW: usize = 5;

// ============================================================================
// Classification
// ============================================================================

/// Blood pressure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BpCategory {
    Low,
    Normal,
    Elevated,
    HighStage1,
    HighStage2,
    Crisis,
}

impl BpCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BpCategory::Low => "Low",
            BpCategory::Normal => "Normal",
            BpCategory::Elevated => "Elevated",
            BpCategory::HighStage1 => "High Stage 1",
            BpCategory::HighStage2 => "High Stage 2",
            BpCategory::Crisis => "Crisis",
        }
    }

    /// Range label shown in the category table on the page
    pub fn range_label(&self) -> &'static str {
        match self {
            BpCategory::Low => "<90/<60",
            BpCategory::Normal => "<120/<80",
            BpCategory::Elevated => "120-129/<80",
            BpCategory::HighStage1 => "130-139/80-89",
            BpCategory::HighStage2 => "140-179/90-119",
            BpCategory::Crisis => "\u{2265}180/\u{2265}120",
        }
    }
}

/// Classify a reading into a category.
///
/// Branch order is load-bearing: the arms overlap (mixed AND/OR thresholds)
/// and the first match wins. A reading like 135/95 satisfies both stage
/// conditions textually; it lands in Stage 1 because that arm comes first.
pub fn classify_bp(systolic: i32, diastolic: i32) -> BpCategory {
    if systolic < 90 || diastolic < 60 {
        BpCategory::Low
    } else if systolic < 120 && diastolic < 80 {
        BpCategory::Normal
    } else if systolic < 130 && diastolic < 80 {
        BpCategory::Elevated
    } else if systolic < 140 || diastolic < 90 {
        BpCategory::HighStage1
    } else if systolic < 180 || diastolic < 120 {
        BpCategory::HighStage2
    } else {
        BpCategory::Crisis
    }
}

// ============================================================================
// Readings and Session History
// ============================================================================

/// A single blood pressure reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BpReading {
    /// Systolic pressure in mmHg
    pub systolic: i32,
    /// Diastolic pressure in mmHg
    pub diastolic: i32,
    /// When the reading was added
    pub recorded_at: DateTime<Utc>,
}

impl BpReading {
    /// Category for this reading
    pub fn category(&self) -> BpCategory {
        classify_bp(self.systolic, self.diastolic)
    }
}

/// Average over the most recent readings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BpAverage {
    /// Mean systolic, rounded to nearest integer
    pub systolic: i32,
    /// Mean diastolic, rounded to nearest integer
    pub diastolic: i32,
    /// Category of the rounded average
    pub category: BpCategory,
    /// How many readings contributed
    pub sample_size: usize,
}

/// Session-only reading history, most recent first
#[derive(Debug, Clone, Default)]
pub struct BpReadingLog {
    readings: Vec<BpReading>,
}

impl BpReadingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading timestamped now. Returns the stored reading.
    pub fn record(&mut self, systolic: i32, diastolic: i32) -> BpReading {
        self.record_at(systolic, diastolic, Utc::now())
    }

    /// Record a reading with an explicit timestamp
    pub fn record_at(&mut self, systolic: i32, diastolic: i32, at: DateTime<Utc>) -> BpReading {
        let reading = BpReading {
            systolic,
            diastolic,
            recorded_at: at,
        };
        tracing::debug!(systolic, diastolic, "recording blood pressure reading");
        self.readings.insert(0, reading);
        reading
    }

    /// Readings, newest first
    pub fn readings(&self) -> &[BpReading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Most recently recorded reading
    pub fn latest(&self) -> Option<&BpReading> {
        self.readings.first()
    }

    /// Arithmetic mean of the most recent five readings (or fewer), each
    /// component rounded to the nearest integer before classification.
    pub fn average_recent(&self) -> Option<BpAverage> {
        if self.readings.is_empty() {
            return None;
        }

        let recent = &self.readings[..self.readings.len().min(AVERAGE_WINDOW)];
        let count = recent.len() as f64;
        let systolic =
            (recent.iter().map(|r| r.systolic).sum::<i32>() as f64 / count).round() as i32;
        let diastolic =
            (recent.iter().map(|r| r.diastolic).sum::<i32>() as f64 / count).round() as i32;

        Some(BpAverage {
            systolic,
            diastolic,
            category: classify_bp(systolic, diastolic),
            sample_size: recent.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(85, 70, BpCategory::Low)]
    #[case(110, 55, BpCategory::Low)]
    #[case(119, 79, BpCategory::Normal)]
    #[case(125, 79, BpCategory::Elevated)]
    #[case(130, 85, BpCategory::HighStage1)]
    #[case(135, 95, BpCategory::HighStage1)] // overlapping arms, first wins
    #[case(150, 95, BpCategory::HighStage2)]
    #[case(185, 125, BpCategory::Crisis)]
    fn test_classification(#[case] sys: i32, #[case] dia: i32, #[case] expected: BpCategory) {
        assert_eq!(classify_bp(sys, dia), expected);
    }

    #[test]
    fn test_history_ordering() {
        let mut log = BpReadingLog::new();
        let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        log.record_at(120, 80, t0);
        log.record_at(118, 78, t0 + chrono::Duration::hours(1));

        // Newest first
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().map(|r| r.systolic), Some(118));
        assert_eq!(log.readings()[1].systolic, 120);
    }

    #[test]
    fn test_average_of_three() {
        let mut log = BpReadingLog::new();
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        for (sys, dia) in [(120, 80), (118, 78), (122, 82)] {
            log.record_at(sys, dia, t);
        }

        let avg = log.average_recent().unwrap();
        assert_eq!(avg.systolic, 120);
        assert_eq!(avg.diastolic, 80);
        assert_eq!(avg.category, BpCategory::HighStage1); // 120/80 misses every earlier arm
        assert_eq!(avg.sample_size, 3);
    }

    #[test]
    fn test_average_window_caps_at_five() {
        let mut log = BpReadingLog::new();
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        // One old outlier, then five identical readings on top of it
        log.record_at(180, 110, t);
        for _ in 0..5 {
            log.record_at(110, 70, t);
        }

        let avg = log.average_recent().unwrap();
        assert_eq!(avg.sample_size, 5);
        assert_eq!(avg.systolic, 110);
        assert_eq!(avg.diastolic, 70);
        assert_eq!(avg.category, BpCategory::Normal);
    }

    #[test]
    fn test_average_empty() {
        assert!(BpReadingLog::new().average_recent().is_none());
    }

    #[test]
    fn test_average_rounding() {
        let mut log = BpReadingLog::new();
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        log.record_at(121, 81, t);
        log.record_at(120, 80, t);

        // 120.5 -> 121, 80.5 -> 81
        let avg = log.average_recent().unwrap();
        assert_eq!(avg.systolic, 121);
        assert_eq!(avg.diastolic, 81);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: classification is total over plausible readings
        #[test]
        fn prop_classification_total(sys in 0i32..300, dia in 0i32..200) {
            // Must not panic; every pair maps to a category
            let _ = classify_bp(sys, dia);
        }

        /// Property: average of identical readings is that reading
        #[test]
        fn prop_average_of_identical(sys in 80i32..200, dia in 50i32..130, n in 1usize..8) {
            let mut log = BpReadingLog::new();
            let t = chrono::Utc::now();
            for _ in 0..n {
                log.record_at(sys, dia, t);
            }
            let avg = log.average_recent().unwrap();
            prop_assert_eq!(avg.systolic, sys);
            prop_assert_eq!(avg.diastolic, dia);
            prop_assert_eq!(avg.category, classify_bp(sys, dia));
        }

        /// Property: reading category matches classification of its parts
        #[test]
        fn prop_reading_category(sys in 0i32..300, dia in 0i32..200) {
            let reading = BpReading {
                systolic: sys,
                diastolic: dia,
                recorded_at: chrono::Utc::now(),
            };
            prop_assert_eq!(reading.category(), classify_bp(sys, dia));
        }
    }
}
