//! Health metrics calculations module
//!
//! Provides BMI, BMR, TDEE, sleep duration, calorie estimate, hydration
//! target and the 0-100 health score for an assessment [`Profile`].
//!
//! Every function here is pure. [`compute_metrics`] is total over a
//! validated profile: heights are at least 20 cm, so nothing divides by zero.

use crate::profile::{minutes_since_midnight, ActivityLevel, FoodTag, Gender, Profile};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Liters of water recommended per kilogram of body weight
pub const WATER_LITERS_PER_KG: f64 = 0.033;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Round to a fixed number of decimal places (for display)
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
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

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate BMR using the revised Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let age = age_years as f64;
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

// ============================================================================
// Sleep, Intake and Hydration
// ============================================================================

/// Hours between bedtime and wake time, rounded to one decimal
///
/// A wake time at or before bedtime is taken to be on the next day, so
/// identical times count as a full 24 hours.
pub fn calculate_sleep_duration(bedtime: NaiveTime, wake_time: NaiveTime) -> f64 {
    let bed = minutes_since_midnight(bedtime);
    let mut wake = minutes_since_midnight(wake_time);
    if wake <= bed {
        wake += MINUTES_PER_DAY;
    }
    round_to((wake - bed) as f64 / 60.0, 1)
}

/// Estimated daily calories from the selected food groups (one serving each)
pub fn calculate_calorie_intake<'a>(foods: impl IntoIterator<Item = &'a FoodTag>) -> f64 {
    foods.into_iter().map(FoodTag::calories).sum()
}

/// Recommended daily water intake in liters
///
/// Based on 33ml per kg of body weight
pub fn calculate_water_target_l(weight_kg: f64) -> f64 {
    weight_kg * WATER_LITERS_PER_KG
}

// ============================================================================
// Health Score
// ============================================================================

/// Inputs to the health score, separated out so the rules can be tested alone
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub bmi: f64,
    pub sleep_hours: f64,
    pub water_intake_l: f64,
    pub activity_level: ActivityLevel,
    pub foods: &'a std::collections::BTreeSet<FoodTag>,
}

/// Additive 0-100 health score
///
/// Starts at 100; BMI, sleep, water, food and activity rules add or remove
/// points, then the total is clamped.
pub fn calculate_health_score(inputs: ScoreInputs<'_>) -> u8 {
    let mut score: i32 = 100;

    if inputs.bmi < 18.5 || inputs.bmi > 30.0 {
        score -= 15;
    } else if inputs.bmi > 25.0 {
        score -= 8;
    }

    if inputs.sleep_hours < 6.0 || inputs.sleep_hours > 9.0 {
        score -= 10;
    }

    if inputs.water_intake_l < 1.5 {
        score -= 15;
    } else if inputs.water_intake_l < 2.0 {
        score -= 8;
    }

    let unhealthy = inputs.foods.iter().filter(|f| f.is_unhealthy()).count() as i32;
    let healthy = inputs.foods.iter().filter(|f| f.is_healthy()).count() as i32;
    score -= unhealthy * 5;
    score += healthy * 3;

    let multiplier = inputs.activity_level.multiplier();
    if multiplier < ActivityLevel::LightlyActive.multiplier() {
        score -= 10;
    } else if multiplier > ActivityLevel::ModeratelyActive.multiplier() {
        score += 5;
    }

    score.clamp(0, 100) as u8
}

// ============================================================================
// Metrics
// ============================================================================

/// Derived metrics for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Full-precision BMI; thresholds are applied to this value
    pub bmi: f64,
    /// BMI rounded to 2 decimals for display
    pub bmi_display: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub sleep_duration_hours: f64,
    pub calorie_intake_estimate: f64,
    pub water_target_l: f64,
    pub health_score: u8,
}

/// Compute every metric for a profile
pub fn compute_metrics(profile: &Profile) -> Metrics {
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let bmr = calculate_bmr(profile.weight_kg, profile.height_cm, profile.age, profile.gender);
    let sleep_duration_hours = calculate_sleep_duration(profile.bedtime, profile.wake_time);

    let health_score = calculate_health_score(ScoreInputs {
        bmi,
        sleep_hours: sleep_duration_hours,
        water_intake_l: profile.water_intake_l,
        activity_level: profile.activity_level,
        foods: &profile.food_choices,
    });

    Metrics {
        bmi,
        bmi_display: round_to(bmi, 2),
        bmi_category: classify_bmi(bmi),
        bmr,
        tdee: calculate_tdee(bmr, profile.activity_level),
        sleep_duration_hours,
        calorie_intake_estimate: calculate_calorie_intake(&profile.food_choices),
        water_target_l: calculate_water_target_l(profile.weight_kg),
        health_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{parse_time_of_day, sample_profile};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn t(s: &str) -> NaiveTime {
        parse_time_of_day(s).unwrap()
    }

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_calculation() {
        // 70kg, 175cm -> BMI ~22.86
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.01);
    }

    #[test]
    fn test_bmi_categories() {
        assert_eq!(classify_bmi(17.0), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
        assert_eq!(classify_bmi(24.99), BmiCategory::Normal);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
        assert_eq!(classify_bmi(45.0), BmiCategory::Obese);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: category order follows BMI order
        #[test]
        fn prop_bmi_category_monotonic(a in 5.0f64..80.0, b in 5.0f64..80.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify_bmi(low) <= classify_bmi(high));
        }

        /// Property: the category boundaries sit at 18.5, 25 and 30
        #[test]
        fn prop_bmi_category_thresholds(weight in 10.0f64..=250.0, height in 20.0f64..=250.0) {
            let bmi = calculate_bmi(weight, height);
            let expected = match bmi {
                b if b < 18.5 => BmiCategory::Underweight,
                b if b < 25.0 => BmiCategory::Normal,
                b if b < 30.0 => BmiCategory::Overweight,
                _ => BmiCategory::Obese,
            };
            prop_assert_eq!(classify_bmi(bmi), expected);
        }
    }

    // =========================================================================
    // BMR/TDEE Tests
    // =========================================================================

    #[test]
    fn test_bmr_harris_benedict() {
        // 30yo male, 80kg, 180cm
        let bmr = calculate_bmr(80.0, 180.0, 30, Gender::Male);
        assert!((bmr - 1853.632).abs() < 0.001);

        // 30yo female, 60kg, 165cm
        let bmr = calculate_bmr(60.0, 165.0, 30, Gender::Female);
        assert!((bmr - 1383.683).abs() < 0.001);
    }

    #[test]
    fn test_tdee_uses_multiplier() {
        let tdee = calculate_tdee(1000.0, ActivityLevel::VeryActive);
        assert!((tdee - 1725.0).abs() < 1e-9);
    }

    // =========================================================================
    // Sleep Tests
    // =========================================================================

    #[test]
    fn test_sleep_overnight_wrap() {
        assert_eq!(calculate_sleep_duration(t("23:00"), t("07:00")), 8.0);
    }

    #[test]
    fn test_sleep_same_day() {
        assert_eq!(calculate_sleep_duration(t("07:00"), t("23:00")), 16.0);
    }

    #[test]
    fn test_sleep_identical_times_is_full_day() {
        assert_eq!(calculate_sleep_duration(t("00:00"), t("00:00")), 24.0);
        assert_eq!(calculate_sleep_duration(t("22:15"), t("22:15")), 24.0);
    }

    #[test]
    fn test_sleep_rounds_to_one_decimal() {
        // 6h 50m = 6.8333..
        assert_eq!(calculate_sleep_duration(t("23:40"), t("06:30")), 6.8);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: sleep is in (0, 24] hours
        #[test]
        fn prop_sleep_bounded(bed in 0u32..1440, wake in 0u32..1440) {
            let bed = NaiveTime::from_hms_opt(bed / 60, bed % 60, 0).unwrap();
            let wake = NaiveTime::from_hms_opt(wake / 60, wake % 60, 0).unwrap();
            let hours = calculate_sleep_duration(bed, wake);
            prop_assert!(hours > 0.0 && hours <= 24.0);
        }
    }

    // =========================================================================
    // Intake and Hydration Tests
    // =========================================================================

    #[test]
    fn test_calorie_intake_sums_table() {
        let foods: BTreeSet<FoodTag> = [FoodTag::Rice, FoodTag::Fastfood, FoodTag::Caffeine]
            .into_iter()
            .collect();
        assert_eq!(calculate_calorie_intake(&foods), 130.0 + 540.0 + 2.0);
        assert_eq!(calculate_calorie_intake(&BTreeSet::new()), 0.0);
    }

    #[test]
    fn test_water_target() {
        assert!((calculate_water_target_l(70.0) - 2.31).abs() < 1e-9);
    }

    // =========================================================================
    // Health Score Tests
    // =========================================================================

    fn score_for(bmi: f64, sleep: f64, water: f64, level: ActivityLevel, foods: &[FoodTag]) -> u8 {
        let foods: BTreeSet<FoodTag> = foods.iter().copied().collect();
        calculate_health_score(ScoreInputs {
            bmi,
            sleep_hours: sleep,
            water_intake_l: water,
            activity_level: level,
            foods: &foods,
        })
    }

    #[test]
    fn test_health_score_perfect_profile_clamps_to_100() {
        let score = score_for(
            22.0,
            8.0,
            3.0,
            ActivityLevel::VeryActive,
            &[FoodTag::Fruits, FoodTag::Vegetables, FoodTag::Nuts],
        );
        assert_eq!(score, 100);
    }

    #[test]
    fn test_health_score_water_bands() {
        let base = score_for(22.0, 8.0, 2.5, ActivityLevel::ModeratelyActive, &[]);
        assert_eq!(base, 100);
        assert_eq!(score_for(22.0, 8.0, 1.8, ActivityLevel::ModeratelyActive, &[]), 92);
        assert_eq!(score_for(22.0, 8.0, 1.0, ActivityLevel::ModeratelyActive, &[]), 85);
    }

    #[test]
    fn test_health_score_bmi_and_sleep_penalties() {
        assert_eq!(score_for(27.0, 8.0, 2.5, ActivityLevel::ModeratelyActive, &[]), 92);
        assert_eq!(score_for(31.0, 8.0, 2.5, ActivityLevel::ModeratelyActive, &[]), 85);
        assert_eq!(score_for(17.0, 8.0, 2.5, ActivityLevel::ModeratelyActive, &[]), 85);
        assert_eq!(score_for(22.0, 5.5, 2.5, ActivityLevel::ModeratelyActive, &[]), 90);
        assert_eq!(score_for(22.0, 9.5, 2.5, ActivityLevel::ModeratelyActive, &[]), 90);
    }

    #[test]
    fn test_health_score_food_and_activity() {
        assert_eq!(
            score_for(
                22.0,
                8.0,
                2.5,
                ActivityLevel::Sedentary,
                &[FoodTag::Fastfood, FoodTag::Fried, FoodTag::Fruits],
            ),
            100 - 10 - 10 + 3
        );
    }

    #[test]
    fn test_health_score_worst_case_floor() {
        // every penalty at once still lands well above the clamp at zero
        let score = score_for(45.0, 2.0, 0.2, ActivityLevel::Sedentary, &FoodTag::UNHEALTHY);
        // 100 - 15 - 10 - 15 - 25 - 10 = 25
        assert_eq!(score, 25);

        let score = score_for(45.0, 2.0, 0.2, ActivityLevel::Sedentary, &FoodTag::ALL);
        // unhealthy -25, healthy +9
        assert_eq!(score, 34);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: score is always within [0, 100]
        #[test]
        fn prop_health_score_clamped(
            bmi in 1.0f64..200.0,
            sleep in 0.0f64..24.0,
            water in 0.01f64..20.0,
            level in 0usize..5,
            mask in 0u32..(1 << 15),
        ) {
            let foods: Vec<FoodTag> = FoodTag::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, f)| f)
                .collect();
            let score = score_for(bmi, sleep, water, ActivityLevel::ALL[level], &foods);
            prop_assert!(score <= 100);
        }
    }

    // =========================================================================
    // compute_metrics Tests
    // =========================================================================

    #[test]
    fn test_compute_metrics_sample() {
        let profile = sample_profile();
        let metrics = compute_metrics(&profile);

        assert_eq!(metrics.bmi_display, 22.04);
        assert_eq!(metrics.bmi_category, BmiCategory::Normal);
        assert_eq!(metrics.sleep_duration_hours, 8.0);
        assert_eq!(metrics.calorie_intake_estimate, 85.0);
        assert!((metrics.tdee - metrics.bmr * 1.55).abs() < 1e-9);
        assert_eq!(metrics.health_score, 100);
    }

    #[test]
    fn test_compute_metrics_is_deterministic() {
        let profile = sample_profile();
        assert_eq!(compute_metrics(&profile), compute_metrics(&profile));
    }
}
