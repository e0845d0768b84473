//! Recommendation rules
//!
//! Each list is built from independent predicate → message rules evaluated
//! in declaration order. Rules never deduplicate; two rules that fire both
//! contribute their message.

use crate::health_metrics::Metrics;
use crate::profile::{ActivityLevel, FoodTag, Profile};
use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// Dinner after this hour is flagged
pub const LATE_DINNER_HOUR: u32 = 21;
/// Breakfast after this hour is flagged
pub const LATE_BREAKFAST_HOUR: u32 = 9;
/// Longest comfortable lunch → dinner gap, in hours
pub const MAX_LUNCH_DINNER_GAP_HOURS: i64 = 7;

/// Category-keyed recommendation lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub diet: Vec<String>,
    pub exercise: Vec<String>,
    pub lifestyle: Vec<String>,
    pub medical: Vec<String>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.diet.is_empty()
            && self.exercise.is_empty()
            && self.lifestyle.is_empty()
            && self.medical.is_empty()
    }
}

fn is_sedentary(profile: &Profile) -> bool {
    profile.activity_level.multiplier() < ActivityLevel::LightlyActive.multiplier()
}

/// Build the four recommendation lists
pub fn build_recommendations(profile: &Profile, metrics: &Metrics) -> Recommendations {
    let mut recs = Recommendations::default();
    let bmi = metrics.bmi;
    let sleep = metrics.sleep_duration_hours;

    // Diet
    if bmi > 25.0 {
        recs.diet.push("Focus on portion control and calorie-dense foods".to_string());
        recs.diet.push(
            "Increase protein intake to maintain muscle mass while losing weight".to_string(),
        );
    } else if bmi < 18.5 {
        recs.diet.push("Increase caloric intake with nutrient-dense foods".to_string());
        recs.diet.push("Add healthy fats like nuts, avocados, and olive oil".to_string());
    }
    if profile.eats_any(&[FoodTag::Fastfood, FoodTag::Processed]) {
        recs.diet.push("Reduce processed and fast food consumption".to_string());
        recs.diet.push("Cook more meals at home using fresh ingredients".to_string());
    }
    if !profile.eats(FoodTag::Vegetables) {
        recs.diet.push("Include at least 5 servings of vegetables daily".to_string());
    }
    if !profile.eats(FoodTag::Fruits) {
        recs.diet.push("Add 2-3 servings of fresh fruits to your daily diet".to_string());
    }
    if profile.water_intake_l < 2.5 {
        recs.diet.push(format!(
            "Increase water intake to at least 2.5 liters daily (currently {}L)",
            profile.water_intake_l
        ));
    }

    // Exercise
    if is_sedentary(profile) {
        recs.exercise
            .push("Start with 30 minutes of moderate exercise 3 times per week".to_string());
        recs.exercise
            .push("Try walking, swimming, or cycling for cardiovascular health".to_string());
    } else if profile.activity_level.multiplier() > ActivityLevel::VeryActive.multiplier() {
        recs.exercise.push("Ensure adequate rest days to prevent overtraining".to_string());
        recs.exercise.push("Focus on recovery and flexibility exercises".to_string());
    }
    if bmi > 25.0 {
        recs.exercise
            .push("Combine cardio with strength training for optimal weight loss".to_string());
    } else if bmi < 18.5 {
        recs.exercise.push("Focus on strength training to build muscle mass".to_string());
    }

    // Lifestyle
    if sleep < 7.0 {
        recs.lifestyle.push("Aim for 7-9 hours of quality sleep nightly".to_string());
        recs.lifestyle.push("Establish a consistent bedtime routine".to_string());
    }
    if sleep > 9.0 {
        recs.lifestyle.push(
            "Excessive sleep may indicate underlying issues - monitor your energy levels"
                .to_string(),
        );
    }
    if profile.dinner_time.hour() > LATE_DINNER_HOUR {
        recs.lifestyle.push(
            "Have dinner at least 3 hours before bedtime for better digestion".to_string(),
        );
    }
    if profile.eats(FoodTag::Alcohol) {
        recs.lifestyle.push("Limit alcohol consumption to recommended guidelines".to_string());
    }
    if profile.eats(FoodTag::Caffeine) {
        recs.lifestyle.push("Avoid caffeine 6 hours before bedtime".to_string());
    }

    // Medical
    if metrics.health_score < 70 {
        recs.medical.push(
            "Consider consulting a healthcare provider for a comprehensive health assessment"
                .to_string(),
        );
    }
    if bmi > 30.0 || bmi < 16.0 {
        recs.medical.push(
            "Consult a physician or registered dietitian for personalized guidance".to_string(),
        );
    }
    if profile.age > 40 && is_sedentary(profile) {
        recs.medical
            .push("Regular health screenings become more important after 40".to_string());
    }

    recs
}

/// Meal timing advisories, in breakfast → lunch gap → dinner order
pub fn meal_timing_advice(profile: &Profile) -> Vec<String> {
    let mut advice = Vec::new();

    let breakfast_hour = profile.breakfast_time.hour();
    let lunch_hour = profile.lunch_time.hour() as i64;
    let dinner_hour = profile.dinner_time.hour();

    if breakfast_hour > LATE_BREAKFAST_HOUR {
        advice.push(
            "Try to eat breakfast within 1-2 hours of waking up to kickstart your metabolism."
                .to_string(),
        );
    }
    if dinner_hour as i64 - lunch_hour > MAX_LUNCH_DINNER_GAP_HOURS {
        advice.push(
            "The gap between lunch and dinner is quite long. Consider a healthy snack in between."
                .to_string(),
        );
    }
    if dinner_hour > LATE_DINNER_HOUR {
        advice.push(
            "Try to have dinner at least 3 hours before bedtime for better digestion.".to_string(),
        );
    }

    advice
}

/// Short headline recommendations shown at the top of the results
pub fn general_recommendations(profile: &Profile, metrics: &Metrics) -> Vec<String> {
    let mut recs = Vec::new();

    if metrics.bmi < 18.5 {
        recs.push("Your BMI indicates you're underweight. Consider consulting a nutritionist for a healthy weight gain plan.".to_string());
    } else if metrics.bmi > 25.0 {
        recs.push("Your BMI indicates you're overweight. Focus on balanced nutrition and regular exercise.".to_string());
    } else {
        recs.push("Great! Your BMI is in the healthy range. Keep maintaining your current lifestyle.".to_string());
    }

    if metrics.sleep_duration_hours < 7.0 {
        recs.push("You're getting less than 7 hours of sleep. Try to improve your sleep schedule for better health.".to_string());
    } else if metrics.sleep_duration_hours > 9.0 {
        recs.push("You're sleeping more than 9 hours. Consider evaluating your sleep quality and daily routine.".to_string());
    }

    if profile.water_intake_l < 2.0 {
        recs.push("Increase your daily water intake. Aim for at least 2-3 liters per day.".to_string());
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_metrics::compute_metrics;
    use crate::profile::{parse_time_of_day, sample_profile};

    fn recs_for(profile: &Profile) -> Recommendations {
        build_recommendations(profile, &compute_metrics(profile))
    }

    #[test]
    fn test_healthy_profile_has_no_warnings() {
        let mut profile = sample_profile();
        profile.water_intake_l = 3.0;
        let recs = recs_for(&profile);
        assert!(recs.is_empty(), "unexpected recommendations: {:?}", recs);
    }

    #[test]
    fn test_overweight_diet_and_exercise_rules() {
        let mut profile = sample_profile();
        profile.weight_kg = 75.0; // BMI ~27.5
        let recs = recs_for(&profile);
        assert_eq!(recs.diet[0], "Focus on portion control and calorie-dense foods");
        assert_eq!(recs.diet.len(), 2);
        assert_eq!(
            recs.exercise,
            vec!["Combine cardio with strength training for optimal weight loss".to_string()]
        );
    }

    #[test]
    fn test_diet_rules_keep_declaration_order() {
        let mut profile = sample_profile();
        profile.food_choices = [FoodTag::Fastfood].into_iter().collect();
        profile.water_intake_l = 1.5;
        let recs = recs_for(&profile);
        assert_eq!(
            recs.diet,
            vec![
                "Reduce processed and fast food consumption".to_string(),
                "Cook more meals at home using fresh ingredients".to_string(),
                "Include at least 5 servings of vegetables daily".to_string(),
                "Add 2-3 servings of fresh fruits to your daily diet".to_string(),
                "Increase water intake to at least 2.5 liters daily (currently 1.5L)".to_string(),
            ]
        );
    }

    #[test]
    fn test_sedentary_and_medical_rules() {
        let mut profile = sample_profile();
        profile.age = 50;
        profile.activity_level = ActivityLevel::Sedentary;
        let recs = recs_for(&profile);
        assert_eq!(recs.exercise.len(), 2);
        assert_eq!(
            recs.medical,
            vec!["Regular health screenings become more important after 40".to_string()]
        );
    }

    #[test]
    fn test_extra_active_rest_rules() {
        let mut profile = sample_profile();
        profile.activity_level = ActivityLevel::ExtraActive;
        let recs = recs_for(&profile);
        assert_eq!(
            recs.exercise,
            vec![
                "Ensure adequate rest days to prevent overtraining".to_string(),
                "Focus on recovery and flexibility exercises".to_string(),
            ]
        );

        // 1.725 is not above the very-active multiplier
        profile.activity_level = ActivityLevel::VeryActive;
        assert!(recs_for(&profile).exercise.is_empty());
    }

    #[test]
    fn test_lifestyle_rules() {
        let mut profile = sample_profile();
        profile.bedtime = parse_time_of_day("01:00").unwrap();
        profile.wake_time = parse_time_of_day("06:00").unwrap();
        profile.dinner_time = parse_time_of_day("22:00").unwrap();
        profile.food_choices = [FoodTag::Alcohol, FoodTag::Caffeine, FoodTag::Fruits, FoodTag::Vegetables]
            .into_iter()
            .collect();
        let recs = recs_for(&profile);
        assert_eq!(recs.lifestyle.len(), 5);
        assert_eq!(recs.lifestyle[4], "Avoid caffeine 6 hours before bedtime");
    }

    #[test]
    fn test_low_score_and_extreme_bmi_medical() {
        let mut profile = sample_profile();
        profile.weight_kg = 120.0; // BMI ~44
        profile.water_intake_l = 1.0;
        profile.activity_level = ActivityLevel::Sedentary;
        let recs = recs_for(&profile);
        assert_eq!(recs.medical.len(), 2);
    }

    #[test]
    fn test_meal_timing_order() {
        let mut profile = sample_profile();
        profile.breakfast_time = parse_time_of_day("10:30").unwrap();
        profile.lunch_time = parse_time_of_day("12:00").unwrap();
        profile.dinner_time = parse_time_of_day("22:15").unwrap();
        let advice = meal_timing_advice(&profile);
        assert_eq!(advice.len(), 3);
        assert!(advice[0].starts_with("Try to eat breakfast"));
        assert!(advice[1].starts_with("The gap between lunch and dinner"));
        assert!(advice[2].starts_with("Try to have dinner"));
    }

    #[test]
    fn test_meal_timing_dinner_threshold_is_21() {
        let mut profile = sample_profile();
        profile.lunch_time = parse_time_of_day("15:00").unwrap();
        profile.dinner_time = parse_time_of_day("21:45").unwrap();
        assert!(meal_timing_advice(&profile).is_empty());
        profile.dinner_time = parse_time_of_day("22:00").unwrap();
        assert_eq!(meal_timing_advice(&profile).len(), 1);
    }

    #[test]
    fn test_general_recommendations() {
        let profile = sample_profile();
        let recs = general_recommendations(&profile, &compute_metrics(&profile));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].starts_with("Great!"));
    }
}
