//! Narrative health insights
//!
//! Turns metrics into the sentences shown under "Health insights" and the
//! single-line verdicts for calories, hydration and sleep.

use crate::health_metrics::{round_to, Metrics};
use crate::profile::{FoodTag, Gender, Profile};
use serde::{Deserialize, Serialize};

/// Calories in one pound of body fat
pub const KCAL_PER_POUND: f64 = 3500.0;

/// Narrative insights derived from caloric balance, metabolism, sleep and water
pub fn health_insights(profile: &Profile, metrics: &Metrics) -> Vec<String> {
    let mut insights = Vec::new();

    let weekly_balance = (metrics.calorie_intake_estimate - metrics.tdee) * 7.0;
    if weekly_balance > KCAL_PER_POUND {
        insights.push(format!(
            "You're consuming approximately {} extra calories per week, which could lead to gaining about {:.1} pounds per week.",
            weekly_balance.round(),
            weekly_balance / KCAL_PER_POUND
        ));
    } else if weekly_balance < -KCAL_PER_POUND {
        insights.push(format!(
            "You have a calorie deficit of approximately {} calories per week, which could lead to losing about {:.1} pounds per week.",
            weekly_balance.abs().round(),
            weekly_balance.abs() / KCAL_PER_POUND
        ));
    }

    if profile.age > 30 {
        match profile.gender {
            Gender::Female => insights.push(
                "Women typically lose 3-8% of muscle mass per decade after 30. Strength training is crucial for maintaining metabolism.".to_string(),
            ),
            Gender::Male => insights.push(
                "Men typically experience a 1% decline in testosterone per year after 30. Regular exercise can help maintain hormonal balance.".to_string(),
            ),
        }
    }

    if metrics.sleep_duration_hours < 7.0 {
        insights.push(
            "Insufficient sleep can reduce metabolism by up to 20% and increase hunger hormones, making weight management more difficult.".to_string(),
        );
    }

    if profile.water_intake_l < metrics.water_target_l {
        insights.push(format!(
            "Based on your weight, you should drink approximately {:.1}L of water daily (currently {}L).",
            metrics.water_target_l, profile.water_intake_l
        ));
    }

    insights
}

/// Weekly energy balance verdict
pub fn calorie_status(metrics: &Metrics) -> String {
    let needed_weekly = round_to((metrics.tdee - metrics.calorie_intake_estimate) * 7.0, 2);
    if needed_weekly > 0.0 {
        format!(
            "You need to consume {:.2} calories/week more to meet your weekly energy needs.",
            needed_weekly
        )
    } else if needed_weekly < 0.0 {
        format!(
            "You are consuming {:.2} calories/week more than your weekly energy needs. These excess calories will be stored as fat.",
            needed_weekly.abs()
        )
    } else {
        "Your calorie intake matches your weekly energy needs. You are in balance.".to_string()
    }
}

/// Hydration relative to the weight-based target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationStatus {
    Low,
    Balanced,
    Excessive,
}

impl HydrationStatus {
    pub fn message(&self) -> &'static str {
        match self {
            HydrationStatus::Low => "You're drinking too little water! Increase your intake.",
            HydrationStatus::Balanced => "Good job! Your hydration level is balanced.",
            HydrationStatus::Excessive => "Too much water can cause issues! Reduce your intake.",
        }
    }
}

/// Below 80% of target is low, above 150% is excessive
pub fn hydration_status(profile: &Profile, metrics: &Metrics) -> HydrationStatus {
    if profile.water_intake_l < metrics.water_target_l * 0.8 {
        HydrationStatus::Low
    } else if profile.water_intake_l > metrics.water_target_l * 1.5 {
        HydrationStatus::Excessive
    } else {
        HydrationStatus::Balanced
    }
}

/// Sleep schedule verdict
pub fn sleep_advice(metrics: &Metrics) -> &'static str {
    if metrics.sleep_duration_hours < 7.0 {
        "You should try to sleep at least 7-9 hours for optimal health."
    } else {
        "Great! You're getting enough sleep."
    }
}

/// How to regain strength; the same for everyone
pub const STRENGTH_RECOVERY_ADVICE: &str = "Eat protein-rich foods (meat, eggs, lentils) and stay hydrated. The right mix depends on your diet.";

/// Diet advice and risk note for one selected food group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodNote {
    pub food: FoodTag,
    pub advice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
}

fn food_note_text(food: FoodTag) -> (&'static str, Option<&'static str>) {
    match food {
        FoodTag::Rice => (
            "Rice: Opt for brown rice or whole grains for more fiber and nutrients",
            Some("Rice: High glycemic index (white rice), may lead to blood sugar spikes if consumed in excess"),
        ),
        FoodTag::Meat => (
            "Meat: High in saturated fat. Choose lean cuts for protein without excess fat",
            Some("Meat: High consumption may increase cardiovascular risk"),
        ),
        FoodTag::Flour => (
            "Flour items: Whole-grain options improve fiber content",
            Some("Flour items: Refined flour can lead to blood sugar spikes"),
        ),
        FoodTag::Fastfood => (
            "Fast food is high in unhealthy fats. Reduce intake and eat more whole foods",
            Some("Fast food: Increased risk of obesity and heart disease"),
        ),
        FoodTag::Fried => (
            "Fried items: Minimize intake to reduce trans fat consumption",
            Some("Fried items: Increased risk of heart disease due to unhealthy fats"),
        ),
        FoodTag::Fruits => (
            "Fruits: Vitamins A, K and C, potassium and soluble fiber",
            None,
        ),
        FoodTag::Vegetables => (
            "Vegetables: Leafy greens like lettuce add iron; good to eat often",
            None,
        ),
        FoodTag::Nuts => (
            "Nuts & millets: Vitamin B6, vitamin E, healthy fats and zinc",
            Some("Nuts & millets: Calorie dense, avoid eating in excess"),
        ),
        FoodTag::Sugary => (
            "Sugary food: Limit intake. Use natural sweeteners like honey or fruits in moderation",
            Some("Sugary food: High in empty calories, linked to obesity, diabetes and tooth decay"),
        ),
        FoodTag::Seafood => (
            "Seafood: Vitamin B12 and omega-3 fatty acids",
            Some("Seafood: Avoid oil-fried preparations"),
        ),
        FoodTag::Dairy => (
            "Milk: Provides calcium and vitamin D for strong bones",
            Some("Milk: Risk of discomfort for those with lactose intolerance"),
        ),
        FoodTag::Alcohol => (
            "Alcohol: Limit consumption. Mostly not recommended",
            Some("Alcohol: High in empty calories, linked to liver disease and addiction"),
        ),
        FoodTag::Processed => (
            "Processed food: Limit intake. Mostly not recommended",
            Some("Processed food: High sodium content, artificial preservatives, low nutrients"),
        ),
        FoodTag::SoftDrinks => (
            "Soft drinks: High sugar content and empty calories. Try electrolytes instead",
            Some("Soft drinks: Weight gain, obesity and type 2 diabetes if consumed often"),
        ),
        FoodTag::Caffeine => (
            "Caffeinated drinks: Limit to 1-2 cups per day. Avoid late in the day",
            Some("Caffeinated drinks: May cause insomnia, anxiety, or increased heart rate"),
        ),
    }
}

/// Per-food advice and risk notes, in food declaration order
pub fn food_notes(profile: &Profile) -> Vec<FoodNote> {
    profile
        .food_choices
        .iter()
        .map(|&food| {
            let (advice, risk) = food_note_text(food);
            FoodNote {
                food,
                advice: advice.to_string(),
                risk: risk.map(str::to_string),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_metrics::compute_metrics;
    use crate::profile::{parse_time_of_day, sample_profile};

    #[test]
    fn test_insights_for_sample_profile() {
        // 30 years old: no age note; 8h sleep; 2.5L >= 1.98L target
        let profile = sample_profile();
        let metrics = compute_metrics(&profile);
        let insights = health_insights(&profile, &metrics);
        // intake 85 kcal vs TDEE ~2145 -> large weekly deficit
        assert_eq!(insights.len(), 1);
        assert!(insights[0].starts_with("You have a calorie deficit"));
    }

    #[test]
    fn test_insights_age_sleep_and_water() {
        let mut profile = sample_profile();
        profile.age = 45;
        profile.water_intake_l = 1.0;
        profile.wake_time = parse_time_of_day("05:00").unwrap();
        let metrics = compute_metrics(&profile);
        let insights = health_insights(&profile, &metrics);
        assert!(insights.iter().any(|i| i.starts_with("Women typically lose")));
        assert!(insights.iter().any(|i| i.starts_with("Insufficient sleep")));
        assert!(insights
            .iter()
            .any(|i| i.contains("approximately 2.0L of water daily (currently 1L)")));
    }

    #[test]
    fn test_surplus_insight() {
        let mut profile = sample_profile();
        profile.food_choices = FoodTag::ALL.into_iter().collect();
        profile.activity_level = crate::profile::ActivityLevel::Sedentary;
        let metrics = compute_metrics(&profile);
        // 3702 kcal intake vs ~1660 TDEE
        let insights = health_insights(&profile, &metrics);
        assert!(insights[0].starts_with("You're consuming approximately"));
    }

    #[test]
    fn test_calorie_status_deficit() {
        let profile = sample_profile();
        let metrics = compute_metrics(&profile);
        assert!(calorie_status(&metrics).starts_with("You need to consume"));
    }

    #[test]
    fn test_hydration_status_bands() {
        let mut profile = sample_profile();
        let metrics = compute_metrics(&profile); // target 1.98L
        profile.water_intake_l = 1.0;
        assert_eq!(hydration_status(&profile, &metrics), HydrationStatus::Low);
        profile.water_intake_l = 2.0;
        assert_eq!(hydration_status(&profile, &metrics), HydrationStatus::Balanced);
        profile.water_intake_l = 3.5;
        assert_eq!(hydration_status(&profile, &metrics), HydrationStatus::Excessive);
    }

    #[test]
    fn test_sleep_advice() {
        let profile = sample_profile();
        let mut metrics = compute_metrics(&profile);
        assert_eq!(sleep_advice(&metrics), "Great! You're getting enough sleep.");
        metrics.sleep_duration_hours = 6.5;
        assert!(sleep_advice(&metrics).contains("7-9 hours"));
    }

    #[test]
    fn test_food_notes_follow_declaration_order() {
        let mut profile = sample_profile();
        profile.food_choices = [FoodTag::Caffeine, FoodTag::Rice, FoodTag::Fruits]
            .into_iter()
            .collect();
        let notes = food_notes(&profile);
        let foods: Vec<FoodTag> = notes.iter().map(|n| n.food).collect();
        assert_eq!(foods, vec![FoodTag::Rice, FoodTag::Fruits, FoodTag::Caffeine]);
        assert!(notes[1].risk.is_none());
        assert!(notes[2].risk.as_deref().unwrap().contains("insomnia"));
    }
}
