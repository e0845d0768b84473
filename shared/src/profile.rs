//! Assessment profile types
//!
//! A [`Profile`] is the validated, immutable record both engines work from.
//! It is only produced by [`crate::validation::validate_profile`], which
//! turns the raw form input into strongly typed values.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// Gender
// ============================================================================

/// Gender used for the metabolic rate formula and insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level, a closed set of TDEE multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Map a submitted multiplier back onto the closed set
    ///
    /// Returns `None` for anything that is not one of the five multipliers.
    pub fn from_multiplier(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.multiplier() - value).abs() < 1e-9)
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Lightly Active (light exercise 1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderately Active (moderate exercise 3-5 days/week)",
            ActivityLevel::VeryActive => "Very Active (hard exercise 6-7 days/week)",
            ActivityLevel::ExtraActive => "Extra Active (very hard exercise or physical job)",
        }
    }
}

// ============================================================================
// Food Tags
// ============================================================================

/// Food groups a user can tick on the assessment form
///
/// Declaration order is the order used for every per-food listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FoodTag {
    Rice,
    Meat,
    Flour,
    Fastfood,
    Fried,
    Fruits,
    Vegetables,
    Nuts,
    Sugary,
    Seafood,
    Dairy,
    Alcohol,
    Processed,
    SoftDrinks,
    Caffeine,
}

impl FoodTag {
    pub const ALL: [FoodTag; 15] = [
        FoodTag::Rice,
        FoodTag::Meat,
        FoodTag::Flour,
        FoodTag::Fastfood,
        FoodTag::Fried,
        FoodTag::Fruits,
        FoodTag::Vegetables,
        FoodTag::Nuts,
        FoodTag::Sugary,
        FoodTag::Seafood,
        FoodTag::Dairy,
        FoodTag::Alcohol,
        FoodTag::Processed,
        FoodTag::SoftDrinks,
        FoodTag::Caffeine,
    ];

    /// Tags that cost health-score points
    pub const UNHEALTHY: [FoodTag; 5] = [
        FoodTag::Fastfood,
        FoodTag::Fried,
        FoodTag::Processed,
        FoodTag::Sugary,
        FoodTag::SoftDrinks,
    ];

    /// Tags that earn health-score points
    pub const HEALTHY: [FoodTag; 3] = [FoodTag::Fruits, FoodTag::Vegetables, FoodTag::Nuts];

    /// Canonical calories per serving (kcal)
    pub fn calories(&self) -> f64 {
        match self {
            FoodTag::Rice => 130.0,
            FoodTag::Meat => 250.0,
            FoodTag::Flour => 364.0,
            FoodTag::Fastfood => 540.0,
            FoodTag::Fried => 365.0,
            FoodTag::Fruits => 60.0,
            FoodTag::Vegetables => 25.0,
            FoodTag::Nuts => 553.0,
            FoodTag::Sugary => 387.0,
            FoodTag::Seafood => 206.0,
            FoodTag::Dairy => 150.0,
            FoodTag::Alcohol => 231.0,
            FoodTag::Processed => 300.0,
            FoodTag::SoftDrinks => 139.0,
            FoodTag::Caffeine => 2.0,
        }
    }

    pub fn is_unhealthy(&self) -> bool {
        Self::UNHEALTHY.contains(self)
    }

    pub fn is_healthy(&self) -> bool {
        Self::HEALTHY.contains(self)
    }

    /// Wire name, as submitted by the form
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodTag::Rice => "rice",
            FoodTag::Meat => "meat",
            FoodTag::Flour => "flour",
            FoodTag::Fastfood => "fastfood",
            FoodTag::Fried => "fried",
            FoodTag::Fruits => "fruits",
            FoodTag::Vegetables => "vegetables",
            FoodTag::Nuts => "nuts",
            FoodTag::Sugary => "sugary",
            FoodTag::Seafood => "seafood",
            FoodTag::Dairy => "dairy",
            FoodTag::Alcohol => "alcohol",
            FoodTag::Processed => "processed",
            FoodTag::SoftDrinks => "softDrinks",
            FoodTag::Caffeine => "caffeine",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            FoodTag::Rice => "Rice (White rice)",
            FoodTag::Meat => "Meat",
            FoodTag::Flour => "Flour Items (Ragi, Aata, etc.)",
            FoodTag::Fastfood => "Fast Food",
            FoodTag::Fried => "Fried Items (Chips, Chicken Fries, etc.)",
            FoodTag::Fruits => "Fruits",
            FoodTag::Vegetables => "Vegetables",
            FoodTag::Nuts => "Nuts & Millets",
            FoodTag::Sugary => "Sugary Foods (Cake, Pastries, Sugar Candy)",
            FoodTag::Seafood => "Seafood",
            FoodTag::Dairy => "Dairy Products (Milk-based)",
            FoodTag::Alcohol => "Alcohol",
            FoodTag::Processed => "Processed Food (Ready to Eat)",
            FoodTag::SoftDrinks => "Soft Drinks",
            FoodTag::Caffeine => "Caffeinated Drinks",
        }
    }
}

impl fmt::Display for FoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FoodTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        FoodTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().to_lowercase() == normalized)
            .ok_or_else(|| format!("Unknown food choice: {}", s))
    }
}

// ============================================================================
// Time of day
// ============================================================================

/// Parse an `HH:MM` (or `HH:MM:SS`) local time-of-day
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, String> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("Invalid time '{}', expected HH:MM", value))
}

/// Minutes elapsed since local midnight
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Serde adapter storing times as `HH:MM`
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time_of_day(&raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Validated assessment profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// Age in years, 1..=100
    pub age: u32,
    pub gender: Gender,
    /// Weight in kilograms, 10..=250
    pub weight_kg: f64,
    /// Height in centimeters, 20..=250
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    /// Daily water intake in liters, > 0
    pub water_intake_l: f64,
    #[serde(with = "hhmm")]
    pub bedtime: NaiveTime,
    #[serde(with = "hhmm")]
    pub wake_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub breakfast_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub lunch_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub dinner_time: NaiveTime,
    #[serde(default)]
    pub food_choices: BTreeSet<FoodTag>,
}

impl Profile {
    /// Whether the given food group was selected
    pub fn eats(&self, tag: FoodTag) -> bool {
        self.food_choices.contains(&tag)
    }

    /// Whether any of the given food groups was selected
    pub fn eats_any(&self, tags: &[FoodTag]) -> bool {
        tags.iter().any(|tag| self.food_choices.contains(tag))
    }
}

#[cfg(test)]
pub(crate) fn sample_profile() -> Profile {
    let t = |s: &str| parse_time_of_day(s).unwrap();
    Profile {
        name: "Asha".to_string(),
        age: 30,
        gender: Gender::Female,
        weight_kg: 60.0,
        height_cm: 165.0,
        activity_level: ActivityLevel::ModeratelyActive,
        water_intake_l: 2.5,
        bedtime: t("23:00"),
        wake_time: t("07:00"),
        breakfast_time: t("08:00"),
        lunch_time: t("13:00"),
        dinner_time: t("19:30"),
        food_choices: [FoodTag::Fruits, FoodTag::Vegetables].into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_from_multiplier() {
        assert_eq!(ActivityLevel::from_multiplier(1.2), Some(ActivityLevel::Sedentary));
        assert_eq!(ActivityLevel::from_multiplier(1.375), Some(ActivityLevel::LightlyActive));
        assert_eq!(ActivityLevel::from_multiplier(1.9), Some(ActivityLevel::ExtraActive));
        assert_eq!(ActivityLevel::from_multiplier(1.5), None);
        assert_eq!(ActivityLevel::from_multiplier(0.0), None);
    }

    #[test]
    fn test_food_tag_parsing() {
        assert_eq!("rice".parse::<FoodTag>().unwrap(), FoodTag::Rice);
        assert_eq!("softDrinks".parse::<FoodTag>().unwrap(), FoodTag::SoftDrinks);
        assert_eq!("soft Drinks".parse::<FoodTag>().unwrap(), FoodTag::SoftDrinks);
        assert_eq!("FASTFOOD".parse::<FoodTag>().unwrap(), FoodTag::Fastfood);
        assert!("pizza".parse::<FoodTag>().is_err());
    }

    #[test]
    fn test_food_tag_serde_names() {
        let json = serde_json::to_string(&FoodTag::SoftDrinks).unwrap();
        assert_eq!(json, "\"softDrinks\"");
        let tag: FoodTag = serde_json::from_str("\"fastfood\"").unwrap();
        assert_eq!(tag, FoodTag::Fastfood);
    }

    #[test]
    fn test_food_tag_health_groups_are_disjoint() {
        for tag in FoodTag::ALL {
            assert!(!(tag.is_healthy() && tag.is_unhealthy()), "{tag} in both groups");
        }
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(minutes_since_midnight(parse_time_of_day("07:30").unwrap()), 450);
        assert_eq!(minutes_since_midnight(parse_time_of_day("00:00").unwrap()), 0);
        assert_eq!(minutes_since_midnight(parse_time_of_day("23:59:00").unwrap()), 1439);
        assert!(parse_time_of_day("25:00").is_err());
        assert!(parse_time_of_day("").is_err());
        assert!(parse_time_of_day("seven").is_err());
    }

    #[test]
    fn test_profile_serializes_times_as_hhmm() {
        let profile = sample_profile();
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["bedtime"], "23:00");
        assert_eq!(value["dinnerTime"], "19:30");
        assert_eq!(value["activityLevel"], "moderately_active");

        let back: Profile = serde_json::from_value(value).unwrap();
        assert_eq!(back, profile);
    }
}
