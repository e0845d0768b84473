//! Input validation functions
//!
//! Every form field is checked independently so the caller can show all
//! problems at once. A [`Profile`] only exists once every field passed.

use crate::profile::{parse_time_of_day, ActivityLevel, FoodTag, Gender, Profile};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw assessment form, as submitted by the browser
///
/// Everything is optional here; [`validate_profile`] decides what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    pub name: String,
    pub age: Option<f64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub gender: Option<String>,
    pub activity_level: Option<f64>,
    pub water_intake: Option<f64>,
    pub bedtime: Option<String>,
    pub wake_time: Option<String>,
    pub breakfast_time: Option<String>,
    pub lunch_time: Option<String>,
    pub dinner_time: Option<String>,
    pub food_choices: Vec<String>,
}

/// Validate the name field
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    if name.len() > 100 {
        return Err("Name is too long".to_string());
    }
    Ok(())
}

/// Validate age (whole years, 1-100)
pub fn validate_age(age: Option<f64>) -> Result<u32, String> {
    let age = age.ok_or_else(|| "Age is required".to_string())?;
    if !age.is_finite() || age.fract() != 0.0 {
        return Err("Age must be a whole number".to_string());
    }
    if !(1.0..=100.0).contains(&age) {
        return Err("Age must be between 1 and 100".to_string());
    }
    Ok(age as u32)
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: Option<f64>) -> Result<f64, String> {
    let weight_kg = weight_kg.ok_or_else(|| "Weight is required".to_string())?;
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if !(10.0..=250.0).contains(&weight_kg) {
        return Err("Weight must be between 10 and 250 kg".to_string());
    }
    Ok(weight_kg)
}

/// Validate height value (in cm)
pub fn validate_height(height_cm: Option<f64>) -> Result<f64, String> {
    let height_cm = height_cm.ok_or_else(|| "Height is required".to_string())?;
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if !(20.0..=250.0).contains(&height_cm) {
        return Err("Height must be between 20 and 250 cm".to_string());
    }
    Ok(height_cm)
}

/// Validate gender
pub fn validate_gender(gender: Option<&str>) -> Result<Gender, String> {
    match gender.map(str::trim) {
        None | Some("") => Err("Gender is required".to_string()),
        Some(value) => value
            .parse()
            .map_err(|_| "Gender must be one of: male, female".to_string()),
    }
}

/// Validate activity level against the closed set of multipliers
pub fn validate_activity_level(multiplier: Option<f64>) -> Result<ActivityLevel, String> {
    let multiplier = multiplier.ok_or_else(|| "Activity level is required".to_string())?;
    ActivityLevel::from_multiplier(multiplier).ok_or_else(|| {
        let allowed: Vec<String> = ActivityLevel::ALL
            .iter()
            .map(|level| level.multiplier().to_string())
            .collect();
        format!("Activity level must be one of: {}", allowed.join(", "))
    })
}

/// Validate daily water intake (liters)
pub fn validate_water_intake(liters: Option<f64>) -> Result<f64, String> {
    match liters {
        Some(l) if l.is_finite() && l > 0.0 => Ok(l),
        _ => Err("Water intake must be a positive number".to_string()),
    }
}

/// Validate a required `HH:MM` field
pub fn validate_time(value: Option<&str>, what: &str) -> Result<NaiveTime, String> {
    match value.map(str::trim) {
        None | Some("") => Err(format!("{} is required", what)),
        Some(raw) => parse_time_of_day(raw),
    }
}

/// Validate the selected food groups
pub fn validate_food_choices(choices: &[String]) -> Result<BTreeSet<FoodTag>, String> {
    choices.iter().map(|choice| choice.parse::<FoodTag>()).collect()
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map form field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Name",
        "age" => "Age",
        "weight" => "Weight",
        "height" => "Height",
        "gender" => "Gender",
        "activityLevel" => "Activity Level",
        "waterIntake" => "Water Intake",
        "bedtime" => "Bedtime",
        "wakeTime" => "Wake-up Time",
        "breakfastTime" => "Breakfast Time",
        "lunchTime" => "Lunch Time",
        "dinnerTime" => "Dinner Time",
        "foodChoices" => "Food Choices",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Collects per-field failures while keeping the successful values
struct FieldChecker {
    errors: Vec<ValidationError>,
}

impl FieldChecker {
    fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.errors.push(ValidationError::new(field, &message));
                None
            }
        }
    }
}

/// Validate the whole form and build a [`Profile`]
///
/// All failing fields are reported, in form order.
pub fn validate_profile(input: &ProfileInput) -> Result<Profile, Vec<ValidationError>> {
    let mut checker = FieldChecker { errors: Vec::new() };

    let name = checker.check("name", validate_name(&input.name));
    let age = checker.check("age", validate_age(input.age));
    let weight_kg = checker.check("weight", validate_weight(input.weight));
    let height_cm = checker.check("height", validate_height(input.height));
    let gender = checker.check("gender", validate_gender(input.gender.as_deref()));
    let breakfast_time = checker.check(
        "breakfastTime",
        validate_time(input.breakfast_time.as_deref(), "Breakfast time"),
    );
    let lunch_time = checker.check(
        "lunchTime",
        validate_time(input.lunch_time.as_deref(), "Lunch time"),
    );
    let dinner_time = checker.check(
        "dinnerTime",
        validate_time(input.dinner_time.as_deref(), "Dinner time"),
    );
    let activity_level = checker.check(
        "activityLevel",
        validate_activity_level(input.activity_level),
    );
    let food_choices = checker.check("foodChoices", validate_food_choices(&input.food_choices));
    let bedtime = checker.check("bedtime", validate_time(input.bedtime.as_deref(), "Bedtime"));
    let wake_time = checker.check(
        "wakeTime",
        validate_time(input.wake_time.as_deref(), "Wake-up time"),
    );
    let water_intake_l = checker.check("waterIntake", validate_water_intake(input.water_intake));

    if !checker.errors.is_empty() {
        return Err(checker.errors);
    }

    match (
        name,
        age,
        gender,
        weight_kg,
        height_cm,
        activity_level,
        water_intake_l,
        bedtime,
        wake_time,
        breakfast_time,
        lunch_time,
        dinner_time,
        food_choices,
    ) {
        (
            Some(()),
            Some(age),
            Some(gender),
            Some(weight_kg),
            Some(height_cm),
            Some(activity_level),
            Some(water_intake_l),
            Some(bedtime),
            Some(wake_time),
            Some(breakfast_time),
            Some(lunch_time),
            Some(dinner_time),
            Some(food_choices),
        ) => Ok(Profile {
            name: input.name.trim().to_string(),
            age,
            gender,
            weight_kg,
            height_cm,
            activity_level,
            water_intake_l,
            bedtime,
            wake_time,
            breakfast_time,
            lunch_time,
            dinner_time,
            food_choices,
        }),
        // Every None pushed an error above
        _ => Err(checker.errors),
    }
}

#[cfg(test)]
pub(crate) fn sample_input() -> ProfileInput {
    ProfileInput {
        name: "Ravi".to_string(),
        age: Some(35.0),
        weight: Some(80.0),
        height: Some(180.0),
        gender: Some("male".to_string()),
        activity_level: Some(1.55),
        water_intake: Some(2.0),
        bedtime: Some("23:00".to_string()),
        wake_time: Some("07:00".to_string()),
        breakfast_time: Some("08:00".to_string()),
        lunch_time: Some("13:00".to_string()),
        dinner_time: Some("20:00".to_string()),
        food_choices: vec!["rice".to_string(), "fruits".to_string()],
    }
}
