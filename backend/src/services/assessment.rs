//! Assessment service - validates the form and runs the metrics engine

use crate::error::ApiError;
use health_assessment_shared::{assess, validate_profile, AssessmentReport, Profile, ProfileInput};
use tracing::{debug, info};

/// Assessment service
pub struct AssessmentService;

impl AssessmentService {
    /// Validate a submitted form, reporting every failing field
    pub fn profile_from_input(input: &ProfileInput) -> Result<Profile, ApiError> {
        validate_profile(input).map_err(|errors| {
            debug!(fields = errors.len(), "Profile validation failed");
            ApiError::Validation(errors)
        })
    }

    /// Validate and produce the full report
    pub fn assess(input: &ProfileInput) -> Result<AssessmentReport, ApiError> {
        let profile = Self::profile_from_input(input)?;
        let report = assess(&profile);

        info!(
            health_score = report.metrics.health_score,
            bmi_category = ?report.metrics.bmi_category,
            insights = report.insights.len(),
            "Assessment computed"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let err = AssessmentService::assess(&ProfileInput::default()).unwrap_err();
        match err {
            ApiError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert!(fields.contains(&"name"));
                assert!(fields.contains(&"age"));
                assert!(fields.contains(&"activityLevel"));
                assert!(fields.contains(&"waterIntake"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn input(age: u32, weight: f64, height: f64, activity: f64, water: f64) -> ProfileInput {
            ProfileInput {
                name: "Asha".to_string(),
                age: Some(age as f64),
                weight: Some(weight),
                height: Some(height),
                gender: Some("female".to_string()),
                activity_level: Some(activity),
                water_intake: Some(water),
                bedtime: Some("23:00".to_string()),
                wake_time: Some("07:00".to_string()),
                breakfast_time: Some("08:00".to_string()),
                lunch_time: Some("13:00".to_string()),
                dinner_time: Some("19:30".to_string()),
                food_choices: vec!["vegetables".to_string(), "nuts".to_string()],
            }
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn valid_forms_always_assess(
                age in 1u32..=100,
                weight in 10.0f64..=250.0,
                height in 20.0f64..=250.0,
                activity in prop::sample::select(vec![1.2, 1.375, 1.55, 1.725, 1.9]),
                water in 0.1f64..10.0,
            ) {
                let report = AssessmentService::assess(&input(age, weight, height, activity, water));
                prop_assert!(report.is_ok());
                let report = report.unwrap();
                prop_assert!(report.metrics.health_score <= 100);
                prop_assert_eq!(report.metrics.sleep_duration_hours, 8.0);
            }

            #[test]
            fn out_of_range_age_is_rejected(age in 101u32..1000) {
                let result = AssessmentService::assess(&input(age, 70.0, 170.0, 1.2, 2.0));
                prop_assert!(matches!(result, Err(ApiError::Validation(ref errors)) if errors.len() == 1));
            }
        }
    }
}
