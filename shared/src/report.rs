//! Full assessment report
//!
//! Bundles every result the results view shows for one profile.

use crate::health_metrics::{compute_metrics, Metrics};
use crate::insights::{
    calorie_status, food_notes, health_insights, hydration_status, sleep_advice, FoodNote,
    HydrationStatus, STRENGTH_RECOVERY_ADVICE,
};
use crate::profile::Profile;
use crate::recommendations::{
    build_recommendations, general_recommendations, meal_timing_advice, Recommendations,
};
use serde::{Deserialize, Serialize};

/// Hydration verdict with its display message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationVerdict {
    pub status: HydrationStatus,
    pub message: String,
}

/// Everything derived from one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub profile: Profile,
    pub metrics: Metrics,
    pub recommendations: Recommendations,
    pub general_recommendations: Vec<String>,
    pub meal_timing: Vec<String>,
    pub insights: Vec<String>,
    pub food_notes: Vec<FoodNote>,
    pub calorie_status: String,
    pub hydration: HydrationVerdict,
    pub sleep_advice: String,
    pub strength_advice: String,
}

/// Run both halves of the metrics engine over a validated profile
pub fn assess(profile: &Profile) -> AssessmentReport {
    let metrics = compute_metrics(profile);
    let hydration = hydration_status(profile, &metrics);

    AssessmentReport {
        recommendations: build_recommendations(profile, &metrics),
        general_recommendations: general_recommendations(profile, &metrics),
        meal_timing: meal_timing_advice(profile),
        insights: health_insights(profile, &metrics),
        food_notes: food_notes(profile),
        calorie_status: calorie_status(&metrics),
        hydration: HydrationVerdict {
            status: hydration,
            message: hydration.message().to_string(),
        },
        sleep_advice: sleep_advice(&metrics).to_string(),
        strength_advice: STRENGTH_RECOVERY_ADVICE.to_string(),
        profile: profile.clone(),
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::sample_profile;

    #[test]
    fn test_assess_sample_profile() {
        let report = assess(&sample_profile());
        assert_eq!(report.metrics.health_score, 100);
        assert_eq!(report.hydration.status, HydrationStatus::Balanced);
        assert_eq!(report.food_notes.len(), 2);
        assert!(report.meal_timing.is_empty());
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(assess(&sample_profile())).unwrap();
        assert!(json.get("generalRecommendations").is_some());
        assert!(json["metrics"].get("healthScore").is_some());
        assert_eq!(json["profile"]["bedtime"], "23:00");
        assert_eq!(json["hydration"]["status"], "balanced");
    }
}
