//! Symptom classifier
//!
//! Routes a free-text chat query to exactly one [`AdviceCategory`]. The
//! routing table is an ordered list of keyword predicates over the
//! lower-cased query; the first predicate that matches wins, so a query that
//! mentions both "stomach" and "tired" is a stomach question.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Advice categories, one per rendering template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceCategory {
    Stomach,
    Fatigue,
    Sleep,
    Headache,
    Fever,
    JointPain,
    ThroatPain,
    Breathing,
    Heart,
    Dizziness,
    FoodPassion,
    ThankYou,
    Skin,
    Unclassified,
}

impl AdviceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceCategory::Stomach => "stomach",
            AdviceCategory::Fatigue => "fatigue",
            AdviceCategory::Sleep => "sleep",
            AdviceCategory::Headache => "headache",
            AdviceCategory::Fever => "fever",
            AdviceCategory::JointPain => "joint_pain",
            AdviceCategory::ThroatPain => "throat_pain",
            AdviceCategory::Breathing => "breathing",
            AdviceCategory::Heart => "heart",
            AdviceCategory::Dizziness => "dizziness",
            AdviceCategory::FoodPassion => "food_passion",
            AdviceCategory::ThankYou => "thank_you",
            AdviceCategory::Skin => "skin",
            AdviceCategory::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for AdviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Keyword predicates
// ============================================================================

fn contains_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}

fn is_stomach(text: &str) -> bool {
    contains_any(
        text,
        &[
            "stomach",
            "abdominal",
            "digest",
            "bloat",
            "nausea",
            "heartburn",
            "gastric",
            "indigestion",
            "constipation",
            "diarrhea",
            "vomit",
            "acid reflux",
            "ulcer",
            "loose motion",
        ],
    )
}

fn is_fatigue(text: &str) -> bool {
    contains_any(
        text,
        &[
            "tired", "fatigue", "energy", "exhaust", "drowsy", "letharg", "weak", "sluggish",
            "burnout", "sleepy",
        ],
    )
}

fn is_sleep(text: &str) -> bool {
    contains_any(
        text,
        &["sleep", "insomnia", "restless", "wake up", "can't sleep", "nightmare"],
    )
}

fn is_headache(text: &str) -> bool {
    contains_any(
        text,
        &[
            "headache",
            "migraine",
            "head pain",
            "head ache",
            "head pound",
            "temple pain",
            "sinus pain",
            "pressure in head",
            "throbbing head",
            "pain in skull",
        ],
    )
}

fn is_fever(text: &str) -> bool {
    // "hot" alone is too common; it only counts next to "body"
    (text.contains("hot") && text.contains("body"))
        || contains_any(
            text,
            &[
                "fever",
                "high temperature",
                "febrile",
                "chills",
                "temperature",
                "sweating",
                "shivering",
                "body heat",
                "feverish",
            ],
        )
}

fn is_joint_pain(text: &str) -> bool {
    // generic pain words defer to the throat and heart routes further down
    let generic_pain = contains_any(text, &["pain", "ache", "sore"])
        && !text.contains("throat")
        && !text.contains("chest");
    generic_pain
        || contains_any(
            text,
            &[
                "joint",
                "muscle",
                "backache",
                "back pain",
                "arthritis",
                "stiff",
                "cramp",
                "sprain",
                "tendon",
                "bone pain",
                "knee",
            ],
        )
}

fn is_throat_pain(text: &str) -> bool {
    contains_any(
        text,
        &["throat", "tonsil", "swallow", "hoarse", "laryn", "pharyn", "strep"],
    )
}

fn is_breathing(text: &str) -> bool {
    (text.contains("cough") && !text.contains("head"))
        || contains_any(text, &["breath", "wheez", "asthma"])
}

fn is_heart(text: &str) -> bool {
    contains_any(
        text,
        &["heart", "chest pain", "chest tight", "palpitation", "blood pressure"],
    )
}

fn is_dizziness(text: &str) -> bool {
    contains_any(
        text,
        &["dizz", "vertigo", "lightheaded", "light-headed", "spinning", "faint"],
    )
}

fn is_food_passion(text: &str) -> bool {
    contains_any(
        text,
        &[
            "food", "diet", "nutrition", "recipe", "meal", "cook", "snack", "appetite", "hungry",
        ],
    )
}

fn is_thank_you(text: &str) -> bool {
    contains_any(
        text,
        &[
            "thank",
            "bye",
            "see you",
            "appreciate",
            "grateful",
            "cheers",
            "take care",
            "good",
            "great",
            "helpful",
            "okay",
        ],
    )
}

fn is_skin(text: &str) -> bool {
    contains_any(
        text,
        &[
            "skin", "rash", "itch", "hives", "eczema", "acne", "dermat", "pimple", "redness",
        ],
    )
}

type Predicate = fn(&str) -> bool;

/// Routing table, evaluated top-down
pub const ROUTING_TABLE: [(AdviceCategory, Predicate); 13] = [
    (AdviceCategory::Stomach, is_stomach),
    (AdviceCategory::Fatigue, is_fatigue),
    (AdviceCategory::Sleep, is_sleep),
    (AdviceCategory::Headache, is_headache),
    (AdviceCategory::Fever, is_fever),
    (AdviceCategory::JointPain, is_joint_pain),
    (AdviceCategory::ThroatPain, is_throat_pain),
    (AdviceCategory::Breathing, is_breathing),
    (AdviceCategory::Heart, is_heart),
    (AdviceCategory::Dizziness, is_dizziness),
    (AdviceCategory::FoodPassion, is_food_passion),
    (AdviceCategory::ThankYou, is_thank_you),
    (AdviceCategory::Skin, is_skin),
];

/// Classify a chat query; never fails, defaulting to `Unclassified`
///
/// Routing looks only at the query text. The profile first matters when the
/// chosen category is rendered, so it is passed to [`crate::render_advice`]
/// instead of here.
pub fn classify(query: &str) -> AdviceCategory {
    let lower = query.to_lowercase();
    ROUTING_TABLE
        .iter()
        .find(|(_, matches)| matches(&lower))
        .map(|(category, _)| *category)
        .unwrap_or(AdviceCategory::Unclassified)
}
