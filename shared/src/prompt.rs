//! Chat prompt and greeting text

use crate::health_metrics::{calculate_bmi, calculate_sleep_duration, round_to};
use crate::profile::Profile;
use crate::types::{ChatRole, ChatTurn};

/// Assistant persona name used in prompts and the greeting
pub const ASSISTANT_NAME: &str = "Saara";

/// A generated reply containing this marker is treated as a refusal
pub const REFUSAL_MARKER: &str = "SORRY";

/// Only the most recent turns are replayed to the generator
pub const HISTORY_TURNS: usize = 2;

/// Each replayed turn is cut to this many characters
pub const HISTORY_TURN_CHARS: usize = 100;

/// Opening chat message for a freshly assessed user
pub fn greeting(profile: &Profile) -> String {
    format!(
        "Hello {}! I'm {}, your AI health assistant. I've reviewed your health profile and I'm here to help answer any questions about your health, symptoms, or the analysis results. What would you like to know?",
        profile.name, ASSISTANT_NAME
    )
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

fn history_context(history: &[ChatTurn]) -> String {
    let start = history.len().saturating_sub(HISTORY_TURNS);
    history[start..]
        .iter()
        .map(|turn| {
            let speaker = match turn.role {
                ChatRole::User => "User",
                ChatRole::Assistant => ASSISTANT_NAME,
            };
            format!("{}: {}", speaker, truncate_chars(&turn.text, HISTORY_TURN_CHARS))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the generator prompt for one chat query
pub fn build_prompt(profile: &Profile, query: &str, history: &[ChatTurn]) -> String {
    let bmi = round_to(calculate_bmi(profile.weight_kg, profile.height_cm), 2);
    let sleep = calculate_sleep_duration(profile.bedtime, profile.wake_time);
    let diet = if profile.food_choices.is_empty() {
        "Not specified".to_string()
    } else {
        profile
            .food_choices
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut prompt = format!(
        "You are {assistant}, a friendly and empathetic AI health assistant having a conversation with {name}.\n\
         \n\
         Health profile:\n\
         - Name: {name}, Age: {age}, Gender: {gender}\n\
         - BMI: {bmi}, Weight: {weight}kg, Height: {height}cm\n\
         - Sleep: {sleep} hours, Water: {water}L/day\n\
         - Activity: {activity} ({multiplier}), Diet: {diet}\n",
        assistant = ASSISTANT_NAME,
        name = profile.name,
        age = profile.age,
        gender = profile.gender,
        bmi = bmi,
        weight = profile.weight_kg,
        height = profile.height_cm,
        sleep = sleep,
        water = profile.water_intake_l,
        activity = profile.activity_level.description(),
        multiplier = profile.activity_level.multiplier(),
        diet = diet,
    );

    if !history.is_empty() {
        prompt.push_str("\nRecent conversation:\n");
        prompt.push_str(&history_context(history));
        prompt.push('\n');
    }

    prompt.push_str(&format!(
        "\nNew question: \"{}\"\n\
         \n\
         Respond naturally and specifically to their situation, use their name, and give actionable advice. \
         Keep it under 150 words.\n\
         \n\
         Important: remind them that you are an AI assistant, not a medical diagnosis, and suggest seeing a healthcare provider for serious concerns.",
        query.trim()
    ));

    prompt
}
