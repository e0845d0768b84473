//! Advice documents
//!
//! Each [`AdviceCategory`] renders to a structured [`AdviceDocument`]: a
//! fixed list of possible conditions, the contributing factors found in the
//! profile, an action plan and a warning section. The documents carry no
//! markup; [`fmt::Display`] gives a plain-text rendering for chat output.

use crate::classifier::AdviceCategory;
use crate::health_metrics::{calculate_bmi, calculate_sleep_duration, round_to, WATER_LITERS_PER_KG};
use crate::profile::{ActivityLevel, FoodTag, Profile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when no profile factor applies
pub const NO_FACTORS_MESSAGE: &str = "No notable risk factors found in your profile";

/// One titled group of advice lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceSection {
    pub title: String,
    pub items: Vec<String>,
}

impl AdviceSection {
    pub fn new(title: &str, items: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            items,
        }
    }

    fn fixed(title: &str, items: &[&str]) -> Self {
        Self::new(title, items.iter().map(|s| s.to_string()).collect())
    }
}

/// Rendered advice for one chat query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceDocument {
    pub category: AdviceCategory,
    pub title: String,
    pub sections: Vec<AdviceSection>,
}

impl fmt::Display for AdviceDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for section in &self.sections {
            write!(f, "\n\n{}", section.title)?;
            for item in &section.items {
                write!(f, "\n- {}", item)?;
            }
        }
        Ok(())
    }
}

/// Profile-derived values the templates test against
struct ProfileFacts<'a> {
    profile: &'a Profile,
    sleep_hours: f64,
    bmi: f64,
}

impl<'a> ProfileFacts<'a> {
    fn new(profile: &'a Profile) -> Self {
        Self {
            profile,
            sleep_hours: calculate_sleep_duration(profile.bedtime, profile.wake_time),
            bmi: calculate_bmi(profile.weight_kg, profile.height_cm),
        }
    }

    /// BMI as quoted back to the user
    fn bmi_display(&self) -> f64 {
        round_to(self.bmi, 2)
    }

    fn water(&self) -> f64 {
        self.profile.water_intake_l
    }

    fn multiplier(&self) -> f64 {
        self.profile.activity_level.multiplier()
    }

    fn sedentary(&self) -> bool {
        self.multiplier() < ActivityLevel::LightlyActive.multiplier()
    }

    fn intense(&self) -> bool {
        self.multiplier() > ActivityLevel::ModeratelyActive.multiplier()
    }

    fn eats(&self, tag: FoodTag) -> bool {
        self.profile.eats(tag)
    }

    fn eats_any(&self, tags: &[FoodTag]) -> bool {
        self.profile.eats_any(tags)
    }
}

/// Collects triggered factor lines; falls back to [`NO_FACTORS_MESSAGE`]
#[derive(Default)]
struct Factors(Vec<String>);

impl Factors {
    fn when(mut self, condition: bool, line: impl Into<String>) -> Self {
        if condition {
            self.0.push(line.into());
        }
        self
    }

    fn section(self, title: &str) -> AdviceSection {
        let items = if self.0.is_empty() {
            vec![NO_FACTORS_MESSAGE.to_string()]
        } else {
            self.0
        };
        AdviceSection::new(title, items)
    }
}

const UNHEALTHY_FATS: [FoodTag; 3] = [FoodTag::Fried, FoodTag::Fastfood, FoodTag::Processed];

/// Render the advice document for a category
///
/// The query is only consulted by the thank-you and unclassified templates.
pub fn render_advice(category: AdviceCategory, query: &str, profile: &Profile) -> AdviceDocument {
    let facts = ProfileFacts::new(profile);
    let (title, sections) = match category {
        AdviceCategory::Stomach => stomach(&facts),
        AdviceCategory::Fatigue => fatigue(&facts),
        AdviceCategory::Sleep => sleep(&facts),
        AdviceCategory::Headache => headache(&facts),
        AdviceCategory::Fever => fever(),
        AdviceCategory::JointPain => joint_pain(&facts),
        AdviceCategory::ThroatPain => throat_pain(),
        AdviceCategory::Breathing => breathing(&facts),
        AdviceCategory::Heart => heart(&facts),
        AdviceCategory::Dizziness => dizziness(&facts),
        AdviceCategory::FoodPassion => food_passion(&facts),
        AdviceCategory::ThankYou => thank_you(query, profile),
        AdviceCategory::Skin => skin(&facts),
        AdviceCategory::Unclassified => unclassified(query, &facts),
    };

    AdviceDocument {
        category,
        title: title.to_string(),
        sections,
    }
}

type Template = (&'static str, Vec<AdviceSection>);

// ============================================================================
// Digestive and energy
// ============================================================================

fn stomach(facts: &ProfileFacts<'_>) -> Template {
    (
        "Stomach Issues Analysis",
        vec![
            AdviceSection::fixed(
                "Possible conditions based on your symptoms",
                &[
                    "Indigestion/Dyspepsia - Bloating, discomfort after eating",
                    "Gastritis - Burning pain, nausea, feeling full quickly",
                    "GERD - Heartburn, acid regurgitation, chronic cough",
                    "IBS - Abdominal pain with diarrhea/constipation",
                    "Food Intolerance - Bloating, diarrhea after specific foods",
                ],
            ),
            Factors::default()
                .when(facts.eats_any(&UNHEALTHY_FATS), "Diet high in unhealthy fats")
                .when(facts.eats(FoodTag::Dairy), "Possible lactose intolerance")
                .when(
                    facts.water() < 2.0,
                    format!("Low water intake (only {}L)", facts.water()),
                )
                .when(
                    facts.sleep_hours < 6.0,
                    format!("Inadequate sleep (only {} hours)", facts.sleep_hours),
                )
                .section("Contributing factors from your profile"),
            AdviceSection::fixed(
                "Recovery Tips",
                &[
                    "Follow a low-FODMAP diet for 2-4 weeks to identify triggers",
                    "Eat smaller, more frequent meals",
                    "Avoid eating 3 hours before bedtime",
                    "Try peppermint tea or ginger for natural relief",
                    "Practice stress-reduction techniques",
                ],
            ),
            AdviceSection::fixed(
                "Seek immediate medical attention if you experience",
                &[
                    "Severe, persistent abdominal pain",
                    "Blood in vomit or stool",
                    "Unintentional weight loss",
                    "Difficulty swallowing",
                ],
            ),
        ],
    )
}

fn fatigue(facts: &ProfileFacts<'_>) -> Template {
    (
        "Fatigue Analysis",
        vec![
            AdviceSection::fixed(
                "Potential underlying causes",
                &[
                    "Anemia - Pale skin, dizziness, shortness of breath",
                    "Thyroid Disorders - Weight changes, temperature sensitivity",
                    "Sleep Apnea - Loud snoring, waking up gasping",
                    "Depression - Low mood, loss of interest in activities",
                ],
            ),
            Factors::default()
                .when(
                    facts.sleep_hours < 7.0,
                    format!("Inadequate sleep (only {} hours)", facts.sleep_hours),
                )
                .when(facts.sedentary(), "Sedentary lifestyle")
                .when(
                    facts.water() < 2.0,
                    format!("Dehydration (only {}L water)", facts.water()),
                )
                .when(
                    facts.eats(FoodTag::Processed),
                    "Processed foods causing energy crashes",
                )
                .section("Lifestyle factors from your profile"),
            AdviceSection::fixed(
                "Energy Restoration Plan: Morning Routine",
                &[
                    "Hydrate with 500ml water upon waking",
                    "10 min sunlight exposure",
                    "Protein-rich breakfast",
                ],
            ),
            AdviceSection::fixed(
                "Energy Restoration Plan: Daily Habits",
                &[
                    "Take movement breaks every 90 min",
                    "20 min power nap if needed",
                    "Complex carbs + protein snacks",
                ],
            ),
            AdviceSection::fixed(
                "When to see a doctor: fatigue with any of these symptoms requires medical evaluation",
                &[
                    "Unexplained weight changes",
                    "Swollen lymph nodes",
                    "Persistent muscle aches",
                    "Cognitive difficulties",
                ],
            ),
        ],
    )
}

fn sleep(facts: &ProfileFacts<'_>) -> Template {
    (
        "Sleep Health Analysis",
        vec![
            AdviceSection::fixed(
                "Possible sleep disorders",
                &[
                    "Insomnia - Difficulty falling/staying asleep",
                    "Sleep Apnea - Breathing pauses, daytime sleepiness",
                    "Restless Leg Syndrome - Urge to move legs at night",
                    "Circadian Rhythm Disorder - Mismatched sleep-wake cycle",
                ],
            ),
            Factors::default()
                .when(
                    facts.eats(FoodTag::Caffeine),
                    "Caffeine consumption affecting sleep",
                )
                .when(facts.sedentary(), "Insufficient physical activity")
                .when(facts.intense(), "Intense exercise close to bedtime")
                .when(facts.bmi > 30.0, "Higher BMI may affect sleep quality")
                .when(facts.sleep_hours < 5.0, "Try to sleep at least 7-9 hours")
                .section("Sleep influencers from your profile"),
            AdviceSection::fixed(
                "Sleep Optimization Protocol: Pre-Bed Routine (1-2 hours before)",
                &[
                    "Dim lights and avoid screens",
                    "Take warm bath/shower",
                    "Practice relaxation techniques",
                ],
            ),
            AdviceSection::fixed(
                "Sleep Optimization Protocol: Bedroom Environment",
                &[
                    "Keep temperature 18-20°C (65-68°F)",
                    "Use blackout curtains",
                    "Consider white noise machine",
                ],
            ),
        ],
    )
}

// ============================================================================
// Head, fever and pain
// ============================================================================

fn headache(facts: &ProfileFacts<'_>) -> Template {
    (
        "Headache Analysis",
        vec![
            AdviceSection::fixed(
                "Possible headache types",
                &[
                    "Tension Headache - Dull, constant pain on both sides",
                    "Migraine - Throbbing pain, often with nausea/sensitivity",
                    "Cluster Headache - Severe pain around one eye",
                    "Sinus Headache - Pain in forehead/cheekbones",
                    "Caffeine-Withdrawal Headache - From missing usual caffeine",
                ],
            ),
            Factors::default()
                .when(
                    facts.sleep_hours < 6.0,
                    format!("Sleep deprivation (only {} hours)", facts.sleep_hours),
                )
                .when(
                    facts.water() < 2.0,
                    format!("Dehydration (only {}L water)", facts.water()),
                )
                .when(
                    facts.eats(FoodTag::Caffeine),
                    "Caffeine consumption may cause rebound headaches",
                )
                .when(facts.sedentary(), "Sedentary lifestyle contributing to tension")
                .section("Contributing factors from your profile"),
            AdviceSection::fixed(
                "Headache Relief Strategies: Immediate Relief",
                &[
                    "Apply cold/warm compress to forehead/neck",
                    "Massage temples and neck muscles",
                    "Rest in quiet, dark room",
                    "Hydrate with electrolyte solution",
                ],
            ),
            AdviceSection::fixed(
                "Headache Relief Strategies: Prevention",
                &[
                    "Maintain regular sleep schedule",
                    "Practice stress management techniques",
                    "Keep headache diary to identify triggers",
                    "Stay hydrated throughout day",
                ],
            ),
            AdviceSection::fixed(
                "Seek immediate medical attention if",
                &[
                    "Sudden, severe \"thunderclap\" headache",
                    "Headache after head injury",
                    "Accompanied by fever, stiff neck, confusion",
                    "Weakness/numbness or vision/speech changes",
                ],
            ),
        ],
    )
}

fn fever() -> Template {
    (
        "Fever Analysis",
        vec![
            AdviceSection::fixed(
                "Possible causes of fever",
                &[
                    "Viral Infection - Common cold, flu, COVID-19",
                    "Bacterial Infection - Strep throat, UTI, pneumonia",
                    "Inflammatory Condition - Autoimmune disorders",
                    "Heat Exhaustion - From overexertion in heat",
                    "Vaccine Reaction - Temporary immune response",
                ],
            ),
            AdviceSection::fixed(
                "Fever Management: Home Care (for mild fever)",
                &[
                    "Stay hydrated with water/clear fluids",
                    "Rest in comfortable environment",
                    "Use lukewarm sponge bath (not cold)",
                    "Dress in lightweight clothing",
                ],
            ),
            AdviceSection::fixed(
                "Fever Management: Medication Guidance",
                &[
                    "Acetaminophen or ibuprofen as directed",
                    "Avoid aspirin for children/teens",
                    "Don't combine fever reducers without advice",
                    "Follow dosage instructions carefully",
                ],
            ),
            AdviceSection::fixed(
                "Seek medical care immediately if",
                &[
                    "Fever above 103°F (39.4°C) in adults",
                    "Fever lasting more than 3 days",
                    "Difficulty breathing or chest pain",
                    "Severe headache/stiff neck",
                    "Seizures or confusion",
                ],
            ),
        ],
    )
}

fn joint_pain(facts: &ProfileFacts<'_>) -> Template {
    (
        "Joint Pain Analysis",
        vec![
            AdviceSection::fixed(
                "Possible joint conditions",
                &[
                    "Osteoarthritis - Wear-and-tear, common in weight-bearing joints",
                    "Rheumatoid Arthritis - Symmetrical joint swelling/stiffness",
                    "Gout - Sudden severe pain, often in big toe",
                    "Bursitis - Inflammation of fluid-filled cushions",
                    "Tendinitis - Overuse injury of tendons",
                ],
            ),
            Factors::default()
                .when(
                    facts.bmi > 25.0,
                    format!(
                        "Excess weight putting stress on joints (BMI {})",
                        facts.bmi_display()
                    ),
                )
                .when(facts.intense(), "High activity level may cause overuse injuries")
                .when(facts.sedentary(), "Sedentary lifestyle contributing to stiffness")
                .when(
                    facts.eats_any(&[FoodTag::Processed, FoodTag::Alcohol]),
                    "Diet may contribute to inflammation",
                )
                .section("Factors from your profile"),
            AdviceSection::fixed(
                "Joint Pain Relief Plan: Immediate Relief",
                &[
                    "Apply ice (acute) or heat (chronic)",
                    "Gentle range-of-motion exercises",
                    "Over-the-counter anti-inflammatories",
                    "Supportive braces if needed",
                ],
            ),
            AdviceSection::fixed(
                "Joint Pain Relief Plan: Long-term Care",
                &[
                    "Low-impact exercise (swimming, cycling)",
                    "Weight management if needed",
                    "Anti-inflammatory diet (omega-3s, antioxidants)",
                    "Physical therapy exercises",
                ],
            ),
            AdviceSection::fixed(
                "When to see a doctor",
                &[
                    "Joint redness/swelling/warmth",
                    "Inability to bear weight",
                    "Pain lasting more than 2 weeks",
                    "Fever with joint pain",
                ],
            ),
        ],
    )
}

fn throat_pain() -> Template {
    (
        "Throat Pain Analysis",
        vec![
            AdviceSection::fixed(
                "Possible throat conditions",
                &[
                    "Strep Throat - Sudden severe pain, fever, no cough",
                    "Viral Pharyngitis - Often with cold/flu symptoms",
                    "Tonsillitis - Swollen tonsils, possible white patches",
                    "Laryngitis - Hoarseness, voice loss",
                    "GERD/Heartburn - Acid reflux irritating throat",
                ],
            ),
            AdviceSection::fixed(
                "Symptom Relief: Home Remedies",
                &[
                    "Warm salt water gargles",
                    "Honey (not for infants) in warm tea",
                    "Throat lozenges or hard candy",
                    "Humidifier to moisten air",
                ],
            ),
            AdviceSection::fixed(
                "Symptom Relief: Comfort Measures",
                &[
                    "Stay hydrated with cool/warm fluids",
                    "Rest your voice",
                    "Eat soft, soothing foods",
                    "Over-the-counter pain relievers",
                ],
            ),
            AdviceSection::fixed(
                "Seek medical attention if",
                &[
                    "Difficulty breathing/swallowing",
                    "Severe pain lasting >48 hours",
                    "High fever (>101°F/38.3°C)",
                    "Swollen lymph nodes or rash",
                    "Blood in saliva/phlegm",
                ],
            ),
        ],
    )
}

// ============================================================================
// Breathing, heart and dizziness
// ============================================================================

fn breathing(facts: &ProfileFacts<'_>) -> Template {
    (
        "Breathing Difficulty Analysis",
        vec![
            AdviceSection::fixed(
                "Possible respiratory conditions",
                &[
                    "Asthma - Wheezing, chest tightness, often at night",
                    "COPD/Emphysema - Chronic smokers, progressive",
                    "Pneumonia - Fever, productive cough, fatigue",
                    "Allergic Reaction - Sudden onset with swelling",
                    "Anxiety/Panic Attack - Hyperventilation, tingling",
                ],
            ),
            Factors::default()
                .when(
                    facts.sedentary(),
                    "Low fitness level may contribute to breathlessness",
                )
                .when(
                    facts.bmi > 30.0,
                    format!(
                        "Higher weight may affect breathing (BMI {})",
                        facts.bmi_display()
                    ),
                )
                .when(
                    facts.eats(FoodTag::Processed),
                    "Processed foods may contribute to inflammation",
                )
                .section("Factors from your profile"),
            AdviceSection::fixed(
                "Breathing Support: For Mild Symptoms",
                &[
                    "Pursed-lip breathing technique",
                    "Sit upright, lean forward slightly",
                    "Stay calm and relax shoulders",
                    "Use humidifier/inhale steam",
                ],
            ),
            AdviceSection::fixed(
                "Breathing Support: Prevention",
                &[
                    "Avoid known triggers/allergens",
                    "Practice regular cardio exercise",
                    "Maintain healthy weight",
                    "Don't smoke/vape",
                ],
            ),
            AdviceSection::fixed(
                "EMERGENCY - Call for help if",
                &[
                    "Lips/nails turning blue",
                    "Severe chest pain/pressure",
                    "Confusion or difficulty speaking",
                    "Rapid worsening of symptoms",
                ],
            ),
        ],
    )
}

fn heart(facts: &ProfileFacts<'_>) -> Template {
    (
        "Heart Health Analysis",
        vec![
            AdviceSection::fixed(
                "Possible cardiac conditions",
                &[
                    "Angina - Chest pressure/pain during exertion",
                    "Arrhythmia - Irregular or abnormal heart rhythm",
                    "Heart Failure - Fatigue, swelling, shortness of breath",
                    "Hypertension - Chronically elevated blood pressure",
                    "Pericarditis - Sharp chest pain worsened by breathing",
                ],
            ),
            Factors::default()
                .when(
                    facts.bmi > 25.0,
                    format!(
                        "Elevated BMI ({}) increases cardiac workload",
                        facts.bmi_display()
                    ),
                )
                .when(
                    facts.sedentary(),
                    "Sedentary lifestyle affects cardiovascular health",
                )
                .when(
                    facts.eats_any(&UNHEALTHY_FATS),
                    "Diet high in unhealthy fats may impact cholesterol",
                )
                .when(
                    facts.profile.age > 45,
                    format!("Age-related risk factors ({} years old)", facts.profile.age),
                )
                .section("Risk factors from your profile"),
            AdviceSection::fixed(
                "Heart Health Recommendations: Lifestyle Changes",
                &[
                    "Adopt a heart-healthy diet (Mediterranean style)",
                    "Engage in regular aerobic exercise",
                    "Manage stress through relaxation techniques",
                    "Monitor blood pressure regularly",
                ],
            ),
            AdviceSection::fixed(
                "Heart Health Recommendations: Symptom Management",
                &[
                    "Track symptoms with a journal",
                    "Learn to check your pulse",
                    "Recognize early warning signs",
                    "Follow prescribed medications strictly",
                ],
            ),
            AdviceSection::fixed(
                "CARDIAC EMERGENCY - Call emergency services if",
                &[
                    "Chest pain lasting more than 15 minutes",
                    "Pain radiating to arm/jaw/back",
                    "Sudden severe shortness of breath",
                    "Fainting or near-fainting episode",
                    "Irregular pulse with dizziness",
                ],
            ),
        ],
    )
}

fn dizziness(facts: &ProfileFacts<'_>) -> Template {
    (
        "Dizziness Analysis",
        vec![
            AdviceSection::fixed(
                "Possible causes of dizziness",
                &[
                    "Vertigo (BPPV) - Brief spinning sensation with head movement",
                    "Low Blood Pressure - Especially when standing up",
                    "Inner Ear Problems - Often with hearing changes",
                    "Dehydration - From inadequate fluid intake",
                    "Anemia - With fatigue and pale skin",
                    "Anxiety Disorders - During panic attacks",
                ],
            ),
            Factors::default()
                .when(
                    facts.water() < 2.0,
                    format!("Low hydration (only {}L daily)", facts.water()),
                )
                .when(
                    facts.sleep_hours < 6.0,
                    format!("Insufficient sleep ({} hours)", facts.sleep_hours),
                )
                .when(
                    facts.eats(FoodTag::Caffeine),
                    "Caffeine may affect blood pressure regulation",
                )
                .when(facts.sedentary(), "Low activity level may affect circulation")
                .section("Contributing factors from your profile"),
            AdviceSection::fixed(
                "Dizziness Relief Strategies: Immediate Actions",
                &[
                    "Sit or lie down immediately when dizzy",
                    "Focus on a stationary object",
                    "Hydrate with electrolyte solution",
                    "Perform slow head movements (for vertigo)",
                ],
            ),
            AdviceSection::fixed(
                "Dizziness Relief Strategies: Prevention",
                &[
                    "Rise slowly from sitting/lying positions",
                    "Maintain consistent meal schedule",
                    "Practice balance exercises",
                    "Ensure adequate iron intake",
                ],
            ),
            AdviceSection::fixed(
                "Seek urgent medical care if dizziness occurs with",
                &[
                    "Severe headache",
                    "Chest pain or palpitations",
                    "Difficulty speaking or walking",
                    "Fainting or loss of consciousness",
                    "Numbness/weakness in limbs",
                ],
            ),
        ],
    )
}

// ============================================================================
// Food, skin and conversation
// ============================================================================

fn food_passion(facts: &ProfileFacts<'_>) -> Template {
    let preferences = if facts.profile.food_choices.is_empty() {
        vec!["No specific preferences indicated".to_string()]
    } else {
        facts
            .profile
            .food_choices
            .iter()
            .map(|f| f.label().to_string())
            .collect()
    };

    let weight = facts.profile.weight_kg;
    let mut advice = Vec::new();
    if facts.bmi < 18.5 {
        advice.push("Increase calorie-dense foods: nuts, avocados, whole grains".to_string());
    } else if facts.bmi > 25.0 {
        advice.push("Focus on fiber-rich foods to manage weight: vegetables, legumes".to_string());
    }
    if facts.intense() {
        advice.push(format!(
            "Increase protein intake for muscle recovery: {}g+ daily",
            round_to(weight * 1.2, 1)
        ));
    }
    advice.push(format!(
        "Hydration target: {:.1}L water daily",
        weight * WATER_LITERS_PER_KG
    ));

    (
        "Nutrition & Food Passion Analysis",
        vec![
            AdviceSection::new("Your Current Food Preferences", preferences),
            AdviceSection::new("Personalized Nutrition Advice: Based on Your Profile", advice),
            AdviceSection::fixed(
                "Personalized Nutrition Advice: Healthy Food Passion Tips",
                &[
                    "Try new colorful vegetables each week",
                    "Experiment with herbs/spices instead of salt",
                    "Prep healthy snacks in advance",
                    "Join local cooking classes",
                    "Start a small herb garden",
                ],
            ),
            AdviceSection::fixed(
                "Recipe Ideas You Might Enjoy",
                &[
                    "Breakfast: Greek yogurt with mixed berries and chia seeds",
                    "Lunch: Quinoa salad with roasted vegetables and lemon-tahini dressing",
                    "Dinner: Grilled salmon with steamed broccoli and sweet potato mash",
                    "Snack: Apple slices with almond butter",
                ],
            ),
        ],
    )
}

fn skin(facts: &ProfileFacts<'_>) -> Template {
    (
        "Skin Redness & Itching Analysis",
        vec![
            AdviceSection::fixed(
                "Possible Skin Conditions",
                &[
                    "Eczema/Dermatitis - Dry, itchy patches, often in folds",
                    "Allergic Reaction - Sudden redness, hives, swelling",
                    "Psoriasis - Thick red patches with silvery scales",
                    "Rosacea - Facial redness, visible blood vessels",
                    "Contact Irritation - From soaps, fabrics, or chemicals",
                ],
            ),
            Factors::default()
                .when(
                    facts.eats_any(&[FoodTag::Dairy, FoodTag::Processed]),
                    "Diet may contain common irritants",
                )
                .when(facts.water() < 2.0, "Dehydration can worsen skin conditions")
                .when(facts.sleep_hours < 6.0, "Poor sleep reduces skin repair")
                .section("Contributing Factors"),
            AdviceSection::fixed(
                "Skin Relief Protocol: Immediate Soothing",
                &[
                    "Apply cold compress for 15 minutes",
                    "Use fragrance-free moisturizer",
                    "Try colloidal oatmeal baths",
                    "Wear loose, breathable clothing",
                ],
            ),
            AdviceSection::fixed(
                "Skin Relief Protocol: Long-term Care",
                &[
                    "Identify and eliminate triggers",
                    "Use gentle, pH-balanced cleansers",
                    "Increase omega-3 fatty acids in diet",
                    "Manage stress through meditation/yoga",
                ],
            ),
            AdviceSection::fixed(
                "Seek Medical Help If",
                &[
                    "Skin is blistering or peeling",
                    "Fever accompanies rash",
                    "Swelling affects breathing",
                    "Condition spreads rapidly",
                    "No improvement after 2 weeks",
                ],
            ),
        ],
    )
}

fn thank_you(query: &str, profile: &Profile) -> Template {
    let lower = query.to_lowercase();
    let name = &profile.name;

    let message = if lower.contains("bye") || lower.contains("see you") {
        format!(
            "It was a pleasure assisting you, {name}. Wishing you good health and happiness! Take care and see you next time."
        )
    } else if lower.contains("thank") || lower.contains("appreciate") {
        format!(
            "You're very welcome, {name}! Remember, your health matters. If you have more questions, I'm always here to help."
        )
    } else if lower.contains("good") || lower.contains("great") || lower.contains("helpful") {
        format!("I'm glad I could help, {name}. Stay positive and keep taking care of yourself!")
    } else {
        format!(
            "Thank you, {name}, for chatting with me! Feel free to ask more health questions whenever you need. Remember to stay hydrated, eat well, and get enough rest."
        )
    };

    (
        "Thank You!",
        vec![
            AdviceSection::new("Message", vec![message]),
            AdviceSection::fixed(
                "Health tips",
                &[
                    "Tip: Regular checkups help you stay healthy.",
                    "Tip: Small lifestyle changes can make a big difference.",
                ],
            ),
        ],
    )
}

fn unclassified(query: &str, facts: &ProfileFacts<'_>) -> Template {
    (
        "Health Guidance",
        vec![AdviceSection::new(
            "General guidance",
            vec![format!(
                "I understand you're asking about \"{}\". Based on your health profile, I recommend consulting with a healthcare professional for personalized advice. In the meantime, ensure you're getting adequate sleep ({} hours currently), staying hydrated ({}L daily), and maintaining a balanced diet. Is there a specific symptom you'd like me to help analyze?",
                query.trim(),
                facts.sleep_hours,
                facts.water()
            )],
        )],
    )
}
