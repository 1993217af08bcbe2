//! The ordered condition rule table.
//!
//! Rules are evaluated top-down and the first matching rule wins. Nested
//! branches (the Fever+Cough family, the SkinRash family) are flattened into
//! consecutive entries; because evaluation stops at the first match, a later
//! sibling only fires when the earlier siblings did not.
//!
//! ```text
//!  #  rule                      condition
//!  1  flu_with_complications    Fever ∧ Cough ∧ (ShortnessOfBreath ∨ ChestPain)
//!  2  flu                       Fever ∧ Cough ∧ Headache ∧ Fatigue ∧ MusclePain
//!  3  common_cold               Fever ∧ Cough ∧ (SoreThroat ∨ RunnyNose)
//!  4  gastroenteritis           Nausea ∧ Vomiting ∧ Diarrhea ∧ AbdominalPain
//!  5  heart_condition           ChestPain ∧ (ShortnessOfBreath ∨ Dizziness ∨ Fatigue)
//!  6  seasonal_allergies        RunnyNose ∧ Cough ∧ ¬SoreThroat ∧ ¬Fever
//!  7  migraine                  Headache ∧ (Nausea ∨ BlurryVision)
//!  8  viral_rash                SkinRash ∧ Fever ∧ Fatigue
//!  9  skin_irritation           SkinRash
//! 10  general_viral_infection   non-empty ∧ (Fever ∨ Fatigue ∨ MusclePain)
//! 11  needs_more_information    non-empty
//!  -  no_symptoms               empty (terminal)
//! ```

use crate::engine::symptoms::labels::*;
use crate::engine::symptoms::SymptomSet;

/// How a rule scores its confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Confidence {
    /// A constant attached to the rule.
    Fixed(f64),
    /// Drawn by the engine from the catch-all range.
    Sampled,
}

/// The result template a rule produces when it fires.
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub condition: &'static str,
    pub confidence: Confidence,
    pub suggestions: &'static [&'static str],
}

/// A named predicate over the symptom set plus the outcome it produces.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&SymptomSet<'_>) -> bool,
    pub outcome: Outcome,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("outcome", &self.outcome)
            .finish()
    }
}

pub const NO_SYMPTOMS_CONDITION: &str = "No symptoms provided";
pub const CATCH_ALL_CONDITION: &str = "Needs more information or professional diagnosis";

/// Rules in priority order. Every non-empty set matches at least the last entry.
pub static RULES: [Rule; 11] = [
    Rule {
        name: "flu_with_complications",
        matches: flu_with_complications,
        outcome: Outcome {
            condition: "Flu with complications",
            confidence: Confidence::Fixed(0.90),
            suggestions: &[
                "Seek immediate medical attention.",
                "Rest, hydrate, avoid public places.",
            ],
        },
    },
    Rule {
        name: "flu",
        matches: flu,
        outcome: Outcome {
            condition: "Flu",
            confidence: Confidence::Fixed(0.85),
            suggestions: &["Rest, stay hydrated, consider over-the-counter flu remedies. Consult a doctor if symptoms worsen."],
        },
    },
    Rule {
        name: "common_cold",
        matches: common_cold,
        outcome: Outcome {
            condition: "Common Cold",
            confidence: Confidence::Fixed(0.75),
            suggestions: &["Rest, drink fluids, use saline nasal spray. Symptoms usually resolve in a week."],
        },
    },
    Rule {
        name: "gastroenteritis",
        matches: gastroenteritis,
        outcome: Outcome {
            condition: "Gastroenteritis (Stomach Flu)",
            confidence: Confidence::Fixed(0.92),
            suggestions: &["Stay hydrated with oral rehydration solutions. Eat bland foods. Consult a doctor if dehydration is severe or symptoms persist."],
        },
    },
    Rule {
        name: "heart_condition",
        matches: heart_condition,
        outcome: Outcome {
            condition: "Potential Heart Condition",
            confidence: Confidence::Fixed(0.98),
            suggestions: &["**This is a critical symptom combination. Seek emergency medical attention IMMEDIATELY.**"],
        },
    },
    Rule {
        name: "seasonal_allergies",
        matches: seasonal_allergies,
        outcome: Outcome {
            condition: "Seasonal Allergies",
            confidence: Confidence::Fixed(0.70),
            suggestions: &["Consider over-the-counter antihistamines. Avoid allergens if known. Consult an allergist for persistent symptoms."],
        },
    },
    Rule {
        name: "migraine",
        matches: migraine,
        outcome: Outcome {
            condition: "Migraine",
            confidence: Confidence::Fixed(0.80),
            suggestions: &["Rest in a dark, quiet room. Over-the-counter pain relievers may help. Consult a doctor for diagnosis and management."],
        },
    },
    Rule {
        name: "viral_rash",
        matches: viral_rash,
        outcome: Outcome {
            condition: "Possible Viral Infection (e.g., Chickenpox, Measles)",
            confidence: Confidence::Fixed(0.88),
            suggestions: &["Consult a doctor for diagnosis. Avoid scratching. Isolate if contagious."],
        },
    },
    Rule {
        name: "skin_irritation",
        matches: skin_irritation,
        outcome: Outcome {
            condition: "Skin Irritation/Allergy",
            confidence: Confidence::Fixed(0.60),
            suggestions: &["Identify potential irritants. Keep the area clean. Consult a dermatologist if persistent."],
        },
    },
    Rule {
        name: "general_viral_infection",
        matches: general_viral_infection,
        outcome: Outcome {
            condition: "General Viral Infection",
            confidence: Confidence::Fixed(0.65),
            suggestions: &["Rest, hydrate, monitor symptoms. Consult a doctor if symptoms worsen or new symptoms appear."],
        },
    },
    Rule {
        name: "needs_more_information",
        matches: needs_more_information,
        outcome: Outcome {
            condition: CATCH_ALL_CONDITION,
            confidence: Confidence::Sampled,
            suggestions: &["The combination of symptoms is not specific enough for a clear prediction. Please provide more details or consult a doctor for accurate diagnosis."],
        },
    },
];

/// Returned when no rule in [`RULES`] matches, which only happens for an empty set.
pub static NO_SYMPTOMS: Rule = Rule {
    name: "no_symptoms",
    matches: no_symptoms,
    outcome: Outcome {
        condition: NO_SYMPTOMS_CONDITION,
        confidence: Confidence::Fixed(0.0),
        suggestions: &["Please select symptoms to get a prediction."],
    },
};

/// Find the first rule that matches `symptoms`.
pub fn first_match(symptoms: &SymptomSet<'_>) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.matches)(symptoms))
        .unwrap_or(&NO_SYMPTOMS)
}

// ─── Predicates ────────────────────────────────────────────────────────────

fn fever_and_cough(s: &SymptomSet<'_>) -> bool {
    s.all(&[FEVER, COUGH])
}

fn flu_with_complications(s: &SymptomSet<'_>) -> bool {
    fever_and_cough(s) && s.any(&[SHORTNESS_OF_BREATH, CHEST_PAIN])
}

fn flu(s: &SymptomSet<'_>) -> bool {
    fever_and_cough(s) && s.all(&[HEADACHE, FATIGUE, MUSCLE_PAIN])
}

fn common_cold(s: &SymptomSet<'_>) -> bool {
    fever_and_cough(s) && s.any(&[SORE_THROAT, RUNNY_NOSE])
}

fn gastroenteritis(s: &SymptomSet<'_>) -> bool {
    s.all(&[NAUSEA, VOMITING, DIARRHEA, ABDOMINAL_PAIN])
}

fn heart_condition(s: &SymptomSet<'_>) -> bool {
    s.contains(CHEST_PAIN) && s.any(&[SHORTNESS_OF_BREATH, DIZZINESS, FATIGUE])
}

fn seasonal_allergies(s: &SymptomSet<'_>) -> bool {
    s.all(&[RUNNY_NOSE, COUGH]) && !s.any(&[SORE_THROAT, FEVER])
}

fn migraine(s: &SymptomSet<'_>) -> bool {
    s.contains(HEADACHE) && s.any(&[NAUSEA, BLURRY_VISION])
}

fn viral_rash(s: &SymptomSet<'_>) -> bool {
    s.all(&[SKIN_RASH, FEVER, FATIGUE])
}

fn skin_irritation(s: &SymptomSet<'_>) -> bool {
    s.contains(SKIN_RASH)
}

fn general_viral_infection(s: &SymptomSet<'_>) -> bool {
    !s.is_empty() && s.any(&[FEVER, FATIGUE, MUSCLE_PAIN])
}

fn needs_more_information(s: &SymptomSet<'_>) -> bool {
    !s.is_empty()
}

fn no_symptoms(s: &SymptomSet<'_>) -> bool {
    s.is_empty()
}
