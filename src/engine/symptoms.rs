//! Symptom labels and the per-request symptom set.
//!
//! Labels are opaque, case-sensitive strings. The rule table only ever asks
//! membership questions, so a label outside the vocabulary is carried in the
//! set (it counts toward its size) but never satisfies a rule.

use std::collections::HashSet;

/// Canonical labels referenced by the rule table.
pub mod labels {
    pub const FEVER: &str = "Fever";
    pub const COUGH: &str = "Cough";
    pub const HEADACHE: &str = "Headache";
    pub const FATIGUE: &str = "Fatigue";
    pub const CHEST_PAIN: &str = "ChestPain";
    pub const NAUSEA: &str = "Nausea";
    pub const VOMITING: &str = "Vomiting";
    pub const SHORTNESS_OF_BREATH: &str = "ShortnessOfBreath";
    pub const DIARRHEA: &str = "Diarrhea";
    pub const MUSCLE_PAIN: &str = "MusclePain";
    pub const SORE_THROAT: &str = "SoreThroat";
    pub const RUNNY_NOSE: &str = "RunnyNose";
    pub const ABDOMINAL_PAIN: &str = "AbdominalPain";
    pub const JOINT_PAIN: &str = "JointPain";
    pub const SKIN_RASH: &str = "SkinRash";
    pub const DIZZINESS: &str = "Dizziness";
    pub const BLURRY_VISION: &str = "BlurryVision";
}

/// Default vocabulary, in catalog order.
pub const VOCABULARY: [&str; 17] = [
    labels::FEVER,
    labels::COUGH,
    labels::HEADACHE,
    labels::FATIGUE,
    labels::CHEST_PAIN,
    labels::NAUSEA,
    labels::VOMITING,
    labels::SHORTNESS_OF_BREATH,
    labels::DIARRHEA,
    labels::MUSCLE_PAIN,
    labels::SORE_THROAT,
    labels::RUNNY_NOSE,
    labels::ABDOMINAL_PAIN,
    labels::JOINT_PAIN,
    labels::SKIN_RASH,
    labels::DIZZINESS,
    labels::BLURRY_VISION,
];

/// Deduplicated, read-only view over the labels of a single request.
#[derive(Debug, Clone, Default)]
pub struct SymptomSet<'a> {
    labels: HashSet<&'a str>,
}

impl<'a> SymptomSet<'a> {
    /// Build a set from the raw request labels. Order and duplicates are dropped.
    pub fn new<S: AsRef<str>>(labels: &'a [S]) -> Self {
        Self {
            labels: labels.iter().map(AsRef::as_ref).collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// True if every label in `required` is present.
    pub fn all(&self, required: &[&str]) -> bool {
        required.iter().all(|l| self.contains(l))
    }

    /// True if at least one label in `candidates` is present.
    pub fn any(&self, candidates: &[&str]) -> bool {
        candidates.iter().any(|l| self.contains(l))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let input = ["Fever", "Fever", "Cough"];
        let set = SymptomSet::new(&input);
        assert_eq!(set.len(), 2);
        assert!(set.all(&[labels::FEVER, labels::COUGH]));
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let input = ["fever", " Fever"];
        let set = SymptomSet::new(&input);
        assert!(!set.contains(labels::FEVER));
        assert!(!set.any(&[labels::FEVER, labels::COUGH]));
        // Unknown labels still count toward the size.
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_set() {
        let input: Vec<String> = Vec::new();
        let set = SymptomSet::new(&input);
        assert!(set.is_empty());
        assert!(set.all(&[]));
        assert!(!set.any(&[labels::FEVER]));
    }
}
