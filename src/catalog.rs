//! Symptom catalog: the vocabulary offered to clients for selection.

use serde::{Deserialize, Serialize};

use crate::engine::symptoms::VOCABULARY;

/// A selectable symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: u32,
    pub name: String,
}

/// Ordered, deduplicated list of symptoms with 1-based ids.
#[derive(Debug, Clone)]
pub struct SymptomCatalog {
    symptoms: Vec<Symptom>,
}

impl SymptomCatalog {
    /// Build a catalog from names in display order. Repeated names keep their
    /// first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut symptoms: Vec<Symptom> = Vec::new();
        for name in names {
            let name = name.into();
            if symptoms.iter().any(|s| s.name == name) {
                continue;
            }
            symptoms.push(Symptom {
                id: symptoms.len() as u32 + 1,
                name,
            });
        }
        Self { symptoms }
    }

    pub fn list(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Case-insensitive substring search over names. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Symptom> {
        let needle = query.trim().to_lowercase();
        self.symptoms
            .iter()
            .filter(|s| needle.is_empty() || s.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, label: &str) -> bool {
        self.symptoms.iter().any(|s| s.name == label)
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

impl Default for SymptomCatalog {
    fn default() -> Self {
        Self::from_names(VOCABULARY)
    }
}
