use std::{
    collections::HashMap,
    fs,
    path::Path,
};

use crate::core::{
    models::{
        ConjugationClass,
        VerbEntry,
    },
    SubjunctError,
};

/// The reference table shipped with the crate.
const DEFAULT_VERBS: &str = include_str!("../../data/verbs.json");

/// Read-only verb reference data, loaded once at startup. One row per
/// verb: regularity class, stem-change pattern, orthographic pattern,
/// overrides, frequency rank.
#[derive(Debug)]
pub struct VerbCatalog {
    verbs: HashMap<String, VerbEntry>,
}

impl VerbCatalog {
    /// Load the embedded verb table.
    pub fn load_default() -> Result<Self, SubjunctError> {
        let catalog = Self::from_json_str(DEFAULT_VERBS)?;
        println!("Loaded verb catalog: {} verbs", catalog.len());
        Ok(catalog)
    }

    pub fn from_file(path: &Path) -> Result<Self, SubjunctError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SubjunctError> {
        let entries: Vec<VerbEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<VerbEntry>) -> Result<Self, SubjunctError> {
        let mut verbs = HashMap::with_capacity(entries.len());
        for entry in entries {
            if ConjugationClass::of(&entry.infinitive).is_none() {
                return Err(SubjunctError::FailedToLoadCatalog(format!(
                    "'{}' is not an -ar/-er/-ir infinitive",
                    entry.infinitive
                )));
            }
            if verbs.insert(entry.infinitive.clone(), entry).is_some() {
                return Err(SubjunctError::FailedToLoadCatalog(
                    "duplicate infinitive in verb table".to_string(),
                ));
            }
        }
        // Compound tenses conjugate the auxiliary through the catalog.
        if !verbs.contains_key("haber") {
            return Err(SubjunctError::FailedToLoadCatalog(
                "verb table has no entry for 'haber'".to_string(),
            ));
        }
        Ok(VerbCatalog { verbs })
    }

    pub fn get(&self, infinitive: &str) -> Option<&VerbEntry> {
        self.verbs.get(infinitive)
    }

    /// Rank used to interleave brand-new cells into the review queue.
    /// Unknown verbs sort last.
    pub fn frequency_rank(&self, infinitive: &str) -> u32 {
        self.verbs.get(infinitive).map(|entry| entry.frequency_rank).unwrap_or(u32::MAX)
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VerbEntry> {
        self.verbs.values()
    }
}
