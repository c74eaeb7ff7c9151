//! Reference data store — medication and provider catalogs.
//!
//! Both catalogs are loaded once at startup from bundled JSON files and are
//! immutable for the lifetime of the process. A missing file is not an
//! error: the catalog degrades to empty and every lookup legitimately
//! returns nothing. A malformed file is a data-integrity error and refuses
//! to load.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors surfaced while loading reference data.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("Cannot read {0}: {1}")]
    Read(String, String),
    #[error("Cannot parse {0}: {1}")]
    Parse(String, String),
    #[error("Record {0} in {1} has an empty name")]
    EmptyName(usize, String),
    #[error("Duplicate medication name: {0}")]
    DuplicateName(String),
    #[error("Duplicate provider id: {0}")]
    DuplicateId(String),
}

// ─── Medications ─────────────────────────────────────────────────────────────

/// Raw medication entry as it appears in medications.json.
/// Optional fields are resolved to concrete defaults during catalog
/// construction; downstream code never sees an absent field.
#[derive(Debug, Deserialize)]
struct RawMedication {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    alternate_names: Option<Vec<String>>,
    #[serde(default)]
    mechanism_of_action: Option<String>,
}

/// A single medication with its brand/alias names.
#[derive(Debug, Clone, Serialize)]
pub struct MedicationRecord {
    /// Lowercased canonical name — the catalog key.
    pub name: String,
    /// Display-cased name as it appeared in the source data.
    pub label: String,
    pub description: String,
    pub alternate_names: Vec<String>,
    pub mechanism_of_action: String,
}

/// Immutable medication catalog. Iteration preserves source-file order,
/// which the suggestion ranker relies on for stable tie-breaking.
#[derive(Debug, Default)]
pub struct MedicationCatalog {
    records: Vec<MedicationRecord>,
    by_name: HashMap<String, usize>,
}

impl MedicationCatalog {
    pub fn from_records(records: Vec<MedicationRecord>) -> Result<Self, ReferenceError> {
        let mut by_name = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if by_name.insert(record.name.clone(), idx).is_some() {
                return Err(ReferenceError::DuplicateName(record.name.clone()));
            }
        }
        Ok(Self { records, by_name })
    }

    /// Records in source-file order.
    pub fn records(&self) -> impl Iterator<Item = &MedicationRecord> {
        self.records.iter()
    }

    /// Case-insensitive lookup by canonical name.
    pub fn get(&self, name: &str) -> Option<&MedicationRecord> {
        let key = name.to_lowercase();
        self.by_name.get(&key).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn build_medication_catalog(raw: Vec<RawMedication>, file: &str) -> Result<MedicationCatalog, ReferenceError> {
    let mut records = Vec::with_capacity(raw.len());
    for (idx, entry) in raw.into_iter().enumerate() {
        let label = entry.name.trim().to_string();
        if label.is_empty() {
            return Err(ReferenceError::EmptyName(idx, file.to_string()));
        }
        records.push(MedicationRecord {
            name: label.to_lowercase(),
            label,
            description: entry.description.unwrap_or_default(),
            alternate_names: entry.alternate_names.unwrap_or_default(),
            mechanism_of_action: entry.mechanism_of_action.unwrap_or_default(),
        });
    }
    MedicationCatalog::from_records(records)
}

// ─── Providers ───────────────────────────────────────────────────────────────

/// A provider with their documentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub preferences: serde_json::Value,
}

/// Immutable provider directory keyed by provider id.
#[derive(Debug, Default)]
pub struct ProviderDirectory {
    records: Vec<ProviderRecord>,
    by_id: HashMap<String, usize>,
}

impl ProviderDirectory {
    pub fn from_records(records: Vec<ProviderRecord>) -> Result<Self, ReferenceError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), idx).is_some() {
                return Err(ReferenceError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records, by_id })
    }

    pub fn records(&self) -> impl Iterator<Item = &ProviderRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ProviderRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Loaded reference data, built once in main and shared read-only.
pub struct ReferenceStore {
    pub medications: MedicationCatalog,
    pub providers: ProviderDirectory,
}

impl ReferenceStore {
    /// Load both catalogs from `data_dir`.
    ///
    /// Absent files degrade to empty catalogs; unreadable or malformed
    /// files abort the load.
    pub fn load(data_dir: &Path) -> Result<Self, ReferenceError> {
        let medications = match read_json_file(&data_dir.join("medications.json"))? {
            Some(raw) => build_medication_catalog(raw, "medications.json")?,
            None => {
                tracing::warn!(dir = %data_dir.display(), "medications.json not found; medication catalog is empty");
                MedicationCatalog::default()
            }
        };

        let providers = match read_json_file::<Vec<ProviderRecord>>(&data_dir.join("providers.json"))? {
            Some(records) => ProviderDirectory::from_records(records)?,
            None => {
                tracing::warn!(dir = %data_dir.display(), "providers.json not found; provider directory is empty");
                ProviderDirectory::default()
            }
        };

        tracing::info!(
            medications = medications.len(),
            providers = providers.len(),
            "Reference data loaded"
        );

        Ok(Self {
            medications,
            providers,
        })
    }

    /// Create reference data for tests (no file I/O).
    pub fn load_test() -> Self {
        let medications = build_medication_catalog(
            vec![
                RawMedication {
                    name: "Lisinopril".into(),
                    description: Some("ACE inhibitor for hypertension and heart failure.".into()),
                    alternate_names: Some(vec!["Zestril".into(), "Prinivil".into()]),
                    mechanism_of_action: Some(
                        "Inhibits angiotensin-converting enzyme, reducing angiotensin II.".into(),
                    ),
                },
                RawMedication {
                    name: "Losartan".into(),
                    description: Some("Angiotensin II receptor blocker.".into()),
                    alternate_names: Some(vec!["Cozaar".into()]),
                    mechanism_of_action: Some("Blocks the AT1 receptor.".into()),
                },
                RawMedication {
                    name: "Metformin".into(),
                    description: Some("First-line oral agent for type 2 diabetes.".into()),
                    alternate_names: Some(vec!["Glucophage".into(), "Fortamet".into()]),
                    mechanism_of_action: Some("Decreases hepatic glucose production.".into()),
                },
                RawMedication {
                    name: "Acetaminophen".into(),
                    description: Some("Analgesic and antipyretic.".into()),
                    alternate_names: Some(vec!["Tylenol".into()]),
                    mechanism_of_action: Some("Central COX inhibition.".into()),
                },
            ],
            "test",
        )
        .expect("test catalog is valid");

        let providers = ProviderDirectory::from_records(vec![ProviderRecord {
            id: "dr-osman".into(),
            name: "Dr. Osman".into(),
            preferences: serde_json::json!({
                "hpi_style": "concise",
                "differential_count": 4
            }),
        }])
        .expect("test directory is valid");

        Self {
            medications,
            providers,
        }
    }
}

/// Read and parse one JSON file. `Ok(None)` when the file does not exist.
fn read_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, ReferenceError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ReferenceError::Read(path.display().to_string(), e.to_string())),
    };
    let parsed = serde_json::from_str(&text)
        .map_err(|e| ReferenceError::Parse(path.display().to_string(), e.to_string()))?;
    Ok(Some(parsed))
}
