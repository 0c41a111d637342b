use std::fmt;

use serde::{Deserialize, Serialize};

use super::measurement::{MeasurementInput, STRAND_COUNT};
use crate::error::QcError;

/// Storage area and box number where the heat's billets are stacked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLocation {
    /// Storage area (e.g. "RM01", "SMS").
    pub area: String,

    /// Box number within the area, 1-based.
    #[serde(rename = "box")]
    pub box_no: u8,
}

impl StorageLocation {
    pub fn new(area: impl Into<String>, box_no: u8) -> Self {
        Self {
            area: area.into(),
            box_no,
        }
    }
}

/// Renders as "RM01 (Box 2)", the form stored in records and printed on labels.
impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Box {})", self.area, self.box_no)
    }
}

/// Batch-level fields shared by every record of one heat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFields {
    /// Heat number (e.g. "H100").
    pub heat_number: String,

    /// Steel grade (e.g. "B500").
    pub grade: String,

    /// Casting machine (e.g. "CCM01").
    pub machine_id: String,

    /// Shift letter.
    pub shift: String,

    /// Casting operator name.
    pub operator: String,

    /// Quality inspector name. Empty in a batch file that leaves it out.
    #[serde(default)]
    pub inspector: String,

    /// Number of billets in the heat.
    pub billet_count: u32,

    pub storage: StorageLocation,

    /// Length of the short billet in metres, 0 when there is none.
    #[serde(default)]
    pub short_billet_length: f64,
}

/// Inspector recorded when neither the batch file nor the client config names one.
pub const DEFAULT_INSPECTOR: &str = "Admin";

/// One strand line of a batch file. Strands left out are not measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrandEntry {
    pub strand: u8,

    #[serde(default)]
    pub d1: f64,

    #[serde(default)]
    pub d2: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>,
}

/// A complete batch submission: batch fields plus all strand readings.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSubmission {
    pub batch: BatchFields,
    pub strands: [MeasurementInput; STRAND_COUNT],
}

/// On-disk shape of a batch file (YAML or JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BatchFile {
    batch: BatchFields,
    #[serde(default)]
    strands: Vec<StrandEntry>,
}

impl BatchSubmission {
    /// Build a submission from sparse strand entries. Every strand number
    /// must be within 1..=5 and appear at most once.
    pub fn from_entries(batch: BatchFields, entries: &[StrandEntry]) -> Result<Self, QcError> {
        let mut strands = MeasurementInput::blank_strands();
        let mut seen = [false; STRAND_COUNT];

        for entry in entries {
            let idx = entry.strand as usize;
            if idx == 0 || idx > STRAND_COUNT {
                return Err(QcError::Validation(format!(
                    "strand {} out of range 1..={}",
                    entry.strand, STRAND_COUNT
                )));
            }
            if seen[idx - 1] {
                return Err(QcError::Validation(format!(
                    "strand {} listed more than once",
                    entry.strand
                )));
            }
            seen[idx - 1] = true;
            strands[idx - 1] = MeasurementInput {
                strand: entry.strand,
                diameter1: entry.d1,
                diameter2: entry.d2,
                sample: entry.sample.clone(),
            };
        }

        Ok(Self { batch, strands })
    }

    /// Parse a batch file. YAML is a superset of JSON, so both are accepted.
    pub fn from_yaml(text: &str) -> Result<Self, QcError> {
        Self::from_yaml_with_inspector(text, DEFAULT_INSPECTOR)
    }

    /// Like [`from_yaml`](Self::from_yaml), but a missing or blank inspector
    /// becomes `inspector`.
    pub fn from_yaml_with_inspector(text: &str, inspector: &str) -> Result<Self, QcError> {
        let mut file: BatchFile =
            serde_yml::from_str(text).map_err(|e| QcError::Parse(e.to_string()))?;
        if file.batch.inspector.trim().is_empty() {
            file.batch.inspector = inspector.to_string();
        }
        Self::from_entries(file.batch, &file.strands)
    }
}
