use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::batch::BatchFields;

/// Strand verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InspectionStatus {
    Pass,
    Reject,
}

impl InspectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Reject => "REJECT",
        }
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sample marker carried on a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleInfo {
    /// No sample taken. Stored as the literal "None".
    None,
    /// Sample taken: "S{strand}-#{tag}".
    Tagged(String),
}

impl SampleInfo {
    pub const NONE_MARKER: &'static str = "None";

    pub fn for_strand(strand: u8, tag: Option<&str>) -> Self {
        match tag {
            Some(tag) => Self::Tagged(format!("S{}-#{}", strand, tag)),
            None => Self::None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::None => Self::NONE_MARKER,
            Self::Tagged(s) => s,
        }
    }
}

impl fmt::Display for SampleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluated strand. Created once by the evaluator and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionRecord {
    /// "S01" .. "S05".
    pub strand_id: String,
    pub diameter1: f64,
    pub diameter2: f64,
    /// |d1 - d2| rounded to two decimals.
    pub deviation: f64,
    pub status: InspectionStatus,
    pub sample_info: SampleInfo,
    pub batch: BatchFields,
    pub timestamp: NaiveDateTime,
}

impl InspectionRecord {
    pub fn strand_id(strand: u8) -> String {
        format!("S0{}", strand)
    }
}
