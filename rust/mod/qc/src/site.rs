//! Site configuration — the plant enumerations a batch must come from.
//!
//! Loaded from YAML; [`default_config`] mirrors the melt shop's standard
//! setup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::QcError;
use crate::model::BatchSubmission;

/// A storage area and how many boxes it holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageArea {
    pub name: String,
    pub boxes: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Steel grades that may be cast.
    pub grades: Vec<String>,

    /// Continuous casting machine ids.
    pub machines: Vec<String>,

    /// Shift letters.
    pub shifts: Vec<String>,

    /// Storage areas, in display order.
    pub areas: Vec<StorageArea>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteConfigError {
    #[error("site config has no {0}")]
    Empty(&'static str),

    #[error("duplicate {list} entry: {value}")]
    Duplicate { list: &'static str, value: String },

    #[error("storage area {0} has no boxes")]
    NoBoxes(String),

    #[error("site config parse error: {0}")]
    Parse(String),
}

pub fn default_config() -> SiteConfig {
    let area = |name: &str, boxes| StorageArea {
        name: name.into(),
        boxes,
    };
    SiteConfig {
        grades: ["B500", "B500W", "SAE1006", "SAE1008"]
            .map(String::from)
            .to_vec(),
        machines: ["CCM01", "CCM02"].map(String::from).to_vec(),
        shifts: ["A", "B", "C", "D"].map(String::from).to_vec(),
        areas: vec![
            area("RM01", 4),
            area("RM02", 4),
            area("RM03", 4),
            area("SMS", 8),
        ],
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        default_config()
    }
}

fn check_list(list: &'static str, values: &[String]) -> Result<(), SiteConfigError> {
    if values.is_empty() {
        return Err(SiteConfigError::Empty(list));
    }
    for (i, v) in values.iter().enumerate() {
        if values[..i].contains(v) {
            return Err(SiteConfigError::Duplicate {
                list,
                value: v.clone(),
            });
        }
    }
    Ok(())
}

fn require(list: &str, value: &str, allowed: &[String]) -> Result<(), QcError> {
    if allowed.iter().any(|a| a == value) {
        Ok(())
    } else {
        Err(QcError::Validation(format!(
            "unknown {} {:?} (expected one of: {})",
            list,
            value,
            allowed.join(", ")
        )))
    }
}

impl SiteConfig {
    /// Parse and validate a YAML site config.
    pub fn from_yaml(text: &str) -> Result<Self, SiteConfigError> {
        let config: SiteConfig =
            serde_yml::from_str(text).map_err(|e| SiteConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SiteConfigError> {
        check_list("grades", &self.grades)?;
        check_list("machines", &self.machines)?;
        check_list("shifts", &self.shifts)?;

        let names: Vec<String> = self.areas.iter().map(|a| a.name.clone()).collect();
        check_list("areas", &names)?;
        if let Some(a) = self.areas.iter().find(|a| a.boxes == 0) {
            return Err(SiteConfigError::NoBoxes(a.name.clone()));
        }
        Ok(())
    }

    pub fn area(&self, name: &str) -> Option<&StorageArea> {
        self.areas.iter().find(|a| a.name == name)
    }

    /// Check a submission the way the entry form constrains it: selections
    /// come from the site lists, readings and lengths are non-negative, and
    /// each strand sits in its own slot.
    pub fn check_submission(&self, sub: &BatchSubmission) -> Result<(), QcError> {
        let b = &sub.batch;
        if b.heat_number.trim().is_empty() {
            return Err(QcError::Validation("heat number is empty".into()));
        }
        require("grade", &b.grade, &self.grades)?;
        require("machine", &b.machine_id, &self.machines)?;
        require("shift", &b.shift, &self.shifts)?;

        let area = self.area(&b.storage.area).ok_or_else(|| {
            QcError::Validation(format!("unknown storage area {:?}", b.storage.area))
        })?;
        if b.storage.box_no == 0 || b.storage.box_no > area.boxes {
            return Err(QcError::Validation(format!(
                "box {} out of range for {} (1..={})",
                b.storage.box_no, area.name, area.boxes
            )));
        }

        if !b.short_billet_length.is_finite() || b.short_billet_length < 0.0 {
            return Err(QcError::Validation(format!(
                "short billet length {} must be a non-negative number",
                b.short_billet_length
            )));
        }

        for (i, m) in sub.strands.iter().enumerate() {
            if m.strand as usize != i + 1 {
                return Err(QcError::Validation(format!(
                    "slot {} holds strand {}",
                    i + 1,
                    m.strand
                )));
            }
            for (name, d) in [("d1", m.diameter1), ("d2", m.diameter2)] {
                if !d.is_finite() || d < 0.0 {
                    return Err(QcError::Validation(format!(
                        "strand {} {} = {} must be a non-negative number",
                        m.strand, name, d
                    )));
                }
            }
        }
        Ok(())
    }
}
