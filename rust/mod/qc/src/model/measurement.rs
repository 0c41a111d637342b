use serde::{Deserialize, Serialize};

/// Number of strands on a casting machine.
pub const STRAND_COUNT: usize = 5;

/// One strand's raw reading.
///
/// A `diameter1` of zero (or below) means the strand was not measured for
/// this heat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Strand number, 1-based.
    pub strand: u8,

    /// First diameter reading (mm).
    pub diameter1: f64,

    /// Second diameter reading (mm).
    pub diameter2: f64,

    /// Sample tag when a sample was taken from this strand.
    /// `Some("")` is still a flagged sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>,
}

impl MeasurementInput {
    pub fn new(strand: u8, diameter1: f64, diameter2: f64) -> Self {
        Self {
            strand,
            diameter1,
            diameter2,
            sample: None,
        }
    }

    /// A strand with no readings.
    pub fn unmeasured(strand: u8) -> Self {
        Self::new(strand, 0.0, 0.0)
    }

    pub fn with_sample(mut self, tag: impl Into<String>) -> Self {
        self.sample = Some(tag.into());
        self
    }

    /// Whether this strand produces a record.
    pub fn is_measured(&self) -> bool {
        self.diameter1 > 0.0
    }

    /// All strands, in strand order, with no readings.
    pub fn blank_strands() -> [MeasurementInput; STRAND_COUNT] {
        std::array::from_fn(|i| Self::unmeasured(i as u8 + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strands_are_ordered_and_unmeasured() {
        let strands = MeasurementInput::blank_strands();
        let numbers: Vec<u8> = strands.iter().map(|m| m.strand).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(strands.iter().all(|m| !m.is_measured()));
    }

    #[test]
    fn empty_sample_tag_is_still_flagged() {
        let m = MeasurementInput::new(3, 150.0, 149.0).with_sample("");
        assert_eq!(m.sample.as_deref(), Some(""));
    }
}
