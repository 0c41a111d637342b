//! Inspection evaluator — turns strand readings into classified records.

use chrono::NaiveDateTime;
use tracing::warn;

use crate::model::{
    BatchFields, InspectionRecord, InspectionStatus, MeasurementInput, SampleInfo, STRAND_COUNT,
};

/// Maximum allowed difference between the two diameter readings (mm).
/// A deviation exactly at the tolerance passes.
pub const TOLERANCE_MM: f64 = 8.0;

/// |d1 - d2| rounded to two decimals. The exact binary value is rounded,
/// ties to even, so 0.125 becomes 0.12 and 0.375 becomes 0.38.
///
/// Negative readings are not rejected here; the absolute value absorbs the
/// sign. Range checks belong to [`crate::site::SiteConfig::check_submission`].
pub fn deviation(diameter1: f64, diameter2: f64) -> f64 {
    let diff = (diameter1 - diameter2).abs();
    if !diff.is_finite() {
        return diff;
    }
    // The fixed-precision formatter rounds the exact value correctly.
    format!("{:.2}", diff).parse().unwrap_or(diff)
}

pub fn classify(deviation: f64) -> InspectionStatus {
    if deviation <= TOLERANCE_MM {
        InspectionStatus::Pass
    } else {
        InspectionStatus::Reject
    }
}

/// Evaluate one heat. Strands with `diameter1 <= 0` were not measured and
/// produce no record; the rest come back in strand order, each carrying a copy
/// of the batch fields and the submission time.
pub fn evaluate(
    batch: &BatchFields,
    measurements: &[MeasurementInput; STRAND_COUNT],
    at: NaiveDateTime,
) -> Vec<InspectionRecord> {
    let mut ordered: Vec<&MeasurementInput> = measurements.iter().collect();
    ordered.sort_by_key(|m| m.strand);

    ordered
        .into_iter()
        .filter(|m| m.is_measured())
        .map(|m| {
            let rh = deviation(m.diameter1, m.diameter2);
            let status = classify(rh);
            if status == InspectionStatus::Reject {
                warn!(
                    heat = %batch.heat_number,
                    strand = m.strand,
                    deviation = rh,
                    "strand out of tolerance"
                );
            }
            InspectionRecord {
                strand_id: InspectionRecord::strand_id(m.strand),
                diameter1: m.diameter1,
                diameter2: m.diameter2,
                deviation: rh,
                status,
                sample_info: SampleInfo::for_strand(m.strand, m.sample.as_deref()),
                batch: batch.clone(),
                timestamp: at,
            }
        })
        .collect()
}
