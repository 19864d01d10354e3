//! Rx-Assist Core Library
//!
//! Prescribing-time safety rules for the clinical prescribing assistant.
//!
//! # Architecture
//!
//! ```text
//!              medication name (free text)
//!                          │
//!          ┌───────────────┴────────────────┐
//!          ▼                                ▼
//!   Dosing Inference                 Allergy Safety Check
//!   identify drug key                per allergy record, in order:
//!   extract strength                   direct name match
//!   strength → dosing                  cross-reactivity table
//!   class → duration                 first match → AllergyAlert
//!          │                                │
//!          └───────────────┬────────────────┘
//!                          ▼
//!                prescribing decision (UI)
//! ```
//!
//! Both components are pure functions over `static` reference tables. They
//! never fail: an unknown drug yields no dosing and a 30-day duration, and
//! missing allergy fields render as "Unknown".
//!
//! # Modules
//!
//! - [`dosing`]: Drug identification, strength extraction, dosing and duration
//! - [`safety`]: Allergy and cross-reactivity check
//! - [`models`]: Allergy records and alerts

pub mod dosing;
pub mod models;
pub mod safety;

// Re-export commonly used types
pub use dosing::{
    extract_strength, identify_drug, infer_default_duration_days, infer_dosing, DrugClass,
    DrugReference, Strength,
};
pub use models::{AlertPayload, AllergyAlert, AllergyRecord, AllergySeverity};
pub use safety::check_allergy;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// Main API Object
// =========================================================================

/// Stateless entry point for host applications.
#[derive(uniffi::Object)]
pub struct PrescribingCore;

#[uniffi::export]
impl PrescribingCore {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self)
    }

    /// Common dosing instructions for a medication name.
    pub fn common_dosing(&self, medication_name: String) -> Vec<String> {
        dosing::infer_dosing(&medication_name)
    }

    /// Default prescription length in days.
    pub fn default_duration_days(&self, medication_name: String) -> u32 {
        dosing::infer_default_duration_days(&medication_name)
    }

    /// Check a medication against the patient's allergies.
    pub fn check_allergy(
        &self,
        medication_name: String,
        allergies: Vec<FfiAllergyRecord>,
    ) -> Option<FfiAllergyAlert> {
        let records: Vec<AllergyRecord> = allergies.into_iter().map(|a| a.into()).collect();
        safety::check_allergy(&medication_name, &records).map(|alert| alert.into())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe allergy record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAllergyRecord {
    pub allergen: Option<String>,
    pub reaction: Option<String>,
    pub severity: Option<String>,
}

impl From<FfiAllergyRecord> for AllergyRecord {
    fn from(record: FfiAllergyRecord) -> Self {
        AllergyRecord {
            id: None,
            allergen: record.allergen,
            reaction: record.reaction,
            severity: record.severity.map(AllergySeverity::from),
            documented: None,
        }
    }
}

/// FFI-safe allergy alert with display text rendered.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAllergyAlert {
    pub blocked: bool,
    pub severity: String,
    pub title: String,
    pub message: String,
    pub allergen: String,
    pub reaction: String,
    pub medication_name: String,
    pub is_cross_reactive: bool,
}

impl From<AllergyAlert> for FfiAllergyAlert {
    fn from(alert: AllergyAlert) -> Self {
        let payload = alert.to_payload();
        Self {
            blocked: payload.blocked,
            severity: payload.severity,
            title: payload.title,
            message: payload.message,
            allergen: payload.allergen,
            reaction: payload.reaction,
            medication_name: payload.medication_name,
            is_cross_reactive: payload.is_cross_reactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_check_allergy() {
        let core = PrescribingCore::new();
        let alert = core
            .check_allergy(
                "Amoxicillin 500mg capsule".into(),
                vec![FfiAllergyRecord {
                    allergen: Some("Penicillin".into()),
                    reaction: Some("Anaphylaxis".into()),
                    severity: Some("severe".into()),
                }],
            )
            .unwrap();

        assert!(alert.blocked);
        assert!(alert.is_cross_reactive);
        assert_eq!(alert.title, "CRITICAL: Patient allergic to Penicillin");
    }

    #[test]
    fn test_ffi_no_allergies() {
        let core = PrescribingCore::new();
        assert!(core.check_allergy("Amoxicillin".into(), vec![]).is_none());
    }

    #[test]
    fn test_ffi_dosing() {
        let core = PrescribingCore::new();
        assert_eq!(core.common_dosing("Amoxicillin 875 MG Oral Tablet".into()), ["875mg BID"]);
        assert_eq!(core.default_duration_days("Prednisone 10 MG".into()), 7);
    }
}
