//! Prescribing service: joins patient lookup, catalog search and the core
//! safety rules into the response shapes the UI consumes.

use rx_assist_core::dosing::{infer_default_duration_days, infer_dosing};
use rx_assist_core::models::{AlertPayload, AllergyAlert, AllergyRecord};
use rx_assist_core::safety::check_allergy;
use serde::{Deserialize, Serialize};

use crate::catalog::{MedicationCandidate, MedicationCatalog};
use crate::patients::{ActiveMedication, Patient, PatientDirectory};
use crate::{ServiceError, ServiceResult};

/// Minimum trimmed length of a medication search query.
pub const MIN_QUERY_LEN: usize = 3;

/// Result of an allergy check for a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergyCheckResponse {
    pub has_conflict: bool,
    pub alert: Option<AlertPayload>,
}

impl From<Option<AllergyAlert>> for AllergyCheckResponse {
    fn from(alert: Option<AllergyAlert>) -> Self {
        Self {
            has_conflict: alert.is_some(),
            alert: alert.as_ref().map(AlertPayload::from),
        }
    }
}

/// Default prescription length for a medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationResponse {
    pub default_duration: u32,
}

/// Common dosing instructions for a medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosingResponse {
    pub medication_name: String,
    pub common_dosing: Vec<String>,
}

/// A prescriber's decision to proceed despite an allergy alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideRequest {
    pub patient_id: String,
    pub medication_name: String,
    pub allergen: String,
    pub severity: String,
    pub justification: String,
    /// When the prescription was written; defaults to acknowledgement time
    #[serde(default)]
    pub prescribed_at: Option<String>,
}

impl OverrideRequest {
    /// Build a request from the alert the prescriber acknowledged.
    pub fn for_alert(patient_id: &str, alert: &AllergyAlert, justification: &str) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            medication_name: alert.medication_name.clone(),
            allergen: alert.allergen.clone(),
            severity: alert.severity.to_string(),
            justification: justification.to_string(),
            prescribed_at: None,
        }
    }
}

/// Audit entry for an acknowledged allergy override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideLogEntry {
    /// Local UUID
    pub id: String,
    pub patient_id: String,
    pub medication_name: String,
    pub allergen: String,
    pub severity: String,
    pub justification: String,
    /// RFC 3339 timestamp of the acknowledgement
    pub acknowledged_at: String,
    /// RFC 3339 timestamp of the prescription
    pub prescribed_at: String,
}

impl OverrideLogEntry {
    /// Stamp a request with an id and acknowledgement time.
    pub fn new(request: OverrideRequest) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id: request.patient_id,
            medication_name: request.medication_name,
            allergen: request.allergen,
            severity: request.severity,
            justification: request.justification,
            prescribed_at: request.prescribed_at.unwrap_or_else(|| now.clone()),
            acknowledged_at: now,
        }
    }
}

/// Aggregates the collaborators behind the prescribing UI.
pub struct PrescribingService<P, C> {
    patients: P,
    catalog: C,
}

impl<P: PatientDirectory, C: MedicationCatalog> PrescribingService<P, C> {
    /// Create a service over a patient directory and a medication catalog.
    pub fn new(patients: P, catalog: C) -> Self {
        Self { patients, catalog }
    }

    /// All patients.
    pub fn patients(&self) -> Vec<Patient> {
        self.patients.list_patients()
    }

    /// A single patient.
    pub fn patient(&self, patient_id: &str) -> ServiceResult<Patient> {
        self.patients.find_patient(patient_id).ok_or_else(|| {
            tracing::warn!(patient_id, "patient not found");
            ServiceError::PatientNotFound(patient_id.to_string())
        })
    }

    /// A patient's documented allergies.
    pub fn patient_allergies(&self, patient_id: &str) -> ServiceResult<Vec<AllergyRecord>> {
        Ok(self.patient(patient_id)?.allergies)
    }

    /// A patient's active medications.
    pub fn patient_medications(&self, patient_id: &str) -> ServiceResult<Vec<ActiveMedication>> {
        Ok(self.patient(patient_id)?.active_medications)
    }

    /// Search the catalog. Queries shorter than [`MIN_QUERY_LEN`] are rejected.
    pub fn search_medications(&self, query: &str) -> ServiceResult<Vec<MedicationCandidate>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Err(ServiceError::InvalidQuery(format!(
                "Query must be at least {MIN_QUERY_LEN} characters"
            )));
        }
        self.catalog.search(query)
    }

    /// Check a medication against a patient's allergies.
    pub fn check_allergy(
        &self,
        patient_id: &str,
        medication_name: &str,
    ) -> ServiceResult<AllergyCheckResponse> {
        let allergies = self.patient_allergies(patient_id)?;
        let alert = check_allergy(medication_name, &allergies);

        if let Some(alert) = &alert {
            tracing::info!(
                patient_id,
                medication_name,
                allergen = %alert.allergen,
                blocked = alert.blocked,
                "allergy alert raised"
            );
        }

        Ok(alert.into())
    }

    /// Default prescription length for a medication.
    pub fn default_duration(&self, medication_name: &str) -> DurationResponse {
        DurationResponse {
            default_duration: infer_default_duration_days(medication_name),
        }
    }

    /// Common dosing instructions for a medication.
    pub fn common_dosing(&self, medication_name: &str) -> DosingResponse {
        DosingResponse {
            medication_name: medication_name.to_string(),
            common_dosing: infer_dosing(medication_name),
        }
    }

    /// Record that a prescriber proceeded past an allergy alert.
    ///
    /// The entry is returned for the caller to store; it is not validated.
    pub fn record_override(&self, request: OverrideRequest) -> OverrideLogEntry {
        let entry = OverrideLogEntry::new(request);
        tracing::info!(
            id = %entry.id,
            patient_id = %entry.patient_id,
            medication_name = %entry.medication_name,
            allergen = %entry.allergen,
            severity = %entry.severity,
            "allergy override acknowledged"
        );
        entry
    }
}
