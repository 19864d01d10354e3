//! Patient records and the demo patient directory.

use rx_assist_core::models::{AllergyRecord, AllergySeverity};
use serde::{Deserialize, Serialize};

/// A patient as served to the prescribing UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Patient identifier (e.g. "patient-001")
    pub id: String,
    /// Full name
    pub name: String,
    /// Date of birth (ISO 8601)
    pub date_of_birth: String,
    /// Medical record number
    pub mrn: String,
    /// Documented allergies, in charting order
    pub allergies: Vec<AllergyRecord>,
    /// Medications the patient currently takes
    pub active_medications: Vec<ActiveMedication>,
}

/// A medication on the patient's active list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveMedication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    /// Start date (ISO 8601)
    pub started: String,
}

/// Source of patient records.
pub trait PatientDirectory {
    /// Look up a patient by id.
    fn find_patient(&self, id: &str) -> Option<Patient>;

    /// All patients, in directory order.
    fn list_patients(&self) -> Vec<Patient>;
}

/// In-memory directory seeded with the demo patients.
#[derive(Debug, Clone)]
pub struct FixturePatients {
    patients: Vec<Patient>,
}

impl Default for FixturePatients {
    fn default() -> Self {
        Self::new()
    }
}

impl FixturePatients {
    /// Create a directory with the five demo patients.
    pub fn new() -> Self {
        Self {
            patients: Self::default_patients(),
        }
    }

    /// Create a directory from explicit records.
    pub fn with_patients(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    fn default_patients() -> Vec<Patient> {
        vec![
            Patient {
                id: "patient-001".into(),
                name: "Sarah Johnson".into(),
                date_of_birth: "1985-03-15".into(),
                mrn: "MRN-10001".into(),
                allergies: vec![
                    allergy("allergy-1", "Penicillin", "Anaphylaxis", AllergySeverity::Severe, "2020-01-15"),
                    allergy("allergy-2", "Sulfa", "Rash", AllergySeverity::Moderate, "2019-06-20"),
                ],
                active_medications: vec![
                    medication("med-1", "Lisinopril", "10mg", "daily", "2023-06-15"),
                    medication("med-2", "Metformin", "500mg", "twice daily", "2022-03-10"),
                    medication("med-3", "Atorvastatin", "20mg", "at bedtime", "2023-01-05"),
                ],
            },
            Patient {
                id: "patient-002".into(),
                name: "Michael Chen".into(),
                date_of_birth: "1972-08-22".into(),
                mrn: "MRN-10002".into(),
                allergies: vec![allergy("allergy-3", "Aspirin", "Hives", AllergySeverity::Mild, "2018-04-10")],
                active_medications: vec![medication(
                    "med-4",
                    "Omeprazole",
                    "20mg",
                    "daily before breakfast",
                    "2024-01-20",
                )],
            },
            Patient {
                id: "patient-003".into(),
                name: "Emily Rodriguez".into(),
                date_of_birth: "1990-11-08".into(),
                mrn: "MRN-10003".into(),
                allergies: vec![],
                active_medications: vec![medication(
                    "med-5",
                    "Albuterol inhaler",
                    "90mcg",
                    "as needed",
                    "2023-09-01",
                )],
            },
            Patient {
                id: "patient-004".into(),
                name: "James Williams".into(),
                date_of_birth: "1968-05-30".into(),
                mrn: "MRN-10004".into(),
                allergies: vec![
                    allergy(
                        "allergy-4",
                        "Codeine",
                        "Nausea and vomiting",
                        AllergySeverity::Moderate,
                        "2015-08-22",
                    ),
                    allergy("allergy-5", "Latex", "Contact dermatitis", AllergySeverity::Mild, "2010-03-15"),
                ],
                active_medications: vec![
                    medication("med-6", "Amlodipine", "5mg", "daily", "2021-11-30"),
                    medication("med-7", "Gabapentin", "300mg", "three times daily", "2023-04-15"),
                ],
            },
            Patient {
                id: "patient-005".into(),
                name: "Maria Garcia".into(),
                date_of_birth: "1995-01-17".into(),
                mrn: "MRN-10005".into(),
                allergies: vec![],
                active_medications: vec![],
            },
        ]
    }
}

impl PatientDirectory for FixturePatients {
    fn find_patient(&self, id: &str) -> Option<Patient> {
        self.patients.iter().find(|p| p.id == id).cloned()
    }

    fn list_patients(&self) -> Vec<Patient> {
        self.patients.clone()
    }
}

fn allergy(
    id: &str,
    allergen: &str,
    reaction: &str,
    severity: AllergySeverity,
    documented: &str,
) -> AllergyRecord {
    AllergyRecord {
        id: Some(id.into()),
        documented: Some(documented.into()),
        ..AllergyRecord::new(allergen, reaction, severity)
    }
}

fn medication(id: &str, name: &str, dosage: &str, frequency: &str, started: &str) -> ActiveMedication {
    ActiveMedication {
        id: id.into(),
        name: name.into(),
        dosage: dosage.into(),
        frequency: frequency.into(),
        started: started.into(),
    }
}
