//! End-to-end prescribing flow over the demo fixtures.

use proptest::prelude::*;
use rx_assist_services::rxnorm::parse_drug_response;
use rx_assist_services::{
    FixtureCatalog, FixturePatients, OverrideRequest, PatientDirectory, PrescribingService,
    ServiceError,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn service() -> PrescribingService<FixturePatients, FixtureCatalog> {
    init_tracing();
    PrescribingService::new(FixturePatients::new(), FixtureCatalog::new())
}

#[test]
fn test_search_then_check_each_patient() {
    let service = service();
    let candidates = service.search_medications("amoxicillin").unwrap();
    assert_eq!(candidates.len(), 3);

    let chosen = &candidates[1];
    assert_eq!(chosen.name, "Amoxicillin 500mg capsule");
    assert_eq!(chosen.common_dosing, ["500mg TID", "500mg BID"]);

    // Sarah Johnson: severe penicillin allergy
    let response = service.check_allergy("patient-001", &chosen.name).unwrap();
    let alert = response.alert.unwrap();
    assert!(alert.blocked);
    assert_eq!(alert.title, "CRITICAL: Patient allergic to Penicillin");

    // Emily Rodriguez: no allergies
    let response = service.check_allergy("patient-003", &chosen.name).unwrap();
    assert!(!response.has_conflict);

    assert_eq!(service.default_duration(&chosen.name).default_duration, 10);
}

#[test]
fn test_codeine_allergy_advisory_for_opioids() {
    let service = service();
    let candidates = service.search_medications("hydrocodone").unwrap();

    let response = service.check_allergy("patient-004", &candidates[0].name).unwrap();
    let alert = response.alert.unwrap();

    assert!(!alert.blocked);
    assert!(alert.is_cross_reactive);
    assert_eq!(alert.title, "Warning: Patient allergic to Codeine");
    assert_eq!(
        alert.message,
        "Hydrocodone/APAP 5/325mg tablet is cross-reactive with Codeine. \
         Patient has documented moderate allergy with reaction: Nausea and vomiting."
    );
}

#[test]
fn test_mild_aspirin_allergy_direct_match() {
    let service = service();
    let response = service.check_allergy("patient-002", "Aspirin 81mg tablet").unwrap();
    let alert = response.alert.unwrap();

    assert!(!alert.blocked);
    assert!(!alert.is_cross_reactive);
    assert_eq!(
        alert.message,
        "Patient has documented mild allergy to Aspirin with reaction: Hives."
    );
}

#[test]
fn test_response_json_shape() {
    let service = service();
    let response = service.check_allergy("patient-001", "Bactrim DS tablet").unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["hasConflict"], true);
    assert_eq!(json["alert"]["blocked"], false);
    assert_eq!(json["alert"]["allergen"], "Sulfa");
    assert_eq!(json["alert"]["medicationName"], "Bactrim DS tablet");

    let none = service.check_allergy("patient-005", "Bactrim DS tablet").unwrap();
    let json = serde_json::to_value(&none).unwrap();
    assert_eq!(json["hasConflict"], false);
    assert!(json["alert"].is_null());

    let duration = serde_json::to_value(service.default_duration("Prednisone 5mg tablet")).unwrap();
    assert_eq!(duration, serde_json::json!({"defaultDuration": 7}));
}

#[test]
fn test_patient_lookups() {
    let service = service();

    assert_eq!(service.patients().len(), 5);
    assert_eq!(service.patient_allergies("patient-001").unwrap().len(), 2);
    assert_eq!(service.patient_medications("patient-005").unwrap().len(), 0);
    assert!(matches!(
        service.patient_medications("nobody"),
        Err(ServiceError::PatientNotFound(_))
    ));
}

#[test]
fn test_override_log_entry_json() {
    let service = service();
    let entry = service.record_override(OverrideRequest {
        patient_id: "patient-001".into(),
        medication_name: "Bactrim DS tablet".into(),
        allergen: "Sulfa".into(),
        severity: "moderate".into(),
        justification: "No alternative for resistant UTI".into(),
        prescribed_at: Some("2026-10-17T09:30:00+00:00".into()),
    });
    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["patientId"], "patient-001");
    assert_eq!(json["prescribedAt"], "2026-10-17T09:30:00+00:00");
    assert!(json["acknowledgedAt"].as_str().is_some());
    assert!(chrono::DateTime::parse_from_rfc3339(&entry.acknowledged_at).is_ok());
}

#[test]
fn test_rxnorm_concepts_flow_through_dosing() {
    let body = r#"{"drugGroup":{"conceptGroup":[
        {"tty":"SCD","conceptProperties":[
            {"rxcui":"308182","name":"Amoxicillin 250 MG Oral Capsule"},
            {"rxcui":"314076","name":"Lisinopril 10 MG Oral Tablet"}
        ]}
    ]}}"#;
    let concepts = parse_drug_response(body).unwrap();
    let candidates: Vec<_> = concepts.iter().map(|c| c.to_candidate()).collect();

    assert_eq!(candidates[0].common_dosing, ["250mg TID", "250mg BID"]);
    assert_eq!(candidates[1].common_dosing, ["10mg daily"]);

    let service = service();
    let response = service.check_allergy("patient-001", &candidates[0].name).unwrap();
    assert!(response.alert.unwrap().blocked);
}

#[test]
fn test_malformed_rxnorm_body() {
    init_tracing();
    assert!(matches!(
        parse_drug_response("<html>502</html>"),
        Err(ServiceError::MalformedResponse(_))
    ));
}

proptest! {
    #[test]
    fn prop_short_queries_rejected(query in "\\s{0,3}[a-z]{0,2}\\s{0,3}") {
        let service = PrescribingService::new(FixturePatients::new(), FixtureCatalog::new());
        prop_assert!(matches!(
            service.search_medications(&query),
            Err(ServiceError::InvalidQuery(_))
        ));
    }

    #[test]
    fn prop_unknown_patients_not_found(id in "[a-z]{1,12}") {
        let directory = FixturePatients::new();
        prop_assume!(directory.find_patient(&id).is_none());

        let service = PrescribingService::new(directory, FixtureCatalog::new());
        prop_assert!(matches!(
            service.check_allergy(&id, "Amoxicillin"),
            Err(ServiceError::PatientNotFound(_))
        ));
    }
}
