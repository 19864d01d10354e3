//! Allergy safety check for a medication about to be prescribed.
//!
//! Each allergy record is tried in the patient's order:
//! 1. Direct match: allergen inside the medication name, or the name inside
//!    the allergen (both lowercased).
//! 2. Cross-reactivity: the allergen is a known class and one of its reactive
//!    medication substrings appears in the name.
//!
//! The first record that matches produces the alert; later records are not
//! examined even if they are more severe.

mod cross_reactivity;

pub use cross_reactivity::*;

use crate::models::{AllergyAlert, AllergyRecord};

/// How a medication matched an allergy record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllergyMatch {
    Direct,
    CrossReactive { reactive: &'static str },
}

/// Match a lowercase medication name against a single record.
pub fn match_allergy(name_lower: &str, allergy: &AllergyRecord) -> Option<AllergyMatch> {
    let allergen = allergy.canonical_allergen();

    if allergen_names_overlap(&allergen, name_lower) {
        return Some(AllergyMatch::Direct);
    }

    find_cross_reactive(&allergen, name_lower)
        .map(|reactive| AllergyMatch::CrossReactive { reactive })
}

fn allergen_names_overlap(allergen: &str, name_lower: &str) -> bool {
    name_lower.contains(allergen) || allergen.contains(name_lower)
}

/// Check a medication against a patient's allergies.
///
/// Returns `None` when the list is empty or nothing matches.
pub fn check_allergy(medication_name: &str, allergies: &[AllergyRecord]) -> Option<AllergyAlert> {
    if allergies.is_empty() {
        return None;
    }

    let name_lower = medication_name.to_lowercase();

    allergies.iter().find_map(|allergy| {
        let matched = match_allergy(&name_lower, allergy)?;
        let severity = allergy.severity();

        tracing::debug!(
            medication_name,
            allergen = allergy.allergen.as_deref(),
            severity = %severity,
            kind = ?matched,
            "allergy conflict"
        );

        Some(AllergyAlert {
            blocked: severity.is_blocking(),
            allergen: allergy.display_allergen(),
            reaction: allergy.display_reaction(),
            severity,
            medication_name: medication_name.to_string(),
            is_cross_reactive: matches!(matched, AllergyMatch::CrossReactive { .. }),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AllergySeverity;

    fn penicillin_severe() -> AllergyRecord {
        AllergyRecord::new("Penicillin", "Anaphylaxis", AllergySeverity::Severe)
    }

    fn sulfa_moderate() -> AllergyRecord {
        AllergyRecord::new("Sulfa", "Rash", AllergySeverity::Moderate)
    }

    #[test]
    fn test_no_allergies() {
        assert_eq!(check_allergy("Amoxicillin 500mg capsule", &[]), None);
    }

    #[test]
    fn test_direct_match() {
        let alert = check_allergy("Penicillin VK 500mg tablet", &[penicillin_severe()]).unwrap();
        assert!(alert.blocked);
        assert_eq!(alert.allergen, "Penicillin");
        assert!(!alert.is_cross_reactive);
    }

    #[test]
    fn test_name_inside_allergen_is_direct() {
        let record = AllergyRecord::new("Codeine sulfate", "Nausea", AllergySeverity::Mild);
        let alert = check_allergy("codeine", &[record]).unwrap();
        assert!(!alert.is_cross_reactive);
        assert!(!alert.blocked);
    }

    #[test]
    fn test_cross_reactive_match() {
        let alert = check_allergy("Amoxicillin 500mg capsule", &[penicillin_severe()]).unwrap();
        assert!(alert.blocked);
        assert!(alert.is_cross_reactive);
        assert_eq!(alert.reaction, "Anaphylaxis");
        assert_eq!(alert.severity, AllergySeverity::Severe);
        assert_eq!(alert.medication_name, "Amoxicillin 500mg capsule");
    }

    #[test]
    fn test_moderate_is_advisory() {
        let alert = check_allergy("Bactrim DS tablet", &[sulfa_moderate()]).unwrap();
        assert!(!alert.blocked);
        assert!(alert.is_cross_reactive);
        assert_eq!(alert.title(), "Warning: Patient allergic to Sulfa");
    }

    #[test]
    fn test_charted_capitalisation_still_blocks() {
        let record = AllergyRecord::new("Penicillin", "Hives", AllergySeverity::from("Severe"));
        let alert = check_allergy("Penicillin VK 500mg tablet", &[record]).unwrap();

        assert!(alert.blocked);
        assert_eq!(alert.title(), "CRITICAL: Patient allergic to Penicillin");
        assert_eq!(
            alert.message(),
            "Patient has documented severe allergy to Penicillin with reaction: Hives."
        );
    }

    #[test]
    fn test_unrelated_medication() {
        assert_eq!(check_allergy("Lisinopril 10mg tablet", &[penicillin_severe()]), None);
        assert_eq!(check_allergy("Azithromycin 250mg tablet", &[penicillin_severe()]), None);
    }

    #[test]
    fn test_first_match_wins() {
        let codeine = AllergyRecord::new("Codeine", "Nausea", AllergySeverity::Mild);
        let oxycodone = AllergyRecord::new("Oxycodone", "Respiratory depression", AllergySeverity::Severe);

        let alert = check_allergy("Oxycodone 5mg tablet", &[codeine, oxycodone]).unwrap();
        assert_eq!(alert.allergen, "Codeine");
        assert!(!alert.blocked);
    }

    #[test]
    fn test_match_kind() {
        let record = penicillin_severe();
        assert_eq!(match_allergy("penicillin vk", &record), Some(AllergyMatch::Direct));
        assert_eq!(
            match_allergy("ampicillin 250mg", &record),
            Some(AllergyMatch::CrossReactive { reactive: "ampicillin" })
        );
        assert_eq!(match_allergy("lisinopril", &record), None);
    }

    #[test]
    fn test_missing_fields_render_unknown() {
        let record = AllergyRecord {
            allergen: Some("Aspirin".into()),
            ..Default::default()
        };
        let alert = check_allergy("Aspirin 81mg", &[record]).unwrap();
        assert_eq!(alert.reaction, "Unknown");
        assert_eq!(alert.severity, AllergySeverity::Unknown);
        assert!(!alert.blocked);
        assert_eq!(
            alert.message(),
            "Patient has documented unknown allergy to Aspirin with reaction: Unknown."
        );
    }

    #[test]
    fn test_missing_allergen_matches_as_empty() {
        let record = AllergyRecord {
            reaction: Some("Hives".into()),
            severity: Some(AllergySeverity::Mild),
            ..Default::default()
        };
        let alert = check_allergy("Lisinopril 10mg", &[record]).unwrap();
        assert_eq!(alert.allergen, "Unknown");
        assert!(!alert.is_cross_reactive);
    }
}
