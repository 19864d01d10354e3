//! Allergy alert produced by the safety checker.

use serde::{Deserialize, Serialize};

use super::AllergySeverity;

/// Result of a positive allergy check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllergyAlert {
    /// True only for severe allergies; prescribing must stop
    pub blocked: bool,
    /// Allergen as documented ("Unknown" when missing)
    pub allergen: String,
    /// Reaction as documented ("Unknown" when missing)
    pub reaction: String,
    /// Documented severity
    pub severity: AllergySeverity,
    /// Medication name as the prescriber entered it
    pub medication_name: String,
    /// Matched through the cross-reactivity table rather than by name
    pub is_cross_reactive: bool,
}

impl AllergyAlert {
    /// Headline shown above the alert.
    pub fn title(&self) -> String {
        if self.severity == AllergySeverity::Severe {
            format!("CRITICAL: Patient allergic to {}", self.allergen)
        } else {
            format!("Warning: Patient allergic to {}", self.allergen)
        }
    }

    /// Body text explaining the match.
    pub fn message(&self) -> String {
        if self.is_cross_reactive {
            format!(
                "{} is cross-reactive with {}. Patient has documented {} allergy with reaction: {}.",
                self.medication_name, self.allergen, self.severity, self.reaction
            )
        } else {
            format!(
                "Patient has documented {} allergy to {} with reaction: {}.",
                self.severity, self.allergen, self.reaction
            )
        }
    }

    /// Build the JSON view with the derived display fields.
    pub fn to_payload(&self) -> AlertPayload {
        self.into()
    }
}

/// Wire shape of an alert, camelCase with `title` and `message` rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPayload {
    pub blocked: bool,
    pub severity: String,
    pub title: String,
    pub message: String,
    pub allergen: String,
    pub reaction: String,
    pub medication_name: String,
    pub is_cross_reactive: bool,
}

impl From<&AllergyAlert> for AlertPayload {
    fn from(alert: &AllergyAlert) -> Self {
        Self {
            blocked: alert.blocked,
            severity: alert.severity.to_string(),
            title: alert.title(),
            message: alert.message(),
            allergen: alert.allergen.clone(),
            reaction: alert.reaction.clone(),
            medication_name: alert.medication_name.clone(),
            is_cross_reactive: alert.is_cross_reactive,
        }
    }
}
