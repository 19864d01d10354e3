//! Allergen classes and the medication names known to cross-react with them.

/// Lowercase allergen class → lowercase medication substrings.
///
/// Order within a class carries no priority.
pub static CROSS_REACTIVITY: &[(&str, &[&str])] = &[
    (
        "penicillin",
        &[
            "amoxicillin",
            "ampicillin",
            "penicillin",
            "piperacillin",
            "nafcillin",
            "oxacillin",
            "dicloxacillin",
            "augmentin",
            "amoxicillin/clavulanate",
        ],
    ),
    (
        "sulfa",
        &[
            "sulfamethoxazole",
            "sulfasalazine",
            "bactrim",
            "septra",
            "trimethoprim/sulfamethoxazole",
        ],
    ),
    ("aspirin", &["aspirin", "acetylsalicylic acid"]),
    (
        "codeine",
        &["codeine", "hydrocodone", "oxycodone", "morphine", "tramadol"],
    ),
];

/// Medications that cross-react with a lowercase allergen class.
pub fn reactive_medications(allergen_class: &str) -> Option<&'static [&'static str]> {
    CROSS_REACTIVITY
        .iter()
        .find(|(class, _)| *class == allergen_class)
        .map(|(_, medications)| *medications)
}

/// First cross-reactive substring of `allergen_class` found in a lowercase name.
pub fn find_cross_reactive(allergen_class: &str, name_lower: &str) -> Option<&'static str> {
    reactive_medications(allergen_class)?
        .iter()
        .copied()
        .find(|reactive| name_lower.contains(reactive))
}
