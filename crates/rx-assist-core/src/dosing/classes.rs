//! Drug classes used to pick a default prescription duration.

use serde::{Deserialize, Serialize};

/// Antibiotic course length in days.
pub const ANTIBIOTIC_DURATION_DAYS: u32 = 10;

/// Short steroid burst length in days.
pub const SHORT_TERM_STEROID_DURATION_DAYS: u32 = 7;

/// As-needed supply length in days.
pub const PRN_DURATION_DAYS: u32 = 30;

/// Maintenance supply for chronic or unrecognised medications.
pub const CHRONIC_DURATION_DAYS: u32 = 30;

pub static ANTIBIOTICS: &[&str] = &[
    "amoxicillin",
    "azithromycin",
    "ciprofloxacin",
    "doxycycline",
    "cephalexin",
    "augmentin",
    "amoxicillin/clavulanate",
];

pub static SHORT_TERM_STEROIDS: &[&str] = &["prednisone"];

pub static PRN_MEDICATIONS: &[&str] = &[
    "hydrocodone",
    "oxycodone",
    "ibuprofen",
    "acetaminophen",
    "albuterol",
    "tramadol",
];

/// Duration class of a canonical drug key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrugClass {
    Antibiotic,
    ShortTermSteroid,
    /// Taken as needed (PRN)
    AsNeeded,
    /// Everything else, including unidentified drugs
    Chronic,
}

impl DrugClass {
    /// Classify a canonical key. `None` (unidentified) is chronic.
    pub fn of(key: Option<&str>) -> Self {
        match key {
            Some(k) if in_set(ANTIBIOTICS, k) => DrugClass::Antibiotic,
            Some(k) if in_set(SHORT_TERM_STEROIDS, k) => DrugClass::ShortTermSteroid,
            Some(k) if in_set(PRN_MEDICATIONS, k) => DrugClass::AsNeeded,
            _ => DrugClass::Chronic,
        }
    }

    /// Default prescription length in days.
    pub fn default_duration_days(self) -> u32 {
        match self {
            DrugClass::Antibiotic => ANTIBIOTIC_DURATION_DAYS,
            DrugClass::ShortTermSteroid => SHORT_TERM_STEROID_DURATION_DAYS,
            DrugClass::AsNeeded => PRN_DURATION_DAYS,
            DrugClass::Chronic => CHRONIC_DURATION_DAYS,
        }
    }
}

fn in_set(set: &[&str], key: &str) -> bool {
    set.iter().any(|member| *member == key)
}
