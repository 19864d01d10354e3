//! Static dosing reference table.
//!
//! Entries are scanned in declaration order when identifying a drug, so a
//! key listed earlier wins over a later key that is also a substring of the
//! same name (e.g. "amoxicillin" before "amoxicillin/clavulanate").

/// Standard dosing for one canonical drug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrugReference {
    /// Lowercase canonical drug name
    pub key: &'static str,
    /// Strength token → dosing instructions, in preference order
    pub strengths: &'static [(&'static str, &'static [&'static str])],
    /// Fallback instructions when the strength is absent or unlisted
    pub default: &'static [&'static str],
}

impl DrugReference {
    /// Instructions for a strength token, falling back to `default`.
    pub fn dosing_for(&self, strength: Option<&str>) -> &'static [&'static str] {
        strength
            .and_then(|token| {
                self.strengths
                    .iter()
                    .find(|(listed, _)| *listed == token)
                    .map(|(_, instructions)| *instructions)
            })
            .unwrap_or(self.default)
    }
}

macro_rules! drug {
    ($key:literal { $($strength:literal => [$($s:literal),+ $(,)?],)* default => [$($d:literal),+ $(,)?] $(,)? }) => {
        DrugReference {
            key: $key,
            strengths: &[$(($strength, &[$($s),+])),*],
            default: &[$($d),+],
        }
    };
}

/// Known drugs in lookup order.
pub static DRUG_REFERENCE: &[DrugReference] = &[
    drug!("amoxicillin" {
        "250" => ["250mg TID", "250mg BID"],
        "500" => ["500mg TID", "500mg BID"],
        "875" => ["875mg BID"],
        default => ["500mg TID", "500mg BID"],
    }),
    drug!("lisinopril" {
        "5" => ["5mg daily"],
        "10" => ["10mg daily"],
        "20" => ["20mg daily"],
        "40" => ["40mg daily"],
        default => ["10mg daily"],
    }),
    drug!("metformin" {
        "500" => ["500mg BID", "500mg daily"],
        "850" => ["850mg BID"],
        "1000" => ["1000mg BID"],
        default => ["500mg BID"],
    }),
    drug!("atorvastatin" {
        "10" => ["10mg daily at bedtime"],
        "20" => ["20mg daily at bedtime"],
        "40" => ["40mg daily at bedtime"],
        "80" => ["80mg daily at bedtime"],
        default => ["20mg daily at bedtime"],
    }),
    drug!("omeprazole" {
        "20" => ["20mg daily before breakfast"],
        "40" => ["40mg daily before breakfast"],
        default => ["20mg daily before breakfast"],
    }),
    drug!("amlodipine" {
        "5" => ["5mg daily"],
        "10" => ["10mg daily"],
        default => ["5mg daily"],
    }),
    drug!("gabapentin" {
        "100" => ["100mg TID"],
        "300" => ["300mg TID"],
        "400" => ["400mg TID"],
        default => ["300mg TID"],
    }),
    drug!("prednisone" {
        default => ["5mg daily", "Taper per instructions"],
    }),
    drug!("azithromycin" {
        "250" => ["500mg day 1, then 250mg days 2-5"],
        default => ["500mg day 1, then 250mg days 2-5"],
    }),
    drug!("ciprofloxacin" {
        "250" => ["250mg BID"],
        "500" => ["500mg BID"],
        "750" => ["750mg BID"],
        default => ["500mg BID"],
    }),
    drug!("albuterol" {
        default => ["2 puffs every 4-6 hours PRN"],
    }),
    drug!("hydrocodone" {
        default => ["1-2 tablets every 4-6 hours PRN"],
    }),
    drug!("oxycodone" {
        "5" => ["5mg every 4-6 hours PRN"],
        "10" => ["10mg every 4-6 hours PRN"],
        default => ["5mg every 4-6 hours PRN"],
    }),
    drug!("levothyroxine" {
        default => ["Take daily on empty stomach"],
    }),
    drug!("losartan" {
        "25" => ["25mg daily"],
        "50" => ["50mg daily"],
        "100" => ["100mg daily"],
        default => ["50mg daily"],
    }),
    drug!("furosemide" {
        "20" => ["20mg daily", "20mg BID"],
        "40" => ["40mg daily", "40mg BID"],
        default => ["40mg daily"],
    }),
    drug!("sertraline" {
        "25" => ["25mg daily"],
        "50" => ["50mg daily"],
        "100" => ["100mg daily"],
        default => ["50mg daily"],
    }),
    drug!("escitalopram" {
        "5" => ["5mg daily"],
        "10" => ["10mg daily"],
        "20" => ["20mg daily"],
        default => ["10mg daily"],
    }),
    drug!("montelukast" {
        "10" => ["10mg daily at bedtime"],
        default => ["10mg daily at bedtime"],
    }),
    drug!("pantoprazole" {
        "20" => ["20mg daily before breakfast"],
        "40" => ["40mg daily before breakfast"],
        default => ["40mg daily before breakfast"],
    }),
    drug!("ibuprofen" {
        "200" => ["200-400mg every 4-6 hours PRN"],
        "400" => ["400mg every 4-6 hours PRN"],
        "600" => ["600mg TID with food"],
        "800" => ["800mg TID with food"],
        default => ["400mg every 4-6 hours PRN"],
    }),
    drug!("acetaminophen" {
        "325" => ["325-650mg every 4-6 hours PRN"],
        "500" => ["500-1000mg every 4-6 hours PRN"],
        default => ["500-1000mg every 4-6 hours PRN"],
    }),
    drug!("metoprolol" {
        "25" => ["25mg BID"],
        "50" => ["50mg BID"],
        "100" => ["100mg BID"],
        default => ["50mg BID"],
    }),
    drug!("carvedilol" {
        "3.125" => ["3.125mg BID"],
        "6.25" => ["6.25mg BID"],
        "12.5" => ["12.5mg BID"],
        "25" => ["25mg BID"],
        default => ["6.25mg BID"],
    }),
    drug!("warfarin" {
        default => ["Per INR monitoring"],
    }),
    drug!("apixaban" {
        "2.5" => ["2.5mg BID"],
        "5" => ["5mg BID"],
        default => ["5mg BID"],
    }),
    drug!("clopidogrel" {
        "75" => ["75mg daily"],
        default => ["75mg daily"],
    }),
    drug!("simvastatin" {
        "10" => ["10mg daily at bedtime"],
        "20" => ["20mg daily at bedtime"],
        "40" => ["40mg daily at bedtime"],
        default => ["20mg daily at bedtime"],
    }),
    drug!("pravastatin" {
        "10" => ["10mg daily at bedtime"],
        "20" => ["20mg daily at bedtime"],
        "40" => ["40mg daily at bedtime"],
        default => ["40mg daily at bedtime"],
    }),
    drug!("rosuvastatin" {
        "5" => ["5mg daily"],
        "10" => ["10mg daily"],
        "20" => ["20mg daily"],
        default => ["10mg daily"],
    }),
    drug!("tramadol" {
        "50" => ["50mg every 4-6 hours PRN"],
        default => ["50mg every 4-6 hours PRN"],
    }),
    drug!("cyclobenzaprine" {
        "5" => ["5mg TID"],
        "10" => ["10mg TID"],
        default => ["10mg TID"],
    }),
    drug!("meloxicam" {
        "7.5" => ["7.5mg daily"],
        "15" => ["15mg daily"],
        default => ["15mg daily"],
    }),
    drug!("naproxen" {
        "250" => ["250mg BID"],
        "500" => ["500mg BID"],
        default => ["500mg BID"],
    }),
    drug!("doxycycline" {
        "100" => ["100mg BID", "100mg daily"],
        default => ["100mg BID"],
    }),
    drug!("cephalexin" {
        "250" => ["250mg QID"],
        "500" => ["500mg QID", "500mg BID"],
        default => ["500mg QID"],
    }),
    drug!("augmentin" {
        "500" => ["500/125mg BID"],
        "875" => ["875/125mg BID"],
        default => ["875/125mg BID"],
    }),
    drug!("amoxicillin/clavulanate" {
        "500" => ["500/125mg BID"],
        "875" => ["875/125mg BID"],
        default => ["875/125mg BID"],
    }),
    drug!("fluticasone" {
        default => ["1-2 sprays each nostril daily"],
    }),
    drug!("cetirizine" {
        "10" => ["10mg daily"],
        default => ["10mg daily"],
    }),
    drug!("loratadine" {
        "10" => ["10mg daily"],
        default => ["10mg daily"],
    }),
    drug!("diphenhydramine" {
        "25" => ["25-50mg at bedtime PRN"],
        "50" => ["50mg at bedtime PRN"],
        default => ["25-50mg at bedtime PRN"],
    }),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_entry_has_default() {
        for entry in DRUG_REFERENCE {
            assert!(!entry.default.is_empty(), "{} has no default", entry.key);
        }
    }

    #[test]
    fn test_keys_are_lowercase_and_unique() {
        let mut seen = HashSet::new();
        for entry in DRUG_REFERENCE {
            assert_eq!(entry.key, entry.key.to_lowercase());
            assert!(seen.insert(entry.key), "duplicate key {}", entry.key);
        }
        assert_eq!(seen.len(), 42);
    }

    #[test]
    fn test_dosing_for_strength() {
        let amoxicillin = &DRUG_REFERENCE[0];
        assert_eq!(amoxicillin.dosing_for(Some("875")), ["875mg BID"]);
        assert_eq!(amoxicillin.dosing_for(Some("125")), ["500mg TID", "500mg BID"]);
        assert_eq!(amoxicillin.dosing_for(None), ["500mg TID", "500mg BID"]);
    }
}
