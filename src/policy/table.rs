use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimulationError};
use crate::types::PolicyTier;

/// raw city record as stored in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityPolicyRecord {
    /// display name, e.g. "São Paulo - SP"
    pub city: String,
    /// stored tier value in {0, 1, 30, 50}
    pub ltv_tier: u8,
}

/// decoded policy for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityPolicy {
    pub city: String,
    pub tier: PolicyTier,
}

/// immutable lookup table from normalized city name to its LTV policy
///
/// Loaded once at startup from the city dataset and shared read-only for the
/// rest of the process. Lookup is a case-insensitive exact match; `suggest`
/// offers substring matching for autocomplete only.
#[derive(Debug, Clone, Default)]
pub struct CityPolicyTable {
    policies: HashMap<String, CityPolicy>,
}

/// normalize a city name for matching: trimmed, lowercased
pub fn normalize_city_key(city: &str) -> String {
    city.trim().to_lowercase()
}

impl CityPolicyTable {
    /// build the table from decoded dataset records
    ///
    /// An unrecognized tier value is a dataset error and fails the whole load;
    /// a loaded table only ever contains valid tiers.
    pub fn from_records(records: Vec<CityPolicyRecord>) -> Result<Self> {
        let mut policies = HashMap::with_capacity(records.len());

        for record in records {
            let tier = PolicyTier::from_stored(record.ltv_tier).ok_or_else(|| {
                SimulationError::InvalidPolicyTier {
                    city: record.city.clone(),
                    tier: record.ltv_tier,
                }
            })?;

            policies.insert(
                normalize_city_key(&record.city),
                CityPolicy {
                    city: record.city,
                    tier,
                },
            );
        }

        Ok(Self { policies })
    }

    /// build the table from the JSON dataset shape `[{"city": ..., "ltv_tier": ...}]`
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CityPolicyRecord> =
            serde_json::from_str(json).map_err(|e| SimulationError::InvalidConfiguration {
                message: format!("city dataset parse failed: {e}"),
            })?;
        Self::from_records(records)
    }

    /// case-insensitive exact lookup
    pub fn lookup(&self, city: &str) -> Option<&CityPolicy> {
        self.policies.get(&normalize_city_key(city))
    }

    /// substring search over display names, for autocomplete suggestions
    pub fn suggest(&self, fragment: &str, limit: usize) -> Vec<&str> {
        let needle = normalize_city_key(fragment);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<&str> = self
            .policies
            .values()
            .filter(|p| normalize_city_key(&p.city).contains(&needle))
            .map(|p| p.city.as_str())
            .collect();

        matches.sort_unstable();
        matches.truncate(limit);
        matches
    }

    /// number of cities loaded
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// whether any city is loaded
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
