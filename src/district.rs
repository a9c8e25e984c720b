use log::{debug, warn};
use serde::Deserialize;

use crate::{Error, Mapping, Result};

mod areaid_format {
    use serde::{self, de::Error, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAreaId {
        Integer(i64),
        Float(f64),
        Text(String),
    }

    // Floats truncate toward zero, like `int(5.9)`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawAreaId::deserialize(deserializer)? {
            RawAreaId::Integer(n) => Ok(n),
            RawAreaId::Float(f) => {
                if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                    Ok(f.trunc() as i64)
                } else {
                    Err(D::Error::custom(format!("area id {} out of range", f)))
                }
            }
            RawAreaId::Text(s) => s.trim().parse().map_err(D::Error::custom),
        }
    }
}

/// One element of the districts endpoint response. The endpoint serves
/// `areaid` as a string; bare numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DistrictRecord {
    pub label: String,
    #[serde(rename = "areaid", deserialize_with = "areaid_format::deserialize")]
    pub area_id: i64,
}

/// Folds records into label -> area id in array order, last one wins.
pub fn into_mapping(records: Vec<DistrictRecord>) -> Mapping {
    let mut districts = Mapping::with_capacity(records.len());
    for DistrictRecord { label, area_id } in records {
        if let Some(previous) = districts.get(&label) {
            warn!(
                "district {:?} appears with area ids {} and {}, keeping {}",
                label, previous, area_id, area_id
            );
        }
        districts.insert(label, area_id);
    }

    districts
}

pub fn extract_districts(json: &str) -> Result<Mapping> {
    let records: Vec<DistrictRecord> = serde_json::from_str(json)?;
    debug!("decoded {} district records", records.len());

    if records.is_empty() {
        return Err(Error::NoMatches("districts"));
    }

    Ok(into_mapping(records))
}
