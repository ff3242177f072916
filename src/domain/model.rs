use serde::Deserialize;
use std::fmt;

/// Sentinel county code for subtitles that name no known county.
pub const UNKNOWN_COUNTY: &str = "UNKNOWN";

/// Placeholder stored in the image_url column until real imagery and
/// surveyed coordinates replace the synthesized ones.
pub const IMAGE_URL_PLACEHOLDER: &str = "NEEDS_REAL_COORDINATES";

/// One catalog entry as it appears in `data/locations.json`.
///
/// Names may repeat; duplicate entries are preserved, not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub subtitle: String,
    pub administrare: String,
}

/// Coarse classification of a water body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterType {
    /// River or channel.
    Rau,
    /// Large managed lake.
    Lac,
    /// Wild or uncontracted pond.
    BaltiSalbatic,
    /// Privately managed pond.
    BaltiPrivate,
}

impl WaterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterType::Rau => "rau",
            WaterType::Lac => "lac",
            WaterType::BaltiSalbatic => "balti_salbatic",
            WaterType::BaltiPrivate => "balti_private",
        }
    }
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Historical region a county belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Muntenia,
    Moldova,
    Oltenia,
    Transilvania,
    Banat,
    Crisana,
    Maramures,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Muntenia => "muntenia",
            Region::Moldova => "moldova",
            Region::Oltenia => "oltenia",
            Region::Transilvania => "transilvania",
            Region::Banat => "banat",
            Region::Crisana => "crisana",
            Region::Maramures => "maramures",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully derived row, ready to be rendered as one SQL value tuple.
#[derive(Debug, Clone)]
pub struct SeedRow {
    pub name: String,
    pub water_type: WaterType,
    pub county: &'static str,
    pub region: Region,
    pub latitude: f64,
    pub longitude: f64,
    pub subtitle: String,
    pub administrare: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_type_tags() {
        assert_eq!(WaterType::Rau.as_str(), "rau");
        assert_eq!(WaterType::Lac.as_str(), "lac");
        assert_eq!(WaterType::BaltiSalbatic.as_str(), "balti_salbatic");
        assert_eq!(WaterType::BaltiPrivate.as_str(), "balti_private");
    }

    #[test]
    fn test_region_tags() {
        assert_eq!(Region::Muntenia.to_string(), "muntenia");
        assert_eq!(Region::Maramures.to_string(), "maramures");
    }

    #[test]
    fn test_location_record_deserialization() {
        let json = r#"{
            "name": "Acumulare Agrement",
            "subtitle": "Lac în județul Bacău",
            "administrare": "Administrat de AJVPS BACĂU"
        }"#;
        let record: LocationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Acumulare Agrement");
        assert_eq!(record.subtitle, "Lac în județul Bacău");
        assert_eq!(record.administrare, "Administrat de AJVPS BACĂU");
    }
}
