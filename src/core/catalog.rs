use crate::domain::model::LocationRecord;
use crate::utils::error::Result;

/// The embedded catalog: 619 water bodies, kept as a data resource rather
/// than code. Entries stay in file order end to end.
pub const CATALOG_JSON: &str = include_str!("../../data/locations.json");

pub fn load() -> Result<Vec<LocationRecord>> {
    let records = serde_json::from_str(CATALOG_JSON)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses_completely() {
        let records = load().unwrap();
        assert_eq!(records.len(), 619);
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let records = load().unwrap();
        assert_eq!(records[0].name, "Acumulare Agrement");
        assert_eq!(records[0].subtitle, "Lac în județul Bacău");
    }

    #[test]
    fn test_duplicate_entries_are_kept() {
        let records = load().unwrap();
        let robesti = records
            .iter()
            .filter(|r| r.name == "Valea Robești")
            .count();
        assert_eq!(robesti, 2);
    }

    #[test]
    fn test_no_record_is_missing_a_field() {
        for record in load().unwrap() {
            assert!(!record.name.is_empty());
            assert!(!record.subtitle.is_empty());
            assert!(!record.administrare.is_empty());
        }
    }
}
