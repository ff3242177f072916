use crate::domain::model::{LocationRecord, WaterType};

const PRIVATE_SIGNAL: &str = "administrat privat";
const WILD_SIGNALS: [&str; 3] = ["ape necontractate", "anpa", "sălbatic"];
const RIVER_KEYWORDS: [&str; 4] = ["râu", "râul", "pârâu", "canal"];
const POND_KEYWORDS: [&str; 2] = ["balta", "iaz"];
const LAKE_KEYWORDS: [&str; 3] = ["lac", "acumulare", "baraj"];

/// Classifies a catalog entry into one of the four water-type tags.
///
/// The administration text is checked before any lexical cue from the name:
/// private vs. state-contracted status is the more reliable signal, name
/// keywords are the fallback for uninformative administration text. First
/// match wins and the order below must stay fixed.
pub fn classify(record: &LocationRecord) -> WaterType {
    let name = record.name.to_lowercase();
    let administrare = record.administrare.to_lowercase();

    if administrare.contains(PRIVATE_SIGNAL) {
        return WaterType::BaltiPrivate;
    }
    if WILD_SIGNALS.iter().any(|w| administrare.contains(w)) {
        return WaterType::BaltiSalbatic;
    }

    if RIVER_KEYWORDS.iter().any(|w| name.contains(w)) {
        WaterType::Rau
    } else if POND_KEYWORDS.iter().any(|w| name.contains(w)) {
        WaterType::BaltiSalbatic
    } else if LAKE_KEYWORDS.iter().any(|w| name.contains(w)) {
        WaterType::Lac
    } else {
        // Uninformative name, assume a managed lake.
        WaterType::Lac
    }
}
