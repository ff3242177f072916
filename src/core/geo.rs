use crate::domain::model::{Region, UNKNOWN_COUNTY};
use rand::Rng;

/// Maximum jitter applied to each coordinate axis, in degrees (~11 km).
pub const JITTER_DEGREES: f64 = 0.1;

/// Centroid used when the county code has no entry in the table
/// (approximate geographic center of Romania).
pub const DEFAULT_CENTROID: (f64, f64) = (45.0, 25.0);

/// County full names and their codes, scanned in declaration order.
///
/// Subtitle matching is first-match-wins over this slice, so the order is the
/// tie-break when a subtitle mentions more than one county. Matching is
/// case-sensitive and diacritics-exact.
const COUNTY_CODES: &[(&str, &str)] = &[
    ("Bacău", "BC"),
    ("Alba", "AB"),
    ("Vâlcea", "VL"),
    ("Botoșani", "BT"),
    ("Timiș", "TM"),
    ("Giurgiu", "GR"),
    ("Hunedoara", "HD"),
    ("Teleorman", "TR"),
    ("Prahova", "PH"),
    ("Dâmbovița", "DB"),
    ("Argeș", "AG"),
    ("Ialomița", "IL"),
    ("Ilfov", "IF"),
    ("Gorj", "GJ"),
    ("Galați", "GL"),
    ("Brașov", "BV"),
    ("Călărași", "CL"),
    ("Satu Mare", "SM"),
    ("Arad", "AR"),
    ("Bihor", "BH"),
    ("Maramureș", "MM"),
    ("Caraș-Severin", "CS"),
    ("Sibiu", "SB"),
    ("Cluj", "CJ"),
    ("Mureș", "MS"),
    ("Neamț", "NT"),
    ("Vaslui", "VS"),
    ("Iași", "IS"),
    ("Vrancea", "VN"),
    ("Buzău", "BZ"),
    ("Dolj", "DJ"),
    ("Olt", "OT"),
    ("Mehedinți", "MH"),
    ("Harghita", "HR"),
    ("Covasna", "CV"),
    ("Bistrița-Năsăud", "BN"),
    ("Sălaj", "SJ"),
    ("Suceava", "SV"),
    ("București", "B"),
];

/// Returns the code of the first county whose name appears in `subtitle`,
/// or [`UNKNOWN_COUNTY`] when none does.
pub fn county_from_subtitle(subtitle: &str) -> &'static str {
    COUNTY_CODES
        .iter()
        .find(|(name, _)| subtitle.contains(name))
        .map(|(_, code)| *code)
        .unwrap_or(UNKNOWN_COUNTY)
}

/// Maps a county code to its historical region.
///
/// GL, BV and the UNKNOWN sentinel have no entry in the source mapping and
/// fall back to Muntenia.
pub fn region_for_county(county: &str) -> Region {
    match county {
        "B" | "IF" | "IL" | "CL" | "GR" | "TR" | "PH" | "DB" | "AG" | "BZ" | "VN" => {
            Region::Muntenia
        }
        "IS" | "VS" | "BC" | "NT" | "BT" | "SV" => Region::Moldova,
        "DJ" | "OT" | "MH" | "GJ" | "VL" => Region::Oltenia,
        "CJ" | "AB" | "SB" | "MS" | "BN" | "SJ" | "HR" | "CV" => Region::Transilvania,
        "AR" | "TM" | "CS" => Region::Banat,
        "BH" | "SM" => Region::Crisana,
        "MM" => Region::Maramures,
        _ => Region::Muntenia,
    }
}

/// Approximate centroid of a county, keyed by county code.
pub fn county_centroid(county: &str) -> (f64, f64) {
    match county {
        "BC" => (46.5679, 26.9139),
        "AB" => (46.0736, 23.5805),
        "VL" => (45.1000, 24.3833),
        "BT" => (47.7500, 26.6667),
        "TM" => (45.7472, 21.2087),
        "GR" => (43.9000, 25.9667),
        "HD" => (45.7667, 22.9000),
        "TR" => (44.0000, 25.0000),
        "PH" => (45.0000, 26.0000),
        "DB" => (44.9167, 25.4500),
        "AG" => (44.9167, 24.9167),
        "IL" => (44.5000, 27.0000),
        "IF" => (44.5000, 26.0000),
        "GJ" => (45.0333, 23.2833),
        "GL" => (45.4333, 28.0333),
        "BV" => (45.6500, 25.6000),
        "CL" => (44.4333, 24.3667),
        "SM" => (47.7833, 22.8833),
        "AR" => (46.1833, 21.3167),
        "BH" => (47.0667, 21.9167),
        "MM" => (47.6667, 23.5833),
        "CS" => (45.4167, 22.2167),
        "SB" => (45.8000, 24.1500),
        "CJ" => (46.7667, 23.6000),
        "MS" => (46.5500, 24.5667),
        "NT" => (46.9167, 26.3333),
        "VS" => (46.6333, 27.7333),
        "IS" => (47.1667, 27.6000),
        "VN" => (45.7000, 27.0667),
        "BZ" => (45.1500, 26.8333),
        "DJ" => (44.3167, 23.8000),
        "OT" => (44.2500, 24.5000),
        "MH" => (44.6333, 22.6500),
        "HR" => (46.3500, 25.8000),
        "CV" => (45.8500, 26.1833),
        "BN" => (47.1333, 24.4833),
        "SJ" => (47.2000, 23.0500),
        "SV" => (47.6500, 26.2500),
        "B" => (44.4268, 26.1025),
        _ => DEFAULT_CENTROID,
    }
}

/// Synthesizes approximate coordinates for a county: its centroid plus an
/// independent uniform jitter in `[-JITTER_DEGREES, +JITTER_DEGREES]` on each
/// axis, so co-located entries do not collapse onto one point.
pub fn synthesize_coordinates<R: Rng + ?Sized>(county: &str, rng: &mut R) -> (f64, f64) {
    let (base_lat, base_lng) = county_centroid(county);
    let lat = base_lat + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES);
    let lng = base_lng + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES);
    (lat, lng)
}
