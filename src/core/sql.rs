use crate::domain::model::{SeedRow, IMAGE_URL_PLACEHOLDER};

const BANNER: &str = "-- =============================================";

/// Columns of the target table, in tuple order.
const COLUMNS: &str = "name, type, county, region, latitude, longitude, subtitle, administrare, image_url";

/// Escapes a value for embedding in a single-quoted SQL string literal by
/// doubling each single quote. Nothing else is escaped.
pub fn escape(text: &str) -> String {
    text.replace('\'', "''")
}

/// Renders one parenthesized value tuple with the fixed 9-field layout:
/// name, type, county, region, latitude, longitude, subtitle, administrare,
/// image_url placeholder.
pub fn render_tuple(row: &SeedRow) -> String {
    format!(
        "('{}', '{}', '{}', '{}', {}, {}, '{}', '{}', '{}')",
        escape(&row.name),
        row.water_type,
        row.county,
        row.region,
        row.latitude,
        row.longitude,
        escape(&row.subtitle),
        escape(&row.administrare),
        IMAGE_URL_PLACEHOLDER,
    )
}

/// Renders the complete seed statement: comment banner, one `INSERT` with all
/// tuples joined by `,\n` and terminated by `;`, and a trailing count comment.
pub fn render_statement(table: &str, rows: &[SeedRow]) -> String {
    let mut sql = String::new();

    sql.push_str(BANNER);
    sql.push('\n');
    sql.push_str(&format!(
        "-- TOATE LOCATIILE DE PESCUIT ({} locatii)\n",
        rows.len()
    ));
    sql.push_str(BANNER);
    sql.push_str("\n\n");

    sql.push_str(&format!("INSERT INTO {} ({}) VALUES\n", table, COLUMNS));

    for (i, row) in rows.iter().enumerate() {
        sql.push_str(&render_tuple(row));
        if i == rows.len() - 1 {
            sql.push_str(";\n");
        } else {
            sql.push_str(",\n");
        }
    }

    sql.push_str(&format!("\n-- Total: {} locatii adaugate\n", rows.len()));
    sql
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Region, WaterType};

    fn row(name: &str) -> SeedRow {
        SeedRow {
            name: name.to_string(),
            water_type: WaterType::Lac,
            county: "NT",
            region: Region::Moldova,
            latitude: 46.9167,
            longitude: 26.3333,
            subtitle: "Lac în județul Neamț".to_string(),
            administrare: "Administrat de AJVPS NEAMȚ".to_string(),
        }
    }

    #[test]
    fn test_escape_doubles_single_quotes() {
        assert_eq!(escape("L'Example"), "L''Example");
        assert_eq!(escape("a'b'c"), "a''b''c");
        assert_eq!(escape("no quotes"), "no quotes");
    }

    #[test]
    fn test_escape_doubles_quote_count() {
        let input = "'''";
        let escaped = escape(input);
        let count = |s: &str| s.chars().filter(|&c| c == '\'').count();
        assert_eq!(count(&escaped), 2 * count(input));
    }

    #[test]
    fn test_escape_round_trips_through_sql_reader() {
        // An SQL single-quoted reader collapses '' back to '.
        let original = "Lacul lui Ion's";
        let parsed = escape(original).replace("''", "'");
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_tuple_layout() {
        let rendered = render_tuple(&row("Lac Bicaz"));
        assert_eq!(
            rendered,
            "('Lac Bicaz', 'lac', 'NT', 'moldova', 46.9167, 26.3333, \
             'Lac în județul Neamț', 'Administrat de AJVPS NEAMȚ', 'NEEDS_REAL_COORDINATES')"
        );
    }

    #[test]
    fn test_tuple_escapes_name() {
        let rendered = render_tuple(&row("L'Example"));
        assert!(rendered.starts_with("('L''Example', "));
    }

    #[test]
    fn test_statement_shape() {
        let rows = vec![row("A"), row("B"), row("C")];
        let sql = render_statement("public.fishing_locations", &rows);

        assert!(sql.starts_with(
            "-- =============================================\n\
             -- TOATE LOCATIILE DE PESCUIT (3 locatii)\n\
             -- =============================================\n\n\
             INSERT INTO public.fishing_locations (name, type, county, region, \
             latitude, longitude, subtitle, administrare, image_url) VALUES\n"
        ));
        assert!(sql.ends_with(";\n\n-- Total: 3 locatii adaugate\n"));

        // One tuple per row, separated by commas, last one terminated.
        assert_eq!(sql.matches("('").count(), 3);
        assert_eq!(sql.matches("),\n").count(), 2);
        assert_eq!(sql.matches(");").count(), 1);
    }

    #[test]
    fn test_statement_uses_given_table() {
        let sql = render_statement("staging.locations", &[row("A")]);
        assert!(sql.contains("INSERT INTO staging.locations ("));
    }
}
