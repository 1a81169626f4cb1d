use std::path::Path;

use super::report::SmearRecord;

/// Fixed column header, matching the historical report files byte for byte.
pub const CSV_HEADER: &str = "Filename,Total RBCs (in millions),Sickled Cells (%),\
Normocytes (%),Target Cells (%),Anisocytosis Severity,Reticulocytes (%),Sickle Cell";

/// Render records as a CSV document (header + one row per record).
pub fn to_csv(records: &[SmearRecord]) -> String {
    let mut out = String::with_capacity(64 * (records.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for rec in records {
        out.push_str(&escape_field(&rec.filename));
        out.push(',');
        out.push_str(&format!(
            "{:.2},{:.2},{:.2},{:.2},{},{:.2},{}",
            rec.total_rbcs,
            rec.sickled_cells,
            rec.normocytes,
            rec.target_cells,
            rec.anisocytosis.as_str(),
            rec.reticulocytes,
            rec.label.as_str(),
        ));
        out.push('\n');
    }

    out
}

/// Write the CSV document to disk.
pub fn write_csv(records: &[SmearRecord], path: &Path) -> std::io::Result<()> {
    std::fs::write(path, to_csv(records))
}

/// Quote a field when it contains a comma, quote, or newline.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smear::report::{sample_record, SickleLabel};

    fn test_records(names: &[&str], label: SickleLabel) -> Vec<SmearRecord> {
        let mut rng = rand::thread_rng();
        names
            .iter()
            .map(|n| sample_record(&mut rng, n, label))
            .collect()
    }

    #[test]
    fn header_row_is_exact() {
        let csv = to_csv(&[]);
        assert_eq!(
            csv.lines().next().unwrap(),
            "Filename,Total RBCs (in millions),Sickled Cells (%),Normocytes (%),\
             Target Cells (%),Anisocytosis Severity,Reticulocytes (%),Sickle Cell"
        );
    }

    #[test]
    fn one_row_per_record() {
        let records = test_records(&["a.png", "b.jpg", "c.bmp"], SickleLabel::No);
        let csv = to_csv(&records);
        assert_eq!(csv.lines().count(), 4); // header + 3
    }

    #[test]
    fn rows_carry_filename_and_label() {
        let records = test_records(&["smear_01.png"], SickleLabel::Yes);
        let csv = to_csv(&records);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("smear_01.png,"));
        assert!(row.ends_with(",YES"));
        assert_eq!(row.split(',').count(), 8);
    }

    #[test]
    fn numeric_fields_have_two_decimals() {
        let records = test_records(&["x.png"], SickleLabel::No);
        let csv = to_csv(&records);
        let row = csv.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        for idx in [1, 2, 3, 4, 6] {
            let (_, decimals) = fields[idx].split_once('.').expect("decimal point");
            assert_eq!(decimals.len(), 2, "field {idx}: {}", fields[idx]);
        }
    }

    #[test]
    fn filename_with_comma_is_quoted() {
        let records = test_records(&["lab results, slide 1.jpg"], SickleLabel::No);
        let csv = to_csv(&records);
        assert!(csv.contains("\"lab results, slide 1.jpg\","));
    }

    #[test]
    fn quote_in_filename_is_doubled() {
        assert_eq!(escape_field("a\"b.png"), "\"a\"\"b.png\"");
        assert_eq!(escape_field("plain.png"), "plain.png");
    }

    #[test]
    fn write_csv_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features.csv");
        let records = test_records(&["a.png"], SickleLabel::No);

        write_csv(&records, &path).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, to_csv(&records));
    }
}
