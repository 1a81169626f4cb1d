use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::scan::scan_folder;
use super::SmearError;

/// Uniform sampling ranges for the placeholder features.
const TOTAL_RBCS_RANGE: (f64, f64) = (4.0, 6.5);
const SICKLED_CELLS_RANGE: (f64, f64) = (5.0, 25.0);
const NORMOCYTES_RANGE: (f64, f64) = (60.0, 80.0);
const TARGET_CELLS_RANGE: (f64, f64) = (2.0, 10.0);
const RETICULOCYTES_RANGE: (f64, f64) = (10.0, 20.0);

/// Blood-smear anisocytosis severity grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnisocytosisSeverity {
    Mild,
    Moderate,
    Severe,
}

impl AnisocytosisSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    const ALL: [AnisocytosisSeverity; 3] = [Self::Mild, Self::Moderate, Self::Severe];
}

/// Run-constant Sickle Cell label emitted in the last CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SickleLabel {
    Yes,
    No,
}

impl SickleLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
        }
    }
}

impl std::str::FromStr for SickleLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            other => Err(format!("expected 'yes' or 'no', got '{other}'")),
        }
    }
}

/// One CSV row: the source filename plus the sampled feature values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmearRecord {
    pub filename: String,
    pub total_rbcs: f64,
    pub sickled_cells: f64,
    pub normocytes: f64,
    pub target_cells: f64,
    pub anisocytosis: AnisocytosisSeverity,
    pub reticulocytes: f64,
    pub label: SickleLabel,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sample_range<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    round2(rng.gen_range(lo..=hi))
}

/// Sample one record for a filename. Values are placeholder noise: nothing
/// here looks at the image.
pub fn sample_record<R: Rng>(rng: &mut R, filename: &str, label: SickleLabel) -> SmearRecord {
    SmearRecord {
        filename: filename.to_string(),
        total_rbcs: sample_range(rng, TOTAL_RBCS_RANGE),
        sickled_cells: sample_range(rng, SICKLED_CELLS_RANGE),
        normocytes: sample_range(rng, NORMOCYTES_RANGE),
        target_cells: sample_range(rng, TARGET_CELLS_RANGE),
        anisocytosis: *AnisocytosisSeverity::ALL
            .choose(rng)
            .unwrap_or(&AnisocytosisSeverity::Mild),
        reticulocytes: sample_range(rng, RETICULOCYTES_RANGE),
        label,
    }
}

/// Scan `folder` for images and produce one sampled record per image, in
/// sorted filename order.
pub fn generate_report(folder: &Path, label: SickleLabel) -> Result<Vec<SmearRecord>, SmearError> {
    let filenames = scan_folder(folder)?;
    let mut rng = rand::thread_rng();

    Ok(filenames
        .iter()
        .map(|name| sample_record(&mut rng, name, label))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn sampled_values_stay_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let rec = sample_record(&mut rng, "smear_001.png", SickleLabel::No);
            assert!((4.0..=6.5).contains(&rec.total_rbcs), "{}", rec.total_rbcs);
            assert!((5.0..=25.0).contains(&rec.sickled_cells));
            assert!((60.0..=80.0).contains(&rec.normocytes));
            assert!((2.0..=10.0).contains(&rec.target_cells));
            assert!((10.0..=20.0).contains(&rec.reticulocytes));
        }
    }

    #[test]
    fn sampled_values_are_rounded_to_two_decimals() {
        let mut rng = rand::thread_rng();
        let rec = sample_record(&mut rng, "smear_001.png", SickleLabel::Yes);
        for v in [
            rec.total_rbcs,
            rec.sickled_cells,
            rec.normocytes,
            rec.target_cells,
            rec.reticulocytes,
        ] {
            assert!((round2(v) - v).abs() < 1e-9, "{v} not rounded");
        }
    }

    #[test]
    fn label_is_carried_verbatim() {
        let mut rng = rand::thread_rng();
        assert_eq!(
            sample_record(&mut rng, "a.png", SickleLabel::Yes).label,
            SickleLabel::Yes
        );
        assert_eq!(
            sample_record(&mut rng, "a.png", SickleLabel::No).label,
            SickleLabel::No
        );
    }

    #[test]
    fn label_parses_case_insensitively() {
        assert_eq!(SickleLabel::from_str("yes").unwrap(), SickleLabel::Yes);
        assert_eq!(SickleLabel::from_str("NO").unwrap(), SickleLabel::No);
        assert!(SickleLabel::from_str("maybe").is_err());
    }

    #[test]
    fn label_strings_match_csv_contract() {
        assert_eq!(SickleLabel::Yes.as_str(), "YES");
        assert_eq!(SickleLabel::No.as_str(), "NO");
    }

    #[test]
    fn report_rows_follow_scan_order_and_label() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("b.png"),
            [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
        )
        .unwrap();
        std::fs::write(dir.path().join("a.jpg"), [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let report = generate_report(dir.path(), SickleLabel::Yes).unwrap();
        let names: Vec<&str> = report.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);
        assert!(report.iter().all(|r| r.label == SickleLabel::Yes));
    }

    #[test]
    fn two_runs_same_filenames_numbers_free_to_differ() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..8 {
            std::fs::write(
                dir.path().join(format!("s{i}.png")),
                [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
            )
            .unwrap();
        }

        let first = generate_report(dir.path(), SickleLabel::No).unwrap();
        let second = generate_report(dir.path(), SickleLabel::No).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.filename, b.filename);
        }
        // Non-determinism by design: across 8 rows and 5 numeric columns,
        // at least one value differs between runs.
        let any_diff = first
            .iter()
            .zip(&second)
            .any(|(a, b)| a.total_rbcs != b.total_rbcs || a.sickled_cells != b.sickled_cells);
        assert!(any_diff);
    }

    #[test]
    fn severity_strings_match_csv_contract() {
        assert_eq!(AnisocytosisSeverity::Mild.as_str(), "Mild");
        assert_eq!(AnisocytosisSeverity::Moderate.as_str(), "Moderate");
        assert_eq!(AnisocytosisSeverity::Severe.as_str(), "Severe");
    }
}
