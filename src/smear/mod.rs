//! Offline blood-smear feature reports.
//!
//! Scans a folder of microscopy images and emits one CSV row of placeholder
//! "features" per image. The numeric values are drawn from fixed uniform
//! ranges and the Sickle Cell label is constant per run — nothing is derived
//! from image content. The images are only opened far enough to confirm
//! they are images.

pub mod csv;
pub mod report;
pub mod scan;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmearError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub use csv::{write_csv, CSV_HEADER};
pub use report::{generate_report, AnisocytosisSeverity, SickleLabel, SmearRecord};
pub use scan::scan_folder;
