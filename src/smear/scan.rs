use std::io::Read;
use std::path::Path;

use super::SmearError;

/// Accepted image extensions (case-insensitive).
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tiff", "bmp"];

/// Scan a folder for image files and return their filenames, sorted.
///
/// A file counts when its extension matches and its magic bytes look like
/// an image. A file that cannot be read, or whose content is not an image,
/// is reported via the log and skipped; the scan continues with the
/// remainder.
pub fn scan_folder(folder: &Path) -> Result<Vec<String>, SmearError> {
    if !folder.is_dir() {
        return Err(SmearError::NotADirectory(folder.to_path_buf()));
    }

    let mut filenames = Vec::new();

    for entry in std::fs::read_dir(folder)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable directory entry: {e}");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !has_image_extension(&path) {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(?path, "skipping file with non-UTF-8 name");
            continue;
        };

        match looks_like_image(&path) {
            Ok(true) => filenames.push(name.to_string()),
            Ok(false) => {
                tracing::warn!(filename = name, "skipping file: not a recognized image");
            }
            Err(e) => {
                tracing::warn!(filename = name, "error processing file: {e}");
            }
        }
    }

    // Sorted so two runs over the same folder emit rows in the same order.
    filenames.sort();
    Ok(filenames)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Check magic bytes (NOT the extension — extensions can be wrong).
fn looks_like_image(path: &Path) -> Result<bool, std::io::Error> {
    let mut file = std::fs::File::open(path)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header)?;

    Ok(match &header[..bytes_read.min(8)] {
        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => true,
        // PNG: 89 50 4E 47
        [0x89, 0x50, 0x4E, 0x47, ..] => true,
        // TIFF: little-endian (49 49 2A 00) or big-endian (4D 4D 00 2A)
        [0x49, 0x49, 0x2A, 0x00, ..] | [0x4D, 0x4D, 0x00, 0x2A, ..] => true,
        // BMP: "BM"
        [0x42, 0x4D, ..] => true,
        _ => false,
    })
}
