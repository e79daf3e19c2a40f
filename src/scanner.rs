use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions treated as photos, matched case-insensitively.
const PHOTO_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp", "heic", "heif", "cr2", "nef",
    "arw", "dng",
];

/// Enumerate photo files under the input directory.
/// Skips the output subtree when it is nested inside the input, and any files
/// already living under a year/month/day layout, so re-runs over overlapping
/// input and output never reprocess sorted files.
pub fn scan_photos(input_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let input_root = input_dir.canonicalize().unwrap_or_else(|_| input_dir.to_path_buf());
    let output_root = output_dir.canonicalize().ok();

    let mut files = Vec::new();

    for entry in WalkDir::new(input_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            let canonical = e.path().canonicalize().unwrap_or_else(|_| e.path().to_path_buf());
            if canonical == input_root {
                return true;
            }
            output_root.as_deref() != Some(canonical.as_path())
        })
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some(ext) if PHOTO_EXTENSIONS.contains(&ext) => {}
            _ => {
                log::debug!("Ignoring {}", path.display());
                continue;
            }
        }

        if in_date_layout(path, input_dir) {
            log::debug!("Already sorted, skipping {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// True when the path, relative to the input root, starts with a
/// year/month/day component triple.
fn in_date_layout(path: &Path, input_dir: &Path) -> bool {
    let rel = match path.strip_prefix(input_dir) {
        Ok(rel) => rel,
        Err(_) => return false,
    };
    let components: Vec<&str> = rel
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();
    if components.len() < 4 {
        return false;
    }
    is_numeric_component(components[0], 4, 1, 9999)
        && is_numeric_component(components[1], 2, 1, 12)
        && is_numeric_component(components[2], 2, 1, 31)
}

fn is_numeric_component(s: &str, width: usize, min: u32, max: u32) -> bool {
    s.len() == width
        && s.bytes().all(|b| b.is_ascii_digit())
        && s.parse::<u32>().map_or(false, |n| (min..=max).contains(&n))
}
