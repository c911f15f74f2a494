use crate::constants::{MIN_DIR, MIN_SUFFIX};
use crate::error::Result;
use crate::info;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Inserts the `-min` marker before the first `.png` or `.jpg` in the name.
/// Other names pass through unchanged. The match is case-sensitive, so a
/// `.PNG` file keeps its original name.
pub fn minified_name(file_name: &str) -> String {
    file_name
        .replacen(".png", &format!("{}.png", MIN_SUFFIX), 1)
        .replacen(".jpg", &format!("{}.jpg", MIN_SUFFIX), 1)
}

/// Renames everything under `dir/min/` with the `-min` suffix. With
/// `should_move` set, the renamed files land in `dir` itself and the `min/`
/// tree is removed; otherwise they stay in (the root of) `min/`. Returns only
/// after every rename and the optional teardown have finished.
pub fn relocate_compressed(dir: &Path, should_move: bool) -> Result<usize> {
    let min_dir = dir.join(MIN_DIR);

    // Snapshot the listing up front so in-place renames are not revisited.
    let mut files = Vec::new();
    for entry in WalkDir::new(&min_dir) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    let mut processed = 0;
    for file in files {
        let file_name = match file.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let renamed = minified_name(file_name);
        let destination = if should_move {
            dir.join(renamed)
        } else {
            min_dir.join(renamed)
        };
        fs::rename(&file, &destination)?;
        processed += 1;
    }

    if should_move {
        fs::remove_dir_all(&min_dir)?;
    }

    info!("{} files compressed and renamed.", processed);
    info!("They can be found at: {}", dir.display());

    Ok(processed)
}
