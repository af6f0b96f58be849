use crate::error::AuditError;
use std::ffi::OsStr;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff", "webp"];

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Visible subdirectories of `root` as `(name, path)`, sorted by name.
///
/// Symlinks pointing at directories are listed like real directories. The
/// path is the one read from disk; the name is only for display.
pub fn list_class_dirs(root: &Path) -> Result<Vec<(String, PathBuf)>, AuditError> {
    let read_dir = std::fs::read_dir(root).map_err(|e| listing_error(root, e))?;

    let mut classes = Vec::new();

    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = class_name(&entry.file_name());

        // Skip hidden folders
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            classes.push((name, path));
        }
    }

    classes.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(classes)
}

fn listing_error(root: &Path, e: io::Error) -> AuditError {
    match e.kind() {
        ErrorKind::NotFound => AuditError::PathNotFound(root.to_path_buf()),
        ErrorKind::PermissionDenied => AuditError::PermissionDenied(root.to_path_buf()),
        _ => AuditError::Unreadable {
            path: root.to_path_buf(),
            source: e,
        },
    }
}

/// Folder name as a map key. Bytes that are not UTF-8 are written as `\xNN`
/// so distinct folders keep distinct keys.
#[cfg(unix)]
fn class_name(name: &OsStr) -> String {
    use std::os::unix::ffi::OsStrExt;

    if let Some(s) = name.to_str() {
        return s.to_string();
    }

    let mut out = String::new();
    for chunk in name.as_bytes().utf8_chunks() {
        out.push_str(chunk.valid());
        for byte in chunk.invalid() {
            out.push_str(&format!("\\x{:02x}", byte));
        }
    }
    out
}

#[cfg(not(unix))]
fn class_name(name: &OsStr) -> String {
    name.to_string_lossy().to_string()
}

/// Count image files anywhere under `dir`.
///
/// Symlinked directories are neither counted nor descended into. Entries the
/// walk cannot read are skipped.
pub fn count_images(dir: &Path) -> u64 {
    let mut count = 0;

    for entry in WalkDir::new(dir).min_depth(1).into_iter().filter_map(|e| e.ok()) {
        let ft = entry.file_type();
        if ft.is_dir() || (ft.is_symlink() && entry.path().is_dir()) {
            continue;
        }

        if is_image_file(entry.path()) {
            count += 1;
        }
    }

    count
}

/// Total size in bytes of every file under `dir`, whatever its extension.
///
/// Symlinks to files contribute their target's size. Anything that cannot be
/// stat'ed contributes nothing.
pub fn folder_size(dir: &Path) -> u64 {
    let mut total = 0;

    for entry in WalkDir::new(dir).min_depth(1).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_dir() {
            continue;
        }

        let meta = match std::fs::metadata(entry.path()) {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };

        if meta.is_file() {
            total += meta.len();
        }
    }

    total
}
