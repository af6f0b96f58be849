use crate::error::AuditError;
use crate::models::dataset_types::{bytes_to_mb, ClassRecord, DatasetInfo, DatasetSummary};
use crate::services::{fs_service, report_service};
use std::collections::BTreeMap;
use std::path::Path;

/// Audit `dataset_path` and print the imbalance report.
///
/// Missing, unreadable and empty datasets are reported on stdout and yield
/// an empty [`DatasetInfo`]; this never fails.
pub fn count_dataset(dataset_path: &Path) -> DatasetInfo {
    match scan_dataset(dataset_path) {
        Ok(info) => {
            print!("{}", report_service::render_report(&info));
            info
        }
        Err(e) => {
            tracing::debug!("Dataset scan stopped: {:?}", e);
            println!("{}", e.diagnostic());
            DatasetInfo::default()
        }
    }
}

/// Compute per-class counts, sizes and balance statistics without printing.
pub fn scan_dataset(dataset_path: &Path) -> Result<DatasetInfo, AuditError> {
    let class_dirs = fs_service::list_class_dirs(dataset_path)?;

    if class_dirs.is_empty() {
        return Err(AuditError::EmptyDataset(dataset_path.to_path_buf()));
    }

    tracing::info!(
        "Scanning {} classes under {}",
        class_dirs.len(),
        dataset_path.display()
    );

    // (name, count, size_bytes) in sorted class order
    let mut scanned = Vec::with_capacity(class_dirs.len());
    for (name, class_path) in class_dirs {
        let count = fs_service::count_images(&class_path);
        let size_bytes = fs_service::folder_size(&class_path);
        tracing::debug!("{}: {} images, {} bytes", name, count, size_bytes);
        scanned.push((name, count, size_bytes));
    }

    let max_class_count = scanned.iter().map(|(_, c, _)| *c).max().unwrap_or(0);
    let total_images: u64 = scanned.iter().map(|(_, c, _)| *c).sum();
    let total_size_bytes: u64 = scanned.iter().map(|(_, _, s)| *s).sum();

    let mut classes = BTreeMap::new();
    for (name, count, size_bytes) in scanned {
        let ratio = if count > 0 {
            count as f64 / max_class_count as f64
        } else {
            0.0
        };
        classes.insert(
            name,
            ClassRecord {
                count,
                size_bytes,
                size_mb: bytes_to_mb(size_bytes),
                ratio,
                needed: max_class_count - count,
            },
        );
    }

    Ok(DatasetInfo {
        classes,
        summary: DatasetSummary {
            total_images,
            max_class_count,
            total_size_bytes,
            total_size_mb: bytes_to_mb(total_size_bytes),
        },
    })
}
