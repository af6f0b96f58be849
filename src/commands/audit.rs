use crate::error::AppError;
use crate::models::dataset_types::DatasetInfo;
use crate::services::dataset_service;
use std::path::Path;

pub fn audit_dataset(path: &str, json: bool) -> Result<DatasetInfo, AppError> {
    let dataset_path = Path::new(path);

    if !json {
        return Ok(dataset_service::count_dataset(dataset_path));
    }

    // Keep stdout parseable: diagnostics go to stderr, the (possibly empty)
    // result is always serialized.
    let info = dataset_service::scan_dataset(dataset_path).unwrap_or_else(|e| {
        eprintln!("{}", e.diagnostic());
        DatasetInfo::default()
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_audit_dataset_json_mode() {
        let temp_dir = TempDir::new().unwrap();
        let class_dir = temp_dir.path().join("cherry");
        fs::create_dir(&class_dir).unwrap();
        fs::write(class_dir.join("1.jpg"), b"abc").unwrap();

        let info = audit_dataset(temp_dir.path().to_str().unwrap(), true).unwrap();
        assert_eq!(info.classes["cherry"].count, 1);
        assert_eq!(info.summary.total_size_bytes, 3);

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["classes"]["cherry"]["needed"], 0);
        assert_eq!(value["summary"]["total_images"], 1);
    }

    #[test]
    fn test_audit_dataset_missing_path_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone");
        let missing = missing.to_str().unwrap();

        assert!(audit_dataset(missing, false).unwrap().is_empty());
        assert!(audit_dataset(missing, true).unwrap().is_empty());
    }
}
