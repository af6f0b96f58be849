use serde::Serialize;
use std::collections::BTreeMap;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ClassRecord {
    pub count: u64,
    pub size_bytes: u64,
    pub size_mb: f64,
    /// `count / max_class_count`, 0 for empty classes.
    pub ratio: f64,
    /// Images missing to match the largest class.
    pub needed: u64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct DatasetSummary {
    pub total_images: u64,
    pub max_class_count: u64,
    pub total_size_bytes: u64,
    pub total_size_mb: f64,
}

/// Result of auditing a dataset root.
///
/// Classes are keyed by folder name and iterate in sorted order. The summary
/// lives beside them, so a class may be named anything.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct DatasetInfo {
    pub classes: BTreeMap<String, ClassRecord>,
    pub summary: DatasetSummary,
}

impl DatasetInfo {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}
