use crate::models::dataset_types::DatasetInfo;
use std::fmt::Write;

const TITLE: &str = "📊 DATASET SUMMARY";
const RATIO_W: usize = 12;
const PAD_RATIO_NEEDED: usize = 3;
const SIZE_W: usize = 12;
const MB_SUFFIX: &str = " MB";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub class: usize,
    pub count: usize,
    pub needed: usize,
}

impl ColumnWidths {
    /// Widen the dynamic columns to fit the longest name and numbers.
    pub fn for_dataset(info: &DatasetInfo) -> Self {
        let longest_name = info.classes.keys().map(|n| n.chars().count()).max();
        let longest_count = info.classes.values().map(|r| r.count.to_string().len()).max();
        let longest_needed = info.classes.values().map(|r| r.needed.to_string().len()).max();

        Self {
            class: longest_name.map_or(10, |w| (w + 2).max(10)),
            count: longest_count.map_or(7, |w| (w + 2).max(7)),
            needed: longest_needed.map_or(8, |w| (w + 3).max(8)),
        }
    }

    pub fn separator_len(&self) -> usize {
        self.class
            + self.count
            + RATIO_W
            + PAD_RATIO_NEEDED
            + self.needed
            + SIZE_W
            + MB_SUFFIX.len()
            + 8
    }
}

/// Render the fixed-width summary table, one line per class plus totals.
///
/// The output starts with an empty line and ends with a newline.
pub fn render_report(info: &DatasetInfo) -> String {
    let w = ColumnWidths::for_dataset(info);
    let sep = "=".repeat(w.separator_len());
    let pad = " ".repeat(PAD_RATIO_NEEDED);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", sep);
    let _ = writeln!(
        out,
        "{:<cw$}{:>nw$}{:>rw$}{}{:>dw$}{:>sw$}",
        "Class",
        "count",
        "ratio",
        pad,
        "needed",
        "size_mb",
        cw = w.class,
        nw = w.count,
        rw = RATIO_W,
        dw = w.needed,
        sw = SIZE_W + MB_SUFFIX.len(),
    );
    let _ = writeln!(out, "{}", sep);

    for (name, record) in &info.classes {
        let _ = writeln!(
            out,
            "{:<cw$}{:>nw$}{:>rw$.4}{}{:>dw$}{:>sw$.2}{}",
            name,
            record.count,
            record.ratio,
            pad,
            record.needed,
            record.size_mb,
            MB_SUFFIX,
            cw = w.class,
            nw = w.count,
            rw = RATIO_W,
            dw = w.needed,
            sw = SIZE_W,
        );
    }

    let summary = &info.summary;
    let _ = writeln!(out, "{}", sep);
    let _ = writeln!(
        out,
        "{:<cw$}{:>nw$}",
        "total_images",
        summary.total_images,
        cw = w.class,
        nw = w.count
    );
    let _ = writeln!(
        out,
        "{:<cw$}{:>nw$}",
        "max_class_count",
        summary.max_class_count,
        cw = w.class,
        nw = w.count
    );
    let _ = writeln!(
        out,
        "{:<cw$}{:>tw$.2}{}",
        "total_size_mb",
        summary.total_size_mb,
        MB_SUFFIX,
        cw = w.class,
        tw = w.count + RATIO_W + PAD_RATIO_NEEDED + w.needed + SIZE_W,
    );
    let _ = writeln!(out, "{}", sep);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dataset_types::{bytes_to_mb, ClassRecord, DatasetSummary};

    fn record(count: u64, max: u64, size_bytes: u64) -> ClassRecord {
        ClassRecord {
            count,
            size_bytes,
            size_mb: bytes_to_mb(size_bytes),
            ratio: if count > 0 { count as f64 / max as f64 } else { 0.0 },
            needed: max - count,
        }
    }

    fn sample_info() -> DatasetInfo {
        let mut info = DatasetInfo::default();
        info.classes.insert("a".to_string(), record(3, 5, 1_572_864));
        info.classes.insert("b".to_string(), record(5, 5, 524_288));
        info.summary = DatasetSummary {
            total_images: 8,
            max_class_count: 5,
            total_size_bytes: 2_097_152,
            total_size_mb: 2.0,
        };
        info
    }

    #[test]
    fn test_default_widths() {
        let w = ColumnWidths::for_dataset(&sample_info());
        assert_eq!(w, ColumnWidths { class: 10, count: 7, needed: 8 });
        assert_eq!(w.separator_len(), 10 + 7 + 12 + 3 + 8 + 12 + 3 + 8);
    }

    #[test]
    fn test_widths_grow_with_content() {
        let mut info = DatasetInfo::default();
        info.classes.insert(
            "a_really_long_class_name".to_string(),
            record(1_234_567, 1_234_567, 0),
        );
        info.classes.insert("tiny".to_string(), record(0, 1_234_567, 0));

        let w = ColumnWidths::for_dataset(&info);
        assert_eq!(w.class, 24 + 2);
        assert_eq!(w.count, 7 + 2);
        assert_eq!(w.needed, 7 + 3);
    }

    #[test]
    fn test_class_width_counts_characters() {
        let mut info = DatasetInfo::default();
        info.classes.insert("äpfel_ßüß_ñ".to_string(), record(1, 1, 0));
        assert_eq!(ColumnWidths::for_dataset(&info).class, 13);
    }

    #[test]
    fn test_render_report_layout() {
        let report = render_report(&sample_info());
        let sep = "=".repeat(63);

        let expected = [
            "".to_string(),
            "📊 DATASET SUMMARY".to_string(),
            sep.clone(),
            "Class       count       ratio     needed        size_mb".to_string(),
            sep.clone(),
            "a               3      0.6000          2        1.50 MB".to_string(),
            "b               5      1.0000          0        0.50 MB".to_string(),
            sep.clone(),
            "total_images      8".to_string(),
            "max_class_count      5".to_string(),
            "total_size_mb                                      2.00 MB".to_string(),
            sep,
        ]
        .join("\n")
            + "\n";

        assert_eq!(report, expected);
    }

    #[test]
    fn test_zero_count_row() {
        let mut info = DatasetInfo::default();
        info.classes.insert("empty".to_string(), record(0, 0, 0));

        let report = render_report(&info);
        assert!(report.contains("empty           0      0.0000          0        0.00 MB\n"));
    }
}
