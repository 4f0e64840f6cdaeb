//! Formatting utilities for document sizes and page counts.

use crate::config::DOCUMENT_KIND_LABEL;
use crate::models::DocumentDescriptor;

const KIB: f64 = 1024.0;

/// Format a byte count for display (e.g., "512 B", "200 KB", "1.5 MB").
///
/// Bytes below 1 KB are shown raw, kilobytes are rounded to an integer,
/// megabytes keep one decimal.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let kb = bytes as f64 / KIB;
    if kb < KIB {
        return format!("{} KB", kb.round() as u64);
    }

    format!("{:.1} MB", kb / KIB)
}

/// Unit label for a page count: "page" for exactly one, "pages" otherwise.
pub fn page_label(count: u32) -> &'static str {
    if count == 1 { "page" } else { "pages" }
}

/// Summary line shown under the filename (e.g., "2 pages • 200 KB • pdf").
pub fn document_meta_line(descriptor: &DocumentDescriptor) -> String {
    format!(
        "{} {} • {} • {}",
        descriptor.page_count,
        page_label(descriptor.page_count),
        format_file_size(descriptor.size_bytes),
        DOCUMENT_KIND_LABEL
    )
}
