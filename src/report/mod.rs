//! Fixed-layout timesheet report: template, field map, serializer, PDF output.

pub mod document;
pub mod field_map;
pub mod pdf;
pub mod publish;
pub mod serializer;

pub use document::{Document, TemplateSource, load_template};
pub use field_map::{FieldKey, FieldPlacement, ReportFieldMap};
pub use publish::{publish_atomic, publish_report, report_file_name};
pub use serializer::{RenderedReport, ReportTotals, render};

use crate::ui::messages::success;
use std::path::Path;

/// Helper comune per messaggi di completamento render.
pub(crate) fn notify_render_success(path: &Path) {
    success(format!("Report written: {}", path.display()));
}
