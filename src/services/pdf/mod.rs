// PDF export module

mod service;

pub use service::{PdfExportOptions, PdfExportService};
