// PDF export pipeline: metric tables → word-wrap/pagination → printpdf
// emission. Layout is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod handlers;
pub mod layout;
pub mod pdf_writer;
pub mod service;
pub mod theme;

// Re-export the public API consumed by other modules (state, handlers, main).
pub use font_metrics::{default_page_setup, PageSetup};
pub use service::{group_questions, ExportError, PdfExportService, QuestionsByCategory};
pub use theme::CategorySet;
