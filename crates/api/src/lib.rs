pub mod error;
pub mod models;
pub mod sink;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use sink::{Diagnostic, DiagnosticCollector, ErrorSink, Severity};
