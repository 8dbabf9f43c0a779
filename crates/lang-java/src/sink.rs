use javadjust_api::ErrorSink;

/// Forwards resolution failures to `tracing` under the `javadjust::resolve`
/// target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn log_error(&mut self, context: &str, message: &str) {
        tracing::error!(target: "javadjust::resolve", context, "{message}");
    }

    fn log_warning(&mut self, context: &str, message: &str) {
        tracing::warn!(target: "javadjust::resolve", context, "{message}");
    }
}
