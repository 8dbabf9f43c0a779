//! Reporting seam for resolution failures.
//!
//! The resolver never decides how problems are shown; it hands every failure
//! to an [`ErrorSink`] and moves on.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Qualified name of the entity the message is about, e.g.
    /// `com.example.Foo` or `com.example.Foo#bar(int)`.
    pub context: String,
    pub message: String,
}

/// Receives resolution failures. Fire-and-forget: nothing is returned to the
/// resolver.
pub trait ErrorSink {
    fn log_error(&mut self, context: &str, message: &str);
    fn log_warning(&mut self, context: &str, message: &str);
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn log_error(&mut self, context: &str, message: &str) {
        (**self).log_error(context, message)
    }

    fn log_warning(&mut self, context: &str, message: &str) {
        (**self).log_warning(context, message)
    }
}

/// Records diagnostics in memory.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn push(&mut self, severity: Severity, context: &str, message: &str) {
        self.diagnostics.push(Diagnostic {
            severity,
            context: context.to_string(),
            message: message.to_string(),
        });
    }
}

impl ErrorSink for DiagnosticCollector {
    fn log_error(&mut self, context: &str, message: &str) {
        self.push(Severity::Error, context, message);
    }

    fn log_warning(&mut self, context: &str, message: &str) {
        self.push(Severity::Warning, context, message);
    }
}
