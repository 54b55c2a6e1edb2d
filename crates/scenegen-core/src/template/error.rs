//! Template error types

use thiserror::Error;

/// Template expansion errors
///
/// Both kinds abort the whole expansion; callers never see partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Expression or collection not resolvable in the active scope chain
    #[error("Unbound variable '{path}' at line {line}")]
    UnboundVariable {
        /// The expression as written, e.g. `p.name`
        path: String,
        /// Line number of the offending tag
        line: usize,
    },

    /// Structural problem: unbalanced blocks, unclosed delimiters, bad tags
    #[error("Malformed template at line {line}: {message}")]
    MalformedTemplate {
        /// Error message
        message: String,
        /// Line number where the error occurred
        line: usize,
    },
}

impl TemplateError {
    pub(crate) fn malformed(message: impl Into<String>, line: usize) -> Self {
        TemplateError::MalformedTemplate {
            message: message.into(),
            line,
        }
    }

    /// Line the error was reported at (1-based)
    pub fn line(&self) -> usize {
        match self {
            TemplateError::UnboundVariable { line, .. }
            | TemplateError::MalformedTemplate { line, .. } => *line,
        }
    }
}
