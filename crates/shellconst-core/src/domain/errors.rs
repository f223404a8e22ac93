pub type ComputeResult<T> = Result<T, ShellConstError>;

/// Failure classes the generator can report, one exit code each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Bad command line or option value.
    Usage,
    /// An artifact or stdout could not be written.
    Io,
    /// Arithmetic failure inside the precision context.
    Numeric,
}

impl ErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Usage => 2,
            Self::Io => 3,
            Self::Numeric => 4,
        }
    }
}

/// Error shared by every stage of the generator.
///
/// `code` is a stable dotted tag (`IO.SOURCE_WRITE`, `INPUT.CLI_USAGE`)
/// that scripts can match on independently of the message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct ShellConstError {
    category: ErrorCategory,
    code: &'static str,
    message: String,
}

impl ShellConstError {
    pub fn usage(code: &'static str, message: impl Into<String>) -> Self {
        Self::with_category(ErrorCategory::Usage, code, message)
    }

    pub fn io(code: &'static str, message: impl Into<String>) -> Self {
        Self::with_category(ErrorCategory::Io, code, message)
    }

    pub fn numeric(code: &'static str, message: impl Into<String>) -> Self {
        Self::with_category(ErrorCategory::Numeric, code, message)
    }

    fn with_category(
        category: ErrorCategory,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    /// The two stderr lines printed before the process exits.
    pub fn report_lines(&self) -> [String; 2] {
        [
            format!("ERROR: {self}"),
            format!("FATAL EXIT CODE: {}", self.exit_code()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorCategory, ShellConstError};

    #[test]
    fn each_category_has_a_distinct_exit_code() {
        assert_eq!(ErrorCategory::Usage.exit_code(), 2);
        assert_eq!(ErrorCategory::Io.exit_code(), 3);
        assert_eq!(ErrorCategory::Numeric.exit_code(), 4);
    }

    #[test]
    fn report_lines_carry_code_message_and_exit_status() {
        let error = ShellConstError::io(
            "IO.SOURCE_WRITE",
            "failed to write source artifact 'out.c': permission denied",
        );

        assert_eq!(error.exit_code(), 3);
        assert_eq!(
            error.report_lines(),
            [
                "ERROR: [IO.SOURCE_WRITE] failed to write source artifact 'out.c': permission denied"
                    .to_string(),
                "FATAL EXIT CODE: 3".to_string(),
            ]
        );
    }

    #[test]
    fn display_is_code_then_message() {
        let error = ShellConstError::numeric("RUN.NUMERIC", "division by zero");
        assert_eq!(error.to_string(), "[RUN.NUMERIC] division by zero");
    }
}
