use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("File too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },
    #[error("Report is not valid UTF-8")]
    InvalidUtf8,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ReportError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ReportError::TooLarge { .. } => "REPORT_TOO_LARGE",
            ReportError::InvalidUtf8 => "REPORT_INVALID_UTF8",
            ReportError::Io(e) if e.kind() == io::ErrorKind::NotFound => "REPORT_NOT_FOUND",
            ReportError::Io(_) => "REPORT_IO_ERROR",
        }
    }

    /// True when the underlying file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReportError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}
