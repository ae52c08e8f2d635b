use crate::histogram::Channel;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("Cannot normalize a histogram of an empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid render scale: {scale}")]
    InvalidScale { scale: u32 },

    #[error("{channel} bucket {value} holds {percent}%, outside 0..=100")]
    PreconditionViolation { channel: Channel, value: u8, percent: u32 },

    #[error("Failed to load image '{path}': {message}")]
    ImageLoadError { path: PathBuf, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Export error for '{path}': {message}")]
    ExportError { path: PathBuf, message: String },

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, HistogramError>;

impl HistogramError {
    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            HistogramError::EmptyImage { .. } => "The image has no pixels. Percentages are undefined for a zero-area image.",
            HistogramError::InvalidScale { .. } => "Use a scale of at least 1 that keeps the output image within u32 dimensions.",
            HistogramError::PreconditionViolation { .. } => "The histogram was accumulated more than once without a reset. Call reset() before recalculating.",
            HistogramError::FileNotFound { .. } => "Check if the file exists and you have permission to access it.",
            HistogramError::ImageLoadError { .. } => "The image file may be corrupted or in an unsupported format.",
            HistogramError::ExportError { .. } => "Export failed. Check if you have write permissions in the target directory.",
            HistogramError::IoError { .. } => "File system error occurred. Check disk space and permissions.",
            HistogramError::SettingsError { .. } | HistogramError::JsonError { .. } => "The settings file is invalid. Delete it to fall back to defaults.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HistogramError::EmptyImage { .. } => "EMPTY_IMAGE",
            HistogramError::InvalidScale { .. } => "INVALID_SCALE",
            HistogramError::PreconditionViolation { .. } => "PRECONDITION_VIOLATION",
            HistogramError::ImageLoadError { .. } => "IMAGE_LOAD_ERROR",
            HistogramError::FileNotFound { .. } => "FILE_NOT_FOUND",
            HistogramError::ExportError { .. } => "EXPORT_ERROR",
            HistogramError::SettingsError { .. } => "SETTINGS_ERROR",
            HistogramError::IoError { .. } => "IO_ERROR",
            HistogramError::JsonError { .. } => "JSON_ERROR",
        }
    }

    /// True for the errors caused by the caller's input rather than by a file or the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HistogramError::EmptyImage { .. }
                | HistogramError::InvalidScale { .. }
                | HistogramError::PreconditionViolation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = HistogramError::FileNotFound {
            path: PathBuf::from("/nonexistent/file.jpg"),
        };

        assert!(!error.is_input_error());
        assert_eq!(error.error_code(), "FILE_NOT_FOUND");

        let user_msg = error.user_message();
        assert!(user_msg.contains("Check if the file exists"));
    }

    #[test]
    fn test_precondition_message_names_channel() {
        let error = HistogramError::PreconditionViolation {
            channel: Channel::Green,
            value: 7,
            percent: 200,
        };

        assert!(error.is_input_error());
        assert_eq!(error.to_string(), "green bucket 7 holds 200%, outside 0..=100");
    }
}
