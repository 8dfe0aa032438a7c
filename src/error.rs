use thiserror::Error;

/// The model artifact could not be brought into memory. Fatal for the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Model file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to load model {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// An uploaded file could not be turned into an image.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImageDecodeError {
    #[error("Unsupported file type: {file_name} (expected jpg, jpeg or png)")]
    UnsupportedFileType { file_name: String },

    #[error("Could not read {file_name}: {reason}")]
    Unreadable { file_name: String, reason: String },

    #[error("Could not decode image {file_name}: {reason}")]
    Malformed { file_name: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("Inference failed: {0}")]
    Run(String),

    #[error("Model returned {got} probabilities, expected {expected}")]
    OutputLength { got: usize, expected: usize },

    #[error("Model returned a non-finite probability at index {index}")]
    NonFinite { index: usize },
}

/// Everything that can abort the pipeline for a single upload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error(transparent)]
    Decode(#[from] ImageDecodeError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}
