//! Typed faults for DICOM metadata and pixel data handling

use thiserror::Error;

/// Faults raised while reading metadata or decoding pixel data
///
/// Kept separate from [`crate::normalize::NormalizeError`], which covers
/// the statistics side; callers can match on either.
#[derive(Debug, Error)]
pub enum DicomError {
    /// A required tag is absent or cannot be converted
    #[error("{0}")]
    MissingTag(String),

    /// The pixel layout cannot be normalized (color data, odd bit depths)
    #[error("{0}")]
    UnsupportedPixelFormat(String),
}
