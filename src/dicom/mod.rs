//! DICOM file loading and intensity normalization
//!
//! This module opens a DICOM file, extracts the metadata needed for
//! normalization (dimensions, bit depth, display window), decodes the
//! grayscale pixel data and maps it onto a zero-mean, unit-variance scale.
//! The display window bounds are transformed with the exact same bias/gain
//! pair so that they stay expressed in normalized units.

mod error;
mod parser;
mod photometric;
mod pixel_data;
mod validation;

// Re-export public API
pub use error::DicomError;
pub use parser::ErrorContext;
pub use photometric::PhotometricInterpretation;

use crate::normalize::{apply_bias_gain_in_place, BiasGain};
use crate::types::{BitDepth, Dimensions, SOPClass};
use crate::window::{DisplayWindow, WindowBounds};
use anyhow::{Context, Result};
use dicom::object::{
    open_file,
    FileDicomObject,
    InMemDicomObject,
    StandardDataDictionary
};
use std::path::Path;
use std::str::FromStr;

/// A normalized grayscale image together with the parameters that produced it
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    pub dimensions: Dimensions,
    pub bit_depth: BitDepth,
    pub photometric_interpretation: PhotometricInterpretation,
    pub number_of_frames: u32, // Only the first frame is normalized

    /// Pixel intensities after `(x + bias) * gain`, row-major
    pub pixels: Vec<f32>,

    /// The affine parameters derived from the raw pixel statistics
    pub bias_gain: BiasGain,

    /// Display window as stored in the file (raw units)
    pub window: DisplayWindow,

    /// Display window mapped into normalized units with `bias_gain`
    pub bounds: WindowBounds,

    // Context metadata
    pub modality: Option<String>,
    pub sop_class: Option<SOPClass>,
}

impl NormalizedImage {
    #[inline(always)]
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.dimensions.rows
    }

    #[inline(always)]
    #[must_use]
    pub fn cols(&self) -> u16 {
        self.dimensions.cols
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.dimensions.pixel_count()
    }
}

/// Open and parse a DICOM file
pub fn open_dicom_file(file_path: &Path) -> Result<FileDicomObject<InMemDicomObject<StandardDataDictionary>>> {
    open_file(file_path)
        .with_context(|| format!("Failed to open DICOM file: {}", file_path.display()))
}

/// Load a DICOM file and normalize its intensities
///
/// # Errors
///
/// Returns an error for a missing or unreadable file, missing required
/// tags (Rows, Columns, Bits Allocated/Stored, Window Center/Width),
/// non-grayscale data, or a constant image (zero standard deviation).
pub fn load_image(file_path: &Path) -> Result<NormalizedImage> {
    let obj = open_dicom_file(file_path)?;
    normalize_dicom(&obj)
}

/// Normalize an already-opened DICOM object
pub fn normalize_dicom(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
) -> Result<NormalizedImage> {
    use dicom::dictionary_std::tags;

    let error_context = ErrorContext::from(obj);

    let dimensions = parser::extract_dimensions(obj, &error_context)?;
    if !dimensions.is_valid() {
        anyhow::bail!("Invalid image dimensions: {dimensions}");
    }

    let bit_depth = parser::extract_bit_depth(obj, &error_context)?;
    let samples_per_pixel = parser::extract_samples_per_pixel(obj);
    let number_of_frames = parser::extract_number_of_frames(obj);

    let photometric_interpretation = obj
        .get(tags::PHOTOMETRIC_INTERPRETATION)
        .and_then(|e| e.value().to_str().ok())
        .and_then(|s| PhotometricInterpretation::from_str(s.as_ref()).ok())
        .unwrap_or(PhotometricInterpretation::Monochrome2); // Default to Monochrome2

    // Validate all constraints before decoding anything
    validation::validate_metadata(&photometric_interpretation, samples_per_pixel, bit_depth)?;

    let window = parser::extract_display_window(obj, &error_context)?;

    let transfer_syntax_uid = obj.meta().transfer_syntax().to_string();
    let raw_bytes = pixel_data::extract_pixel_data(obj, bit_depth.allocated, &transfer_syntax_uid)?;
    let mut pixels =
        pixel_data::grayscale_to_f32(&raw_bytes, bit_depth.allocated, dimensions.pixel_count())?;

    // One bias/gain pair transforms both the pixels and the window bounds
    let bias_gain = BiasGain::from_samples(&pixels)?;
    apply_bias_gain_in_place(&mut pixels, bias_gain);
    let bounds = window.normalized(bias_gain);

    Ok(NormalizedImage {
        dimensions,
        bit_depth,
        photometric_interpretation,
        number_of_frames,
        pixels,
        bias_gain,
        window,
        bounds,
        modality: error_context.modality,
        sop_class: error_context.sop_class,
    })
}
