use crate::dicom::error::DicomError;
use crate::dicom::PhotometricInterpretation;
use crate::types::BitDepth;
use anyhow::Result;

#[inline]
pub fn validate_photometric_samples(
    photometric_interpretation: &PhotometricInterpretation,
    samples_per_pixel: u16,
) -> Result<()> {
    if !photometric_interpretation.is_grayscale() {
        return Err(DicomError::UnsupportedPixelFormat(format!(
            "Unsupported photometric interpretation for intensity normalization: {photometric_interpretation}"
        ))
        .into());
    }

    if samples_per_pixel != 1 {
        return Err(DicomError::UnsupportedPixelFormat(format!(
            "Inconsistent samples per pixel for grayscale data: {samples_per_pixel} (expected 1)"
        ))
        .into());
    }

    Ok(())
}

#[inline]
pub fn validate_bit_depth(bit_depth: BitDepth) -> Result<()> {
    if !matches!(bit_depth.allocated, 8 | 16) {
        return Err(DicomError::UnsupportedPixelFormat(format!(
            "Unsupported bits allocated: {allocated} (expected 8 or 16)",
            allocated = bit_depth.allocated
        ))
        .into());
    }

    if !bit_depth.is_valid() {
        return Err(DicomError::UnsupportedPixelFormat(format!(
            "Inconsistent bit depth: {bit_depth}"
        ))
        .into());
    }

    Ok(())
}

pub fn validate_metadata(
    photometric_interpretation: &PhotometricInterpretation,
    samples_per_pixel: u16,
    bit_depth: BitDepth,
) -> Result<()> {
    validate_photometric_samples(photometric_interpretation, samples_per_pixel)?;
    validate_bit_depth(bit_depth)?;
    Ok(())
}
