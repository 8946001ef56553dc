//! DICOM pixel data extraction
//!
//! Pulls raw grayscale samples out of a DICOM object, handling compressed
//! transfer syntaxes through the pixel data decoder and normalizing
//! big-endian data to little-endian byte order.

use crate::dicom::error::DicomError;
use anyhow::{Context, Result};
use dicom::object::{FileDicomObject, InMemDicomObject, StandardDataDictionary};
use dicom::pixeldata::PixelDecoder;

/// Extract pixel data bytes, handling compression and endianness
pub fn extract_pixel_data(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
    bits_allocated: u16,
    transfer_syntax_uid: &str,
) -> Result<Vec<u8>> {
    #[allow(deprecated)]
    use dicom::dictionary_std::uids::EXPLICIT_VR_BIG_ENDIAN;

    let is_big_endian = transfer_syntax_uid == EXPLICIT_VR_BIG_ENDIAN;

    if bits_allocated == 16 && is_big_endian {
        extract_big_endian_16bit(obj)
    } else {
        extract_decoded_pixel_data(obj, bits_allocated)
    }
}

/// Extract big-endian 16-bit pixel data and convert to little-endian
fn extract_big_endian_16bit(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
) -> Result<Vec<u8>> {
    use dicom::dictionary_std::tags;

    let pixel_data_obj = obj
        .get(tags::PIXEL_DATA)
        .context("Missing pixel data")?;

    let raw_bytes = pixel_data_obj
        .to_bytes()
        .context("Failed to get raw pixel data bytes")?;

    swap_16bit_to_le(&raw_bytes)
}

/// Convert big-endian 16-bit sample bytes to little-endian byte order
fn swap_16bit_to_le(raw_bytes: &[u8]) -> Result<Vec<u8>> {
    if !raw_bytes.len().is_multiple_of(2) {
        anyhow::bail!("Invalid 16-bit pixel data length");
    }

    Ok(raw_bytes
        .chunks_exact(2)
        .flat_map(|chunk| {
            let value = u16::from_be_bytes([chunk[0], chunk[1]]);
            value.to_le_bytes()
        })
        .collect())
}

/// Extract decoded pixel data (handles compression)
fn extract_decoded_pixel_data(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
    bits_allocated: u16,
) -> Result<Vec<u8>> {
    let decoded_pixel_data = obj
        .decode_pixel_data()
        .context("Failed to decode pixel data")?;

    if bits_allocated == 16 {
        // 16-bit pixel data - use raw data to avoid LUT issues
        Ok(decoded_pixel_data.data().to_vec())
    } else {
        // 8-bit
        Ok(decoded_pixel_data
            .to_vec::<u8>()
            .context("Failed to convert pixel data to bytes")?)
    }
}

/// Convert raw grayscale bytes to f32 samples, truncated to one frame
///
/// Pixel data is little-endian by the time it reaches this function.
/// Multi-frame buffers are cut down to the first `pixel_count` samples.
pub fn grayscale_to_f32(
    pixel_data: &[u8],
    bits_allocated: u16,
    pixel_count: usize,
) -> Result<Vec<f32>> {
    let mut samples: Vec<f32> = match bits_allocated {
        8 => pixel_data.iter().map(|&b| f32::from(b)).collect(),
        16 => {
            if !pixel_data.len().is_multiple_of(2) {
                anyhow::bail!("Invalid 16-bit pixel data length");
            }

            pixel_data
                .chunks_exact(2)
                .map(|chunk| f32::from(u16::from_le_bytes([chunk[0], chunk[1]])))
                .collect()
        }
        _ => {
            return Err(DicomError::UnsupportedPixelFormat(format!(
                "Unsupported bits allocated for grayscale: {bits_allocated}"
            ))
            .into())
        }
    };

    if samples.len() < pixel_count {
        anyhow::bail!(
            "Pixel data too short: got {got} samples, expected {pixel_count}",
            got = samples.len()
        );
    }

    samples.truncate(pixel_count);
    Ok(samples)
}
