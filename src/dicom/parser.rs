use crate::dicom::error::DicomError;
use crate::types::{BitDepth, Dimensions, SOPClass};
use crate::window::DisplayWindow;
use anyhow::Result;
use dicom::core::dictionary::UidDictionary;
use dicom::dictionary_std::sop_class;
use dicom::dictionary_std::tags;
use dicom::object::{FileDicomObject, InMemDicomObject, StandardDataDictionary};

/// Partial metadata for error message context
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub modality: Option<String>,
    pub sop_class: Option<SOPClass>,
}

impl ErrorContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            modality: None,
            sop_class: None,
        }
    }

    pub fn format_error(&self, tag_name: &str) -> String {
        let mut parts = Vec::new();

        if let Some(modality) = &self.modality {
            parts.push(format!("Modality: {modality}"));
        }

        if let Some(sc) = &self.sop_class {
            parts.push(format!("SOP Class: {sc}")); // Uses Display: "Name (UID)"
        }

        if parts.is_empty() {
            // Generic error when no context available
            format!("Missing or invalid {tag_name} tag")
        } else {
            format!(
                "Missing or invalid {tag_name} tag - this may be a non-image DICOM file ({})",
                parts.join(", ")
            )
        }
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

// From DicomObject
impl From<&FileDicomObject<InMemDicomObject<StandardDataDictionary>>> for ErrorContext {
    fn from(obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>) -> Self {
        ErrorContext {
            modality: extract_modality(obj),
            sop_class: extract_sop_class(obj),
        }
    }
}

pub fn extract_dimensions(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
    error_context: &ErrorContext,
) -> Result<Dimensions> {
    let rows = obj
        .get(tags::ROWS)
        .and_then(|e| e.to_int::<u16>().ok())
        .ok_or_else(|| DicomError::MissingTag(error_context.format_error("Rows")))?;

    let cols = obj
        .get(tags::COLUMNS)
        .and_then(|e| e.to_int::<u16>().ok())
        .ok_or_else(|| DicomError::MissingTag(error_context.format_error("Columns")))?;

    Ok(Dimensions::new(rows, cols))
}

pub fn extract_bit_depth(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
    error_context: &ErrorContext,
) -> Result<BitDepth> {
    let allocated = obj
        .get(tags::BITS_ALLOCATED)
        .and_then(|e| e.to_int::<u16>().ok())
        .ok_or_else(|| DicomError::MissingTag(error_context.format_error("Bits Allocated")))?;

    let stored = obj
        .get(tags::BITS_STORED)
        .and_then(|e| e.to_int::<u16>().ok())
        .ok_or_else(|| DicomError::MissingTag(error_context.format_error("Bits Stored")))?;

    Ok(BitDepth::new(allocated, stored))
}

/// Extract the display window from (0028,1050) and (0028,1051)
///
/// Both tags are decimal strings; multi-valued windows use the first value.
pub fn extract_display_window(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
    error_context: &ErrorContext,
) -> Result<DisplayWindow> {
    let centre = obj
        .get(tags::WINDOW_CENTER)
        .and_then(|e| e.to_float32().ok())
        .ok_or_else(|| DicomError::MissingTag(error_context.format_error("Window Center")))?;

    let width = obj
        .get(tags::WINDOW_WIDTH)
        .and_then(|e| e.to_float32().ok())
        .ok_or_else(|| DicomError::MissingTag(error_context.format_error("Window Width")))?;

    Ok(DisplayWindow::new(centre, width))
}

#[inline]
pub fn extract_samples_per_pixel(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
) -> u16 {
    obj.get(tags::SAMPLES_PER_PIXEL)
        .and_then(|e| e.to_int::<u16>().ok())
        .unwrap_or(1)
}

#[inline]
pub fn extract_number_of_frames(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
) -> u32 {
    obj.get(tags::NUMBER_OF_FRAMES)
        .and_then(|e| e.to_int::<u32>().ok())
        .unwrap_or(1)
}

pub fn extract_modality(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
) -> Option<String> {
    obj.get(tags::MODALITY)
        .and_then(|e| e.value().to_str().ok())
        .map(|s| s.to_string())
}

pub fn extract_sop_class(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
) -> Option<SOPClass> {
    obj.get(tags::SOP_CLASS_UID)
        .and_then(|e| e.value().to_str().ok())
        .and_then(|uid| {
            sop_class::StandardSopClassDictionary
                .by_uid(&uid)
                .map(|entry| SOPClass::new(uid.to_string(), entry.name.to_string()))
        })
}
