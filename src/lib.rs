pub mod dicom;
pub mod normalize;
pub mod table;
pub mod types;
pub mod window;

// Re-export commonly used items
pub use dicom::{load_image, open_dicom_file, NormalizedImage};
pub use normalize::{apply_bias_gain, BiasGain};
pub use window::{DisplayWindow, WindowBounds};
