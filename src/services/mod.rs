pub mod batch;
pub mod image_loader;

pub use batch::{BatchReport, ConversionService, ConvertedFile, FailedFile};
pub use image_loader::{is_supported, load_image, load_image_from_memory};
