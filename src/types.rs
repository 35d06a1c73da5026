use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

// Image formats the dimension probe can size
pub const IMG_FORMATS: &[&str] = &["bmp", "gif", "jpeg", "jpg", "png", "tif", "tiff", "webp"];

// Precomputed HashSet of image extensions for fast lookup
pub static IMAGE_EXTENSIONS_SET: OnceLock<HashSet<String>> = OnceLock::new();

/// Get the image extensions set
pub fn get_image_extensions_set() -> &'static HashSet<String> {
    IMAGE_EXTENSIONS_SET.get_or_init(|| IMG_FORMATS.iter().map(|ext| ext.to_lowercase()).collect())
}

/// Check whether a storage key names a recognized image file
pub fn is_image_key(key: &str) -> bool {
    Path::new(key)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| get_image_extensions_set().contains(&ext.to_lowercase()))
        .unwrap_or(false)
}

// One row of the class description table, with its assigned ID
#[derive(Debug, Clone)]
pub struct ClassEntry {
    pub raw_label: String,
    pub class_id: usize,
    pub display_name: String,
}

// One row of the bounding-box table. Coordinates are normalized to [0, 1].
// The real OpenImages table carries more columns; only these are read.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationRecord {
    #[serde(rename = "ImageID")]
    pub image_id: String,
    #[serde(rename = "LabelName")]
    pub label_name: String,
    #[serde(rename = "XMin")]
    pub xmin: f64,
    #[serde(rename = "XMax")]
    pub xmax: f64,
    #[serde(rename = "YMin")]
    pub ymin: f64,
    #[serde(rename = "YMax")]
    pub ymax: f64,
}

/// A discovered image: its storage-relative key and pixel dimensions.
#[derive(Debug, Clone)]
pub struct ImageDescriptor {
    pub key: String,
    pub width: usize,
    pub height: usize,
}
