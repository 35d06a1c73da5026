//! Ground Truth manifest data structures and writer
//!
//! One manifest line fully describes one image: its storage location, its
//! pixel-space bounding boxes, and the metadata block a training job reads
//! alongside them.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

pub const ANNOTATION_TYPE: &str = "groundtruth/object-detection";
pub const HUMAN_ANNOTATED: &str = "yes";
pub const IMAGE_DEPTH: usize = 3;

/// One bounding box in pixel space. Values are truncated to integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixelBox {
    pub class_id: usize,
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageSize {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoundingBoxes {
    pub image_size: Vec<ImageSize>,
    pub annotations: Vec<PixelBox>,
}

/// Per-box metadata. The manifest format requires one entry per annotation,
/// positionally aligned with the `annotations` array.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectMetadata {
    pub confidence: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoundingBoxMetadata {
    pub objects: Vec<ObjectMetadata>,
    #[serde(rename = "class-map")]
    pub class_map: BTreeMap<String, String>,
    #[serde(rename = "type")]
    pub annotation_type: String,
    #[serde(rename = "human-annotated")]
    pub human_annotated: String,
    #[serde(rename = "creation-date")]
    pub creation_date: String,
}

/// One line of the output manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    #[serde(rename = "source-ref")]
    pub source_ref: String,
    #[serde(rename = "bounding-box")]
    pub bounding_box: BoundingBoxes,
    #[serde(rename = "bounding-box-metadata")]
    pub metadata: BoundingBoxMetadata,
}

/// Writer for newline-delimited JSON manifests.
///
/// The sink is opened once per run and flushed exactly once by `finish`;
/// dropping the writer early still releases the file handle.
pub struct ManifestWriter<W: Write> {
    sink: BufWriter<W>,
}

impl ManifestWriter<File> {
    /// Create the manifest file, truncating any existing one
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> ManifestWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: BufWriter::new(sink),
        }
    }

    /// Append one entry as a single JSON line
    pub fn write(&mut self, entry: &ManifestEntry) -> Result<()> {
        serde_json::to_writer(&mut self.sink, entry)?;
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    /// Flush buffered entries and surface any deferred I/O error
    pub fn finish(mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}
