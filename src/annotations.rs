use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::AnnotationRecord;

// Columns the bounding-box table must carry
const REQUIRED_COLUMNS: &[&str] = &["ImageID", "LabelName", "XMin", "XMax", "YMin", "YMax"];

/// The bounding-box table, indexed by image ID.
#[derive(Debug, Clone, Default)]
pub struct AnnotationIndex {
    by_image: HashMap<String, Vec<AnnotationRecord>>,
    record_count: usize,
}

impl AnnotationIndex {
    /// Load the bounding-box table from a CSV file with a header row.
    ///
    /// Extra columns are ignored; rows keep their file order within each
    /// image.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = reader
            .headers()
            .map_err(|e| Error::MalformedAnnotationTable {
                message: e.to_string(),
            })?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == *column) {
                return Err(Error::MalformedAnnotationTable {
                    message: format!("missing required column '{column}'"),
                });
            }
        }

        let mut by_image: HashMap<String, Vec<AnnotationRecord>> = HashMap::new();
        let mut record_count = 0;
        for record in reader.deserialize::<AnnotationRecord>() {
            let record = record.map_err(|e| Error::MalformedAnnotationTable {
                message: e.to_string(),
            })?;
            by_image
                .entry(record.image_id.clone())
                .or_default()
                .push(record);
            record_count += 1;
        }

        Ok(Self {
            by_image,
            record_count,
        })
    }

    /// All annotations for an image, in table order. An image absent from
    /// the table yields an empty slice, not an error.
    pub fn annotations_for(&self, image_id: &str) -> &[AnnotationRecord] {
        self.by_image
            .get(image_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct annotated images
    pub fn image_count(&self) -> usize {
        self.by_image.len()
    }

    /// Total number of annotation rows
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}
