use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::ClassEntry;

/// The class description table: an ordered mapping from machine-coded labels
/// to numeric class IDs and human-readable display names.
///
/// Class IDs are the zero-based row positions in the source table, assigned
/// once at load time and stable for the lifetime of a run.
#[derive(Debug, Clone)]
pub struct ClassCatalog {
    entries: Vec<ClassEntry>,
    id_by_raw_label: HashMap<String, usize>,
}

impl ClassCatalog {
    /// Load the catalog from a headerless two-column CSV file of
    /// (raw_label, display_name) rows.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut entries = Vec::new();
        let mut id_by_raw_label = HashMap::new();

        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| Error::MalformedCatalog {
                row: row + 1,
                message: e.to_string(),
            })?;
            if record.len() < 2 {
                return Err(Error::MalformedCatalog {
                    row: row + 1,
                    message: format!("expected 2 fields, found {}", record.len()),
                });
            }

            let class_id = entries.len();
            let raw_label = record[0].to_string();
            // A duplicated raw label keeps the last row's ID
            id_by_raw_label.insert(raw_label.clone(), class_id);
            entries.push(ClassEntry {
                raw_label,
                class_id,
                display_name: record[1].to_string(),
            });
        }

        Ok(Self {
            entries,
            id_by_raw_label,
        })
    }

    /// Resolve a machine-coded label to its catalog entry
    pub fn resolve(&self, raw_label: &str) -> Result<&ClassEntry> {
        self.id_by_raw_label
            .get(raw_label)
            .map(|&id| &self.entries[id])
            .ok_or_else(|| Error::UnknownLabel {
                label: raw_label.to_string(),
            })
    }

    /// Resolve a machine-coded label to its class ID
    pub fn resolve_id(&self, raw_label: &str) -> Result<usize> {
        self.resolve(raw_label).map(|entry| entry.class_id)
    }

    /// Inverse lookup: the display name assigned to a class ID
    pub fn display_name(&self, class_id: usize) -> Option<&str> {
        self.entries
            .get(class_id)
            .map(|entry| entry.display_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
