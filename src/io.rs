use glob::glob;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Enumerates candidate file keys under a storage prefix.
pub trait FileLister {
    fn list(&self) -> Result<Vec<String>>;
}

/// Returns an image's pixel dimensions as (width, height).
pub trait DimensionProbe {
    fn dimensions(&self, key: &str) -> Result<(usize, usize)>;
}

/// Lists files from a local directory mirroring the bucket layout.
///
/// Keys are returned sorted so repeated runs enumerate images in the same
/// order.
pub struct LocalFileLister {
    root: PathBuf,
    prefix: String,
}

impl LocalFileLister {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into().trim_matches('/').to_string();
        Self {
            root: root.into(),
            prefix,
        }
    }

    fn key_for(&self, file_name: &str) -> String {
        if self.prefix.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", self.prefix, file_name)
        }
    }
}

impl FileLister for LocalFileLister {
    fn list(&self) -> Result<Vec<String>> {
        let pattern = format!("{}/*", self.root.join(&self.prefix).display());
        let entries = glob(&pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        let mut keys: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .filter_map(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| self.key_for(name))
            })
            .collect();
        keys.sort();
        Ok(keys)
    }
}

/// Reads image dimensions from local files via their headers, without
/// decoding pixel data.
pub struct ImagesizeProbe {
    root: PathBuf,
}

impl ImagesizeProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DimensionProbe for ImagesizeProbe {
    fn dimensions(&self, key: &str) -> Result<(usize, usize)> {
        let path = self.root.join(Path::new(key));
        let size = imagesize::size(&path).map_err(|source| Error::ImageDecode {
            path: path.clone(),
            source,
        })?;
        Ok((size.width, size.height))
    }
}
