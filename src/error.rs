use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while constructing a manifest.
///
/// Every variant is fatal: the pipeline stops at the first failure and the
/// manifest written so far must be treated as incomplete.
#[derive(Debug, Error)]
pub enum Error {
    /// A row of the class description table could not be interpreted.
    #[error("malformed class catalog row {row}: {message}")]
    MalformedCatalog { row: usize, message: String },

    /// The bounding-box table is missing a required column or has an
    /// unparsable row.
    #[error("malformed annotation table: {message}")]
    MalformedAnnotationTable { message: String },

    /// An annotation references a label that is absent from the class
    /// catalog. Indicates the two source tables do not belong together.
    #[error("label '{label}' is not present in the class catalog")]
    UnknownLabel { label: String },

    /// Normalized coordinates are out of range or inverted.
    #[error("invalid coordinates for image '{image_id}': {message}")]
    InvalidCoordinate { image_id: String, message: String },

    /// A manifest entry could not be serialized to JSON.
    #[error("failed to serialize manifest entry")]
    Serialization(#[from] serde_json::Error),

    /// The dimension probe could not read an image's width and height.
    #[error("failed to read image dimensions from '{}'", .path.display())]
    ImageDecode {
        path: PathBuf,
        source: imagesize::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
