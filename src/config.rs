use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for constructing a Ground Truth manifest from
/// OpenImages CSV annotations.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File containing the class descriptions of the boxes
    pub classes: PathBuf,

    /// File containing all the bounding boxes
    pub bboxes: PathBuf,

    /// Name of the S3 bucket holding the images
    pub s3_bucket: String,

    /// Folder (prefix) on the S3 bucket holding the images
    pub s3_prefix: String,

    /// Path for the output manifest file
    pub output_path: PathBuf,

    /// Local directory mirroring the bucket contents
    #[arg(long = "data_dir", default_value = ".")]
    pub data_dir: PathBuf,
}
