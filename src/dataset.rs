use log::info;

use crate::annotations::AnnotationIndex;
use crate::catalog::ClassCatalog;
use crate::config::Args;
use crate::conversion::build_manifest_entry;
use crate::error::Result;
use crate::io::{DimensionProbe, FileLister, ImagesizeProbe, LocalFileLister};
use crate::manifest::ManifestWriter;
use crate::types::{is_image_key, ImageDescriptor};
use crate::utils::create_progress_bar;

/// Counters for one conversion run
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub images_written: usize,
    pub boxes_written: usize,
    pub unannotated_images: usize,
}

impl RunStats {
    pub fn print_summary(&self) {
        info!("=== Conversion Summary ===");
        info!("Manifest entries written: {}", self.images_written);
        info!("Bounding boxes written: {}", self.boxes_written);
        info!("Images without annotations: {}", self.unannotated_images);
    }
}

/// Main conversion pipeline.
///
/// Loads the class catalog and annotation index once, then walks the
/// enumerated images in a single pass, writing one manifest line per image.
/// The first error aborts the run; lines already written stay on disk and
/// the output must then be discarded by the caller.
pub fn process_dataset(
    args: &Args,
    lister: &dyn FileLister,
    probe: &dyn DimensionProbe,
) -> Result<RunStats> {
    let catalog = ClassCatalog::load(&args.classes)?;
    info!(
        "Loaded {} classes from {}",
        catalog.len(),
        args.classes.display()
    );

    let index = AnnotationIndex::load(&args.bboxes)?;
    info!(
        "Indexed {} annotations across {} images from {}",
        index.record_count(),
        index.image_count(),
        args.bboxes.display()
    );

    let keys: Vec<String> = lister.list()?.into_iter().filter(|k| is_image_key(k)).collect();
    info!("Found {} candidate images", keys.len());

    let mut writer = ManifestWriter::create(&args.output_path)?;
    let pb = create_progress_bar(keys.len() as u64, "Manifest");

    let mut stats = RunStats::default();
    for key in keys {
        let (width, height) = probe.dimensions(&key)?;
        let image = ImageDescriptor { key, width, height };

        let entry = build_manifest_entry(&image, &args.s3_bucket, &catalog, &index)?;
        let box_count = entry.bounding_box.annotations.len();
        writer.write(&entry)?;

        stats.images_written += 1;
        stats.boxes_written += box_count;
        if box_count == 0 {
            stats.unannotated_images += 1;
        }
        pb.inc(1);
    }

    writer.finish()?;
    pb.finish_with_message("Manifest complete");
    stats.print_summary();

    Ok(stats)
}

/// Run the pipeline against a local mirror of the bucket contents.
pub fn run(args: &Args) -> Result<RunStats> {
    let lister = LocalFileLister::new(&args.data_dir, &args.s3_prefix);
    let probe = ImagesizeProbe::new(&args.data_dir);
    process_dataset(args, &lister, &probe)
}
