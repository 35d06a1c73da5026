use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::annotations::AnnotationIndex;
use crate::catalog::ClassCatalog;
use crate::error::{Error, Result};
use crate::manifest::{
    BoundingBoxMetadata, BoundingBoxes, ImageSize, ManifestEntry, ObjectMetadata, PixelBox,
    ANNOTATION_TYPE, HUMAN_ANNOTATED, IMAGE_DEPTH,
};
use crate::types::{AnnotationRecord, ImageDescriptor};
use crate::utils::image_id_from_key;

/// Convert one annotation's normalized coordinates to a pixel-space box.
///
/// Values are truncated toward zero, never rounded; two runs over the same
/// inputs must produce identical boxes.
pub fn to_pixel_box(
    record: &AnnotationRecord,
    class_id: usize,
    width: usize,
    height: usize,
) -> Result<PixelBox> {
    let coords = [
        ("XMin", record.xmin),
        ("XMax", record.xmax),
        ("YMin", record.ymin),
        ("YMax", record.ymax),
    ];
    for (name, value) in coords {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidCoordinate {
                image_id: record.image_id.clone(),
                message: format!("{name} = {value} is outside [0, 1]"),
            });
        }
    }
    if record.xmin > record.xmax {
        return Err(Error::InvalidCoordinate {
            image_id: record.image_id.clone(),
            message: format!("XMin {} exceeds XMax {}", record.xmin, record.xmax),
        });
    }
    if record.ymin > record.ymax {
        return Err(Error::InvalidCoordinate {
            image_id: record.image_id.clone(),
            message: format!("YMin {} exceeds YMax {}", record.ymin, record.ymax),
        });
    }

    Ok(PixelBox {
        class_id,
        left: (record.xmin * width as f64) as usize,
        top: (record.ymin * height as f64) as usize,
        width: ((record.xmax - record.xmin) * width as f64) as usize,
        height: ((record.ymax - record.ymin) * height as f64) as usize,
    })
}

/// Compose the manifest entry for one image, stamped with the current time.
pub fn build_manifest_entry(
    image: &ImageDescriptor,
    bucket: &str,
    catalog: &ClassCatalog,
    index: &AnnotationIndex,
) -> Result<ManifestEntry> {
    build_manifest_entry_at(image, bucket, catalog, index, Utc::now())
}

/// Compose the manifest entry for one image with an explicit creation time.
///
/// The image ID joining the file to its annotation rows is the storage key
/// minus directory prefix and extension, so filenames must match the
/// table's ImageID column. An image with no annotation rows still produces
/// an entry, with empty annotation and object lists.
pub fn build_manifest_entry_at(
    image: &ImageDescriptor,
    bucket: &str,
    catalog: &ClassCatalog,
    index: &AnnotationIndex,
    created: DateTime<Utc>,
) -> Result<ManifestEntry> {
    let image_id = image_id_from_key(&image.key);
    let records = index.annotations_for(image_id);

    let mut annotations = Vec::with_capacity(records.len());
    let mut objects = Vec::with_capacity(records.len());
    let mut class_map = BTreeMap::new();

    for record in records {
        let entry = catalog.resolve(&record.label_name)?;
        annotations.push(to_pixel_box(
            record,
            entry.class_id,
            image.width,
            image.height,
        )?);
        objects.push(ObjectMetadata { confidence: 1 });
        class_map.insert(entry.class_id.to_string(), entry.display_name.clone());
    }

    Ok(ManifestEntry {
        source_ref: format!("s3://{}/{}", bucket, image.key),
        bounding_box: BoundingBoxes {
            image_size: vec![ImageSize {
                width: image.width,
                height: image.height,
                depth: IMAGE_DEPTH,
            }],
            annotations,
        },
        metadata: BoundingBoxMetadata {
            objects,
            class_map,
            annotation_type: ANNOTATION_TYPE.to_string(),
            human_annotated: HUMAN_ANNOTATED.to_string(),
            creation_date: created.to_rfc3339(),
        },
    })
}
