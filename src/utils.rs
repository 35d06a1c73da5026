use indicatif::{ProgressBar, ProgressStyle};

/// Derive the annotation join key from a storage key by stripping the
/// directory prefix and the file extension.
pub fn image_id_from_key(key: &str) -> &str {
    let name = key.rsplit('/').next().unwrap_or(key);
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(&format!(
            "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
            label
        ))
        .expect("progress bar template is valid")
        .progress_chars("#>-"),
    );
    pb
}
