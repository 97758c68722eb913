//! Per-image descriptor checks.

use crate::domain::validate::text::{has_text, is_blank};
use crate::domain::validate::ValidationReport;
use serde_json::Value as JsonValue;

pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

/// Hard ceiling per image, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Images above this size get an "optimize" warning.
pub const LARGE_IMAGE_BYTES: u64 = 1024 * 1024;

/// Checks each descriptor `{id|url, mimeType, size, alt}`. Messages number images from 1.
pub fn perform_image_validation(images: &[JsonValue]) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (idx, image) in images.iter().enumerate() {
        let n = idx + 1;
        let Some(obj) = image.as_object() else {
            report.error(format!("Image {} must be an object", n));
            continue;
        };

        let identified = ["id", "url"]
            .iter()
            .any(|k| obj.get(*k).map(|v| !is_blank(v)).unwrap_or(false));
        if !identified {
            report.error(format!("Image {} is missing an identifier", n));
        }

        if let Some(mime) = obj.get("mimeType").filter(|v| !v.is_null()) {
            let allowed = mime
                .as_str()
                .map(|m| ALLOWED_MIME_TYPES.contains(&m.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
            if !allowed {
                report.error(format!(
                    "Image {} has an unsupported type (allowed: {})",
                    n,
                    ALLOWED_MIME_TYPES.join(", ")
                ));
            }
        }

        if let Some(size) = obj.get("size").filter(|v| !v.is_null()) {
            match size.as_u64() {
                Some(bytes) if bytes > MAX_IMAGE_BYTES => report.error(format!(
                    "Image {} exceeds the maximum size of {} MB",
                    n,
                    MAX_IMAGE_BYTES / (1024 * 1024)
                )),
                Some(bytes) if bytes > LARGE_IMAGE_BYTES => report.warning(format!(
                    "Image {} is larger than 1 MB; consider optimizing it",
                    n
                )),
                Some(_) => {}
                None => report.error(format!("Image {} size must be a number of bytes", n)),
            }
        }

        if !has_text(obj.get("alt")) {
            report.warning(format!("Image {} is missing alt text", n));
        }
    }

    report
}

/// True when any image descriptor lacks alt text.
pub fn any_missing_alt(images: &[JsonValue]) -> bool {
    images
        .iter()
        .filter_map(|i| i.as_object())
        .any(|obj| !has_text(obj.get("alt")))
}
