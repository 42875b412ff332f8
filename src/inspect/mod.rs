//! Textual inspection of a parsed label file.
//!
//! Summarises what the parser kept and dropped, per-class counts, and, when
//! the image size is known, where each box lands in pixels.

mod report;

pub use report::{BoxEntry, ClassCount, InspectReport, SummarySection};

use std::collections::BTreeMap;

use crate::ir::io_yolo::ParseReport;
use crate::ir::AnnotationSet;

/// Options for inspection.
#[derive(Clone, Debug, Default)]
pub struct InspectOptions {
    /// Image `(width, height)` in pixels, if an image was supplied.
    pub image_size: Option<(u32, u32)>,
}

/// Builds an [`InspectReport`] from a parse result.
pub fn inspect_annotations(
    annotations: &AnnotationSet,
    parse_report: &ParseReport,
    opts: &InspectOptions,
) -> InspectReport {
    let mut per_class: BTreeMap<i64, usize> = BTreeMap::new();
    for annotation in annotations {
        *per_class.entry(annotation.class_id).or_default() += 1;
    }

    let boxes: Vec<BoxEntry> = annotations
        .iter()
        .enumerate()
        .map(|(index, annotation)| BoxEntry {
            index: index + 1,
            annotation: *annotation,
            outside_frame: annotation.extends_outside_frame(),
            pixel: opts
                .image_size
                .map(|(width, height)| annotation.to_pixel_box(width, height)),
        })
        .collect();

    let summary = SummarySection {
        annotations: annotations.len(),
        skipped_lines: parse_report.skipped_count(),
        distinct_classes: per_class.len(),
        outside_frame: boxes.iter().filter(|entry| entry.outside_frame).count(),
    };

    InspectReport {
        summary,
        image_size: opts.image_size,
        classes: per_class
            .into_iter()
            .map(|(class_id, count)| ClassCount { class_id, count })
            .collect(),
        boxes,
        skipped: parse_report.skipped.clone(),
    }
}
