//! Inspect report types and terminal formatting.

use std::fmt;

use serde::Serialize;

use crate::ir::io_yolo::SkippedLine;
use crate::ir::{BBoxXYXY, BoundingBoxAnnotation, Pixel};

/// The result of inspecting a label file.
#[derive(Clone, Debug, Serialize)]
pub struct InspectReport {
    pub summary: SummarySection,
    /// Image `(width, height)` used for pixel corners, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<(u32, u32)>,
    /// Annotation count per class id, ascending by id.
    pub classes: Vec<ClassCount>,
    /// Every parsed box, in file order.
    pub boxes: Vec<BoxEntry>,
    /// Lines the parser dropped.
    pub skipped: Vec<SkippedLine>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct SummarySection {
    pub annotations: usize,
    pub skipped_lines: usize,
    pub distinct_classes: usize,
    /// Boxes with some part outside the unit square.
    pub outside_frame: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassCount {
    pub class_id: i64,
    pub count: usize,
}

/// One parsed box, with its pixel corners when the image size is known.
#[derive(Clone, Debug, Serialize)]
pub struct BoxEntry {
    /// 1-based position among the parsed boxes.
    pub index: usize,
    pub annotation: BoundingBoxAnnotation,
    pub outside_frame: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel: Option<BBoxXYXY<Pixel>>,
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_summary(f)?;
        writeln!(f)?;
        self.fmt_classes(f)?;
        writeln!(f)?;
        self.fmt_boxes(f)?;

        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped lines ({}):", self.skipped.len())?;
            for skipped in &self.skipped {
                writeln!(f, "  [SKIP] line {}: {}", skipped.line, skipped.issue)?;
            }
        }
        Ok(())
    }
}

impl InspectReport {
    fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "Summary")?;
        writeln!(f, "  Annotations:      {:>6}", s.annotations)?;
        writeln!(f, "  Skipped lines:    {:>6}", s.skipped_lines)?;
        writeln!(f, "  Distinct classes: {:>6}", s.distinct_classes)?;
        writeln!(f, "  Outside frame:    {:>6}", s.outside_frame)?;
        if let Some((width, height)) = self.image_size {
            writeln!(f, "  Image size:       {}x{}", width, height)?;
        }
        Ok(())
    }

    fn fmt_classes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Classes")?;
        if self.classes.is_empty() {
            return writeln!(f, "  No annotations found.");
        }
        for class in &self.classes {
            writeln!(f, "  class {:<8} {:>6}", class.class_id, class.count)?;
        }
        Ok(())
    }

    fn fmt_boxes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Boxes")?;
        for entry in &self.boxes {
            let ann = &entry.annotation;
            write!(
                f,
                "  #{:<4} class {:<4} center=({:.4}, {:.4}) size=({:.4}, {:.4})",
                entry.index, ann.class_id, ann.x_center, ann.y_center, ann.width, ann.height
            )?;
            if let Some(pixel) = &entry.pixel {
                write!(
                    f,
                    " px=({:.1}, {:.1})-({:.1}, {:.1})",
                    pixel.xmin(),
                    pixel.ymin(),
                    pixel.xmax(),
                    pixel.ymax()
                )?;
            }
            if entry.outside_frame {
                write!(f, " [outside frame]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
