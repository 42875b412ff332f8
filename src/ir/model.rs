//! Annotation records parsed from a label file.
//!
//! A [`BoundingBoxAnnotation`] is one row of the label file, kept exactly as
//! written (normalized center and size). An [`AnnotationSet`] is every row that
//! parsed, in file order.

use serde::Serialize;
use std::fmt;

use super::bbox::BBoxXYXY;
use super::space::{Normalized, Pixel};

/// One labeled region: class id plus normalized center and size.
///
/// No range checks are applied. A `class_id` of `-1` or an `x_center` of `1.4`
/// is kept as-is and simply draws wherever the arithmetic puts it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingBoxAnnotation {
    pub class_id: i64,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBoxAnnotation {
    pub fn new(class_id: i64, x_center: f64, y_center: f64, width: f64, height: f64) -> Self {
        Self {
            class_id,
            x_center,
            y_center,
            width,
            height,
        }
    }

    /// Corners of this annotation in image fractions.
    pub fn normalized_box(&self) -> BBoxXYXY<Normalized> {
        BBoxXYXY::from_center_size(self.x_center, self.y_center, self.width, self.height)
    }

    /// Returns true if any part of the box lies outside the unit square.
    pub fn extends_outside_frame(&self) -> bool {
        let bbox = self.normalized_box();
        bbox.xmin() < 0.0 || bbox.ymin() < 0.0 || bbox.xmax() > 1.0 || bbox.ymax() > 1.0
    }

    /// Converts this annotation to pixel corners for an image of the given size.
    ///
    /// The size is scaled first (`width * image_width`), then the top-left
    /// corner is placed half that size before the scaled center, and the
    /// bottom-right corner is the top-left plus the scaled size.
    pub fn to_pixel_box(&self, image_width: u32, image_height: u32) -> BBoxXYXY<Pixel> {
        let image_width = f64::from(image_width);
        let image_height = f64::from(image_height);

        BBoxXYXY::from_center_size(
            self.x_center * image_width,
            self.y_center * image_height,
            self.width * image_width,
            self.height * image_height,
        )
    }
}

impl fmt::Display for BoundingBoxAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBoxAnnotation(class_id={}, x_center={}, y_center={}, width={}, height={})",
            self.class_id, self.x_center, self.y_center, self.width, self.height
        )
    }
}

/// Every well-formed row of a label file, in the order the rows appeared.
///
/// Duplicates and overlaps are kept; each one is drawn on its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnnotationSet {
    annotations: Vec<BoundingBoxAnnotation>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, annotation: BoundingBoxAnnotation) {
        self.annotations.push(annotation);
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoundingBoxAnnotation> {
        self.annotations.iter()
    }

    pub fn as_slice(&self) -> &[BoundingBoxAnnotation] {
        &self.annotations
    }
}

impl From<Vec<BoundingBoxAnnotation>> for AnnotationSet {
    fn from(annotations: Vec<BoundingBoxAnnotation>) -> Self {
        Self { annotations }
    }
}

impl FromIterator<BoundingBoxAnnotation> for AnnotationSet {
    fn from_iter<I: IntoIterator<Item = BoundingBoxAnnotation>>(iter: I) -> Self {
        Self {
            annotations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AnnotationSet {
    type Item = BoundingBoxAnnotation;
    type IntoIter = std::vec::IntoIter<BoundingBoxAnnotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnnotationSet {
    type Item = &'a BoundingBoxAnnotation;
    type IntoIter = std::slice::Iter<'a, BoundingBoxAnnotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}
