//! Axis-aligned boxes stored as corner pairs.

use serde::Serialize;

use super::coord::Coord;

/// An axis-aligned bounding box in XYXY form (xmin, ymin, xmax, ymax).
///
/// The constructor does not require `min <= max`; a box built from a
/// negative width is representable and simply reports itself as unordered.
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxXYXY<TSpace> {
    pub min: Coord<TSpace>,
    pub max: Coord<TSpace>,
}

impl<TSpace> BBoxXYXY<TSpace> {
    #[inline]
    pub fn new(min: Coord<TSpace>, max: Coord<TSpace>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn from_xyxy(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            min: Coord::new(xmin, ymin),
            max: Coord::new(xmax, ymax),
        }
    }

    /// Builds a box from its center point and size.
    ///
    /// The top-left corner is `center - size / 2` and the bottom-right corner
    /// is `top-left + size`, in that order, so callers get the same rounding
    /// no matter which axis they look at.
    #[inline]
    pub fn from_center_size(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        let xmin = cx - width / 2.0;
        let ymin = cy - height / 2.0;
        Self::from_xyxy(xmin, ymin, xmin + width, ymin + height)
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn ymin(&self) -> f64 {
        self.min.y
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.max.x
    }

    #[inline]
    pub fn ymax(&self) -> f64 {
        self.max.y
    }

    /// May be negative if `xmax < xmin`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// May be negative if `ymax < ymin`.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Returns true if `min <= max` on both axes.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

impl<TSpace> std::fmt::Debug for BBoxXYXY<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxXYXY")
            .field("xmin", &self.min.x)
            .field("ymin", &self.min.y)
            .field("xmax", &self.max.x)
            .field("ymax", &self.max.y)
            .finish()
    }
}

// Hand-written so that TSpace needs no Serialize bound.
impl<TSpace> Serialize for BBoxXYXY<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("BBoxXYXY", 4)?;
        state.serialize_field("xmin", &self.min.x)?;
        state.serialize_field("ymin", &self.min.y)?;
        state.serialize_field("xmax", &self.max.x)?;
        state.serialize_field("ymax", &self.max.y)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Normalized, Pixel};

    #[test]
    fn from_center_size_places_corners() {
        let bbox: BBoxXYXY<Pixel> = BBoxXYXY::from_center_size(50.0, 100.0, 50.0, 100.0);
        assert_eq!(bbox.xmin(), 25.0);
        assert_eq!(bbox.ymin(), 50.0);
        assert_eq!(bbox.xmax(), 75.0);
        assert_eq!(bbox.ymax(), 150.0);
        assert_eq!(bbox.width(), 50.0);
        assert_eq!(bbox.height(), 100.0);
    }

    #[test]
    fn negative_size_is_representable_but_unordered() {
        let bbox: BBoxXYXY<Normalized> = BBoxXYXY::from_center_size(0.5, 0.5, -0.2, 0.1);
        assert!(!bbox.is_ordered());
        assert!(bbox.width() < 0.0);
    }

    #[test]
    fn non_finite_corners_are_reported() {
        let bbox: BBoxXYXY<Pixel> = BBoxXYXY::from_xyxy(0.0, 0.0, f64::INFINITY, 4.0);
        assert!(!bbox.is_finite());
        assert!(BBoxXYXY::<Pixel>::from_xyxy(-3.0, -3.0, 4.0, 4.0).is_finite());
    }

    #[test]
    fn serializes_as_named_corners() {
        let bbox: BBoxXYXY<Pixel> = BBoxXYXY::from_xyxy(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&bbox).expect("serialize bbox");
        assert_eq!(json, r#"{"xmin":1.0,"ymin":2.0,"xmax":3.0,"ymax":4.0}"#);
    }
}
