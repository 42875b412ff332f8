//! Annotation data and geometry for boxview.
//!
//! Label files describe boxes by normalized center and size; drawing needs
//! pixel corners. The types here keep the two apart:
//!
//! - [`BoundingBoxAnnotation`] holds a label row exactly as written.
//! - [`BBoxXYXY`] holds corners, tagged with [`Normalized`] or [`Pixel`] so
//!   the two spaces cannot be mixed by accident.
//!
//! # Example
//!
//! ```
//! use boxview::ir::io_yolo::parse;
//!
//! let set = parse("1 0.5 0.5 0.5 0.5\n");
//! let bbox = set.as_slice()[0].to_pixel_box(100, 200);
//!
//! assert_eq!((bbox.xmin(), bbox.ymin()), (25.0, 50.0));
//! assert_eq!((bbox.xmax(), bbox.ymax()), (75.0, 150.0));
//! ```

mod bbox;
mod coord;
pub mod io_yolo;
mod model;
mod space;

pub use bbox::BBoxXYXY;
pub use coord::Coord;
pub use model::{AnnotationSet, BoundingBoxAnnotation};
pub use space::{Normalized, Pixel};
