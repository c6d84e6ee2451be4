//! Region-structured data derived from superpixel label maps.
//!
//! An external over-segmentation algorithm assigns every pixel of an image
//! to one of `N` regions. This crate consumes that dense label grid and
//! derives three structures from it:
//!
//! - a region index (per-region pixel extents and integer centroids),
//! - a binary contour mask marking boundaries between regions, with a
//!   thick/thin line-width threshold,
//! - a sparse symmetric region-adjacency graph under 8-connectivity.
//!
//! The segmentation algorithm itself stays behind the
//! [`Segmentation`](crate::segmentation::Segmentation) trait; all
//! derivations work on synthetic label maps just as well as on real SLIC
//! output.

// Public modules (stable-ish surface)
pub mod adjacency;
pub mod contour;
pub mod error;
pub mod grid;
pub mod regions;
pub mod segmentation;
pub mod superpixels;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::SuperpixelError;
pub use crate::grid::{LabelMap, LabelView, Mask};
pub use crate::segmentation::{Segmentation, SegmentationParams, Segmented, SlicVariant};
pub use crate::superpixels::{MapSummary, SuperpixelMap};

/// Small prelude for quick experiments.
///
/// ```
/// use superpixel_graph::prelude::*;
///
/// let labels = LabelMap::from_vec(3, 3, vec![0, 0, 1, 0, 0, 1, 2, 2, 1])?;
/// let map = SuperpixelMap::from_labels(labels, 3)?;
///
/// assert!(map.adjacent(0, 1)?);
/// assert_eq!(map.region_centroid(2)?, (0, 2));
/// assert_eq!(map.contour_mask(false).w, 3);
/// # Ok::<(), superpixel_graph::SuperpixelError>(())
/// ```
pub mod prelude {
    pub use crate::grid::{GridView, LabelMap, Mask};
    pub use crate::{SegmentationParams, SuperpixelError, SuperpixelMap};
}
