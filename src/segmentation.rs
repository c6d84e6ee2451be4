//! Seam to the external over-segmentation oracle.
//!
//! The core never runs a clustering algorithm itself; it consumes the label
//! grid and region count an oracle reports. Keeping the oracle behind a
//! trait, generic over the image type, lets every test feed synthetic label
//! maps instead of linking a real segmenter.
use crate::error::SuperpixelError;
use crate::grid::LabelMap;
use serde::{Deserialize, Serialize};

/// Clustering algorithm variant, passed through to the oracle untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlicVariant {
    Slic,
    Slico,
    Mslic,
}

/// Tuning parameters forwarded to the oracle.
///
/// None of these are interpreted here; they exist so callers can configure
/// the oracle through the same surface that constructs the map.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SegmentationParams {
    pub variant: SlicVariant,
    /// Average superpixel side length in pixels.
    pub region_size: u32,
    /// Compactness weight trading color proximity for spatial proximity.
    pub ruler: f32,
    /// Number of clustering iterations.
    pub num_iter: u32,
    /// Minimum element size for connectivity enforcement; 0 disables it.
    pub min_element_size: u32,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self {
            variant: SlicVariant::Slic,
            region_size: 10,
            ruler: 10.0,
            num_iter: 5,
            min_element_size: 25,
        }
    }
}

/// Output of a segmentation run: the dense label grid and the region count
/// the oracle reports for it.
#[derive(Debug)]
pub struct Segmented {
    pub labels: LabelMap,
    pub region_count: usize,
}

/// An over-segmentation oracle producing a label grid from an image.
///
/// Generic over the image type so this crate stays agnostic to pixel formats
/// and color spaces; an implementation owns whatever preprocessing it needs.
pub trait Segmentation<I> {
    fn segment(&self, image: &I, params: &SegmentationParams)
        -> Result<Segmented, SuperpixelError>;
}
