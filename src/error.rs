//! Unified error type for label-map validation and region queries.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuperpixelError {
    /// A label in the grid lies outside `[0, region_count)`.
    #[error("label {label} at ({x}, {y}) outside [0, {region_count})")]
    LabelOutOfRange {
        x: usize,
        y: usize,
        label: u32,
        region_count: usize,
    },
    /// A region id in `[0, region_count)` covers no pixels, so its centroid
    /// is undefined.
    #[error("region {id} has an empty extent (region count {region_count})")]
    EmptyRegion { id: usize, region_count: usize },
    /// A query referenced a region id at or beyond the region count.
    #[error("region id {id} outside [0, {region_count})")]
    RegionOutOfBounds { id: usize, region_count: usize },
    /// A raw buffer does not match the declared grid dimensions.
    #[error("size mismatch: expected {expected} cells, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// A strided view was declared with a stride shorter than its width.
    #[error("stride {stride} shorter than width {width}")]
    InvalidStride { stride: usize, width: usize },
    /// The external segmentation oracle reported a failure.
    #[error("segmentation failed: {0}")]
    Segmentation(String),
}
