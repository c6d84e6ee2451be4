//! Region index: per-region pixel extents and integer centroids.
//!
//! A single raster scan (y outer, x inner) buckets every pixel coordinate by
//! its label. Centroids are the per-axis arithmetic means of a region's
//! extent, truncated by integer division. The oracle contract says every id
//! in `[0, region_count)` covers at least one pixel; an empty extent would
//! make the centroid a division by zero, so it is rejected as invalid input
//! rather than skipped.
use crate::error::SuperpixelError;
use crate::grid::{GridView, LabelView};
use log::debug;

#[derive(Debug)]
pub struct RegionIndex {
    extents: Vec<Vec<(u32, u32)>>,
    centroids: Vec<(u32, u32)>,
}

impl RegionIndex {
    /// Scan the label grid and build extents and centroids for all regions.
    ///
    /// Fails fast on any label outside `[0, region_count)` and on any region
    /// id with no pixels.
    pub fn build(labels: &LabelView<'_>, region_count: usize) -> Result<Self, SuperpixelError> {
        let mut extents = vec![Vec::new(); region_count];
        for (y, row) in labels.rows().enumerate() {
            for (x, &label) in row.iter().enumerate() {
                let id = label as usize;
                if id >= region_count {
                    return Err(SuperpixelError::LabelOutOfRange {
                        x,
                        y,
                        label,
                        region_count,
                    });
                }
                extents[id].push((x as u32, y as u32));
            }
        }

        let mut centroids = Vec::with_capacity(region_count);
        for (id, extent) in extents.iter().enumerate() {
            if extent.is_empty() {
                return Err(SuperpixelError::EmptyRegion { id, region_count });
            }
            let mut sum_x = 0u64;
            let mut sum_y = 0u64;
            for &(x, y) in extent {
                sum_x += u64::from(x);
                sum_y += u64::from(y);
            }
            let n = extent.len() as u64;
            centroids.push(((sum_x / n) as u32, (sum_y / n) as u32));
        }

        debug!(
            "region index: {} regions over {}x{} grid",
            region_count,
            labels.width(),
            labels.height()
        );
        Ok(Self { extents, centroids })
    }

    pub fn region_count(&self) -> usize {
        self.extents.len()
    }

    /// Pixel coordinates covered by `id`, in raster-scan order.
    pub fn extent(&self, id: usize) -> Result<&[(u32, u32)], SuperpixelError> {
        self.extents
            .get(id)
            .map(Vec::as_slice)
            .ok_or(SuperpixelError::RegionOutOfBounds {
                id,
                region_count: self.extents.len(),
            })
    }

    /// Truncated integer centroid of `id`.
    pub fn centroid(&self, id: usize) -> Result<(u32, u32), SuperpixelError> {
        self.centroids
            .get(id)
            .copied()
            .ok_or(SuperpixelError::RegionOutOfBounds {
                id,
                region_count: self.centroids.len(),
            })
    }

    pub fn centroids(&self) -> &[(u32, u32)] {
        &self.centroids
    }
}
