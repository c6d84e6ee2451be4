//! `SuperpixelMap`: validated label grid plus its derived structures.
//!
//! Construction validates the grid against the region count, then derives
//! the region index and the adjacency graph. Both passes read only the
//! immutable labels and write disjoint outputs, so they run under
//! `rayon::join`. Contour masks are derived on demand because the thickness
//! threshold varies per call.
use crate::adjacency::AdjacencyGraph;
use crate::contour;
use crate::error::SuperpixelError;
use crate::grid::{GridView, LabelMap, LabelView, Mask};
use crate::regions::RegionIndex;
use crate::segmentation::{Segmentation, SegmentationParams, Segmented};
use log::debug;
use serde::Serialize;

#[derive(Debug)]
pub struct SuperpixelMap {
    labels: LabelMap,
    region_count: usize,
    index: RegionIndex,
    graph: AdjacencyGraph,
}

/// Serializable overview of a derived map, for reports and logs.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSummary {
    pub region_count: usize,
    pub width: usize,
    pub height: usize,
    pub adjacent_pairs: usize,
    pub max_degree: usize,
    pub mean_region_px: f32,
}

impl SuperpixelMap {
    /// Derive the region index and adjacency graph from a label grid.
    ///
    /// Every label must lie in `[0, region_count)` and every id in that
    /// range must cover at least one pixel; violations are reported instead
    /// of producing corrupt derived data.
    pub fn from_labels(labels: LabelMap, region_count: usize) -> Result<Self, SuperpixelError> {
        let (index, graph) = {
            let view = labels.as_view();
            rayon::join(
                || RegionIndex::build(&view, region_count),
                || AdjacencyGraph::build(&view, region_count),
            )
        };
        let index = index?;
        let graph = graph?;
        debug!(
            "superpixel map: {} regions, {} adjacent pairs, {}x{} grid",
            region_count,
            graph.pair_count(),
            labels.width(),
            labels.height()
        );
        Ok(Self {
            labels,
            region_count,
            index,
            graph,
        })
    }

    /// Run an external segmentation oracle, then derive from its output.
    pub fn from_segmentation<I, S: Segmentation<I>>(
        oracle: &S,
        image: &I,
        params: &SegmentationParams,
    ) -> Result<Self, SuperpixelError> {
        let Segmented {
            labels,
            region_count,
        } = oracle.segment(image, params)?;
        Self::from_labels(labels, region_count)
    }

    pub fn region_count(&self) -> usize {
        self.region_count
    }

    pub fn width(&self) -> usize {
        self.labels.width()
    }

    pub fn height(&self) -> usize {
        self.labels.height()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.labels.dimensions()
    }

    /// Read-only view of the label grid.
    pub fn labels(&self) -> LabelView<'_> {
        self.labels.as_view()
    }

    /// Boundary mask between differently-labeled regions; `thick` selects
    /// the wider line-width threshold. Computed fresh on every call.
    pub fn contour_mask(&self, thick: bool) -> Mask {
        contour::contour_mask(&self.labels.as_view(), thick)
    }

    /// Pixels covered by region `id`, in raster-scan order.
    pub fn region_extent(&self, id: usize) -> Result<&[(u32, u32)], SuperpixelError> {
        self.index.extent(id)
    }

    /// Truncated integer centroid of region `id`.
    pub fn region_centroid(&self, id: usize) -> Result<(u32, u32), SuperpixelError> {
        self.index.centroid(id)
    }

    /// True iff regions `a` and `b` touch anywhere under 8-connectivity.
    pub fn adjacent(&self, a: usize, b: usize) -> Result<bool, SuperpixelError> {
        self.graph.adjacent(a, b)
    }

    /// Sorted ids of the regions touching `id`.
    pub fn neighbors(&self, id: usize) -> Result<&[u32], SuperpixelError> {
        self.graph.neighbors(id)
    }

    /// All adjacent pairs, smaller id first, each pair once.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.graph.iter_pairs()
    }

    pub fn summary(&self) -> MapSummary {
        let (width, height) = self.dimensions();
        MapSummary {
            region_count: self.region_count,
            width,
            height,
            adjacent_pairs: self.graph.pair_count(),
            max_degree: self.graph.max_degree(),
            mean_region_px: (width * height) as f32 / self.region_count.max(1) as f32,
        }
    }
}
