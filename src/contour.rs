//! Pointwise contour extraction over a label grid.
//!
//! For every pixel, count the in-bounds 8-neighbors whose label differs from
//! the center. The pixel is marked as boundary iff that count exceeds the
//! line-width threshold: 2 for a thick line, 1 for a thin one. Classification
//! reads only the original labels, never mask values written earlier in the
//! pass, so output rows are independent and the scan parallelizes over rows.
//!
//! With a pure threshold rule the thick mask (count > 2) is a subset of the
//! thin mask (count > 1): raising the threshold can only unmark pixels.
use crate::grid::{GridView, LabelView, Mask, NEIGHBORS_8};
use log::debug;
use rayon::prelude::*;

/// Count of differing in-bounds 8-neighbors of (x, y).
#[inline]
fn differing_neighbors(labels: &LabelView<'_>, x: usize, y: usize) -> usize {
    let w = labels.width() as isize;
    let h = labels.height() as isize;
    let center = labels.label(x, y);
    let mut np = 0;
    for (dx, dy) in NEIGHBORS_8 {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        if nx >= 0 && nx < w && ny >= 0 && ny < h && labels.label(nx as usize, ny as usize) != center
        {
            np += 1;
        }
    }
    np
}

/// Derive a boundary mask from the label grid.
///
/// `thick` selects the line-width threshold (2 rather than 1). The mask is
/// computed fresh on every call; nothing is cached across thickness values.
pub fn contour_mask(labels: &LabelView<'_>, thick: bool) -> Mask {
    let line_width = if thick { 2 } else { 1 };
    let (w, h) = labels.dimensions();
    let mut mask = Mask::new(w, h);
    if w == 0 || h == 0 {
        return mask;
    }

    mask.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| {
            for (x, out) in out_row.iter_mut().enumerate() {
                *out = differing_neighbors(labels, x, y) > line_width;
            }
        });

    debug!(
        "contour mask: {}x{} thick={} marked={}",
        w,
        h,
        thick,
        mask.marked()
    );
    mask
}
