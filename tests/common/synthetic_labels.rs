//! Synthetic label maps standing in for a real segmentation oracle.
use superpixel_graph::LabelMap;

/// Square blocks of side `cell`, labeled in raster order. `width` and
/// `height` must be multiples of `cell`.
pub fn block_grid(width: usize, height: usize, cell: usize) -> (LabelMap, usize) {
    assert!(width % cell == 0 && height % cell == 0);
    let cols = width / cell;
    let labels = LabelMap::from_fn(width, height, |x, y| ((y / cell) * cols + x / cell) as u32);
    (labels, cols * (height / cell))
}

/// Vertical stripes of width `stripe`; a final narrower stripe keeps every
/// remainder column labeled.
pub fn vertical_stripes(width: usize, height: usize, stripe: usize) -> (LabelMap, usize) {
    let labels = LabelMap::from_fn(width, height, |x, _| (x / stripe) as u32);
    (labels, width.div_ceil(stripe))
}

/// The 3x3 map `[[0,0,1],[0,0,1],[2,2,1]]` with three regions.
pub fn three_by_three() -> (LabelMap, usize) {
    let labels = LabelMap::from_vec(3, 3, vec![0, 0, 1, 0, 0, 1, 2, 2, 1]).unwrap();
    (labels, 3)
}
