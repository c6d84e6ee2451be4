//! Owned binary mask in row-major layout, used for contour output.
use crate::grid::traits::GridView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub w: usize,
    pub h: usize,
    pub data: Vec<bool>,
}

impl Mask {
    /// All-background mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    /// Panics when (x, y) lies outside the mask; use [`GridView::get`] for a
    /// fallible lookup.
    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        assert!(
            x < self.w && y < self.h,
            "mask access ({x}, {y}) outside {}x{}",
            self.w,
            self.h
        );
        self.data[y * self.w + x]
    }

    /// Number of marked pixels.
    pub fn marked(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    /// True if every marked pixel of `self` is also marked in `other`.
    pub fn subset_of(&self, other: &Mask) -> bool {
        self.w == other.w
            && self.h == other.h
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| !a || b)
    }
}

impl GridView for Mask {
    type Cell = bool;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}
