//! Label grid containers.
//!
//! `LabelMap` owns a dense row-major `u32` raster (stride == width) as
//! produced by an over-segmentation oracle; `LabelView` borrows one, with an
//! arbitrary stride so callers can hand in a sub-window of a larger buffer.
//! Neither type interprets label values; range checks against the region
//! count happen in the derivation passes.
use crate::error::SuperpixelError;
use crate::grid::traits::GridView;

/// Borrowed, possibly strided view over a label grid.
#[derive(Clone, Copy, Debug)]
pub struct LabelView<'a> {
    pub w: usize,
    pub h: usize,
    /// Number of `u32` elements between consecutive rows.
    pub stride: usize,
    pub data: &'a [u32],
}

impl<'a> LabelView<'a> {
    /// Wrap a raw slice, validating stride and length.
    pub fn from_slice(
        w: usize,
        h: usize,
        stride: usize,
        data: &'a [u32],
    ) -> Result<Self, SuperpixelError> {
        if stride < w {
            return Err(SuperpixelError::InvalidStride { stride, width: w });
        }
        let min_len = stride * h;
        if data.len() < min_len {
            return Err(SuperpixelError::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }
        Ok(Self { w, h, stride, data })
    }

    /// Panics when (x, y) lies outside the view; use [`GridView::get`] for a
    /// fallible lookup.
    #[inline]
    pub fn label(&self, x: usize, y: usize) -> u32 {
        assert!(
            x < self.w && y < self.h,
            "label access ({x}, {y}) outside {}x{}",
            self.w,
            self.h
        );
        self.data[y * self.stride + x]
    }
}

impl<'a> GridView for LabelView<'a> {
    type Cell = u32;

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
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned label grid in row-major layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelMap {
    w: usize,
    h: usize,
    data: Vec<u32>,
}

impl LabelMap {
    /// Take ownership of a raw buffer, checking it matches `w × h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<u32>) -> Result<Self, SuperpixelError> {
        let expected = w * h;
        if data.len() != expected {
            return Err(SuperpixelError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> u32) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self { w, h, data }
    }

    /// Panics when (x, y) lies outside the grid; use [`GridView::get`] for a
    /// fallible lookup.
    #[inline]
    pub fn label(&self, x: usize, y: usize) -> u32 {
        assert!(
            x < self.w && y < self.h,
            "label access ({x}, {y}) outside {}x{}",
            self.w,
            self.h
        );
        self.data[y * self.w + x]
    }

    pub fn as_view(&self) -> LabelView<'_> {
        LabelView {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }
}

impl GridView for LabelMap {
    type Cell = u32;

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
    fn row(&self, y: usize) -> &[u32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}
