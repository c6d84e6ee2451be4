/// Read-only access to a row-major 2D raster.
///
/// The label map and every derived mask implement this, so passes and I/O
/// helpers can walk any grid row by row without caring about ownership.
pub trait GridView {
    type Cell: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Cell];

    /// Bounds-checked cell access.
    fn get(&self, x: usize, y: usize) -> Option<Self::Cell> {
        (x < self.width() && y < self.height()).then(|| self.row(y)[x])
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { grid: self, y: 0 }
    }

    fn is_contiguous(&self) -> bool {
        self.stride() == self.width()
    }
}

pub struct Rows<'a, G: ?Sized + GridView> {
    grid: &'a G,
    y: usize,
}

impl<'a, G: GridView> Iterator for Rows<'a, G> {
    type Item = &'a [G::Cell];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.grid.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.grid.row(y))
    }
}
