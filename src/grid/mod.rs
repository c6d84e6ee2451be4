pub mod io;
pub mod labels;
pub mod mask;
pub mod traits;

pub use self::labels::{LabelMap, LabelView};
pub use self::mask::Mask;
pub use self::traits::{GridView, Rows};

/// 8-connectivity neighbor offsets, starting west and walking the ring.
///
/// Both raster passes use this fixed order; keep it stable so differing
/// neighbor counts stay reproducible across versions.
pub const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];
