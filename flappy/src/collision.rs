use crate::obstacle::{Band, Extent, Thresholds};

/// Whether a bird at (`row`, `x`) touches an obstacle
///
/// Both the band test and the column test are inclusive. A `Low` obstacle
/// hits every row from `thresholds.top` down, a `High` one every row from
/// the top down to `thresholds.bottom`.
pub fn collides(row: u8, x: u8, extent: &Extent, thresholds: Thresholds) -> bool {
    let in_band = match extent.band {
        Band::Low => row >= thresholds.top,
        Band::High => row <= thresholds.bottom,
    };
    in_band && extent.start <= x && x <= extent.end
}

/// Index of the first obstacle the bird touches, if any
pub fn first_collision<I>(row: u8, x: u8, extents: I, thresholds: Thresholds) -> Option<usize>
where
    I: IntoIterator<Item = Extent>,
{
    extents
        .into_iter()
        .position(|extent| collides(row, x, &extent, thresholds))
}
