use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Board size of a `[x, y]` indexed array, in coordinate units.
pub fn board_size<T>(board: &Array2<T>) -> Coord2 {
    let (x, y) = board.dim();
    (
        Coord::try_from(x).unwrap_or(Coord::MAX),
        Coord::try_from(y).unwrap_or(Coord::MAX),
    )
}

pub trait NeighborIterExt {
    /// The surrounding 3×3 block, minus the center.
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;

    /// Axis-aligned neighbors only, in `x-1, x+1, y-1, y+1` order.
    fn iter_orthogonal(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, board_size(self), &DISPLACEMENTS)
    }

    fn iter_orthogonal(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, board_size(self), &ORTHOGONAL_DISPLACEMENTS)
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const ORTHOGONAL_DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    displacements: &'static [(isize, isize)],
    index: usize,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2, displacements: &'static [(isize, isize)]) -> Self {
        Self {
            center,
            bounds,
            displacements,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.displacements.get(self.index)?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}
