use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Nearby mine counts for every cell of a layout, indexed `[x, y]`.
///
/// Mine cells carry `0`; every other cell counts the mines in its 3×3 block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    nearby_mine_count: Array2<u8>,
}

impl Hint {
    pub fn from_layout(layout: &MineLayout) -> Self {
        let mut nearby_mine_count: Array2<u8> = Array2::default(layout.size().to_nd_index());

        for mine in layout.mine_coords() {
            for pos in layout.iter_neighbors(mine) {
                if layout[pos] {
                    continue;
                }
                nearby_mine_count[pos.to_nd_index()] += 1;
            }
        }

        Self { nearby_mine_count }
    }

    pub fn count_at(&self, coords: Coord2) -> u8 {
        self.nearby_mine_count[coords.to_nd_index()]
    }

    /// Row-to-column matrix: `rows[y][x]`.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        let (x_end, y_end) = board_size(&self.nearby_mine_count);
        (0..y_end)
            .map(|y| (0..x_end).map(|x| self.count_at((x, y))).collect())
            .collect()
    }
}
