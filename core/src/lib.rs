#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use hint::*;
pub use reducer::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod hint;
mod reducer;
mod types;

/// Dimensions and mine density requested for a new board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mine_density: u8,
}

impl BoardConfig {
    pub fn new(size: Coord2, mine_density: u8) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if mine_density > 100 {
            return Err(GameError::InvalidDensity);
        }
        Ok(Self { size, mine_density })
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// `ceil(width * height * density / 100)`.
    pub const fn mine_count(&self) -> CellCount {
        let scaled = self.total_cells() as u64 * self.mine_density as u64;
        scaled.div_ceil(100) as CellCount
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout from explicit coordinates; duplicates collapse into one mine.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        board_size(&self.mine_mask)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mine coordinates ordered by row, then column.
    pub fn mine_coords(&self) -> Vec<Coord2> {
        let (x_end, y_end) = self.size();
        let mut coords = Vec::with_capacity(self.mine_count as usize);
        for y in 0..y_end {
            for x in 0..x_end {
                if self[(x, y)] {
                    coords.push((x, y));
                }
            }
        }
        coords
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }

    pub(crate) fn iter_orthogonal(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_orthogonal(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.mine_mask[(x as usize, y as usize)]
    }
}
