use super::*;

/// Uniformly random layout: every subset of `mine_count` cells is equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineLayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        let mines = config.mine_count().min(total_cells);

        // optimize for full boards
        if mines == total_cells {
            log::debug!("Every cell of a {:?} board is a mine", config.size);
            return MineLayout::from_mine_mask(Array2::from_elem(config.size.to_nd_index(), true));
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let (width, _) = config.size;
        let width = usize::from(width);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for index in rand::seq::index::sample(&mut rng, total_cells as usize, mines as usize) {
            let coords = [index % width, index / width];
            mine_mask[coords] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        if layout.mine_count() != config.mine_count() {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mine_count()
            );
        }
        layout
    }
}
