use crate::*;
pub use random::*;

mod random;

pub trait MineLayoutGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout;
}
