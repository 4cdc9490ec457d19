use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use crate::*;

/// A recorded move that sits at one board coordinate.
pub trait PlacedMove {
    fn coords(&self) -> Coord2;
    fn state(&self) -> MoveState;
}

impl PlacedMove for (Coord2, MoveState) {
    fn coords(&self) -> Coord2 {
        self.0
    }

    fn state(&self) -> MoveState {
        self.1
    }
}

impl<M: PlacedMove> PlacedMove for &M {
    fn coords(&self) -> Coord2 {
        (**self).coords()
    }

    fn state(&self) -> MoveState {
        (**self).state()
    }
}

/// Keeps the first item seen for every key, preserving first-seen order.
///
/// Fed a newest-first history this keeps the latest entry per key.
pub fn dedup_newest_first<M, K, F>(moves: impl IntoIterator<Item = M>, key: F) -> Vec<M>
where
    K: Ord,
    F: Fn(&M) -> K,
{
    let mut seen = BTreeSet::new();
    let mut latest = Vec::new();

    for m in moves {
        if seen.insert(key(&m)) {
            latest.push(m);
        }
    }

    latest
}

/// One canonical move per coordinate, reduced from a newest-first history.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveLog<M> {
    moves: Vec<M>,
    index: BTreeMap<Coord2, usize>,
}

impl<M: PlacedMove> MoveLog<M> {
    pub fn from_newest_first(history: impl IntoIterator<Item = M>) -> Self {
        let moves = dedup_newest_first(history, |m: &M| m.coords());
        let index = moves
            .iter()
            .enumerate()
            .map(|(i, m)| (m.coords(), i))
            .collect();
        Self { moves, index }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get(&self, coords: Coord2) -> Option<&M> {
        self.index.get(&coords).map(|&i| &self.moves[i])
    }

    pub fn state_at(&self, coords: Coord2) -> Option<MoveState> {
        self.get(coords).map(|m| m.state())
    }

    /// Latest moves, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.moves.iter()
    }

    pub fn into_moves(self) -> Vec<M> {
        self.moves
    }
}
