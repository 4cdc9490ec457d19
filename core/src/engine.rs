use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One cell write produced while applying a move, in the order it happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub coords: Coord2,
    pub state: MoveState,
}

impl PlacedMove for CellChange {
    fn coords(&self) -> Coord2 {
        self.coords
    }

    fn state(&self) -> MoveState {
        self.state
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum VisitOutcome {
    /// The session had already ended; nothing was touched.
    Concluded(SessionState),
    Applied {
        changes: Vec<CellChange>,
        state: SessionState,
    },
}

impl VisitOutcome {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn state(&self) -> SessionState {
        match self {
            Self::Concluded(state) => *state,
            Self::Applied { state, .. } => *state,
        }
    }

    pub fn changes(&self) -> &[CellChange] {
        match self {
            Self::Concluded(_) => &[],
            Self::Applied { changes, .. } => changes,
        }
    }
}

/// Authoritative board of one session: the mine layout plus the latest
/// recorded state of every touched cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    mine_layout: MineLayout,
    board: Array2<Option<MoveState>>,
    state: SessionState,
}

impl GameEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            state: Default::default(),
        }
    }

    /// Rebuilds the board from a reduced move log.
    ///
    /// Entries outside the board are ignored.
    pub fn replay<M: PlacedMove>(
        mine_layout: MineLayout,
        state: SessionState,
        moves: &MoveLog<M>,
    ) -> Self {
        let mut engine = Self::new(mine_layout);
        engine.state = state;

        for m in moves.iter() {
            match engine.mine_layout.validate_coords(m.coords()) {
                Ok(coords) => engine.board[coords.to_nd_index()] = Some(m.state()),
                Err(_) => log::warn!("Ignoring recorded move outside the board at {:?}", m.coords()),
            }
        }

        engine
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<MoveState> {
        self.board[coords.to_nd_index()]
    }

    /// Applies a single player action.
    ///
    /// A concluded session rejects the move without side effects. Coordinates
    /// outside the board are an error.
    pub fn apply(&mut self, action: MoveAction, coords: Coord2) -> Result<VisitOutcome> {
        if self.is_finished() {
            return Ok(VisitOutcome::Concluded(self.state));
        }

        let coords = self.mine_layout.validate_coords(coords)?;

        let changes = match action {
            MoveAction::Flag => vec![self.record(coords, MoveState::Flagged)],
            MoveAction::MarkUnknown => vec![self.record(coords, MoveState::Unknown)],
            MoveAction::Reveal if self.mine_layout.contains_mine(coords) => {
                log::debug!("Mine hit at {:?}", coords);
                let change = self.record(coords, MoveState::Exploded);
                self.state = SessionState::Exploded;
                return Ok(VisitOutcome::Applied {
                    changes: vec![change],
                    state: self.state,
                });
            }
            MoveAction::Reveal => self.clear_area(coords),
        };

        self.state = self.compute_state();
        Ok(VisitOutcome::Applied {
            changes,
            state: self.state,
        })
    }

    /// Clears the 4-connected region of non-mine cells reachable from `start`.
    ///
    /// Expansion does not stop at cells with nearby mines; it halts only at
    /// mines, board edges, and cells already cleared, exploded or flagged.
    fn clear_area(&mut self, start: Coord2) -> Vec<CellChange> {
        let mut visited: Array2<bool> = Array2::default(self.size().to_nd_index());
        let mut to_visit = vec![start];
        let mut changes = Vec::new();

        while let Some(coords) = to_visit.pop() {
            let index = coords.to_nd_index();
            if visited[index]
                || self.mine_layout.contains_mine(coords)
                || self.board[index].is_some_and(MoveState::is_known)
            {
                continue;
            }

            visited[index] = true;
            changes.push(self.record(coords, MoveState::Cleared));

            // reversed so neighbors pop in x-1, x+1, y-1, y+1 order
            let neighbors: Vec<_> = self.mine_layout.iter_orthogonal(coords).collect();
            to_visit.extend(neighbors.into_iter().rev().filter(|pos| !visited[pos.to_nd_index()]));
        }

        log::trace!("Cleared {} cells from {:?}", changes.len(), start);
        changes
    }

    fn record(&mut self, coords: Coord2, state: MoveState) -> CellChange {
        self.board[coords.to_nd_index()] = Some(state);
        CellChange { coords, state }
    }

    /// Cleared cells and flagged cells both count towards completion.
    fn compute_state(&self) -> SessionState {
        let mut resolved: CellCount = 0;

        for cell in self.board.iter().flatten() {
            match cell {
                MoveState::Exploded => return SessionState::Exploded,
                MoveState::Cleared | MoveState::Flagged => resolved += 1,
                MoveState::Unknown => {}
            }
        }

        if resolved == self.mine_layout.total_cells() {
            SessionState::Cleared
        } else {
            SessionState::Active
        }
    }
}
